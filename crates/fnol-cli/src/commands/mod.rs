//! Command implementations.

mod batch;
mod parse;

pub use batch::{execute_batch, run_batch, BatchSummary};
pub use parse::{execute_parse, route_document};
