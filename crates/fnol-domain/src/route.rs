//! Route module - the five-valued routing outcome

use serde::{Deserialize, Serialize};

/// Recommended downstream processing route for a claim
///
/// Exactly one of these is chosen per document by the routing engine's
/// prioritized decision procedure:
/// - Manual review: one or more mandatory fields are missing
/// - Investigation: the description contains an investigation keyword
/// - Specialist Queue: the claim type is "injury"
/// - Fast-track: estimated damage below the fast-track threshold
/// - Standard processing: everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// A mandatory field is absent
    #[serde(rename = "Manual review")]
    ManualReview,

    /// Description matched an investigation keyword
    #[serde(rename = "Investigation")]
    Investigation,

    /// Injury claims go to a specialist
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,

    /// Estimated damage strictly below the threshold
    #[serde(rename = "Fast-track")]
    FastTrack,

    /// Default route
    #[serde(rename = "Standard processing")]
    Standard,
}

impl Route {
    /// Get the route name as its wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::ManualReview => "Manual review",
            Route::Investigation => "Investigation",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast-track",
            Route::Standard => "Standard processing",
        }
    }

    /// Parse a route from its wire string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Manual review" => Some(Route::ManualReview),
            "Investigation" => Some(Route::Investigation),
            "Specialist Queue" => Some(Route::SpecialistQueue),
            "Fast-track" => Some(Route::FastTrack),
            "Standard processing" => Some(Route::Standard),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Route {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid route: {}", s))
    }
}
