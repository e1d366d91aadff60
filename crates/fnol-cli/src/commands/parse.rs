//! Parse command - extract and route a single document.

use crate::cli::ParseArgs;
use crate::error::Result;
use fnol_decode::TextOrigin;
use fnol_domain::RoutingResult;
use fnol_extractor::Extractor;
use std::path::Path;

/// Decode a document from disk and run it through the engine.
///
/// Text recovered from a converted format is passed through the
/// line-noise filter first; plain text goes in verbatim.
pub fn route_document(extractor: &Extractor, path: &Path) -> Result<RoutingResult> {
    let decoded = fnol_decode::decode_file(path)?;

    let text = if decoded.origin == TextOrigin::Converted {
        extractor.strip_line_noise(&decoded.text)
    } else {
        decoded.text
    };

    Ok(extractor.extract_and_route(&text))
}

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, extractor: &Extractor) -> Result<()> {
    let result = route_document(extractor, &args.file)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_route_document_from_txt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notice.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Policy Number: POL-42").unwrap();
        writeln!(file, "Description: Hail damage to the conservatory roof.").unwrap();

        let extractor = Extractor::default_config().unwrap();
        let result = route_document(&extractor, &path).unwrap();

        assert_eq!(
            result.extracted_fields.policy_number.as_deref(),
            Some("POL-42")
        );
    }

    #[test]
    fn test_route_document_rejects_unknown_format() {
        let extractor = Extractor::default_config().unwrap();
        let result = route_document(&extractor, Path::new("claim.docx"));
        assert!(matches!(
            result,
            Err(crate::error::CliError::Decode(
                fnol_decode::DecodeError::UnsupportedFormat(_)
            ))
        ));
    }
}
