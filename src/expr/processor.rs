//! Processing API for expression inputs
//!
//! Selects an output format by name and renders the parse of one input in it.
//!
//! | format       | accepted input        | rejected input             |
//! |--------------|-----------------------|----------------------------|
//! | `treeviz`    | box-drawing tree      | `ProcessingError::Rejected`|
//! | `tag`        | XML-like tree         | `ProcessingError::Rejected`|
//! | `derivation` | leftmost derivation   | `ProcessingError::Rejected`|
//! | `trace`      | verdict + trace       | verdict + partial trace    |
//! | `json`       | serialized report     | serialized report          |
//! | `yaml`       | serialized report     | serialized report          |

use crate::expr::formats::{derivation_str, serialize_tree_tag, to_treeviz_str, trace_str};
use crate::expr::parser::{parse_with_options, ParseOptions};
use crate::expr::report::ParseReport;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Treeviz,
    Tag,
    Trace,
    Derivation,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Treeviz,
        OutputFormat::Tag,
        OutputFormat::Trace,
        OutputFormat::Derivation,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tag => "tag",
            OutputFormat::Trace => "trace",
            OutputFormat::Derivation => "derivation",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| ProcessingError::InvalidFormat(s.to_string()))
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0} (available: {})", available_formats().join(", "))]
    InvalidFormat(String),
    #[error("Invalid String: {0}")]
    Rejected(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Output of one processed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub accepted: bool,
    pub output: String,
}

/// Parse `input` and render it in `format`
pub fn process(
    input: &str,
    format: OutputFormat,
    options: ParseOptions,
) -> Result<Processed, ProcessingError> {
    let result = parse_with_options(input, options);
    let accepted = result.is_success();

    let tree = || {
        result
            .tree()
            .ok_or_else(|| ProcessingError::Rejected(result.reason().unwrap_or_default()))
    };
    let report = || ParseReport::from_result(input, &result);

    let output = match format {
        OutputFormat::Treeviz => to_treeviz_str(tree()?),
        OutputFormat::Tag => serialize_tree_tag(tree()?),
        OutputFormat::Derivation => derivation_str(tree()?),
        OutputFormat::Trace => {
            let report = report();
            let trace = trace_str(&report.steps);
            let verdict = format!("{}\n{}", report.headline(), report.message);
            if trace.is_empty() {
                verdict
            } else {
                format!("{}\n{}", verdict, trace)
            }
        }
        OutputFormat::Json => serde_json::to_string_pretty(&report())
            .map_err(|e| ProcessingError::Serialization(e.to_string()))?,
        OutputFormat::Yaml => serde_yaml::to_string(&report())
            .map_err(|e| ProcessingError::Serialization(e.to_string()))?,
    };

    Ok(Processed { accepted, output })
}

/// Get all available format names
pub fn available_formats() -> Vec<&'static str> {
    OutputFormat::ALL.iter().map(OutputFormat::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("treeviz".parse::<OutputFormat>(), Ok(OutputFormat::Treeviz));
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!(
            "xml".parse::<OutputFormat>(),
            Err(ProcessingError::InvalidFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_available_formats() {
        let formats = available_formats();
        assert_eq!(formats.len(), OutputFormat::ALL.len());
        for format in formats {
            assert!(format.parse::<OutputFormat>().is_ok());
        }
    }

    #[test]
    fn test_tree_formats_reject_invalid_input() {
        let err = process("id +", OutputFormat::Treeviz, ParseOptions::default()).unwrap_err();
        assert_eq!(err, ProcessingError::Rejected("Incomplete parse".to_string()));
        assert_eq!(err.to_string(), "Invalid String: Incomplete parse");
    }

    #[test]
    fn test_trace_reports_rejection() {
        let processed = process("xd", OutputFormat::Trace, ParseOptions::default()).unwrap();
        assert!(!processed.accepted);
        assert_eq!(
            processed.output,
            "Invalid String\nInvalid character at position 0: 'x'"
        );
    }

    #[test]
    fn test_json_report() {
        let processed = process("id * id", OutputFormat::Json, ParseOptions::default()).unwrap();
        assert!(processed.accepted);
        let json: serde_json::Value = serde_json::from_str(&processed.output).unwrap();
        assert_eq!(json["accepted"], true);
        assert_eq!(json["tree"]["nodes"][0]["symbol"], "E");
        assert_eq!(json["steps"][0]["rule"], "E → T + E | T");
        assert_eq!(json["steps"][0]["applied"], false);
    }

    #[test]
    fn test_yaml_report() {
        let processed = process("id", OutputFormat::Yaml, ParseOptions::default()).unwrap();
        assert!(processed.output.contains("accepted: true"));
        assert!(processed.output.contains("kind: non-terminal"));
    }

    #[test]
    fn test_trace_of_accepted_input() {
        let processed = process("id", OutputFormat::Trace, ParseOptions::default()).unwrap();
        let lines: Vec<&str> = processed.output.lines().collect();
        assert_eq!(lines[0], "Valid String!");
        assert_eq!(lines[1], "The string \"id\" is accepted by the grammar.");
        assert_eq!(lines.len(), 6);
    }
}
