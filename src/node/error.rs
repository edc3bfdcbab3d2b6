use thiserror::Error;

/// Errors that can occur while reading a node list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeParseError {
    #[error("Line {line}: expected two comma-separated coordinates")]
    MissingCoordinate { line: usize },

    #[error("Line {line}: invalid coordinate '{value}'")]
    InvalidNumber { line: usize, value: String },

    #[error("Line {line}: coordinate is not finite")]
    NonFinite { line: usize },
}
