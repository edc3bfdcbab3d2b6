use thiserror::Error;

use crate::colony::ColonyError;
use crate::node::NodeParseError;

/// Errors raised by the batch driver.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Invalid batch configuration: {parameter} {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Colony(#[from] ColonyError),

    #[error(transparent)]
    Nodes(#[from] NodeParseError),

    #[error("Failed to write distance log: {0}")]
    Io(#[from] std::io::Error),
}
