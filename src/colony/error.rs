use thiserror::Error;

use crate::node::NodeId;

/// Errors raised while building or stepping a colony.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColonyError {
    #[error("Invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error(
        "Internal inconsistency: no selectable candidate from node {position} \
         with {remaining} node(s) left to visit"
    )]
    InternalInconsistency { position: NodeId, remaining: usize },
}

impl ColonyError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        ColonyError::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_display() {
        let e = ColonyError::invalid("rho", "must lie in [0, 1], got 1.5");
        assert_eq!(
            e.to_string(),
            "Invalid configuration: rho must lie in [0, 1], got 1.5"
        );
    }

    #[test]
    fn internal_inconsistency_display() {
        let e = ColonyError::InternalInconsistency {
            position: 4,
            remaining: 2,
        };
        let s = e.to_string();
        assert!(s.contains("node 4"));
        assert!(s.contains("2 node(s)"));
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            ColonyError::invalid("ant_count", "must be at least 1"),
            ColonyError::invalid("ant_count", "must be at least 1")
        );
        assert_ne!(
            ColonyError::invalid("alpha", "x"),
            ColonyError::invalid("beta", "x")
        );
    }
}
