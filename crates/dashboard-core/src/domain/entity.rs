//! Domain Layer - Core Entity Trait
//!
//! Every record the dashboard reconciles by id implements [`Entity`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    /// Coordinate mapping over a window whose start equals its end.
    #[error("Project window has zero length")]
    EmptyWindow,
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl DomainError {
    /// True for failures caused by the network or the remote service,
    /// as opposed to bad input on our side.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DomainError::Transport(_) | DomainError::Http { .. } | DomainError::Decode(_)
        )
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            DomainError::Decode(e.to_string())
        } else {
            DomainError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_classification() {
        assert!(DomainError::Transport("refused".into()).is_remote());
        assert!(DomainError::Http { status: 500, url: "/x".into() }.is_remote());
        assert!(!DomainError::NotFound("milestone 3".into()).is_remote());
        assert!(!DomainError::EmptyWindow.is_remote());
    }

    #[test]
    fn test_display() {
        let err = DomainError::Http { status: 503, url: "http://api/tasks".into() };
        assert_eq!(err.to_string(), "HTTP 503 from http://api/tasks");
        assert_eq!(DomainError::NotFound("milestone 9".into()).to_string(), "Not found: milestone 9");
    }
}
