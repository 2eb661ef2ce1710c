//! Error types for dataset loading and analysis

use cohort_algorithms::{GraphError, UserId};
use thiserror::Error;

/// Errors that can occur while loading a dataset or its configuration
#[derive(Error, Debug)]
pub enum CohortError {
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Population of {count} users exceeds the configured maximum of {max}")]
    PopulationExceeded { count: usize, max: usize },

    #[error("User u{user} has {count} tags, more than the maximum of {max}")]
    TooManyTags { user: UserId, count: usize, max: usize },

    #[error("User u{user} tag '{tag}' is longer than {max} characters")]
    TagTooLong { user: UserId, tag: String, max: usize },

    #[error("User u{user} has an invalid tag '{tag}'")]
    InvalidTag { user: UserId, tag: String },

    #[error("Expected user u{expected}, found u{found}")]
    UnexpectedUser { expected: UserId, found: UserId },

    #[error("Friendship matrix has {found} rows, expected {expected}")]
    MissingRows { expected: usize, found: usize },

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CohortResult<T> = Result<T, CohortError>;

impl CohortError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        CohortError::Parse {
            line,
            message: message.into(),
        }
    }
}
