//! Cohort
//!
//! Connection strength, core users and shared topics for small social
//! networks.
//!
//! A run loads a population of users (join date, topic tags) and their
//! friendship matrix, computes the neighbor-overlap strength of every pair
//! of users, flags as *core* the users with enough strongly connected
//! friends, and collects the topic tags shared across each core user's
//! circle.
//!
//! ## Example Usage
//!
//! ```rust
//! use cohort::{analyze, parse_input, CohortConfig};
//!
//! let input = "\
//! u0 20230101 #rust
//! u1 20230102 #go
//! u2 20230103 #zig
//! 1 1 1
//! 1 1 1
//! 1 1 1
//! 0.5 1
//! ";
//!
//! let config = CohortConfig::default();
//! let parsed = parse_input(input, &config.limits).unwrap();
//! let report = analyze(&parsed.dataset, &parsed.thresholds.unwrap());
//!
//! assert_eq!(report.cores.len(), 3);
//! assert_eq!(report.cores[0].close_friends, vec![1, 2]);
//! assert_eq!(report.cores[0].tags.as_slice(), &["go", "rust", "zig"]);
//! ```

#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ingest;
pub mod report;

// Re-export main types for convenience
pub use analysis::{analyze, summarize, AnalysisReport, Summary, TagLeader};
pub use config::{CohortConfig, PopulationLimits, ReportConfig};
pub use dataset::{Dataset, User};
pub use error::{CohortError, CohortResult};
pub use ingest::{parse_input, read_input, ParsedInput};
pub use report::{render_json, render_text, wrap_hashtags, ReportDocument};

pub use cohort_algorithms::{
    ClassifierConfig, CoreUserResult, FriendshipGraph, StrengthMatrix, TagSet, UserId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
