pub mod common;
pub mod tag_set;
pub mod similarity;
pub mod classify;
pub mod aggregate;

pub use common::{FriendshipGraph, GraphError, GraphResult, UserId};
pub use tag_set::TagSet;
pub use similarity::{strength, StrengthMatrix};
pub use classify::{classify, close_friends, ClassifierConfig, CoreCandidate};
pub use aggregate::{aggregate_tags, CoreUserResult, TagLookup};
