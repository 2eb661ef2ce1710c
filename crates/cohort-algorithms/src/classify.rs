//! Core user classification
//!
//! A user is *core* when the number of its close friends (users whose
//! strength from it strictly exceeds the strength threshold) strictly
//! exceeds the core threshold.

use super::common::UserId;
use super::similarity::StrengthMatrix;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifier thresholds. Both bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClassifierConfig {
    /// A user is a close friend when its strength is greater than this
    pub strength_threshold: f64,
    /// A user is core when its close-friend count is greater than this
    pub core_threshold: usize,
}

impl ClassifierConfig {
    pub fn new(strength_threshold: f64, core_threshold: usize) -> Self {
        Self {
            strength_threshold,
            core_threshold,
        }
    }
}

/// A core user and its close friends, before tag aggregation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreCandidate {
    pub user: UserId,
    /// Ascending user ids
    pub close_friends: Vec<UserId>,
}

/// Users whose strength from `user` is strictly greater than `threshold`,
/// in ascending order. The user itself is not skipped.
pub fn close_friends(matrix: &StrengthMatrix, user: UserId, threshold: f64) -> Vec<UserId> {
    (0..matrix.user_count())
        .filter(|&other| matrix.get(user, other) > threshold)
        .collect()
}

/// Scan every user in ascending order and keep the core ones
pub fn classify(matrix: &StrengthMatrix, config: &ClassifierConfig) -> Vec<CoreCandidate> {
    (0..matrix.user_count())
        .filter_map(|user| {
            let friends = close_friends(matrix, user, config.strength_threshold);
            (friends.len() > config.core_threshold).then(|| CoreCandidate {
                user,
                close_friends: friends,
            })
        })
        .collect()
}
