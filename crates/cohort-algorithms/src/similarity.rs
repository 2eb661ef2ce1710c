//! Connection strength between users
//!
//! Jaccard overlap of the two users' friend rows, gated on a direct
//! friendship: two users who are not friends have strength 0.0 no matter
//! how many friends they share. A user is never its own friend for this
//! purpose, so the diagonal of the matrix is always 0.0; diagonal cells of
//! the adjacency still take part in the overlap of distinct users.

use super::common::{FriendshipGraph, UserId};
use ndarray::Array2;

/// Strength of the connection from `u1` to `u2`.
///
/// Returns `intersect / union` over the two adjacency rows when `u1` lists
/// `u2` as a friend and `u1 != u2`, `0.0` otherwise. An empty union also
/// yields `0.0`.
pub fn strength(u1: UserId, u2: UserId, graph: &FriendshipGraph) -> f64 {
    if !graph.is_friend(u1, u2) || u1 == u2 {
        return 0.0;
    }

    let row1 = graph.row(u1);
    let row2 = graph.row(u2);

    let mut union_count = 0usize;
    let mut intersect_count = 0usize;
    for (&a, &b) in row1.iter().zip(row2.iter()) {
        if a || b {
            union_count += 1;
            if a && b {
                intersect_count += 1;
            }
        }
    }

    // Unreachable while the u1 -> u2 link counts towards the union, kept so
    // that the division is always defined.
    if union_count == 0 {
        return 0.0;
    }

    intersect_count as f64 / union_count as f64
}

/// Dense N×N matrix of connection strengths, written once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthMatrix {
    scores: Array2<f64>,
}

impl StrengthMatrix {
    /// Compute the strength of every ordered pair, the diagonal included.
    ///
    /// No symmetry shortcut is taken: `(u1, u2)` and `(u2, u1)` are each
    /// computed from their own rows.
    pub fn compute(graph: &FriendshipGraph) -> Self {
        let n = graph.user_count();
        let scores = Array2::from_shape_fn((n, n), |(u1, u2)| strength(u1, u2, graph));
        StrengthMatrix { scores }
    }

    pub fn user_count(&self) -> usize {
        self.scores.nrows()
    }

    /// Strength from `u1` to `u2`. Panics on an out-of-range index.
    pub fn get(&self, u1: UserId, u2: UserId) -> f64 {
        let n = self.user_count();
        assert!(
            u1 < n && u2 < n,
            "strength index ({}, {}) out of range for population of {}",
            u1,
            u2,
            n
        );
        self.scores[[u1, u2]]
    }

    /// Strengths from `user` to every user, in ascending user order
    pub fn row(&self, user: UserId) -> ndarray::ArrayView1<'_, f64> {
        self.scores.row(user)
    }

    /// Copy of the matrix as nested rows, for reporting
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.scores.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.scores == self.scores.t()
    }
}
