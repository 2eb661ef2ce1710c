//! Shared types for the cohort algorithms
//!
//! Provides a read-only, dense view of the friendship relation for algorithm execution.

use ndarray::Array2;
use thiserror::Error;

/// User identifier: a dense index in `0..N`
pub type UserId = usize;

/// Errors raised while building a [`FriendshipGraph`]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("Adjacency row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// A dense N×N friendship relation.
///
/// The relation is stored exactly as given: symmetry is neither assumed nor
/// enforced, and the diagonal is whatever the input says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendshipGraph {
    adjacency: Array2<bool>,
}

impl FriendshipGraph {
    /// Create a graph of `user_count` users with no friendships
    pub fn empty(user_count: usize) -> Self {
        FriendshipGraph {
            adjacency: Array2::from_elem((user_count, user_count), false),
        }
    }

    /// Build a graph from a full row-by-row fill of the adjacency relation.
    ///
    /// The number of rows defines the population; every row must have
    /// exactly that many entries.
    pub fn from_rows<R>(rows: &[R]) -> GraphResult<Self>
    where
        R: AsRef<[bool]>,
    {
        let n = rows.len();
        let mut adjacency = Array2::from_elem((n, n), false);

        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(GraphError::RaggedRow {
                    row: u,
                    expected: n,
                    found: row.len(),
                });
            }
            for (v, &linked) in row.iter().enumerate() {
                adjacency[[u, v]] = linked;
            }
        }

        Ok(FriendshipGraph { adjacency })
    }

    /// Build a graph from undirected edges, marking both directions
    pub fn from_edges(user_count: usize, edges: &[(UserId, UserId)]) -> Self {
        let mut graph = Self::empty(user_count);
        for &(u, v) in edges {
            graph.set_friend(u, v, true);
            graph.set_friend(v, u, true);
        }
        graph
    }

    /// Number of users in the population
    pub fn user_count(&self) -> usize {
        self.adjacency.nrows()
    }

    /// Whether `u1` lists `u2` as a friend.
    ///
    /// Panics when either index is outside `0..user_count()`.
    pub fn is_friend(&self, u1: UserId, u2: UserId) -> bool {
        self.check_index(u1);
        self.check_index(u2);
        self.adjacency[[u1, u2]]
    }

    /// Set a single directed cell of the relation
    pub fn set_friend(&mut self, u1: UserId, u2: UserId, linked: bool) {
        self.check_index(u1);
        self.check_index(u2);
        self.adjacency[[u1, u2]] = linked;
    }

    /// Adjacency row of `user`
    pub fn row(&self, user: UserId) -> ndarray::ArrayView1<'_, bool> {
        self.check_index(user);
        self.adjacency.row(user)
    }

    /// Friends of `user` in ascending order
    pub fn friends(&self, user: UserId) -> Vec<UserId> {
        self.row(user)
            .iter()
            .enumerate()
            .filter_map(|(v, &linked)| linked.then_some(v))
            .collect()
    }

    /// Whether `is_friend(u, v) == is_friend(v, u)` for every pair
    pub fn is_symmetric(&self) -> bool {
        self.adjacency == self.adjacency.t()
    }

    fn check_index(&self, user: UserId) {
        let n = self.user_count();
        assert!(user < n, "user index {} out of range for population of {}", user, n);
    }
}
