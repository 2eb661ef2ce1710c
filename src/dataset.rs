//! Users and their friendship relation

use crate::config::PopulationLimits;
use crate::error::{CohortError, CohortResult};
use cohort_algorithms::{FriendshipGraph, TagLookup, UserId};
use serde::{Deserialize, Serialize};

/// A user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub join_date: i64,
    /// Topic tags without the leading `#`, in input order
    pub tags: Vec<String>,
}

impl User {
    pub fn new(id: UserId, join_date: i64, tags: Vec<String>) -> Self {
        Self { id, join_date, tags }
    }
}

/// A fully validated population: users `0..N` and their N×N friendship relation
#[derive(Debug, Clone)]
pub struct Dataset {
    users: Vec<User>,
    graph: FriendshipGraph,
}

impl Dataset {
    /// Validate and assemble a dataset.
    ///
    /// Users must be numbered `0..N` in order, the graph must cover exactly
    /// `N` users, and every limit in `limits` must hold.
    pub fn new(
        users: Vec<User>,
        graph: FriendshipGraph,
        limits: &PopulationLimits,
    ) -> CohortResult<Self> {
        if users.len() > limits.max_users {
            return Err(CohortError::PopulationExceeded {
                count: users.len(),
                max: limits.max_users,
            });
        }

        for (expected, user) in users.iter().enumerate() {
            if user.id != expected {
                return Err(CohortError::UnexpectedUser {
                    expected,
                    found: user.id,
                });
            }
            validate_tags(user, limits)?;
        }

        if graph.user_count() != users.len() {
            return Err(CohortError::MissingRows {
                expected: users.len(),
                found: graph.user_count(),
            });
        }

        Ok(Self { users, graph })
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn graph(&self) -> &FriendshipGraph {
        &self.graph
    }

    /// The user with the most tags. Ties go to the lowest id; `None` when
    /// nobody has a tag.
    pub fn most_tagged_user(&self) -> Option<&User> {
        let mut best: Option<&User> = None;
        for user in &self.users {
            let current = best.map_or(0, |b| b.tags.len());
            if user.tags.len() > current {
                best = Some(user);
            }
        }
        best
    }
}

impl TagLookup for Dataset {
    fn tags(&self, user: UserId) -> &[String] {
        &self.users[user].tags
    }
}

fn validate_tags(user: &User, limits: &PopulationLimits) -> CohortResult<()> {
    if user.tags.len() > limits.max_tags_per_user {
        return Err(CohortError::TooManyTags {
            user: user.id,
            count: user.tags.len(),
            max: limits.max_tags_per_user,
        });
    }

    for tag in &user.tags {
        if tag.is_empty() || tag.starts_with('#') || tag.chars().any(char::is_whitespace) {
            return Err(CohortError::InvalidTag {
                user: user.id,
                tag: tag.clone(),
            });
        }
        if tag.chars().count() > limits.max_tag_len {
            return Err(CohortError::TagTooLong {
                user: user.id,
                tag: tag.clone(),
                max: limits.max_tag_len,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, tags: &[&str]) -> User {
        User::new(id, 20230101, tags.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_valid_dataset() {
        let users = vec![user(0, &["a"]), user(1, &["b", "c"])];
        let graph = FriendshipGraph::from_edges(2, &[(0, 1)]);
        let dataset = Dataset::new(users, graph, &PopulationLimits::default()).unwrap();

        assert_eq!(dataset.user_count(), 2);
        assert_eq!(dataset.user(1).unwrap().tags, vec!["b", "c"]);
        assert!(dataset.user(2).is_none());
        assert_eq!(dataset.tags(0), &["a".to_string()]);
    }

    #[test]
    fn test_population_limit() {
        let users: Vec<User> = (0..4).map(|i| user(i, &[])).collect();
        let limits = PopulationLimits {
            max_users: 3,
            ..Default::default()
        };
        let err = Dataset::new(users, FriendshipGraph::empty(4), &limits).unwrap_err();
        assert!(matches!(err, CohortError::PopulationExceeded { count: 4, max: 3 }));
    }

    #[test]
    fn test_users_must_be_sequential() {
        let users = vec![user(0, &[]), user(2, &[])];
        let err = Dataset::new(users, FriendshipGraph::empty(2), &PopulationLimits::default())
            .unwrap_err();
        assert!(matches!(err, CohortError::UnexpectedUser { expected: 1, found: 2 }));
    }

    #[test]
    fn test_graph_size_must_match() {
        let users = vec![user(0, &[]), user(1, &[])];
        let err = Dataset::new(users, FriendshipGraph::empty(3), &PopulationLimits::default())
            .unwrap_err();
        assert!(matches!(err, CohortError::MissingRows { expected: 2, found: 3 }));
    }

    #[test]
    fn test_tag_limits() {
        let limits = PopulationLimits {
            max_tags_per_user: 2,
            max_tag_len: 5,
            ..Default::default()
        };

        let err = Dataset::new(vec![user(0, &["a", "b", "c"])], FriendshipGraph::empty(1), &limits)
            .unwrap_err();
        assert!(matches!(err, CohortError::TooManyTags { user: 0, count: 3, max: 2 }));

        let err = Dataset::new(vec![user(0, &["toolong"])], FriendshipGraph::empty(1), &limits)
            .unwrap_err();
        assert!(matches!(err, CohortError::TagTooLong { user: 0, .. }));

        let err = Dataset::new(vec![user(0, &["#a"])], FriendshipGraph::empty(1), &limits)
            .unwrap_err();
        assert!(matches!(err, CohortError::InvalidTag { user: 0, .. }));
    }

    #[test]
    fn test_most_tagged_user_prefers_lowest_id() {
        let users = vec![user(0, &["a"]), user(1, &["a", "b"]), user(2, &["c", "d"])];
        let dataset =
            Dataset::new(users, FriendshipGraph::empty(3), &PopulationLimits::default()).unwrap();
        assert_eq!(dataset.most_tagged_user().unwrap().id, 1);
    }

    #[test]
    fn test_most_tagged_user_none_without_tags() {
        let users = vec![user(0, &[]), user(1, &[])];
        let dataset =
            Dataset::new(users, FriendshipGraph::empty(2), &PopulationLimits::default()).unwrap();
        assert!(dataset.most_tagged_user().is_none());
    }
}
