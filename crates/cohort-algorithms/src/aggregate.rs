//! Topic tag aggregation for core users

use super::classify::CoreCandidate;
use super::common::UserId;
use super::tag_set::TagSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Source of each user's tags, in the user's stored order
pub trait TagLookup {
    fn tags(&self, user: UserId) -> &[String];
}

impl TagLookup for [Vec<String>] {
    fn tags(&self, user: UserId) -> &[String] {
        &self[user]
    }
}

impl TagLookup for Vec<Vec<String>> {
    fn tags(&self, user: UserId) -> &[String] {
        &self[user]
    }
}

/// A core user with its close friends and their combined tags
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoreUserResult {
    pub user: UserId,
    pub close_friends: Vec<UserId>,
    pub tags: TagSet,
}

/// Union of the core user's tags and those of each close friend.
///
/// The core user's tags go in first, then each friend's in the order given.
pub fn aggregate_tags<L>(core_user: UserId, close_friends: &[UserId], lookup: &L) -> TagSet
where
    L: TagLookup + ?Sized,
{
    let mut set = TagSet::new();
    set.extend(lookup.tags(core_user));
    for &friend in close_friends {
        set.extend(lookup.tags(friend));
    }
    set
}

impl CoreCandidate {
    /// Attach the aggregated tags to this candidate
    pub fn with_tags<L>(self, lookup: &L) -> CoreUserResult
    where
        L: TagLookup + ?Sized,
    {
        let tags = aggregate_tags(self.user, &self.close_friends, lookup);
        CoreUserResult {
            user: self.user,
            close_friends: self.close_friends,
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&[&str]]) -> Vec<Vec<String>> {
        list.iter()
            .map(|user| user.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_aggregate_merges_and_sorts() {
        let lookup = tags(&[
            &["zebra", "apple"],
            &["apple", "mango"],
            &["kiwi"],
            &["banana"],
        ]);

        let set = aggregate_tags(0, &[1, 3], &lookup);
        assert_eq!(set.as_slice(), &["apple", "banana", "mango", "zebra"]);
    }

    #[test]
    fn test_aggregate_without_friends_uses_own_tags() {
        let lookup = tags(&[&["b", "a", "b"]]);
        let set = aggregate_tags(0, &[], &lookup);
        assert_eq!(set.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_aggregate_with_no_tags_is_empty() {
        let lookup = tags(&[&[], &[]]);
        assert!(aggregate_tags(0, &[1], &lookup).is_empty());
    }

    #[test]
    fn test_each_core_user_starts_fresh() {
        let lookup = tags(&[&["a"], &["b"], &["c"]]);
        let first = CoreCandidate { user: 0, close_friends: vec![1] }.with_tags(&lookup);
        let second = CoreCandidate { user: 2, close_friends: vec![] }.with_tags(&lookup);

        assert_eq!(first.tags.as_slice(), &["a", "b"]);
        assert_eq!(second.tags.as_slice(), &["c"]);
        assert_eq!(first.close_friends, vec![1]);
    }

    #[test]
    fn test_slice_lookup() {
        let lookup = tags(&[&["x"], &["y"]]);
        let set = aggregate_tags(1, &[0], lookup.as_slice());
        assert_eq!(set.as_slice(), &["x", "y"]);
    }
}
