//! Ordered, duplicate-free tag collection
//!
//! Backed by a sorted `Vec<String>` with binary-search insertion. Order is
//! plain byte-wise lexicographic (`str::cmp`), so tags are case-sensitive.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique tags kept in strictly ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet { tags: Vec::new() }
    }

    /// Insert a tag at its sorted position.
    ///
    /// Returns `false` (and leaves the set untouched) when the tag is
    /// already present.
    pub fn insert(&mut self, tag: impl AsRef<str>) -> bool {
        let tag = tag.as_ref();
        let inserted = match self.tags.binary_search_by(|probe| probe.as_str().cmp(tag)) {
            Ok(_) => false,
            Err(pos) => {
                self.tags.insert(pos, tag.to_string());
                true
            }
        };
        debug_assert!(self.is_strictly_ascending(), "tag set lost its ordering");
        inserted
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }

    fn is_strictly_ascending(&self) -> bool {
        self.tags.windows(2).all(|pair| pair[0] < pair[1])
    }
}

impl<S: AsRef<str>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for TagSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// Renders as `#a #b #c`
impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "#{}", tag)?;
        }
        Ok(())
    }
}
