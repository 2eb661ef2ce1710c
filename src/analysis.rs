//! Analysis pipeline
//!
//! Algorithms live in the `cohort-algorithms` crate.
//! This module wires them to a [`Dataset`] and collects the results.

use crate::dataset::Dataset;
use cohort_algorithms::{classify, StrengthMatrix, UserId};
use serde::Serialize;
use tracing::{debug, info};

// Re-export algorithms
pub use cohort_algorithms::{ClassifierConfig, CoreUserResult, TagSet};

/// The most-tagged user and its tags, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLeader {
    pub user: UserId,
    pub tags: Vec<String>,
}

/// Population overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub user_count: usize,
    pub most_tagged: Option<TagLeader>,
}

/// Everything one analysis run produces
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub strength: StrengthMatrix,
    pub thresholds: ClassifierConfig,
    /// Core users in ascending id order
    pub cores: Vec<CoreUserResult>,
}

impl AnalysisReport {
    /// Strength between `u0` and `u1`, when both exist
    pub fn first_pair_strength(&self) -> Option<f64> {
        (self.strength.user_count() >= 2).then(|| self.strength.get(0, 1))
    }
}

/// Summarize the population
pub fn summarize(dataset: &Dataset) -> Summary {
    Summary {
        user_count: dataset.user_count(),
        most_tagged: dataset.most_tagged_user().map(|user| TagLeader {
            user: user.id,
            tags: user.tags.clone(),
        }),
    }
}

/// Run the full pipeline: strengths, core users, tag aggregation
pub fn analyze(dataset: &Dataset, thresholds: &ClassifierConfig) -> AnalysisReport {
    let summary = summarize(dataset);

    let strength = StrengthMatrix::compute(dataset.graph());
    info!(
        "Computed {}x{} strength matrix",
        strength.user_count(),
        strength.user_count()
    );

    let cores: Vec<CoreUserResult> = classify(&strength, thresholds)
        .into_iter()
        .map(|candidate| {
            let result = candidate.with_tags(dataset);
            debug!(
                "Core user u{}: {} close friends, {} tags",
                result.user,
                result.close_friends.len(),
                result.tags.len()
            );
            result
        })
        .collect();
    info!(
        "Found {} core users (strength > {}, close friends > {})",
        cores.len(),
        thresholds.strength_threshold,
        thresholds.core_threshold
    );

    AnalysisReport {
        summary,
        strength,
        thresholds: *thresholds,
        cores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PopulationLimits;
    use crate::dataset::User;
    use cohort_algorithms::FriendshipGraph;

    fn dataset(tags: &[&[&str]], graph: FriendshipGraph) -> Dataset {
        let users = tags
            .iter()
            .enumerate()
            .map(|(id, t)| User::new(id, 0, t.iter().map(|s| s.to_string()).collect()))
            .collect();
        Dataset::new(users, graph, &PopulationLimits::default()).unwrap()
    }

    #[test]
    fn test_fully_connected_trio() {
        let graph = FriendshipGraph::from_rows(&vec![vec![true; 3]; 3]).unwrap();
        let data = dataset(&[&["a"], &["a"], &["a"]], graph);

        let report = analyze(&data, &ClassifierConfig::new(0.5, 1));

        assert_eq!(report.first_pair_strength(), Some(1.0));
        assert_eq!(report.cores.len(), 3);
        for (i, core) in report.cores.iter().enumerate() {
            assert_eq!(core.user, i);
            let others: Vec<UserId> = (0..3).filter(|&u| u != i).collect();
            assert_eq!(core.close_friends, others);
            assert_eq!(core.tags.as_slice(), &["a"]);
        }
    }

    #[test]
    fn test_tags_come_from_core_and_close_friends_only() {
        // Clique 0-1-2-3, 4 attached to 0
        let graph = FriendshipGraph::from_edges(
            5,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (0, 4)],
        );
        let data = dataset(
            &[&["hub"], &["rust", "go"], &["go", "c"], &["zig"], &["outsider"]],
            graph,
        );

        let report = analyze(&data, &ClassifierConfig::new(0.45, 1));

        let users: Vec<UserId> = report.cores.iter().map(|c| c.user).collect();
        assert_eq!(users, vec![1, 2, 3]);
        assert_eq!(report.cores[0].tags.as_slice(), &["c", "go", "rust", "zig"]);
        assert_eq!(report.cores[2].close_friends, vec![1, 2]);
        assert!(report.cores.iter().all(|c| !c.tags.contains("outsider")));
    }

    #[test]
    fn test_summary() {
        let graph = FriendshipGraph::empty(2);
        let data = dataset(&[&["x"], &["y", "z"]], graph);
        let summary = summarize(&data);
        assert_eq!(summary.user_count, 2);
        assert_eq!(
            summary.most_tagged,
            Some(TagLeader {
                user: 1,
                tags: vec!["y".to_string(), "z".to_string()]
            })
        );
    }

    #[test]
    fn test_single_user_has_no_first_pair() {
        let data = dataset(&[&["solo"]], FriendshipGraph::empty(1));
        let report = analyze(&data, &ClassifierConfig::new(0.0, 0));
        assert_eq!(report.first_pair_strength(), None);
        assert!(report.cores.is_empty());
    }
}
