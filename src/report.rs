//! Report rendering
//!
//! The text report is laid out in four stages: population summary, the
//! `u0`/`u1` strength, the full strength matrix, and the core users with
//! their aggregated hashtags.

use crate::analysis::{AnalysisReport, ClassifierConfig, CoreUserResult, Summary};
use crate::config::ReportConfig;
use serde::Serialize;
use std::fmt::Write;

const STAGE_RULE: &str = "==========";

/// Serializable view of an [`AnalysisReport`]
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub summary: &'a Summary,
    pub first_pair_strength: Option<f64>,
    pub strength: Vec<Vec<f64>>,
    pub thresholds: &'a ClassifierConfig,
    pub cores: &'a [CoreUserResult],
}

impl<'a> From<&'a AnalysisReport> for ReportDocument<'a> {
    fn from(report: &'a AnalysisReport) -> Self {
        ReportDocument {
            summary: &report.summary,
            first_pair_strength: report.first_pair_strength(),
            strength: report.strength.to_rows(),
            thresholds: &report.thresholds,
            cores: &report.cores,
        }
    }
}

/// Render the report as pretty JSON
pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportDocument::from(report))
}

/// Render the staged text report
pub fn render_text(report: &AnalysisReport, config: &ReportConfig) -> String {
    let mut out = String::new();
    let precision = config.precision;

    stage_header(&mut out, 1);
    let _ = writeln!(out, "Number of users: {}", report.summary.user_count);
    match &report.summary.most_tagged {
        Some(leader) => {
            let _ = writeln!(out, "u{} has the largest number of hashtags:", leader.user);
            let _ = writeln!(out, "{}", hashtag_line(&leader.tags));
        }
        None => out.push_str("No user has any hashtags\n"),
    }
    out.push('\n');

    stage_header(&mut out, 2);
    match report.first_pair_strength() {
        Some(s) => {
            let _ = writeln!(
                out,
                "Strength of connection between u0 and u1: {:.*}",
                precision, s
            );
        }
        None => out.push_str("Not enough users to compare u0 and u1\n"),
    }
    out.push('\n');

    stage_header(&mut out, 3);
    for row in report.strength.to_rows() {
        let cells: Vec<String> = row.iter().map(|s| format!("{:.*}", precision, s)).collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out.push('\n');

    stage_header(&mut out, 4);
    for core in &report.cores {
        render_core(&mut out, core, config.tags_per_line);
    }

    out
}

fn stage_header(out: &mut String, stage: u8) {
    let _ = writeln!(out, "Stage {}\n{}", stage, STAGE_RULE);
}

fn render_core(out: &mut String, core: &CoreUserResult, tags_per_line: usize) {
    let _ = write!(out, "Stage 4.1. Core user: u{}; close friends:", core.user);
    for friend in &core.close_friends {
        let _ = write!(out, " u{}", friend);
    }
    out.push('\n');

    out.push_str("Stage 4.2. Hashtags:\n");
    for line in wrap_hashtags(core.tags.as_slice(), tags_per_line) {
        out.push_str(&line);
        out.push('\n');
    }
}

fn hashtag_line<S: AsRef<str>>(tags: &[S]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split hashtags into lines of at most `per_line` tags
pub fn wrap_hashtags<S: AsRef<str>>(tags: &[S], per_line: usize) -> Vec<String> {
    tags.chunks(per_line.max(1)).map(hashtag_line).collect()
}
