//! Parser for the textual dataset format
//!
//! ```text
//! u0 20230101 #music #travel
//! u1 20230215 #food
//! 0 1
//! 1 0
//! 0.3 1
//! ```
//!
//! User lines come first, one per user, numbered from `u0` upwards. They
//! are followed by the N×N friendship matrix (`0`/`1` values) and an
//! optional `<strength threshold> <core threshold>` pair. Matrix values
//! and thresholds are whitespace separated; line breaks between them carry
//! no meaning.

use crate::config::PopulationLimits;
use crate::dataset::{Dataset, User};
use crate::error::{CohortError, CohortResult};
use cohort_algorithms::{ClassifierConfig, FriendshipGraph};
use std::io::Read;
use tracing::{debug, info};

/// A parsed dataset plus the thresholds found at the end of the input
#[derive(Debug, Clone)]
pub struct ParsedInput {
    pub dataset: Dataset,
    pub thresholds: Option<ClassifierConfig>,
}

/// Read and parse a complete input stream
pub fn read_input<R: Read>(mut reader: R, limits: &PopulationLimits) -> CohortResult<ParsedInput> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_input(&text, limits)
}

/// Parse a complete input document
pub fn parse_input(text: &str, limits: &PopulationLimits) -> CohortResult<ParsedInput> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    let mut users = Vec::new();
    while let Some((line_no, line)) = lines.next_if(|(_, line)| is_user_line(line)) {
        if users.len() == limits.max_users {
            return Err(CohortError::PopulationExceeded {
                count: users.len() + 1,
                max: limits.max_users,
            });
        }
        let user = parse_user_line(line_no, line)?;
        if user.id != users.len() {
            return Err(CohortError::UnexpectedUser {
                expected: users.len(),
                found: user.id,
            });
        }
        users.push(user);
    }

    let n = users.len();
    info!("Parsed {} user profiles", n);

    let mut tokens = lines.flat_map(|(line_no, line)| {
        line.split_whitespace().map(move |token| (line_no, token))
    });

    let mut rows = Vec::with_capacity(n);
    for row_index in 0..n {
        let mut row = Vec::with_capacity(n);
        for _ in 0..n {
            let Some((line_no, token)) = tokens.next() else {
                return Err(CohortError::MissingRows {
                    expected: n,
                    found: row_index,
                });
            };
            row.push(parse_link(line_no, token)?);
        }
        rows.push(row);
    }
    let graph = FriendshipGraph::from_rows(&rows)?;
    if !graph.is_symmetric() {
        debug!("Friendship matrix is not symmetric, using it as given");
    }

    let thresholds = match tokens.next() {
        None => None,
        Some((line_no, strength_token)) => {
            let Some((_, core_token)) = tokens.next() else {
                return Err(CohortError::parse(line_no, "missing core threshold"));
            };
            Some(parse_thresholds(line_no, strength_token, core_token)?)
        }
    };

    if let Some((line_no, token)) = tokens.next() {
        return Err(CohortError::parse(
            line_no,
            format!("unexpected trailing input '{}'", token),
        ));
    }

    match &thresholds {
        Some(t) => debug!(
            "Thresholds: strength > {}, close friends > {}",
            t.strength_threshold, t.core_threshold
        ),
        None => debug!("No thresholds in input"),
    }

    let dataset = Dataset::new(users, graph, limits)?;
    Ok(ParsedInput {
        dataset,
        thresholds,
    })
}

fn is_user_line(line: &str) -> bool {
    line.trim_start().starts_with('u')
}

fn parse_user_line(line_no: usize, line: &str) -> CohortResult<User> {
    let mut parts = line.split_whitespace();

    let id_token = parts.next().unwrap_or_default();
    let id = id_token
        .strip_prefix('u')
        .and_then(|digits| digits.parse::<usize>().ok())
        .ok_or_else(|| CohortError::parse(line_no, format!("invalid user id '{}'", id_token)))?;

    let join_date = parts
        .next()
        .ok_or_else(|| CohortError::parse(line_no, "missing join date"))
        .and_then(|token| {
            token.parse::<i64>().map_err(|_| {
                CohortError::parse(line_no, format!("invalid join date '{}'", token))
            })
        })?;

    let mut tags = Vec::new();
    for token in parts {
        match token.strip_prefix('#') {
            Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
            _ => {
                return Err(CohortError::InvalidTag {
                    user: id,
                    tag: token.to_string(),
                })
            }
        }
    }

    Ok(User::new(id, join_date, tags))
}

fn parse_link(line_no: usize, token: &str) -> CohortResult<bool> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(CohortError::parse(
            line_no,
            format!("friendship value must be 0 or 1, found '{}'", other),
        )),
    }
}

/// Validate a strength / core threshold pair
pub fn parse_thresholds(
    line_no: usize,
    strength_token: &str,
    core_token: &str,
) -> CohortResult<ClassifierConfig> {
    let strength_threshold: f64 = strength_token.parse().map_err(|_| {
        CohortError::parse(
            line_no,
            format!("invalid strength threshold '{}'", strength_token),
        )
    })?;
    if !strength_threshold.is_finite() {
        return Err(CohortError::InvalidThreshold(format!(
            "strength threshold must be finite, got {}",
            strength_token
        )));
    }

    let core_threshold: i64 = core_token.parse().map_err(|_| {
        CohortError::parse(line_no, format!("invalid core threshold '{}'", core_token))
    })?;
    let core_threshold = usize::try_from(core_threshold).map_err(|_| {
        CohortError::InvalidThreshold(format!(
            "core threshold must not be negative, got {}",
            core_threshold
        ))
    })?;

    Ok(ClassifierConfig::new(strength_threshold, core_threshold))
}
