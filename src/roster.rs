// src/roster.rs
//! Known attendees and the random search queries built from them.
//!
//! The app under test serves `/attendees?q=<query>` and must list exactly the
//! roster names containing `<query>` (case-insensitive). Here we pick a query,
//! then partition the roster into names that should and should not show up.

use std::error::Error;

use rand::Rng;

use crate::config::consts::MAX_QUERY_ATTEMPTS;

pub const ROSTER: [&str; 6] = [
    "Taly Reich",
    "Kyle Jensen",
    "Anjani Jain",
    "Kerwin Charles",
    "Sharon Oster",
    "Sherri Scully",
];

/// A search query plus the roster split it implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeopleQuery {
    pub query: String,
    pub matching: Vec<String>,
    pub not_matching: Vec<String>,
}

impl PeopleQuery {
    /// Split `roster` by case-insensitive containment of `query`. Order is kept.
    pub fn partition(roster: &[&str], query: &str) -> Self {
        let needle = query.to_lowercase();
        let (matching, not_matching): (Vec<String>, Vec<String>) = roster
            .iter()
            .map(|p| s!(*p))
            .partition(|p| p.to_lowercase().contains(&needle));

        Self { query: s!(query), matching, not_matching }
    }

    /// Both sides empty. Only possible with an empty roster.
    pub fn is_degenerate(&self) -> bool {
        self.matching.is_empty() && self.not_matching.is_empty()
    }

    /// True when `body` shows every matching name and none of the others.
    /// Names are compared with their original case.
    pub fn shown_by(&self, body: &str) -> bool {
        self.matching.iter().all(|p| body.contains(p.as_str()))
            && !self.not_matching.iter().any(|p| body.contains(p.as_str()))
    }
}

/// One attempt at a query.
///
/// * `use_word` – pick a whole first/last name, then upper- or lower-case it (50/50).
/// * otherwise – pick a single character from the roster with whitespace removed.
///
/// Returns `None` only when the roster has nothing to pick from.
pub fn generate_query<R: Rng + ?Sized>(
    roster: &[&str],
    use_word: bool,
    rng: &mut R,
) -> Option<PeopleQuery> {
    let joined = roster.join(" ");

    let query = if use_word {
        let words: Vec<&str> = joined.split_whitespace().collect();
        if words.is_empty() { return None; }

        let choice = rng.gen_range(0..words.len());
        logd!("Word query: picked token {choice} of {}", words.len());
        if rng.gen_bool(0.5) {
            words[choice].to_lowercase()
        } else {
            words[choice].to_uppercase()
        }
    } else {
        let chars: Vec<char> = joined.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() { return None; }

        let choice = rng.gen_range(0..chars.len());
        logd!("Char query: picked char {choice} of {}", chars.len());
        chars[choice].to_string()
    };

    Some(PeopleQuery::partition(roster, &query))
}

/// Generate queries until one is not degenerate (both sides empty), giving up
/// after `MAX_QUERY_ATTEMPTS`.
///
/// A query matching the whole roster is accepted: the guard only rejects the
/// case where both sides are empty.
pub fn pick_query<R: Rng + ?Sized>(
    roster: &[&str],
    use_word: bool,
    rng: &mut R,
) -> Result<PeopleQuery, Box<dyn Error>> {
    for _ in 0..MAX_QUERY_ATTEMPTS {
        match generate_query(roster, use_word, rng) {
            Some(q) if !q.is_degenerate() => return Ok(q),
            Some(_) => continue,
            None => return Err("Roster has no names to build a query from".into()),
        }
    }
    Err(format!("No usable search query after {MAX_QUERY_ATTEMPTS} attempts").into())
}
