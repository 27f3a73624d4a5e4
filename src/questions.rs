// src/questions.rs
//! # Questions
//!
//! A question is one bound, executable check against the app under test.
//! Each one issues a single probe and turns the response into a [`Verdict`].
//!
//! Questions are built once, up front, by the factory functions below. Anything
//! they depend on (the nickname, the random search query) is fixed at that point,
//! so one run asks the same thing no matter when a question executes.
//!
//! ```text
//! question_set(nickname, rng) → [index_is_up, nickname_is_up,
//!                                nickname_matches_expected, is_searchable(word),
//!                                is_searchable(char)]
//! runner → question.ask(client, target) → ProbeClient::get → verify::*
//! ```

use std::error::Error;

use rand::Rng;

use crate::{
    config::consts::{ATTENDEES_PATH, INDEX_PATH, NICKNAME_PATH, SEARCH_PARAM},
    core::{verify, ProbeClient, ProbeOutcome, Target},
    roster::{self, PeopleQuery, ROSTER},
};

/// Outcome of one question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub description: String,
    pub error: Option<String>,
}

impl Verdict {
    fn from_outcome(passed: bool, description: &str, outcome: &ProbeOutcome) -> Self {
        let error = outcome.as_ref().err().map(|e| e.to_string());
        if let Some(e) = &error {
            logd!("{description}: {e}");
        }
        Self { passed, description: s!(description), error }
    }

    /// Shown as PASS only when it passed without an error attached.
    pub fn status_text(&self) -> &'static str {
        if self.passed && self.error.is_none() { "✅ PASS" } else { "❌ FAIL" }
    }
}

pub trait Question {
    /// Human-readable sentence naming the expected behavior.
    fn description(&self) -> &str;

    /// Probe `target` once and judge the response.
    fn ask(&self, client: &ProbeClient, target: &Target) -> Verdict;
}

/// GET `path`, expect a given status code.
#[derive(Clone, Debug)]
pub struct StatusQuestion {
    path: &'static str,
    expected: u16,
    description: String,
}

impl Question for StatusQuestion {
    fn description(&self) -> &str { &self.description }

    fn ask(&self, client: &ProbeClient, target: &Target) -> Verdict {
        let outcome = client.get(target, self.path, &[]);
        let passed = verify::status_equals(&outcome, self.expected);
        Verdict::from_outcome(passed, &self.description, &outcome)
    }
}

/// GET `path`, expect the body to equal (trimmed) or contain a string.
#[derive(Clone, Debug)]
pub struct BodyQuestion {
    path: &'static str,
    expected: String,
    exact: bool,
    description: String,
}

impl Question for BodyQuestion {
    fn description(&self) -> &str { &self.description }

    fn ask(&self, client: &ProbeClient, target: &Target) -> Verdict {
        let outcome = client.get(target, self.path, &[]);
        let passed = verify::check_body(&outcome, &self.expected, self.exact);
        Verdict::from_outcome(passed, &self.description, &outcome)
    }
}

/// GET `/attendees?q=<query>`, expect exactly the matching roster names.
#[derive(Clone, Debug)]
pub struct SearchQuestion {
    people: PeopleQuery,
    description: String,
}

impl SearchQuestion {
    pub fn new(people: PeopleQuery) -> Self {
        let description = format!(
            "Searching for {} at {}, shows these faculty: {}; and, NOT these {}",
            people.query,
            ATTENDEES_PATH,
            people.matching.join(", "),
            people.not_matching.join(", "),
        );
        Self { people, description }
    }
}

impl Question for SearchQuestion {
    fn description(&self) -> &str { &self.description }

    fn ask(&self, client: &ProbeClient, target: &Target) -> Verdict {
        let query = [(SEARCH_PARAM, self.people.query.as_str())];
        let outcome = client.get(target, ATTENDEES_PATH, &query);
        let passed = verify::body_matches(&outcome, |body| self.people.shown_by(body));
        Verdict::from_outcome(passed, &self.description, &outcome)
    }
}

/* ---------------- Factories ---------------- */

// Status descriptions read "You return a 200 status code at ...". Older
// grader output said "Your return ..."; the wording changed, the checks did not.

pub fn index_is_up() -> StatusQuestion {
    StatusQuestion {
        path: INDEX_PATH,
        expected: 200,
        description: format!("You return a 200 status code at {INDEX_PATH}"),
    }
}

pub fn nickname_is_up() -> StatusQuestion {
    StatusQuestion {
        path: NICKNAME_PATH,
        expected: 200,
        description: format!("You return a 200 status code at {NICKNAME_PATH}"),
    }
}

pub fn nickname_matches_expected(nickname: &str) -> BodyQuestion {
    BodyQuestion {
        path: NICKNAME_PATH,
        expected: s!(nickname),
        exact: false,
        description: format!("Your response at {NICKNAME_PATH} includes your nickname: {nickname}"),
    }
}

/// Query is drawn now, not per execution.
pub fn is_searchable<R: Rng + ?Sized>(
    use_word: bool,
    rng: &mut R,
) -> Result<SearchQuestion, Box<dyn Error>> {
    let people = roster::pick_query(&ROSTER, use_word, rng)?;
    Ok(SearchQuestion::new(people))
}

/// The fixed, ordered question set for one run.
pub fn question_set<R: Rng + ?Sized>(
    nickname: &str,
    rng: &mut R,
) -> Result<Vec<Box<dyn Question>>, Box<dyn Error>> {
    let set: Vec<Box<dyn Question>> = vec![
        Box::new(index_is_up()),
        Box::new(nickname_is_up()),
        Box::new(nickname_matches_expected(nickname)),
        Box::new(is_searchable(true, rng)?),
        Box::new(is_searchable(false, rng)?),
    ];
    Ok(set)
}
