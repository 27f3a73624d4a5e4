// src/core/verify.rs
//! Response verifiers. Pure: given a probe outcome and an expectation, say pass or fail.
//! A transport error or an unreadable body is always a fail.

use super::net::ProbeOutcome;

fn body_of(outcome: &ProbeOutcome) -> Option<&str> {
    outcome.as_ref().ok()?.body.as_deref()
}

/// Status code equals `expected`.
pub fn status_equals(outcome: &ProbeOutcome, expected: u16) -> bool {
    matches!(outcome, Ok(r) if r.status == expected)
}

/// Body equals `expected` after trimming leading/trailing spaces.
pub fn body_equals(outcome: &ProbeOutcome, expected: &str) -> bool {
    body_of(outcome).is_some_and(|b| b.trim_matches(' ') == expected)
}

/// Body contains `expected` anywhere. No trimming.
pub fn body_contains(outcome: &ProbeOutcome, expected: &str) -> bool {
    body_of(outcome).is_some_and(|b| b.contains(expected))
}

/// Exact or containment body check, picked by `exact`.
pub fn check_body(outcome: &ProbeOutcome, expected: &str, exact: bool) -> bool {
    if exact {
        body_equals(outcome, expected)
    } else {
        body_contains(outcome, expected)
    }
}

/// Arbitrary predicate over the whole body.
pub fn body_matches<F>(outcome: &ProbeOutcome, pred: F) -> bool
where
    F: Fn(&str) -> bool,
{
    body_of(outcome).is_some_and(pred)
}
