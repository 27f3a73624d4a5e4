// src/config/options.rs
use std::time::Duration;
use super::consts::*;

/// Everything one grading run needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub nickname: String,
    pub url: String,
    pub verbose: bool,           // print one line per question
    pub seed: Option<u64>,       // fixed seed for search queries (None = entropy)
    pub timeout: Duration,       // per-probe timeout
    pub debug: bool,             // debug-level logging
}

impl CheckOptions {
    pub fn new(nickname: &str, url: &str) -> Self {
        Self {
            nickname: s!(nickname),
            url: s!(url),
            verbose: true,
            seed: None,
            timeout: Duration::from_secs(PROBE_TIMEOUT_SECS),
            debug: false,
        }
    }

    pub fn log_directive(&self) -> &'static str {
        if self.debug { DEBUG_LOG } else { DEFAULT_LOG }
    }
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self::new("", "")
    }
}
