// src/progress.rs
use crate::{questions::Verdict, runner::RunSummary};

/// Report sink for a grading run. Frontends implement this to surface results.
pub trait Progress {
    /// Called at the start with the number of questions.
    fn begin(&mut self, _total: usize) {}

    /// Called once per question, in order.
    fn verdict(&mut self, _verdict: &Verdict) {}

    /// Called after the last question.
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints `<icon> - <description>` per question, then the totals.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn verdict(&mut self, verdict: &Verdict) {
        println!("{} - {}", verdict.status_text(), verdict.description);
    }

    fn finish(&mut self, summary: &RunSummary) {
        println!("{summary}");
    }
}

/// Prints only the totals.
pub struct QuietProgress;

impl Progress for QuietProgress {
    fn finish(&mut self, summary: &RunSummary) {
        println!("{summary}");
    }
}

/// Keeps every verdict; handy for tests and for callers that format results themselves.
#[derive(Default)]
pub struct Collect {
    pub total: usize,
    pub verdicts: Vec<Verdict>,
}

impl Progress for Collect {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn verdict(&mut self, verdict: &Verdict) {
        self.verdicts.push(verdict.clone());
    }
}
