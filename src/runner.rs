// src/runner.rs
use std::{error::Error, fmt};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::options::CheckOptions,
    core::{ProbeClient, Target},
    progress::{ConsoleProgress, NullProgress, Progress},
    questions::{question_set, Question},
};

/// Totals for one run. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub num_pass: usize,
    pub num_fail: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.num_pass + self.num_fail
    }

    pub fn all_passed(&self) -> bool {
        self.num_fail == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} passed, {} failed", self.num_pass, self.num_fail)
    }
}

/// Grade `raw_url` for `nickname` with fresh random search queries.
/// `verbose` prints one line per question.
pub fn run_all(nickname: &str, raw_url: &str, verbose: bool) -> Result<RunSummary, Box<dyn Error>> {
    let mut opts = CheckOptions::new(nickname, raw_url);
    opts.verbose = verbose;
    if opts.verbose {
        run_with(&opts, &mut ConsoleProgress)
    } else {
        run_with(&opts, &mut NullProgress)
    }
}

/// Top-level runner. Only an unusable URL (or client setup) is an error;
/// everything that goes wrong inside a question becomes a fail.
pub fn run_with(opts: &CheckOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let target = Target::parse(&opts.url)?;

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let questions = question_set(&opts.nickname, &mut rng)?;
    let client = ProbeClient::new(opts.timeout)?;

    logf!("Grading {}://{} for {:?} ({} questions)", target.scheme, target.host, opts.nickname, questions.len());
    Ok(run_questions(&questions, &client, &target, progress))
}

/// Ask each question in order and tally.
pub fn run_questions(
    questions: &[Box<dyn Question>],
    client: &ProbeClient,
    target: &Target,
    progress: &mut dyn Progress,
) -> RunSummary {
    progress.begin(questions.len());

    let mut summary = RunSummary::default();
    for question in questions {
        let verdict = question.ask(client, target);
        progress.verdict(&verdict);
        if verdict.passed {
            summary.num_pass += 1;
        } else {
            summary.num_fail += 1;
        }
    }

    progress.finish(&summary);
    summary
}
