use crate::cue::error::CueResult;
use crate::cue::{CueParser, CueSheet};
use futures::{StreamExt, stream};
use std::path::PathBuf;

pub mod fs;

pub use fs::collect_cue_files;

#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub result: CueResult<CueSheet>,
}

impl CheckOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub passed: usize,
    pub failed: usize,
}

impl From<&[CheckOutcome]> for CheckReport {
    fn from(outcomes: &[CheckOutcome]) -> Self {
        let passed = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        Self {
            passed,
            failed: outcomes.len() - passed,
        }
    }
}

/// Parses every path, at most `jobs` at a time. Outcomes keep the input order.
pub async fn check_files(
    paths: Vec<PathBuf>,
    jobs: usize,
    on_done: impl Fn(&CheckOutcome),
) -> Vec<CheckOutcome> {
    stream::iter(paths)
        .map(|path| async move {
            let result = CueParser::new(&path).parse().await;
            CheckOutcome { path, result }
        })
        .buffered(jobs.max(1))
        .inspect(|outcome| on_done(outcome))
        .collect()
        .await
}
