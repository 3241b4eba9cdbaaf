use anyhow::bail;
use clap::Parser;
use cuesheet::check::{CheckReport, check_files, collect_cue_files};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// Validates many cue sheets and reports every failure.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct CheckCommand {
    /// Cue sheet files or directories containing them
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Also search subdirectories for .cue files
    #[arg(long, short = 'R', default_value_t = false)]
    pub recursive: bool,

    /// Maximum number of cue sheets parsed at once; defaults to the available logical CPU cores
    #[arg(long, short = 'j', value_name = "JOBS")]
    pub jobs: Option<usize>,
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

pub async fn check_cue_sheets(pb: MultiProgress, cmd: CheckCommand) -> anyhow::Result<()> {
    let files = collect_cue_files(&cmd.paths, cmd.recursive).await?;
    if files.is_empty() {
        warn!("No cue sheets found in {:?}", cmd.paths);
        return Ok(());
    }

    let total = files.len();
    let jobs = cmd.jobs.unwrap_or_else(default_jobs);
    debug!("Checking {total} cue sheets with {jobs} jobs");

    let bar = pb.add(ProgressBar::new(total as u64));
    bar.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let outcomes = check_files(files, jobs, |outcome| {
        bar.set_message(outcome.path.display().to_string());
        bar.inc(1);
    })
    .await;
    bar.finish_and_clear();

    let report = CheckReport::from(outcomes.as_slice());

    for outcome in outcomes {
        match outcome.result {
            Ok(cue_sheet) => debug!(
                "{}: ok, {} tracks",
                outcome.path.display(),
                cue_sheet.tracks.len()
            ),
            Err(err) => error!("{}: {:#}", outcome.path.display(), anyhow::Error::new(err)),
        }
    }

    info!(
        "Checked {total} cue sheets: {} passed, {} failed",
        report.passed, report.failed
    );

    if report.failed > 0 {
        bail!("{} of {total} cue sheets failed validation", report.failed);
    }

    Ok(())
}
