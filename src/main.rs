use crate::commands::check::check_cue_sheets;
use crate::commands::show::show_cue_sheet;
use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(cmd) => show_cue_sheet(cmd).await?,
        Commands::Check(cmd) => check_cue_sheets(pb.clone(), cmd).await?,
    }

    Ok(())
}
