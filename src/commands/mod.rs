use crate::commands::check::CheckCommand;
use crate::commands::show::ShowCommand;
use clap::{Parser, Subcommand};

pub mod check;
pub mod show;

/// CLI for parsing and validating cue sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Show(ShowCommand),
    Check(CheckCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_show_command() {
        let cli = Cli::try_parse_from(["cuesheet", "show", "album.cue", "--json"]).unwrap();
        match cli.command {
            Commands::Show(cmd) => {
                assert_eq!(cmd.input, PathBuf::from("album.cue"));
                assert!(cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_check_command() {
        let cli =
            Cli::try_parse_from(["cuesheet", "check", "-R", "-j", "4", "music", "a.cue"]).unwrap();
        match cli.command {
            Commands::Check(cmd) => {
                assert_eq!(
                    cmd.paths,
                    vec![PathBuf::from("music"), PathBuf::from("a.cue")]
                );
                assert!(cmd.recursive);
                assert_eq!(cmd.jobs, Some(4));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn check_requires_a_path() {
        assert!(Cli::try_parse_from(["cuesheet", "check"]).is_err());
    }
}
