use crate::cue::assign::normalize_line;
use crate::cue::error::{CueError, CueResult};
use crate::cue::parser::SheetBuilder;
use crate::cue::validate::validate;
use log::{debug, info};
use std::io::{BufRead, Cursor};
use std::path::{Path, PathBuf};

pub mod assign;
pub mod command;
pub mod error;
pub mod models;
mod parser;
mod validate;

pub use models::{CueSheet, FileFormat, IndexPoint, Track};

pub struct CueParser {
    cue_path: PathBuf,
}

impl CueParser {
    pub fn new(cue_path: impl AsRef<Path>) -> Self {
        Self {
            cue_path: cue_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.cue_path
    }

    pub async fn parse(&self) -> CueResult<CueSheet> {
        debug!("Reading cue sheet: {:?}", self.cue_path);
        let data = tokio::fs::read(&self.cue_path).await?;
        parse(Cursor::new(data))
    }
}

/// Parses a cue sheet line by line and validates the result.
///
/// Parsing stops at the first failing line; the error carries its 1-based
/// line number and trimmed text.
pub fn parse<R: BufRead>(reader: R) -> CueResult<CueSheet> {
    let mut builder = SheetBuilder::default();
    let mut line_nr = 0;

    for line in reader.lines() {
        let line = line?;
        line_nr += 1;

        let Some(line) = normalize_line(&line) else {
            continue;
        };

        builder
            .parse_line(line)
            .map_err(|source| CueError::Line {
                line: line_nr,
                text: line.to_string(),
                source,
            })?;
    }

    let cue_sheet = validate(builder.finish())?;

    info!(
        "Cue sheet parsed correctly: {line_nr} lines, file {:?}, format {}, {} tracks",
        cue_sheet.file_name,
        cue_sheet.format,
        cue_sheet.tracks.len()
    );

    Ok(cue_sheet)
}

pub fn parse_str(cue_sheet: &str) -> CueResult<CueSheet> {
    parse(cue_sheet.as_bytes())
}
