use clap::Parser;
use cuesheet::cue::{CueParser, CueSheet};
use std::fmt::Write;
use std::path::PathBuf;

/// Parses a single cue sheet and prints its contents.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ShowCommand {
    /// Path to the .cue file
    #[arg(value_name = "INPUT_CUE")]
    pub input: PathBuf,

    /// Print the parsed sheet as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub async fn show_cue_sheet(cmd: ShowCommand) -> anyhow::Result<()> {
    let cue_sheet = CueParser::new(&cmd.input).parse().await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&cue_sheet)?);
    } else {
        print!("{}", render(&cue_sheet)?);
    }

    Ok(())
}

fn render(cue_sheet: &CueSheet) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "File:      {} ({})", cue_sheet.file_name, cue_sheet.format)?;
    if let Some(performer) = &cue_sheet.album_performer {
        writeln!(out, "Performer: {performer}")?;
    }
    if let Some(title) = &cue_sheet.album_title {
        writeln!(out, "Title:     {title}")?;
    }
    if let Some(genre) = &cue_sheet.genre {
        writeln!(out, "Genre:     {genre}")?;
    }
    if let Some(date) = &cue_sheet.date {
        writeln!(out, "Date:      {date}")?;
    }
    if let Some(disc_id) = cue_sheet.disc_id {
        writeln!(out, "Disc ID:   {disc_id:08X}")?;
    }
    for remark in &cue_sheet.remarks {
        writeln!(out, "Remark:    {remark}")?;
    }

    writeln!(out, "Tracks:    {}", cue_sheet.tracks.len())?;
    for (i, track) in cue_sheet.tracks.iter().enumerate() {
        write!(out, "  {:02}  {:<6} {}", i + 1, track.track_type, track.index01)?;
        if let Some(pregap) = track.index00 {
            write!(out, " (pregap {pregap})")?;
        }
        if let Some(title) = &track.title {
            write!(out, "  {title}")?;
        }
        writeln!(out)?;
    }

    Ok(out)
}
