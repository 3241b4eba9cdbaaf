use crate::cue::error::FieldError;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

/// Frames per second of a red book audio CD.
pub const FRAMES_PER_SECOND: u64 = 75;

/// Highest track number a cue sheet may declare.
pub const MAX_TRACKS: usize = 99;

/// A position on the disc, `MM:SS:FF` in the source.
///
/// Ordering compares `timestamp` first and `frame` second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IndexPoint {
    /// Whole seconds since the start of the file.
    pub timestamp: Duration,

    /// Sub-second part, kept exactly as written.
    pub frame: u32,
}

impl IndexPoint {
    pub fn new(timestamp: Duration, frame: u32) -> Self {
        Self { timestamp, frame }
    }

    /// Absolute position in CD frames.
    pub fn total_frames(&self) -> u64 {
        self.timestamp.as_secs() * FRAMES_PER_SECOND + self.frame as u64
    }
}

impl Display for IndexPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let secs = self.timestamp.as_secs();
        write!(f, "{:02}:{:02}:{:02}", secs / 60, secs % 60, self.frame)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileFormat {
    Wave,
    Mp3,
    Aiff,
    Binary,
    Motorola,
}

impl FileFormat {
    pub const ALL: [FileFormat; 5] = [
        FileFormat::Wave,
        FileFormat::Mp3,
        FileFormat::Aiff,
        FileFormat::Binary,
        FileFormat::Motorola,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Wave => "WAVE",
            FileFormat::Mp3 => "MP3",
            FileFormat::Aiff => "AIFF",
            FileFormat::Binary => "BINARY",
            FileFormat::Motorola => "MOTOROLA",
        }
    }
}

impl Display for FileFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| FieldError::InvalidFormat(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: Option<String>,
    pub track_type: String,

    /// Pre-gap start.
    pub index00: Option<IndexPoint>,

    /// Playable start.
    pub index01: IndexPoint,
}

/// A fully validated cue sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CueSheet {
    pub album_performer: Option<String>,
    pub album_title: Option<String>,
    pub remarks: Vec<String>,
    pub date: Option<String>,
    pub disc_id: Option<u32>,
    pub format: FileFormat,
    pub file_name: String,
    pub genre: Option<String>,
    pub tracks: Vec<Track>,
}

impl CueSheet {
    /// All index points in document order, each with its 1-based track number.
    pub fn index_points(&self) -> impl Iterator<Item = (usize, &IndexPoint)> {
        self.tracks.iter().enumerate().flat_map(|(i, track)| {
            track
                .index00
                .iter()
                .chain(std::iter::once(&track.index01))
                .map(move |point| (i + 1, point))
        })
    }
}
