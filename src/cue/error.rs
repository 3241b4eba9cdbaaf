use crate::cue::models::IndexPoint;
use std::num::ParseIntError;
use thiserror::Error;

/// Coarse classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    /// Unknown command or wrong parameter count.
    Syntax,
    /// Malformed token or value outside the accepted set.
    Value,
    /// Value conflicts with what the parser has already seen.
    State,
    /// Post-pass validation of the whole sheet.
    Structure,
}

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("line {line}:\t{text}")]
    Line {
        line: usize,
        text: String,
        #[source]
        source: CommandError,
    },

    #[error("invalid cue sheet")]
    Invalid(#[from] ValidationError),
}

impl CueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CueError::IoError(_) => ErrorKind::Io,
            CueError::Line { source, .. } => source.kind(),
            CueError::Invalid(_) => ErrorKind::Structure,
        }
    }

    /// 1-based source line of the failing command, if the failure came from one.
    pub fn line(&self) -> Option<usize> {
        match self {
            CueError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type CueResult<T> = Result<T, CueError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unexpected command: {0}")]
    UnexpectedCommand(String),

    #[error("error parsing {command:?} command")]
    Command {
        command: String,
        #[source]
        source: FieldError,
    },
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::UnexpectedCommand(_) => ErrorKind::Syntax,
            CommandError::Command { source, .. } => source.kind(),
        }
    }
}

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid {target} parameters")]
    Parameters {
        target: &'static str,
        #[source]
        source: ArityError,
    },

    #[error("error parsing {field}")]
    Assign {
        field: String,
        #[source]
        source: AlreadySet,
    },

    #[error("invalid format {0:?}, expected one of WAVE, MP3, AIFF, BINARY, MOTOROLA")]
    InvalidFormat(String),

    #[error("expected 2 digits, got {0}")]
    TrackNumberWidth(usize),

    #[error("failed to parse track number")]
    InvalidTrackNumber(#[source] ParseIntError),

    #[error("expected track number {expected}, got {actual}")]
    UnexpectedTrackNumber { expected: usize, actual: i64 },

    #[error("cannot have more than {0} tracks")]
    TooManyTracks(usize),

    #[error("track {0} is missing INDEX 01")]
    IncompleteTrack(usize),

    #[error("INDEX declared before any TRACK")]
    NoTrack,

    #[error("failed to parse index number")]
    InvalidIndexNumber(#[source] ParseIntError),

    #[error("expected index number 0 or 1, got {0}")]
    UnexpectedIndexNumber(i64),

    #[error("INDEX 00 must precede INDEX 01 in track {0}")]
    PregapAfterStart(usize),

    #[error("error parsing timestamp and frame: {0:?}")]
    InvalidTimestamp(String),

    #[error("expected {expected} hexadecimal digits, got {actual}")]
    DiscIdLength { expected: usize, actual: usize },

    #[error("failed to parse disc id")]
    InvalidDiscId(#[source] hex::FromHexError),
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::Parameters { .. } => ErrorKind::Syntax,
            FieldError::Assign { .. }
            | FieldError::UnexpectedTrackNumber { .. }
            | FieldError::TooManyTracks(_)
            | FieldError::IncompleteTrack(_)
            | FieldError::NoTrack
            | FieldError::PregapAfterStart(_) => ErrorKind::State,
            FieldError::InvalidFormat(_)
            | FieldError::TrackNumberWidth(_)
            | FieldError::InvalidTrackNumber(_)
            | FieldError::InvalidIndexNumber(_)
            | FieldError::UnexpectedIndexNumber(_)
            | FieldError::InvalidTimestamp(_)
            | FieldError::DiscIdLength { .. }
            | FieldError::InvalidDiscId(_) => ErrorKind::Value,
        }
    }
}

pub type FieldResult<T> = Result<T, FieldError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArityError {
    #[error("expected {expected} parameters, got {actual}")]
    Exact { expected: usize, actual: usize },

    #[error("expected at least {expected} parameters, got {actual}")]
    AtLeast { expected: usize, actual: usize },
}

/// A set-once field was written a second time. Holds the value already stored.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field already set: {0}")]
pub struct AlreadySet(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing file name")]
    MissingFileName,

    #[error("missing file format")]
    MissingFormat,

    #[error("missing tracks")]
    MissingTracks,

    #[error("missing track TYPE in track {0}")]
    MissingTrackType(usize),

    #[error("missing INDEX 01 in track {0}")]
    MissingIndex01(usize),

    #[error(
        "overlapping index points {first} and {second} in tracks {first_track} and {second_track}"
    )]
    OverlappingIndexPoints {
        first_track: usize,
        first: IndexPoint,
        second_track: usize,
        second: IndexPoint,
    },
}

pub type ValidationResult<T> = Result<T, ValidationError>;
