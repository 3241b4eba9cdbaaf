use crate::cue::error::{ArityError, FieldError, FieldResult};

/// Top-level cue sheet commands understood by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    File,
    Performer,
    Title,
    Track,
    Index,
    Rem,
}

impl Command {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_uppercase().as_str() {
            "FILE" => Some(Command::File),
            "PERFORMER" => Some(Command::Performer),
            "TITLE" => Some(Command::Title),
            "TRACK" => Some(Command::Track),
            "INDEX" => Some(Command::Index),
            "REM" => Some(Command::Rem),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::File => "FILE",
            Command::Performer => "PERFORMER",
            Command::Title => "TITLE",
            Command::Track => "TRACK",
            Command::Index => "INDEX",
            Command::Rem => "REM",
        }
    }
}

/// Sub-commands selected by the first parameter of `REM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemCommand {
    Genre,
    Date,
    DiscId,
    Comment,
    /// Anything else is kept as a free-form remark.
    Other,
}

impl RemCommand {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_uppercase().as_str() {
            "GENRE" => RemCommand::Genre,
            "DATE" => RemCommand::Date,
            "DISCID" => RemCommand::DiscId,
            "COMMENT" => RemCommand::Comment,
            _ => RemCommand::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RemCommand::Genre => "REM GENRE",
            RemCommand::Date => "REM DATE",
            RemCommand::DiscId => "REM DISCID",
            RemCommand::Comment => "REM COMMENT",
            RemCommand::Other => "REM",
        }
    }
}

/// Requires exactly `N` parameters and hands them back as an array.
pub fn exact<'a, const N: usize>(
    target: &'static str,
    parameters: &[&'a str],
) -> FieldResult<[&'a str; N]> {
    <[&'a str; N]>::try_from(parameters).map_err(|_| FieldError::Parameters {
        target,
        source: ArityError::Exact {
            expected: N,
            actual: parameters.len(),
        },
    })
}

/// Requires at least `N` parameters, splitting off the first `N`.
pub fn at_least<'a, 'p, const N: usize>(
    target: &'static str,
    parameters: &'p [&'a str],
) -> FieldResult<(&'p [&'a str; N], &'p [&'a str])> {
    parameters
        .split_first_chunk::<N>()
        .ok_or(FieldError::Parameters {
            target,
            source: ArityError::AtLeast {
                expected: N,
                actual: parameters.len(),
            },
        })
}
