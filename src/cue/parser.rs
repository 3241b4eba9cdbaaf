use crate::cue::assign::{TRIM_CHARS, assign, assign_str, assign_with};
use crate::cue::command::{Command, RemCommand, at_least, exact};
use crate::cue::error::{AlreadySet, CommandError, FieldError, FieldResult};
use crate::cue::models::{FileFormat, IndexPoint, MAX_TRACKS};
use log::debug;
use std::time::Duration;

const DISC_ID_DIGITS: usize = 8;

/// A track whose fields are still being filled in.
#[derive(Debug, Default)]
pub(crate) struct DraftTrack {
    pub title: Option<String>,
    pub track_type: Option<String>,
    pub index00: Option<IndexPoint>,
    pub index01: Option<IndexPoint>,
}

/// The sheet as seen so far; every set-once field starts out `None`.
#[derive(Debug, Default)]
pub(crate) struct Draft {
    pub album_performer: Option<String>,
    pub album_title: Option<String>,
    pub remarks: Vec<String>,
    pub date: Option<String>,
    pub disc_id: Option<u32>,
    pub format: Option<FileFormat>,
    pub file_name: Option<String>,
    pub genre: Option<String>,
    pub tracks: Vec<DraftTrack>,
}

/// Where the parser is in the sheet. Once the first `TRACK` is seen there is no way back.
#[derive(Debug, Default)]
enum Section {
    #[default]
    BeforeAnyTrack,
    WithinTrack(DraftTrack),
}

#[derive(Debug, Default)]
pub(crate) struct SheetBuilder {
    draft: Draft,
    section: Section,
}

fn already_set(field: impl Into<String>) -> impl FnOnce(AlreadySet) -> FieldError {
    let field = field.into();
    move |source| FieldError::Assign { field, source }
}

fn join(parameters: &[&str]) -> String {
    parameters.join(" ").trim_matches(TRIM_CHARS).to_string()
}

impl SheetBuilder {
    /// Dispatches one normalized line.
    pub fn parse_line(&mut self, line: &str) -> Result<(), CommandError> {
        let mut fields = line.split_whitespace();
        let Some(keyword) = fields.next() else {
            return Ok(());
        };
        let parameters: Vec<&str> = fields.collect();

        let command = Command::from_keyword(keyword)
            .ok_or_else(|| CommandError::UnexpectedCommand(keyword.to_string()))?;

        debug!("Parsing {} with parameters {parameters:?}", command.name());

        let result = match command {
            Command::File => self.parse_file(&parameters),
            Command::Performer => self.parse_performer(&parameters),
            Command::Title => self.parse_title(&parameters),
            Command::Track => self.parse_track(&parameters),
            Command::Index => self.parse_index(&parameters),
            Command::Rem => self.parse_rem(&parameters),
        };

        result.map_err(|source| CommandError::Command {
            command: keyword.to_string(),
            source,
        })
    }

    /// Closes the last open track and hands over the draft for validation.
    pub fn finish(self) -> Draft {
        let mut draft = self.draft;
        if let Section::WithinTrack(track) = self.section {
            draft.tracks.push(track);
        }
        draft
    }

    /// Number of tracks declared so far, including the open one.
    fn track_count(&self) -> usize {
        match self.section {
            Section::BeforeAnyTrack => 0,
            Section::WithinTrack(_) => self.draft.tracks.len() + 1,
        }
    }

    fn parse_file(&mut self, parameters: &[&str]) -> FieldResult<()> {
        let [name, format] = exact::<2>("FILE", parameters)?;
        let format: FileFormat = format.trim_matches(TRIM_CHARS).parse()?;

        assign(format, &mut self.draft.format).map_err(already_set("FILE format"))?;
        assign_str(name, &mut self.draft.file_name).map_err(already_set("FILE name"))
    }

    fn parse_performer(&mut self, parameters: &[&str]) -> FieldResult<()> {
        at_least::<1>("PERFORMER", parameters)?;
        assign_str(&join(parameters), &mut self.draft.album_performer)
            .map_err(already_set("PERFORMER"))
    }

    fn parse_title(&mut self, parameters: &[&str]) -> FieldResult<()> {
        at_least::<1>("TITLE", parameters)?;
        let title = join(parameters);
        let track_number = self.track_count();

        match &mut self.section {
            Section::BeforeAnyTrack => {
                assign_str(&title, &mut self.draft.album_title).map_err(already_set("album TITLE"))
            }
            Section::WithinTrack(track) => assign_str(&title, &mut track.title)
                .map_err(already_set(format!("track {track_number} TITLE"))),
        }
    }

    fn parse_track(&mut self, parameters: &[&str]) -> FieldResult<()> {
        let [number, track_type] = exact::<2>("TRACK", parameters)?;
        let number = self.next_track_number(number)?;

        if let Section::WithinTrack(previous) = &self.section {
            if previous.index01.is_none() {
                return Err(FieldError::IncompleteTrack(number - 1));
            }
        }

        let mut track = DraftTrack::default();
        assign_str(track_type, &mut track.track_type)
            .map_err(already_set(format!("track {number} TYPE")))?;

        if let Section::WithinTrack(previous) =
            std::mem::replace(&mut self.section, Section::WithinTrack(track))
        {
            self.draft.tracks.push(previous);
        }

        Ok(())
    }

    /// Checks that `number` continues the running track count and returns it.
    fn next_track_number(&self, number: &str) -> FieldResult<usize> {
        let width = number.chars().count();
        if width != 2 {
            return Err(FieldError::TrackNumberWidth(width));
        }

        let number: i64 = number.parse().map_err(FieldError::InvalidTrackNumber)?;
        let expected = self.track_count() + 1;
        if number != expected as i64 {
            return Err(FieldError::UnexpectedTrackNumber {
                expected,
                actual: number,
            });
        }
        if expected > MAX_TRACKS {
            return Err(FieldError::TooManyTracks(MAX_TRACKS));
        }

        Ok(expected)
    }

    fn parse_index(&mut self, parameters: &[&str]) -> FieldResult<()> {
        let [number, timestamp] = exact::<2>("INDEX", parameters)?;
        let number: i64 = number.parse().map_err(FieldError::InvalidIndexNumber)?;
        let track_number = self.track_count();

        let Section::WithinTrack(track) = &mut self.section else {
            return Err(FieldError::NoTrack);
        };

        let slot = match number {
            0 if track.index01.is_some() && track.index00.is_none() => {
                return Err(FieldError::PregapAfterStart(track_number));
            }
            0 => &mut track.index00,
            1 => &mut track.index01,
            other => return Err(FieldError::UnexpectedIndexNumber(other)),
        };

        let point = parse_timestamp(timestamp)?;
        assign(point, slot).map_err(already_set(format!(
            "track {track_number} INDEX {number:02}"
        )))
    }

    fn parse_rem(&mut self, parameters: &[&str]) -> FieldResult<()> {
        let (&[keyword], rest) = at_least::<1>("REM", parameters)?;
        let command = RemCommand::from_keyword(keyword);

        match command {
            RemCommand::Genre => {
                at_least::<1>(command.name(), rest)?;
                assign_str(&join(rest), &mut self.draft.genre).map_err(already_set(command.name()))
            }
            RemCommand::Date => {
                at_least::<1>(command.name(), rest)?;
                assign_str(&join(rest), &mut self.draft.date).map_err(already_set(command.name()))
            }
            RemCommand::DiscId => {
                let [disc_id] = exact::<1>(command.name(), rest)?;
                let disc_id = parse_disc_id(disc_id)?;
                assign_with(disc_id, &mut self.draft.disc_id, |id| format!("{id:08X}"))
                    .map_err(already_set(command.name()))
            }
            RemCommand::Comment => {
                self.draft.remarks.push(join(rest));
                Ok(())
            }
            // The keyword is part of the remark; `REM FOO bar` is kept as "FOO bar".
            RemCommand::Other => {
                self.draft.remarks.push(join(parameters));
                Ok(())
            }
        }
    }
}

/// One `MM`, `SS` or `FF` field: one or two ASCII digits.
fn msf_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses `MM:SS:FF` into an index point; frames are kept as written.
pub(crate) fn parse_timestamp(timestamp: &str) -> FieldResult<IndexPoint> {
    let mut fields = timestamp.split(':').map(msf_field);

    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(Some(minutes)), Some(Some(seconds)), Some(Some(frame)), None) => {
            let secs = minutes as u64 * 60 + seconds as u64;
            Ok(IndexPoint::new(Duration::from_secs(secs), frame))
        }
        _ => Err(FieldError::InvalidTimestamp(timestamp.to_string())),
    }
}

/// Parses the 8 hex digit `REM DISCID` value.
pub(crate) fn parse_disc_id(disc_id: &str) -> FieldResult<u32> {
    let digits = disc_id.chars().count();
    if digits != DISC_ID_DIGITS {
        return Err(FieldError::DiscIdLength {
            expected: DISC_ID_DIGITS,
            actual: digits,
        });
    }

    let mut bytes = [0u8; DISC_ID_DIGITS / 2];
    hex::decode_to_slice(disc_id, &mut bytes).map_err(FieldError::InvalidDiscId)?;
    Ok(u32::from_be_bytes(bytes))
}
