use crate::cue::error::{ValidationError, ValidationResult};
use crate::cue::models::{CueSheet, Track};
use crate::cue::parser::{Draft, DraftTrack};

/// Checks the finished draft for required fields and index ordering.
pub(crate) fn validate(draft: Draft) -> ValidationResult<CueSheet> {
    let file_name = draft
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::MissingFileName)?;
    let format = draft.format.ok_or(ValidationError::MissingFormat)?;
    if draft.tracks.is_empty() {
        return Err(ValidationError::MissingTracks);
    }

    let tracks = draft
        .tracks
        .into_iter()
        .enumerate()
        .map(|(i, track)| validate_track(i + 1, track))
        .collect::<ValidationResult<Vec<_>>>()?;

    let cue_sheet = CueSheet {
        album_performer: draft.album_performer,
        album_title: draft.album_title,
        remarks: draft.remarks,
        date: draft.date,
        disc_id: draft.disc_id,
        format,
        file_name,
        genre: draft.genre,
        tracks,
    };

    validate_index_order(&cue_sheet)?;

    Ok(cue_sheet)
}

fn validate_track(number: usize, track: DraftTrack) -> ValidationResult<Track> {
    let track_type = track
        .track_type
        .filter(|track_type| !track_type.is_empty())
        .ok_or(ValidationError::MissingTrackType(number))?;
    let index01 = track
        .index01
        .ok_or(ValidationError::MissingIndex01(number))?;

    Ok(Track {
        title: track.title,
        track_type,
        index00: track.index00,
        index01,
    })
}

/// Every index point must come strictly after the one before it.
fn validate_index_order(cue_sheet: &CueSheet) -> ValidationResult<()> {
    let pairs = cue_sheet
        .index_points()
        .zip(cue_sheet.index_points().skip(1));

    for ((first_track, first), (second_track, second)) in pairs {
        if second <= first {
            return Err(ValidationError::OverlappingIndexPoints {
                first_track,
                first: *first,
                second_track,
                second: *second,
            });
        }
    }

    Ok(())
}
