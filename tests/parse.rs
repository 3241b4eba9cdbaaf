use cuesheet::cue::error::{CommandError, CueError, ErrorKind, FieldError, ValidationError};
use cuesheet::cue::{FileFormat, IndexPoint, Track, parse_str};
use std::time::Duration;

const ALL_FIELDS: &str = r#"REM GENRE "Heavy Metal"
REM DATE 1989
REM DISCID 860B640B
REM COMMENT "ExactAudioCopy v1.0b3"
PERFORMER "Sample Album Artist"
TITLE "Sample Album Title"
FILE "sample.flac" WAVE
  TRACK 01 AUDIO
    TITLE "Track 1"
    INDEX 01 00:01:00
  TRACK 02 AUDIO
    TITLE "Track 2"
    INDEX 00 00:59:70
    INDEX 01 01:00:00
"#;

fn point(secs: u64, frame: u32) -> IndexPoint {
    IndexPoint::new(Duration::from_secs(secs), frame)
}

fn chain(err: CueError) -> String {
    format!("{:#}", anyhow::Error::new(err))
}

#[test]
fn parses_minimal_sheet() {
    let sheet = parse_str("FILE \"sample.flac\" WAVE\nTRACK 01 AUDIO\nINDEX 01 00:00:00\n").unwrap();

    assert_eq!(sheet.file_name, "sample.flac");
    assert_eq!(sheet.format, FileFormat::Wave);
    assert_eq!(
        sheet.tracks,
        vec![Track {
            title: None,
            track_type: "AUDIO".to_string(),
            index00: None,
            index01: point(0, 0),
        }]
    );
}

#[test]
fn parses_all_fields() {
    let sheet = parse_str(ALL_FIELDS).unwrap();

    assert_eq!(sheet.album_performer.as_deref(), Some("Sample Album Artist"));
    assert_eq!(sheet.album_title.as_deref(), Some("Sample Album Title"));
    assert_eq!(sheet.genre.as_deref(), Some("Heavy Metal"));
    assert_eq!(sheet.date.as_deref(), Some("1989"));
    assert_eq!(sheet.disc_id, Some(0x860B_640B));
    assert_eq!(sheet.remarks, vec!["ExactAudioCopy v1.0b3"]);
    assert_eq!(sheet.tracks.len(), 2);
    assert_eq!(sheet.tracks[0].title.as_deref(), Some("Track 1"));
    assert_eq!(sheet.tracks[0].index01, point(1, 0));
    assert_eq!(sheet.tracks[1].title.as_deref(), Some("Track 2"));
    assert_eq!(sheet.tracks[1].index00, Some(point(59, 70)));
    assert_eq!(sheet.tracks[1].index01, point(60, 0));
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_str(ALL_FIELDS).unwrap(), parse_str(ALL_FIELDS).unwrap());
}

#[test]
fn repeated_track_number_fails_at_declaration() {
    let err = parse_str(
        "FILE a.wav WAVE\nTRACK 01 AUDIO\nINDEX 01 00:00:00\nTRACK 01 AUDIO\nINDEX 01 00:10:00\n",
    )
    .unwrap_err();

    assert_eq!(err.line(), Some(4));
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(chain(err).ends_with("expected track number 2, got 1"));
}

#[test]
fn short_disc_id_reports_length() {
    let err = parse_str("REM DISCID 1234567\n").unwrap_err();
    match err {
        CueError::Line {
            line: 1,
            source: CommandError::Command { source, .. },
            ..
        } => assert!(matches!(
            source,
            FieldError::DiscIdLength {
                expected: 8,
                actual: 7
            }
        )),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn later_track_starting_earlier_fails_validation() {
    let err = parse_str(
        "FILE a.wav WAVE\nTRACK 01 AUDIO\nINDEX 01 00:01:00\nTRACK 02 AUDIO\nINDEX 01 00:00:50\n",
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Structure);
    assert_eq!(
        chain(err),
        "invalid cue sheet: overlapping index points 00:01:00 and 00:00:50 in tracks 1 and 2"
    );
}

#[test]
fn unexpected_command_reports_physical_line() {
    let err = parse_str("\n  \nFILE a.wav WAVE\n\nUNSUPPORTED foo bar\n").unwrap_err();

    assert_eq!(err.line(), Some(5));
    assert_eq!(
        chain(err),
        "line 5:\tUNSUPPORTED foo bar: unexpected command: UNSUPPORTED"
    );
}

#[test]
fn repeated_fields_report_first_value() {
    let cases = [
        ("PERFORMER A\nPERFORMER A\n", "field already set: A"),
        ("TITLE Album\nTITLE Other\n", "field already set: Album"),
        ("REM GENRE Rock\nREM GENRE Pop\n", "field already set: Rock"),
        ("REM DATE 1974-01\nREM DATE 1974-01\n", "field already set: 1974-01"),
        ("FILE a.wav WAVE\nFILE a.wav MP3\n", "field already set: WAVE"),
        (
            "TRACK 01 AUDIO\nTITLE \"Sample track title\"\nTITLE Again\n",
            "field already set: Sample track title",
        ),
    ];

    for (input, expected) in cases {
        let err = parse_str(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State, "{input}");
        let message = chain(err);
        assert!(message.ends_with(expected), "{message}");
    }
}

#[test]
fn track_titles_may_be_interleaved() {
    let sheet = parse_str(
        "FILE a.wav WAVE\nTRACK 01 AUDIO\nINDEX 01 00:01:00\nTRACK 02 AUDIO\nTITLE \"Track 2\"\nINDEX 01 01:00:00\n",
    )
    .unwrap();

    assert_eq!(sheet.album_title, None);
    assert_eq!(sheet.tracks[0].title, None);
    assert_eq!(sheet.tracks[1].title.as_deref(), Some("Track 2"));
}

#[test]
fn structural_errors_follow_precedence() {
    let cases = [
        ("", ValidationError::MissingFileName),
        ("FILE \"\" WAVE\n", ValidationError::MissingFileName),
        ("FILE a.wav WAVE\n", ValidationError::MissingTracks),
        ("FILE a.wav WAVE\nTRACK 01 AUDIO\n", ValidationError::MissingIndex01(1)),
        ("TRACK 01 AUDIO\n", ValidationError::MissingFileName),
    ];

    for (input, expected) in cases {
        match parse_str(input) {
            Err(CueError::Invalid(err)) => assert_eq!(err, expected, "{input:?}"),
            other => panic!("unexpected result for {input:?}: {other:?}"),
        }
    }
}

#[test]
fn index_points_are_exposed_in_document_order() {
    let sheet = parse_str(ALL_FIELDS).unwrap();
    let points: Vec<_> = sheet.index_points().map(|(track, p)| (track, p.to_string())).collect();

    assert_eq!(
        points,
        vec![
            (1, "00:01:00".to_string()),
            (2, "00:59:70".to_string()),
            (2, "01:00:00".to_string()),
        ]
    );
}

#[test]
fn bare_rem_comment_is_accepted() {
    let sheet =
        parse_str("REM COMMENT\nFILE a.wav WAVE\nTRACK 01 AUDIO\nINDEX 01 00:00:00\n").unwrap();
    assert_eq!(sheet.remarks, vec![""]);
}

#[test]
fn pregap_after_own_start_fails_validation() {
    let err = parse_str("FILE a.wav WAVE\nTRACK 01 AUDIO\nINDEX 00 00:05:00\nINDEX 01 00:01:00\n")
        .unwrap_err();
    assert_eq!(
        chain(err),
        "invalid cue sheet: overlapping index points 00:05:00 and 00:01:00 in tracks 1 and 1"
    );
}
