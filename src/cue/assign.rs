use crate::cue::error::AlreadySet;
use std::fmt::Display;

/// Characters stripped from both ends of every line and every assigned string.
pub const TRIM_CHARS: &[char] = &[' ', '"', '\t', '\n'];

/// Trims a raw line, returning `None` for lines that carry no command.
pub fn normalize_line(raw: &str) -> Option<&str> {
    let line = raw.trim_matches(TRIM_CHARS);
    if line.is_empty() || line == "REM" {
        None
    } else {
        Some(line)
    }
}

/// Stores `value` unless the slot already holds one.
pub fn assign<T: Display>(value: T, slot: &mut Option<T>) -> Result<(), AlreadySet> {
    assign_with(value, slot, T::to_string)
}

/// Like [`assign`], with a custom rendering of the already stored value.
pub fn assign_with<T>(
    value: T,
    slot: &mut Option<T>,
    describe: impl FnOnce(&T) -> String,
) -> Result<(), AlreadySet> {
    if let Some(current) = slot {
        return Err(AlreadySet(describe(current)));
    }
    *slot = Some(value);
    Ok(())
}

pub fn assign_str(value: &str, slot: &mut Option<String>) -> Result<(), AlreadySet> {
    assign(value.trim_matches(TRIM_CHARS).to_string(), slot)
}
