pub mod check;
pub mod cue;
