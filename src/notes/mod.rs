// Notes module - MIDI note table and keyboard note ranges

pub mod midi;
pub mod range;

pub use midi::{attributes_of, natural_notes, Basenote, MidiNote, NoteAttributes};
pub use range::NoteRange;

use thiserror::Error;

/// Note-related errors
///
/// Both kinds are configuration errors: they are detected eagerly
/// (at lookup or at range construction) and surfaced to the caller
/// instead of being clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoteError {
    #[error("MIDI note {0} is outside the supported table ({min}..={max})",
        min = midi::MIN_MIDI_NOTE, max = midi::MAX_MIDI_NOTE)]
    InvalidNote(MidiNote),

    #[error("invalid note range {first}..={last}: {reason}")]
    InvalidRange {
        first: MidiNote,
        last: MidiNote,
        reason: RangeErrorReason,
    },
}

/// Why a note range was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeErrorReason {
    /// `first` must be strictly smaller than `last`
    NotAscending,
    /// An endpoint is outside the supported note table
    OutOfTable,
    /// An endpoint is an accidental (sharp/flat) note
    AccidentalEndpoint,
}

impl std::fmt::Display for RangeErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            RangeErrorReason::NotAscending => "first must be smaller than last",
            RangeErrorReason::OutOfTable => "endpoint outside the supported note table",
            RangeErrorReason::AccidentalEndpoint => "endpoints must be natural (white) notes",
        };
        f.write_str(text)
    }
}

pub type NoteResult<T> = Result<T, NoteError>;
