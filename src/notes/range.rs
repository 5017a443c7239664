// NoteRange - inclusive span of natural notes a keyboard covers
// Validated once at construction, immutable afterwards

use super::midi::{self, MidiNote};
use super::{NoteError, NoteResult, RangeErrorReason};

/// Inclusive, ascending range of natural MIDI notes
///
/// Both endpoints must be natural (white) keys inside the supported
/// table, and `first` must be strictly below `last`. Malformed ranges
/// fail fast at construction instead of being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRange {
    first: MidiNote,
    last: MidiNote,
}

impl NoteRange {
    pub fn new(first: MidiNote, last: MidiNote) -> NoteResult<NoteRange> {
        let reject = |reason| NoteError::InvalidRange {
            first,
            last,
            reason,
        };
        if first >= last {
            return Err(reject(RangeErrorReason::NotAscending));
        }
        for endpoint in [first, last] {
            let attrs = midi::attributes_of(endpoint)
                .map_err(|_| reject(RangeErrorReason::OutOfTable))?;
            if attrs.is_accidental {
                return Err(reject(RangeErrorReason::AccidentalEndpoint));
            }
        }
        Ok(NoteRange { first, last })
    }

    pub fn first(&self) -> MidiNote {
        self.first
    }

    pub fn last(&self) -> MidiNote {
        self.last
    }

    pub fn contains(&self, note: MidiNote) -> bool {
        (self.first..=self.last).contains(&note)
    }

    /// All notes in the range, ascending, accidentals included
    pub fn notes(&self) -> impl Iterator<Item = MidiNote> {
        self.first..=self.last
    }

    /// Natural notes in the range, ascending
    pub fn natural_notes(&self) -> impl Iterator<Item = MidiNote> + '_ {
        self.notes().filter(|&note| midi::is_natural(note))
    }

    /// Number of white keys the range spans
    pub fn natural_count(&self) -> usize {
        self.natural_notes().count()
    }
}
