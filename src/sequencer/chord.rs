// Chord - the set of notes sounding at one sequence step
// An empty chord is a rest

use serde::{Deserialize, Serialize};

use crate::notes::MidiNote;

/// Simultaneously sounding notes at one step
///
/// Normalized on construction: duplicates removed, notes ascending.
/// Serializes as a plain array of note numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MidiNote>", into = "Vec<MidiNote>")]
pub struct Chord {
    notes: Vec<MidiNote>,
}

impl Chord {
    pub fn new(notes: impl IntoIterator<Item = MidiNote>) -> Self {
        let mut notes: Vec<MidiNote> = notes.into_iter().collect();
        notes.sort_unstable();
        notes.dedup();
        Self { notes }
    }

    /// The empty chord
    pub fn rest() -> Self {
        Self::default()
    }

    pub fn is_rest(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, note: MidiNote) -> bool {
        self.notes.binary_search(&note).is_ok()
    }

    /// Notes in ascending order
    pub fn notes(&self) -> &[MidiNote] {
        &self.notes
    }
}

impl From<Vec<MidiNote>> for Chord {
    fn from(notes: Vec<MidiNote>) -> Self {
        Chord::new(notes)
    }
}

impl From<Chord> for Vec<MidiNote> {
    fn from(chord: Chord) -> Self {
        chord.notes
    }
}

impl FromIterator<MidiNote> for Chord {
    fn from_iter<I: IntoIterator<Item = MidiNote>>(iter: I) -> Self {
        Chord::new(iter)
    }
}
