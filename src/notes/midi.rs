// MIDI note table - pure derivation of musical attributes from note numbers
// The supported table covers the 88 keys of a full piano (A0..C8)

use super::{NoteError, NoteResult};

/// MIDI note number (60 = C4)
pub type MidiNote = u8;

/// Lowest supported note (A0)
pub const MIN_MIDI_NOTE: MidiNote = 21;

/// Highest supported note (C8)
pub const MAX_MIDI_NOTE: MidiNote = 108;

/// The 12 pitch classes within an octave
///
/// Accidentals are named with flats, matching the layout offset table
/// they index into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basenote {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl Basenote {
    pub const ALL: [Basenote; 12] = [
        Basenote::C,
        Basenote::Db,
        Basenote::D,
        Basenote::Eb,
        Basenote::E,
        Basenote::F,
        Basenote::Gb,
        Basenote::G,
        Basenote::Ab,
        Basenote::A,
        Basenote::Bb,
        Basenote::B,
    ];

    /// Pitch class for a semitone offset within the octave (0 = C)
    pub fn from_semitone(semitone: u8) -> Basenote {
        Self::ALL[(semitone % 12) as usize]
    }

    /// Semitone offset from C (0..=11)
    pub fn semitone(&self) -> u8 {
        *self as u8
    }

    /// Whether this pitch class is a black (sharp/flat) key
    pub fn is_accidental(&self) -> bool {
        matches!(
            self,
            Basenote::Db | Basenote::Eb | Basenote::Gb | Basenote::Ab | Basenote::Bb
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Basenote::C => "C",
            Basenote::Db => "Db",
            Basenote::D => "D",
            Basenote::Eb => "Eb",
            Basenote::E => "E",
            Basenote::F => "F",
            Basenote::Gb => "Gb",
            Basenote::G => "G",
            Basenote::Ab => "Ab",
            Basenote::A => "A",
            Basenote::Bb => "Bb",
            Basenote::B => "B",
        }
    }
}

/// Musical attributes derived from a MIDI note number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteAttributes {
    /// Scientific pitch octave (60 -> octave 4)
    pub octave: i32,
    pub basenote: Basenote,
    pub is_accidental: bool,
}

impl NoteAttributes {
    /// Note name with octave (e.g. "C4", "Eb5")
    pub fn name(&self) -> String {
        format!("{}{}", self.basenote.name(), self.octave)
    }
}

/// Derive the attributes of a MIDI note
///
/// Pure and total over the supported table; fails fast outside it.
pub fn attributes_of(note: MidiNote) -> NoteResult<NoteAttributes> {
    if !(MIN_MIDI_NOTE..=MAX_MIDI_NOTE).contains(&note) {
        return Err(NoteError::InvalidNote(note));
    }
    let basenote = Basenote::from_semitone(note % 12);
    Ok(NoteAttributes {
        octave: i32::from(note / 12) - 1,
        basenote,
        is_accidental: basenote.is_accidental(),
    })
}

/// All natural (white-key) notes in the supported table, ascending
pub fn natural_notes() -> impl Iterator<Item = MidiNote> {
    (MIN_MIDI_NOTE..=MAX_MIDI_NOTE)
        .filter(|note| !Basenote::from_semitone(note % 12).is_accidental())
}

/// Whether a note is inside the supported table and natural
pub fn is_natural(note: MidiNote) -> bool {
    (MIN_MIDI_NOTE..=MAX_MIDI_NOTE).contains(&note)
        && !Basenote::from_semitone(note % 12).is_accidental()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_of_middle_c() {
        let attrs = attributes_of(60).unwrap();
        assert_eq!(attrs.octave, 4);
        assert_eq!(attrs.basenote, Basenote::C);
        assert!(!attrs.is_accidental);
        assert_eq!(attrs.name(), "C4");
    }

    #[test]
    fn test_attributes_of_accidental() {
        let attrs = attributes_of(61).unwrap();
        assert_eq!(attrs.basenote, Basenote::Db);
        assert!(attrs.is_accidental);
        assert_eq!(attrs.name(), "Db4");
    }

    #[test]
    fn test_attributes_of_table_bounds() {
        // A0 and C8 are the edges of a piano keybed
        let lowest = attributes_of(MIN_MIDI_NOTE).unwrap();
        assert_eq!(lowest.name(), "A0");
        let highest = attributes_of(MAX_MIDI_NOTE).unwrap();
        assert_eq!(highest.name(), "C8");
    }

    #[test]
    fn test_attributes_of_rejects_out_of_table() {
        assert_eq!(attributes_of(20), Err(NoteError::InvalidNote(20)));
        assert_eq!(attributes_of(109), Err(NoteError::InvalidNote(109)));
        assert_eq!(attributes_of(0), Err(NoteError::InvalidNote(0)));
        assert_eq!(attributes_of(127), Err(NoteError::InvalidNote(127)));
    }

    #[test]
    fn test_natural_notes_count() {
        // A full piano has 52 white keys
        assert_eq!(natural_notes().count(), 52);
    }

    #[test]
    fn test_natural_notes_ascending_and_natural() {
        let notes: Vec<MidiNote> = natural_notes().collect();
        assert!(notes.windows(2).all(|pair| pair[0] < pair[1]));
        for note in notes {
            assert!(!attributes_of(note).unwrap().is_accidental);
        }
    }

    #[test]
    fn test_basenote_round_trip() {
        for basenote in Basenote::ALL {
            assert_eq!(Basenote::from_semitone(basenote.semitone()), basenote);
        }
    }

    #[test]
    fn test_is_natural() {
        assert!(is_natural(60)); // C4
        assert!(!is_natural(61)); // Db4
        assert!(!is_natural(20)); // below the table
    }
}
