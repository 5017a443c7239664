// Layout configuration - immutable constants describing key proportions
// Passed into geometry queries by value, never shared mutable state

use crate::notes::Basenote;

/// Default height/width ratio of a white key
pub const DEFAULT_KEY_HEIGHT_RATIO: f32 = 4.55;

/// Width of one key as a ratio of a white-key slot, in (0, 1]
///
/// The remainder of the slot is the visual gap between keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyDimensions {
    pub width_ratio: f32,
}

/// Proportions of the rendered keyboard
///
/// Offsets are measured in white-key widths from the C of the same
/// octave; accidentals sit between naturals at fractional positions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    white_key: KeyDimensions,
    black_key: KeyDimensions,
    note_offsets_from_c: [f32; 12],
}

impl LayoutConfig {
    pub fn new(
        white_key: KeyDimensions,
        black_key: KeyDimensions,
        note_offsets_from_c: [f32; 12],
    ) -> Self {
        assert!(
            white_key.width_ratio > 0.0 && white_key.width_ratio <= 1.0,
            "white key width ratio must be in (0, 1]"
        );
        assert!(
            black_key.width_ratio > 0.0 && black_key.width_ratio <= 1.0,
            "black key width ratio must be in (0, 1]"
        );
        Self {
            white_key,
            black_key,
            note_offsets_from_c,
        }
    }

    pub fn white_key(&self) -> KeyDimensions {
        self.white_key
    }

    pub fn black_key(&self) -> KeyDimensions {
        self.black_key
    }

    /// Horizontal offset of a pitch class from C, in white-key widths
    pub fn offset_from_c(&self, basenote: Basenote) -> f32 {
        self.note_offsets_from_c[basenote.semitone() as usize]
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(
            KeyDimensions { width_ratio: 0.8 },
            KeyDimensions { width_ratio: 0.66 },
            // C, Db, D, Eb, E, F, Gb, G, Ab, A, Bb, B
            [
                0.0, 0.55, 1.0, 1.8, 2.0, 3.0, 3.5, 4.0, 4.7, 5.0, 5.85, 6.0,
            ],
        )
    }
}
