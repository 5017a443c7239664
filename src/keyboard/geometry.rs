// Key geometry - positions and widths in white-key units
// A rendering layer multiplies these by its pixel width; nothing here draws

use crate::notes::{attributes_of, MidiNote, NoteRange, NoteResult};

use super::layout::LayoutConfig;

/// Fixed number of white-key widths per octave
///
/// Deliberately a constant 7 even when the range boundary cuts an
/// octave short; key positions are anchored to the octave grid, not to
/// a literal white-key tally.
const OCTAVE_WIDTH: f32 = 7.0;

/// Horizontal position of a key, in white-key widths from the range start
pub fn key_offset(note: MidiNote, range: &NoteRange, layout: &LayoutConfig) -> NoteResult<f32> {
    let attrs = attributes_of(note)?;
    // Range endpoints are validated at construction, so this cannot fail
    let start = attributes_of(range.first())?;
    let offset_from_first = layout.offset_from_c(attrs.basenote) - layout.offset_from_c(start.basenote);
    let octave_offset = OCTAVE_WIDTH * (attrs.octave - start.octave) as f32;
    Ok(offset_from_first + octave_offset)
}

/// Width of a key as a ratio of one white-key slot
pub fn key_width_ratio(note: MidiNote, layout: &LayoutConfig) -> NoteResult<f32> {
    let attrs = attributes_of(note)?;
    let dimensions = if attrs.is_accidental {
        layout.black_key()
    } else {
        layout.white_key()
    };
    Ok(dimensions.width_ratio)
}

/// Fraction of the total keyboard width one white-key slot occupies
pub fn white_key_fraction(range: &NoteRange) -> f32 {
    1.0 / range.natural_count() as f32
}

/// Keyboard height for a known total width
///
/// Only meaningful when the embedder knows its pixel width; with an
/// unknown width, sizing stays an external responsibility and this is
/// simply not called.
pub fn keyboard_height(width: f32, key_height_ratio: f32, range: &NoteRange) -> f32 {
    width * white_key_fraction(range) * key_height_ratio
}
