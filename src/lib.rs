// Clavier - piano keyboard geometry and step-sequence composer core
// Pure geometry/mapping queries plus a stateful sequencer; rendering
// and audio stay behind external seams

pub mod input;
pub mod keyboard;
pub mod notes;
pub mod sequencer;

#[cfg(feature = "gui")]
pub mod ui;

// Re-export commonly used types for convenience
pub use input::{ActiveNotes, NoteSink, ShortcutLayout, ShortcutMap};
pub use keyboard::{
    key_offset, key_width_ratio, keyboard_height, white_key_fraction, KeyDimensions, LayoutConfig,
};
pub use notes::{attributes_of, natural_notes, Basenote, MidiNote, NoteError, NoteRange};
pub use sequencer::{shifted, Chord, Mode, PlaybackClock, Song, StepSequencer};
