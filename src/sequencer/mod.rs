// Sequencer module - chords, songs, the playback clock, and the
// step-sequence state machine

pub mod chord;
pub mod playback;
pub mod song;
pub mod step;

pub use chord::Chord;
pub use playback::PlaybackClock;
pub use song::{Song, SongError, SongResult};
pub use step::{shifted, Mode, StepSequencer, DEFAULT_TICK_PERIOD};
