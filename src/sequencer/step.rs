// Step sequencer - records, edits, and plays back ordered chords
// Recording <-> Playing state machine with a circular edit cursor

use std::time::Duration;

use super::chord::Chord;
use super::playback::PlaybackClock;

/// Default interval between playback steps
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(250);

/// Sequencer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Recording,
    Playing,
}

impl Mode {
    pub fn is_playing(&self) -> bool {
        matches!(self, Mode::Playing)
    }
}

/// Circular cursor shift
///
/// The single shift primitive every cursor update goes through, so all
/// call sites share one modulo semantics. The result is always in
/// `[0, base)` for any `delta`, negative intermediates included;
/// `base == 0` yields `0`.
pub fn shifted(cursor: usize, delta: isize, base: usize) -> usize {
    if base == 0 {
        return 0;
    }
    let base = base as isize;
    let index = (cursor as isize + delta) % base;
    ((index + base) % base) as usize
}

/// Step-sequence composer
///
/// Owns the chord sequence and the cursor exclusively; callers
/// serialize their own calls into it. The only asynchronous element is
/// the playback clock, and even that only queues ticks which `poll`
/// applies from the owner's thread.
#[derive(Debug)]
pub struct StepSequencer {
    sequence: Vec<Chord>,
    cursor: usize,
    mode: Mode,
    clock: Option<PlaybackClock>,
    tick_period: Duration,
}

impl StepSequencer {
    /// Create a sequencer seeded from a song
    ///
    /// Starts in Recording with the cursor on the last chord, ready to
    /// append.
    pub fn new(song: Vec<Chord>) -> Self {
        Self::with_tick_period(song, DEFAULT_TICK_PERIOD)
    }

    pub fn with_tick_period(song: Vec<Chord>, tick_period: Duration) -> Self {
        let cursor = song.len().saturating_sub(1);
        Self {
            sequence: song,
            cursor,
            mode: Mode::Recording,
            clock: None,
            tick_period,
        }
    }

    /// Record a chord after the cursor and step onto it
    ///
    /// Recording only; silently ignored while playing. An empty chord
    /// records a rest.
    pub fn record_chord(&mut self, chord: Chord) {
        if self.mode.is_playing() {
            return;
        }
        let insert_at = if self.sequence.is_empty() {
            0
        } else {
            self.cursor + 1
        };
        self.sequence.insert(insert_at, chord);
        self.cursor = shifted(self.cursor, 1, self.sequence.len());
    }

    /// Record a rest at the cursor
    pub fn add_rest(&mut self) {
        self.record_chord(Chord::rest());
    }

    /// Delete the chord under the cursor and shift the cursor backward
    ///
    /// Allowed whenever not playing; a no-op on an empty sequence.
    pub fn delete_at_cursor(&mut self) {
        if self.mode.is_playing() || self.sequence.is_empty() {
            return;
        }
        self.sequence.remove(self.cursor);
        self.cursor = shifted(self.cursor, -1, self.sequence.len());
    }

    /// Move the cursor one step left, wrapping; never mutates the sequence
    pub fn step_backward(&mut self) {
        self.cursor = shifted(self.cursor, -1, self.sequence.len());
    }

    /// Move the cursor one step right, wrapping; never mutates the sequence
    pub fn step_forward(&mut self) {
        self.cursor = shifted(self.cursor, 1, self.sequence.len());
    }

    /// Start playback
    ///
    /// A no-op when already playing: the existing clock is detected and
    /// never doubled.
    pub fn play(&mut self) {
        if self.clock.is_some() {
            return;
        }
        log::debug!("sequencer: recording -> playing");
        self.mode = Mode::Playing;
        self.clock = Some(PlaybackClock::start(self.tick_period));
    }

    /// Stop playback and resume editing at the tail
    ///
    /// Cancels the clock synchronously (no-op when none is running),
    /// re-enters Recording, and parks the cursor on the last chord
    /// regardless of where playback had reached.
    pub fn stop(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.cancel();
            log::debug!("sequencer: playing -> recording");
        }
        self.mode = Mode::Recording;
        self.cursor = self.sequence.len().saturating_sub(1);
    }

    /// Empty the sequence, stopping playback first
    pub fn clear(&mut self) {
        self.stop();
        self.sequence.clear();
        self.cursor = 0;
    }

    /// Apply pending playback ticks, one cursor step each
    ///
    /// Returns the number of steps taken; 0 outside of playback. Called
    /// from the owner's event loop, which keeps the sequence
    /// single-writer.
    pub fn poll(&mut self) -> usize {
        let Some(clock) = &self.clock else {
            return 0;
        };
        let steps = clock.pending_ticks();
        for _ in 0..steps {
            self.cursor = shifted(self.cursor, 1, self.sequence.len());
        }
        steps
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.mode.is_playing()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn chords(&self) -> &[Chord] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Chord under the cursor, if any
    pub fn current_chord(&self) -> Option<&Chord> {
        self.sequence.get(self.cursor)
    }
}
