// Active notes - deduplicated set of currently sounding notes
// Emits exactly one notification per real transition through NoteSink

use std::collections::BTreeSet;

use crate::notes::MidiNote;

/// Receiver of note start/stop notifications
///
/// The sound-producing collaborator lives behind this seam; the core
/// never synthesizes audio itself.
pub trait NoteSink {
    fn play_note(&mut self, note: MidiNote);
    fn stop_note(&mut self, note: MidiNote);
}

/// Set of currently held notes
///
/// `note_down`/`note_up` are idempotent: repeated presses of a held
/// note (or releases of an absent one) neither mutate the set nor
/// notify the sink. While the disabled flag is set both operations are
/// suppressed entirely, which models a busy keyboard without callers
/// special-casing it.
#[derive(Debug, Default)]
pub struct ActiveNotes {
    held: BTreeSet<MidiNote>,
    disabled: bool,
}

impl ActiveNotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock or unlock input; while locked, presses and releases are
    /// silently ignored
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Press a note; returns whether a notification fired
    pub fn note_down(&mut self, note: MidiNote, sink: &mut dyn NoteSink) -> bool {
        if self.disabled || !self.held.insert(note) {
            return false;
        }
        sink.play_note(note);
        true
    }

    /// Release a note; returns whether a notification fired
    pub fn note_up(&mut self, note: MidiNote, sink: &mut dyn NoteSink) -> bool {
        if self.disabled || !self.held.remove(&note) {
            return false;
        }
        sink.stop_note(note);
        true
    }

    /// Release everything that is held, notifying once per note
    ///
    /// Used on stop and teardown so the sink never leaks hanging notes.
    /// Not subject to the disabled flag: a locked keyboard must still
    /// be silenceable.
    pub fn release_all(&mut self, sink: &mut dyn NoteSink) {
        for note in std::mem::take(&mut self.held) {
            sink.stop_note(note);
        }
    }

    /// Held notes in ascending numeric order, regardless of press order
    pub fn notes(&self) -> impl Iterator<Item = MidiNote> + '_ {
        self.held.iter().copied()
    }

    pub fn contains(&self, note: MidiNote) -> bool {
        self.held.contains(&note)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
