//! End-to-end composer scenarios
//!
//! Wires the shortcut mapper, the active-note set, and the step
//! sequencer together the way an input adapter would, and checks the
//! pieces agree on the resulting state.

use std::time::Duration;

use clavier::{
    ActiveNotes, Chord, LayoutConfig, MidiNote, Mode, NoteRange, NoteSink, ShortcutLayout,
    ShortcutMap, StepSequencer,
};

#[derive(Default)]
struct CountingSink {
    downs: Vec<MidiNote>,
    ups: Vec<MidiNote>,
}

impl NoteSink for CountingSink {
    fn play_note(&mut self, note: MidiNote) {
        self.downs.push(note);
    }

    fn stop_note(&mut self, note: MidiNote) {
        self.ups.push(note);
    }
}

/// Minimal adapter used by the scenarios: presses go through the
/// shortcut map, full release records the gathered chord.
struct Harness {
    shortcuts: ShortcutMap,
    active: ActiveNotes,
    sequencer: StepSequencer,
    sink: CountingSink,
    pending: Vec<MidiNote>,
}

impl Harness {
    fn new(range: NoteRange) -> Self {
        Self {
            shortcuts: ShortcutMap::build(&range, &ShortcutLayout::home_row()),
            active: ActiveNotes::new(),
            sequencer: StepSequencer::new(Vec::new()),
            sink: CountingSink::default(),
            pending: Vec::new(),
        }
    }

    fn key_down(&mut self, key: &str) {
        if let Some(note) = self.shortcuts.lookup(key) {
            if self.active.note_down(note, &mut self.sink) {
                self.pending.push(note);
            }
        }
    }

    fn key_up(&mut self, key: &str) {
        if let Some(note) = self.shortcuts.lookup(key) {
            self.active.note_up(note, &mut self.sink);
            if self.active.is_empty() && !self.pending.is_empty() {
                let chord = Chord::new(self.pending.drain(..));
                self.sequencer.record_chord(chord);
            }
        }
    }
}

#[test]
fn typing_a_melody_records_steps() {
    let range = NoteRange::new(60, 72).unwrap();
    let mut harness = Harness::new(range);

    for key in ["a", "s", "d"] {
        harness.key_down(key);
        harness.key_up(key);
    }

    assert_eq!(harness.sequencer.len(), 3);
    assert_eq!(
        harness.sequencer.chords(),
        &[Chord::new([60]), Chord::new([62]), Chord::new([64])]
    );
    assert_eq!(harness.sequencer.cursor(), 2);
    // One sound notification per press and release
    assert_eq!(harness.sink.downs, vec![60, 62, 64]);
    assert_eq!(harness.sink.ups, vec![60, 62, 64]);
}

#[test]
fn held_keys_become_one_chord() {
    let range = NoteRange::new(60, 72).unwrap();
    let mut harness = Harness::new(range);

    // C-E-G held together, then released
    harness.key_down("a");
    harness.key_down("d");
    harness.key_down("g");
    harness.key_up("d");
    harness.key_up("a");
    harness.key_up("g");

    assert_eq!(harness.sequencer.len(), 1);
    assert_eq!(harness.sequencer.chords()[0], Chord::new([60, 64, 67]));
}

#[test]
fn unmapped_keys_are_silent_misses() {
    let range = NoteRange::new(60, 72).unwrap();
    let mut harness = Harness::new(range);

    harness.key_down("q");
    harness.key_up("q");

    assert!(harness.sequencer.is_empty());
    assert!(harness.sink.downs.is_empty());
}

#[test]
fn playback_round_trip_resumes_editing_at_tail() {
    let song = vec![Chord::new([60]), Chord::new([64]), Chord::new([67])];
    let mut sequencer = StepSequencer::with_tick_period(song, Duration::from_millis(10));

    sequencer.play();
    std::thread::sleep(Duration::from_millis(60));
    sequencer.poll();
    sequencer.stop();

    assert_eq!(sequencer.mode(), Mode::Recording);
    assert_eq!(sequencer.cursor(), 2);

    // Editing picks up where the song ends
    sequencer.record_chord(Chord::new([72]));
    assert_eq!(sequencer.len(), 4);
    assert_eq!(sequencer.chords()[3], Chord::new([72]));
}

#[test]
fn geometry_and_mapping_agree_on_the_range() {
    let range = NoteRange::new(60, 72).unwrap();
    let layout = LayoutConfig::default();
    let shortcuts = ShortcutMap::build(&range, &ShortcutLayout::home_row());

    // Every shortcut note lands on a drawable white key
    for key in ["a", "s", "d", "f", "g", "h", "j", "k"] {
        let note = shortcuts.lookup(key).unwrap();
        let offset = clavier::key_offset(note, &range, &layout).unwrap();
        assert!((0.0..=7.0).contains(&offset));
        assert_eq!(clavier::key_width_ratio(note, &layout).unwrap(), 0.8);
    }
}
