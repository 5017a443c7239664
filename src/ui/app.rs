// Composer app - interactive piano with the step-sequence composer
// Thin adapter: key/pointer events in, core queries out to the painter

use eframe::egui;
use egui::{Color32, Pos2, Rect, Sense, Ui, Vec2};

use crate::input::{ActiveNotes, NoteSink, ShortcutLayout, ShortcutMap};
use crate::keyboard::{
    key_offset, key_width_ratio, keyboard_height, white_key_fraction, LayoutConfig,
    DEFAULT_KEY_HEIGHT_RATIO,
};
use crate::notes::{attributes_of, MidiNote, NoteRange};
use crate::sequencer::{Chord, Song, StepSequencer};

/// Stand-in for a synthesizer: just logs the notifications
///
/// The core never produces audio; a real embedder plugs its synth in
/// through the same seam.
#[derive(Debug, Default)]
struct LoggingSynth;

impl NoteSink for LoggingSynth {
    fn play_note(&mut self, note: MidiNote) {
        log::info!("note down: {}", note);
    }

    fn stop_note(&mut self, note: MidiNote) {
        log::info!("note up: {}", note);
    }
}

/// A short built-in song to seed the composer with
fn sample_song() -> Song {
    let steps: &[&[MidiNote]] = &[
        &[65],
        &[69],
        &[71],
        &[],
        &[65],
        &[69],
        &[71],
        &[],
        &[65],
        &[69],
        &[71],
        &[76],
        &[74],
        &[],
        &[71],
        &[72],
        &[71],
        &[67],
        &[64],
        &[],
    ];
    Song::new(
        "lost woods theme",
        steps
            .iter()
            .map(|notes| Chord::new(notes.iter().copied()))
            .collect(),
    )
}

pub struct ComposerApp {
    range: NoteRange,
    layout: LayoutConfig,
    shortcuts: ShortcutMap,
    sequencer: StepSequencer,
    active: ActiveNotes,
    synth: LoggingSynth,
    /// Notes gathered since the last full release; recorded as one
    /// chord when everything is let go
    pending_chord: Vec<MidiNote>,
    /// Note currently held by the pointer, for gliss tracking
    pointer_note: Option<MidiNote>,
}

impl Default for ComposerApp {
    fn default() -> Self {
        // Two octaves put every home-row shortcut on a visible key
        let range = NoteRange::new(60, 84).expect("static range is valid");
        let shortcuts = ShortcutMap::build(&range, &ShortcutLayout::home_row());
        Self {
            range,
            layout: LayoutConfig::default(),
            shortcuts,
            sequencer: StepSequencer::new(sample_song().chords),
            active: ActiveNotes::new(),
            synth: LoggingSynth,
            pending_chord: Vec::new(),
            pointer_note: None,
        }
    }
}

impl eframe::App for ComposerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply playback ticks before reading any state
        self.sequencer.poll();

        self.handle_key_events(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Clavier");
            ui.add_space(8.0);
            self.show_keyboard(ui);
            ui.add_space(8.0);
            self.show_transport(ui);
        });

        if self.sequencer.is_playing() {
            ctx.request_repaint_after(std::time::Duration::from_millis(16));
        }
    }
}

impl ComposerApp {
    /// Keys currently highlighted on the keyboard
    ///
    /// While playing that is the chord under the cursor; while
    /// recording it is whatever the user holds.
    fn highlighted(&self) -> Vec<MidiNote> {
        if self.sequencer.is_playing() {
            self.sequencer
                .current_chord()
                .map(|chord| chord.notes().to_vec())
                .unwrap_or_default()
        } else {
            self.active.notes().collect()
        }
    }

    fn handle_key_events(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|input| input.events.clone());
        for event in events {
            let egui::Event::Key {
                key,
                pressed,
                repeat,
                modifiers,
                ..
            } = event
            else {
                continue;
            };
            if repeat || modifiers.ctrl || modifiers.command || modifiers.shift {
                continue;
            }

            // Shortcut table first; a miss falls through to the
            // composer commands
            if let Some(note) = shortcut_string(key).and_then(|s| self.shortcuts.lookup(s)) {
                if pressed {
                    self.press(note);
                } else {
                    self.release(note);
                }
                continue;
            }

            if pressed {
                match key {
                    egui::Key::Minus => self.sequencer.add_rest(),
                    egui::Key::Backspace => self.sequencer.delete_at_cursor(),
                    egui::Key::ArrowLeft => self.sequencer.step_backward(),
                    egui::Key::ArrowRight => self.sequencer.step_forward(),
                    egui::Key::Space => {
                        if self.sequencer.is_playing() {
                            self.stop();
                        } else {
                            self.sequencer.play();
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    fn press(&mut self, note: MidiNote) {
        if self.active.note_down(note, &mut self.synth) {
            self.pending_chord.push(note);
        }
    }

    /// Releasing the last held key records the gathered notes as one
    /// chord (simultaneous presses become a single step)
    fn release(&mut self, note: MidiNote) {
        self.active.note_up(note, &mut self.synth);
        if self.active.is_empty() && !self.pending_chord.is_empty() {
            let chord = Chord::new(self.pending_chord.drain(..));
            self.sequencer.record_chord(chord);
        }
    }

    fn stop(&mut self) {
        self.sequencer.stop();
        self.active.release_all(&mut self.synth);
        self.pending_chord.clear();
    }

    fn show_keyboard(&mut self, ui: &mut Ui) {
        let width = ui.available_width();
        let height = keyboard_height(width, DEFAULT_KEY_HEIGHT_RATIO, &self.range);
        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, height), Sense::click_and_drag());
        let rect = response.rect;

        let highlighted = self.highlighted();
        let slot_width = white_key_fraction(&self.range) * width;

        // White keys first, accidentals painted on top
        for accidental_pass in [false, true] {
            for note in self.range.notes() {
                let attrs = attributes_of(note).expect("range notes are in the table");
                if attrs.is_accidental != accidental_pass {
                    continue;
                }
                let key_rect = self.key_rect(note, rect, slot_width);
                let active = highlighted.contains(&note);
                let fill = match (attrs.is_accidental, active) {
                    (false, false) => Color32::from_gray(245),
                    (false, true) => Color32::from_rgb(130, 180, 255),
                    (true, false) => Color32::from_gray(40),
                    (true, true) => Color32::from_rgb(70, 120, 220),
                };
                painter.rect_filled(key_rect, 2.0, fill);
                painter.rect_stroke(key_rect, 2.0, (1.0, Color32::from_gray(100)));

                if let Some(shortcut) = self.shortcuts.key_for(note) {
                    painter.text(
                        Pos2::new(key_rect.center().x, key_rect.bottom() - 12.0),
                        egui::Align2::CENTER_CENTER,
                        shortcut,
                        egui::FontId::proportional(12.0),
                        if attrs.is_accidental {
                            Color32::WHITE
                        } else {
                            Color32::DARK_GRAY
                        },
                    );
                }
            }
        }

        self.handle_pointer(&response, rect, slot_width);
    }

    /// Pixel rectangle of one key inside the keyboard rect
    fn key_rect(&self, note: MidiNote, rect: Rect, slot_width: f32) -> Rect {
        let attrs = attributes_of(note).expect("range notes are in the table");
        let offset = key_offset(note, &self.range, &self.layout).expect("note is in the table");
        let ratio = key_width_ratio(note, &self.layout).expect("note is in the table");
        let left = rect.left() + offset * slot_width;
        let height = if attrs.is_accidental {
            rect.height() * 0.6
        } else {
            rect.height()
        };
        Rect::from_min_size(
            Pos2::new(left, rect.top()),
            Vec2::new(ratio * slot_width, height),
        )
    }

    /// Pointer input bypasses the shortcut mapper and yields notes
    /// directly; dragging across keys glisses
    fn handle_pointer(&mut self, response: &egui::Response, rect: Rect, slot_width: f32) {
        let pressed_note = if response.is_pointer_button_down_on() {
            response
                .interact_pointer_pos()
                .and_then(|pos| self.note_at(pos, rect, slot_width))
        } else {
            None
        };

        if pressed_note != self.pointer_note {
            if let Some(previous) = self.pointer_note.take() {
                self.release(previous);
            }
            if let Some(note) = pressed_note {
                self.press(note);
            }
            self.pointer_note = pressed_note;
        }
    }

    /// Hit-test a pointer position; accidentals sit on top, so they win
    fn note_at(&self, pos: Pos2, rect: Rect, slot_width: f32) -> Option<MidiNote> {
        let mut hit = None;
        for note in self.range.notes() {
            if self.key_rect(note, rect, slot_width).contains(pos) {
                let accidental = attributes_of(note).ok()?.is_accidental;
                if accidental {
                    return Some(note);
                }
                hit = Some(note);
            }
        }
        hit
    }

    fn show_transport(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if self.sequencer.is_playing() {
                if ui.button("⏹ Stop").clicked() {
                    self.stop();
                }
            } else if ui.button("▶ Play").clicked() {
                self.sequencer.play();
            }

            let editing = !self.sequencer.is_playing();
            if ui.add_enabled(editing, egui::Button::new("Rest")).clicked() {
                self.sequencer.add_rest();
            }
            if ui
                .add_enabled(editing, egui::Button::new("Delete"))
                .clicked()
            {
                self.sequencer.delete_at_cursor();
            }
            if ui.button("⏪").clicked() {
                self.sequencer.step_backward();
            }
            if ui.button("⏩").clicked() {
                self.sequencer.step_forward();
            }
            if ui
                .add_enabled(editing, egui::Button::new("Clear"))
                .clicked()
            {
                self.sequencer.clear();
            }

            ui.separator();
            ui.label(format!(
                "step {} / {}",
                if self.sequencer.is_empty() {
                    0
                } else {
                    self.sequencer.cursor() + 1
                },
                self.sequencer.len()
            ));
        });
    }
}

/// Key string a physical key contributes to shortcut lookup
fn shortcut_string(key: egui::Key) -> Option<&'static str> {
    let s = match key {
        egui::Key::A => "a",
        egui::Key::S => "s",
        egui::Key::D => "d",
        egui::Key::F => "f",
        egui::Key::G => "g",
        egui::Key::H => "h",
        egui::Key::J => "j",
        egui::Key::K => "k",
        egui::Key::L => "l",
        egui::Key::Semicolon => ";",
        egui::Key::Z => "z",
        egui::Key::X => "x",
        egui::Key::C => "c",
        egui::Key::V => "v",
        egui::Key::B => "b",
        egui::Key::N => "n",
        egui::Key::M => "m",
        egui::Key::Comma => ",",
        egui::Key::Period => ".",
        egui::Key::Slash => "/",
        _ => return None,
    };
    Some(s)
}
