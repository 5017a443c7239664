// Input module - shortcut-to-note mapping and held-note bookkeeping
// External adapters feed key strings and pointer notes in; note
// notifications flow out through the NoteSink seam

pub mod active_notes;
pub mod shortcuts;

pub use active_notes::{ActiveNotes, NoteSink};
pub use shortcuts::{ShortcutLayout, ShortcutMap};
