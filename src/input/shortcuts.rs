// Keyboard shortcuts - maps physical key strings to natural notes
// Rebuilt wholesale on every range change; there is no incremental patching

use std::collections::HashMap;

use crate::notes::{MidiNote, NoteRange};

/// Ordered list of physical keys a shortcut mapping assigns from
///
/// A layout is plain immutable data. The shipped layouts assign keys to
/// natural notes only: giving sharp/flat characters their own bindings
/// would collide (the sharp of C and the flat of D are the same key)
/// and break injectivity, so accidentals deliberately receive no
/// shortcut here. Callers wanting a different scheme supply their own
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutLayout {
    name: &'static str,
    keys: Vec<&'static str>,
}

impl ShortcutLayout {
    pub fn new(name: &'static str, keys: Vec<&'static str>) -> Self {
        Self { name, keys }
    }

    /// Home row: a s d f g h j k l ;
    pub fn home_row() -> Self {
        Self::new(
            "home_row",
            vec!["a", "s", "d", "f", "g", "h", "j", "k", "l", ";"],
        )
    }

    /// Bottom row: z x c v b n m , . /
    pub fn bottom_row() -> Self {
        Self::new(
            "bottom_row",
            vec!["z", "x", "c", "v", "b", "n", "m", ",", ".", "/"],
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }
}

/// A built key-string to note mapping for one keyboard range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutMap {
    mapping: HashMap<&'static str, MidiNote>,
}

impl ShortcutMap {
    /// Build the mapping for a range
    ///
    /// Layout keys are assigned positionally to the ascending natural
    /// notes inside the range, stopping when either runs out. The
    /// result is deterministic for identical inputs and injective: each
    /// key maps to a distinct note.
    pub fn build(range: &NoteRange, layout: &ShortcutLayout) -> ShortcutMap {
        let mapping: HashMap<&'static str, MidiNote> = layout
            .keys()
            .iter()
            .copied()
            .zip(range.natural_notes())
            .collect();
        log::debug!(
            "built {} shortcut mapping: {} keys over {}..={}",
            layout.name(),
            mapping.len(),
            range.first(),
            range.last()
        );
        ShortcutMap { mapping }
    }

    /// Look up a key string; `None` is a miss, a normal outcome
    pub fn lookup(&self, key: &str) -> Option<MidiNote> {
        self.mapping.get(key).copied()
    }

    /// The shortcut assigned to a note, if any
    pub fn key_for(&self, note: MidiNote) -> Option<&'static str> {
        self.mapping
            .iter()
            .find(|(_, &mapped)| mapped == note)
            .map(|(&key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn one_octave() -> NoteRange {
        NoteRange::new(60, 72).unwrap()
    }

    #[test]
    fn test_build_assigns_naturals_in_order() {
        let map = ShortcutMap::build(&one_octave(), &ShortcutLayout::home_row());
        // C4 D4 E4 F4 G4 A4 B4 C5 against a s d f g h j k
        assert_eq!(map.lookup("a"), Some(60));
        assert_eq!(map.lookup("s"), Some(62));
        assert_eq!(map.lookup("d"), Some(64));
        assert_eq!(map.lookup("k"), Some(72));
        // 8 naturals, 10 keys: the leftovers stay unassigned
        assert_eq!(map.len(), 8);
        assert_eq!(map.lookup("l"), None);
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let map = ShortcutMap::build(&one_octave(), &ShortcutLayout::home_row());
        assert_eq!(map.lookup("q"), None);
        assert_eq!(map.lookup(""), None);
    }

    #[test]
    fn test_mapping_is_injective() {
        let range = NoteRange::new(48, 84).unwrap();
        let map = ShortcutMap::build(&range, &ShortcutLayout::home_row());
        let notes: HashSet<MidiNote> = map.mapping.values().copied().collect();
        assert_eq!(notes.len(), map.len());
    }

    #[test]
    fn test_mapping_contains_only_naturals_in_range() {
        let range = one_octave();
        let map = ShortcutMap::build(&range, &ShortcutLayout::bottom_row());
        for &note in map.mapping.values() {
            assert!(range.contains(note));
            assert!(!crate::notes::attributes_of(note).unwrap().is_accidental);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let range = NoteRange::new(57, 77).unwrap();
        let layout = ShortcutLayout::home_row();
        assert_eq!(
            ShortcutMap::build(&range, &layout),
            ShortcutMap::build(&range, &layout)
        );
    }

    #[test]
    fn test_range_change_is_a_full_rebuild() {
        let layout = ShortcutLayout::home_row();
        let narrow = ShortcutMap::build(&one_octave(), &layout);
        let shifted = ShortcutMap::build(&NoteRange::new(62, 74).unwrap(), &layout);
        // Same key, different note: no stale assignments survive
        assert_eq!(narrow.lookup("a"), Some(60));
        assert_eq!(shifted.lookup("a"), Some(62));
    }

    #[test]
    fn test_key_for_reverse_lookup() {
        let map = ShortcutMap::build(&one_octave(), &ShortcutLayout::home_row());
        assert_eq!(map.key_for(60), Some("a"));
        assert_eq!(map.key_for(61), None);
    }
}
