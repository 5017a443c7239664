// Keyboard module - layout configuration and key geometry
// Pure queries a rendering layer consumes; nothing here draws

pub mod geometry;
pub mod layout;

pub use geometry::{key_offset, key_width_ratio, keyboard_height, white_key_fraction};
pub use layout::{KeyDimensions, LayoutConfig, DEFAULT_KEY_HEIGHT_RATIO};
