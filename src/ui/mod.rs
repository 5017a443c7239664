// UI module - egui demo adapter around the core
// Translates framework events into core commands and core state into
// draw instructions; all geometry and sequencing logic lives in the core

pub mod app;

pub use app::ComposerApp;
