// Song - ordered chord list consumed at sequencer construction
// The crate defines the format and the loader; song content is external

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::chord::Chord;

/// Song file errors
#[derive(Debug, Error)]
pub enum SongError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SongResult<T> = Result<T, SongError>;

/// A named, ordered list of chords
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub chords: Vec<Chord>,
}

impl Song {
    pub fn new(name: impl Into<String>, chords: Vec<Chord>) -> Self {
        Self {
            name: name.into(),
            chords,
        }
    }

    pub fn from_json_reader(reader: impl Read) -> SongResult<Song> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_writer(&self, writer: impl Write) -> SongResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
