//! Saved-row persistence for the host.
//!
//! The engine itself persists nothing. A host that wants the form to
//! survive a restart saves the raw rows through this store and rehydrates
//! them on startup. Rows are stored as a JSON array of `[name, amount]`
//! pairs, raw strings as typed, so a reload reproduces the form exactly,
//! bad input and all.

use crate::error::Result;
use crate::row::InputRow;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed store for raw input rows.
pub struct RowStore {
    path: PathBuf,
}

impl RowStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RowStore { path: path.into() }
    }

    /// Loads the saved rows, or `None` if nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Vec<InputRow>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let pairs: Vec<(String, String)> = serde_json::from_str(&text)?;
        Ok(Some(
            pairs
                .into_iter()
                .map(|(name, amount)| InputRow { name, amount })
                .collect(),
        ))
    }

    /// Saves the rows, overwriting any previous state.
    pub fn save(&self, rows: &[InputRow]) -> Result<()> {
        let pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|row| (row.name.as_str(), row.amount.as_str()))
            .collect();

        fs::write(&self.path, serde_json::to_string(&pairs)?)?;
        Ok(())
    }

    /// Removes the saved state. Nothing saved counts as success.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
