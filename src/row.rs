//! Input row model and amount normalization.

use crate::error::Result;
use crate::participant::Participant;
use csv::{ReaderBuilder, Trim};
use log::warn;
use serde::Deserialize;
use std::io::Read;

/// A raw participant row as supplied by the host.
///
/// The amount stays a string until normalization so that saved state can
/// reproduce exactly what was typed, valid or not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputRow {
    /// Participant name. Rows with an empty name are excluded from the split.
    pub name: String,

    /// Raw contribution amount, unvalidated.
    #[serde(default)]
    pub amount: String,
}

impl InputRow {
    /// Creates a row from raw name and amount strings.
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        InputRow {
            name: name.into(),
            amount: amount.into(),
        }
    }

    /// Returns `true` if the row names a participant.
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Normalizes the row into a participant, or `None` for unnamed rows.
    pub fn normalize(&self) -> Option<Participant> {
        if !self.is_named() {
            return None;
        }

        Some(Participant {
            name: self.name.clone(),
            amount: parse_amount(&self.amount),
        })
    }
}

/// Parses a raw amount string into a number.
///
/// Every character that is not a digit, a decimal point, or a minus sign
/// is discarded before parsing, and anything that still fails to parse
/// counts as zero. Accepting malformed input is the contract here, not an
/// oversight: the host feeds this half-typed form values like `"$12.50 "`.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Reads `name,amount` rows from a CSV source.
///
/// Fields are trimmed and a record may omit the amount field entirely.
/// Records that fail to deserialize are logged at warn level and skipped,
/// so one mangled line never discards the rest of the file.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<InputRow>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        match result {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Row {}: CSV parse error: {}", row_num, e),
        }
    }

    Ok(rows)
}
