//! Core settlement engine.
//!
//! Runs the whole pipeline for one input snapshot: normalize rows, compute
//! the average contribution, partition participants around it, then
//! greedily match the largest debtor against the largest creditor until
//! every balance is within a cent of zero.

use crate::error::Result;
use crate::money::{almost_zero, Usd};
use crate::participant::{classify, Creditor, Debtor, Payment, Position};
use crate::row::InputRow;
use log::{debug, warn};
use serde::Serialize;
use std::io::Write;

/// Below this many raw rows the host is still typing the first entries.
const MIN_ROWS: usize = 3;

/// Splitting is meaningless with fewer named participants than this.
const MIN_NAMED: usize = 2;

/// The settlement engine.
///
/// Stateless: every call to [`calculate`](SplitEngine::calculate)
/// re-derives all intermediate state from the snapshot it is given, so a
/// host may recompute on every keystroke and always get the same answer
/// for the same rows.
pub struct SplitEngine;

impl SplitEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        SplitEngine
    }

    /// Computes the settlement plan for one snapshot of input rows.
    ///
    /// Returns `None` ("no splits to show") when fewer than three rows
    /// exist or fewer than two of them name a participant. Malformed
    /// amounts never fail the computation; they count as zero.
    pub fn calculate(&self, rows: &[InputRow]) -> Option<Splits> {
        if rows.len() < MIN_ROWS {
            return None;
        }

        let participants: Vec<_> = rows.iter().filter_map(InputRow::normalize).collect();
        if participants.len() < MIN_NAMED {
            return None;
        }

        let total: f64 = participants.iter().map(|p| p.amount).sum();
        let average = total / participants.len() as f64;

        let mut creditors = Vec::new();
        let mut debtors = Vec::new();
        for participant in &participants {
            match classify(participant, average) {
                Position::Above(creditor) => creditors.push(creditor),
                Position::Below(debtor) => debtors.push(debtor),
                Position::AtAverage => {}
            }
        }

        // Stable sorts, so equal balances keep input order.
        creditors.sort_by(|a, b| b.owed.total_cmp(&a.owed));
        debtors.sort_by(|a, b| b.owes.total_cmp(&a.owes));

        settle(&mut creditors, &mut debtors);

        Some(Splits {
            total,
            average,
            settlements: debtors
                .into_iter()
                .map(|debtor| DebtorSettlement {
                    debtor: debtor.name,
                    payments: debtor.pays,
                })
                .collect(),
        })
    }

    /// Renders the plan as the text report the host shows: a total line,
    /// an average line, and one block per debtor.
    pub fn write_report<W: Write>(&self, splits: &Splits, mut writer: W) -> Result<()> {
        writeln!(writer, "total   {}", Usd(splits.total))?;
        writeln!(writer, "average {}", Usd(splits.average))?;

        for settlement in &splits.settlements {
            writeln!(writer)?;
            writeln!(writer, "{} owes", settlement.debtor)?;
            for payment in &settlement.payments {
                writeln!(writer, "    {} {}", payment.creditor, Usd(payment.amount))?;
            }
        }

        Ok(())
    }
}

impl Default for SplitEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A computed settlement plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Splits {
    /// Sum of every normalized contribution.
    pub total: f64,

    /// Per-participant share of the total.
    pub average: f64,

    /// One entry per debtor, in descending order of initial debt.
    pub settlements: Vec<DebtorSettlement>,
}

/// The payments one debtor must make.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebtorSettlement {
    pub debtor: String,
    pub payments: Vec<Payment>,
}

/// Greedy matching loop: repeatedly drains the largest creditor into the
/// largest debtor until no unresolved debtor remains.
fn settle(creditors: &mut [Creditor], debtors: &mut [Debtor]) {
    while let Some(di) = find_max(debtors.iter().map(|d| d.owes)) {
        while !debtors[di].is_settled() {
            let ci = match find_max(creditors.iter().map(|c| c.owed)) {
                Some(ci) => ci,
                None => {
                    // The creditor pool is shared: once it is dry, no
                    // remaining debtor can be paid either.
                    warn!(
                        "{} still owes {} with no creditor left to receive it",
                        debtors[di].name,
                        Usd(debtors[di].owes)
                    );
                    return;
                }
            };

            let paid = debtors[di].owes.min(creditors[ci].owed);
            creditors[ci].collect(paid);
            debtors[di].pay(&creditors[ci].name, paid);

            debug!(
                "{} pays {} {}",
                debtors[di].name,
                creditors[ci].name,
                Usd(paid)
            );
        }
    }
}

/// Index of the largest remaining amount, skipping entries already within
/// epsilon of zero.
///
/// Re-scans the whole list on every call, so it always finds the true
/// current maximum regardless of prior mutation; the strict `>` means the
/// first entry encountered at the maximum wins a tie.
fn find_max(amounts: impl Iterator<Item = f64>) -> Option<usize> {
    let mut max_index = None;
    let mut max_amount = 0.0;

    for (index, amount) in amounts.enumerate() {
        if almost_zero(amount) {
            continue;
        }
        if amount > max_amount {
            max_amount = amount;
            max_index = Some(index);
        }
    }

    max_index
}
