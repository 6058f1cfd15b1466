//! Per-participant ledger state used during settlement.
//!
//! Once the group average is known, every participant lands in exactly one
//! position: owed money back, owing money, or already at the average.

use crate::money::almost_zero;
use serde::Serialize;

/// A named participant with a normalized contribution amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub amount: f64,
}

/// A participant who contributed more than the average.
#[derive(Debug, Clone)]
pub struct Creditor {
    pub name: String,

    /// Amount still to be collected on this creditor's behalf.
    pub owed: f64,
}

impl Creditor {
    /// Creates a creditor with the given outstanding balance.
    pub fn new(name: impl Into<String>, owed: f64) -> Self {
        Creditor {
            name: name.into(),
            owed,
        }
    }

    /// Collects `amount` toward the outstanding balance.
    pub fn collect(&mut self, amount: f64) {
        self.owed -= amount;
    }

    /// Returns `true` once the outstanding balance is within epsilon of zero.
    pub fn is_settled(&self) -> bool {
        almost_zero(self.owed)
    }
}

/// A participant who contributed less than the average.
#[derive(Debug, Clone)]
pub struct Debtor {
    pub name: String,

    /// Amount still to be paid out.
    pub owes: f64,

    /// Payments recorded so far, in settlement order.
    pub pays: Vec<Payment>,
}

impl Debtor {
    /// Creates a debtor with the given outstanding debt and no payments.
    pub fn new(name: impl Into<String>, owes: f64) -> Self {
        Debtor {
            name: name.into(),
            owes,
            pays: Vec::new(),
        }
    }

    /// Records a payment of `amount` to `creditor`.
    pub fn pay(&mut self, creditor: &str, amount: f64) {
        self.owes -= amount;
        self.pays.push(Payment {
            creditor: creditor.to_string(),
            amount,
        });
    }

    /// Returns `true` once the remaining debt is within epsilon of zero.
    pub fn is_settled(&self) -> bool {
        almost_zero(self.owes)
    }
}

/// A single payment instruction from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub creditor: String,
    pub amount: f64,
}

/// A participant's position relative to the group average.
#[derive(Debug, Clone)]
pub enum Position {
    Above(Creditor),
    Below(Debtor),
    AtAverage,
}

/// Classifies a participant against the average.
///
/// A contribution within epsilon of the average counts as at-average and
/// takes no part in matching.
pub fn classify(participant: &Participant, average: f64) -> Position {
    let diff = participant.amount - average;

    if almost_zero(diff) {
        Position::AtAverage
    } else if diff > 0.0 {
        Position::Above(Creditor::new(participant.name.as_str(), diff))
    } else {
        Position::Below(Debtor::new(participant.name.as_str(), -diff))
    }
}
