//! Derived ledger models.
//!
//! Ledger entries are produced fresh on each ledger request and never
//! persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentKind;

/// The origin of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerEntryKind {
    /// A credit derived from an attendance record.
    Attendance,
    /// A debit from an advance payment.
    Advance,
    /// A debit from a salary payment.
    Salary,
    /// A debit from a bonus payment.
    Bonus,
    /// A debit from any other payment.
    Other,
}

impl From<PaymentKind> for LedgerEntryKind {
    fn from(kind: PaymentKind) -> Self {
        match kind {
            PaymentKind::Advance => LedgerEntryKind::Advance,
            PaymentKind::Salary => LedgerEntryKind::Salary,
            PaymentKind::Bonus => LedgerEntryKind::Bonus,
            PaymentKind::Other => LedgerEntryKind::Other,
        }
    }
}

/// One derived credit-or-debit line in a worker's running financial
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The date of the underlying attendance or payment.
    pub date: NaiveDate,
    /// Human-readable description of the entry.
    pub description: String,
    /// The origin of the entry.
    pub kind: LedgerEntryKind,
    /// Money earned by this entry, rounded to the currency unit.
    pub credit: Decimal,
    /// Money paid out by this entry.
    pub debit: Decimal,
    /// Running balance after this entry is included.
    pub balance: Decimal,
}

/// Aggregated totals for a worker ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of all credits in the window.
    pub total_earned: Decimal,
    /// Sum of all debits in the window.
    pub total_paid: Decimal,
    /// `total_earned - total_paid`. Positive means money is owed to the
    /// worker; negative means the worker was overpaid within the window.
    pub balance: Decimal,
}

impl LedgerSummary {
    /// A summary with every field zero, used for empty record sets.
    pub fn zero() -> Self {
        Self {
            total_earned: Decimal::ZERO,
            total_paid: Decimal::ZERO,
            balance: Decimal::ZERO,
        }
    }
}

/// A worker's full derived ledger for a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerLedger {
    /// The date-ordered entry list.
    pub entries: Vec<LedgerEntry>,
    /// The window totals.
    pub summary: LedgerSummary,
}
