//! In-period payment rollups.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PaymentKind, PaymentRecord};

use super::Period;

/// In-period payment sums grouped by kind, plus a grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Sum of ADVANCE payments.
    pub advance: Decimal,
    /// Sum of SALARY payments.
    pub salary: Decimal,
    /// Sum of BONUS payments.
    pub bonus: Decimal,
    /// Sum of OTHER payments.
    pub other: Decimal,
    /// Grand total across all kinds.
    pub total: Decimal,
}

impl PaymentSummary {
    /// A summary with every field zero.
    pub fn zero() -> Self {
        Self {
            advance: Decimal::ZERO,
            salary: Decimal::ZERO,
            bonus: Decimal::ZERO,
            other: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// Sums the in-period payments grouped by payment kind.
///
/// Records outside the period are ignored.
pub fn summarize_payments(payments: &[PaymentRecord], period: &Period) -> PaymentSummary {
    let mut summary = PaymentSummary::zero();

    for payment in payments {
        if !period.contains(payment.date) {
            continue;
        }
        match payment.kind {
            PaymentKind::Advance => summary.advance += payment.amount,
            PaymentKind::Salary => summary.salary += payment.amount,
            PaymentKind::Bonus => summary.bonus += payment.amount,
            PaymentKind::Other => summary.other += payment.amount,
        }
        summary.total += payment.amount;
    }

    summary
}
