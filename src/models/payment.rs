//! Payment record model and related types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of payment made to a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentKind {
    /// Money given ahead of wages earned.
    Advance,
    /// A wage settlement.
    Salary,
    /// An extra payment on top of wages.
    Bonus,
    /// Anything that does not fit the other kinds.
    Other,
}

impl PaymentKind {
    /// A human-readable label, used as the ledger description when a
    /// payment carries no notes.
    pub fn label(self) -> &'static str {
        match self {
            PaymentKind::Advance => "ADVANCE",
            PaymentKind::Salary => "SALARY",
            PaymentKind::Bonus => "BONUS",
            PaymentKind::Other => "OTHER",
        }
    }
}

/// Money paid out to a worker on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier for the payment.
    pub id: Uuid,
    /// The worker who received the payment.
    pub worker_id: Uuid,
    /// The date the payment was made.
    pub date: NaiveDate,
    /// The amount paid. Invariant: positive.
    pub amount: Decimal,
    /// The kind of payment.
    pub kind: PaymentKind,
    /// Optional free-form notes.
    pub notes: Option<String>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(PaymentKind::Advance.label(), "ADVANCE");
        assert_eq!(PaymentKind::Salary.label(), "SALARY");
        assert_eq!(PaymentKind::Bonus.label(), "BONUS");
        assert_eq!(PaymentKind::Other.label(), "OTHER");
    }

    #[test]
    fn test_kind_serialization_matches_label() {
        for kind in [
            PaymentKind::Advance,
            PaymentKind::Salary,
            PaymentKind::Bonus,
            PaymentKind::Other,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn test_serialize_payment_round_trip() {
        let payment = PaymentRecord {
            id: Uuid::new_v4(),
            worker_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 7, 10).unwrap(),
            amount: Decimal::from(5000),
            kind: PaymentKind::Salary,
            notes: Some("July settlement".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&payment).unwrap();
        let deserialized: PaymentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(payment, deserialized);
    }
}
