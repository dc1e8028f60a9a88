//! Payment operations: CRUD, filtered listing, and the monthly summary.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{Period, PaymentSummary, summarize_payments};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{PaymentKind, PaymentRecord};
use crate::store::{PaymentStore, Store, WorkerStore};

/// Payload for creating or updating a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    /// The worker who received the payment.
    pub worker_id: Uuid,
    /// The date the payment was made.
    pub date: NaiveDate,
    /// The amount paid; must be positive.
    pub amount: Decimal,
    /// The kind of payment.
    pub kind: PaymentKind,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl PaymentInput {
    fn validate(&self) -> PayrollResult<()> {
        if self.amount <= Decimal::ZERO {
            return Err(PayrollError::validation("payment amount must be positive"));
        }
        Ok(())
    }
}

/// A payment joined with the worker's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentWithWorker {
    /// The payment record.
    pub payment: PaymentRecord,
    /// The worker's full name.
    pub worker_name: String,
}

/// Lists payments, optionally filtered by worker and/or date range,
/// newest first, joined with worker names.
pub fn list_payments(
    store: &dyn Store,
    worker_id: Option<Uuid>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> PayrollResult<Vec<PaymentWithWorker>> {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(PayrollError::validation(format!(
                "start date {} is after end date {}",
                s, e
            )));
        }
    }

    let mut payments = match worker_id {
        Some(id) => store.payments_for_worker(id, start, end)?,
        None => store.payments_in_range(
            start.unwrap_or(NaiveDate::MIN),
            end.unwrap_or(NaiveDate::MAX),
        )?,
    };
    payments.reverse();

    let worker_names: HashMap<Uuid, String> = store
        .list_workers(None)?
        .into_iter()
        .map(|w| (w.id, w.full_name))
        .collect();

    Ok(payments
        .into_iter()
        .map(|payment| {
            let worker_name = worker_names
                .get(&payment.worker_id)
                .cloned()
                .unwrap_or_default();
            PaymentWithWorker {
                payment,
                worker_name,
            }
        })
        .collect())
}

/// One worker's payments, newest first.
pub fn worker_payments(store: &dyn Store, worker_id: Uuid) -> PayrollResult<Vec<PaymentRecord>> {
    if store.find_worker(worker_id)?.is_none() {
        return Err(PayrollError::WorkerNotFound { id: worker_id });
    }
    let mut payments = store.payments_for_worker(worker_id, None, None)?;
    payments.reverse();
    Ok(payments)
}

/// Records a new payment.
pub fn create_payment(store: &dyn Store, input: PaymentInput) -> PayrollResult<PaymentRecord> {
    input.validate()?;

    let worker_id = input.worker_id;
    if store.find_worker(worker_id)?.is_none() {
        return Err(PayrollError::WorkerNotFound { id: worker_id });
    }

    let now = Utc::now();
    let payment = PaymentRecord {
        id: Uuid::new_v4(),
        worker_id,
        date: input.date,
        amount: input.amount,
        kind: input.kind,
        notes: input.notes,
        created_at: now,
        updated_at: now,
    };
    store.insert_payment(payment.clone())?;
    Ok(payment)
}

/// Updates an existing payment.
pub fn update_payment(
    store: &dyn Store,
    id: Uuid,
    input: PaymentInput,
) -> PayrollResult<PaymentRecord> {
    input.validate()?;

    let existing = store
        .find_payment(id)?
        .ok_or(PayrollError::PaymentNotFound { id })?;

    let payment = PaymentRecord {
        worker_id: input.worker_id,
        date: input.date,
        amount: input.amount,
        kind: input.kind,
        notes: input.notes,
        updated_at: Utc::now(),
        ..existing
    };
    if !store.update_payment(payment.clone())? {
        return Err(PayrollError::PaymentNotFound { id });
    }
    Ok(payment)
}

/// Deletes a payment by id.
pub fn delete_payment(store: &dyn Store, id: Uuid) -> PayrollResult<()> {
    if !store.delete_payment(id)? {
        return Err(PayrollError::PaymentNotFound { id });
    }
    Ok(())
}

/// Payment sums grouped by kind for one calendar month.
pub fn monthly_payment_summary(
    store: &dyn Store,
    year: i32,
    month: u32,
) -> PayrollResult<PaymentSummary> {
    let period = Period::month(year, month)?;
    let payments = store.payments_in_range(period.start, period.end)?;
    Ok(summarize_payments(&payments, &period))
}
