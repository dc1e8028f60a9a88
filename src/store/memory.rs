//! In-memory store implementation.
//!
//! Backs tests, benches, and single-process deployments. All four
//! record families live in maps behind one RwLock; the natural-key
//! attendance upsert is atomic because it runs under the write lock.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{AttendanceRecord, PaymentRecord, Site, Worker, WorkerStatus};

use super::{
    AttendanceStore, PaymentStore, SiteStore, StoreError, StoreResult, WorkerStore,
};

#[derive(Debug, Default)]
struct Tables {
    workers: HashMap<Uuid, Worker>,
    sites: HashMap<Uuid, Site>,
    attendance: HashMap<Uuid, AttendanceRecord>,
    payments: HashMap<Uuid, PaymentRecord>,
}

/// An in-memory implementation of the full store contract.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::backend("store lock poisoned"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::backend("store lock poisoned"))
    }
}

impl WorkerStore for MemoryStore {
    fn list_workers(&self, status: Option<WorkerStatus>) -> StoreResult<Vec<Worker>> {
        let tables = self.read()?;
        let mut workers: Vec<Worker> = tables
            .workers
            .values()
            .filter(|w| status.is_none_or(|s| w.status == s))
            .cloned()
            .collect();
        workers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workers)
    }

    fn find_worker(&self, id: Uuid) -> StoreResult<Option<Worker>> {
        Ok(self.read()?.workers.get(&id).cloned())
    }

    fn insert_worker(&self, worker: Worker) -> StoreResult<()> {
        self.write()?.workers.insert(worker.id, worker);
        Ok(())
    }

    fn update_worker(&self, worker: Worker) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.workers.get_mut(&worker.id) {
            Some(existing) => {
                *existing = worker;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_worker(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.write()?.workers.remove(&id).is_some())
    }

    fn detach_default_site(&self, site_id: Uuid) -> StoreResult<u64> {
        let mut tables = self.write()?;
        let mut detached = 0;
        for worker in tables.workers.values_mut() {
            if worker.default_site_id == Some(site_id) {
                worker.default_site_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }

    fn count_workers_for_site(&self, site_id: Uuid) -> StoreResult<u64> {
        let tables = self.read()?;
        Ok(tables
            .workers
            .values()
            .filter(|w| w.default_site_id == Some(site_id))
            .count() as u64)
    }
}

impl SiteStore for MemoryStore {
    fn list_sites(&self, active_only: bool) -> StoreResult<Vec<Site>> {
        let tables = self.read()?;
        let mut sites: Vec<Site> = tables
            .sites
            .values()
            .filter(|s| !active_only || s.is_active)
            .cloned()
            .collect();
        sites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sites)
    }

    fn find_site(&self, id: Uuid) -> StoreResult<Option<Site>> {
        Ok(self.read()?.sites.get(&id).cloned())
    }

    fn insert_site(&self, site: Site) -> StoreResult<()> {
        self.write()?.sites.insert(site.id, site);
        Ok(())
    }

    fn update_site(&self, site: Site) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.sites.get_mut(&site.id) {
            Some(existing) => {
                *existing = site;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_site(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.write()?.sites.remove(&id).is_some())
    }
}

impl AttendanceStore for MemoryStore {
    fn find_attendance(&self, id: Uuid) -> StoreResult<Option<AttendanceRecord>> {
        Ok(self.read()?.attendance.get(&id).cloned())
    }

    fn upsert_attendance(&self, mut record: AttendanceRecord) -> StoreResult<AttendanceRecord> {
        let mut tables = self.write()?;
        let existing = tables
            .attendance
            .values()
            .find(|a| a.worker_id == record.worker_id && a.date == record.date)
            .map(|a| (a.id, a.created_at));

        if let Some((id, created_at)) = existing {
            record.id = id;
            record.created_at = created_at;
        }
        tables.attendance.insert(record.id, record.clone());
        Ok(record)
    }

    fn delete_attendance(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.write()?.attendance.remove(&id).is_some())
    }

    fn attendance_on(&self, date: NaiveDate) -> StoreResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let mut records: Vec<AttendanceRecord> = tables
            .attendance
            .values()
            .filter(|a| a.date == date)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(records)
    }

    fn attendance_for_worker(
        &self,
        worker_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let mut records: Vec<AttendanceRecord> = tables
            .attendance
            .values()
            .filter(|a| a.worker_id == worker_id && a.date >= start && a.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|a| a.date);
        Ok(records)
    }

    fn attendance_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<AttendanceRecord>> {
        let tables = self.read()?;
        let mut records: Vec<AttendanceRecord> = tables
            .attendance
            .values()
            .filter(|a| a.date >= start && a.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|a| a.date);
        Ok(records)
    }

    fn count_attendance_for_site(&self, site_id: Uuid) -> StoreResult<u64> {
        let tables = self.read()?;
        Ok(tables
            .attendance
            .values()
            .filter(|a| a.site_id == Some(site_id))
            .count() as u64)
    }
}

impl PaymentStore for MemoryStore {
    fn find_payment(&self, id: Uuid) -> StoreResult<Option<PaymentRecord>> {
        Ok(self.read()?.payments.get(&id).cloned())
    }

    fn insert_payment(&self, payment: PaymentRecord) -> StoreResult<()> {
        self.write()?.payments.insert(payment.id, payment);
        Ok(())
    }

    fn update_payment(&self, payment: PaymentRecord) -> StoreResult<bool> {
        let mut tables = self.write()?;
        match tables.payments.get_mut(&payment.id) {
            Some(existing) => {
                *existing = payment;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_payment(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.write()?.payments.remove(&id).is_some())
    }

    fn payments_for_worker(
        &self,
        worker_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> StoreResult<Vec<PaymentRecord>> {
        let tables = self.read()?;
        let mut payments: Vec<PaymentRecord> = tables
            .payments
            .values()
            .filter(|p| {
                p.worker_id == worker_id
                    && start.is_none_or(|s| p.date >= s)
                    && end.is_none_or(|e| p.date <= e)
            })
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.date);
        Ok(payments)
    }

    fn payments_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<PaymentRecord>> {
        let tables = self.read()?;
        let mut payments: Vec<PaymentRecord> = tables
            .payments
            .values()
            .filter(|p| p.date >= start && p.date <= end)
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.date);
        Ok(payments)
    }
}
