//! Work-site operations: CRUD, status toggle, and detach-then-delete.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Site, Worker, WorkerStatus};
use crate::store::{AttendanceStore, SiteStore, Store, WorkerStore};

/// Payload for creating or updating a site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInput {
    /// The site name.
    pub name: String,
    /// Optional street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the site is in use; defaults to true.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl SiteInput {
    fn validate(&self) -> PayrollResult<()> {
        if self.name.trim().is_empty() {
            return Err(PayrollError::validation("site name is required"));
        }
        Ok(())
    }
}

/// A site plus the number of workers assigned to it by default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteWithCount {
    /// The site record.
    pub site: Site,
    /// Workers whose default site is this one.
    pub worker_count: u64,
}

/// A site plus its active workers and attendance volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDetail {
    /// The site record.
    pub site: Site,
    /// Active workers assigned here by default.
    pub workers: Vec<Worker>,
    /// Attendance records referencing this site.
    pub attendance_count: u64,
}

/// Lists sites, optionally restricted to active ones, with assigned
/// worker counts.
pub fn list_sites(store: &dyn Store, active_only: bool) -> PayrollResult<Vec<SiteWithCount>> {
    let sites = store.list_sites(active_only)?;
    sites
        .into_iter()
        .map(|site| {
            let worker_count = store.count_workers_for_site(site.id)?;
            Ok(SiteWithCount { site, worker_count })
        })
        .collect()
}

/// Fetches one site with its active workers and attendance count.
pub fn get_site(store: &dyn Store, id: Uuid) -> PayrollResult<SiteDetail> {
    let site = store
        .find_site(id)?
        .ok_or(PayrollError::SiteNotFound { id })?;

    let workers = store
        .list_workers(Some(WorkerStatus::Active))?
        .into_iter()
        .filter(|w| w.default_site_id == Some(id))
        .collect();
    let attendance_count = store.count_attendance_for_site(id)?;

    Ok(SiteDetail {
        site,
        workers,
        attendance_count,
    })
}

/// Creates a new site.
pub fn create_site(store: &dyn Store, input: SiteInput) -> PayrollResult<Site> {
    input.validate()?;

    let now = Utc::now();
    let site = Site {
        id: Uuid::new_v4(),
        name: input.name.trim().to_string(),
        address: input.address,
        description: input.description,
        is_active: input.is_active,
        created_at: now,
        updated_at: now,
    };
    store.insert_site(site.clone())?;
    Ok(site)
}

/// Updates an existing site.
pub fn update_site(store: &dyn Store, id: Uuid, input: SiteInput) -> PayrollResult<Site> {
    input.validate()?;

    let existing = store
        .find_site(id)?
        .ok_or(PayrollError::SiteNotFound { id })?;

    let site = Site {
        name: input.name.trim().to_string(),
        address: input.address,
        description: input.description,
        is_active: input.is_active,
        updated_at: Utc::now(),
        ..existing
    };
    if !store.update_site(site.clone())? {
        return Err(PayrollError::SiteNotFound { id });
    }
    Ok(site)
}

/// Deletes a site after detaching it from workers.
///
/// Two sequential store operations: first clear `default_site_id` on
/// every worker pointing here, then delete the site. Workers are never
/// cascade-deleted.
pub fn delete_site(store: &dyn Store, id: Uuid) -> PayrollResult<()> {
    if store.find_site(id)?.is_none() {
        return Err(PayrollError::SiteNotFound { id });
    }

    let detached = store.detach_default_site(id)?;
    if detached > 0 {
        info!(site_id = %id, detached, "Detached workers before site delete");
    }

    if !store.delete_site(id)? {
        return Err(PayrollError::SiteNotFound { id });
    }
    Ok(())
}

/// Flips a site between active and inactive.
pub fn toggle_site_status(store: &dyn Store, id: Uuid) -> PayrollResult<Site> {
    let mut site = store
        .find_site(id)?
        .ok_or(PayrollError::SiteNotFound { id })?;

    site.is_active = !site.is_active;
    site.updated_at = Utc::now();
    if !store.update_site(site.clone())? {
        return Err(PayrollError::SiteNotFound { id });
    }
    Ok(site)
}
