//! Report generation: validate filters, aggregate the window, map rows,
//! and hand them to the injected renderer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::aggregate::Period;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ReportFilters, ReportMetadata, Worker};
use crate::report::{ReportRenderer, map_report_rows};
use crate::store::{AttendanceStore, PaymentStore, SiteStore, Store, WorkerStore};

/// The title stamped into every employee report.
const REPORT_TITLE: &str = "Employee Report";

/// A finished report artifact ready for download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// The rendered bytes.
    pub data: Vec<u8>,
    /// Suggested download filename.
    pub filename: String,
    /// MIME type of the artifact.
    pub content_type: String,
}

/// Site and worker choices for the report filter form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Available sites as (id, name) pairs.
    pub sites: Vec<(Uuid, String)>,
    /// Available workers as (id, name) pairs.
    pub workers: Vec<(Uuid, String)>,
}

fn matching_workers(store: &dyn Store, filters: &ReportFilters) -> PayrollResult<Vec<Worker>> {
    let workers = store
        .list_workers(None)?
        .into_iter()
        .filter(|w| filters.status.matches(w.status))
        .filter(|w| filters.worker_id.is_none_or(|id| w.id == id))
        .filter(|w| {
            filters
                .site_id
                .is_none_or(|id| w.default_site_id == Some(id))
        })
        .collect();
    Ok(workers)
}

/// Generates the employee report for one filter set.
///
/// Validation runs before any store access: the date range must be
/// ordered. A filter set matching zero workers is a validation error
/// rather than an empty artifact. Workers with zero in-window records
/// still appear as zero-valued rows.
pub fn generate_employee_report(
    store: &dyn Store,
    renderer: &dyn ReportRenderer,
    filters: &ReportFilters,
    company_name: &str,
    now: DateTime<Utc>,
) -> PayrollResult<GeneratedReport> {
    let period = Period::custom(filters.start_date, filters.end_date)?;

    let workers = matching_workers(store, filters)?;
    if workers.is_empty() {
        return Err(PayrollError::validation(
            "no workers matched the report filters",
        ));
    }

    let site_names: HashMap<Uuid, String> = store
        .list_sites(false)?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    let attendances = store.attendance_in_range(period.start, period.end)?;
    let payments = store.payments_in_range(period.start, period.end)?;

    let rows = map_report_rows(&workers, &site_names, &attendances, &payments, &period);

    let metadata = ReportMetadata {
        company_name: company_name.to_string(),
        report_title: REPORT_TITLE.to_string(),
        period_from: period.start.format("%d/%m/%Y").to_string(),
        period_to: period.end.format("%d/%m/%Y").to_string(),
        generated_at: now,
    };

    let data = renderer.render(&rows, &metadata)?;
    let filename = format!(
        "employee_report_{}.{}",
        now.date_naive().format("%Y-%m-%d"),
        renderer.file_extension()
    );

    info!(
        rows = rows.len(),
        bytes = data.len(),
        %filename,
        "Generated employee report"
    );

    Ok(GeneratedReport {
        data,
        filename,
        content_type: renderer.content_type().to_string(),
    })
}

/// Site and worker choices for the report filter dropdowns.
pub fn report_filter_options(store: &dyn Store) -> PayrollResult<FilterOptions> {
    let sites = store
        .list_sites(false)?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    let workers = store
        .list_workers(None)?
        .into_iter()
        .map(|w| (w.id, w.full_name))
        .collect();
    Ok(FilterOptions { sites, workers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::attendance::{AttendanceInput, save_attendance};
    use crate::actions::payments::{PaymentInput, create_payment};
    use crate::actions::sites::{SiteInput, create_site};
    use crate::actions::workers::{WorkerInput, create_worker, toggle_worker_status};
    use crate::models::{AttendanceKind, PaymentKind, StatusFilter, WorkerStatus};
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    struct JsonRenderer;

    impl ReportRenderer for JsonRenderer {
        fn render(
            &self,
            rows: &[crate::models::ReportRow],
            metadata: &crate::models::ReportMetadata,
        ) -> PayrollResult<Vec<u8>> {
            let body = serde_json::json!({
                "title": metadata.report_title,
                "rows": rows,
            });
            serde_json::to_vec(&body)
                .map_err(|e| PayrollError::validation(format!("render failed: {}", e)))
        }

        fn content_type(&self) -> &'static str {
            "application/json"
        }

        fn file_extension(&self) -> &'static str {
            "json"
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_worker(store: &MemoryStore, name: &str, site: Option<Uuid>) -> Uuid {
        create_worker(
            store,
            WorkerInput {
                full_name: name.to_string(),
                phone: None,
                role: None,
                default_site_id: site,
                daily_rate: dec("700"),
                joining_date: date(2024, 1, 1),
                status: WorkerStatus::Active,
            },
        )
        .unwrap()
        .id
    }

    fn filters(start: NaiveDate, end: NaiveDate) -> ReportFilters {
        ReportFilters {
            start_date: start,
            end_date: end,
            site_id: None,
            worker_id: None,
            status: StatusFilter::All,
        }
    }

    #[test]
    fn test_inverted_range_fails_before_rendering() {
        let store = MemoryStore::new();
        add_worker(&store, "Ramesh", None);
        let result = generate_employee_report(
            &store,
            &JsonRenderer,
            &filters(date(2026, 7, 31), date(2026, 7, 1)),
            "Acme",
            Utc::now(),
        );
        assert!(matches!(result, Err(PayrollError::Validation { .. })));
    }

    #[test]
    fn test_zero_matching_workers_is_validation_error() {
        let store = MemoryStore::new();
        add_worker(&store, "Ramesh", None);

        let mut f = filters(date(2026, 7, 1), date(2026, 7, 31));
        f.status = StatusFilter::Inactive; // nobody is inactive

        let result =
            generate_employee_report(&store, &JsonRenderer, &f, "Acme", Utc::now());
        match result {
            Err(PayrollError::Validation { message }) => {
                assert!(message.contains("no workers matched"));
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_report_includes_zero_record_workers() {
        let store = MemoryStore::new();
        let busy = add_worker(&store, "Busy", None);
        add_worker(&store, "Idle", None);

        save_attendance(
            &store,
            AttendanceInput {
                date: date(2026, 7, 3),
                worker_id: busy,
                site_id: None,
                kind: AttendanceKind::FullDay,
                check_in: None,
                check_out: None,
                total_hours: None,
                notes: None,
            },
        )
        .unwrap();

        let report = generate_employee_report(
            &store,
            &JsonRenderer,
            &filters(date(2026, 7, 1), date(2026, 7, 31)),
            "Acme",
            Utc::now(),
        )
        .unwrap();

        let body: serde_json::Value = serde_json::from_slice(&report.data).unwrap();
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().any(|r| r["full_name"] == "Idle"
            && r["wages_earned"] == "0"
            && r["days_present"] == 0));
    }

    #[test]
    fn test_site_filter_restricts_workers() {
        let store = MemoryStore::new();
        let site = create_site(
            &store,
            SiteInput {
                name: "Riverside Tower".to_string(),
                address: None,
                description: None,
                is_active: true,
            },
        )
        .unwrap();
        add_worker(&store, "Here", Some(site.id));
        add_worker(&store, "Elsewhere", None);

        let mut f = filters(date(2026, 7, 1), date(2026, 7, 31));
        f.site_id = Some(site.id);

        let report =
            generate_employee_report(&store, &JsonRenderer, &f, "Acme", Utc::now()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&report.data).unwrap();
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["full_name"], "Here");
        assert_eq!(rows[0]["assigned_site"], "Riverside Tower");
    }

    #[test]
    fn test_status_filter_excludes_inactive_workers() {
        let store = MemoryStore::new();
        add_worker(&store, "Active", None);
        let inactive = add_worker(&store, "Inactive", None);
        toggle_worker_status(&store, inactive).unwrap();

        let mut f = filters(date(2026, 7, 1), date(2026, 7, 31));
        f.status = StatusFilter::Active;

        let report =
            generate_employee_report(&store, &JsonRenderer, &f, "Acme", Utc::now()).unwrap();
        let body: serde_json::Value = serde_json::from_slice(&report.data).unwrap();
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["full_name"], "Active");
    }

    #[test]
    fn test_report_window_scopes_pending_balance() {
        let store = MemoryStore::new();
        let worker_id = add_worker(&store, "Ramesh", None);

        save_attendance(
            &store,
            AttendanceInput {
                date: date(2026, 7, 3),
                worker_id,
                site_id: None,
                kind: AttendanceKind::FullDay,
                check_in: None,
                check_out: None,
                total_hours: None,
                notes: None,
            },
        )
        .unwrap();
        // Payment outside the window must not count.
        create_payment(
            &store,
            PaymentInput {
                worker_id,
                date: date(2026, 6, 20),
                amount: dec("9999"),
                kind: PaymentKind::Salary,
                notes: None,
            },
        )
        .unwrap();

        let report = generate_employee_report(
            &store,
            &JsonRenderer,
            &filters(date(2026, 7, 1), date(2026, 7, 31)),
            "Acme",
            Utc::now(),
        )
        .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&report.data).unwrap();
        let row = &body["rows"].as_array().unwrap()[0];
        assert_eq!(row["wages_earned"], "700");
        assert_eq!(row["amount_paid"], "0");
        assert_eq!(row["pending_balance"], "700");
    }

    #[test]
    fn test_filename_carries_generation_date_and_extension() {
        let store = MemoryStore::new();
        add_worker(&store, "Ramesh", None);

        let now = "2026-07-18T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let report = generate_employee_report(
            &store,
            &JsonRenderer,
            &filters(date(2026, 7, 1), date(2026, 7, 31)),
            "Acme",
            now,
        )
        .unwrap();
        assert_eq!(report.filename, "employee_report_2026-07-18.json");
        assert_eq!(report.content_type, "application/json");
    }

    #[test]
    fn test_filter_options_list_sites_and_workers() {
        let store = MemoryStore::new();
        create_site(
            &store,
            SiteInput {
                name: "Riverside Tower".to_string(),
                address: None,
                description: None,
                is_active: true,
            },
        )
        .unwrap();
        add_worker(&store, "Ramesh", None);

        let options = report_filter_options(&store).unwrap();
        assert_eq!(options.sites.len(), 1);
        assert_eq!(options.workers.len(), 1);
        assert_eq!(options.sites[0].1, "Riverside Tower");
        assert_eq!(options.workers[0].1, "Ramesh");
    }
}
