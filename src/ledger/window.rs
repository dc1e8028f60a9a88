//! Ledger date-window resolution.
//!
//! A ledger request may omit either bound; the window defaults to the
//! three-calendar-month span ending today.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{PayrollError, PayrollResult};

/// An inclusive date range for a ledger computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerWindow {
    /// First day included in the window.
    pub start: NaiveDate,
    /// Last day included in the window.
    pub end: NaiveDate,
}

impl LedgerWindow {
    /// Resolves optional bounds into a concrete window.
    ///
    /// `end` defaults to `today`; `start` defaults to the first day of
    /// the month two months prior to `end`, giving a three-calendar-month
    /// default span. An inverted range is a validation error, checked
    /// before any store access.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_ledger::ledger::LedgerWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 7, 18).unwrap();
    /// let window = LedgerWindow::resolve(None, None, today).unwrap();
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2026, 5, 1).unwrap());
    /// assert_eq!(window.end, today);
    /// ```
    pub fn resolve(
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> PayrollResult<Self> {
        let end = end.unwrap_or(today);
        let start = start.unwrap_or_else(|| Self::default_start(end));

        if start > end {
            return Err(PayrollError::validation(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// First day of the month two months prior to `end`.
    fn default_start(end: NaiveDate) -> NaiveDate {
        let first_of_month = end.with_day(1).unwrap_or(end);
        first_of_month
            .checked_sub_months(Months::new(2))
            .unwrap_or(first_of_month)
    }

    /// Returns true if `date` falls inside the window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The first instant of the window.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// The last instant of the window: 23:59:59.999 of the end day.
    pub fn end_datetime(&self) -> NaiveDateTime {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.end.and_time(end_of_day)
    }
}
