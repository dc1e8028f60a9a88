//! Aggregation periods.
//!
//! Boundaries are computed with local calendar semantics: month bounds
//! come from (year, month) construction, never from an elapsed-30-days
//! approximation.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{PayrollError, PayrollResult};

/// An inclusive date range targeted by an aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl Period {
    /// The calendar month containing the given year and 1-based month.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_ledger::aggregate::Period;
    /// use chrono::NaiveDate;
    ///
    /// let july = Period::month(2026, 7).unwrap();
    /// assert_eq!(july.start, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
    /// assert_eq!(july.end, NaiveDate::from_ymd_opt(2026, 7, 31).unwrap());
    /// ```
    pub fn month(year: i32, month: u32) -> PayrollResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            PayrollError::validation(format!("invalid calendar month {}-{}", year, month))
        })?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| {
                PayrollError::validation(format!("invalid calendar month {}-{}", year, month))
            })?;
        Ok(Self { start, end })
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> PayrollResult<Self> {
        Self::month(date.year(), date.month())
    }

    /// A custom inclusive range. An inverted range is a validation error.
    pub fn custom(start: NaiveDate, end: NaiveDate) -> PayrollResult<Self> {
        if start > end {
            return Err(PayrollError::validation(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Returns true if `date` falls inside the period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The first instant of the period.
    pub fn start_datetime(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// The last instant of the period: 23:59:59.999 of the end day.
    pub fn end_datetime(&self) -> NaiveDateTime {
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.end.and_time(end_of_day)
    }
}
