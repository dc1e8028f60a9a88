//! Legacy monthly-salary conversion.
//!
//! Workers created under the old schema carried a monthly salary instead
//! of a daily rate. The conversion is a one-time, logged migration step
//! outside the ledger core; the core itself only ever sees `daily_rate`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::policy::round_currency;

/// Returns the default working-days divisor for the monthly-to-daily
/// conversion.
///
/// The divisor is 26: a month of wages covers twenty-six working days.
pub fn legacy_working_days() -> Decimal {
    Decimal::from(26)
}

/// Converts a legacy monthly salary into a daily rate.
///
/// `daily_rate = round(monthly_salary / working_days)`, rounded to the
/// nearest currency unit.
///
/// # Examples
///
/// ```
/// use labor_ledger::wage::{daily_rate_from_monthly, legacy_working_days};
/// use rust_decimal::Decimal;
///
/// let daily = daily_rate_from_monthly(Decimal::from(18200), legacy_working_days());
/// assert_eq!(daily, Decimal::from(700));
/// ```
pub fn daily_rate_from_monthly(monthly_salary: Decimal, working_days: Decimal) -> Decimal {
    round_currency(monthly_salary / working_days)
}

/// Outcome of a legacy-salary migration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationSummary {
    /// Workers examined.
    pub scanned: u64,
    /// Workers converted (or that would be converted in a dry run).
    pub migrated: u64,
    /// Workers whose update failed.
    pub failed: u64,
    /// Whether this pass was a dry run with no writes.
    pub dry_run: bool,
}
