//! Daily wage credit calculation.
//!
//! This module provides the functions for converting one attendance kind
//! plus a worker's daily rate into the credit amount for that day.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AttendanceKind;

/// Returns the standard hours-per-day divisor used for custom-hour days.
///
/// The divisor is 8: one full daily rate covers eight hours of work.
pub fn standard_day_hours() -> Decimal {
    Decimal::from(8)
}

/// Returns the half-day credit factor (0.5).
pub fn half_day_factor() -> Decimal {
    Decimal::new(5, 1)
}

/// Rounds an amount to the nearest integer currency unit.
///
/// Midpoints round away from zero, so `0.5` becomes `1` and `-0.5`
/// becomes `-1`. Rounding is applied only at entry-credit and
/// summary-total boundaries, never mid-accumulation.
///
/// # Examples
///
/// ```
/// use labor_ledger::wage::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(3505, 1)), Decimal::from(351));
/// assert_eq!(round_currency(Decimal::new(3504, 1)), Decimal::from(350));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts one attendance kind plus a worker's daily rate into the
/// credit amount for that day.
///
/// The function is total over its domain:
/// - `FullDay` credits the full daily rate
/// - `HalfDay` credits half the daily rate
/// - `Custom` credits `total_hours` at one-eighth of the daily rate per
///   hour (`total_hours` defaults to zero if absent)
/// - `Absent` credits nothing
///
/// The returned amount is unrounded; callers round at the entry boundary
/// via [`round_currency`].
///
/// # Arguments
///
/// * `kind` - The attendance kind for the day
/// * `total_hours` - Hours worked, meaningful only for `Custom`
/// * `daily_rate` - The worker's pay for one full day (non-negative)
///
/// # Examples
///
/// ```
/// use labor_ledger::models::AttendanceKind;
/// use labor_ledger::wage::attendance_credit;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::from(700);
/// assert_eq!(attendance_credit(AttendanceKind::FullDay, None, rate), rate);
/// assert_eq!(
///     attendance_credit(AttendanceKind::HalfDay, None, rate),
///     Decimal::from(350)
/// );
/// ```
pub fn attendance_credit(
    kind: AttendanceKind,
    total_hours: Option<Decimal>,
    daily_rate: Decimal,
) -> Decimal {
    match kind {
        AttendanceKind::FullDay => daily_rate,
        AttendanceKind::HalfDay => daily_rate * half_day_factor(),
        AttendanceKind::Custom => {
            total_hours.unwrap_or(Decimal::ZERO) * (daily_rate / standard_day_hours())
        }
        AttendanceKind::Absent => Decimal::ZERO,
    }
}

/// Returns the ledger description for an attendance-derived credit.
pub fn credit_description(kind: AttendanceKind, total_hours: Option<Decimal>) -> String {
    match kind {
        AttendanceKind::FullDay => "Full Day Work".to_string(),
        AttendanceKind::HalfDay => "Half Day Work".to_string(),
        AttendanceKind::Custom => format!(
            "Custom Hours ({}h)",
            total_hours.unwrap_or(Decimal::ZERO).normalize()
        ),
        AttendanceKind::Absent => "Absent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_full_day_credits_daily_rate() {
        assert_eq!(
            attendance_credit(AttendanceKind::FullDay, None, dec("700")),
            dec("700")
        );
    }

    #[test]
    fn test_half_day_credits_half_rate() {
        assert_eq!(
            attendance_credit(AttendanceKind::HalfDay, None, dec("700")),
            dec("350")
        );
    }

    #[test]
    fn test_absent_credits_zero() {
        assert_eq!(
            attendance_credit(AttendanceKind::Absent, None, dec("700")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_custom_credits_hourly_fraction() {
        // 5 hours at 700/day = 5 * 87.5 = 437.5
        assert_eq!(
            attendance_credit(AttendanceKind::Custom, Some(dec("5")), dec("700")),
            dec("437.5")
        );
    }

    #[test]
    fn test_custom_without_hours_credits_zero() {
        assert_eq!(
            attendance_credit(AttendanceKind::Custom, None, dec("700")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_round_currency_midpoint_goes_up() {
        assert_eq!(round_currency(dec("437.5")), dec("438"));
    }

    #[test]
    fn test_round_currency_below_midpoint_goes_down() {
        assert_eq!(round_currency(dec("437.4")), dec("437"));
    }

    #[test]
    fn test_round_currency_negative_midpoint_goes_away_from_zero() {
        assert_eq!(round_currency(dec("-437.5")), dec("-438"));
    }

    #[test]
    fn test_full_day_description() {
        assert_eq!(
            credit_description(AttendanceKind::FullDay, None),
            "Full Day Work"
        );
    }

    #[test]
    fn test_half_day_description() {
        assert_eq!(
            credit_description(AttendanceKind::HalfDay, None),
            "Half Day Work"
        );
    }

    #[test]
    fn test_custom_description_includes_hours() {
        assert_eq!(
            credit_description(AttendanceKind::Custom, Some(dec("5.5"))),
            "Custom Hours (5.5h)"
        );
    }

    #[test]
    fn test_absent_description() {
        assert_eq!(credit_description(AttendanceKind::Absent, None), "Absent");
    }

    proptest! {
        #[test]
        fn prop_full_day_equals_rate(rate in 0u32..1_000_000) {
            let rate = Decimal::from(rate);
            prop_assert_eq!(
                attendance_credit(AttendanceKind::FullDay, None, rate),
                rate
            );
        }

        #[test]
        fn prop_half_day_is_half_rate(rate in 0u32..1_000_000) {
            let rate = Decimal::from(rate);
            prop_assert_eq!(
                attendance_credit(AttendanceKind::HalfDay, None, rate),
                rate / Decimal::from(2)
            );
        }

        #[test]
        fn prop_absent_is_zero(rate in 0u32..1_000_000) {
            let rate = Decimal::from(rate);
            prop_assert_eq!(
                attendance_credit(AttendanceKind::Absent, None, rate),
                Decimal::ZERO
            );
        }

        #[test]
        fn prop_custom_is_hours_times_eighth(rate in 0u32..1_000_000, hours in 0u32..24) {
            let rate = Decimal::from(rate);
            let hours = Decimal::from(hours);
            prop_assert_eq!(
                attendance_credit(AttendanceKind::Custom, Some(hours), rate),
                hours * rate / Decimal::from(8)
            );
        }

        #[test]
        fn prop_round_currency_is_integral(units in -1_000_000i64..1_000_000, cents in 0u32..100) {
            let amount = Decimal::from(units) + Decimal::new(cents as i64, 2);
            let rounded = round_currency(amount);
            prop_assert_eq!(rounded.fract(), Decimal::ZERO);
            // Never drifts more than half a unit away.
            prop_assert!((rounded - amount).abs() <= Decimal::new(5, 1));
        }
    }
}
