//! Monthly pay computation.
//!
//! Pure function over value inputs: no I/O, no state. The surrounding
//! handlers fetch the salary and persist the audit row; this module only
//! turns (salary, attendance, overtime, bonus) into a breakdown.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Provident fund: flat 12%, applied to gross pay (bonus and overtime
/// included). The original system labels this "12% of basic" but computes
/// it on gross; that behavior is kept for audit compatibility.
pub fn pf_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Income tax: flat 10% of gross.
pub fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Hours in a standard working day, used to price overtime.
const DAY_HOURS: i64 = 8;

#[derive(Debug, Error)]
pub enum PayError {
    /// `total_days` must be positive or the daily rate is undefined.
    #[error("invalid pay period: total_days must be positive, got {total_days}")]
    InvalidPeriod { total_days: i32 },
}

/// Inputs for one (employee, month) computation.
///
/// Deliberately permissive: `days_present` may be negative or exceed
/// `total_days`, bonus and overtime may be anything. Stricter validation
/// belongs to the callers, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayInput {
    pub monthly_salary: Decimal,
    pub days_present: i32,
    pub total_days: i32,
    pub overtime_hours: Decimal,
    pub bonus: Decimal,
}

/// Computed breakdown, every field rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayBreakdown {
    pub gross: Decimal,
    pub pf: Decimal,
    pub tax: Decimal,
    pub deductions: Decimal,
    pub net: Decimal,
}

/// Computes the pay breakdown for one month.
///
/// Steps:
/// 1. `daily_rate = monthly_salary / total_days`
/// 2. `gross = daily_rate * days_present + bonus + overtime_hours * (daily_rate / 8)`
/// 3. `pf = gross * 0.12`, `tax = gross * 0.10`
/// 4. `deductions = pf + tax`, `net = gross - deductions`
///
/// Rounding is applied per field after the full computation, so
/// `deductions` can drift from `round(pf) + round(tax)` by up to 0.01.
/// That drift is part of the contract, not a bug.
pub fn compute(input: &PayInput) -> Result<PayBreakdown, PayError> {
    if input.total_days <= 0 {
        return Err(PayError::InvalidPeriod {
            total_days: input.total_days,
        });
    }

    let daily_rate = input.monthly_salary / Decimal::from(input.total_days);
    let overtime_pay = input.overtime_hours * (daily_rate / Decimal::from(DAY_HOURS));
    let gross = daily_rate * Decimal::from(input.days_present) + input.bonus + overtime_pay;

    let pf = gross * pf_rate();
    let tax = gross * tax_rate();
    let deductions = pf + tax;
    let net = gross - deductions;

    Ok(PayBreakdown {
        gross: round2(gross),
        pf: round2(pf),
        tax: round2(tax),
        deductions: round2(deductions),
        net: round2(net),
    })
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(salary: &str, present: i32, total: i32, overtime: &str, bonus: &str) -> PayInput {
        PayInput {
            monthly_salary: dec(salary),
            days_present: present,
            total_days: total,
            overtime_hours: dec(overtime),
            bonus: dec(bonus),
        }
    }

    #[test]
    fn test_full_month_no_extras() {
        let result = compute(&input("3000", 30, 30, "0", "0")).unwrap();

        assert_eq!(result.gross, dec("3000.00"));
        assert_eq!(result.pf, dec("360.00"));
        assert_eq!(result.tax, dec("300.00"));
        assert_eq!(result.deductions, dec("660.00"));
        assert_eq!(result.net, dec("2340.00"));
    }

    #[test]
    fn test_half_month_pro_rates_salary() {
        let result = compute(&input("3000", 15, 30, "0", "0")).unwrap();

        assert_eq!(result.gross, dec("1500.00"));
        assert_eq!(result.pf, dec("180.00"));
        assert_eq!(result.tax, dec("150.00"));
        assert_eq!(result.deductions, dec("330.00"));
        assert_eq!(result.net, dec("1170.00"));
    }

    #[test]
    fn test_overtime_and_bonus() {
        // daily_rate = 120, overtime = 10 * (120/8) = 150,
        // gross = 120*20 + 100 + 150 = 2650
        let result = compute(&input("2400", 20, 20, "10", "100")).unwrap();

        assert_eq!(result.gross, dec("2650.00"));
        assert_eq!(result.pf, dec("318.00"));
        assert_eq!(result.tax, dec("265.00"));
        assert_eq!(result.deductions, dec("583.00"));
        assert_eq!(result.net, dec("2067.00"));
    }

    #[test]
    fn test_zero_total_days_is_invalid_period() {
        let result = compute(&input("3000", 30, 0, "0", "0"));

        match result.unwrap_err() {
            PayError::InvalidPeriod { total_days } => assert_eq!(total_days, 0),
        }
    }

    #[test]
    fn test_negative_total_days_is_invalid_period() {
        assert!(compute(&input("3000", 30, -5, "0", "0")).is_err());
    }

    #[test]
    fn test_negative_days_present_is_permitted() {
        // Nonsensical but mathematically consistent, by contract.
        let result = compute(&input("3000", -3, 30, "0", "0")).unwrap();

        assert_eq!(result.gross, dec("-300.00"));
        assert_eq!(result.net, dec("-234.00"));
    }

    #[test]
    fn test_days_present_may_exceed_total_days() {
        let result = compute(&input("3000", 33, 30, "0", "0")).unwrap();

        assert_eq!(result.gross, dec("3300.00"));
    }

    #[test]
    fn test_zero_salary() {
        let result = compute(&input("0", 30, 30, "5", "0")).unwrap();

        assert_eq!(result.gross, dec("0.00"));
        assert_eq!(result.net, dec("0.00"));
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let first = compute(&input("2753.77", 22, 31, "7.5", "120.40")).unwrap();
        let second = compute(&input("2753.77", 22, 31, "7.5", "120.40")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_deductions_and_net_consistent_within_a_cent() {
        // Per-field rounding may drift by up to 0.01 against the sum of
        // the rounded parts; never more.
        let cases = [
            input("3000", 30, 30, "0", "0"),
            input("2400", 20, 20, "10", "100"),
            input("1234.56", 17, 31, "3.25", "45.10"),
            input("999.99", 29, 30, "0.5", "0.01"),
            input("5871.03", 26, 28, "11", "250"),
        ];

        let cent = dec("0.01");
        for case in &cases {
            let r = compute(case).unwrap();

            let drift = (r.deductions - (r.pf + r.tax)).abs();
            assert!(drift <= cent, "deductions drift {drift} for {case:?}");

            let net_drift = (r.net - (r.gross - r.deductions)).abs();
            assert!(net_drift <= cent, "net drift {net_drift} for {case:?}");
        }
    }

    #[test]
    fn test_outputs_have_two_decimal_places() {
        let result = compute(&input("1000", 7, 30, "1.3", "0.333")).unwrap();

        for value in [result.gross, result.pf, result.tax, result.deductions, result.net] {
            assert!(value.scale() <= 2, "expected 2dp, got {value}");
        }
    }

    #[test]
    fn test_rates_are_flat_percentages() {
        assert_eq!(pf_rate(), dec("0.12"));
        assert_eq!(tax_rate(), dec("0.10"));
    }
}
