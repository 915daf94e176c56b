//! Input validation — the pre-flight constraint layer.
//!
//! Each check returns a structured pass/fail with a human-readable reason
//! instead of an error, so a caller can run every field check and show all
//! messages before invoking the engine. Nothing here panics and nothing
//! here is an exception path.
//!
//! `check_basic_input` is the composite gate the calculation flow uses;
//! its check order is part of the contract: industry, then revenue, then
//! presence of profit data, then the specific profit or margin check.
//! First failure wins.

/// Upper bound on revenue per period (1 billion).
pub const MAX_REVENUE: f64 = 1_000_000_000.0;
/// Upper bound on headcount for the planning extensions.
pub const MAX_HEADCOUNT: u32 = 1_000;
/// Upper bound on monthly personnel cost (100 million).
pub const MAX_MONTHLY_COST: f64 = 100_000_000.0;

/// Outcome of a single field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Pass,
    Fail(String),
}

impl CheckResult {
    fn fail(reason: impl Into<String>) -> Self {
        CheckResult::Fail(reason.into())
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckResult::Pass)
    }

    /// The failure reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            CheckResult::Pass => None,
            CheckResult::Fail(reason) => Some(reason),
        }
    }
}

/// Revenue must be positive and within the plausible range.
pub fn check_revenue(revenue: f64) -> CheckResult {
    if revenue <= 0.0 {
        return CheckResult::fail("Revenue must be greater than 0");
    }
    if revenue > MAX_REVENUE {
        return CheckResult::fail("Revenue exceeds the plausible range (max 1 billion)");
    }
    CheckResult::Pass
}

/// Absolute gross profit must be positive and no more than revenue.
pub fn check_gross_profit(gross_profit: f64, revenue: f64) -> CheckResult {
    if gross_profit <= 0.0 {
        return CheckResult::fail("Gross profit must be greater than 0");
    }
    if gross_profit > revenue {
        return CheckResult::fail("Gross profit cannot exceed revenue");
    }
    CheckResult::Pass
}

/// Gross-profit margin must sit in (0, 100].
pub fn check_margin(margin: f64) -> CheckResult {
    if margin <= 0.0 {
        return CheckResult::fail("Gross profit margin must be greater than 0%");
    }
    if margin > 100.0 {
        return CheckResult::fail("Gross profit margin cannot exceed 100%");
    }
    CheckResult::Pass
}

/// An industry must actually be selected. An id of 0 is the unselected
/// sentinel some callers use and fails the same way as `None`.
pub fn check_industry(industry_id: Option<u32>) -> CheckResult {
    match industry_id {
        Some(id) if id > 0 => CheckResult::Pass,
        _ => CheckResult::fail("Select an industry"),
    }
}

/// Headcount for the planning extensions: [0, 1000].
pub fn check_headcount(headcount: i64) -> CheckResult {
    if headcount < 0 {
        return CheckResult::fail("Headcount cannot be negative");
    }
    if headcount > MAX_HEADCOUNT as i64 {
        return CheckResult::fail("Headcount exceeds the plausible range (max 1000)");
    }
    CheckResult::Pass
}

/// Monthly personnel cost for the planning extensions: [0, 100 million].
pub fn check_monthly_cost(cost: f64) -> CheckResult {
    if cost < 0.0 {
        return CheckResult::fail("Monthly cost cannot be negative");
    }
    if cost > MAX_MONTHLY_COST {
        return CheckResult::fail("Monthly cost exceeds the plausible range (max 100 million)");
    }
    CheckResult::Pass
}

/// Mirrors the engine's truthiness rule: 0 counts as not supplied.
fn is_supplied(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v != 0.0)
}

/// Composite pre-flight check for the base calculation flow.
///
/// Order matters and is part of the contract: industry, revenue, presence
/// of profit data, then the specific field checks. First failure wins.
pub fn check_basic_input(
    industry_id: Option<u32>,
    revenue: f64,
    gross_profit: Option<f64>,
    gross_profit_margin: Option<f64>,
) -> CheckResult {
    let industry = check_industry(industry_id);
    if !industry.is_pass() {
        return industry;
    }

    let revenue_check = check_revenue(revenue);
    if !revenue_check.is_pass() {
        return revenue_check;
    }

    if !is_supplied(gross_profit) && !is_supplied(gross_profit_margin) {
        return CheckResult::fail("Enter a gross profit amount or a gross profit margin");
    }

    if is_supplied(gross_profit) {
        let gp = check_gross_profit(gross_profit.unwrap_or(0.0), revenue);
        if !gp.is_pass() {
            return gp;
        }
    }

    if is_supplied(gross_profit_margin) {
        let margin = check_margin(gross_profit_margin.unwrap_or(0.0));
        if !margin.is_pass() {
            return margin;
        }
    }

    CheckResult::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revenue_bounds() {
        assert!(!check_revenue(0.0).is_pass());
        assert!(!check_revenue(-100.0).is_pass());
        assert!(check_revenue(1.0).is_pass());
        assert!(check_revenue(MAX_REVENUE).is_pass());
        assert!(!check_revenue(MAX_REVENUE + 1.0).is_pass());
    }

    #[test]
    fn gross_profit_bounds() {
        assert!(!check_gross_profit(0.0, 1000.0).is_pass());
        assert!(check_gross_profit(1000.0, 1000.0).is_pass());
        assert!(!check_gross_profit(1001.0, 1000.0).is_pass());
    }

    #[test]
    fn margin_bounds() {
        assert!(!check_margin(0.0).is_pass());
        assert!(check_margin(0.1).is_pass());
        assert!(check_margin(100.0).is_pass());
        assert!(!check_margin(100.1).is_pass());
    }

    #[test]
    fn industry_must_be_selected() {
        assert!(!check_industry(None).is_pass());
        assert!(!check_industry(Some(0)).is_pass());
        assert!(check_industry(Some(1)).is_pass());
    }

    #[test]
    fn headcount_and_cost_bounds() {
        assert!(check_headcount(0).is_pass());
        assert!(check_headcount(1000).is_pass());
        assert!(!check_headcount(-1).is_pass());
        assert!(!check_headcount(1001).is_pass());

        assert!(check_monthly_cost(0.0).is_pass());
        assert!(check_monthly_cost(MAX_MONTHLY_COST).is_pass());
        assert!(!check_monthly_cost(-1.0).is_pass());
        assert!(!check_monthly_cost(MAX_MONTHLY_COST + 1.0).is_pass());
    }

    #[test]
    fn composite_check_order_first_failure_wins() {
        // Industry failure reported even though revenue is also bad.
        let result = check_basic_input(None, -5.0, None, None);
        assert_eq!(result.reason(), Some("Select an industry"));

        // Revenue failure reported before the missing profit data.
        let result = check_basic_input(Some(1), -5.0, None, None);
        assert_eq!(result.reason(), Some("Revenue must be greater than 0"));

        // Presence check fires once industry and revenue pass.
        let result = check_basic_input(Some(1), 1000.0, None, None);
        assert_eq!(
            result.reason(),
            Some("Enter a gross profit amount or a gross profit margin")
        );
    }

    #[test]
    fn composite_check_treats_zero_as_absent() {
        // Both fields zero: same failure as both missing.
        let result = check_basic_input(Some(1), 1000.0, Some(0.0), Some(0.0));
        assert_eq!(
            result.reason(),
            Some("Enter a gross profit amount or a gross profit margin")
        );

        // Zero gross profit with a real margin passes on the margin path.
        let result = check_basic_input(Some(1), 1000.0, Some(0.0), Some(40.0));
        assert!(result.is_pass());
    }

    #[test]
    fn composite_check_validates_supplied_fields() {
        let result = check_basic_input(Some(1), 1000.0, Some(2000.0), None);
        assert_eq!(result.reason(), Some("Gross profit cannot exceed revenue"));

        let result = check_basic_input(Some(1), 1000.0, None, Some(120.0));
        assert_eq!(
            result.reason(),
            Some("Gross profit margin cannot exceed 100%")
        );

        // A negative gross profit is "supplied" and fails its field check.
        let result = check_basic_input(Some(1), 1000.0, Some(-50.0), None);
        assert_eq!(result.reason(), Some("Gross profit must be greater than 0"));

        assert!(check_basic_input(Some(1), 1000.0, Some(400.0), None).is_pass());
        assert!(check_basic_input(Some(1), 1000.0, None, Some(40.0)).is_pass());
    }
}
