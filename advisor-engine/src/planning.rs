//! Planning analytics layered on top of the calculation output.
//!
//! These run against caller-supplied "current state" data (actual
//! per-department spend and headcount), which the base flow never
//! collects. Three independent functions:
//! - health score: how closely actual spend matches the recommendation
//! - year-end bonus estimate from annual profit vs annual HR cost
//! - per-department adjustment suggestions ranked by gap size

use std::cmp::Ordering;
use std::collections::HashMap;

use advisor_catalog::Department;
use serde::{Deserialize, Serialize};

use crate::types::DepartmentShare;

/// The bonus estimator assumes a fixed team size. Unparameterized on
/// purpose — the same known simplification the advisory methodology uses.
pub const ASSUMED_HEADCOUNT: f64 = 10.0;

/// Monthly salary assumed when a department reports zero headcount, so a
/// headcount delta can still be estimated for an increase suggestion.
pub const FALLBACK_MONTHLY_SALARY: f64 = 30_000.0;

/// Gaps below this many percentage points count as "on target".
const MAINTAIN_BAND: f64 = 5.0;
/// Gaps beyond this many percentage points trigger an increase/decrease.
const ACTION_BAND: f64 = 10.0;

/// Resource-allocation health score in [0, 100].
///
/// Sums the absolute percentage gap per department in the recommended map
/// (a department missing from `current` counts as fully missing) and
/// applies a pure linear penalty: 0 total gap scores 100, 100 points of
/// gap score 0. No per-department weighting.
pub fn health_score(
    current: &HashMap<Department, f64>,
    recommended: &HashMap<Department, f64>,
) -> u32 {
    let total_gap: f64 = recommended
        .iter()
        .map(|(department, recommended_pct)| {
            let current_pct = current.get(department).copied().unwrap_or(0.0);
            (current_pct - recommended_pct).abs()
        })
        .sum();

    (100.0 - total_gap).max(0.0).round() as u32
}

/// Year-end bonus recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusEstimate {
    /// Total bonus pool for the year.
    pub recommended_total: f64,
    /// The pool expressed in months of monthly HR cost.
    pub recommended_months: f64,
    /// Pool divided by the assumed headcount of 10.
    pub per_person_average: f64,
}

/// Estimate a year-end bonus pool from annual profit and monthly HR cost.
///
/// Tiers on the profit-to-annual-HR-cost ratio, first match wins:
/// above 30% pays 15%, above 15% pays 12%, any profit pays 8%, and a
/// break-even or loss year pays nothing.
pub fn year_end_bonus(annual_profit: f64, monthly_hr_cost: f64) -> BonusEstimate {
    let annual_hr_cost = monthly_hr_cost * 12.0;
    let profit_ratio = annual_profit / annual_hr_cost;

    let bonus_ratio = if profit_ratio > 0.30 {
        0.15
    } else if profit_ratio > 0.15 {
        0.12
    } else if profit_ratio > 0.0 {
        0.08
    } else {
        0.0
    };

    let recommended_total = annual_hr_cost * bonus_ratio;
    BonusEstimate {
        recommended_total,
        recommended_months: bonus_ratio * 12.0,
        per_person_average: recommended_total / ASSUMED_HEADCOUNT,
    }
}

/// A department's actual allocation, as reported by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAllocation {
    pub department: Department,
    /// Actual share of the personnel budget, in percent.
    pub percentage: f64,
    /// Actual monthly spend.
    pub amount: f64,
    pub headcount: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentAction {
    Increase,
    Decrease,
    Maintain,
}

/// One ranked suggestion for a department present in both allocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustmentSuggestion {
    /// 1 when the gap exceeds the action band, otherwise 2.
    pub priority: u8,
    pub department: Department,
    pub action: AdjustmentAction,
    /// current minus recommended, in percentage points.
    pub gap_percentage: f64,
    /// current minus recommended monthly spend.
    pub gap_amount: f64,
    pub headcount_suggestion: String,
    pub reason: String,
}

/// Compare actual against recommended allocations and rank the gaps.
///
/// Classification bands, checked in order: |gap| < 5 is on target;
/// gap > 10 is over-resourced; gap < -10 is under-resourced. A gap whose
/// magnitude sits strictly between 5 and 10 falls through every branch
/// and is still emitted with the `Maintain` default and empty reason —
/// callers depend on that entry existing, so the band stays silent.
///
/// Departments in `current` with no recommended counterpart are skipped.
/// Output ordering: ascending priority, then descending |gap_percentage|.
pub fn generate_adjustment_suggestions(
    current: &[CurrentAllocation],
    recommended: &[DepartmentShare],
) -> Vec<AdjustmentSuggestion> {
    let mut suggestions = Vec::new();

    for actual in current {
        let Some(target) = recommended
            .iter()
            .find(|share| share.department == actual.department)
        else {
            continue;
        };

        let gap_percentage = actual.percentage - target.percentage;
        let gap_amount = actual.amount - target.amount;

        let mut action = AdjustmentAction::Maintain;
        let mut reason = String::new();
        let mut headcount_suggestion = String::new();

        if gap_percentage.abs() < MAINTAIN_BAND {
            reason = "Allocation is on target; keep the current setup".into();
            headcount_suggestion = format!("Keep the team at {} staff", actual.headcount);
        } else if gap_percentage > ACTION_BAND {
            action = AdjustmentAction::Decrease;
            reason = "Over-resourced; shift budget toward other departments".into();
            let per_head = actual.amount / actual.headcount as f64;
            let reduce = (gap_amount.abs() / per_head).ceil();
            headcount_suggestion = format!("Consider reducing by {} staff", reduce as i64);
        } else if gap_percentage < -ACTION_BAND {
            action = AdjustmentAction::Increase;
            reason = "Under-resourced; increase investment".into();
            let avg_salary = if actual.headcount > 0 {
                actual.amount / actual.headcount as f64
            } else {
                FALLBACK_MONTHLY_SALARY
            };
            let add = (gap_amount.abs() / avg_salary).ceil();
            headcount_suggestion = format!("Consider adding {} staff", add as i64);
        }

        suggestions.push(AdjustmentSuggestion {
            priority: if gap_percentage.abs() > ACTION_BAND { 1 } else { 2 },
            department: actual.department,
            action,
            gap_percentage,
            gap_amount,
            headcount_suggestion,
            reason,
        });
    }

    suggestions.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then_with(|| {
            b.gap_percentage
                .abs()
                .partial_cmp(&a.gap_percentage.abs())
                .unwrap_or(Ordering::Equal)
        })
    });

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(department: Department, percentage: f64, amount: f64) -> DepartmentShare {
        DepartmentShare {
            department,
            percentage,
            amount,
        }
    }

    fn actual(
        department: Department,
        percentage: f64,
        amount: f64,
        headcount: u32,
    ) -> CurrentAllocation {
        CurrentAllocation {
            department,
            percentage,
            amount,
            headcount,
        }
    }

    #[test]
    fn health_score_identity_is_100() {
        let map: HashMap<Department, f64> = [
            (Department::CustomerOperations, 30.0),
            (Department::ProductTechnology, 40.0),
            (Department::BrandMarketing, 15.0),
            (Department::AdminSupport, 15.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(health_score(&map, &map), 100);
    }

    #[test]
    fn health_score_is_bounded() {
        let recommended: HashMap<Department, f64> = [
            (Department::CustomerOperations, 50.0),
            (Department::ProductTechnology, 50.0),
        ]
        .into_iter()
        .collect();
        // Wildly wrong current allocation drives the raw score negative;
        // the result clamps to 0.
        let current: HashMap<Department, f64> = [
            (Department::CustomerOperations, 150.0),
            (Department::ProductTechnology, 0.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(health_score(&current, &recommended), 0);
    }

    #[test]
    fn health_score_counts_missing_departments_as_zero() {
        let recommended: HashMap<Department, f64> = [
            (Department::CustomerOperations, 60.0),
            (Department::ProductTechnology, 40.0),
        ]
        .into_iter()
        .collect();
        let current: HashMap<Department, f64> =
            [(Department::CustomerOperations, 60.0)].into_iter().collect();
        // Product & Technology is fully missing: gap 40 => score 60.
        assert_eq!(health_score(&current, &recommended), 60);
    }

    #[test]
    fn bonus_tiers_first_match_wins() {
        let monthly = 100_000.0; // annual 1.2M

        // ratio 0.5 > 0.30 => 15%
        let top = year_end_bonus(600_000.0, monthly);
        assert!((top.recommended_total - 180_000.0).abs() < 1e-6);
        assert!((top.recommended_months - 1.8).abs() < 1e-9);
        assert!((top.per_person_average - 18_000.0).abs() < 1e-6);

        // ratio 0.2 => 12%
        let mid = year_end_bonus(240_000.0, monthly);
        assert!((mid.recommended_total - 144_000.0).abs() < 1e-6);

        // ratio just above zero => 8%
        let low = year_end_bonus(1_000.0, monthly);
        assert!((low.recommended_total - 96_000.0).abs() < 1e-6);
    }

    #[test]
    fn no_bonus_in_a_loss_year() {
        let estimate = year_end_bonus(0.0, 100_000.0);
        assert_eq!(estimate.recommended_total, 0.0);
        assert_eq!(estimate.recommended_months, 0.0);

        let estimate = year_end_bonus(-500_000.0, 100_000.0);
        assert_eq!(estimate.recommended_total, 0.0);
    }

    #[test]
    fn large_positive_gap_means_decrease_with_priority_one() {
        // 42% actual vs 30% recommended: gap 12 > 10 => decrease.
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::CustomerOperations, 42.0, 420_000.0, 6)],
            &[share(Department::CustomerOperations, 30.0, 300_000.0)],
        );
        assert_eq!(suggestions.len(), 1);
        let s = &suggestions[0];
        assert_eq!(s.action, AdjustmentAction::Decrease);
        assert_eq!(s.priority, 1);
        assert!((s.gap_percentage - 12.0).abs() < 1e-9);
        // |gap_amount| 120,000 at 70,000/head => ceil(1.71) = 2 staff.
        assert_eq!(s.headcount_suggestion, "Consider reducing by 2 staff");
    }

    #[test]
    fn small_gap_means_maintain() {
        // 33% vs 30%: |3| < 5 => maintain with a reason.
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::BrandMarketing, 33.0, 330_000.0, 4)],
            &[share(Department::BrandMarketing, 30.0, 300_000.0)],
        );
        let s = &suggestions[0];
        assert_eq!(s.action, AdjustmentAction::Maintain);
        assert_eq!(s.priority, 2);
        assert_eq!(s.headcount_suggestion, "Keep the team at 4 staff");
        assert!(!s.reason.is_empty());
    }

    #[test]
    fn middle_band_emits_silent_maintain() {
        // Gap of 7 sits strictly between the bands: no branch fires, but
        // the entry is still emitted with defaults. Known behavior, keep.
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::AdminSupport, 27.0, 270_000.0, 3)],
            &[share(Department::AdminSupport, 20.0, 200_000.0)],
        );
        let s = &suggestions[0];
        assert_eq!(s.action, AdjustmentAction::Maintain);
        assert_eq!(s.priority, 2);
        assert!(s.reason.is_empty());
        assert!(s.headcount_suggestion.is_empty());

        // The negative side of the band behaves the same.
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::AdminSupport, 13.0, 130_000.0, 3)],
            &[share(Department::AdminSupport, 20.0, 200_000.0)],
        );
        assert!(suggestions[0].reason.is_empty());
        assert_eq!(suggestions[0].action, AdjustmentAction::Maintain);
    }

    #[test]
    fn under_resourced_uses_fallback_salary_at_zero_headcount() {
        // -15 gap with no staff: delta uses the 30,000 fallback salary.
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::ProductTechnology, 15.0, 0.0, 0)],
            &[share(Department::ProductTechnology, 30.0, 90_000.0)],
        );
        let s = &suggestions[0];
        assert_eq!(s.action, AdjustmentAction::Increase);
        // |gap_amount| 90,000 / 30,000 = 3 staff.
        assert_eq!(s.headcount_suggestion, "Consider adding 3 staff");
    }

    #[test]
    fn departments_without_recommendation_are_skipped() {
        let suggestions = generate_adjustment_suggestions(
            &[actual(Department::BrandMarketing, 25.0, 250_000.0, 2)],
            &[share(Department::AdminSupport, 20.0, 200_000.0)],
        );
        assert!(suggestions.is_empty());
    }

    #[test]
    fn ordering_is_priority_then_gap_magnitude() {
        let suggestions = generate_adjustment_suggestions(
            &[
                actual(Department::CustomerOperations, 33.0, 330_000.0, 4), // gap 3, prio 2
                actual(Department::ProductTechnology, 10.0, 100_000.0, 2),  // gap -20, prio 1
                actual(Department::BrandMarketing, 27.0, 270_000.0, 3),     // gap 12, prio 1
            ],
            &[
                share(Department::CustomerOperations, 30.0, 300_000.0),
                share(Department::ProductTechnology, 30.0, 300_000.0),
                share(Department::BrandMarketing, 15.0, 150_000.0),
            ],
        );
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].department, Department::ProductTechnology);
        assert_eq!(suggestions[1].department, Department::BrandMarketing);
        assert_eq!(suggestions[2].department, Department::CustomerOperations);
    }
}
