//! Core calculation functions.
//!
//! All of these are pure: same input, same output, no I/O. They assume
//! input that already passed the `validation` checks — in particular
//! `revenue > 0` — and do not guard divisions themselves.

use advisor_catalog::{Department, Industry};

use crate::error::{EngineError, EngineResult};
use crate::types::{CalculationResult, DepartmentShare, UserInput};

/// Hard policy ceiling: the recommended HR cost never exceeds this share
/// of gross profit, regardless of how high an industry's band sits.
pub const HR_COST_CAP: f64 = 0.55;

/// Resolve the gross profit from the input record.
///
/// An absolute `gross_profit` wins over a margin. A supplied value of
/// exactly 0 counts as not supplied and falls through to the margin
/// branch: input forms clear fields by writing 0, and the margin path must
/// still win in that case. Same rule for a margin of 0.
pub fn resolve_gross_profit(input: &UserInput) -> EngineResult<f64> {
    if let Some(gross_profit) = input.gross_profit {
        if gross_profit != 0.0 {
            return Ok(gross_profit);
        }
    }
    if let Some(margin) = input.gross_profit_margin {
        if margin != 0.0 {
            return Ok(input.revenue * margin / 100.0);
        }
    }
    Err(EngineError::MissingProfitData)
}

/// Gross profit as a percentage of revenue. Caller guarantees revenue > 0.
pub fn gross_profit_margin(revenue: f64, gross_profit: f64) -> f64 {
    gross_profit / revenue * 100.0
}

/// Recommended monthly personnel budget for an industry.
///
/// Uses the midpoint of the industry's HR-cost ratio band, then applies
/// the `HR_COST_CAP` ceiling.
pub fn recommend_hr_cost(gross_profit: f64, industry: &Industry) -> f64 {
    let raw = gross_profit * industry.mid_ratio() / 100.0;
    let capped = gross_profit * HR_COST_CAP;
    raw.min(capped)
}

/// Split a total personnel budget across the four departments.
///
/// Iterates `Department::ALL` so output order is stable; the returned
/// amounts sum to `total_hr_cost` up to floating-point rounding.
pub fn allocate_departments(total_hr_cost: f64, industry: &Industry) -> Vec<DepartmentShare> {
    Department::ALL
        .iter()
        .map(|&department| {
            let percentage = industry.department_allocation.get(department);
            DepartmentShare {
                department,
                amount: total_hr_cost * percentage / 100.0,
                percentage,
            }
        })
        .collect()
}

/// Run the full calculation: gross profit, HR-cost recommendation, ratios,
/// department allocation. Fails fast with no partial result when neither
/// profit figure was supplied.
pub fn calculate(input: &UserInput, industry: &Industry) -> EngineResult<CalculationResult> {
    let gross_profit = resolve_gross_profit(input)?;
    let margin = gross_profit_margin(input.revenue, gross_profit);

    let recommended_hr_cost = recommend_hr_cost(gross_profit, industry);
    let hr_cost_ratio = recommended_hr_cost / gross_profit * 100.0;
    let hr_cost_to_revenue_ratio = recommended_hr_cost / input.revenue * 100.0;

    let department_allocation = allocate_departments(recommended_hr_cost, industry);

    log::debug!(
        "calculated recommendation for industry {} ({}): hr_cost={recommended_hr_cost:.0}",
        industry.id,
        industry.name
    );

    Ok(CalculationResult {
        input: input.clone(),
        industry: industry.clone(),
        gross_profit,
        gross_profit_margin: margin,
        recommended_hr_cost,
        hr_cost_ratio,
        hr_cost_to_revenue_ratio,
        department_allocation,
    })
}
