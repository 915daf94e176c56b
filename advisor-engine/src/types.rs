//! Engine input and output records.

use advisor_catalog::{Department, Industry};
use serde::{Deserialize, Serialize};

/// One calculation request, built from caller-supplied form values.
///
/// Exactly one of `gross_profit` and `gross_profit_margin` is expected;
/// when both are present the absolute amount wins. Not retained after the
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInput {
    pub industry_id: u32,
    /// Revenue over the reporting period. Validation guarantees > 0.
    pub revenue: f64,
    /// Absolute gross profit. A supplied value of exactly 0 counts as
    /// absent — see `calculator::resolve_gross_profit`.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Gross-profit margin in percent (0–100].
    #[serde(default)]
    pub gross_profit_margin: Option<f64>,
}

/// One department's slice of the recommended personnel budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentShare {
    pub department: Department,
    /// Monthly amount, `total * percentage / 100`.
    pub amount: f64,
    /// The industry's allocation percentage for this department.
    pub percentage: f64,
}

/// The full recommendation produced by `calculator::calculate`.
///
/// Immutable once produced; never cached. The allocation entries follow
/// `Department::ALL` order and their amounts sum to `recommended_hr_cost`
/// up to floating-point rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub input: UserInput,
    pub industry: Industry,
    pub gross_profit: f64,
    /// Gross profit as a percentage of revenue.
    pub gross_profit_margin: f64,
    /// Recommended monthly personnel budget.
    pub recommended_hr_cost: f64,
    /// HR cost as a percentage of gross profit.
    pub hr_cost_ratio: f64,
    /// HR cost as a percentage of revenue.
    pub hr_cost_to_revenue_ratio: f64,
    pub department_allocation: Vec<DepartmentShare>,
}
