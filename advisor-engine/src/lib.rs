//! HR-cost recommendation engine.
//!
//! Pure, synchronous transformations from financial input plus an industry
//! profile to a structured recommendation:
//! - gross-profit resolution (amount wins over margin)
//! - HR-cost recommendation at the industry band midpoint, hard-capped
//! - four-way department allocation in canonical order
//! - planning analytics: health score, year-end bonus, adjustment suggestions
//!
//! Two error tiers, kept deliberately separate:
//! - `validation` returns structured pass/fail checks the caller can show
//!   per field; it never panics and never produces an `Err`
//! - the engine itself has exactly one failure mode (`MissingProfitData`);
//!   everything else assumes validated input and does not re-defend
//!
//! No I/O, no hidden state, no randomness: repeating a call with identical
//! inputs reproduces the result bit for bit.

pub mod calculator;
pub mod error;
pub mod planning;
pub mod recommendations;
pub mod types;
pub mod validation;

pub use calculator::{
    allocate_departments, calculate, gross_profit_margin, recommend_hr_cost,
    resolve_gross_profit, HR_COST_CAP,
};
pub use error::{EngineError, EngineResult};
pub use planning::{
    generate_adjustment_suggestions, health_score, year_end_bonus, AdjustmentAction,
    AdjustmentSuggestion, BonusEstimate, CurrentAllocation,
};
pub use recommendations::{build_recommendation, growth_engine_advice, Recommendation};
pub use types::{CalculationResult, DepartmentShare, UserInput};
pub use validation::{check_basic_input, CheckResult};
