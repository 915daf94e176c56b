//! Qualitative recommendations tied to the growth-engine classification.
//!
//! Each growth engine maps to the team worth funding first; the headline
//! recommendation pairs that advice with the largest allocation slice from
//! the calculation result.

use advisor_catalog::{Department, GrowthEngine};
use serde::Serialize;

use crate::types::{CalculationResult, DepartmentShare};

/// Advice text for an industry's primary growth engine.
pub fn growth_engine_advice(engine: Option<GrowthEngine>) -> &'static str {
    match engine {
        Some(GrowthEngine::MediaLed) => {
            "Customers arrive through media exposure and content marketing; \
             invest in the brand and marketing team first"
        }
        Some(GrowthEngine::SalesLed) => {
            "Growth depends on the sales team winning accounts; \
             invest in the customer operations team first"
        }
        Some(GrowthEngine::ProductLed) => {
            "Product innovation and quality drive growth; \
             invest in the product and technology team first"
        }
        Some(GrowthEngine::OpsLed) => {
            "Operational efficiency and cost control drive growth; \
             invest in the product and technology (operations) team first"
        }
        Some(GrowthEngine::FounderLed) => {
            "Growth rides on the founder's and core team's relationships; \
             invest in the customer operations team first"
        }
        Some(GrowthEngine::ChannelLed) => {
            "Growth comes from building dealer and channel networks; \
             invest in the customer operations team first"
        }
        None => "Adjust staffing to the characteristics of your industry",
    }
}

/// The allocation entry with the highest percentage. Ties keep the
/// earliest entry, so canonical department order decides.
pub fn priority_department(shares: &[DepartmentShare]) -> Option<&DepartmentShare> {
    shares
        .iter()
        .reduce(|best, share| if share.percentage > best.percentage { share } else { best })
}

/// Headline recommendation for a calculation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub advice: &'static str,
    pub priority_department: Department,
    /// Share of the personnel budget the priority department gets.
    pub priority_percentage: f64,
    /// Monthly amount behind that share.
    pub priority_amount: f64,
}

/// Build the headline recommendation. `None` only when the result carries
/// no allocation entries, which the engine never produces.
pub fn build_recommendation(result: &CalculationResult) -> Option<Recommendation> {
    let top = priority_department(&result.department_allocation)?;
    Some(Recommendation {
        advice: growth_engine_advice(result.industry.primary_growth_engine),
        priority_department: top.department,
        priority_percentage: top.percentage,
        priority_amount: top.amount,
    })
}
