//! Catalog data model.
//!
//! The department and growth-engine sets are closed: both are enums so a
//! match over them is checked for exhaustiveness by the compiler. New
//! departments or engines are a code change, not a data change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four fixed functional groups a personnel budget is split across.
///
/// `ALL` carries the canonical presentation order. Allocation output and
/// anything asserting on array position relies on this order staying put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    /// Customer-facing / growth: sales, account management, service.
    CustomerOperations,
    /// Product / technical: engineering, production, operations.
    ProductTechnology,
    /// Brand / marketing: content, campaigns, channel presence.
    BrandMarketing,
    /// Administrative / support: finance, HR, back office.
    AdminSupport,
}

impl Department {
    /// Canonical iteration order for allocation output.
    pub const ALL: [Department; 4] = [
        Department::CustomerOperations,
        Department::ProductTechnology,
        Department::BrandMarketing,
        Department::AdminSupport,
    ];

    /// Display label for reports and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Department::CustomerOperations => "Customer Operations",
            Department::ProductTechnology => "Product & Technology",
            Department::BrandMarketing => "Brand & Marketing",
            Department::AdminSupport => "Admin & Support",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an industry primarily acquires customers and creates value.
///
/// Historic catalog documents carried human-readable tags with inconsistent
/// spacing around the channel variant; the serde aliases accept them all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthEngine {
    #[serde(alias = "Product-led")]
    ProductLed,
    #[serde(alias = "Sales-led")]
    SalesLed,
    #[serde(alias = "Media-led")]
    MediaLed,
    #[serde(alias = "Ops-led")]
    OpsLed,
    #[serde(alias = "Founder-led / Relationship-led")]
    FounderLed,
    #[serde(alias = "Channel-led / Network-led", alias = "Channel-led/Network-led")]
    ChannelLed,
}

impl GrowthEngine {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthEngine::ProductLed => "Product-led",
            GrowthEngine::SalesLed => "Sales-led",
            GrowthEngine::MediaLed => "Media-led",
            GrowthEngine::OpsLed => "Ops-led",
            GrowthEngine::FounderLed => "Founder-led / Relationship-led",
            GrowthEngine::ChannelLed => "Channel-led / Network-led",
        }
    }
}

impl fmt::Display for GrowthEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage split of the personnel budget across the four departments.
/// Invariant (checked at catalog load): the four values sum to 100 ±0.01.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAllocation {
    pub customer_operations: f64,
    pub product_technology: f64,
    pub brand_marketing: f64,
    pub admin_support: f64,
}

impl DepartmentAllocation {
    pub fn get(&self, department: Department) -> f64 {
        match department {
            Department::CustomerOperations => self.customer_operations,
            Department::ProductTechnology => self.product_technology,
            Department::BrandMarketing => self.brand_marketing,
            Department::AdminSupport => self.admin_support,
        }
    }

    /// Sum of the four percentages. Should be 100 for a valid profile.
    pub fn total(&self) -> f64 {
        Department::ALL.iter().map(|&d| self.get(d)).sum()
    }
}

/// One industry profile from the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Industry {
    /// Unique positive id, referenced by `IndustryCategory::industries`.
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub primary_growth_engine: Option<GrowthEngine>,
    #[serde(default)]
    pub secondary_growth_engine: Option<GrowthEngine>,
    /// Low end of the typical HR-cost-to-gross-profit band, in percent.
    pub hr_cost_ratio_min: f64,
    /// High end of the band, in percent. Invariant: 0 <= min <= max <= 100.
    pub hr_cost_ratio_max: f64,
    pub department_allocation: DepartmentAllocation,
}

impl Industry {
    /// Midpoint of the HR-cost ratio band, in percent. The engine
    /// recommends this ratio before applying the hard cap.
    pub fn mid_ratio(&self) -> f64 {
        (self.hr_cost_ratio_min + self.hr_cost_ratio_max) / 2.0
    }
}

/// Groups industry ids for two-level selection. Not consumed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryCategory {
    pub id: String,
    pub name: String,
    /// Ordered industry ids belonging to this category.
    pub industries: Vec<u32>,
}
