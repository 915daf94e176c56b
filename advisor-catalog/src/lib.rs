//! Reference catalog of industry HR-cost profiles.
//!
//! Every industry the advisor knows about carries:
//! - a growth-engine classification (what actually acquires customers)
//! - a typical HR-cost-to-gross-profit band (min/max percentage)
//! - a fixed four-way department allocation that sums to 100%
//!
//! The catalog is loaded once from a JSON document, validated, and never
//! mutated afterwards. The calculation engine only reads it, so concurrent
//! use needs no synchronization. Keep the data here injectable: the engine
//! is tested against synthetic catalogs, not the bundled one.

pub mod loader;
pub mod types;

pub use loader::{Catalog, CatalogError, CatalogResult};
pub use types::{Department, DepartmentAllocation, GrowthEngine, Industry, IndustryCategory};
