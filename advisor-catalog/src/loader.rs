//! JSON catalog loader.
//!
//! Parses a catalog document with two top-level collections:
//!   `categories`  — id, name, ordered industry ids
//!   `industries`  — full industry profiles per `types::Industry`
//!
//! Loading validates the structural invariants before handing the catalog
//! out: unique industry ids, sane ratio bands, allocations that sum to
//! 100%, and category references that resolve. A catalog that fails any of
//! these is rejected wholesale rather than partially loaded.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Industry, IndustryCategory};

/// Tolerance for the allocation-sum invariant, in percentage points.
pub const ALLOCATION_SUM_TOLERANCE: f64 = 0.01;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate industry id: {0}")]
    DuplicateIndustryId(u32),

    #[error("Industry {id} ({name}): ratio band {min}%–{max}% is outside 0 <= min <= max <= 100")]
    InvalidRatioBand {
        id: u32,
        name: String,
        min: f64,
        max: f64,
    },

    #[error("Industry {id} ({name}): department allocation sums to {total}%, expected 100%")]
    AllocationSum { id: u32, name: String, total: f64 },

    #[error("Category '{category}' references unknown industry id {industry_id}")]
    DanglingIndustryRef { category: String, industry_id: u32 },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The full reference catalog: read-only after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<IndustryCategory>,
    pub industries: Vec<Industry>,
}

impl Catalog {
    /// Parse and validate a catalog from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        log::info!(
            "catalog loaded: {} industries in {} categories",
            catalog.industries.len(),
            catalog.categories.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Look up an industry by id.
    pub fn industry(&self, id: u32) -> Option<&Industry> {
        self.industries.iter().find(|i| i.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &str) -> Option<&IndustryCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Resolve a category's industry ids to profiles, preserving the
    /// category's declared order. Dangling ids cannot occur after
    /// `validate`, so they are simply skipped here.
    pub fn category_industries(&self, category: &IndustryCategory) -> Vec<&Industry> {
        category
            .industries
            .iter()
            .filter_map(|&id| self.industry(id))
            .collect()
    }

    /// Check the structural invariants of the catalog.
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = std::collections::HashSet::new();
        for industry in &self.industries {
            if !seen.insert(industry.id) {
                return Err(CatalogError::DuplicateIndustryId(industry.id));
            }

            let (min, max) = (industry.hr_cost_ratio_min, industry.hr_cost_ratio_max);
            if !(0.0..=100.0).contains(&min) || !(0.0..=100.0).contains(&max) || min > max {
                return Err(CatalogError::InvalidRatioBand {
                    id: industry.id,
                    name: industry.name.clone(),
                    min,
                    max,
                });
            }

            let total = industry.department_allocation.total();
            if (total - 100.0).abs() > ALLOCATION_SUM_TOLERANCE {
                return Err(CatalogError::AllocationSum {
                    id: industry.id,
                    name: industry.name.clone(),
                    total,
                });
            }
        }

        for category in &self.categories {
            for &industry_id in &category.industries {
                if !seen.contains(&industry_id) {
                    return Err(CatalogError::DanglingIndustryRef {
                        category: category.id.clone(),
                        industry_id,
                    });
                }
            }
        }

        Ok(())
    }
}
