//! Domain accessors over single-row census records.
//!
//! One accessor per source table:
//!
//! - [`population::Population`] - G01 (selected person characteristics)
//! - [`income::Income`] - G17 (personal income by age)
//! - [`dwelling::Dwelling`] - G37 (dwelling structure by tenure)
//! - [`ancestry::Ancestry`] - G08 (ancestry by birthplace of parents)
//!
//! Each accessor validates the exactly-one-row invariant at construction
//! and exposes pure read methods that regroup the table's wide columns
//! under semantic keys. Column vocabularies are explicit const tables;
//! the source files have irregular naming that must never be inferred.

pub mod ancestry;
pub mod dwelling;
pub mod income;
pub mod population;

use serde::{Deserialize, Serialize};

/// Person counts broken down by gender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub total: f64,
    pub male: f64,
    pub female: f64,
}

impl GenderCounts {
    /// Read `{base}_P`, `{base}_M`, `{base}_F` off a record.
    pub(crate) fn read(
        record: &crate::record::Record,
        base: &str,
    ) -> crate::error::AccessResult<Self> {
        Ok(GenderCounts {
            total: record.value(&format!("{base}_P"))?,
            male: record.value(&format!("{base}_M"))?,
            female: record.value(&format!("{base}_F"))?,
        })
    }
}
