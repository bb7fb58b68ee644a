//! Dwelling accessor over the G37 table (dwelling structure by tenure
//! and landlord type).
//!
//! Every tenure row carries the same five dwelling categories plus a
//! total. The source columns are heavily and inconsistently abbreviated,
//! so each group's six column names are a literal table entry.

use serde::{Deserialize, Serialize};

use crate::error::{AccessResult, RecordResult};
use crate::record::{Record, Table};

/// Dwelling-category counts for one tenure grouping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DwellingCounts {
    pub separate_house: f64,
    pub semi_detached: f64,
    pub flat_apartment: f64,
    pub other_dwelling: f64,
    pub not_stated: f64,
    pub total: f64,
}

/// Owned-outright vs owned-with-mortgage breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnershipSummary {
    pub owned_outright: DwellingCounts,
    pub owned_with_mortgage: DwellingCounts,
}

/// Rented dwellings by landlord type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalSummary {
    pub real_estate_agent: DwellingCounts,
    pub state_housing: DwellingCounts,
    pub community_housing: DwellingCounts,
    pub private_landlord: DwellingCounts,
    pub other_landlord: DwellingCounts,
}

/// Residual tenure categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherTenureSummary {
    pub other_tenure: DwellingCounts,
    pub tenure_not_stated: DwellingCounts,
}

/// Column names for one tenure grouping, in [`DwellingCounts`] field
/// order: separate house, semi-detached, flat/apartment, other,
/// not stated, total.
type ColumnGroup = [&'static str; 6];

const OWNED_OUTRIGHT: ColumnGroup = [
    "O_OR_DS_Sep_house",
    "O_OR_DS_SemiD_ro_or_tce_h_th",
    "O_OR_DS_Flat_apart",
    "O_OR_DS_Oth_dwell",
    "O_OR_DS_not_stated",
    "O_OR_Total",
];

const OWNED_MORTGAGE: ColumnGroup = [
    "O_MTG_DS_Sep_house",
    "O_MTG_DS_SemiD_ro_or_tce_h_th",
    "O_MTG_DS_Flat_apart",
    "O_MTG_DS_Oth_dwell",
    "O_MTG_DS_not_stated",
    "O_MTG_Total",
];

const RENT_REAL_ESTATE: ColumnGroup = [
    "R_RE_Agt_DS_Sep_house",
    "R_RE_Ag_DS_SemD_ro_or_tc_h_th",
    "R_RE_Agt_DS_Flat_apart",
    "R_RE_Agt_DS_Oth_dwell",
    "R_RE_Agt_DS_not_stated",
    "R_RE_Agt_Total",
];

const RENT_STATE_HOUSING: ColumnGroup = [
    "R_ST_h_auth_DS_Sep_house",
    "R_ST_h_au_DS_SD_ro_or_tc_h_th",
    "R_ST_h_auth_DS_Flat_apart",
    "R_ST_h_auth_DS_Oth_dwell",
    "R_ST_h_auth_DS_not_stated",
    "R_ST_h_auth_Total",
];

const RENT_COMMUNITY: ColumnGroup = [
    "R_Com_Hp_DS_Sp_ho",
    "R_Com_Hp_DS_SD_ro_t_h_t",
    "R_Com_Hp_DS_Flt_apt",
    "R_Com_Hp_DS_Ot_dwel",
    "R_Com_Hp_DS_NS",
    "R_Com_Hp_Total",
];

const RENT_PRIVATE: ColumnGroup = [
    "R_Psn_not_in_s_hh_DS_Sep_hous",
    "R_P_not_in_s_h_DS_SD_ro_t_h_t",
    "R_P_not_in_s_hh_DS_Flat_apart",
    "R_Psn_not_in_s_hh_DS_Oth_dwel",
    "R_Psn_not_in_s_hh_DS_NS",
    "R_Psn_not_in_s_hh_Total",
];

const RENT_OTHER_LANDLORD: ColumnGroup = [
    "R_Ot_landld_typ_DS_Sep_house",
    "R_O_LLd_typ_DS_SD_ro_tc_h_th",
    "R_Ot_LLd_typ_DS_Flat_apart",
    "R_Ot_landld_typ_DS_Oth_dwell",
    "R_Ot_landld_typ_DS_not_stated",
    "R_Ot_landld_typ_Total",
];

const RENT_TOTAL: ColumnGroup = [
    "R_Tot_DS_Sep_house",
    "R_Tot_DS_SemiD_ro_or_tce_h_th",
    "R_Tot_DS_Flat_apart",
    "R_Tot_DS_Oth_dwell",
    "R_Tot_DS_not_stated",
    "R_Tot_Total",
];

const DWELLING_TOTAL: ColumnGroup = [
    "Total_DS_Sep_house",
    "Total_DS_SemiD_ro_or_tce_h_th",
    "Total_DS_Flat_apart",
    "Total_DS_Oth_dwell",
    "Total_DS_not_stated",
    "Total_Total",
];

const OTHER_TENURE: ColumnGroup = [
    "Oth_ten_type_DS_Sep_house",
    "Oth_ten_ty_DS_SD_ro_tce_h_th",
    "Oth_ten_type_DS_Flat_apart",
    "Oth_ten_type_DS_Oth_dwell",
    "Oth_ten_type_DS_not_stated",
    "Oth_ten_type_Total",
];

const TENURE_NOT_STATED: ColumnGroup = [
    "Ten_type_NS_DS_Sep_house",
    "Ten_ty_NS_DS_SD_ro_tce_h_t",
    "Ten_ty_NS_DS_Flat_apart",
    "Ten_type_NS_DS_Oth_dwell",
    "Ten_type_NS_DS_not_stated",
    "Ten_type_NS_Total",
];

const ALL_GROUPS: [&ColumnGroup; 11] = [
    &OWNED_OUTRIGHT,
    &OWNED_MORTGAGE,
    &RENT_REAL_ESTATE,
    &RENT_STATE_HOUSING,
    &RENT_COMMUNITY,
    &RENT_PRIVATE,
    &RENT_OTHER_LANDLORD,
    &RENT_TOTAL,
    &DWELLING_TOTAL,
    &OTHER_TENURE,
    &TENURE_NOT_STATED,
];

/// Accessor for one area's G37 row.
pub struct Dwelling {
    record: Record,
}

impl Dwelling {
    /// Validate cardinality and wrap the single row.
    pub fn from_table(table: &Table) -> RecordResult<Self> {
        Ok(Self {
            record: Record::from_table(table)?,
        })
    }

    fn counts(&self, group: &ColumnGroup) -> AccessResult<DwellingCounts> {
        Ok(DwellingCounts {
            separate_house: self.record.value(group[0])?,
            semi_detached: self.record.value(group[1])?,
            flat_apartment: self.record.value(group[2])?,
            other_dwelling: self.record.value(group[3])?,
            not_stated: self.record.value(group[4])?,
            total: self.record.value(group[5])?,
        })
    }

    /// Owned outright vs owned with a mortgage, by dwelling category.
    pub fn ownership_summary(&self) -> AccessResult<OwnershipSummary> {
        Ok(OwnershipSummary {
            owned_outright: self.counts(&OWNED_OUTRIGHT)?,
            owned_with_mortgage: self.counts(&OWNED_MORTGAGE)?,
        })
    }

    /// Rented dwellings broken down by landlord type.
    pub fn rental_by_type(&self) -> AccessResult<RentalSummary> {
        Ok(RentalSummary {
            real_estate_agent: self.counts(&RENT_REAL_ESTATE)?,
            state_housing: self.counts(&RENT_STATE_HOUSING)?,
            community_housing: self.counts(&RENT_COMMUNITY)?,
            private_landlord: self.counts(&RENT_PRIVATE)?,
            other_landlord: self.counts(&RENT_OTHER_LANDLORD)?,
        })
    }

    /// Total rented dwellings by category, all landlord types.
    pub fn rental_totals(&self) -> AccessResult<DwellingCounts> {
        self.counts(&RENT_TOTAL)
    }

    /// Totals across every tenure type.
    pub fn dwelling_totals(&self) -> AccessResult<DwellingCounts> {
        self.counts(&DWELLING_TOTAL)
    }

    /// Other tenure and tenure-not-stated categories.
    pub fn other_tenure_types(&self) -> AccessResult<OtherTenureSummary> {
        Ok(OtherTenureSummary {
            other_tenure: self.counts(&OTHER_TENURE)?,
            tenure_not_stated: self.counts(&TENURE_NOT_STATED)?,
        })
    }

    /// Every column this accessor can read, for the load-time schema pass.
    pub fn expected_columns() -> Vec<String> {
        ALL_GROUPS
            .iter()
            .flat_map(|group| group.iter().map(|c| c.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccessError, RecordError};
    use crate::record::testutil::table_of;

    fn full_table() -> Table {
        let pairs: Vec<(String, f64)> = Dwelling::expected_columns()
            .into_iter()
            .enumerate()
            .map(|(i, c)| (c, i as f64))
            .collect();
        let borrowed: Vec<(&str, f64)> =
            pairs.iter().map(|(c, v)| (c.as_str(), *v)).collect();
        table_of(&borrowed)
    }

    #[test]
    fn test_construction_cardinality() {
        let empty = Table::new(vec!["Total_Total".into()], vec![]);
        assert!(matches!(
            Dwelling::from_table(&empty),
            Err(RecordError::Empty)
        ));
    }

    #[test]
    fn test_totals_read_dedicated_total_column() {
        let dwelling = Dwelling::from_table(&full_table()).unwrap();
        let totals = dwelling.dwelling_totals().unwrap();
        // Totals come straight from Total_Total, never recomputed from
        // the component categories.
        let columns = Dwelling::expected_columns();
        let index = columns.iter().position(|c| c == "Total_Total").unwrap();
        assert_eq!(totals.total, index as f64);
    }

    #[test]
    fn test_ownership_summary() {
        let dwelling = Dwelling::from_table(&full_table()).unwrap();
        let ownership = dwelling.ownership_summary().unwrap();
        assert_eq!(ownership.owned_outright.separate_house, 0.0);
        assert_eq!(ownership.owned_outright.total, 5.0);
        assert_eq!(ownership.owned_with_mortgage.separate_house, 6.0);
    }

    #[test]
    fn test_rental_by_type_covers_all_landlords() {
        let dwelling = Dwelling::from_table(&full_table()).unwrap();
        let rentals = dwelling.rental_by_type().unwrap();
        // Spot check the abbreviated community-housing columns.
        let columns = Dwelling::expected_columns();
        let flat = columns
            .iter()
            .position(|c| c == "R_Com_Hp_DS_Flt_apt")
            .unwrap();
        assert_eq!(rentals.community_housing.flat_apartment, flat as f64);
    }

    #[test]
    fn test_missing_column_propagates() {
        let dwelling = Dwelling::from_table(&table_of(&[("Total_Total", 1.0)])).unwrap();
        assert_eq!(
            dwelling.ownership_summary().unwrap_err(),
            AccessError::MissingField("O_OR_DS_Sep_house".into())
        );
    }

    #[test]
    fn test_expected_columns() {
        let columns = Dwelling::expected_columns();
        assert_eq!(columns.len(), 11 * 6);
        assert!(columns.contains(&"Ten_ty_NS_DS_SD_ro_tce_h_t".to_string()));
    }
}
