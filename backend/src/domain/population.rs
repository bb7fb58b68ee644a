//! Population accessor over the G01 table (selected person
//! characteristics by sex).
//!
//! Covers total population, the 11 fixed age bands, indigenous status,
//! education attendance and completion, and citizenship.

use serde::{Deserialize, Serialize};

use super::GenderCounts;
use crate::error::{AccessResult, RecordResult};
use crate::record::{Record, Table};

/// Age bands and their column bases, youngest first.
pub const AGE_BANDS: [(&str, &str); 11] = [
    ("0-4", "Age_0_4_yr"),
    ("5-14", "Age_5_14_yr"),
    ("15-19", "Age_15_19_yr"),
    ("20-24", "Age_20_24_yr"),
    ("25-34", "Age_25_34_yr"),
    ("35-44", "Age_35_44_yr"),
    ("45-54", "Age_45_54_yr"),
    ("55-64", "Age_55_64_yr"),
    ("65-74", "Age_65_74_yr"),
    ("75-84", "Age_75_84_yr"),
    ("85+", "Age_85ov"),
];

/// Education attendance groupings. The source table abbreviates
/// "educ" down to "edu" from the 15-19 group onward; keep the entries
/// verbatim.
const ATTENDANCE_GROUPS: [(&str, &str); 5] = [
    ("0-4", "Age_psns_att_educ_inst_0_4"),
    ("5-14", "Age_psns_att_educ_inst_5_14"),
    ("15-19", "Age_psns_att_edu_inst_15_19"),
    ("20-24", "Age_psns_att_edu_inst_20_24"),
    ("25+", "Age_psns_att_edu_inst_25_ov"),
];

/// Highest year of school completed, highest attainment first.
const COMPLETION_LEVELS: [(&str, &str); 6] = [
    ("year_12", "High_yr_schl_comp_Yr_12_eq"),
    ("year_11", "High_yr_schl_comp_Yr_11_eq"),
    ("year_10", "High_yr_schl_comp_Yr_10_eq"),
    ("year_9", "High_yr_schl_comp_Yr_9_eq"),
    ("year_8_or_below", "High_yr_schl_comp_Yr_8_belw"),
    ("did_not_attend", "High_yr_schl_comp_D_n_g_sch"),
];

/// Gender counts for one named grouping (age band, attendance group,
/// attainment level).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupCounts {
    pub group: String,
    #[serde(flatten)]
    pub counts: GenderCounts,
}

/// Indigenous status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndigenousSummary {
    pub total: GenderCounts,
    pub aboriginal: GenderCounts,
    pub torres_strait_islander: GenderCounts,
    pub both: GenderCounts,
}

/// Accessor for one area's G01 row.
pub struct Population {
    record: Record,
}

impl Population {
    /// Validate cardinality and wrap the single row.
    pub fn from_table(table: &Table) -> RecordResult<Self> {
        Ok(Self {
            record: Record::from_table(table)?,
        })
    }

    /// Total population by gender.
    pub fn total_population(&self) -> AccessResult<GenderCounts> {
        GenderCounts::read(&self.record, "Tot_P")
    }

    /// Population per age band, youngest first.
    pub fn age_distribution(&self) -> AccessResult<Vec<GroupCounts>> {
        AGE_BANDS
            .iter()
            .map(|&(label, base)| {
                Ok(GroupCounts {
                    group: label.to_string(),
                    counts: GenderCounts::read(&self.record, base)?,
                })
            })
            .collect()
    }

    /// Indigenous status statistics.
    pub fn indigenous_statistics(&self) -> AccessResult<IndigenousSummary> {
        Ok(IndigenousSummary {
            total: GenderCounts::read(&self.record, "Indigenous_P_Tot")?,
            aboriginal: GenderCounts::read(&self.record, "Indigenous_psns_Aboriginal")?,
            torres_strait_islander: GenderCounts::read(
                &self.record,
                "Indig_psns_Torres_Strait_Is",
            )?,
            both: GenderCounts::read(&self.record, "Indig_Bth_Abor_Torres_St_Is")?,
        })
    }

    /// Persons attending an educational institution, by age grouping.
    pub fn education_attendance(&self) -> AccessResult<Vec<GroupCounts>> {
        ATTENDANCE_GROUPS
            .iter()
            .map(|&(label, base)| {
                Ok(GroupCounts {
                    group: label.to_string(),
                    counts: GenderCounts::read(&self.record, base)?,
                })
            })
            .collect()
    }

    /// Highest year of school completed, by attainment level.
    pub fn education_completion(&self) -> AccessResult<Vec<GroupCounts>> {
        COMPLETION_LEVELS
            .iter()
            .map(|&(label, base)| {
                Ok(GroupCounts {
                    group: label.to_string(),
                    counts: GenderCounts::read(&self.record, base)?,
                })
            })
            .collect()
    }

    /// Australian citizen counts.
    pub fn citizen_status(&self) -> AccessResult<GenderCounts> {
        GenderCounts::read(&self.record, "Australian_citizen")
    }

    /// Every column this accessor can read, for the load-time schema pass.
    pub fn expected_columns() -> Vec<String> {
        let bases = ["Tot_P", "Australian_citizen"]
            .into_iter()
            .chain(AGE_BANDS.iter().map(|&(_, b)| b))
            .chain(ATTENDANCE_GROUPS.iter().map(|&(_, b)| b))
            .chain(COMPLETION_LEVELS.iter().map(|&(_, b)| b))
            .chain([
                "Indigenous_P_Tot",
                "Indigenous_psns_Aboriginal",
                "Indig_psns_Torres_Strait_Is",
                "Indig_Bth_Abor_Torres_St_Is",
            ]);

        bases
            .flat_map(|base| {
                ["P", "M", "F"]
                    .into_iter()
                    .map(move |sex| format!("{base}_{sex}"))
            })
            .collect()
    }
}
