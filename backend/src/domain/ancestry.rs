//! Ancestry accessor over the G08 table (ancestry by birthplace of
//! parents).
//!
//! Each ancestry is a column-name prefix carrying the same six-field
//! birthplace breakdown. The general Australian group deviates from the
//! shared suffix scheme for two of its columns; those are spelled out in
//! [`Ancestry::australian_summary`].

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, AccessResult, RecordResult};
use crate::record::{Record, Table};
use crate::stats::percentage;

/// Display name and column prefix for every ancestry in the table.
///
/// The source layout lists a second "Other_" entry pointing at the same
/// columns; it is collapsed here and lookups are first-wins.
pub const ANCESTRY_PREFIXES: [(&str, &str); 31] = [
    ("Australian", "Aust_"),
    ("Aboriginal Australian", "Aust_Abor_"),
    ("Chinese", "Chinese_"),
    ("Croatian", "Croatian_"),
    ("Dutch", "Dutch_"),
    ("English", "English_"),
    ("Filipino", "Filipino_"),
    ("French", "French_"),
    ("German", "German_"),
    ("Greek", "Greek_"),
    ("Hungarian", "Hungarian_"),
    ("Indian", "Indian_"),
    ("Irish", "Irish_"),
    ("Italian", "Italian_"),
    ("Korean", "Korean_"),
    ("Lebanese", "Lebanese_"),
    ("Maltese", "Maltese_"),
    ("Maori", "Maori_"),
    ("Macedonian", "Macedonian_"),
    ("New Zealand", "NZ_"),
    ("Other", "Other_"),
    ("Polish", "Polish_"),
    ("Russian", "Russian_"),
    ("Samoan", "Samoan_"),
    ("Scottish", "Scottish_"),
    ("Serbian", "Serbian_"),
    ("South African", "Sth_African_"),
    ("Spanish", "Spanish_"),
    ("Sri Lankan", "Sri_Lankan_"),
    ("Vietnamese", "Vietnamese_"),
    ("Welsh", "Welsh_"),
];

/// Names with their own dedicated summary methods, excluded from
/// [`Ancestry::available_ancestries`].
const COMBINED_NAMES: [&str; 3] = ["Australian", "Aboriginal Australian", "Other"];

/// Birthplace-of-parents breakdown for one ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthplaceSummary {
    pub both_overseas: f64,
    pub father_overseas: f64,
    pub mother_overseas: f64,
    pub both_australia: f64,
    pub not_stated: f64,
    pub total: f64,
}

/// Birthplace shares as percentages of the ancestry's total responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthplaceShares {
    pub both_overseas: f64,
    pub father_overseas: f64,
    pub mother_overseas: f64,
    pub both_australia: f64,
    pub not_stated: f64,
}

/// Combined summary for the two Australian ancestry categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AustralianSummary {
    pub general: BirthplaceSummary,
    pub aboriginal: BirthplaceSummary,
}

/// One entry of the descending ancestry ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestryCount {
    pub name: String,
    pub total: f64,
}

/// Accessor for one area's G08 row.
pub struct Ancestry {
    record: Record,
}

impl Ancestry {
    /// Validate cardinality and wrap the single row.
    pub fn from_table(table: &Table) -> RecordResult<Self> {
        Ok(Self {
            record: Record::from_table(table)?,
        })
    }

    fn summary_for_prefix(&self, prefix: &str) -> AccessResult<BirthplaceSummary> {
        Ok(BirthplaceSummary {
            both_overseas: self.record.value(&format!("{prefix}BP_B_OS"))?,
            father_overseas: self.record.value(&format!("{prefix}FO_B_OS"))?,
            mother_overseas: self.record.value(&format!("{prefix}MO_B_OS"))?,
            both_australia: self.record.value(&format!("{prefix}BP_B_Aus"))?,
            not_stated: self.record.value(&format!("{prefix}BP_NS"))?,
            total: self.record.value(&format!("{prefix}Tot_resp"))?,
        })
    }

    /// Birthplace summary for one named ancestry.
    ///
    /// Accepts the names from [`Ancestry::available_ancestries`]; the
    /// Australian categories and the "Other" catch-all have their own
    /// methods.
    pub fn ancestry_summary(&self, ancestry: &str) -> AccessResult<BirthplaceSummary> {
        let prefix = ANCESTRY_PREFIXES
            .iter()
            .find(|&&(name, _)| name == ancestry && !COMBINED_NAMES.contains(&name))
            .map(|&(_, prefix)| prefix)
            .ok_or_else(|| AccessError::UnknownAncestry(ancestry.to_string()))?;

        self.summary_for_prefix(prefix)
    }

    /// Birthplace summary for the whole population, the baseline every
    /// per-ancestry share is measured against.
    pub fn total_population_summary(&self) -> AccessResult<BirthplaceSummary> {
        self.summary_for_prefix("Tot_P_")
    }

    /// Combined summary for general Australian and Aboriginal Australian
    /// ancestries.
    pub fn australian_summary(&self) -> AccessResult<AustralianSummary> {
        // The general Australian group names its last two columns outside
        // the shared suffix scheme.
        let general = BirthplaceSummary {
            both_overseas: self.record.value("Aust_BP_B_OS")?,
            father_overseas: self.record.value("Aust_FO_B_OS")?,
            mother_overseas: self.record.value("Aust_MO_B_OS")?,
            both_australia: self.record.value("Aust_Both_parents_born_Aust")?,
            not_stated: self.record.value("Aust_Birthplace_not_stated")?,
            total: self.record.value("Aust_Tot_resp")?,
        };

        Ok(AustralianSummary {
            general,
            aboriginal: self.summary_for_prefix("Aust_Abor_")?,
        })
    }

    /// Birthplace summary where the ancestry itself was not stated.
    pub fn not_stated_summary(&self) -> AccessResult<BirthplaceSummary> {
        self.summary_for_prefix("Ancestry_NS_")
    }

    /// Birthplace summary for ancestries outside the named groups.
    pub fn other_ancestry_summary(&self) -> AccessResult<BirthplaceSummary> {
        self.summary_for_prefix("Other_")
    }

    /// Total responses per ancestry, highest first.
    ///
    /// Ancestries whose columns are absent from this dataset variant or
    /// whose total is not positive are skipped rather than failing the
    /// ranking. Ties keep [`ANCESTRY_PREFIXES`] order (stable sort).
    pub fn ancestry_ranking(&self) -> Vec<AncestryCount> {
        let mut ranking: Vec<AncestryCount> = ANCESTRY_PREFIXES
            .iter()
            .filter_map(|&(name, prefix)| {
                let total = self.record.value(&format!("{prefix}Tot_resp")).ok()?;
                (total > 0.0).then(|| AncestryCount {
                    name: name.to_string(),
                    total,
                })
            })
            .collect();

        ranking.sort_by(|a, b| b.total.total_cmp(&a.total));
        ranking
    }

    /// Birthplace shares for one ancestry as percentages of its total.
    pub fn ancestry_percentages(&self, ancestry: &str) -> AccessResult<BirthplaceShares> {
        let summary = self.ancestry_summary(ancestry)?;
        let total = summary.total;

        Ok(BirthplaceShares {
            both_overseas: percentage(summary.both_overseas, total),
            father_overseas: percentage(summary.father_overseas, total),
            mother_overseas: percentage(summary.mother_overseas, total),
            both_australia: percentage(summary.both_australia, total),
            not_stated: percentage(summary.not_stated, total),
        })
    }

    /// The ancestry names accepted by [`Ancestry::ancestry_summary`].
    pub fn available_ancestries() -> Vec<&'static str> {
        ANCESTRY_PREFIXES
            .iter()
            .filter(|&&(name, _)| !COMBINED_NAMES.contains(&name))
            .map(|&(name, _)| name)
            .collect()
    }

    /// Every column this accessor can read, for the load-time schema pass.
    pub fn expected_columns() -> Vec<String> {
        let standard = |prefix: &str| {
            ["BP_B_OS", "FO_B_OS", "MO_B_OS", "BP_B_Aus", "BP_NS", "Tot_resp"]
                .into_iter()
                .map(move |suffix| format!("{prefix}{suffix}"))
                .collect::<Vec<_>>()
        };

        let mut columns: Vec<String> = ANCESTRY_PREFIXES
            .iter()
            .filter(|&&(name, _)| name != "Australian")
            .flat_map(|&(_, prefix)| standard(prefix))
            .collect();

        columns.extend([
            "Aust_BP_B_OS".to_string(),
            "Aust_FO_B_OS".to_string(),
            "Aust_MO_B_OS".to_string(),
            "Aust_Both_parents_born_Aust".to_string(),
            "Aust_Birthplace_not_stated".to_string(),
            "Aust_Tot_resp".to_string(),
        ]);
        columns.extend(standard("Tot_P_"));
        columns.extend(standard("Ancestry_NS_"));
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::testutil::table_of;

    #[test]
    fn test_available_ancestries_excludes_combined_groups() {
        let available = Ancestry::available_ancestries();
        assert_eq!(available.len(), 28);
        assert!(available.contains(&"Chinese"));
        assert!(available.contains(&"New Zealand"));
        assert!(!available.contains(&"Australian"));
        assert!(!available.contains(&"Other"));
    }

    #[test]
    fn test_unknown_ancestry_is_rejected() {
        let ancestry = Ancestry::from_table(&table_of(&[("Chinese_Tot_resp", 1.0)])).unwrap();
        assert_eq!(
            ancestry.ancestry_summary("Martian").unwrap_err(),
            AccessError::UnknownAncestry("Martian".into())
        );
        // Combined groups are rejected here too; they have their own
        // methods.
        assert_eq!(
            ancestry.ancestry_summary("Australian").unwrap_err(),
            AccessError::UnknownAncestry("Australian".into())
        );
    }

    #[test]
    fn test_new_zealand_maps_to_nz_prefix() {
        let ancestry = Ancestry::from_table(&table_of(&[
            ("NZ_BP_B_OS", 10.0),
            ("NZ_FO_B_OS", 2.0),
            ("NZ_MO_B_OS", 3.0),
            ("NZ_BP_B_Aus", 4.0),
            ("NZ_BP_NS", 1.0),
            ("NZ_Tot_resp", 20.0),
        ]))
        .unwrap();

        let summary = ancestry.ancestry_summary("New Zealand").unwrap();
        assert_eq!(summary.both_overseas, 10.0);
        assert_eq!(summary.total, 20.0);
    }

    #[test]
    fn test_australian_summary_special_columns() {
        let ancestry = Ancestry::from_table(&table_of(&[
            ("Aust_BP_B_OS", 1.0),
            ("Aust_FO_B_OS", 2.0),
            ("Aust_MO_B_OS", 3.0),
            ("Aust_Both_parents_born_Aust", 40.0),
            ("Aust_Birthplace_not_stated", 5.0),
            ("Aust_Tot_resp", 51.0),
            ("Aust_Abor_BP_B_OS", 0.0),
            ("Aust_Abor_FO_B_OS", 0.0),
            ("Aust_Abor_MO_B_OS", 0.0),
            ("Aust_Abor_BP_B_Aus", 7.0),
            ("Aust_Abor_BP_NS", 0.0),
            ("Aust_Abor_Tot_resp", 7.0),
        ]))
        .unwrap();

        let summary = ancestry.australian_summary().unwrap();
        assert_eq!(summary.general.both_australia, 40.0);
        assert_eq!(summary.general.not_stated, 5.0);
        assert_eq!(summary.aboriginal.total, 7.0);
    }

    #[test]
    fn test_ranking_sorted_descending_and_skips() {
        // Chinese columns missing entirely, Welsh zero: both skipped.
        let ancestry = Ancestry::from_table(&table_of(&[
            ("English_Tot_resp", 500.0),
            ("Aust_Tot_resp", 900.0),
            ("Irish_Tot_resp", 250.0),
            ("Welsh_Tot_resp", 0.0),
        ]))
        .unwrap();

        let ranking = ancestry.ancestry_ranking();
        let names: Vec<&str> = ranking.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Australian", "English", "Irish"]);
        for window in ranking.windows(2) {
            assert!(window[0].total >= window[1].total);
        }
    }

    #[test]
    fn test_ranking_ties_keep_table_order() {
        let ancestry = Ancestry::from_table(&table_of(&[
            ("Irish_Tot_resp", 100.0),
            ("English_Tot_resp", 100.0),
        ]))
        .unwrap();

        let names: Vec<String> = ancestry
            .ancestry_ranking()
            .into_iter()
            .map(|e| e.name)
            .collect();
        // English precedes Irish in the static table.
        assert_eq!(names, vec!["English", "Irish"]);
    }

    #[test]
    fn test_percentages_zero_total() {
        let ancestry = Ancestry::from_table(&table_of(&[
            ("Greek_BP_B_OS", 0.0),
            ("Greek_FO_B_OS", 0.0),
            ("Greek_MO_B_OS", 0.0),
            ("Greek_BP_B_Aus", 0.0),
            ("Greek_BP_NS", 0.0),
            ("Greek_Tot_resp", 0.0),
        ]))
        .unwrap();

        let shares = ancestry.ancestry_percentages("Greek").unwrap();
        assert_eq!(shares.both_overseas, 0.0);
        assert_eq!(shares.not_stated, 0.0);
    }

    #[test]
    fn test_percentages() {
        let ancestry = Ancestry::from_table(&table_of(&[
            ("Greek_BP_B_OS", 30.0),
            ("Greek_FO_B_OS", 10.0),
            ("Greek_MO_B_OS", 5.0),
            ("Greek_BP_B_Aus", 50.0),
            ("Greek_BP_NS", 5.0),
            ("Greek_Tot_resp", 100.0),
        ]))
        .unwrap();

        let shares = ancestry.ancestry_percentages("Greek").unwrap();
        assert_eq!(shares.both_overseas, 30.0);
        assert_eq!(shares.both_australia, 50.0);
    }

    #[test]
    fn test_expected_columns_include_special_australian_pair() {
        let columns = Ancestry::expected_columns();
        assert!(columns.contains(&"Aust_Both_parents_born_Aust".to_string()));
        assert!(columns.contains(&"Aust_Birthplace_not_stated".to_string()));
        assert!(!columns.contains(&"Aust_BP_B_Aus".to_string()));
        // 30 prefixed groups + Australian + totals + not stated, 6 each.
        assert_eq!(columns.len(), 33 * 6);
    }
}
