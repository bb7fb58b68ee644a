//! Income accessor over the G17 table (total personal weekly income by
//! age by sex, persons).
//!
//! Nine income bands crossed with nine age bands, plus a not-stated count
//! per age band. The weighted average and percentile estimates treat each
//! band as concentrated at its midpoint.

use serde::{Deserialize, Serialize};

use crate::error::{AccessError, AccessResult, RecordResult};
use crate::record::{Record, Table};
use crate::stats::{band_midpoint, weighted_percentile};

/// Weekly income bands: name, lower bound, upper bound.
///
/// The top band is open-ended in the census; 5000 is a configured ceiling
/// used only for midpoint calculation, not a value from the data.
pub const INCOME_BANDS: [(&str, f64, f64); 9] = [
    ("650_799", 650.0, 799.0),
    ("800_999", 800.0, 999.0),
    ("1000_1249", 1000.0, 1249.0),
    ("1250_1499", 1250.0, 1499.0),
    ("1500_1749", 1500.0, 1749.0),
    ("1750_1999", 1750.0, 1999.0),
    ("2000_2999", 2000.0, 2999.0),
    ("3000_3499", 3000.0, 3499.0),
    ("3500_more", 3500.0, 5000.0),
];

/// Age bands recognised by [`Income::income_by_age`].
pub const AGE_BANDS: [&str; 9] = [
    "15_19", "20_24", "25_34", "35_44", "45_54", "55_64", "65_74", "75_84", "85ov",
];

/// Count for one income band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCount {
    pub band: String,
    pub count: f64,
}

/// Income distribution for one age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeIncome {
    pub bands: Vec<BandCount>,
    pub not_stated: f64,
}

/// Income distribution percentile estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub p90: f64,
}

impl Percentiles {
    fn zero() -> Self {
        Self {
            p25: 0.0,
            median: 0.0,
            p75: 0.0,
            p90: 0.0,
        }
    }
}

/// Overall income statistics for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSummary {
    pub average_income: f64,
    pub total_stated: f64,
    pub total_not_stated: f64,
    pub percentiles: Percentiles,
}

/// Income statistics for one age band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBandSummary {
    pub average_income: f64,
    pub total_stated: f64,
    pub distribution: AgeIncome,
}

/// Column for an income band within an age band.
///
/// The oldest band uses a different suffix pattern than the rest; both
/// special cases are spelled out, never derived.
fn income_column(band: &str, age_band: &str) -> String {
    if age_band == "85ov" {
        format!("P_{band}_85ov")
    } else {
        format!("P_{band}_{age_band}_yrs")
    }
}

/// Column for the not-stated count of an age band.
fn not_stated_column(age_band: &str) -> String {
    if age_band == "85ov" {
        "P_PI_NS_ns_85_yrs_ovr".to_string()
    } else {
        format!("P_PI_NS_ns_{age_band}_yrs")
    }
}

/// Accessor for one area's G17 row.
pub struct Income {
    record: Record,
}

impl Income {
    /// Validate cardinality and wrap the single row.
    pub fn from_table(table: &Table) -> RecordResult<Self> {
        Ok(Self {
            record: Record::from_table(table)?,
        })
    }

    /// Income distribution for one age band.
    pub fn income_by_age(&self, age_band: &str) -> AccessResult<AgeIncome> {
        if !AGE_BANDS.contains(&age_band) {
            return Err(AccessError::InvalidAgeBand(age_band.to_string()));
        }

        let bands = INCOME_BANDS
            .iter()
            .map(|&(band, _, _)| {
                Ok(BandCount {
                    band: band.to_string(),
                    count: self.record.value(&income_column(band, age_band))?,
                })
            })
            .collect::<AccessResult<Vec<_>>>()?;

        Ok(AgeIncome {
            bands,
            not_stated: self.record.value(&not_stated_column(age_band))?,
        })
    }

    /// Income distribution across every age band, youngest first.
    pub fn income_distribution(&self) -> AccessResult<Vec<(String, AgeIncome)>> {
        AGE_BANDS
            .iter()
            .map(|&age| Ok((age.to_string(), self.income_by_age(age)?)))
            .collect()
    }

    /// Weighted average weekly income and stated-count denominator.
    ///
    /// `age_band` restricts the calculation to one band; `None` covers
    /// the whole population. Returns `(0, 0)` when no one stated an
    /// income.
    pub fn average_income(&self, age_band: Option<&str>) -> AccessResult<(f64, f64)> {
        let distributions = match age_band {
            Some(age) => vec![self.income_by_age(age)?],
            None => self
                .income_distribution()?
                .into_iter()
                .map(|(_, d)| d)
                .collect(),
        };

        let mut weighted_sum = 0.0;
        let mut stated = 0.0;
        for distribution in &distributions {
            // income_by_age emits bands in INCOME_BANDS order.
            for (band_count, &(_, low, high)) in
                distribution.bands.iter().zip(INCOME_BANDS.iter())
            {
                weighted_sum += band_midpoint(low, high) * band_count.count;
                stated += band_count.count;
            }
        }

        if stated == 0.0 {
            return Ok((0.0, 0.0));
        }
        Ok((weighted_sum / stated, stated))
    }

    /// Percentile estimates over the midpoint multiset of all age bands.
    ///
    /// Counts are truncated to whole persons; an area with no stated
    /// income reports zero for every percentile.
    pub fn income_percentiles(&self) -> AccessResult<Percentiles> {
        let mut pairs: Vec<(f64, f64)> = Vec::new();
        for (_, distribution) in self.income_distribution()? {
            for (band_count, &(_, low, high)) in
                distribution.bands.iter().zip(INCOME_BANDS.iter())
            {
                pairs.push((band_midpoint(low, high), band_count.count));
            }
        }

        let at = |p: f64| weighted_percentile(&pairs, p).unwrap_or(0.0);
        Ok(Percentiles {
            p25: at(25.0),
            median: at(50.0),
            p75: at(75.0),
            p90: at(90.0),
        })
    }

    /// Overall income statistics: average, stated/not-stated totals and
    /// percentiles.
    pub fn income_summary(&self) -> AccessResult<IncomeSummary> {
        let (average_income, total_stated) = self.average_income(None)?;

        let mut total_not_stated = 0.0;
        for &age in AGE_BANDS.iter() {
            total_not_stated += self.income_by_age(age)?.not_stated;
        }

        Ok(IncomeSummary {
            average_income,
            total_stated,
            total_not_stated,
            percentiles: self.income_percentiles()?,
        })
    }

    /// Income statistics for one age band.
    pub fn age_band_summary(&self, age_band: &str) -> AccessResult<AgeBandSummary> {
        let (average_income, total_stated) = self.average_income(Some(age_band))?;
        Ok(AgeBandSummary {
            average_income,
            total_stated,
            distribution: self.income_by_age(age_band)?,
        })
    }

    /// Every column this accessor can read, for the load-time schema pass.
    pub fn expected_columns() -> Vec<String> {
        let mut columns = Vec::new();
        for &age in AGE_BANDS.iter() {
            for &(band, _, _) in INCOME_BANDS.iter() {
                columns.push(income_column(band, age));
            }
            columns.push(not_stated_column(age));
        }
        columns
    }
}
