//! Fully computed per-area view-models.
//!
//! [`area_profile`] is the request/response surface of the service:
//! given a postcode it constructs the four domain accessors and returns
//! everything the dashboard renders, with the chart-side aggregation
//! (attendance rates, tenure shares, top-10 ancestry roll-up) already
//! applied. Presentation aggregation lives here and only here; the
//! domain accessors stay pure column regroupings.

use serde::{Deserialize, Serialize};

use crate::domain::ancestry::{Ancestry, BirthplaceSummary};
use crate::domain::dwelling::{
    Dwelling, DwellingCounts, OtherTenureSummary, OwnershipSummary, RentalSummary,
};
use crate::domain::income::{AgeIncome, Income, IncomeSummary, AGE_BANDS};
use crate::domain::population::{GroupCounts, IndigenousSummary, Population};
use crate::domain::GenderCounts;
use crate::error::ProfileResult;
use crate::loader::CensusStore;
use crate::stats::percentage;

/// How many ancestries the dashboard lists before rolling up the rest.
const TOP_ANCESTRIES: usize = 10;

/// Everything the dashboard needs for one postcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaProfile {
    pub postcode: String,
    pub population: PopulationView,
    pub income: IncomeView,
    pub dwelling: DwellingView,
    pub ancestry: AncestryView,
}

/// A count with its share of a baseline, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareMetric {
    pub count: f64,
    pub share: f64,
}

/// Population panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationView {
    pub totals: GenderCounts,
    pub citizens: ShareMetric,
    pub indigenous: ShareMetric,
    pub indigenous_breakdown: IndigenousSummary,
    pub age_distribution: Vec<GroupCounts>,
    pub education_attendance: Vec<AttendanceRate>,
    pub education_completion: Vec<GroupCounts>,
}

/// Share of an age grouping attending an educational institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRate {
    pub group: String,
    pub attending: f64,
    pub population: f64,
    pub rate: f64,
}

/// Income panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeView {
    pub summary: IncomeSummary,
    pub by_age: Vec<AgeIncomeView>,
}

/// Income distribution for one age band, labelled for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeIncomeView {
    pub age_band: String,
    pub average_income: f64,
    pub total_stated: f64,
    #[serde(flatten)]
    pub distribution: AgeIncome,
}

/// Dwelling panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DwellingView {
    pub totals: DwellingCounts,
    pub ownership: OwnershipSummary,
    pub rentals: RentalSummary,
    pub rental_totals: DwellingCounts,
    pub other_tenure: OtherTenureSummary,
    pub tenure_shares: TenureShares,
}

/// Tenure mix as percentages of all dwellings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenureShares {
    pub owned_outright: f64,
    pub owned_with_mortgage: f64,
    pub rented: f64,
    pub other: f64,
    pub not_stated: f64,
}

/// Ancestry panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AncestryView {
    pub total_responses: BirthplaceSummary,
    pub top: Vec<RankedAncestry>,
    pub all_other: ShareMetric,
}

/// One ranked ancestry with its share of all responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAncestry {
    pub name: String,
    pub count: f64,
    pub share: f64,
}

/// Compute the full view-model for one postcode.
pub fn area_profile(store: &CensusStore, postcode: &str) -> ProfileResult<AreaProfile> {
    let population = Population::from_table(&store.population_for(postcode))?;
    let income = Income::from_table(&store.income_for(postcode))?;
    let dwelling = Dwelling::from_table(&store.dwelling_for(postcode))?;
    let ancestry = Ancestry::from_table(&store.ancestry_for(postcode))?;

    Ok(AreaProfile {
        postcode: postcode.to_string(),
        population: population_view(&population)?,
        income: income_view(&income)?,
        dwelling: dwelling_view(&dwelling)?,
        ancestry: ancestry_view(&ancestry)?,
    })
}

pub(crate) fn population_view(population: &Population) -> ProfileResult<PopulationView> {
    let totals = population.total_population()?;
    let citizens = population.citizen_status()?;
    let indigenous = population.indigenous_statistics()?;
    let age_distribution = population.age_distribution()?;
    let attendance = population.education_attendance()?;

    Ok(PopulationView {
        citizens: ShareMetric {
            count: citizens.total,
            share: percentage(citizens.total, totals.total),
        },
        indigenous: ShareMetric {
            count: indigenous.total.total,
            share: percentage(indigenous.total.total, totals.total),
        },
        indigenous_breakdown: indigenous,
        education_attendance: attendance_rates(&attendance, &age_distribution),
        education_completion: population.education_completion()?,
        age_distribution,
        totals,
    })
}

/// Attendance per age grouping as a share of that grouping's population.
///
/// The attendance table's four youngest groupings line up with age bands
/// one to one; the open-ended `25+` grouping is measured against the sum
/// of every band from 25-34 up.
fn attendance_rates(
    attendance: &[GroupCounts],
    age_distribution: &[GroupCounts],
) -> Vec<AttendanceRate> {
    attendance
        .iter()
        .map(|entry| {
            let population = if entry.group == "25+" {
                age_distribution
                    .iter()
                    .skip_while(|band| band.group != "25-34")
                    .map(|band| band.counts.total)
                    .sum()
            } else {
                age_distribution
                    .iter()
                    .find(|band| band.group == entry.group)
                    .map(|band| band.counts.total)
                    .unwrap_or(0.0)
            };

            AttendanceRate {
                group: entry.group.clone(),
                attending: entry.counts.total,
                population,
                rate: percentage(entry.counts.total, population),
            }
        })
        .collect()
}

pub(crate) fn income_view(income: &Income) -> ProfileResult<IncomeView> {
    let mut by_age = Vec::with_capacity(AGE_BANDS.len());
    for &age in AGE_BANDS.iter() {
        let summary = income.age_band_summary(age)?;
        by_age.push(AgeIncomeView {
            age_band: age.to_string(),
            average_income: summary.average_income,
            total_stated: summary.total_stated,
            distribution: summary.distribution,
        });
    }

    Ok(IncomeView {
        summary: income.income_summary()?,
        by_age,
    })
}

pub(crate) fn dwelling_view(dwelling: &Dwelling) -> ProfileResult<DwellingView> {
    let totals = dwelling.dwelling_totals()?;
    let ownership = dwelling.ownership_summary()?;
    let rental_totals = dwelling.rental_totals()?;
    let other_tenure = dwelling.other_tenure_types()?;

    let tenure_shares = TenureShares {
        owned_outright: percentage(ownership.owned_outright.total, totals.total),
        owned_with_mortgage: percentage(ownership.owned_with_mortgage.total, totals.total),
        rented: percentage(rental_totals.total, totals.total),
        other: percentage(other_tenure.other_tenure.total, totals.total),
        not_stated: percentage(other_tenure.tenure_not_stated.total, totals.total),
    };

    Ok(DwellingView {
        rentals: dwelling.rental_by_type()?,
        totals,
        ownership,
        rental_totals,
        other_tenure,
        tenure_shares,
    })
}

pub(crate) fn ancestry_view(ancestry: &Ancestry) -> ProfileResult<AncestryView> {
    let ranking = ancestry.ancestry_ranking();
    let total: f64 = ranking.iter().map(|entry| entry.total).sum();

    let top: Vec<RankedAncestry> = ranking
        .iter()
        .take(TOP_ANCESTRIES)
        .map(|entry| RankedAncestry {
            name: entry.name.clone(),
            count: entry.total,
            share: percentage(entry.total, total),
        })
        .collect();

    let other_count: f64 = ranking
        .iter()
        .skip(TOP_ANCESTRIES)
        .map(|entry| entry.total)
        .sum();

    Ok(AncestryView {
        total_responses: ancestry.total_population_summary()?,
        top,
        all_other: ShareMetric {
            count: other_count,
            share: percentage(other_count, total),
        },
    })
}
