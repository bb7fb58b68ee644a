//! Loading the per-domain census tables from disk.
//!
//! The 2021 GCP postal-area release ships one wide CSV per topic table.
//! [`CensusStore`] reads the four tables this service uses and hands out
//! single-postcode selections; a postcode with no row yields an empty
//! selection, which surfaces as [`RecordError::Empty`] when an accessor
//! is constructed.
//!
//! [`RecordError::Empty`]: crate::error::RecordError::Empty

use std::path::Path;

use tracing::{info, warn};

use crate::domain::{ancestry::Ancestry, dwelling::Dwelling, income::Income, population::Population};
use crate::error::{LoaderError, LoaderResult};
use crate::record::Table;

/// Column keying every table by postal area.
pub const AREA_CODE_COLUMN: &str = "POA_CODE_2021";

/// G01 - selected person characteristics.
pub const POPULATION_FILE: &str = "2021Census_G01_NSW_POA.csv";
/// G08 - ancestry by birthplace of parents.
pub const ANCESTRY_FILE: &str = "2021Census_G08_NSW_POA.csv";
/// G17C - total personal weekly income by age (persons).
pub const INCOME_FILE: &str = "2021Census_G17C_NSW_POA.csv";
/// G37 - dwelling structure by tenure.
pub const DWELLING_FILE: &str = "2021Census_G37_NSW_POA.csv";

/// The four in-memory census tables.
pub struct CensusStore {
    population: Table,
    income: Table,
    dwelling: Table,
    ancestry: Table,
}

impl CensusStore {
    /// Load every table from `dir`.
    ///
    /// Each domain's expected column vocabulary is checked against the
    /// file's header here, in one pass; columns missing from a dataset
    /// variant are logged and later surface as `MissingField` only if a
    /// lookup actually touches them.
    pub fn open(dir: &Path) -> LoaderResult<CensusStore> {
        Ok(CensusStore {
            population: load_domain(
                dir,
                POPULATION_FILE,
                "population",
                &Population::expected_columns(),
            )?,
            income: load_domain(dir, INCOME_FILE, "income", &Income::expected_columns())?,
            dwelling: load_domain(
                dir,
                DWELLING_FILE,
                "dwelling",
                &Dwelling::expected_columns(),
            )?,
            ancestry: load_domain(
                dir,
                ANCESTRY_FILE,
                "ancestry",
                &Ancestry::expected_columns(),
            )?,
        })
    }

    /// Population rows for one postcode (zero or one row).
    pub fn population_for(&self, postcode: &str) -> Table {
        self.population.select(AREA_CODE_COLUMN, &area_key(postcode))
    }

    /// Income rows for one postcode.
    pub fn income_for(&self, postcode: &str) -> Table {
        self.income.select(AREA_CODE_COLUMN, &area_key(postcode))
    }

    /// Dwelling rows for one postcode.
    pub fn dwelling_for(&self, postcode: &str) -> Table {
        self.dwelling.select(AREA_CODE_COLUMN, &area_key(postcode))
    }

    /// Ancestry rows for one postcode.
    pub fn ancestry_for(&self, postcode: &str) -> Table {
        self.ancestry.select(AREA_CODE_COLUMN, &area_key(postcode))
    }
}

/// Area-code cell value for a postcode, e.g. `POA2000`.
fn area_key(postcode: &str) -> String {
    format!("POA{postcode}")
}

/// Read one CSV into a [`Table`].
pub fn read_table(path: &Path) -> LoaderResult<Table> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

fn load_domain(
    dir: &Path,
    file: &str,
    domain: &str,
    expected: &[String],
) -> LoaderResult<Table> {
    let path = dir.join(file);
    let table = read_table(&path)?;

    if table.column_index(AREA_CODE_COLUMN).is_none() {
        return Err(LoaderError::MissingKeyColumn {
            table: file.to_string(),
            column: AREA_CODE_COLUMN.to_string(),
        });
    }

    let expected_refs: Vec<&str> = expected.iter().map(String::as_str).collect();
    let missing = table.missing_columns(&expected_refs);
    if !missing.is_empty() {
        warn!(
            domain,
            missing = missing.len(),
            first = missing[0],
            "expected columns absent from table"
        );
    }

    info!(domain, rows = table.row_count(), file, "loaded census table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use crate::record::Record;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.join(name)).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    fn minimal_store(dir: &Path) -> CensusStore {
        write_file(
            dir,
            POPULATION_FILE,
            "POA_CODE_2021,Tot_P_P,Tot_P_M,Tot_P_F\nPOA2000,100,48,52\nPOA2010,50,25,25\n",
        );
        write_file(dir, INCOME_FILE, "POA_CODE_2021,P_650_799_25_34_yrs\nPOA2000,10\n");
        write_file(dir, DWELLING_FILE, "POA_CODE_2021,Total_Total\nPOA2000,40\n");
        write_file(dir, ANCESTRY_FILE, "POA_CODE_2021,English_Tot_resp\nPOA2000,30\n");
        CensusStore::open(dir).unwrap()
    }

    #[test]
    fn test_open_and_select() {
        let dir = tempfile::tempdir().unwrap();
        let store = minimal_store(dir.path());

        let selected = store.population_for("2000");
        assert_eq!(selected.row_count(), 1);
        let record = Record::from_table(&selected).unwrap();
        assert_eq!(record.value("Tot_P_P"), Ok(100.0));
    }

    #[test]
    fn test_unknown_postcode_selects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = minimal_store(dir.path());

        let selected = store.population_for("9999");
        assert_eq!(selected.row_count(), 0);
        assert_eq!(Record::from_table(&selected), Err(RecordError::Empty));
    }

    #[test]
    fn test_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            CensusStore::open(dir.path()),
            Err(LoaderError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_key_column_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), POPULATION_FILE, "Tot_P_P\n100\n");
        assert!(matches!(
            CensusStore::open(dir.path()),
            Err(LoaderError::MissingKeyColumn { .. })
        ));
    }

    #[test]
    fn test_read_table_quoted_cells() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "quoted.csv", "POA_CODE_2021,Tot_P_P\n\"POA2000\",\"100\"\n");
        let table = read_table(&dir.path().join("quoted.csv")).unwrap();
        let record = Record::from_table(&table.select(AREA_CODE_COLUMN, "POA2000")).unwrap();
        assert_eq!(record.value("Tot_P_P"), Ok(100.0));
    }
}
