//! Tabular records and the single-row validation contract.
//!
//! A [`Table`] is one census CSV held in memory: a header row plus string
//! cells. A [`Record`] is exactly one row of a table, validated at
//! construction: zero rows is [`RecordError::Empty`], two or more is
//! [`RecordError::Ambiguous`]. Every domain accessor builds its `Record`
//! this way, so later field lookups can assume cardinality is settled.

use std::collections::HashMap;

use crate::error::{AccessError, AccessResult, RecordError, RecordResult};

/// One census table: headers plus raw string rows.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of a column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Keep only the rows whose `key_column` cell equals `key`.
    ///
    /// A missing key column yields an empty selection; the caller sees it
    /// as an empty record when an accessor is constructed.
    pub fn select(&self, key_column: &str, key: &str) -> Table {
        let rows = match self.column_index(key_column) {
            Some(idx) => self
                .rows
                .iter()
                .filter(|row| row.get(idx).map(String::as_str) == Some(key))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Table {
            headers: self.headers.clone(),
            rows,
        }
    }

    /// Names from `expected` that are absent from this table's header.
    pub fn missing_columns<'a>(&self, expected: &[&'a str]) -> Vec<&'a str> {
        expected
            .iter()
            .filter(|name| self.column_index(name).is_none())
            .copied()
            .collect()
    }
}

/// Exactly one row of a census table.
///
/// Field values are kept as raw strings and parsed on access, so a record
/// can carry non-numeric columns (like the area code) without failing
/// until a numeric lookup actually touches them.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Validate cardinality and extract the single row.
    pub fn from_table(table: &Table) -> RecordResult<Record> {
        match table.rows.len() {
            0 => Err(RecordError::Empty),
            1 => {
                let fields = table
                    .headers
                    .iter()
                    .cloned()
                    .zip(table.rows[0].iter().cloned())
                    .collect();
                Ok(Record { fields })
            }
            n => Err(RecordError::Ambiguous(n)),
        }
    }

    /// Numeric value of a named field.
    ///
    /// Fails with [`AccessError::MissingField`] when the column is absent
    /// from this dataset variant, [`AccessError::NonNumeric`] when the
    /// cell cannot be parsed as a count.
    pub fn value(&self, column: &str) -> AccessResult<f64> {
        let raw = self
            .fields
            .get(column)
            .ok_or_else(|| AccessError::MissingField(column.to_string()))?;

        raw.trim().parse::<f64>().map_err(|_| AccessError::NonNumeric {
            field: column.to_string(),
            value: raw.clone(),
        })
    }

    /// Raw string value of a named field.
    pub fn raw(&self, column: &str) -> AccessResult<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| AccessError::MissingField(column.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    /// Build a one-row table from (column, value) pairs.
    pub fn table_of(pairs: &[(&str, f64)]) -> Table {
        let headers = pairs.iter().map(|(k, _)| k.to_string()).collect();
        let row = pairs.iter().map(|(_, v)| v.to_string()).collect();
        Table::new(headers, vec![row])
    }

    /// Build a validated record from (column, value) pairs.
    pub fn record_of(pairs: &[(&str, f64)]) -> Record {
        Record::from_table(&table_of(pairs)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::{record_of, table_of};
    use super::*;

    #[test]
    fn test_empty_table_is_rejected() {
        let table = Table::new(vec!["Tot_P_P".into()], vec![]);
        assert_eq!(Record::from_table(&table), Err(RecordError::Empty));
    }

    #[test]
    fn test_multi_row_table_is_rejected() {
        let table = Table::new(
            vec!["Tot_P_P".into()],
            vec![vec!["1".into()], vec!["2".into()]],
        );
        assert_eq!(Record::from_table(&table), Err(RecordError::Ambiguous(2)));
    }

    #[test]
    fn test_single_row_succeeds() {
        let record = record_of(&[("Tot_P_P", 100.0)]);
        assert_eq!(record.value("Tot_P_P"), Ok(100.0));
    }

    #[test]
    fn test_missing_field() {
        let record = record_of(&[("Tot_P_P", 100.0)]);
        assert_eq!(
            record.value("Chinese_Tot_resp"),
            Err(AccessError::MissingField("Chinese_Tot_resp".into()))
        );
    }

    #[test]
    fn test_non_numeric_field() {
        let table = Table::new(
            vec!["POA_CODE_2021".into()],
            vec![vec!["POA2000".into()]],
        );
        let record = Record::from_table(&table).unwrap();
        assert!(matches!(
            record.value("POA_CODE_2021"),
            Err(AccessError::NonNumeric { .. })
        ));
        assert_eq!(record.raw("POA_CODE_2021"), Ok("POA2000"));
    }

    #[test]
    fn test_select_filters_rows() {
        let table = Table::new(
            vec!["POA_CODE_2021".into(), "Tot_P_P".into()],
            vec![
                vec!["POA2000".into(), "100".into()],
                vec!["POA2010".into(), "50".into()],
            ],
        );

        let selected = table.select("POA_CODE_2021", "POA2000");
        assert_eq!(selected.row_count(), 1);
        let record = Record::from_table(&selected).unwrap();
        assert_eq!(record.value("Tot_P_P"), Ok(100.0));

        let none = table.select("POA_CODE_2021", "POA9999");
        assert_eq!(none.row_count(), 0);
    }

    #[test]
    fn test_select_on_missing_key_column_is_empty() {
        let table = table_of(&[("Tot_P_P", 100.0)]);
        assert_eq!(table.select("POA_CODE_2021", "POA2000").row_count(), 0);
    }

    #[test]
    fn test_missing_columns() {
        let table = table_of(&[("Tot_P_P", 1.0), ("Tot_P_M", 1.0)]);
        assert_eq!(
            table.missing_columns(&["Tot_P_P", "Tot_P_F"]),
            vec!["Tot_P_F"]
        );
    }
}
