//! Tweet records as a minimal table
//!
//! Tweets arrive as JSON objects, usually one per line. A column is any
//! top-level key, or a dotted path into nested objects (`user.location`).
//! Cells are read as optional text: `null` or a missing key is `None`,
//! anything that is not a string is a malformed row.

use crate::errors::{PreprocessError, Result};
use serde_json::{Map, Value};
use std::io::BufRead;

/// One row's cell: `Ok(None)` for null/missing, `Err` for non-text values
pub type Cell<'a> = Result<Option<&'a str>>;

/// Ordered collection of tweet records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TweetTable {
    records: Vec<Map<String, Value>>,
}

impl TweetTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from JSON values. Every value must be an object.
    pub fn from_records(records: Vec<Value>) -> Result<Self> {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(row, value)| match value {
                Value::Object(map) => Ok(map),
                other => Err(PreprocessError::malformed_input(
                    row,
                    format!("expected a JSON object, found {}", json_kind(&other)),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { records })
    }

    /// Parse a JSON array of objects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Parse JSON lines: one object per line, blank lines skipped
    pub fn from_json_lines<R: BufRead>(reader: R) -> Result<Self> {
        let mut records = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                PreprocessError::serialization(format!("line {}: {e}", line_no + 1))
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(&line).map_err(|e| {
                PreprocessError::serialization(format!("line {}: {e}", line_no + 1))
            })?;
            records.push(value);
        }
        log::debug!("Read {} tweet records from JSON lines", records.len());
        Self::from_records(records)
    }

    /// Build a single-column table from optional strings
    pub fn from_texts<I, S>(column: &str, texts: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let records = texts
            .into_iter()
            .map(|text| {
                let mut map = Map::new();
                let value = text.map_or(Value::Null, |t| Value::String(t.into()));
                map.insert(column.to_string(), value);
                map
            })
            .collect();
        Self { records }
    }

    /// Append a record
    pub fn push(&mut self, record: Map<String, Value>) {
        self.records.push(record);
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow the raw records
    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }

    /// Check if any row has the column (null values count as present)
    pub fn has_column(&self, column: &str) -> bool {
        self.records
            .iter()
            .any(|record| lookup(record, column).is_some())
    }

    /// Read a column as per-row text cells.
    ///
    /// A column that no row contains is `MissingColumn`, unless the table is
    /// empty, in which case the result is simply empty.
    pub fn column(&self, column: &str) -> Result<Vec<Cell<'_>>> {
        if !self.is_empty() && !self.has_column(column) {
            return Err(PreprocessError::missing_column(column));
        }

        Ok(self
            .records
            .iter()
            .enumerate()
            .map(|(row, record)| cell(row, lookup(record, column)))
            .collect())
    }
}

fn lookup<'a>(record: &'a Map<String, Value>, column: &str) -> Option<&'a Value> {
    if let Some(value) = record.get(column) {
        return Some(value);
    }
    let mut parts = column.split('.');
    let mut current = record.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

fn cell(row: usize, value: Option<&Value>) -> Cell<'_> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.as_str())),
        Some(other) => Err(PreprocessError::malformed_input(
            row,
            format!("expected a string, found {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_lines() {
        let data = r#"{"full_text": "first tweet", "lang": "en"}

{"full_text": null, "lang": "en"}
{"lang": "fr"}
"#;
        let table = TweetTable::from_json_lines(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 3);

        let cells = table.column("full_text").unwrap();
        assert_eq!(cells[0], Ok(Some("first tweet")));
        assert_eq!(cells[1], Ok(None));
        assert_eq!(cells[2], Ok(None));
    }

    #[test]
    fn test_bad_json_line_reports_line_number() {
        let data = "{\"full_text\": \"ok\"}\n{broken\n";
        let err = TweetTable::from_json_lines(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_non_object_record_is_malformed() {
        let err = TweetTable::from_records(vec![json!({"a": "x"}), json!(42)]).unwrap_err();
        assert_eq!(err.row(), Some(1));
    }

    #[test]
    fn test_non_string_cell_is_row_error() {
        let table = TweetTable::from_json_str(
            r#"[{"full_text": "ok"}, {"full_text": 12}, {"full_text": ["a"]}]"#,
        )
        .unwrap();
        let cells = table.column("full_text").unwrap();

        assert_eq!(cells[0], Ok(Some("ok")));
        assert_eq!(cells[1].as_ref().unwrap_err().row(), Some(1));
        assert_eq!(cells[2].as_ref().unwrap_err().row(), Some(2));
    }

    #[test]
    fn test_missing_column() {
        let table = TweetTable::from_texts("full_text", [Some("a")]);
        let err = table.column("text").unwrap_err();
        assert_eq!(err, PreprocessError::missing_column("text"));

        let empty = TweetTable::new();
        assert!(empty.column("anything").unwrap().is_empty());
    }

    #[test]
    fn test_dotted_path_lookup() {
        let table = TweetTable::from_records(vec![
            json!({"user": {"location": "Nairobi"}}),
            json!({"user": {"location": null}}),
            json!({"user": "not an object"}),
        ])
        .unwrap();

        let cells = table.column("user.location").unwrap();
        assert_eq!(cells[0], Ok(Some("Nairobi")));
        assert_eq!(cells[1], Ok(None));
        assert_eq!(cells[2], Ok(None));
    }

    #[test]
    fn test_from_texts() {
        let table = TweetTable::from_texts("text", vec![Some("a"), None, Some("b")]);
        assert_eq!(table.len(), 3);
        assert!(table.has_column("text"));
        assert_eq!(table.column("text").unwrap()[1], Ok(None));
    }
}
