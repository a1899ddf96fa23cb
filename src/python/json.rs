//! JSON interface for batch processing
//!
//! Whole tweet dumps cross the Python↔Rust boundary as one string, are
//! processed in parallel on the Rust side, and come back as one JSON string.

use crate::nlp::entities::TweetEntities;
use crate::nlp::tokenizer::TweetTokenizer;
use crate::pipeline::{BatchProcessor, BatchReport, TweetPreprocessor};
use crate::python::native::to_py_err;
use crate::resources::LexicalResources;
use crate::table::TweetTable;
use crate::types::PreprocessConfig;
use pyo3::prelude::*;
use serde::Serialize;

/// One row of a JSON batch result
#[derive(Debug, Clone, Serialize)]
pub struct JsonRowResult {
    pub row: usize,
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a JSON batch
#[derive(Debug, Clone, Serialize)]
pub struct JsonBatchResult {
    pub rows: Vec<JsonRowResult>,
    pub failed: usize,
}

impl From<BatchReport> for JsonBatchResult {
    fn from(report: BatchReport) -> Self {
        let failed = report.failure_count();
        let rows = report
            .rows
            .into_iter()
            .enumerate()
            .map(|(row, outcome)| match outcome {
                Ok(text) => JsonRowResult {
                    row,
                    text,
                    error: None,
                },
                Err(err) => JsonRowResult {
                    row,
                    text: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        Self { rows, failed }
    }
}

fn load_config(config_json: Option<&str>) -> PyResult<PreprocessConfig> {
    config_json
        .map(PreprocessConfig::from_json_str)
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(to_py_err)
}

/// Preprocess one column of a JSON-lines tweet dump
///
/// Returns `{"rows": [{"row": 0, "text": "..."}, ...], "failed": 0}`.
/// Rows that cannot be read carry an `error` instead of failing the batch,
/// unless the config sets `batch.fail_fast`.
#[pyfunction]
#[pyo3(signature = (jsonl, column = "full_text", config_json = None))]
pub fn preprocess_jsonl(
    py: Python<'_>,
    jsonl: &str,
    column: &str,
    config_json: Option<&str>,
) -> PyResult<String> {
    let config = load_config(config_json)?;
    let resources = LexicalResources::load(&config).map_err(to_py_err)?;
    let processor = BatchProcessor::new(TweetPreprocessor::new(resources.shared()), config.batch);

    let result: JsonBatchResult = py
        .allow_threads(|| {
            let table = TweetTable::from_json_lines(jsonl.as_bytes())?;
            processor.process_column(&table, column)
        })
        .map_err(to_py_err)?
        .into();

    serde_json::to_string(&result).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Serialization error: {}", e))
    })
}

/// Collect unique hashtags, mentions and URLs from a JSON-lines tweet dump
#[pyfunction]
#[pyo3(signature = (jsonl, column = "full_text"))]
pub fn extract_entities_jsonl(jsonl: &str, column: &str) -> PyResult<String> {
    let table = TweetTable::from_json_lines(jsonl.as_bytes()).map_err(to_py_err)?;
    let entities =
        TweetEntities::from_table(&table, column, &TweetTokenizer::new()).map_err(to_py_err)?;

    serde_json::to_string(&entities).map_err(|e| {
        pyo3::exceptions::PyRuntimeError::new_err(format!("Serialization error: {}", e))
    })
}
