//! Batch driver: the pipeline over every row of a tweet column.
//!
//! Rows are independent, so they fan out across a Rayon pool. Results always
//! come back in input order, one outcome per row. A row that cannot be read
//! as text is reported in place and the remaining rows still run, unless
//! [`BatchOptions::fail_fast`] asks for the first failure instead.

use crate::errors::{PreprocessError, Result};
use crate::pipeline::runner::TweetPreprocessor;
use crate::table::TweetTable;
use crate::types::BatchOptions;
use rayon::prelude::*;

/// Per-row outcomes of a batch run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchReport {
    pub rows: Vec<Result<Option<String>>>,
}

impl BatchReport {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the batch had no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Outputs of the rows that succeeded, keyed by row index
    pub fn processed(&self) -> impl Iterator<Item = (usize, Option<&str>)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(row, outcome)| outcome.as_ref().ok().map(|out| (row, out.as_deref())))
    }

    /// Errors of the rows that failed
    pub fn failures(&self) -> impl Iterator<Item = &PreprocessError> + '_ {
        self.rows.iter().filter_map(|outcome| outcome.as_ref().err())
    }

    /// Number of failed rows
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// All outputs, or the first row error
    pub fn into_strict(self) -> Result<Vec<Option<String>>> {
        self.rows.into_iter().collect()
    }
}

/// Runs a [`TweetPreprocessor`] across many rows
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    preprocessor: TweetPreprocessor,
    options: BatchOptions,
}

impl BatchProcessor {
    pub fn new(preprocessor: TweetPreprocessor, options: BatchOptions) -> Self {
        Self {
            preprocessor,
            options,
        }
    }

    /// The wrapped pipeline
    pub fn preprocessor(&self) -> &TweetPreprocessor {
        &self.preprocessor
    }

    /// The batch options in effect
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// Preprocess every row of `column`.
    ///
    /// Fails outright only when the column is absent from a non-empty table,
    /// a thread pool cannot be built, or `fail_fast` is set and a row fails.
    /// With `fail_fast`, remaining rows are abandoned as soon as a failure is
    /// seen; when several rows are bad, any one of their errors may be the
    /// one returned.
    pub fn process_column(&self, table: &TweetTable, column: &str) -> Result<BatchReport> {
        let cells = table.column(column)?;
        log::debug!("Preprocessing column '{}' over {} rows", column, cells.len());

        self.run(&cells, |cell| {
            cell.clone().map(|text| self.preprocessor.process(text))
        })
    }

    /// Preprocess a plain column of optional strings
    pub fn process_texts(&self, texts: &[Option<String>]) -> Result<BatchReport> {
        self.run(texts, |text| Ok(self.preprocessor.process(text.as_deref())))
    }

    fn run<T: Sync>(
        &self,
        rows: &[T],
        f: impl Fn(&T) -> Result<Option<String>> + Sync + Send,
    ) -> Result<BatchReport> {
        if self.options.fail_fast {
            // Rayon stops handing out rows once any row has failed
            let outputs = self
                .scoped(|| rows.par_iter().map(&f).collect::<Result<Vec<_>>>())?
                .map_err(|err| {
                    log::warn!("Batch aborted: {err}");
                    err
                })?;
            return Ok(self.finish(BatchReport {
                rows: outputs.into_iter().map(Ok).collect(),
            }));
        }

        let outcomes = self.scoped(|| rows.par_iter().map(&f).collect::<Vec<_>>())?;
        Ok(self.finish(BatchReport { rows: outcomes }))
    }

    fn finish(&self, report: BatchReport) -> BatchReport {
        for err in report.failures() {
            log::warn!("Row skipped: {err}");
        }
        log::info!(
            "Batch finished: {} rows, {} failed",
            report.len(),
            report.failure_count()
        );
        report
    }

    /// Execute `f` inside a pool sized by the options, or on the global pool
    /// when no limit is set
    fn scoped<R: Send>(&self, f: impl FnOnce() -> R + Send) -> Result<R> {
        match self.options.effective_threads() {
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| {
                        PreprocessError::internal(format!("failed to build thread pool: {e}"))
                    })?;
                Ok(pool.install(f))
            }
            None => Ok(f()),
        }
    }
}
