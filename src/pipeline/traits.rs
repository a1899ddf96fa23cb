//! Stage trait for the preprocessing pipeline.
//!
//! Every stage is a pure string → string transformation. Stages own whatever
//! they need (compiled patterns, a tokenizer, a handle to the shared lexical
//! resources) and never see each other's state.

/// One text transformation in the pipeline.
///
/// # Contract
///
/// - **Input**: a borrowed string; never `None` (null short-circuits at the
///   pipeline entry, see [`TextStage::apply_opt`] for standalone use).
/// - **Output**: a new owned string.
/// - **Pure**: same input → same output, no interior mutation, safe to call
///   concurrently from many threads.
pub trait TextStage: Send + Sync {
    /// Stable stage name, used in logs
    fn name(&self) -> &'static str;

    /// Transform the text
    fn apply(&self, text: &str) -> String;

    /// Null-propagating variant: `None` in, `None` out
    fn apply_opt(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.apply(t))
    }
}
