use crate::core::RunSummary;

/// Serialize the run summary, per-project outcomes included
pub(crate) fn output_summary_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}
