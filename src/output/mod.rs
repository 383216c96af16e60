mod format;
mod json;
mod run_log;
mod table;

pub(crate) use json::output_summary_json;
pub(crate) use run_log::append_run_log;
pub(crate) use table::print_summary_table;
