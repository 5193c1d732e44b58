//! Command implementations

pub mod import;
pub mod show;
pub mod simple;

pub use import::{ImportReport, import_paths};
pub use show::{ListSummary, export_list, summarize};
pub use simple::run_simple;
