pub mod classify;
pub mod code;
pub mod counter;
pub mod io;
pub mod levels;
pub mod process;
pub mod report;
pub mod resolve;
pub mod rewrite;
pub mod state;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::{IoError, LineEnding};
pub use levels::*;
pub use process::process_lines;
pub use report::render_report;
pub use state::HierarchyState;
pub use summary::{ProcessingResult, ProcessingSummary};
