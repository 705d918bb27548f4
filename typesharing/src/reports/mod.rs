//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;

pub use check::{CheckReport, ObjectSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenFile};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};

/// Pluralize a count: `1 field`, `2 fields`.
pub(crate) fn count(n: usize, noun: &str) -> String {
    format!("{} {}{}", n, noun, if n == 1 { "" } else { "s" })
}
