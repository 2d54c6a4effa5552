/*!
 * Error types for the srtsort application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while parsing SRT content.
///
/// Any of these aborts the whole parse; no partial entry list is ever returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A line expected to hold an entry's sequence number was not a valid integer
    #[error("invalid subtitle index at line {line}: {content:?}")]
    InvalidIndex {
        /// 1-based line number in the source text
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// A time-range line did not contain the `-->` separator
    #[error("time range at line {line} is missing the '-->' separator: {content:?}")]
    MissingSeparator {
        /// 1-based line number in the source text
        line: usize,
        /// The offending line, trimmed
        content: String,
    },

    /// A timestamp did not match the `HH:MM:SS,mmm` pattern
    #[error("invalid timestamp {text:?}: expected HH:MM:SS,mmm")]
    InvalidTimestamp {
        /// The offending timestamp text, trimmed
        text: String,
    },

    /// The input ended while an entry was still waiting for its time-range line
    #[error("subtitle entry {seq_num} is missing its time range")]
    MissingTimeRange {
        /// Sequence number of the incomplete entry
        seq_num: usize,
    },
}
