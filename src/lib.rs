/*!
 * # srtsort
 *
 * A Rust library for sorting SubRip (SRT) subtitle files by start time.
 *
 * ## Features
 *
 * - Parse SRT subtitle files into structured entries
 * - Stable sort of entries by start time (simultaneous cues keep their order)
 * - Dense renumbering of entries in sorted order
 * - Serialization back to SRT with subtitle text preserved verbatim
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: SRT parsing, time codec, sorting and serialization
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod subtitle_processor;

// Re-export main types for easier usage
pub use errors::FormatError;
pub use subtitle_processor::{SubtitleCollection, SubtitleEntry, sort_srt_content};
