use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::FormatError;

// @module: SRT parsing, sorting and serialization

// @const: SRT timestamp pattern (hours may exceed two digits)
static TIMESTAMP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d+):(\d+),(\d+)$").unwrap()
});

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    // @field: Sequence number as it appeared in the source; discarded on output
    pub seq_num: usize,

    // @field: Start time in ms, the sort key
    pub start_time_ms: u64,

    // @field: End time in ms; not validated against start_time_ms
    pub end_time_ms: u64,

    // @field: Subtitle text, verbatim including line terminators
    pub text: String,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        SubtitleEntry {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Parse an SRT timestamp (HH:MM:SS,mmm) to milliseconds.
    ///
    /// Hours may be wider than two digits; minutes, seconds and milliseconds
    /// are not range-checked. Surrounding whitespace is ignored.
    pub fn parse_timestamp(timestamp: &str) -> Result<u64, FormatError> {
        let trimmed = timestamp.trim();
        let caps = TIMESTAMP_REGEX.captures(trimmed).ok_or_else(|| FormatError::InvalidTimestamp {
            text: trimmed.to_string(),
        })?;

        let field = |idx: usize| -> Result<u64, FormatError> {
            caps.get(idx)
                .map(|m| m.as_str())
                .and_then(|s| s.parse::<u64>().ok())
                .ok_or_else(|| FormatError::InvalidTimestamp {
                    text: trimmed.to_string(),
                })
        };

        let hours = field(1)?;
        let minutes = field(2)?;
        let seconds = field(3)?;
        let millis = field(4)?;

        hours
            .checked_mul(3_600_000)
            .and_then(|ms| ms.checked_add(minutes.checked_mul(60_000)?))
            .and_then(|ms| ms.checked_add(seconds.checked_mul(1_000)?))
            .and_then(|ms| ms.checked_add(millis))
            .ok_or_else(|| FormatError::InvalidTimestamp {
                text: trimmed.to_string(),
            })
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm).
    ///
    /// Hours widen past two digits when the value demands it; re-parsing the
    /// result always yields the input value.
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

// @enum: Per-entry parser state
enum ParserState {
    /// Between entries; blank lines are skipped, the next line is an index
    AwaitingIndex,
    /// Index seen, the next line must be the time range
    AwaitingTimeRange { seq_num: usize },
    /// Index and times seen, collecting text lines until a blank separator
    AccumulatingText {
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        text: String,
    },
}

/// Collection of subtitle entries
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubtitleCollection {
    /// List of subtitle entries
    pub entries: Vec<SubtitleEntry>,
}

impl SubtitleCollection {
    /// Parse SRT format string into a subtitle collection.
    ///
    /// Entries are produced in file order. Any malformed record aborts the
    /// whole parse; there are no partial results.
    pub fn parse_srt_string(content: &str) -> Result<Self, FormatError> {
        let mut entries = Vec::new();
        let mut state = ParserState::AwaitingIndex;

        for (idx, line) in content.split_inclusive('\n').enumerate() {
            let line_number = idx + 1;
            let blank = line.trim_end().is_empty();

            state = match state {
                ParserState::AwaitingIndex => {
                    if blank {
                        ParserState::AwaitingIndex
                    } else {
                        let trimmed = line.trim();
                        let seq_num = trimmed.parse::<usize>().map_err(|_| {
                            FormatError::InvalidIndex {
                                line: line_number,
                                content: trimmed.to_string(),
                            }
                        })?;
                        ParserState::AwaitingTimeRange { seq_num }
                    }
                }
                ParserState::AwaitingTimeRange { seq_num } => {
                    let trimmed = line.trim_end();
                    let (start, end) = trimmed.split_once("-->").ok_or_else(|| {
                        FormatError::MissingSeparator {
                            line: line_number,
                            content: trimmed.to_string(),
                        }
                    })?;

                    ParserState::AccumulatingText {
                        seq_num,
                        start_time_ms: SubtitleEntry::parse_timestamp(start)?,
                        end_time_ms: SubtitleEntry::parse_timestamp(end)?,
                        text: String::new(),
                    }
                }
                ParserState::AccumulatingText {
                    seq_num,
                    start_time_ms,
                    end_time_ms,
                    mut text,
                } => {
                    if blank {
                        entries.push(SubtitleEntry::new(seq_num, start_time_ms, end_time_ms, text));
                        ParserState::AwaitingIndex
                    } else {
                        // Keep the line terminator so the text round-trips verbatim
                        text.push_str(line);
                        ParserState::AccumulatingText {
                            seq_num,
                            start_time_ms,
                            end_time_ms,
                            text,
                        }
                    }
                }
            };
        }

        // Close the final entry when the input ends without a blank separator
        match state {
            ParserState::AwaitingIndex => {}
            ParserState::AwaitingTimeRange { seq_num } => {
                return Err(FormatError::MissingTimeRange { seq_num });
            }
            ParserState::AccumulatingText {
                seq_num,
                start_time_ms,
                end_time_ms,
                text,
            } => {
                entries.push(SubtitleEntry::new(seq_num, start_time_ms, end_time_ms, text));
            }
        }

        debug!("Parsed {} subtitle entries", entries.len());

        Ok(SubtitleCollection { entries })
    }

    /// Sort entries by start time.
    ///
    /// The sort is stable: entries that start simultaneously keep their
    /// relative order from the source file.
    pub fn sort_by_start_time(&mut self) {
        self.entries.sort_by_key(|entry| entry.start_time_ms);
    }

    /// Render the collection back to SRT text.
    ///
    /// Entries are renumbered densely from 0 in their current order; the
    /// source sequence numbers are discarded. Text is emitted verbatim and no
    /// blank line follows the last block.
    pub fn to_srt_string(&self) -> String {
        let mut output = String::new();

        for (i, entry) in self.entries.iter().enumerate() {
            output.push_str(&format!(
                "{}\n{} --> {}\n",
                i,
                entry.format_start_time(),
                entry.format_end_time()
            ));
            output.push_str(&entry.text);

            if i + 1 < self.entries.len() {
                output.push('\n');
            }
        }

        output
    }
}

/// Run the whole pipeline over raw SRT text: parse, sort by start time,
/// renumber and serialize. This is the single operation the command-line
/// layer consumes.
pub fn sort_srt_content(content: &str) -> Result<String, FormatError> {
    let mut collection = SubtitleCollection::parse_srt_string(content)?;
    collection.sort_by_start_time();
    Ok(collection.to_srt_string())
}
