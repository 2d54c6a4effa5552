use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::path::Path;

use crate::file_utils::FileManager;
use crate::subtitle_processor;

// @module: Application controller for subtitle sorting

/// Main application controller for subtitle sorting.
///
/// The only component that touches the filesystem: it reads the input file,
/// hands the raw text to the core pipeline and writes the result. Nothing is
/// written when the pipeline fails.
pub struct Controller;

impl Controller {
    /// Create a new controller
    pub fn new() -> Self {
        Controller
    }

    /// Run the main workflow with input and output subtitle file paths
    pub fn run<P: AsRef<Path>>(&self, input_file: P, output_file: P) -> Result<()> {
        let input_file = input_file.as_ref();
        let output_file = output_file.as_ref();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        debug!("Sorting subtitles from {:?}", input_file);

        let content = FileManager::read_to_string(input_file)?;

        let sorted = subtitle_processor::sort_srt_content(&content)
            .with_context(|| format!("Failed to parse SRT file: {:?}", input_file))?;

        FileManager::write_to_file(output_file, &sorted)?;

        info!("Sorted subtitles saved to {}", output_file.display());

        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
