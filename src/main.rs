// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use app_controller::Controller;

mod app_controller;
mod errors;
mod file_utils;
mod subtitle_processor;

/// CLI wrapper for log levels to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for srtsort
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// srtsort - SRT subtitle sorter
///
/// Reads an SRT subtitle file, reorders its entries chronologically by start
/// time, renumbers them and writes the result to a new SRT file.
#[derive(Parser, Debug)]
#[command(name = "srtsort")]
#[command(version = "1.0.0")]
#[command(about = "Sort SRT subtitle files by start time")]
#[command(long_about = "srtsort reads an SRT subtitle file, reorders its entries chronologically
by start time, renumbers them and writes the result to a new SRT file.

EXAMPLES:
    srtsort -i movie.srt -o movie.sorted.srt    # Sort a subtitle file
    srtsort -i in.srt -o out.srt -l debug       # Sort with debug logging
    srtsort completions bash > srtsort.bash     # Generate bash completions

Both --input and --output are required to run the pipeline; when either is
missing this help text is printed instead.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output subtitle file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Initialize the logger once, honoring the command-line level if given
    let log_level = cli
        .log_level
        .clone()
        .map_or(LevelFilter::Info, LevelFilter::from);
    CustomLogger::init(log_level)?;

    // Handle subcommands
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "srtsort", &mut std::io::stdout());
        return Ok(());
    }

    // Both paths are required to do any work; otherwise print usage and
    // exit without error
    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            CommandLineOptions::command().print_long_help()?;
            return Ok(());
        }
    };

    let controller = Controller::new();
    controller.run(&input, &output)
}
