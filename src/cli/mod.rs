//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{parse_delimiter, ConversionConfig, ConversionOptions, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "csvconv")]
#[command(about = "Convert CSV documents to JSON records")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV file or directory
    #[arg()]
    pub input: Option<String>,

    /// Output file path, or directory for directory input (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Read CSV from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Recursively process directories
    #[arg(long)]
    pub recursive: bool,

    /// Field delimiter: a single character, or comma, tab, semicolon, pipe (default: comma)
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Treat the first line as data and name keys column_1, column_2, ...
    #[arg(long)]
    pub no_header: bool,

    /// Keep whitespace-only lines as data lines
    #[arg(long)]
    pub keep_empty_lines: bool,

    /// Spaces per indentation level (0-8, default: 2)
    #[arg(long)]
    pub indent: Option<u8>,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub plain: bool,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub memory_limit: Option<String>,

    /// Only inspect the CSV and report irregular rows, don't convert
    #[arg(long)]
    pub validate_only: bool,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;

        Ok(Self {
            args,
            conversion_config,
        })
    }

    /// Check if we should continue on error
    pub fn continue_on_error(&self) -> bool {
        self.args.continue_on_error
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let delimiter = match args.delimiter.as_deref() {
            Some(d) => parse_delimiter(d)
                .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?,
            None => ',',
        };
        let memory_limit = parse_memory_limit(&args.memory_limit)?;

        let config = ConversionConfig {
            options: ConversionOptions {
                delimiter,
                has_header: !args.no_header,
                skip_empty_lines: !args.keep_empty_lines,
            },
            indent_size: args.indent.unwrap_or(2),
            pretty: !args.plain,
            memory_limit,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Check if only validation is requested
    pub fn is_validate_only(&self) -> bool {
        self.args.validate_only
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        if self.args.stdin {
            "standard input".to_string()
        } else if let Some(input) = &self.args.input {
            format!("'{}'", input)
        } else {
            "no input specified".to_string()
        }
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        if let Some(output) = &self.args.output {
            format!("'{}'", output.display())
        } else {
            "standard output".to_string()
        }
    }
}

/// Parse memory limit string (e.g., "100MB", "1GB", "500KB")
pub fn parse_memory_limit(limit: &Option<String>) -> ConversionResult<usize> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ConversionError::conversion(ConversionErrorKind::Configuration {
            message: format!("Invalid memory limit: {}", limit_str),
        })
    };

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<usize>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<usize>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as usize)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for file processing
    pub fn create_progress_bar(total: u64, quiet: bool) -> indicatif::ProgressBar {
        if quiet {
            return indicatif::ProgressBar::hidden();
        }

        let pb = indicatif::ProgressBar::new(total);
        if let Ok(progress_style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(progress_style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Check if output should be colored
    pub fn should_use_color() -> bool {
        // Check if stdout is a terminal and supports color
        atty::is(atty::Stream::Stdout) && std::env::var("NO_COLOR").is_err()
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error.kind() {
        ConversionErrorKind::EmptyDocument => {
            eprintln!("\nTip: The file contains only blank lines; check the input path");
        }
        ConversionErrorKind::InputTooLarge { .. } => {
            eprintln!("\nTip: Use --memory-limit to increase the input size allowance");
        }
        ConversionErrorKind::Configuration { .. } => {
            eprintln!("\nTip: --delimiter takes one character or comma, tab, semicolon, pipe");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'csvconv --help' for usage information.");
}
