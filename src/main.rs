use clap::Parser;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use csvconv::cli::path_mapping::{json_path_for, map_input_to_output};
use csvconv::cli::{handle_error, Args, CliConfig, CliUtils};
use csvconv::conversion::limits;
use csvconv::conversion::stats::{ConversionStatistics, PerformanceTracker};
use csvconv::parser::directory::find_csv_files;
use csvconv::validation::{CsvInspector, IssueSeverity};
use csvconv::{format_records, ConversionEngine, ConversionError, ConversionErrorKind, CsvSource};

fn main() {
    let args = Args::parse();

    init_tracing(&args);
    console::set_colors_enabled(CliUtils::should_use_color());

    if let Err(e) = run(args) {
        match e.downcast_ref::<ConversionError>() {
            Some(conversion_error) => handle_error(conversion_error),
            None => CliUtils::show_error(&format!("{:#}", e)),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Create conversion configuration
    let config = CliConfig::from_args(args)?;

    tracing::debug!(
        input = %config.input_description(),
        output = %config.output_description(),
        "starting"
    );

    // Handle different input sources
    if config.is_validate_only() {
        handle_validation(&config)
    } else {
        handle_conversion(&config)
    }
}

fn init_tracing(args: &Args) {
    let default_filter = if args.verbose {
        "csvconv=debug"
    } else if args.quiet {
        "csvconv=error"
    } else {
        "csvconv=warn"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve the CLI input into a source
fn resolve_source(config: &CliConfig) -> Result<CsvSource> {
    if config.args.stdin {
        return Ok(CsvSource::Stdin);
    }

    let Some(input) = &config.args.input else {
        return Err(anyhow::anyhow!(
            "No input provided. Use --stdin or provide an input path"
        ));
    };

    let path = PathBuf::from(input);
    if path.is_file() {
        Ok(CsvSource::File(path))
    } else if path.is_dir() {
        Ok(CsvSource::Directory(path))
    } else {
        Err(anyhow::anyhow!("Input path does not exist: {}", input))
    }
}

fn handle_validation(config: &CliConfig) -> Result<()> {
    let inspector = CsvInspector::new(config.conversion_config.options);

    match resolve_source(config)? {
        CsvSource::Directory(dir) => {
            let mut failed = 0;
            for csv_file in find_csv_files(&dir, config.args.recursive)? {
                let relative = csv_file.strip_prefix(&dir).unwrap_or(&csv_file);
                if !validate_one(&inspector, &CsvSource::File(csv_file.clone()), relative, config)? {
                    failed += 1;
                }
            }
            if failed > 0 {
                return Err(anyhow::anyhow!("{} CSV files failed validation", failed));
            }
            Ok(())
        }
        source => {
            let label = source.description();
            if validate_one(&inspector, &source, Path::new(&label), config)? {
                Ok(())
            } else {
                Err(anyhow::anyhow!("CSV validation failed"))
            }
        }
    }
}

/// Inspect one source and print its report; returns whether it is valid
fn validate_one(
    inspector: &CsvInspector,
    source: &CsvSource,
    label: &Path,
    config: &CliConfig,
) -> Result<bool> {
    limits::check_source_size_before_read(source, &config.conversion_config)?;
    let content = source.read_content()?;
    limits::check_content_size(&content, &config.conversion_config)?;
    let report = inspector.inspect(&content);

    for issue in &report.issues {
        let message = format!("{}: {}", label.display(), issue);
        match issue.severity {
            IssueSeverity::Error => CliUtils::show_error(&message),
            IssueSeverity::Warning => CliUtils::show_warning(&message, config.is_quiet()),
        }
    }

    if report.is_valid() {
        CliUtils::show_success(
            &format!(
                "{}: valid CSV ({} keys, {} lines, {} warnings)",
                label.display(),
                report.keys.len(),
                report.line_count,
                report.warning_count()
            ),
            config.is_quiet(),
        );
    }

    Ok(report.is_valid())
}

fn handle_conversion(config: &CliConfig) -> Result<()> {
    match resolve_source(config)? {
        CsvSource::Directory(dir) => convert_directory(&dir, config),
        source => convert_single(&source, config),
    }
}

/// Convert one file or stdin, writing to stdout or the output path
fn convert_single(source: &CsvSource, config: &CliConfig) -> Result<()> {
    let tracker = PerformanceTracker::start();
    let engine = ConversionEngine::new(config.conversion_config.clone());

    let data = engine.convert_from_source(source)?;
    let json = format_records(&data.records, &config.conversion_config)?;

    match &config.args.output {
        Some(output) => {
            // An existing directory receives <name>.json
            let output_path = match (output.is_dir(), source) {
                (true, CsvSource::File(path)) => json_path_for(&output.join(
                    path.file_name().unwrap_or_default(),
                )),
                (true, _) => output.join("output.json"),
                (false, _) => output.clone(),
            };

            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output_path, &json)?;

            CliUtils::show_success(
                &format!(
                    "Converted {} records to: {}",
                    data.len(),
                    output_path.display()
                ),
                config.is_quiet(),
            );
        }
        None => println!("{}", json),
    }

    if config.want_stats() {
        let stats = tracker.finish(data.metadata.input_size, json.len() as u64, data.len());
        output_statistics(&stats, config.is_quiet());
    }

    Ok(())
}

fn convert_directory(input_dir: &Path, config: &CliConfig) -> Result<()> {
    let output_dir = config
        .args
        .output
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Output directory required for directory conversion"))?;

    std::fs::create_dir_all(output_dir)?;

    let csv_files = find_csv_files(input_dir, config.args.recursive)
        .map_err(|e| anyhow::anyhow!("Failed finding CSV files: {}", e))?;

    if csv_files.is_empty() {
        CliUtils::show_success(
            &format!("No CSV files found in {}", input_dir.display()),
            config.is_quiet(),
        );
        return Ok(());
    }

    if !config.is_quiet() {
        println!("Found {} CSV files", csv_files.len());
    }

    let engine = ConversionEngine::new(config.conversion_config.clone());
    let progress = CliUtils::create_progress_bar(csv_files.len() as u64, config.is_quiet());
    let mut totals = ConversionStatistics::new();

    for csv_file in csv_files {
        let relative_path = csv_file.strip_prefix(input_dir).unwrap_or(&csv_file);
        let output_file = map_input_to_output(input_dir, &csv_file, output_dir);
        progress.set_message(relative_path.display().to_string());

        match convert_single_file(&engine, &csv_file, &output_file, config) {
            Ok(stats) => {
                totals.combine(&stats);
                progress.suspend(|| {
                    CliUtils::show_success(
                        &format!("{} -> {}", relative_path.display(), output_file.display()),
                        config.is_quiet(),
                    )
                });
            }
            Err(e) if config.continue_on_error() => {
                progress.suspend(|| {
                    CliUtils::show_error(&format!(
                        "Error converting {}: {}",
                        relative_path.display(),
                        e.user_message()
                    ))
                });
            }
            Err(e) => {
                progress.abandon();
                return Err(ConversionError::conversion_with_source(
                    ConversionErrorKind::ConversionFailed {
                        message: format!("Failed to convert {}", relative_path.display()),
                    },
                    e.into(),
                )
                .into());
            }
        }
        progress.inc(1);
    }

    progress.finish_and_clear();

    if config.want_stats() {
        output_statistics(&totals, config.is_quiet());
    }

    Ok(())
}

fn convert_single_file(
    engine: &ConversionEngine,
    input_path: &Path,
    output_path: &Path,
    config: &CliConfig,
) -> Result<ConversionStatistics, ConversionError> {
    let tracker = PerformanceTracker::start();

    let data = engine.convert_from_source(&CsvSource::File(input_path.to_path_buf()))?;
    let json = format_records(&data.records, &config.conversion_config)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, &json)?;

    tracing::info!(
        input = %input_path.display(),
        records = data.len(),
        "converted file"
    );

    Ok(tracker.finish(data.metadata.input_size, json.len() as u64, data.len()))
}

fn output_statistics(stats: &ConversionStatistics, quiet: bool) {
    if quiet {
        return;
    }

    eprintln!("\nConversion Statistics:");
    eprintln!(
        "Input size: {}",
        CliUtils::format_file_size(stats.input_size_bytes)
    );
    eprintln!(
        "Output size: {}",
        CliUtils::format_file_size(stats.output_size_bytes)
    );
    eprintln!("Records: {}", stats.record_count);
    eprintln!(
        "Processing time: {}",
        CliUtils::format_duration(std::time::Duration::from_millis(stats.processing_time_ms))
    );
    eprintln!("{}", stats.summary());
}
