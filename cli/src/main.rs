//! sheetgrid CLI - spreadsheet reading tool
//!
//! A command-line tool for printing and converting the rows of CSV and XLSX files.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use sheetgrid::render::JsonFormat;
use sheetgrid::{CsvOptions, FormatType};

/// Read CSV and XLSX spreadsheets as plain rows
#[derive(Parser)]
#[command(
    name = "sheetgrid",
    author = "iyulab",
    version,
    about = "Read rows from CSV and XLSX files",
    long_about = "sheetgrid - read spreadsheet rows as plain strings.\n\n\
                  Reads CSV files and the first worksheet of XLSX workbooks,\n\
                  and prints them as text, CSV, or JSON."
)]
struct Cli {
    /// Log read progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print rows as tab-separated text
    Show {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert rows to JSON
    Json {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Convert rows to CSV
    Csv {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter for the output
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Show table dimensions
    Info {
        /// Input file path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

/// Writes log records to stderr.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let level = record.level().as_str();
        let level = match record.level() {
            log::Level::Error => level.red().bold(),
            log::Level::Warn => level.yellow().bold(),
            _ => level.dimmed(),
        };
        eprintln!("{}: {}", level, record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let cli = Cli::parse();

    if cli.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Debug);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { input, output } => {
            let pb = create_spinner("Reading spreadsheet...");
            let table = sheetgrid::read_file(&input)?;
            pb.finish_and_clear();

            let text = sheetgrid::render::to_text(&table);
            write_output(output.as_ref(), text.trim_end_matches('\n'))?;
            report_written(output.as_ref(), "text");
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Reading spreadsheet...");
            let table = sheetgrid::read_file(&input)?;
            pb.set_message("Rendering to JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = sheetgrid::render::to_json(&table, format)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;
            report_written(output.as_ref(), "JSON");
        }

        Commands::Csv {
            input,
            output,
            delimiter,
        } => {
            let delimiter = u8::try_from(delimiter)
                .map_err(|_| format!("delimiter must be a single-byte character: {delimiter:?}"))?;

            let pb = create_spinner("Reading spreadsheet...");
            let table = sheetgrid::read_file(&input)?;
            pb.set_message("Rendering to CSV...");

            let options = CsvOptions::new().with_delimiter(delimiter);
            let csv = sheetgrid::render::to_csv(&table, &options)?;

            pb.finish_and_clear();
            write_output(output.as_ref(), csv.trim_end_matches('\n'))?;
            report_written(output.as_ref(), "CSV");
        }

        Commands::Info { input } => {
            let pb = create_spinner("Analyzing spreadsheet...");

            let format = FormatType::from_path(&input)?;
            let table = sheetgrid::read_file(&input)?;

            pb.finish_and_clear();

            println!("{}", "Spreadsheet Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Format".bold(), format);
            println!("{}: {}", "Rows".bold(), table.row_count());
            println!("{}: {}", "Widest row".bold(), table.max_width());
            println!("{}: {}", "Cells".bold(), table.cell_count());
            if format == FormatType::Xlsx {
                println!(
                    "{}: {}",
                    "Note".bold(),
                    "only the first worksheet is read".dimmed()
                );
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "sheetgrid".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Read CSV and XLSX spreadsheets into plain rows of strings");
    println!();
    println!("Supported formats: CSV, XLSX (first worksheet)");
    println!("Repository: https://github.com/iyulab/sheetgrid");
}

fn report_written(output: Option<&PathBuf>, kind: &str) {
    if let Some(path) = output {
        println!(
            "{} Converted to {}: {}",
            "✓".green().bold(),
            kind,
            path.display()
        );
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}
