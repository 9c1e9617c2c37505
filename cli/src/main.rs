//! wordscope CLI - document structure and statistics analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use wordscope::analysis::{compute_statistics, ProcessingLog};
use wordscope::render::{self, chapters_text, summary_text};
use wordscope::source::validate_file;
use wordscope::{
    AnalysisOptions, Analyzer, JsonFormat, LoadOptions, Pipeline, RenderOptions, Report,
    SourceRegistry,
};

type CliResult = Result<(), Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "wordscope")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Analyze document structure, chapters and statistics", long_about = None)]
struct Cli {
    /// Input document
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis, save it as JSON and print the results
    Analyze {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory for the JSON report
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the analysis summary
    Summary {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print the chapter-by-chapter analysis
    Chapters {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Write the analysis report as JSON
    Json {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Write the analysis report as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,
    },

    /// Write the analysis report as plain text
    Text {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show file information, metadata and basic statistics
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            output,
            compact,
        }) => cmd_analyze(&input, output.as_deref(), compact),
        Some(Commands::Summary { input }) => cmd_summary(&input),
        Some(Commands::Chapters { input }) => cmd_chapters(&input),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
        }) => cmd_markdown(&input, output.as_deref(), frontmatter),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            if let Some(input) = cli.input {
                cmd_analyze(&input, cli.output.as_deref(), false)
            } else {
                println!("{}", "Usage: wordscope <FILE> [OUTPUT]".yellow());
                println!("       wordscope --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Analyze a file, folding load errors into a failed report.
fn analyze(input: &Path) -> Report {
    Analyzer::default().analyze_path(input)
}

/// Print a failed report's errors and turn it into a process error.
fn ensure_success(report: &Report) -> CliResult {
    if report.is_success() {
        return Ok(());
    }
    eprintln!("{}", "Analysis failed!".red().bold());
    for error in &report.errors {
        eprintln!("   {} {}", format!("{}:", error.kind).red(), error.message);
    }
    Err(format!("could not analyze '{}'", report.metadata.file_path).into())
}

fn write_or_print(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_analyze(input: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("outputs"));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let load_options = LoadOptions::default();
    let registry = SourceRegistry::with_defaults();
    let mut log = ProcessingLog::new();
    let display = input.display().to_string();

    pb.set_message("Validating file...");
    log.record(format!("Loading document: {}", display));
    let loaded = validate_file(input, &load_options).and_then(|info| {
        log.record("File information extracted");
        pb.inc(1);
        pb.set_message("Loading document...");
        let document = registry.load_validated(input, &info.extension, &load_options)?;
        log.record("Document loaded successfully");
        Ok((info, document))
    });
    pb.inc(1);

    let report = match loaded {
        Ok((info, document)) => {
            pb.set_message("Analyzing structure...");
            let report = Pipeline::new(AnalysisOptions::default()).run(
                &document,
                Some(info),
                &display,
                &mut log,
            );
            pb.inc(1);
            report
        }
        Err(e) => {
            let mut report = Report::failed(&display, &e);
            report.processing_log = log.into_entries();
            pb.inc(1);
            report
        }
    };

    pb.set_message("Saving report...");
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = format!(
        "analysis_{}_{}.json",
        stem,
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let saved = output_dir.join(file_name);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    fs::write(&saved, render::to_json(&report, format)?)?;
    log::debug!("Wrote {} ({} log entries)", saved.display(), report.processing_log.len());
    pb.inc(1);
    pb.finish_with_message("Done!");

    println!("\n{} {}", "Analysis saved to".green().bold(), saved.display());
    ensure_success(&report)?;

    println!("\n{}", summary_text(&report));
    println!("{}", chapters_text(&report, &RenderOptions::default()));
    Ok(())
}

fn cmd_summary(input: &Path) -> CliResult {
    let report = analyze(input);
    ensure_success(&report)?;
    println!("{}", summary_text(&report));
    Ok(())
}

fn cmd_chapters(input: &Path) -> CliResult {
    let report = analyze(input);
    ensure_success(&report)?;
    println!("{}", chapters_text(&report, &RenderOptions::default()));
    Ok(())
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let report = analyze(input);
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    write_or_print(output, &render::to_json(&report, format)?)?;
    ensure_success(&report)
}

fn cmd_markdown(input: &Path, output: Option<&Path>, frontmatter: bool) -> CliResult {
    let report = analyze(input);
    let options = RenderOptions::new().with_frontmatter(frontmatter);
    write_or_print(output, &render::to_markdown(&report, &options)?)?;
    ensure_success(&report)
}

fn cmd_text(input: &Path, output: Option<&Path>) -> CliResult {
    let report = analyze(input);
    write_or_print(output, &render::to_text(&report, &RenderOptions::default())?)?;
    ensure_success(&report)
}

fn cmd_info(input: &Path) -> CliResult {
    let load_options = LoadOptions::default();
    let info = validate_file(input, &load_options)?;
    let doc = SourceRegistry::with_defaults().load_validated(input, &info.extension, &load_options)?;

    println!("{}", "File Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), info.path);
    println!("{}: {}", "Name".bold(), info.name);
    println!("{}: {}", "Format".bold(), info.extension);
    println!("{}: {}", "Size".bold(), info.size_formatted);
    println!("{}: {}", "MD5".bold(), info.hash);

    println!();
    println!("{}", "Document Metadata".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let metadata = &doc.metadata;
    println!("{}: {}", "Title".bold(), metadata.title().unwrap_or("Untitled"));
    println!("{}: {}", "Author".bold(), metadata.author().unwrap_or("Unknown"));
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref keywords) = metadata.keywords {
        println!("{}: {}", "Keywords".bold(), keywords);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let stats = compute_statistics(&doc, &AnalysisOptions::default());
    println!("{}: {}", "Paragraphs".bold(), stats.total_paragraphs);
    println!("{}: {}", "Headings".bold(), stats.total_headings);
    println!("{}: {}", "Tables".bold(), stats.total_tables);
    println!("{}: {}", "Words".bold(), render::format_number(stats.total_words));
    println!("{}: {}", "Characters".bold(), render::format_number(stats.total_characters));
    println!("{}: {}", "Pages".bold(), stats.total_pages);
    println!("{}: {:.1} minutes", "Reading Time".bold(), stats.reading_time_minutes);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "wordscope".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document structure and statistics analysis tool");
    println!();
    println!("Library version: {}", wordscope::analysis::ANALYSIS_VERSION);
    println!("License: MIT");
}
