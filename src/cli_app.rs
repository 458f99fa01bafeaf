//! Top-level CLI definition and dispatch.
//!
//! The CLI is a thin collaborator: it assembles a [`CensusConfig`] from
//! config file, environment and flags, hands it to the pipeline, and maps
//! the result onto console output and the process exit code.

use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};

use pdf_census::core::config::{CensusConfig, parse_cutoff};
use pdf_census::core::errors::Result;
use pdf_census::core::paths::display_absolute;
use pdf_census::scanner::run_census;

/// Census of user-generated PDF documents in a publishing content tree.
#[derive(Debug, Parser)]
#[command(
    name = "pdfcensus",
    author,
    version,
    about = "Census of user-generated PDFs in a publishing content tree",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Quiet mode (errors only).
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Find user-generated PDFs and write the CSV report.
    Pdfs(PdfsArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args, Default)]
struct PdfsArgs {
    /// Content repository root (the directory containing master/).
    #[arg(short, long, value_name = "PATH")]
    root: Option<PathBuf>,
    /// Public host used when constructing artifact URLs.
    #[arg(short = 'd', long, value_name = "URL")]
    host: Option<String>,
    /// Report file name; relative paths land next to the content root.
    #[arg(short = 'f', long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Cutoff instant (RFC 3339); rows dated strictly before it are dropped.
    #[arg(long, value_name = "TIMESTAMP")]
    cutoff: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// Dispatch the parsed CLI, returning any pipeline error to `main`.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        control::set_override(false);
    }

    match &cli.command {
        Command::Pdfs(args) => run_pdfs(cli, args),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pdfcensus", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_pdfs(cli: &Cli, args: &PdfsArgs) -> Result<()> {
    let mut config = CensusConfig::load(cli.config.as_deref())?;
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if let Some(cutoff) = &args.cutoff {
        config.cutoff = parse_cutoff(cutoff)?;
    }

    info(
        cli.quiet,
        &format!(
            "searching for user generated PDFs under {}",
            display_absolute(&config.root).display()
        ),
    );

    let summary = run_census(&config)?;

    info(
        cli.quiet,
        &format!(
            "{} candidates seen, {} dropped before cutoff",
            summary.candidates_seen, summary.dropped_before_cutoff
        ),
    );
    info(
        cli.quiet,
        &format!(
            "wrote {} rows to {}",
            summary.rows_written,
            summary.output.display()
        ),
    );
    Ok(())
}

fn info(quiet: bool, msg: &str) {
    if quiet {
        return;
    }
    println!("{} {}", "[pdfcensus]".green().bold(), msg.cyan());
}
