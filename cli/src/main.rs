use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;

mod config;
mod error;
mod input;
mod logging;
mod output;
mod report;

use config::{CliConfig, OutputFormat, SplitMode};
use error::{CliError, Result};
use report::build_reports;

#[derive(Debug, Parser)]
#[command(name = "argtok", version)]
#[command(about = "Classify raw command-line tokens")]
struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify tokens given on the command line (put them after `--`).
    Classify(ClassifyArgs),
    /// Classify tokens read from stdin.
    ClassifyStdin(ClassifyStdinArgs),
    /// Classify tokens read from a file.
    ClassifyFile(ClassifyFileArgs),
    /// Write a default config file.
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct ClassifyArgs {
    /// Output format (default: from config, else json).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// Raw tokens to classify.
    #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ClassifyStdinArgs {
    /// Output format (default: from config, else json).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// How input is cut into tokens (default: from config, else whitespace).
    #[arg(long)]
    split: Option<SplitMode>,
}

#[derive(Debug, Args)]
struct ClassifyFileArgs {
    /// Path to file containing raw tokens.
    #[arg(long)]
    input: PathBuf,
    /// Output format (default: from config, else json).
    #[arg(long)]
    format: Option<OutputFormat>,
    /// How input is cut into tokens (default: from config, else whitespace).
    #[arg(long)]
    split: Option<SplitMode>,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Destination path for the YAML config.
    #[arg(long)]
    output: PathBuf,
    /// Overwrite an existing file.
    #[arg(long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    logging::init_tracing(cli.verbose, config.level_filter());
    debug!(path = ?cli.config, ?config, "Loaded config");

    match cli.command {
        Command::Classify(args) => {
            let format = args.format.unwrap_or(config.format);
            emit(&args.tokens, format)
        }
        Command::ClassifyStdin(args) => {
            let tokens = input::read_stdin(args.split.unwrap_or(config.split))?;
            emit(&tokens, args.format.unwrap_or(config.format))
        }
        Command::ClassifyFile(args) => {
            let tokens = input::read_file(&args.input, args.split.unwrap_or(config.split))?;
            emit(&tokens, args.format.unwrap_or(config.format))
        }
        Command::InitConfig(args) => run_init_config(args),
    }
}

fn emit(tokens: &[String], format: OutputFormat) -> Result<()> {
    let reports = build_reports(tokens);
    let rendered = output::format_reports(&reports, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(CliError::AlreadyExists(args.output));
    }
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    CliConfig::default().save(&args.output)?;
    println!("Wrote default config to '{}'.", args.output.display());
    Ok(())
}
