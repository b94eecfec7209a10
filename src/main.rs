use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use cmdvet::report::render;
use cmdvet::{Command, CommandOptions, ErrorSource, OnError, RunError, RunVia};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

const EXIT_FAILED: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Parser)]
#[command(name = "cmdvet")]
#[command(about = "Run a command and classify the run by exit code and output", long_about = None)]
#[command(version)]
struct Cli {
    /// Command to run (bare name or path)
    command: String,

    /// Parameter segment, appended after the options
    #[arg(last = true)]
    parameter: Vec<String>,

    /// Option segment placed between the command and the parameter
    #[arg(long, allow_hyphen_values = true)]
    options: Option<String>,

    /// Parameter segment (alternative to trailing arguments after `--`)
    #[arg(long = "parameter", allow_hyphen_values = true, conflicts_with = "parameter")]
    parameter_flag: Option<String>,

    /// Load options from a TOML file; flags given here override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory to run the command in
    #[arg(short = 'C', long)]
    working_directory: Option<PathBuf>,

    /// Log file inspected by the log_file source
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Directory searched for a bare command name (repeatable)
    #[arg(long = "search-path")]
    search_paths: Vec<PathBuf>,

    /// Strip `.` and `..` segments from the command name
    #[arg(long)]
    secure_path: bool,

    /// Detection source: return_code, stderr, stdout or log_file (repeatable)
    #[arg(long = "detect-on")]
    detect_on: Vec<String>,

    /// Allowed return code (repeatable, replaces the default of 0)
    #[arg(long = "allowed-return-code", allow_hyphen_values = true)]
    allowed_return_codes: Vec<i32>,

    /// Forbidden return code (repeatable)
    #[arg(long = "forbidden-return-code", allow_hyphen_values = true)]
    forbidden_return_codes: Vec<i32>,

    #[arg(long = "forbidden-word-in-stdout")]
    forbidden_words_in_stdout: Vec<String>,

    #[arg(long = "allowed-word-in-stdout")]
    allowed_words_in_stdout: Vec<String>,

    #[arg(long = "forbidden-word-in-stderr")]
    forbidden_words_in_stderr: Vec<String>,

    #[arg(long = "allowed-word-in-stderr")]
    allowed_words_in_stderr: Vec<String>,

    #[arg(long = "forbidden-word-in-log-file")]
    forbidden_words_in_log_file: Vec<String>,

    #[arg(long = "allowed-word-in-log-file")]
    allowed_words_in_log_file: Vec<String>,

    /// What to do when the run fails: nothing, raise_error or throw_error
    #[arg(long)]
    on_error: Option<String>,

    /// How to launch the command: capture or shell
    #[arg(long)]
    run_via: Option<String>,

    /// Print the process result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn command_options(&self) -> Result<CommandOptions> {
        let mut options = match &self.config {
            Some(path) => CommandOptions::load(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => CommandOptions::default(),
        };

        if let Some(value) = &self.options {
            options.options = value.clone();
        }
        if let Some(value) = &self.parameter_flag {
            options.parameter = value.clone();
        } else if !self.parameter.is_empty() {
            options.parameter = shell_words::join(&self.parameter);
        }
        if let Some(dir) = &self.working_directory {
            options.working_directory = Some(dir.clone());
        }
        if let Some(path) = &self.log_file {
            options.log_file = Some(path.clone());
        }
        if !self.search_paths.is_empty() {
            options.search_paths = self.search_paths.clone();
        }
        options.secure_path |= self.secure_path;

        if !self.detect_on.is_empty() {
            let sources = self
                .detect_on
                .iter()
                .map(|tag| tag.parse::<ErrorSource>())
                .collect::<Result<Vec<_>, _>>()?;
            options.error_detection_on = sources.into_iter().collect();
        }

        let indicators = &mut options.error_indicators;
        if !self.allowed_return_codes.is_empty() {
            indicators.allowed_return_code = self.allowed_return_codes.clone();
        }
        indicators
            .forbidden_return_code
            .extend(&self.forbidden_return_codes);
        for (source, forbidden, allowed) in [
            (
                ErrorSource::Stdout,
                &self.forbidden_words_in_stdout,
                &self.allowed_words_in_stdout,
            ),
            (
                ErrorSource::Stderr,
                &self.forbidden_words_in_stderr,
                &self.allowed_words_in_stderr,
            ),
            (
                ErrorSource::LogFile,
                &self.forbidden_words_in_log_file,
                &self.allowed_words_in_log_file,
            ),
        ] {
            if let Some(list) = indicators.forbidden_words_mut(source) {
                list.extend(forbidden.iter().cloned());
            }
            if let Some(list) = indicators.allowed_words_mut(source) {
                list.extend(allowed.iter().cloned());
            }
        }

        if let Some(policy) = &self.on_error {
            options.on_error_do = OnError::from_tag(policy);
        }
        if let Some(via) = &self.run_via {
            options.run_via = RunVia::from_tag(via);
        }

        Ok(options)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match cli.command_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            process::exit(EXIT_CONFIG);
        }
    };

    let mut command = match Command::new(&cli.command, options) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(EXIT_CONFIG);
        }
    };

    let outcome = command.run().map(|result| result.success());
    if let Err(RunError::Spawn { .. }) = &outcome {
        return outcome
            .map(|_| ())
            .with_context(|| format!("Failed to run {command}"));
    }

    if let Some(result) = command.result() {
        if cli.json {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize result")?;
            println!("{json}");
        } else {
            print!("{}", render(&command, result));
        }
    }

    match outcome {
        Ok(true) => Ok(()),
        Ok(false) => process::exit(EXIT_FAILED),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            process::exit(EXIT_FAILED);
        }
    }
}
