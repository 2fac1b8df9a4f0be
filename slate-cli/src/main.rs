//! Slate CLI - Command line interface
//!
//! Runs a compiled instruction stream (JSON) and prints its final value.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::LogConfig;
use crate::logging::LogFormat;
use crate::platform::print_error;
use slate_api::{execute, load_program, EngineConfig, LogLevel, LogTargets, RunConfig};

#[derive(Parser)]
#[command(
    name = "slate",
    about = "Slate execution core - run a compiled instruction stream",
    version
)]
struct Cli {
    /// Program file: a JSON instruction stream
    #[arg(value_name = "PROGRAM")]
    program: PathBuf,

    /// Source text the program was compiled from, shown around errors
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Print errors as JSON reports on stdout
    #[arg(long)]
    json: bool,

    /// Print the final variable bindings
    #[arg(long)]
    show_bindings: bool,

    /// Log a listing of the program before running it
    #[arg(long)]
    dump_program: bool,

    /// Operand stack limit
    #[arg(long, value_name = "N")]
    max_stack_size: Option<usize>,

    /// Nested subroutine call limit
    #[arg(long, value_name = "N")]
    max_call_depth: Option<usize>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Engine log level, overriding --log-level
    #[arg(long, value_name = "LEVEL")]
    engine_log_level: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let log_config = match build_log_config(&cli) {
        Ok(c) => c,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = logging::init_with_file(&log_config, cli.log_format, cli.log_file.as_deref()) {
        exit_with(&e);
    }

    let program_text = read_file(&cli.program).unwrap_or_else(|e| exit_with(&e));
    let source = match &cli.source {
        Some(path) => Some(read_file(path).unwrap_or_else(|e| exit_with(&e))),
        None => None,
    };

    let run_config = build_run_config(&cli);
    tracing::debug!(target: "slate::cli", program = %cli.program.display(), ?run_config, "running");

    let result = load_program(&program_text).and_then(|program| execute(&program, &run_config));
    match result {
        Ok(output) => {
            if let Some(value) = &output.value {
                println!("{value}");
            }
            if cli.show_bindings {
                for (name, value) in &output.bindings {
                    println!("{name} = {}", value.to_debugger_string());
                }
            }
        }
        Err(e) => {
            print_error(&e, source.as_deref(), cli.json);
            process::exit(1);
        }
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Cannot read '{}': {}", path.display(), e))
}

fn parse_level(s: &str) -> Result<LogLevel, String> {
    LogLevel::parse(s).ok_or_else(|| format!("Unknown log level '{s}'"))
}

fn build_log_config(cli: &Cli) -> Result<LogConfig, String> {
    let engine = cli.engine_log_level.as_deref().map(parse_level).transpose()?;
    Ok(LogConfig::new(LogTargets {
        global: parse_level(&cli.log_level)?,
        engine,
        ..LogTargets::default()
    }))
}

fn build_run_config(cli: &Cli) -> RunConfig {
    let defaults = EngineConfig::default();
    RunConfig {
        engine: EngineConfig {
            max_stack_size: cli.max_stack_size.unwrap_or(defaults.max_stack_size),
            max_call_depth: cli.max_call_depth.unwrap_or(defaults.max_call_depth),
            ..defaults
        },
        dump_program: cli.dump_program,
    }
}
