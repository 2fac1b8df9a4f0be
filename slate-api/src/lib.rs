//! Slate API - Execution orchestration layer
//!
//! Provides the unified execution interface:
//! - Program loading from the JSON instruction format
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (SlateError)

use slate_core::runtime::ExecutionEngine;
use slate_core::Program;

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{ErrorReport, SlateError};
pub use types::ExecuteOutput;

// Re-export config and core types
pub use slate_config;
pub use slate_config::{EngineConfig, LogLevel, LogTargets, Phase};
pub use slate_core::{Diagnostic, ErrorCategory, ErrorKind, Value};

/// Load, validate and run a serialized program
pub fn run(json: &str, config: &RunConfig) -> Result<ExecuteOutput, SlateError> {
    let program = load_program(json)?;
    execute(&program, config)
}

/// Parse a program from its JSON form
pub fn load_program(json: &str) -> Result<Program, SlateError> {
    let program: Program = serde_json::from_str(json)?;
    tracing::debug!(
        target: "slate::loader",
        instructions = program.len(),
        "program loaded"
    );
    Ok(program)
}

/// Validate and run a program on a fresh engine
pub fn execute(program: &Program, config: &RunConfig) -> Result<ExecuteOutput, SlateError> {
    program.validate()?;

    if config.dump_program {
        tracing::info!(target: "slate::loader", "program listing:\n{}", program.disassemble());
    }

    tracing::info!(target: "slate::engine", "Starting execution");
    let mut engine = ExecutionEngine::new(config.engine.clone());
    let outcome = engine.run(program)?;
    tracing::info!(target: "slate::engine", "Execution completed");

    Ok(ExecuteOutput {
        value: outcome.value,
        bindings: outcome.bindings,
    })
}
