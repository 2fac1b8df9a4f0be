//! Slate Core - Execution core (pure logic, no IO)
//!
//! Contains the diagnostics model, the value model, the instruction set and
//! the execution engine. Only operates on in-memory data structures, no file
//! IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod diagnostics;
pub mod runtime;
pub mod syntax;

// Re-export common types
pub use diagnostics::{Diagnostic, ErrorCategory, ErrorKind};
pub use runtime::{ExecutionEngine, Instruction, Op, Program, RunOutcome, RunResult, Value};
pub use syntax::{Position, SourceRange, TokenKind};

// Re-export config types from slate-config
pub use slate_config::{EngineConfig, Phase};

/// Run a program on a default engine with the built-in libraries
pub fn run(program: &Program) -> RunResult {
    runtime::ExecutionEngine::default().run(program)
}
