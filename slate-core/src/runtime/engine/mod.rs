//! Execution engine
//!
//! Drives an instruction stream against an [`ExecutionState`]. Value
//! operations hand back `Err(Diagnostic)`; the engine is the only place that
//! turns one into a halt, and it keeps the first diagnostic of a run.

use crate::diagnostics::Diagnostic;
use crate::runtime::instruction::Program;
use crate::runtime::library::{Library, LibraryRegistry};
use crate::runtime::value::Value;
use slate_config::EngineConfig;
use std::collections::BTreeMap;

mod call;
mod execution;
mod index;
mod stack;

/// Terminal status of a run
#[derive(Debug, Clone, PartialEq)]
pub enum EngineStatus {
    Running,
    /// Stopped by the first diagnostic raised
    Terminated(Diagnostic),
    Completed,
}

impl EngineStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, EngineStatus::Running)
    }
}

/// Mutable evaluation state of one run
#[derive(Debug, Clone)]
pub struct ExecutionState {
    /// Index of the next instruction
    pub pc: usize,
    pub bindings: BTreeMap<String, Value>,
    pub stack: Vec<Value>,
    /// Return addresses of active subroutine calls
    pub call_stack: Vec<usize>,
    pub status: EngineStatus,
}

impl ExecutionState {
    fn new(stack_capacity: usize) -> Self {
        Self {
            pc: 0,
            bindings: BTreeMap::new(),
            stack: Vec::with_capacity(stack_capacity),
            call_stack: Vec::new(),
            status: EngineStatus::Running,
        }
    }
}

/// What a successful run leaves behind
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    /// Top of the operand stack at completion
    pub value: Option<Value>,
    pub bindings: BTreeMap<String, Value>,
}

pub type RunResult = Result<RunOutcome, Diagnostic>;

/// Single-threaded interpreter for [`Program`]s
#[derive(Debug)]
pub struct ExecutionEngine {
    config: EngineConfig,
    libraries: LibraryRegistry,
    state: ExecutionState,
}

impl ExecutionEngine {
    /// Engine with the built-in libraries
    pub fn new(config: EngineConfig) -> Self {
        Self::with_libraries(config, LibraryRegistry::with_builtins())
    }

    pub fn with_libraries(config: EngineConfig, libraries: LibraryRegistry) -> Self {
        let state = ExecutionState::new(config.initial_stack_capacity);
        Self {
            config,
            libraries,
            state,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// State of the current or most recent run
    pub fn state(&self) -> &ExecutionState {
        &self.state
    }

    pub fn libraries(&self) -> &LibraryRegistry {
        &self.libraries
    }

    pub fn register_library(&mut self, library: Box<dyn Library>) {
        self.libraries.register(library);
    }

    /// Run `program` from its first instruction on fresh state
    pub fn run(&mut self, program: &Program) -> RunResult {
        self.state = ExecutionState::new(self.config.initial_stack_capacity);
        execution::run(self, program)
    }

    /// Record `diagnostic` and stop the run. Only the first call of a run
    /// has any effect.
    pub fn terminate(&mut self, diagnostic: Diagnostic) {
        if !self.state.status.is_running() {
            return;
        }
        tracing::debug!(
            target: "slate::engine",
            kind = ?diagnostic.kind,
            at = %diagnostic.range,
            "run terminated: {}",
            diagnostic.message()
        );
        self.state.status = EngineStatus::Terminated(diagnostic);
    }

    /// Mark the run complete unless it already ended
    fn complete(&mut self) {
        if self.state.status.is_running() {
            self.state.status = EngineStatus::Completed;
        }
    }
}

impl Default for ExecutionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use crate::runtime::instruction::Op;
    use crate::syntax::SourceRange;

    #[test]
    fn test_terminate_keeps_first_diagnostic() {
        let mut engine = ExecutionEngine::default();
        let first = Diagnostic::new(ErrorKind::ReturnWithoutCall, SourceRange::on_line(1, 1, 2), vec![]);
        let second = Diagnostic::new(
            ErrorKind::InvalidJumpTarget,
            SourceRange::on_line(2, 1, 2),
            vec!["9".to_string()],
        );
        engine.terminate(first.clone());
        engine.terminate(second);
        assert_eq!(engine.state().status, EngineStatus::Terminated(first));
    }

    #[test]
    fn test_terminate_after_completion_is_ignored() {
        let mut engine = ExecutionEngine::default();
        engine.run(&Program::from_ops([Op::PushNumber(1.0)])).unwrap();
        engine.terminate(Diagnostic::new(ErrorKind::ReturnWithoutCall, SourceRange::default(), vec![]));
        assert_eq!(engine.state().status, EngineStatus::Completed);
    }

    #[test]
    fn test_rerun_starts_from_scratch() {
        let mut engine = ExecutionEngine::default();
        let failing = Program::from_ops([Op::Return]);
        assert!(engine.run(&failing).is_err());

        let program = Program::from_ops([Op::PushNumber(1.0), Op::StoreVariable("x".to_string())]);
        let outcome = engine.run(&program).unwrap();
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.bindings.get("x"), Some(&Value::Number(1.0)));
        assert_eq!(engine.state().status, EngineStatus::Completed);
    }
}
