//! Test helpers
//!
//! Build instruction streams by hand and run them end to end

#![allow(dead_code)]

use slate_core::runtime::{ArrayValue, ExecutionEngine, Op, Program, RunResult, Value};
use slate_core::syntax::SourceRange;
use slate_core::{EngineConfig, Instruction};

/// Run bare ops with default ranges on a default engine
pub fn run_ops(ops: impl IntoIterator<Item = Op>) -> RunResult {
    slate_core::run(&Program::from_ops(ops))
}

/// Run bare ops with explicit engine limits
pub fn run_ops_with(config: EngineConfig, ops: impl IntoIterator<Item = Op>) -> RunResult {
    ExecutionEngine::new(config).run(&Program::from_ops(ops))
}

/// Instruction attributed to `line`, one op per line
pub fn at_line(line: usize, op: Op) -> Instruction {
    Instruction::new(op, SourceRange::on_line(line, 1, 10))
}

/// Final value of a successful run
pub fn value_of(result: RunResult) -> Value {
    result
        .expect("run should succeed")
        .value
        .expect("run should leave a value")
}

pub fn num(n: f64) -> Op {
    Op::PushNumber(n)
}

pub fn text(s: &str) -> Op {
    Op::PushString(s.to_string())
}

pub fn array(entries: &[(&str, Value)]) -> Op {
    Op::PushArray(
        entries
            .iter()
            .map(|(key, value)| (*key, value.clone()))
            .collect::<ArrayValue>(),
    )
}

pub fn store(name: &str) -> Op {
    Op::StoreVariable(name.to_string())
}

pub fn load(name: &str) -> Op {
    Op::LoadVariable(name.to_string())
}

pub fn library(library: &str, method: &str, arguments: usize) -> Op {
    Op::CallLibrary {
        library: library.to_string(),
        method: method.to_string(),
        arguments,
    }
}
