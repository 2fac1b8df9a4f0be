//! Main execution loop

use super::{call, index, stack, EngineStatus, ExecutionEngine, RunOutcome, RunResult};
use crate::diagnostics::Diagnostic;
use crate::runtime::instruction::{Instruction, Op, Program};
use crate::runtime::value::{BinaryOperator, ComparisonOperator, Value};

/// Execute until the program ends, halts or raises a diagnostic
pub fn run(engine: &mut ExecutionEngine, program: &Program) -> RunResult {
    let len = program.len();
    tracing::debug!(target: "slate::engine", instructions = len, "run started");

    while engine.state.status.is_running() {
        let pc = engine.state.pc;
        let Some(instruction) = program.instructions.get(pc) else {
            engine.complete();
            break;
        };

        #[cfg(feature = "trace_execution")]
        trace_instruction(engine, pc, instruction);

        engine.state.pc = pc + 1;
        if let Err(diagnostic) = step(engine, instruction, len) {
            engine.terminate(diagnostic);
        }
    }

    finish(engine)
}

fn finish(engine: &ExecutionEngine) -> RunResult {
    match &engine.state.status {
        EngineStatus::Terminated(diagnostic) => Err(diagnostic.clone()),
        EngineStatus::Running | EngineStatus::Completed => {
            let outcome = RunOutcome {
                value: engine.state.stack.last().cloned(),
                bindings: engine.state.bindings.clone(),
            };
            tracing::debug!(
                target: "slate::engine",
                bindings = outcome.bindings.len(),
                "run completed"
            );
            Ok(outcome)
        }
    }
}

/// Dispatch one instruction. The program counter already points past it.
fn step(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    program_len: usize,
) -> Result<(), Diagnostic> {
    match &instruction.op {
        // ===== Constants =====
        Op::PushNumber(n) => stack::push(engine, instruction, Value::Number(*n)),
        Op::PushString(s) => stack::push(engine, instruction, Value::String(s.clone())),
        Op::PushBoolean(b) => stack::push(engine, instruction, Value::Boolean(*b)),
        Op::PushArray(array) => stack::push(engine, instruction, Value::Array(array.clone())),

        // ===== Stack =====
        Op::Pop => stack::pop(engine, instruction).map(drop),
        Op::Duplicate => {
            let top = stack::peek(engine, instruction)?.clone();
            stack::push(engine, instruction, top)
        }

        // ===== Bindings =====
        Op::LoadVariable(name) => {
            let value = engine
                .state
                .bindings
                .get(name)
                .cloned()
                .unwrap_or_else(Value::empty);
            stack::push(engine, instruction, value)
        }
        Op::StoreVariable(name) => {
            let value = stack::pop(engine, instruction)?;
            engine.state.bindings.insert(name.clone(), value);
            Ok(())
        }
        Op::LoadArrayElement { name, indices } => {
            index::load_element(engine, instruction, name, *indices)
        }
        Op::StoreArrayElement { name, indices } => {
            index::store_element(engine, instruction, name, *indices)
        }

        // ===== Arithmetic =====
        Op::Add => arithmetic(engine, instruction, BinaryOperator::Add),
        Op::Subtract => arithmetic(engine, instruction, BinaryOperator::Subtract),
        Op::Multiply => arithmetic(engine, instruction, BinaryOperator::Multiply),
        Op::Divide => arithmetic(engine, instruction, BinaryOperator::Divide),
        Op::Negate => {
            let operand = stack::pop(engine, instruction)?;
            let result = operand.negate(instruction.range)?;
            stack::push(engine, instruction, result)
        }

        // ===== Comparison =====
        Op::CompareEqual => compare(engine, instruction, ComparisonOperator::Equal),
        Op::CompareNotEqual => compare(engine, instruction, ComparisonOperator::NotEqual),
        Op::CompareLessThan => compare(engine, instruction, ComparisonOperator::LessThan),
        Op::CompareGreaterThan => compare(engine, instruction, ComparisonOperator::GreaterThan),
        Op::CompareLessThanOrEqual => {
            compare(engine, instruction, ComparisonOperator::LessThanOrEqual)
        }
        Op::CompareGreaterThanOrEqual => {
            compare(engine, instruction, ComparisonOperator::GreaterThanOrEqual)
        }
        Op::ToBoolean => {
            let operand = stack::pop(engine, instruction)?;
            stack::push(engine, instruction, Value::Boolean(operand.to_boolean()))
        }

        // ===== Control flow =====
        Op::Jump(target) => call::jump(engine, instruction, *target, program_len),
        Op::JumpIfTrue(target) => {
            let condition = stack::pop(engine, instruction)?;
            if condition.to_boolean() {
                call::jump(engine, instruction, *target, program_len)?;
            }
            Ok(())
        }
        Op::JumpIfFalse(target) => {
            let condition = stack::pop(engine, instruction)?;
            if !condition.to_boolean() {
                call::jump(engine, instruction, *target, program_len)?;
            }
            Ok(())
        }
        Op::Call(target) => call::call(engine, instruction, *target, program_len),
        Op::Return => call::ret(engine, instruction),
        Op::CallLibrary {
            library,
            method,
            arguments,
        } => call::call_library(engine, instruction, library, method, *arguments),
        Op::Halt => {
            engine.complete();
            Ok(())
        }
    }
}

fn arithmetic(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    operator: BinaryOperator,
) -> Result<(), Diagnostic> {
    let (lhs, rhs) = stack::pop_two(engine, instruction)?;
    let result = lhs.apply(operator, &rhs, instruction.range)?;
    stack::push(engine, instruction, result)
}

fn compare(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    operator: ComparisonOperator,
) -> Result<(), Diagnostic> {
    let (lhs, rhs) = stack::pop_two(engine, instruction)?;
    let result = lhs.compare(operator, &rhs);
    stack::push(engine, instruction, Value::Boolean(result))
}

/// Log the instruction about to run with the current stack
#[cfg(feature = "trace_execution")]
fn trace_instruction(engine: &ExecutionEngine, pc: usize, instruction: &Instruction) {
    let stack: Vec<String> = engine
        .state
        .stack
        .iter()
        .map(Value::to_debugger_string)
        .collect();
    tracing::trace!(
        target: "slate::engine",
        "{:04} {} | stack: [{}]",
        pc,
        instruction.op,
        stack.join(", ")
    );
}
