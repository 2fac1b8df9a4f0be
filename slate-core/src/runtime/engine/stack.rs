//! Operand stack operations

use super::ExecutionEngine;
use crate::diagnostics::{Diagnostic, ErrorKind};
use crate::runtime::instruction::Instruction;
use crate::runtime::value::Value;

/// Push a value, enforcing `max_stack_size`
pub fn push(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    value: Value,
) -> Result<(), Diagnostic> {
    let limit = engine.config.max_stack_size;
    if engine.state.stack.len() >= limit {
        return Err(Diagnostic::new(
            ErrorKind::OperandStackOverflow,
            instruction.range,
            vec![limit.to_string()],
        ));
    }
    engine.state.stack.push(value);
    Ok(())
}

pub fn pop(engine: &mut ExecutionEngine, instruction: &Instruction) -> Result<Value, Diagnostic> {
    engine
        .state
        .stack
        .pop()
        .ok_or_else(|| underflow(instruction))
}

/// Pop `(lhs, rhs)`; `rhs` is on top
pub fn pop_two(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
) -> Result<(Value, Value), Diagnostic> {
    let rhs = pop(engine, instruction)?;
    let lhs = pop(engine, instruction)?;
    Ok((lhs, rhs))
}

/// Pop `count` values, returned in push order
pub fn pop_n(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    count: usize,
) -> Result<Vec<Value>, Diagnostic> {
    let len = engine.state.stack.len();
    if count > len {
        return Err(underflow(instruction));
    }
    Ok(engine.state.stack.split_off(len - count))
}

/// Top of the stack without removing it
pub fn peek<'a>(
    engine: &'a ExecutionEngine,
    instruction: &Instruction,
) -> Result<&'a Value, Diagnostic> {
    engine.state.stack.last().ok_or_else(|| underflow(instruction))
}

fn underflow(instruction: &Instruction) -> Diagnostic {
    Diagnostic::new(
        ErrorKind::OperandStackUnderflow,
        instruction.range,
        vec![instruction.op.name().to_string()],
    )
}
