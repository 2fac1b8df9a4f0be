//! Subroutine calls, control transfer and library calls

use super::{stack, ExecutionEngine};
use crate::diagnostics::{Diagnostic, ErrorKind};
use crate::runtime::instruction::Instruction;
use crate::runtime::library::LibraryError;

/// Move the program counter. A target equal to the program length ends the
/// run normally.
pub fn jump(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    target: usize,
    program_len: usize,
) -> Result<(), Diagnostic> {
    if target > program_len {
        return Err(Diagnostic::new(
            ErrorKind::InvalidJumpTarget,
            instruction.range,
            vec![target.to_string()],
        ));
    }
    engine.state.pc = target;
    Ok(())
}

/// Enter a subroutine, remembering the instruction after the call
pub fn call(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    target: usize,
    program_len: usize,
) -> Result<(), Diagnostic> {
    let limit = engine.config.max_call_depth;
    if engine.state.call_stack.len() >= limit {
        return Err(Diagnostic::new(
            ErrorKind::CallStackOverflow,
            instruction.range,
            vec![limit.to_string()],
        ));
    }
    let return_address = engine.state.pc;
    jump(engine, instruction, target, program_len)?;
    engine.state.call_stack.push(return_address);
    Ok(())
}

pub fn ret(engine: &mut ExecutionEngine, instruction: &Instruction) -> Result<(), Diagnostic> {
    match engine.state.call_stack.pop() {
        Some(return_address) => {
            engine.state.pc = return_address;
            Ok(())
        }
        None => Err(Diagnostic::new(
            ErrorKind::ReturnWithoutCall,
            instruction.range,
            vec![],
        )),
    }
}

/// Pop `arguments` values, invoke `library.method`, push its result if any
pub fn call_library(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    library: &str,
    method: &str,
    arguments: usize,
) -> Result<(), Diagnostic> {
    let qualified = format!("{library}.{method}");
    let args = stack::pop_n(engine, instruction, arguments)?;

    let Some(target) = engine.libraries.get(library) else {
        return Err(Diagnostic::new(
            ErrorKind::UnknownLibraryMethod,
            instruction.range,
            vec![qualified],
        ));
    };

    tracing::trace!(target: "slate::library", method = %qualified, args = args.len(), "library call");
    match target.call(method, &args) {
        Ok(Some(value)) => stack::push(engine, instruction, value),
        Ok(None) => Ok(()),
        Err(LibraryError::UnknownMethod(_)) => Err(Diagnostic::new(
            ErrorKind::UnknownLibraryMethod,
            instruction.range,
            vec![qualified],
        )),
        Err(err) => Err(Diagnostic::new(
            ErrorKind::LibraryCallFailed,
            instruction.range,
            vec![qualified, err.to_string()],
        )),
    }
}
