//! Instruction set
//!
//! Instructions are data only; they carry no execution semantics. The front
//! end produces them once and the engine only reads them.
//!
//! Stack effect notation: `[..., lhs, rhs] -> [..., result]`

use super::value::ArrayValue;
use crate::syntax::SourceRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation tag and its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Op {
    // ===== Constants =====
    PushNumber(f64),
    PushString(String),
    PushBoolean(bool),
    PushArray(ArrayValue),

    // ===== Stack =====
    Pop,
    Duplicate,

    // ===== Bindings =====
    /// `[...] -> [..., value]`; an unbound name loads the empty string
    LoadVariable(String),
    /// `[..., value] -> [...]`
    StoreVariable(String),
    /// `[..., index_1, ..., index_n] -> [..., element]`
    LoadArrayElement { name: String, indices: usize },
    /// `[..., index_1, ..., index_n, value] -> [...]`
    StoreArrayElement { name: String, indices: usize },

    // ===== Arithmetic =====
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,

    // ===== Comparison =====
    CompareEqual,
    CompareNotEqual,
    CompareLessThan,
    CompareGreaterThan,
    CompareLessThanOrEqual,
    CompareGreaterThanOrEqual,
    ToBoolean,

    // ===== Control flow =====
    Jump(usize),
    /// Pops the condition
    JumpIfTrue(usize),
    /// Pops the condition
    JumpIfFalse(usize),
    /// Enter the subroutine starting at the target
    Call(usize),
    Return,
    /// `[..., arg_1, ..., arg_n] -> [..., result?]`
    CallLibrary {
        library: String,
        method: String,
        arguments: usize,
    },
    Halt,
}

impl Op {
    /// Mnemonic used in diagnostics and traces
    pub fn name(&self) -> &'static str {
        match self {
            Op::PushNumber(_) => "PushNumber",
            Op::PushString(_) => "PushString",
            Op::PushBoolean(_) => "PushBoolean",
            Op::PushArray(_) => "PushArray",
            Op::Pop => "Pop",
            Op::Duplicate => "Duplicate",
            Op::LoadVariable(_) => "LoadVariable",
            Op::StoreVariable(_) => "StoreVariable",
            Op::LoadArrayElement { .. } => "LoadArrayElement",
            Op::StoreArrayElement { .. } => "StoreArrayElement",
            Op::Add => "Add",
            Op::Subtract => "Subtract",
            Op::Multiply => "Multiply",
            Op::Divide => "Divide",
            Op::Negate => "Negate",
            Op::CompareEqual => "CompareEqual",
            Op::CompareNotEqual => "CompareNotEqual",
            Op::CompareLessThan => "CompareLessThan",
            Op::CompareGreaterThan => "CompareGreaterThan",
            Op::CompareLessThanOrEqual => "CompareLessThanOrEqual",
            Op::CompareGreaterThanOrEqual => "CompareGreaterThanOrEqual",
            Op::ToBoolean => "ToBoolean",
            Op::Jump(_) => "Jump",
            Op::JumpIfTrue(_) => "JumpIfTrue",
            Op::JumpIfFalse(_) => "JumpIfFalse",
            Op::Call(_) => "Call",
            Op::Return => "Return",
            Op::CallLibrary { .. } => "CallLibrary",
            Op::Halt => "Halt",
        }
    }

    /// Destination of a control transfer, if this op has one
    pub fn jump_target(&self) -> Option<usize> {
        match self {
            Op::Jump(target) | Op::JumpIfTrue(target) | Op::JumpIfFalse(target) | Op::Call(target) => {
                Some(*target)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::PushNumber(n) => write!(f, "PushNumber {n}"),
            Op::PushString(s) => write!(f, "PushString {s:?}"),
            Op::PushBoolean(b) => write!(f, "PushBoolean {b}"),
            Op::PushArray(array) => write!(f, "PushArray {}", array.to_debugger_string()),
            Op::LoadVariable(name) | Op::StoreVariable(name) => write!(f, "{} {name}", self.name()),
            Op::LoadArrayElement { name, indices } | Op::StoreArrayElement { name, indices } => {
                write!(f, "{} {name} [{indices}]", self.name())
            }
            Op::Jump(target)
            | Op::JumpIfTrue(target)
            | Op::JumpIfFalse(target)
            | Op::Call(target) => write!(f, "{} @{target}", self.name()),
            Op::CallLibrary {
                library,
                method,
                arguments,
            } => write!(f, "CallLibrary {library}.{method}({arguments})"),
            _ => f.write_str(self.name()),
        }
    }
}

/// One step of a compiled program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub op: Op,
    #[serde(default)]
    pub range: SourceRange,
}

impl Instruction {
    pub fn new(op: Op, range: SourceRange) -> Self {
        Self { op, range }
    }
}

impl From<Op> for Instruction {
    /// Instruction with a default range, for hand-built streams
    fn from(op: Op) -> Self {
        Self {
            op,
            range: SourceRange::default(),
        }
    }
}

/// Structural problem found by [`Program::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("instruction {index} ({op}) targets {target}, outside 0..={len}")]
    TargetOutOfRange {
        index: usize,
        op: &'static str,
        target: usize,
        len: usize,
    },
}

/// A complete instruction stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Program from bare ops with default ranges
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Self {
        Self::new(ops.into_iter().map(Instruction::from).collect())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Check every control transfer lands inside the program. A target equal
    /// to the length is allowed and completes the run.
    pub fn validate(&self) -> Result<(), ProgramError> {
        let len = self.instructions.len();
        for (index, instruction) in self.instructions.iter().enumerate() {
            if let Some(target) = instruction.op.jump_target() {
                if target > len {
                    return Err(ProgramError::TargetOutOfRange {
                        index,
                        op: instruction.op.name(),
                        target,
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    /// Human-readable listing, one instruction per line
    pub fn disassemble(&self) -> String {
        self.instructions
            .iter()
            .enumerate()
            .map(|(index, instruction)| {
                format!("{index:04} {:<12} {}", instruction.range.to_string(), instruction.op)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
