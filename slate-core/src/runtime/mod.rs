//! Runtime: values, instructions, libraries and the execution engine

pub mod engine;
pub mod instruction;
pub mod library;
pub mod stdlib;
pub mod value;

pub use engine::{EngineStatus, ExecutionEngine, ExecutionState, RunOutcome, RunResult};
pub use instruction::{Instruction, Op, Program, ProgramError};
pub use library::{Library, LibraryError, LibraryRegistry, NativeLibrary};
pub use value::{ArrayValue, Value, ValueKind};
