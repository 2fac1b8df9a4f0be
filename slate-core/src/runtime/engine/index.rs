//! Array element access

use super::{stack, ExecutionEngine};
use crate::diagnostics::{Diagnostic, ErrorKind};
use crate::runtime::instruction::Instruction;
use crate::runtime::value::Value;

/// Pop `count` index values and turn them into keys, outermost first
fn pop_keys(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    count: usize,
) -> Result<Vec<String>, Diagnostic> {
    stack::pop_n(engine, instruction, count)?
        .iter()
        .map(|index| index_key(index, instruction))
        .collect()
}

fn index_key(index: &Value, instruction: &Instruction) -> Result<String, Diagnostic> {
    match index {
        Value::Array(_) => Err(Diagnostic::new(
            ErrorKind::CannotUseAnArrayAsAnIndexToAnotherArray,
            instruction.range,
            vec![],
        )),
        other => Ok(other.to_value_string()),
    }
}

/// `name[k1][k2]...`; any missing level yields the empty string
pub fn load_element(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    name: &str,
    indices: usize,
) -> Result<(), Diagnostic> {
    let keys = pop_keys(engine, instruction, indices)?;
    let mut current = engine.state.bindings.get(name);
    for key in &keys {
        current = current
            .and_then(Value::as_array)
            .and_then(|array| array.get(key));
    }
    let element = current.cloned().unwrap_or_else(Value::empty);
    stack::push(engine, instruction, element)
}

/// `name[k1][k2]... = value`. Levels that are missing or not arrays are
/// replaced by fresh arrays. Updates happen in place.
pub fn store_element(
    engine: &mut ExecutionEngine,
    instruction: &Instruction,
    name: &str,
    indices: usize,
) -> Result<(), Diagnostic> {
    let value = stack::pop(engine, instruction)?;
    let keys = pop_keys(engine, instruction, indices)?;

    let Some((last, path)) = keys.split_last() else {
        engine.state.bindings.insert(name.to_string(), value);
        return Ok(());
    };
    let root = engine
        .state
        .bindings
        .entry(name.to_string())
        .or_insert_with(Value::empty_array)
        .make_array();
    let target = path.iter().fold(root, |array, key| array.child_array(key));
    target.insert(last.as_str(), value);
    Ok(())
}
