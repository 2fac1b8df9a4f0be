//! API input/output types

use slate_core::Value;
use std::collections::BTreeMap;

/// Execution output
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteOutput {
    /// Top of the operand stack when the run ended
    pub value: Option<Value>,
    /// Variable bindings when the run ended
    pub bindings: BTreeMap<String, Value>,
}
