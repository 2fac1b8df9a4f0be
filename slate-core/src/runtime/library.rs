//! Host libraries reachable through `CallLibrary`

use super::value::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Failure reported by a library method
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("library has no method named '{0}'")]
    UnknownMethod(String),

    #[error("takes exactly {expected} argument(s) ({given} given)")]
    ArgumentCount { expected: usize, given: usize },

    #[error("{0}")]
    InvalidArgument(String),
}

/// A host-provided table of callable methods
pub trait Library {
    /// Name used by `CallLibrary` to select this library
    fn name(&self) -> &str;

    /// Invoke `method`; `Ok(None)` means the method returns nothing
    fn call(&self, method: &str, args: &[Value]) -> Result<Option<Value>, LibraryError>;
}

/// Native method pointer
pub type NativeFn = fn(&[Value]) -> Result<Option<Value>, LibraryError>;

/// Library backed by a fixed method table
pub struct NativeLibrary {
    name: &'static str,
    methods: HashMap<&'static str, NativeFn>,
}

impl NativeLibrary {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            methods: HashMap::new(),
        }
    }

    pub fn with_method(mut self, method: &'static str, function: NativeFn) -> Self {
        self.methods.insert(method, function);
        self
    }
}

impl Library for NativeLibrary {
    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Option<Value>, LibraryError> {
        match self.methods.get(method) {
            Some(function) => function(args),
            None => Err(LibraryError::UnknownMethod(method.to_string())),
        }
    }
}

/// Libraries known to one engine, keyed by name
#[derive(Default)]
pub struct LibraryRegistry {
    libraries: HashMap<String, Box<dyn Library>>,
}

impl LibraryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in libraries
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for library in super::stdlib::create_builtin_libraries() {
            registry.register(library);
        }
        registry
    }

    /// Add a library, replacing any library of the same name
    pub fn register(&mut self, library: Box<dyn Library>) {
        tracing::debug!(target: "slate::library", library = library.name(), "registered library");
        self.libraries.insert(library.name().to_string(), library);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Library> {
        self.libraries.get(name).map(|library| library.as_ref())
    }

    /// Registered library names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.libraries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for LibraryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryRegistry")
            .field("libraries", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(_args: &[Value]) -> Result<Option<Value>, LibraryError> {
        Ok(Some(Value::Number(42.0)))
    }

    #[test]
    fn test_native_library_dispatch() {
        let library = NativeLibrary::new("Deep").with_method("Think", answer);
        assert_eq!(library.name(), "Deep");
        assert_eq!(library.call("Think", &[]), Ok(Some(Value::Number(42.0))));
        assert_eq!(
            library.call("Sleep", &[]),
            Err(LibraryError::UnknownMethod("Sleep".to_string()))
        );
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = LibraryRegistry::new();
        assert!(registry.get("Deep").is_none());
        registry.register(Box::new(NativeLibrary::new("Deep").with_method("Think", answer)));
        assert_eq!(registry.names(), vec!["Deep"]);
        let library = registry.get("Deep").unwrap();
        assert_eq!(library.call("Think", &[]), Ok(Some(Value::Number(42.0))));
    }

    #[test]
    fn test_builtins_registered() {
        let registry = LibraryRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["Array", "Math", "Text"]);
    }

    #[test]
    fn test_error_messages() {
        let err = LibraryError::ArgumentCount {
            expected: 2,
            given: 1,
        };
        assert_eq!(err.to_string(), "takes exactly 2 argument(s) (1 given)");
    }
}
