//! API layer configuration

use slate_config::EngineConfig;

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Engine limits
    pub engine: EngineConfig,
    /// Log a disassembly of the program before running it
    pub dump_program: bool,
}

impl RunConfig {
    pub fn with_engine(engine: EngineConfig) -> Self {
        Self {
            engine,
            ..Self::default()
        }
    }
}
