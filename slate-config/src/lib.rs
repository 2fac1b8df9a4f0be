//! Slate Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Slate crates.

use serde::{Deserialize, Serialize};

/// Limits and sizing for the execution engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial operand stack capacity
    pub initial_stack_capacity: usize,
    /// Maximum operand stack depth before a run is terminated
    pub max_stack_size: usize,
    /// Maximum nested subroutine calls before a run is terminated
    pub max_call_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_stack_capacity: 256,
            max_stack_size: 1024,
            max_call_depth: 256,
        }
    }
}

/// Log verbosity, ordered from most to least verbose
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Parse a level name; `silent` maps to `Error`
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Per-phase log level overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogTargets {
    pub global: LogLevel,
    pub loader: Option<LogLevel>,
    pub engine: Option<LogLevel>,
    pub library: Option<LogLevel>,
}

impl LogTargets {
    /// Effective level for a phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Loader => self.loader,
            Phase::Engine => self.engine,
            Phase::Library => self.library,
            Phase::Cli => None,
        };
        specific.unwrap_or(self.global)
    }
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loader,
    Engine,
    Library,
    Cli,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Loader, Phase::Engine, Phase::Library, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loader => "loader",
            Phase::Engine => "engine",
            Phase::Library => "library",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("slate::{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.initial_stack_capacity, 256);
        assert_eq!(cfg.max_stack_size, 1024);
        assert_eq!(cfg.max_call_depth, 256);
    }

    #[test]
    fn test_engine_config_partial_json() {
        let cfg: EngineConfig = serde_json::from_str(r#"{ "max_call_depth": 8 }"#).unwrap();
        assert_eq!(cfg.max_call_depth, 8);
        assert_eq!(cfg.max_stack_size, 1024);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Loader.as_str(), "loader");
        assert_eq!(Phase::Engine.target(), "slate::engine");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("silent"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
        assert!(LogLevel::Trace < LogLevel::Error);
    }

    #[test]
    fn test_level_for_falls_back_to_global() {
        let targets = LogTargets {
            global: LogLevel::Warn,
            engine: Some(LogLevel::Trace),
            ..LogTargets::default()
        };
        assert_eq!(targets.level_for(Phase::Engine), LogLevel::Trace);
        assert_eq!(targets.level_for(Phase::Loader), LogLevel::Warn);
        assert_eq!(targets.level_for(Phase::Cli), LogLevel::Warn);
    }
}
