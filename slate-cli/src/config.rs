//! CLI configuration
//!
//! Maps the shared per-phase log levels onto `tracing` levels.

use slate_config::{LogLevel, LogTargets, Phase};
use tracing::Level;

/// CLI log configuration
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    targets: LogTargets,
}

impl LogConfig {
    pub fn new(targets: LogTargets) -> Self {
        Self { targets }
    }

    pub fn global(&self) -> Level {
        to_level(self.targets.global)
    }

    /// Level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        to_level(self.targets.level_for(phase))
    }
}

fn to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
