//! Namespaced debug logging on top of the `log` facade.
//!
//! Each subsystem of the page gets its own [`DebugLogger`]; whether it emits
//! anything is decided once, from [`DebugConfig`], when the logger is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Log target shared by all debug loggers.
pub const LOG_TARGET: &str = "gamerec";

/// Areas of the page that log independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subsystem {
    Recommendations,
    Modal,
    General,
}

impl Subsystem {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Recommendations => "Recommendations",
            Self::Modal => "Modal",
            Self::General => "General",
        }
    }
}

/// Per-subsystem debug switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    pub recommendations: bool,
    pub modal: bool,
    pub general: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            recommendations: false,
            modal: false,
            general: true,
        }
    }
}

impl DebugConfig {
    /// Every subsystem silent, for tests.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            recommendations: false,
            modal: false,
            general: false,
        }
    }

    #[must_use]
    pub const fn is_enabled(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Recommendations => self.recommendations,
            Subsystem::Modal => self.modal,
            Subsystem::General => self.general,
        }
    }

    #[must_use]
    pub const fn logger(&self, subsystem: Subsystem) -> DebugLogger {
        DebugLogger::new(subsystem, self.is_enabled(subsystem))
    }
}

/// Debug logger bound to one subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugLogger {
    subsystem: Subsystem,
    enabled: bool,
}

impl DebugLogger {
    #[must_use]
    pub const fn new(subsystem: Subsystem, enabled: bool) -> Self {
        Self { subsystem, enabled }
    }

    /// Logger that never emits.
    #[must_use]
    pub const fn disabled(subsystem: Subsystem) -> Self {
        Self::new(subsystem, false)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn subsystem(&self) -> Subsystem {
        self.subsystem
    }

    /// Emit a debug record prefixed with the subsystem name.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            log::debug!(target: LOG_TARGET, "[{}] {}", self.subsystem.name(), args);
        }
    }
}
