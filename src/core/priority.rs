//! Message priorities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filtering level of a log message.
///
/// Priorities form a total order: `Debug < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Priority {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 4] = [
        Priority::Debug,
        Priority::Info,
        Priority::Warning,
        Priority::Error,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Priority::Debug => "DEBUG",
            Priority::Info => "INFO",
            Priority::Warning => "WARNING",
            Priority::Error => "ERROR",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Priority::Debug => Blue,
            Priority::Info => Green,
            Priority::Warning => Yellow,
            Priority::Error => Red,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Priority::Debug),
            "INFO" => Ok(Priority::Info),
            "WARN" | "WARNING" => Ok(Priority::Warning),
            "ERROR" => Ok(Priority::Error),
            _ => Err(format!("Invalid priority: '{}'", s)),
        }
    }
}
