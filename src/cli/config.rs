//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Common configuration shared across commands
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Verbose output
    pub verbose: bool,
}

impl CommonConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
