//! Backend and logging configuration.
//!
//! # Responsibility
//! - Describe how a backend is built: latency policy and seed source.
//! - Describe where and how verbosely core logs are written.
//!
//! # Invariants
//! - Configuration is plain data; nothing here reads the environment.

use crate::logging::default_log_level;
use crate::seed::{SeedData, SeedError};
use crate::store::Latency;

/// Where a backend's initial records come from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SeedSource {
    /// Fixtures compiled into the crate.
    #[default]
    Bundled,
    /// No initial records.
    Empty,
    /// Caller-provided records, checked like bundled ones.
    Custom(SeedData),
}

impl SeedSource {
    pub fn load(&self) -> Result<SeedData, SeedError> {
        match self {
            Self::Bundled => SeedData::bundled(),
            Self::Empty => Ok(SeedData::empty()),
            Self::Custom(seed) => {
                seed.check()?;
                Ok(seed.clone())
            }
        }
    }
}

/// Options for `Backend::from_config`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub latency: Latency,
    pub seed: SeedSource,
}

impl Default for BackendConfig {
    /// Simulated round trip over the bundled fixtures.
    fn default() -> Self {
        Self {
            latency: Latency::simulated(),
            seed: SeedSource::Bundled,
        }
    }
}

impl BackendConfig {
    /// Bundled fixtures without any artificial delay.
    pub fn immediate() -> Self {
        Self {
            latency: Latency::Immediate,
            ..Self::default()
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }
}

/// Options for `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
}

impl LogConfig {
    /// Uses the build-mode default level.
    pub fn new(log_dir: impl Into<String>) -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: log_dir.into(),
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}
