// src/config/mod.rs
pub mod io;
pub mod types;

use std::path::Path;

pub use self::io::CONFIG_FILE;
pub use self::types::{CheckSection, CheckToml, Config};

use crate::error::Result;
use crate::index::Exclusions;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `collicheck.toml` in the working directory.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed, or has a bad pattern.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let toml = io::load_toml_config(path.unwrap_or_else(|| Path::new(CONFIG_FILE)))?;
        Self::from_toml(toml)
    }

    /// Resolves the on-disk form, compiling exclusion patterns.
    ///
    /// # Errors
    /// Returns error if an exclusion pattern is not a valid regex.
    pub fn from_toml(toml: CheckToml) -> Result<Self> {
        let exclusions = Exclusions::new(&toml.check.exclude_patterns)?;
        Ok(Self {
            phase: toml.check.phase,
            exclusions,
            exclude_patterns: toml.check.exclude_patterns,
            region_pairs: toml.exceptions,
            parallel: toml.check.parallel,
        })
    }

    /// The on-disk form of this config.
    #[must_use]
    pub fn to_toml(&self) -> CheckToml {
        CheckToml {
            check: CheckSection {
                phase: self.phase,
                exclude_patterns: self.exclude_patterns.clone(),
                parallel: self.parallel,
            },
            exceptions: self.region_pairs.clone(),
        }
    }

    /// Saves the current configuration.
    ///
    /// # Errors
    /// Returns error if the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(&self.to_toml(), path)
    }
}
