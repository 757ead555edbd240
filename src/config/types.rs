use serde::{Deserialize, Serialize};

use crate::exceptions::{default_region_pairs, RegionPair};
use crate::index::{Exclusions, DEFAULT_EXCLUSIONS};
use crate::phase::Phase;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSection {
    #[serde(default)]
    pub phase: Phase,
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for CheckSection {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            exclude_patterns: default_exclude_patterns(),
            parallel: true,
        }
    }
}

const fn default_true() -> bool { true }

fn default_exclude_patterns() -> Vec<String> {
    DEFAULT_EXCLUSIONS.iter().map(ToString::to_string).collect()
}

/// On-disk form of `collicheck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckToml {
    #[serde(default)]
    pub check: CheckSection,
    // Replaces the curated list when present.
    #[serde(default = "default_region_pairs")]
    pub exceptions: Vec<RegionPair>,
}

impl Default for CheckToml {
    fn default() -> Self {
        Self { check: CheckSection::default(), exceptions: default_region_pairs() }
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub phase: Phase,
    pub exclusions: Exclusions,
    pub exclude_patterns: Vec<String>,
    pub region_pairs: Vec<RegionPair>,
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            exclusions: Exclusions::default(),
            exclude_patterns: default_exclude_patterns(),
            region_pairs: default_region_pairs(),
            parallel: true,
        }
    }
}
