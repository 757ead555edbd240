// src/phase.rs
//! Release phases and the severity policy that depends on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Stage of the data-release lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Submission,
    Vetting,
    Build,
    FinalTesting,
}

/// How strongly a diagnostic gates acceptance of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Phase {
    /// Collisions only warn while data is being entered or smoke-built.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Submission | Self::Build => Severity::Warning,
            Self::Vetting | Self::FinalTesting => Severity::Error,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submission => "submission",
            Self::Vetting => "vetting",
            Self::Build => "build",
            Self::FinalTesting => "final-testing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Phase {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "submission" => Ok(Self::Submission),
            "vetting" => Ok(Self::Vetting),
            "build" => Ok(Self::Build),
            "final-testing" => Ok(Self::FinalTesting),
            _ => Err(CheckError::UnknownPhase(s.to_string())),
        }
    }
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_monotonicity() {
        assert_eq!(Phase::Submission.severity(), Severity::Warning);
        assert_eq!(Phase::Build.severity(), Severity::Warning);
        assert_eq!(Phase::Vetting.severity(), Severity::Error);
        assert_eq!(Phase::FinalTesting.severity(), Severity::Error);
    }

    #[test]
    fn test_parse_phase() {
        assert_eq!("FINAL_TESTING".parse::<Phase>().unwrap(), Phase::FinalTesting);
        assert_eq!("vetting".parse::<Phase>().unwrap(), Phase::Vetting);
        assert!("review".parse::<Phase>().is_err());
    }
}
