// src/exit.rs
//! Standardized process exit codes for `collicheck`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::types::SweepReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CheckExit {
    /// No collision reported as an error.
    Success = 0,
    /// Generic error (e.g. IO, config, internal inconsistency).
    Error = 1,
    /// Input could not be read as locale data.
    InvalidInput = 2,
    /// At least one collision was reported with error severity.
    Collisions = 3,
}

impl CheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Exit status for a finished set of sweeps.
    #[must_use]
    pub fn from_reports(reports: &[SweepReport]) -> Self {
        if reports.iter().any(SweepReport::has_errors) {
            Self::Collisions
        } else {
            Self::Success
        }
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }
}

impl Termination for CheckExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_from_reports() {
        let clean = SweepReport::default();
        let failing = SweepReport { errors: 1, ..SweepReport::default() };
        assert_eq!(CheckExit::from_reports(&[clean.clone()]), CheckExit::Success);
        assert_eq!(CheckExit::from_reports(&[clean, failing]), CheckExit::Collisions);
        assert_eq!(CheckExit::from_reports(&[]), CheckExit::Success);
    }
}
