// src/types.rs
use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::header::PathHeader;
use crate::kinds::DisplayType;
use crate::phase::Severity;

/// Category of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Subtype {
    DisplayCollision,
}

/// One colliding location, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollidingLabel {
    /// Rendered label (bare `header: code`, or a survey link around it).
    pub text: String,
    /// Normalized path of the colliding entry.
    pub path: String,
    pub header: PathHeader,
}

/// Colliding labels, de-duplicated and sorted by rendered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollidingTypeSet {
    labels: BTreeMap<String, CollidingLabel>,
}

impl CollidingTypeSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: CollidingLabel) {
        self.labels.entry(label.text.clone()).or_insert(label);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollidingLabel> {
        self.labels.values()
    }

    /// The only label, if exactly one remains.
    #[must_use]
    pub fn sole(&self) -> Option<&CollidingLabel> {
        if self.labels.len() == 1 {
            self.labels.values().next()
        } else {
            None
        }
    }
}

impl fmt::Display for CollidingTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, text) in self.labels.keys().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(text)?;
        }
        f.write_str("]")
    }
}

impl Serialize for CollidingTypeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.labels.values())
    }
}

/// A reported display collision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub subtype: Subtype,
    pub message: String,
    pub colliding: CollidingTypeSet,
    /// Never auto-resolved on the next submission.
    pub check_on_submit: bool,
}

impl Diagnostic {
    /// Builds a collision diagnostic, substituting the labels into `template`'s `{0}`.
    #[must_use]
    pub fn collision(severity: Severity, template: &str, colliding: CollidingTypeSet) -> Self {
        let message = template.replace("{0}", &colliding.to_string());
        Self {
            severity,
            subtype: Subtype::DisplayCollision,
            message,
            colliding,
            check_on_submit: false,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// A diagnostic together with the entry that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub path: String,
    pub value: String,
    pub kind: DisplayType,
    pub diagnostic: Diagnostic,
}

/// Aggregated results from checking one locale.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepReport {
    pub locale: String,
    pub entries: Vec<EntryReport>,
    pub checked: usize,
    pub warnings: usize,
    pub errors: usize,
    pub duration_ms: u128,
}

impl SweepReport {
    /// Returns true if any collision was reported as an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tallies severities after `entries` is filled in.
    pub fn tally(&mut self) {
        self.errors = self.entries.iter().filter(|e| e.diagnostic.is_error()).count();
        self.warnings = self.entries.len() - self.errors;
    }
}
