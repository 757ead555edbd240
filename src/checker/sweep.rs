// src/checker/sweep.rs
//! Checking a whole locale.
//!
//! Entries are independent reads of the same store, so the sweep fans them
//! out with rayon and collects the diagnostics in entry order.

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use super::{CollisionChecker, Entry};
use crate::error::Result;
use crate::kinds::DisplayType;
use crate::types::{EntryReport, SweepReport};

impl CollisionChecker<'_> {
    /// Every entry of the store that belongs to a display type.
    #[must_use]
    pub fn collect_entries(&self) -> Vec<Entry> {
        DisplayType::ALL
            .iter()
            .flat_map(|kind| self.store.paths_under(kind.prefix()))
            .filter_map(|path| {
                let value = self.store.value(&path)?.to_string();
                Some(Entry { path, value })
            })
            .collect()
    }

    /// Checks every display entry of the store.
    ///
    /// # Errors
    /// Returns the first internal inconsistency hit by any entry.
    pub fn check_store(&self, parallel: bool) -> Result<SweepReport> {
        let entries = self.collect_entries();
        self.check_all(&entries, parallel)
    }

    /// Checks the given entries.
    ///
    /// # Errors
    /// Returns the first internal inconsistency hit by any entry.
    pub fn check_all(&self, entries: &[Entry], parallel: bool) -> Result<SweepReport> {
        let start = Instant::now();
        let outcomes: Vec<Option<EntryReport>> = if parallel {
            entries
                .par_iter()
                .map(|entry| self.report_entry(entry))
                .collect::<Result<_>>()?
        } else {
            entries
                .iter()
                .map(|entry| self.report_entry(entry))
                .collect::<Result<_>>()?
        };

        let mut report = SweepReport {
            locale: self.store.locale_id().to_string(),
            entries: outcomes.into_iter().flatten().collect(),
            checked: entries.len(),
            duration_ms: start.elapsed().as_millis(),
            ..SweepReport::default()
        };
        report.tally();
        info!(
            "{}: {} entries checked, {} errors, {} warnings",
            report.locale, report.checked, report.errors, report.warnings
        );
        Ok(report)
    }

    fn report_entry(&self, entry: &Entry) -> Result<Option<EntryReport>> {
        let Some(diagnostic) = self.check_entry(entry)? else {
            return Ok(None);
        };
        let Some(kind) = DisplayType::classify(&entry.path) else {
            return Ok(None);
        };
        Ok(Some(EntryReport {
            path: entry.path.clone(),
            value: entry.value.clone(),
            kind,
            diagnostic,
        }))
    }
}
