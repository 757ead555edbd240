// src/checker/mod.rs
//! Display-collision evaluation for single entries.
//!
//! For one `(path, value)` entry the checker classifies the path, looks up
//! other display locations holding an equivalent value, applies the
//! type-specific adjustments, labels what is left and decides severity.

pub mod adjust;
pub mod sweep;

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::error::{CheckError, Result};
use crate::exceptions::ExceptionRegistry;
use crate::header::{string_id, PathHeaderService};
use crate::index::{Exclusions, ValueIndex};
use crate::kinds::DisplayType;
use crate::phase::{Phase, Severity};
use crate::store::{ValueStore, NO_INHERITANCE_MARKER};
use crate::types::{CollidingLabel, CollidingTypeSet, Diagnostic};
use crate::xpath::XPath;

use adjust::EntryContext;

pub const SUBMISSION_MESSAGE: &str =
    "WARNING: Can't have same translation as {0}. This will become an error during the Vetting phase.";
pub const COLLISION_MESSAGE: &str = "Can't have same translation as {0}";
pub const NUMBER_PATTERN_MESSAGE: &str = "Can't have same number pattern as {0}";

/// Compact decimal slot meaning "no abbreviation for this magnitude".
const UNUSED_DECIMAL_SLOT: &str = "0";

const STANDARD_SHORT: &str = "standard-short";
const GENERIC_SHORT: &str = "generic-short";

/// One data-store entry to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub value: String,
}

impl Entry {
    #[must_use]
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self { path: path.into(), value: value.into() }
    }
}

/// Where to look for colliding values.
struct SearchPlan {
    prefix: String,
    /// Compact decimal patterns only compare against sibling magnitudes.
    sibling_of: Option<XPath>,
}

/// Evaluates entries of one locale against its store.
pub struct CollisionChecker<'a> {
    store: &'a dyn ValueStore,
    headers: &'a dyn PathHeaderService,
    exceptions: &'a ExceptionRegistry,
    exclusions: &'a Exclusions,
    phase: Phase,
}

impl<'a> CollisionChecker<'a> {
    #[must_use]
    pub fn new(
        store: &'a dyn ValueStore,
        headers: &'a dyn PathHeaderService,
        exceptions: &'a ExceptionRegistry,
        exclusions: &'a Exclusions,
        phase: Phase,
    ) -> Self {
        Self { store, headers, exceptions, exclusions, phase }
    }

    /// Checks one entry.
    ///
    /// # Errors
    /// Returns error only on internal inconsistencies (an unparseable search
    /// prefix, or a colliding path with no header). Malformed data yields
    /// `Ok(None)`.
    pub fn check_entry(&self, entry: &Entry) -> Result<Option<Diagnostic>> {
        self.check(&entry.path, &entry.value)
    }

    /// Checks one `(path, value)` pair.
    ///
    /// # Errors
    /// See [`Self::check_entry`].
    pub fn check(&self, path: &str, value: &str) -> Result<Option<Diagnostic>> {
        if value.is_empty() || value == NO_INHERITANCE_MARKER || self.exclusions.matches(path) {
            return Ok(None);
        }
        let Some(kind) = DisplayType::classify(path) else {
            return Ok(None);
        };
        let parsed = match XPath::parse(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("skipping {kind:?} entry: {e}");
                return Ok(None);
            }
        };
        let Some(plan) = plan_search(kind, &parsed, value)? else {
            return Ok(None);
        };

        let ctx = EntryContext {
            path: &parsed,
            value,
            kind,
            index: ValueIndex::new(self.store, self.exclusions),
            exceptions: self.exceptions,
        };
        let candidates = self.find_candidates(&ctx, &plan);
        let candidates = adjust::for_type(kind)
            .iter()
            .fold(candidates, |acc, adjustment| adjustment.adjust(&ctx, acc));
        if candidates.is_empty() {
            return Ok(None);
        }

        let colliding = self.label(&candidates)?;
        let severity = if self.is_lenient_zone_pair(path, &colliding) {
            Severity::Warning
        } else {
            self.phase.severity()
        };
        let template = match kind {
            DisplayType::DecimalFormat => NUMBER_PATTERN_MESSAGE,
            _ if self.phase == Phase::Submission => SUBMISSION_MESSAGE,
            _ => COLLISION_MESSAGE,
        };
        Ok(Some(Diagnostic::collision(severity, template, colliding)))
    }

    fn find_candidates(&self, ctx: &EntryContext<'_>, plan: &SearchPlan) -> BTreeSet<String> {
        match &plan.sibling_of {
            Some(own) => {
                let matcher = |candidate: &XPath| is_sibling_pattern(own, candidate);
                ctx.index
                    .find_exact(ctx.path, ctx.value, ctx.kind, &plan.prefix, Some(&matcher))
            }
            None => ctx
                .index
                .find_equivalent(ctx.path, ctx.value, ctx.kind, &plan.prefix, None),
        }
    }

    /// Labels every candidate; a candidate without a header is an index fault.
    fn label(&self, candidates: &BTreeSet<String>) -> Result<CollidingTypeSet> {
        let mut labels = CollidingTypeSet::new();
        for candidate in candidates {
            let header = self
                .headers
                .header(candidate)
                .ok_or_else(|| CheckError::Unlabelled(candidate.clone()))?;
            let text = if self.phase == Phase::FinalTesting {
                header.header_code()
            } else {
                format!(
                    "<a href=\"v#/{}/{}/{}\">{}</a>",
                    self.store.locale_id(),
                    header.page_id,
                    string_id(candidate),
                    header.header_code()
                )
            };
            labels.insert(CollidingLabel { text, path: candidate.clone(), header });
        }
        Ok(labels)
    }

    /// Standard and generic short names of the same zone may coincide.
    fn is_lenient_zone_pair(&self, path: &str, colliding: &CollidingTypeSet) -> bool {
        if !path.contains("timeZoneNames") {
            return false;
        }
        let (Some(sole), Some(own)) = (colliding.sole(), self.headers.header(path)) else {
            return false;
        };
        if own.header != sole.header.header {
            return false;
        }
        let codes: HashSet<&str> = [own.code.as_str(), sole.header.code.as_str()].into();
        codes.len() == 2 && codes.contains(STANDARD_SHORT) && codes.contains(GENERIC_SHORT)
    }
}

/// Decides the search prefix, or `None` if the entry is exempt from checking.
fn plan_search(kind: DisplayType, path: &XPath, value: &str) -> Result<Option<SearchPlan>> {
    if kind != DisplayType::DecimalFormat {
        return Ok(Some(SearchPlan { prefix: kind.prefix().to_string(), sibling_of: None }));
    }
    if !path.has_attribute("count") || value == UNUSED_DECIMAL_SLOT {
        return Ok(None);
    }
    let prefix = path.parent().to_string();
    if XPath::parse(&prefix).is_err() {
        return Err(CheckError::BadPrefix { path: path.to_string(), prefix });
    }
    Ok(Some(SearchPlan { prefix, sibling_of: Some(path.clone()) }))
}

/// A `pattern` next to `own` for a different numeric magnitude.
fn is_sibling_pattern(own: &XPath, candidate: &XPath) -> bool {
    let (Some(own_leaf), Some(leaf)) = (own.leaf(), candidate.leaf()) else {
        return false;
    };
    let n = own.len();
    if candidate.len() != n || own.elements()[..n - 1] != candidate.elements()[..n - 1] {
        return false;
    }
    let Some(magnitude) = leaf.attribute("type") else {
        return false;
    };
    leaf.name == "pattern"
        && !magnitude.is_empty()
        && magnitude.bytes().all(|b| b.is_ascii_digit())
        && own_leaf.attribute("type") != Some(magnitude)
}
