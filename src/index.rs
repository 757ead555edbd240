// src/index.rs
//! Reverse lookup from a value to the other display locations holding it.

use std::collections::BTreeSet;

use log::debug;
use regex::Regex;

use crate::error::Result;
use crate::kinds::DisplayType;
use crate::store::{ValueStore, CODE_FALLBACK_ID};
use crate::xpath::XPath;

/// Raw-path patterns that are never compared (narrow forms are expected to clash).
pub const DEFAULT_EXCLUSIONS: &[&str] = &[r#"\[@alt="narrow"\]"#];

/// Predicate restricting candidate paths beyond the prefix.
pub type PathMatcher<'m> = &'m (dyn Fn(&XPath) -> bool + Sync);

/// Compiled always-excluded path patterns.
#[derive(Debug, Clone)]
pub struct Exclusions {
    patterns: Vec<Regex>,
}

impl Exclusions {
    /// Compiles the given patterns.
    ///
    /// # Errors
    /// Returns error if a pattern is not a valid regex.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Regex::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(path))
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        let patterns = DEFAULT_EXCLUSIONS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect();
        Self { patterns }
    }
}

/// Read-only value index over one store.
#[derive(Clone, Copy)]
pub struct ValueIndex<'a> {
    store: &'a dyn ValueStore,
    exclusions: &'a Exclusions,
}

impl<'a> ValueIndex<'a> {
    #[must_use]
    pub fn new(store: &'a dyn ValueStore, exclusions: &'a Exclusions) -> Self {
        Self { store, exclusions }
    }

    /// Normalized paths under `prefix` whose value is equivalent to `value`,
    /// excluding `path` itself.
    #[must_use]
    pub fn find_equivalent(
        &self,
        path: &XPath,
        value: &str,
        kind: DisplayType,
        prefix: &str,
        matcher: Option<PathMatcher<'_>>,
    ) -> BTreeSet<String> {
        self.collect(path, value, kind, prefix, matcher, false)
    }

    /// Like [`Self::find_equivalent`], but only byte-identical values count.
    #[must_use]
    pub fn find_exact(
        &self,
        path: &XPath,
        value: &str,
        kind: DisplayType,
        prefix: &str,
        matcher: Option<PathMatcher<'_>>,
    ) -> BTreeSet<String> {
        self.collect(path, value, kind, prefix, matcher, true)
    }

    fn collect(
        &self,
        path: &XPath,
        value: &str,
        kind: DisplayType,
        prefix: &str,
        matcher: Option<PathMatcher<'_>>,
        exact: bool,
    ) -> BTreeSet<String> {
        let raw_path = path.to_string();
        // Only the winning value of the entry under test can collide.
        if !self.store.is_winning(&raw_path) {
            debug!("{raw_path} is not winning; no candidates");
            return BTreeSet::new();
        }

        let ignorable = kind.ignorable_attributes();
        let own = path.normalized(ignorable).to_string();
        self.store
            .paths_with_value(value, prefix)
            .into_iter()
            .filter(|candidate| !self.exclusions.matches(candidate))
            .filter(|candidate| kind != DisplayType::Currency || !self.is_code_fallback(candidate))
            .filter(|candidate| !exact || self.store.value(candidate) == Some(value))
            .filter_map(|candidate| match XPath::parse(&candidate) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    debug!("skipping unparseable candidate: {e}");
                    None
                }
            })
            .filter(|parsed| matcher.map_or(true, |m| m(parsed)))
            .map(|parsed| parsed.normalized(ignorable).to_string())
            .filter(|normalized| *normalized != own)
            .collect()
    }

    fn is_code_fallback(&self, path: &str) -> bool {
        self.store.source_locale(path) == Some(CODE_FALLBACK_ID)
    }
}
