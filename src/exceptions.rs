// src/exceptions.rs
//! Territory/exemplar-city pairs that may legitimately share a display name.
//!
//! The table is derived once from the reference locale (every exemplar city
//! whose English name equals a territory name) and augmented with a curated
//! list. It is built before checking starts and only read afterwards.

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::index::{Exclusions, ValueIndex};
use crate::kinds::DisplayType;
use crate::store::ValueStore;
use crate::xpath::XPath;

/// A zone id and the territory code it may share a name with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionPair {
    pub zone: String,
    pub territory: String,
}

impl RegionPair {
    #[must_use]
    pub fn new(zone: &str, territory: &str) -> Self {
        Self { zone: zone.to_string(), territory: territory.to_string() }
    }
}

/// Curated pairs that English data alone does not yield.
pub const DEFAULT_REGION_EXCEPTIONS: &[(&str, &str)] = &[
    ("America/Antigua", "AG"),
    ("Atlantic/Canary", "IC"),
    ("America/Cayman", "KY"),
    ("Indian/Christmas", "CX"),
    ("Indian/Cocos", "CC"),
    ("Indian/Comoro", "KM"),
    ("Atlantic/Faeroe", "FO"),
    ("Pacific/Pitcairn", "PN"),
    ("Atlantic/St_Helena", "SH"),
    ("America/St_Kitts", "KN"),
    ("America/St_Lucia", "LC"),
    ("Europe/Vatican", "VA"),
    ("Pacific/Norfolk", "NF"),
    // City and territory sound too similar in some languages.
    ("Africa/Algiers", "DZ"),
    ("Africa/Tunis", "TN"),
];

#[must_use]
pub fn default_region_pairs() -> Vec<RegionPair> {
    DEFAULT_REGION_EXCEPTIONS
        .iter()
        .map(|(zone, territory)| RegionPair::new(zone, territory))
        .collect()
}

/// Symmetric region-code exception table.
#[derive(Debug, Clone, Default)]
pub struct ExceptionRegistry {
    pairs: HashMap<String, String>,
}

impl ExceptionRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the table from the reference locale plus `fixed`.
    ///
    /// Without a reference locale no exceptions are granted at all.
    #[must_use]
    pub fn build(
        reference: Option<&dyn ValueStore>,
        exclusions: &Exclusions,
        fixed: &[RegionPair],
    ) -> Self {
        let Some(reference) = reference else {
            warn!("reference locale unavailable; no region exceptions granted");
            return Self::empty();
        };
        let mut registry = Self::empty();
        registry.derive_from(reference, exclusions);
        for pair in fixed {
            registry.insert(&pair.zone, &pair.territory);
        }
        debug!("region exception table holds {} codes", registry.len());
        registry
    }

    fn derive_from(&mut self, reference: &dyn ValueStore, exclusions: &Exclusions) {
        let index = ValueIndex::new(reference, exclusions);
        let territory = DisplayType::Territory;
        for path in reference.paths_under(DisplayType::Zone.prefix()) {
            if !path.ends_with("/exemplarCity") {
                continue;
            }
            let (Some(value), Ok(parsed)) = (reference.value(&path), XPath::parse(&path)) else {
                continue;
            };
            let duplicates = index.find_equivalent(&parsed, value, territory, territory.prefix(), None);
            // Assume a single territory shares the city's name.
            let Some(duplicate) = duplicates.first() else {
                continue;
            };
            let zone = parsed.attribute(DisplayType::Zone.region_step(), "type");
            let code = XPath::parse(duplicate)
                .ok()
                .and_then(|p| p.attribute(territory.region_step(), "type").map(str::to_string));
            if let (Some(zone), Some(code)) = (zone, code) {
                self.insert(zone, &code);
            }
        }
    }

    /// Records a pair in both directions.
    pub fn insert(&mut self, zone: &str, territory: &str) {
        self.pairs.insert(zone.to_string(), territory.to_string());
        self.pairs.insert(territory.to_string(), zone.to_string());
    }

    /// The code allowed to share a value with `code`, if any.
    #[must_use]
    pub fn region_exception(&self, code: &str) -> Option<&str> {
        self.pairs.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn is_approved(&self, a: &str, b: &str) -> bool {
        self.region_exception(a) == Some(b)
    }

    /// Number of codes (each pair counts twice).
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn english() -> MemoryStore {
        MemoryStore::from_pairs(
            "en",
            &[
                (r#"//ldml/dates/timeZoneNames/zone[@type="Asia/Singapore"]/exemplarCity"#, "Singapore"),
                (r#"//ldml/localeDisplayNames/territories/territory[@type="SG"]"#, "Singapore"),
                (r#"//ldml/dates/timeZoneNames/zone[@type="Europe/Paris"]/exemplarCity"#, "Paris"),
                (r#"//ldml/localeDisplayNames/territories/territory[@type="FR"]"#, "France"),
            ],
        )
    }

    #[test]
    fn test_derived_and_fixed_pairs() {
        let en = english();
        let registry = ExceptionRegistry::build(Some(&en as &dyn ValueStore), &Exclusions::default(), &default_region_pairs());
        assert_eq!(registry.region_exception("Asia/Singapore"), Some("SG"));
        assert_eq!(registry.region_exception("SG"), Some("Asia/Singapore"));
        assert_eq!(registry.region_exception("America/Antigua"), Some("AG"));
        assert_eq!(registry.region_exception("Europe/Paris"), None);
    }

    #[test]
    fn test_symmetry() {
        let en = english();
        let registry = ExceptionRegistry::build(Some(&en as &dyn ValueStore), &Exclusions::default(), &default_region_pairs());
        for (zone, territory) in DEFAULT_REGION_EXCEPTIONS {
            assert_eq!(registry.region_exception(zone), Some(*territory));
            assert_eq!(registry.region_exception(territory), Some(*zone));
            assert!(registry.is_approved(territory, zone));
        }
    }

    #[test]
    fn test_missing_reference_is_empty() {
        let registry = ExceptionRegistry::build(None, &Exclusions::default(), &default_region_pairs());
        assert!(registry.is_empty());
        assert!(!registry.is_approved("America/Antigua", "AG"));
    }
}
