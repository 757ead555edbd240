// src/kinds.rs
//! Display types: the families of paths that must not share a displayed value.

use serde::Serialize;

/// Attributes that never distinguish two display locations.
pub const DEFAULT_IGNORABLE: &[&str] = &["count", "alt"];

/// Compact decimal patterns keep `count`: the plural slot is significant there.
pub const DECIMAL_IGNORABLE: &[&str] = &["alt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayType {
    Language,
    Script,
    Territory,
    Variant,
    Currency,
    Zone,
    Metazone,
    DecimalFormat,
}

impl DisplayType {
    /// Declaration order; classification is first-match-wins over this list.
    pub const ALL: [Self; 8] = [
        Self::Language,
        Self::Script,
        Self::Territory,
        Self::Variant,
        Self::Currency,
        Self::Zone,
        Self::Metazone,
        Self::DecimalFormat,
    ];

    /// The prefix every path of this type starts with.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Language => "//ldml/localeDisplayNames/languages/language",
            Self::Script => "//ldml/localeDisplayNames/scripts/script",
            Self::Territory => "//ldml/localeDisplayNames/territories/territory",
            Self::Variant => "//ldml/localeDisplayNames/variants/variant",
            Self::Currency => "//ldml/numbers/currencies/currency",
            Self::Zone => "//ldml/dates/timeZoneNames/zone",
            Self::Metazone => "//ldml/dates/timeZoneNames/metazone",
            Self::DecimalFormat => "//ldml/numbers/decimalFormats",
        }
    }

    #[must_use]
    pub fn ignorable_attributes(self) -> &'static [&'static str] {
        match self {
            Self::DecimalFormat => DECIMAL_IGNORABLE,
            _ => DEFAULT_IGNORABLE,
        }
    }

    /// Territory names and exemplar cities are compared against each other.
    #[must_use]
    pub fn partner(self) -> Option<Self> {
        match self {
            Self::Territory => Some(Self::Zone),
            Self::Zone => Some(Self::Territory),
            _ => None,
        }
    }

    /// Index (from the end) of the step whose `type` attribute names the region.
    #[must_use]
    pub fn region_step(self) -> isize {
        match self {
            Self::Zone => -2,
            _ => -1,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::Script => "script",
            Self::Territory => "territory",
            Self::Variant => "variant",
            Self::Currency => "currency",
            Self::Zone => "zone",
            Self::Metazone => "metazone",
            Self::DecimalFormat => "decimal-format",
        }
    }

    /// Returns the first type whose prefix starts `path`.
    #[must_use]
    pub fn classify(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| path.starts_with(t.prefix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            DisplayType::classify(r#"//ldml/localeDisplayNames/languages/language[@type="fr"]"#),
            Some(DisplayType::Language)
        );
        assert_eq!(
            DisplayType::classify(r#"//ldml/dates/timeZoneNames/metazone[@type="Alaska"]/long/generic"#),
            Some(DisplayType::Metazone)
        );
        assert_eq!(
            DisplayType::classify(r#"//ldml/dates/timeZoneNames/zone[@type="Europe/Paris"]/exemplarCity"#),
            Some(DisplayType::Zone)
        );
        assert_eq!(DisplayType::classify("//ldml/characters/exemplarCharacters"), None);
    }

    #[test]
    fn test_prefixes_do_not_nest() {
        for a in DisplayType::ALL {
            for b in DisplayType::ALL {
                if a != b {
                    assert!(!a.prefix().starts_with(b.prefix()), "{a:?} nests in {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_decimal_keeps_count() {
        assert!(!DisplayType::DecimalFormat.ignorable_attributes().contains(&"count"));
        assert!(DisplayType::Currency.ignorable_attributes().contains(&"count"));
    }
}
