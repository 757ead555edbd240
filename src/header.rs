// src/header.rs
//! Human-readable locations for paths, used to name colliding entries.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::kinds::DisplayType;
use crate::xpath::XPath;

/// Where a path is shown to data submitters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathHeader {
    /// Survey page the path lives on.
    pub page_id: String,
    /// Section within the page (e.g. the zone or currency).
    pub header: String,
    /// Readable sub-code within the section (e.g. `standard-short`).
    pub code: String,
}

impl PathHeader {
    #[must_use]
    pub fn new(page_id: &str, header: impl Into<String>, code: impl Into<String>) -> Self {
        Self { page_id: page_id.to_string(), header: header.into(), code: code.into() }
    }

    /// `header: code`
    #[must_use]
    pub fn header_code(&self) -> String {
        format!("{}: {}", self.header, self.code)
    }
}

/// Maps paths to their display location.
pub trait PathHeaderService: Sync {
    fn header(&self, path: &str) -> Option<PathHeader>;
}

/// Stable 16-hex-digit id of a path, used in survey links.
#[must_use]
pub fn string_id(path: &str) -> String {
    let digest = Sha256::digest(path.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    format!("{:016x}", u64::from_be_bytes(bytes))
}

/// Derives headers from path structure for the display types.
#[derive(Debug, Clone, Copy, Default)]
pub struct RulePathHeader;

impl PathHeaderService for RulePathHeader {
    fn header(&self, path: &str) -> Option<PathHeader> {
        let kind = DisplayType::classify(path)?;
        let parsed = XPath::parse(path).ok()?;
        match kind {
            DisplayType::Language => code_header(&parsed, "Languages", "Language"),
            DisplayType::Script => code_header(&parsed, "Scripts", "Script"),
            DisplayType::Territory => code_header(&parsed, "Territories", "Territory"),
            DisplayType::Variant => code_header(&parsed, "Variants", "Variant"),
            DisplayType::Currency => currency_header(&parsed),
            DisplayType::Zone => zone_header(&parsed, "zone", "Timezones"),
            DisplayType::Metazone => zone_header(&parsed, "metazone", "Metazones"),
            DisplayType::DecimalFormat => decimal_header(&parsed),
        }
    }
}

fn code_header(path: &XPath, page: &str, header: &str) -> Option<PathHeader> {
    let leaf = path.leaf()?;
    let code = with_qualifiers(leaf.attribute("type")?.to_string(), leaf.attribute("alt"), None);
    Some(PathHeader::new(page, header, code))
}

fn currency_header(path: &XPath) -> Option<PathHeader> {
    let currency = path.attribute(-2, "type")?;
    let leaf = path.leaf()?;
    let base = match leaf.name.as_str() {
        "displayName" => "name",
        other => other,
    };
    let code = with_qualifiers(base.to_string(), leaf.attribute("alt"), leaf.attribute("count"));
    Some(PathHeader::new("Currencies", currency, code))
}

fn zone_header(path: &XPath, element: &str, page: &str) -> Option<PathHeader> {
    let zone = path
        .elements()
        .iter()
        .find(|e| e.name == element)?
        .attribute("type")?;
    let leaf = path.leaf()?;
    let code = match leaf.name.as_str() {
        "exemplarCity" => "city".to_string(),
        "generic" | "standard" | "daylight" => {
            let width = &path.element(-2)?.name;
            format!("{}-{width}", leaf.name)
        }
        _ => return None,
    };
    Some(PathHeader::new(page, zone, code))
}

fn decimal_header(path: &XPath) -> Option<PathHeader> {
    let leaf = path.leaf()?;
    if leaf.name != "pattern" {
        return None;
    }
    let length = find_type(path, "decimalFormatLength").unwrap_or("long");
    let format = find_type(path, "decimalFormat").unwrap_or("standard");
    let code = with_qualifiers(leaf.attribute("type")?.to_string(), leaf.attribute("alt"), leaf.attribute("count"));
    Some(PathHeader::new("Compact_Decimal", format!("{length}-{format}"), code))
}

fn find_type<'a>(path: &'a XPath, element: &str) -> Option<&'a str> {
    path.elements()
        .iter()
        .find(|e| e.name == element)
        .and_then(|e| e.attribute("type"))
}

fn with_qualifiers(base: String, alt: Option<&str>, count: Option<&str>) -> String {
    let mut code = base;
    for q in [count, alt].into_iter().flatten() {
        code.push('-');
        code.push_str(q);
    }
    code
}
