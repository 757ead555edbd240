// tests/common/mod.rs - shared snapshot fixtures
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const AG_TERR: &str = r#"//ldml/localeDisplayNames/territories/territory[@type="AG"]"#;
pub const SG_TERR: &str = r#"//ldml/localeDisplayNames/territories/territory[@type="SG"]"#;
pub const ANTIGUA: &str = r#"//ldml/dates/timeZoneNames/zone[@type="America/Antigua"]/exemplarCity"#;
pub const SINGAPORE: &str = r#"//ldml/dates/timeZoneNames/zone[@type="Asia/Singapore"]/exemplarCity"#;
pub const USD_NAME: &str = r#"//ldml/numbers/currencies/currency[@type="USD"]/displayName"#;
pub const USD_SYMBOL: &str = r#"//ldml/numbers/currencies/currency[@type="USD"]/symbol"#;
pub const CAD_NAME: &str = r#"//ldml/numbers/currencies/currency[@type="CAD"]/displayName"#;
pub const FR_LANG: &str = r#"//ldml/localeDisplayNames/languages/language[@type="fr"]"#;
pub const FR_TERR: &str = r#"//ldml/localeDisplayNames/territories/territory[@type="FR"]"#;

/// JSON snapshot where every entry is winning and authored locally.
pub fn snapshot(locale: &str, pairs: &[(&str, &str)]) -> String {
    let entries: Vec<_> = pairs
        .iter()
        .map(|(path, value)| serde_json::json!({ "path": path, "value": value }))
        .collect();
    serde_json::json!({ "locale": locale, "entries": entries }).to_string()
}

pub fn write_snapshot(dir: &Path, locale: &str, pairs: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(format!("{locale}.json"));
    fs::write(&path, snapshot(locale, pairs)).unwrap();
    path
}

/// English data: Singapore city and territory share a name.
pub fn english(dir: &Path) -> PathBuf {
    write_snapshot(dir, "en", &[(SINGAPORE, "Singapore"), (SG_TERR, "Singapore")])
}
