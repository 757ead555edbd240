// src/xpath.rs
//! Parsed form of the hierarchical data-store keys.
//!
//! A key such as `//ldml/dates/timeZoneNames/zone[@type="America/Antigua"]/exemplarCity`
//! is a sequence of steps, each an element name plus ordered attribute
//! qualifiers. Attribute values may contain `/`, so keys are scanned rather
//! than split.

use std::fmt;
use std::str::FromStr;

use crate::error::{CheckError, Result};

/// One step of a path: `name[@attr="value"]...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Element {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XPath {
    elements: Vec<Element>,
}

impl XPath {
    /// Parses a raw path.
    ///
    /// # Errors
    /// Returns `MalformedPath` if the path does not start with `//`, has an
    /// empty step, or carries an unterminated qualifier.
    pub fn parse(raw: &str) -> Result<Self> {
        let Some(body) = raw.strip_prefix("//") else {
            return Err(malformed(raw));
        };
        let mut elements = Vec::new();
        let mut rest = body;
        while !rest.is_empty() {
            let (element, tail) = parse_element(rest).ok_or_else(|| malformed(raw))?;
            elements.push(element);
            rest = match tail.strip_prefix('/') {
                Some(t) if !t.is_empty() => t,
                Some(_) => return Err(malformed(raw)),
                None if tail.is_empty() => tail,
                None => return Err(malformed(raw)),
            };
        }
        if elements.is_empty() {
            return Err(malformed(raw));
        }
        Ok(Self { elements })
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`; negative indexes count from the end (`-1` is the leaf).
    #[must_use]
    pub fn element(&self, index: isize) -> Option<&Element> {
        let len = isize::try_from(self.elements.len()).ok()?;
        let resolved = if index < 0 { len + index } else { index };
        usize::try_from(resolved)
            .ok()
            .and_then(|i| self.elements.get(i))
    }

    #[must_use]
    pub fn attribute(&self, index: isize, name: &str) -> Option<&str> {
        self.element(index).and_then(|e| e.attribute(name))
    }

    #[must_use]
    pub fn leaf(&self) -> Option<&Element> {
        self.elements.last()
    }

    /// True if any step carries the attribute.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.elements.iter().any(|e| e.attribute(name).is_some())
    }

    /// The path with its leaf step removed.
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut elements = self.elements.clone();
        elements.pop();
        Self { elements }
    }

    /// The path with every attribute named in `ignorable` removed.
    #[must_use]
    pub fn normalized(&self, ignorable: &[&str]) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|e| Element {
                name: e.name.clone(),
                attributes: e
                    .attributes
                    .iter()
                    .filter(|(k, _)| !ignorable.contains(&k.as_str()))
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { elements }
    }
}

/// Normalizes a raw path string.
///
/// # Errors
/// Returns `MalformedPath` if the path does not parse.
pub fn normalize(raw: &str, ignorable: &[&str]) -> Result<String> {
    Ok(XPath::parse(raw)?.normalized(ignorable).to_string())
}

impl FromStr for XPath {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for XPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            f.write_str(if i == 0 { "//" } else { "/" })?;
            f.write_str(&element.name)?;
            for (k, v) in &element.attributes {
                write!(f, "[@{k}=\"{v}\"]")?;
            }
        }
        Ok(())
    }
}

fn malformed(raw: &str) -> CheckError {
    CheckError::MalformedPath(raw.to_string())
}

/// Parses one step, returning it and the unconsumed input.
fn parse_element(input: &str) -> Option<(Element, &str)> {
    let name_end = input.find(['/', '[']).unwrap_or(input.len());
    let name = &input[..name_end];
    if name.is_empty() {
        return None;
    }
    let mut attributes = Vec::new();
    let mut rest = &input[name_end..];
    while let Some(qualifier) = rest.strip_prefix("[@") {
        let eq = qualifier.find("=\"")?;
        let key = &qualifier[..eq];
        let value_start = &qualifier[eq + 2..];
        let close = value_start.find("\"]")?;
        if key.is_empty() {
            return None;
        }
        attributes.push((key.to_string(), value_start[..close].to_string()));
        rest = &value_start[close + 2..];
    }
    Some((Element { name: name.to_string(), attributes }, rest))
}
