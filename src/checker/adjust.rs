// src/checker/adjust.rs
//! Type-specific filters applied to the raw candidate set.
//!
//! Every adjustment has the same shape, `(entry, candidates) -> candidates`,
//! and builds a new set rather than editing the one it was given.

use std::collections::BTreeSet;

use log::debug;

use crate::exceptions::ExceptionRegistry;
use crate::index::ValueIndex;
use crate::kinds::DisplayType;
use crate::xpath::XPath;

/// The entry under test and the read-only services adjustments may consult.
pub struct EntryContext<'c> {
    pub path: &'c XPath,
    pub value: &'c str,
    pub kind: DisplayType,
    pub index: ValueIndex<'c>,
    pub exceptions: &'c ExceptionRegistry,
}

pub trait Adjustment: Sync {
    fn adjust(&self, ctx: &EntryContext<'_>, candidates: BTreeSet<String>) -> BTreeSet<String>;
}

/// Territory names and exemplar cities collide with each other unless the
/// pair is a registered exception.
pub struct TerritoryZoneMerge;

/// A currency's symbol may equal its own name.
pub struct CurrencySelfExemption;

const TERRITORY_ZONE: &[&dyn Adjustment] = &[&TerritoryZoneMerge];
const CURRENCY: &[&dyn Adjustment] = &[&CurrencySelfExemption];

/// Adjustments for `kind`, in application order.
#[must_use]
pub fn for_type(kind: DisplayType) -> &'static [&'static dyn Adjustment] {
    match kind {
        DisplayType::Territory | DisplayType::Zone => TERRITORY_ZONE,
        DisplayType::Currency => CURRENCY,
        _ => &[],
    }
}

fn region(kind: DisplayType, path: &XPath) -> Option<&str> {
    path.attribute(kind.region_step(), "type")
}

impl Adjustment for TerritoryZoneMerge {
    fn adjust(&self, ctx: &EntryContext<'_>, candidates: BTreeSet<String>) -> BTreeSet<String> {
        let Some(other) = ctx.kind.partner() else {
            return candidates;
        };
        let own_region = region(ctx.kind, ctx.path);
        let partners = ctx
            .index
            .find_equivalent(ctx.path, ctx.value, other, other.prefix(), None);

        let mut merged = candidates;
        for partner in partners {
            let approved = own_region.is_some_and(|own| {
                XPath::parse(&partner)
                    .ok()
                    .and_then(|p| region(other, &p).map(|r| ctx.exceptions.is_approved(own, r)))
                    .unwrap_or(false)
            });
            if approved {
                debug!("{} shares a name with exempted {partner}", ctx.path);
            } else {
                merged.insert(partner);
            }
        }
        merged
    }
}

impl Adjustment for CurrencySelfExemption {
    fn adjust(&self, ctx: &EntryContext<'_>, candidates: BTreeSet<String>) -> BTreeSet<String> {
        let Some(currency) = ctx.path.attribute(-2, "type") else {
            debug!("{} has no currency code; skipping", ctx.path);
            return BTreeSet::new();
        };
        candidates
            .into_iter()
            .filter(|candidate| {
                XPath::parse(candidate)
                    .ok()
                    .and_then(|p| p.attribute(-2, "type").map(|c| c != currency))
                    .unwrap_or(true)
            })
            .collect()
    }
}
