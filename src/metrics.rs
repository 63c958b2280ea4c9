//! Identifier-sanitization accounting.

use indexmap::IndexMap;

use crate::types::Asin;

/// A cleaned id claimed by more than one distinct raw id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsinCollision {
    /// Cleaned identifier shared by several inputs.
    pub cleaned: Asin,
    /// Distinct raw identifiers that mapped onto `cleaned`, in input order.
    pub raw_ids: Vec<String>,
}

/// Uniqueness accounting for one id-sanitization pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsinCollisionReport {
    /// Total (raw, cleaned) pairs inspected.
    pub total: usize,
    /// Pairs whose cleaned id came out empty.
    pub empty: usize,
    /// Pairs whose cleaned id differs from the raw id.
    pub changed: usize,
    /// Cleaned ids claimed by more than one distinct raw id.
    pub collisions: Vec<AsinCollision>,
}

/// Compare raw ids against their cleaned forms.
///
/// A collision means sanitization mapped distinct products onto one id —
/// downstream indexing would silently merge them, so callers should treat a
/// non-empty `collisions` list as a data-integrity signal. Empty cleaned ids
/// are tallied separately and never reported as collisions.
pub fn asin_collision_report<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> AsinCollisionReport {
    let mut report = AsinCollisionReport::default();
    let mut owners_by_cleaned: IndexMap<Asin, Vec<String>> = IndexMap::new();

    for (raw, cleaned) in pairs {
        report.total += 1;
        if cleaned.is_empty() {
            report.empty += 1;
        }
        if raw != cleaned {
            report.changed += 1;
        }
        let owners = owners_by_cleaned.entry(cleaned.to_string()).or_default();
        if !owners.iter().any(|owner| owner == raw) {
            owners.push(raw.to_string());
        }
    }

    report.collisions = owners_by_cleaned
        .into_iter()
        .filter(|(cleaned, owners)| !cleaned.is_empty() && owners.len() > 1)
        .map(|(cleaned, raw_ids)| AsinCollision { cleaned, raw_ids })
        .collect();
    report
}
