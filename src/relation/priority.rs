//! Resolution order of relations.
//!
//! Lower weight resolves earlier. Hard kinds share the most urgent
//! class regardless of strength; soft kinds are ordered by strength
//! first, with repulsion ahead of attraction inside a strength tier.

use super::types::{Relation, RelationKind, RelationStrength};

/// Weight for combinations with no table entry. Resolved last.
pub const UNRANKED_WEIGHT: u32 = 999;

/// Priority weight of a `(strength, kind)` combination.
///
/// # Examples
///
/// ```
/// use u_seating::relation::{priority_weight, RelationKind, RelationStrength};
///
/// let hard = priority_weight(RelationStrength::Low, RelationKind::SeatmateBinding);
/// let soft = priority_weight(RelationStrength::High, RelationKind::Repulsion);
/// assert!(hard < soft);
/// ```
pub fn priority_weight(strength: RelationStrength, kind: RelationKind) -> u32 {
    use RelationKind::*;
    use RelationStrength::*;

    match (strength, kind) {
        (_, SeatmateBinding | SeatmateRepulsion) => 0,
        (High, Repulsion) => 1,
        (High, Attraction) => 2,
        (Medium, Repulsion) => 3,
        (Medium, Attraction) => 4,
        (Low, Repulsion) => 5,
        (Low, Attraction) => 6,
    }
}

/// Priority weight of a relation.
pub fn relation_weight(relation: &Relation) -> u32 {
    priority_weight(relation.strength, relation.kind)
}

/// Priority weight from persisted names, as found in imported data.
///
/// Names that do not parse get [`UNRANKED_WEIGHT`].
pub fn priority_weight_by_name(strength: &str, kind: &str) -> u32 {
    match (
        strength.parse::<RelationStrength>(),
        kind.parse::<RelationKind>(),
    ) {
        (Ok(strength), Ok(kind)) => priority_weight(strength, kind),
        _ => UNRANKED_WEIGHT,
    }
}
