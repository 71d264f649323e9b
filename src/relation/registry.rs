//! The relation store.

use super::priority::relation_weight;
use super::types::{
    Relation, RelationConflict, RelationId, RelationKind, RelationMetadata, RelationStrength,
    RelationUpdate,
};
use crate::error::SeatingError;
use crate::roster::StudentId;
use std::collections::HashSet;

/// Stores pairwise relations and yields them in resolution order.
///
/// The registry knows nothing about the roster; checking that both
/// students exist is the caller's job (see
/// [`Classroom::add_relation`](crate::classroom::Classroom::add_relation)).
///
/// # Examples
///
/// ```
/// use u_seating::relation::{RelationKind, RelationRegistry, RelationStrength};
/// use u_seating::roster::StudentId;
///
/// let mut registry = RelationRegistry::new();
/// let (a, b) = (StudentId(1), StudentId(2));
/// assert!(registry.add(a, b, RelationKind::Attraction, RelationStrength::High, None).is_some());
/// // Same unordered pair, same kind.
/// assert!(registry.add(b, a, RelationKind::Attraction, RelationStrength::Low, None).is_none());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationRegistry {
    relations: Vec<Relation>,
    next_id: u32,
}

impl RelationRegistry {
    pub fn new() -> Self {
        Self {
            relations: Vec::new(),
            next_id: 1,
        }
    }

    /// Checks whether a relation could be added.
    pub fn validate(
        &self,
        a: StudentId,
        b: StudentId,
        kind: RelationKind,
    ) -> Result<(), SeatingError> {
        if a == b {
            return Err(SeatingError::SelfRelation(a));
        }
        if self.has_relation(a, b, Some(kind)) {
            return Err(SeatingError::DuplicateRelation {
                first: a,
                second: b,
                kind,
            });
        }
        Ok(())
    }

    /// Adds a relation.
    ///
    /// Returns `None` without touching the registry for a self pair or
    /// when the unordered pair already has a relation of this kind.
    /// Missing metadata gets the kind's defaults.
    pub fn add(
        &mut self,
        a: StudentId,
        b: StudentId,
        kind: RelationKind,
        strength: RelationStrength,
        metadata: Option<RelationMetadata>,
    ) -> Option<&Relation> {
        self.validate(a, b, kind).ok()?;

        self.next_id = self.next_id.max(1);
        let relation = Relation {
            id: RelationId(self.next_id),
            first: a,
            second: b,
            kind,
            strength,
            metadata: metadata.unwrap_or_else(|| kind.default_metadata()),
        };
        self.next_id += 1;
        self.relations.push(relation);
        self.relations.last()
    }

    pub fn remove(&mut self, id: RelationId) -> Option<Relation> {
        let index = self.relations.iter().position(|r| r.id == id)?;
        Some(self.relations.remove(index))
    }

    /// Applies kind, strength and metadata changes. Metadata is merged.
    ///
    /// Returns `false` for an unknown id.
    pub fn update(&mut self, id: RelationId, update: RelationUpdate) -> bool {
        let Some(relation) = self.relations.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if let Some(kind) = update.kind {
            relation.kind = kind;
        }
        if let Some(strength) = update.strength {
            relation.strength = strength;
        }
        if let Some(patch) = update.metadata {
            relation.metadata.merge(patch);
        }
        true
    }

    pub fn get(&self, id: RelationId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.id == id)
    }

    /// All relations in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Relations in resolution order (ascending priority weight).
    ///
    /// The sort is stable; equal weights keep insertion order.
    pub fn sorted_by_priority(&self) -> Vec<&Relation> {
        let mut out: Vec<&Relation> = self.relations.iter().collect();
        out.sort_by_key(|r| relation_weight(r));
        out
    }

    /// Relations touching `student`, optionally of one kind.
    pub fn relations_for(&self, student: StudentId, kind: Option<RelationKind>) -> Vec<&Relation> {
        self.relations
            .iter()
            .filter(|r| r.involves(student))
            .filter(|r| kind.map_or(true, |k| r.kind == k))
            .collect()
    }

    /// The other member of every relation touching `student`.
    pub fn partners_of(&self, student: StudentId, kind: Option<RelationKind>) -> Vec<StudentId> {
        self.relations_for(student, kind)
            .into_iter()
            .filter_map(|r| r.partner_of(student))
            .collect()
    }

    pub fn has_relation(&self, a: StudentId, b: StudentId, kind: Option<RelationKind>) -> bool {
        self.relations
            .iter()
            .any(|r| r.joins(a, b) && kind.map_or(true, |k| r.kind == k))
    }

    /// First relation between `a` and `b`, of any kind.
    pub fn relation_between(&self, a: StudentId, b: StudentId) -> Option<&Relation> {
        self.relations.iter().find(|r| r.joins(a, b))
    }

    /// Pairs of relations on the same students with different kinds.
    ///
    /// Conflicts are only reported, never resolved.
    pub fn detect_conflicts(&self) -> Vec<RelationConflict> {
        let mut conflicts = Vec::new();
        for (i, r1) in self.relations.iter().enumerate() {
            for r2 in &self.relations[i + 1..] {
                if r1.joins(r2.first, r2.second) && r1.kind != r2.kind {
                    conflicts.push(RelationConflict {
                        first: r1.id,
                        second: r2.id,
                    });
                }
            }
        }
        conflicts
    }

    /// Drops relations that reference a student outside `valid`.
    pub fn retain_students(&mut self, valid: &HashSet<StudentId>) {
        self.relations
            .retain(|r| valid.contains(&r.first) && valid.contains(&r.second));
    }

    /// Removes every relation and restarts id allocation.
    pub fn clear(&mut self) {
        self.relations.clear();
        self.next_id = 1;
    }

    /// Imports pairs from the legacy "binding" schema.
    ///
    /// Each pair becomes a high-strength attraction. Pairs that would be
    /// rejected by [`RelationRegistry::add`] are skipped. Returns the
    /// number imported.
    pub fn import_legacy_bindings(
        &mut self,
        pairs: impl IntoIterator<Item = (StudentId, StudentId)>,
    ) -> usize {
        pairs
            .into_iter()
            .filter(|&(a, b)| {
                self.add(a, b, RelationKind::Attraction, RelationStrength::High, None)
                    .is_some()
            })
            .count()
    }
}
