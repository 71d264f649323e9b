//! Relation records.

use crate::error::SeatingError;
use crate::roster::StudentId;
use std::fmt;
use std::str::FromStr;

/// Identity of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationId(pub u32);

/// What a relation asks of the pair's seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationKind {
    /// Seat the pair together or near each other.
    Attraction,
    /// Seat the pair far apart.
    Repulsion,
    /// The pair must share a desk.
    SeatmateBinding,
    /// The pair must never share a desk.
    SeatmateRepulsion,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Attraction,
        RelationKind::Repulsion,
        RelationKind::SeatmateBinding,
        RelationKind::SeatmateRepulsion,
    ];

    /// Hard kinds are resolved before every soft kind, whatever their strength.
    pub fn is_hard(self) -> bool {
        matches!(
            self,
            RelationKind::SeatmateBinding | RelationKind::SeatmateRepulsion
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Attraction => "attraction",
            RelationKind::Repulsion => "repulsion",
            RelationKind::SeatmateBinding => "seatmate_binding",
            RelationKind::SeatmateRepulsion => "seatmate_repulsion",
        }
    }

    /// Metadata applied when a relation is created without any.
    pub fn default_metadata(self) -> RelationMetadata {
        match self {
            RelationKind::Attraction => RelationMetadata {
                allow_adjacent: Some(true),
                min_distance: Some(0),
            },
            RelationKind::Repulsion => RelationMetadata {
                allow_adjacent: Some(false),
                min_distance: Some(2),
            },
            RelationKind::SeatmateBinding | RelationKind::SeatmateRepulsion => {
                RelationMetadata::default()
            }
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SeatingError::UnknownRelationKind(s.to_string()))
    }
}

/// How strongly a soft relation should be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RelationStrength {
    High,
    Medium,
    Low,
}

impl RelationStrength {
    pub fn as_str(self) -> &'static str {
        match self {
            RelationStrength::High => "high",
            RelationStrength::Medium => "medium",
            RelationStrength::Low => "low",
        }
    }
}

impl fmt::Display for RelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationStrength {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(RelationStrength::High),
            "medium" => Ok(RelationStrength::Medium),
            "low" => Ok(RelationStrength::Low),
            _ => Err(SeatingError::UnknownRelationStrength(s.to_string())),
        }
    }
}

/// Kind-specific tuning. Unset fields fall back to the kind's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationMetadata {
    /// Attraction: accept seats one step apart when no desk is free.
    pub allow_adjacent: Option<bool>,
    /// Repulsion: smallest acceptable in-group distance.
    pub min_distance: Option<usize>,
}

impl RelationMetadata {
    pub fn with_allow_adjacent(mut self, allow: bool) -> Self {
        self.allow_adjacent = Some(allow);
        self
    }

    pub fn with_min_distance(mut self, d: usize) -> Self {
        self.min_distance = Some(d);
        self
    }

    /// Overlays every field set in `patch`.
    pub fn merge(&mut self, patch: RelationMetadata) {
        if patch.allow_adjacent.is_some() {
            self.allow_adjacent = patch.allow_adjacent;
        }
        if patch.min_distance.is_some() {
            self.min_distance = patch.min_distance;
        }
    }
}

/// A prioritized constraint between two distinct students.
///
/// The pair is unordered: `(a, b)` and `(b, a)` name the same relation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    pub id: RelationId,
    pub first: StudentId,
    pub second: StudentId,
    pub kind: RelationKind,
    pub strength: RelationStrength,
    pub metadata: RelationMetadata,
}

impl Relation {
    /// Whether this relation joins exactly `a` and `b`, in either order.
    pub fn joins(&self, a: StudentId, b: StudentId) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    pub fn involves(&self, student: StudentId) -> bool {
        self.first == student || self.second == student
    }

    /// The other member of the pair, if `student` is one of them.
    pub fn partner_of(&self, student: StudentId) -> Option<StudentId> {
        if self.first == student {
            Some(self.second)
        } else if self.second == student {
            Some(self.first)
        } else {
            None
        }
    }

    pub fn allow_adjacent(&self) -> bool {
        self.metadata
            .allow_adjacent
            .or(self.kind.default_metadata().allow_adjacent)
            .unwrap_or(false)
    }

    pub fn min_distance(&self) -> usize {
        self.metadata
            .min_distance
            .or(self.kind.default_metadata().min_distance)
            .unwrap_or(0)
    }
}

/// Field changes accepted by [`RelationRegistry::update`](super::RelationRegistry::update).
///
/// Metadata is merged into the existing metadata, not replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationUpdate {
    pub kind: Option<RelationKind>,
    pub strength: Option<RelationStrength>,
    pub metadata: Option<RelationMetadata>,
}

/// Two relations on the same pair with different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationConflict {
    pub first: RelationId,
    pub second: RelationId,
}
