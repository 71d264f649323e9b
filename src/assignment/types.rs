//! Assignment outcome records.

use crate::grid::SeatId;
use crate::roster::{Student, StudentId};

/// How many relations the relation phase honored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationStats {
    pub satisfied: usize,
    pub total: usize,
}

/// One placement made during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub student: StudentId,
    pub seat: SeatId,
}

/// Outcome of an assignment run.
///
/// Partial allocation, busy rejection and internal failure are all
/// reported here with `success == false`; none of them is an error
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentResult {
    /// Every student was seated.
    pub success: bool,
    /// Human-readable summary. Names unplaced students on partial failure.
    pub message: String,
    /// Number of students seated.
    pub assigned: usize,
    /// Number of students on the roster.
    pub total: usize,
    /// Students left without a seat. Empty on success.
    pub unassigned: Vec<Student>,
    /// Present when the relation phase ran.
    pub relation_stats: Option<RelationStats>,
    /// Placements in the order they were made.
    pub placements: Vec<Placement>,
}

impl AssignmentResult {
    /// Rejection of a run requested while another one is in flight.
    pub fn busy() -> Self {
        Self {
            message: "assignment already in progress, please wait".to_string(),
            ..Self::default()
        }
    }

    /// Catch-all for an unexpected internal failure.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self {
            message: format!("assignment failed: {reason}"),
            ..Self::default()
        }
    }
}
