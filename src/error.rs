//! Crate error type.

use crate::grid::SeatId;
use crate::relation::RelationKind;
use crate::roster::StudentId;
use thiserror::Error;

/// Errors reported by the seating stores and the assignment engine.
///
/// Store operations that only "fail quietly" (returning `None` or
/// `false`) keep that shape; this type carries the reason where a caller
/// asks for one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// Seat identifier text is not of the form `seat-{group}-{column}-{row}`.
    #[error("invalid seat id `{0}`")]
    InvalidSeatId(String),

    /// A grid dimension is zero.
    #[error("grid {field} must be at least 1, got {value}")]
    InvalidGrid { field: &'static str, value: usize },

    /// Relation kind text does not name a known kind.
    #[error("unknown relation kind `{0}`")]
    UnknownRelationKind(String),

    /// Relation strength text does not name a known strength.
    #[error("unknown relation strength `{0}`")]
    UnknownRelationStrength(String),

    /// A relation references a student that is not on the roster.
    #[error("student {0} does not exist")]
    MissingStudent(StudentId),

    /// A relation was requested between a student and themself.
    #[error("student {0} cannot be related to themself")]
    SelfRelation(StudentId),

    /// The same unordered pair already carries a relation of this kind.
    #[error("{kind} relation between {first} and {second} already exists")]
    DuplicateRelation {
        first: StudentId,
        second: StudentId,
        kind: RelationKind,
    },

    /// The seat store refused a placement the engine believed was legal.
    #[error("seat {seat} rejected student {student}")]
    SeatRejected { seat: SeatId, student: StudentId },
}
