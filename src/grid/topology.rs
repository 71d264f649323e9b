//! Pure distance and adjacency queries over seat identities.
//!
//! Within a group, distance is the Manhattan distance over
//! `(column, row)`. Groups are mutually unreachable.

use super::types::{SeatDistance, SeatId};

/// Distance between two seats.
///
/// # Examples
///
/// ```
/// use u_seating::grid::{distance, SeatDistance, SeatId};
///
/// let a = SeatId::new(0, 0, 0);
/// assert_eq!(distance(a, a), SeatDistance::Steps(0));
/// assert_eq!(distance(a, SeatId::new(0, 1, 2)), SeatDistance::Steps(3));
/// assert_eq!(distance(a, SeatId::new(1, 0, 0)), SeatDistance::Unreachable);
/// ```
pub fn distance(a: SeatId, b: SeatId) -> SeatDistance {
    if a == b {
        return SeatDistance::Steps(0);
    }
    if a.group != b.group {
        return SeatDistance::Unreachable;
    }
    SeatDistance::Steps(a.column.abs_diff(b.column) + a.row.abs_diff(b.row))
}

/// Two seats share a desk: same group and same row.
pub fn are_deskmates(a: SeatId, b: SeatId) -> bool {
    a.group == b.group && a.row == b.row
}
