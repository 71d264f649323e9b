//! Seat records, identifiers and grid dimensions.

use crate::error::SeatingError;
use crate::roster::StudentId;
use std::fmt;
use std::str::FromStr;

/// Identity of a seat: its group, column within the group, and row.
///
/// The text form is `seat-{group}-{column}-{row}`.
///
/// # Examples
///
/// ```
/// use u_seating::grid::SeatId;
///
/// let id: SeatId = "seat-1-0-3".parse().unwrap();
/// assert_eq!(id, SeatId::new(1, 0, 3));
/// assert_eq!(id.to_string(), "seat-1-0-3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatId {
    /// Top-level partition of the room. Groups never reach each other.
    pub group: usize,
    /// Column within the group.
    pub column: usize,
    /// Row within the group.
    pub row: usize,
}

impl SeatId {
    pub const fn new(group: usize, column: usize, row: usize) -> Self {
        Self { group, column, row }
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat-{}-{}-{}", self.group, self.column, self.row)
    }
}

impl FromStr for SeatId {
    type Err = SeatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SeatingError::InvalidSeatId(s.to_string());
        let mut parts = s.split('-');
        if parts.next() != Some("seat") {
            return Err(invalid());
        }
        let mut index = || -> Result<usize, SeatingError> {
            parts
                .next()
                .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|p| p.parse().ok())
                .ok_or_else(invalid)
        };
        let group = index()?;
        let column = index()?;
        let row = index()?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self::new(group, column, row))
    }
}

/// A single seat on the grid.
///
/// Invariant: a seat flagged empty never holds an occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub id: SeatId,
    pub(crate) occupant: Option<StudentId>,
    pub(crate) is_empty: bool,
}

impl Seat {
    pub(crate) fn new(id: SeatId) -> Self {
        Self {
            id,
            occupant: None,
            is_empty: false,
        }
    }

    /// Student currently sitting here, if any.
    pub fn occupant(&self) -> Option<StudentId> {
        self.occupant
    }

    /// Whether the seat is flagged empty (excluded from assignment).
    pub fn is_empty(&self) -> bool {
        self.is_empty
    }

    /// Not flagged empty.
    pub fn is_assignable(&self) -> bool {
        !self.is_empty
    }

    /// Assignable and unoccupied.
    pub fn is_free(&self) -> bool {
        !self.is_empty && self.occupant.is_none()
    }
}

/// Distance between two seats.
///
/// Seats in different groups are [`SeatDistance::Unreachable`], which
/// orders after every finite step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatDistance {
    /// Manhattan distance within one group.
    Steps(usize),
    /// Different groups.
    Unreachable,
}

impl SeatDistance {
    pub fn is_unreachable(self) -> bool {
        matches!(self, SeatDistance::Unreachable)
    }

    /// Finite step count, `None` across groups.
    pub fn steps(self) -> Option<usize> {
        match self {
            SeatDistance::Steps(n) => Some(n),
            SeatDistance::Unreachable => None,
        }
    }

    /// `self >= min`, with unreachable satisfying every minimum.
    pub fn at_least(self, min: usize) -> bool {
        self >= SeatDistance::Steps(min)
    }
}

impl fmt::Display for SeatDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatDistance::Steps(n) => write!(f, "{n}"),
            SeatDistance::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// Dimensions of the seating grid.
///
/// # Examples
///
/// ```
/// use u_seating::grid::GridConfig;
///
/// let config = GridConfig::default()
///     .with_group_count(3)
///     .with_columns_per_group(2)
///     .with_seats_per_column(6);
/// assert_eq!(config.seat_count(), 36);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    /// Number of groups.
    pub group_count: usize,
    /// Columns in each group. Two columns form one row of desks.
    pub columns_per_group: usize,
    /// Rows in each column.
    pub seats_per_column: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            group_count: 4,
            columns_per_group: 2,
            seats_per_column: 7,
        }
    }
}

impl GridConfig {
    pub fn with_group_count(mut self, n: usize) -> Self {
        self.group_count = n;
        self
    }

    pub fn with_columns_per_group(mut self, n: usize) -> Self {
        self.columns_per_group = n;
        self
    }

    pub fn with_seats_per_column(mut self, n: usize) -> Self {
        self.seats_per_column = n;
        self
    }

    /// Total number of seats the grid produces.
    pub fn seat_count(&self) -> usize {
        self.group_count * self.columns_per_group * self.seats_per_column
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), SeatingError> {
        for (field, value) in [
            ("group_count", self.group_count),
            ("columns_per_group", self.columns_per_group),
            ("seats_per_column", self.seats_per_column),
        ] {
            if value == 0 {
                return Err(SeatingError::InvalidGrid { field, value });
            }
        }
        Ok(())
    }
}
