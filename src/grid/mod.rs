//! Grid topology and the seat store.
//!
//! A seat is identified by `(group, column, row)`. Seats in the same
//! group and row share a desk; seats in different groups are mutually
//! unreachable (an aisle or the room layout separates them).
//!
//! # Key Components
//!
//! - [`SeatId`], [`Seat`]: identity and occupancy
//! - [`distance`], [`are_deskmates`]: pure topology queries
//! - [`SeatChart`]: owns all seats, builds them from a [`GridConfig`]

mod chart;
mod topology;
mod types;

pub use chart::SeatChart;
pub use topology::{are_deskmates, distance};
pub use types::{GridConfig, Seat, SeatDistance, SeatId};
