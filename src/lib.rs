//! Constraint-aware seat assignment.
//!
//! Places students on a fixed grid of seats while honoring three kinds
//! of constraint:
//!
//! - **Zones**: seats reserved for students carrying one of a set of tags.
//! - **Relations**: prioritized pairwise wishes between two students
//!   (attraction, repulsion, mandatory or forbidden deskmates).
//! - **Capacity**: everyone left over gets any free seat.
//!
//! # Modules
//!
//! - [`grid`]: seat identity, distance and adjacency, the seat store
//! - [`roster`]: students and their tags
//! - [`relation`]: the relation registry and its priority order
//! - [`zone`]: tag-gated seat regions
//! - [`assignment`]: the multi-phase greedy engine
//! - [`classroom`]: the session context tying the stores together
//!
//! # Architecture
//!
//! Stores are plain owned values grouped in a [`classroom::Classroom`];
//! the engine borrows it for the duration of a run and only ever writes
//! seat occupancy. Rendering, spreadsheet and file I/O are left to
//! consumers; enable the `serde` feature to (de)serialize the records.

pub mod assignment;
pub mod classroom;
pub mod error;
pub mod grid;
pub mod random;
pub mod relation;
pub mod roster;
pub mod zone;

pub use error::SeatingError;
