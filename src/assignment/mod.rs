//! Constraint-aware seat assignment.
//!
//! A single-pass greedy allocator with randomized tie-breaking. It
//! resolves relations first, then tag-gated zones, then seats everyone
//! left on whatever is free. It does not search for a globally best
//! layout and never backtracks.
//!
//! All randomness comes from an injected [`rand::Rng`]; seeding it (or
//! setting [`AssignmentConfig::seed`]) makes a run reproducible.

mod config;
mod engine;
mod search;
mod types;

pub use config::AssignmentConfig;
pub use engine::AssignmentEngine;
pub use types::{AssignmentResult, Placement, RelationStats};
