//! Tag-gated seat regions.
//!
//! A zone reserves its seats for students sharing at least one tag with
//! the zone's required tags. Only set membership and intersection are
//! tested here; no distances are involved.

mod registry;
mod types;

pub use registry::ZoneRegistry;
pub use types::{is_student_eligible, Zone, ZoneId};
