//! Pairwise relations between students.
//!
//! Four kinds exist: attraction and repulsion are soft and carry a
//! strength; seatmate binding and seatmate repulsion are hard and always
//! resolve first. The registry hands relations to the assignment engine
//! in ascending [`priority_weight`] order.

mod priority;
mod registry;
mod types;

pub use priority::{priority_weight, priority_weight_by_name, relation_weight, UNRANKED_WEIGHT};
pub use registry::RelationRegistry;
pub use types::{
    Relation, RelationConflict, RelationId, RelationKind, RelationMetadata, RelationStrength,
    RelationUpdate,
};
