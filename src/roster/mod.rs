//! Students and the roster that owns them.

mod store;
mod types;

pub use store::StudentRoster;
pub use types::{Student, StudentId, TagId};
