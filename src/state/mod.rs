//! Pure state transitions for the shopping list.
//!
//! Every action maps an old [`ListState`](crate::types::ListState) to a new
//! one. Failures leave nothing half-applied: the caller keeps the old
//! snapshot.

mod fields;
mod operations;

pub use fields::{accept_field, is_blank, parse_quantity};
pub use operations::apply_action;
