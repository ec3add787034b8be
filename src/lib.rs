//! # Shopping List
//!
//! An in-memory shopping list with the rules a list screen needs: a
//! length-gated add dialog, single-item edit mode and delete, exposed as a
//! store that publishes immutable snapshots to subscribed renderers.
//!
//! ## Core Concepts
//!
//! - **Items**: id, name, positive quantity and an edit-mode flag
//! - **Draft**: text typed into the add dialog, validated on commit
//! - **Actions**: every user intent is an [`Action`] applied by a pure reducer
//! - **Snapshots**: each applied action yields a new [`ListState`]
//!
//! ## Example
//!
//! ```
//! use shopping_list::{ItemId, ListStore};
//!
//! let store = ListStore::default();
//! store.open_dialog()?;
//! store.change_draft_name("Eggs")?;
//! store.change_draft_quantity("12")?;
//! store.commit_add()?;
//!
//! store.begin_edit(ItemId(1))?;
//! store.complete_edit(ItemId(1), "Duck eggs", "6")?;
//!
//! let state = store.snapshot();
//! assert_eq!(state.items[0].to_string(), "Duck eggs x 6");
//! # Ok::<(), shopping_list::ListError>(())
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod subscriptions;
pub mod types;

// Re-exports
pub use action::{Action, ActionKind};
pub use config::{IdStrategy, ListConfig};
pub use error::{DraftField, ListError, Result};
pub use state::{accept_field, apply_action, is_blank, parse_quantity};
pub use store::{ListStore, Outcome};
pub use subscriptions::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId, SubscriptionManager,
};
pub use types::*;
