//! Subscriptions for renderers observing the list.
//!
//! A renderer subscribes once and redraws from every
//! [`StoreEvent::Snapshot`] it receives. Subscriptions support:
//! - Filtering by action kind
//! - Opting into ignored (no-op) actions
//! - Bounded buffers with slow-subscriber dropping
//!
//! # Example
//!
//! ```ignore
//! let handle = store.subscribe(SubscriptionConfig::default());
//!
//! loop {
//!     match handle.recv() {
//!         Ok(StoreEvent::Snapshot { state, .. }) => redraw(&state),
//!         Ok(StoreEvent::Ignored { .. }) => {}
//!         Ok(StoreEvent::Dropped { .. }) | Err(_) => break,
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::SubscriptionManager;
pub use types::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionFilter, SubscriptionHandle,
    SubscriptionId,
};
