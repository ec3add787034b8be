//! Subscription types for snapshot delivery.

use crate::action::ActionKind;
use crate::types::{ListState, Revision};
use serde::{Deserialize, Serialize};

/// Configuration for a subscription.
#[derive(Clone, Debug)]
pub struct SubscriptionConfig {
    /// Max buffered events before dropping subscriber.
    /// Default: 64
    pub buffer_size: usize,

    /// Deliver the current snapshot right after subscribing.
    /// Default: true
    pub send_initial: bool,

    /// Filter criteria.
    pub filter: SubscriptionFilter,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64,
            send_initial: true,
            filter: SubscriptionFilter::default(),
        }
    }
}

/// Filter criteria for subscriptions.
#[derive(Clone, Debug)]
pub struct SubscriptionFilter {
    /// Only these action kinds trigger a snapshot (None = all kinds).
    pub actions: Option<Vec<ActionKind>>,

    /// Include a snapshot after every applied action.
    pub include_snapshots: bool,

    /// Include events for actions that changed nothing.
    pub include_ignored: bool,
}

impl Default for SubscriptionFilter {
    fn default() -> Self {
        Self::snapshots()
    }
}

impl SubscriptionFilter {
    /// Every new snapshot, nothing else. What a renderer needs.
    pub fn snapshots() -> Self {
        Self {
            actions: None,
            include_snapshots: true,
            include_ignored: false,
        }
    }

    /// Snapshots caused by specific action kinds.
    pub fn actions(kinds: Vec<ActionKind>) -> Self {
        Self {
            actions: Some(kinds),
            ..Self::snapshots()
        }
    }

    /// Only rejected and no-op actions.
    pub fn ignored() -> Self {
        Self {
            actions: None,
            include_snapshots: false,
            include_ignored: true,
        }
    }

    pub fn all() -> Self {
        Self {
            actions: None,
            include_snapshots: true,
            include_ignored: true,
        }
    }
}

/// Events emitted by subscriptions.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The store moved to a new snapshot (or, for the initial event, the
    /// snapshot current at subscribe time).
    Snapshot {
        revision: Revision,
        /// None for the initial snapshot.
        action: Option<ActionKind>,
        state: ListState,
    },

    /// An action left the store unchanged.
    Ignored {
        revision: Revision,
        action: ActionKind,
        reason: String,
    },

    /// Subscription was dropped.
    Dropped { reason: DropReason },
}

/// Why a subscription was dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Receiver went away.
    Disconnected,
    /// Explicitly unsubscribed.
    Unsubscribed,
}

/// Unique identifier for a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Handle to manage a subscription.
pub struct SubscriptionHandle {
    pub id: SubscriptionId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<StoreEvent>,
}

impl SubscriptionHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<StoreEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<StoreEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<StoreEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }

    /// Everything buffered right now, without blocking.
    pub fn drain(&self) -> Vec<StoreEvent> {
        self.receiver.try_iter().collect()
    }
}
