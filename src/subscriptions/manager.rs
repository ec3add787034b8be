//! Subscription manager for broadcasting list changes.

use crate::action::ActionKind;
use crate::types::{ListState, Revision};
use crossbeam_channel::{bounded, Sender, TrySendError};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{
    DropReason, StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId,
};

/// Internal subscription state.
struct Subscription {
    config: SubscriptionConfig,
    sender: Sender<StoreEvent>,
}

impl Subscription {
    /// Try to send an event. On failure, returns why the subscriber must go.
    fn try_send(&self, event: StoreEvent) -> Result<(), DropReason> {
        match self.sender.try_send(event) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(DropReason::BufferOverflow),
            Err(TrySendError::Disconnected(_)) => Err(DropReason::Disconnected),
        }
    }

    fn matches_action(&self, action: ActionKind) -> bool {
        match self.config.filter.actions {
            Some(ref kinds) => kinds.contains(&action),
            None => true,
        }
    }

    fn wants_snapshot(&self, action: ActionKind) -> bool {
        self.config.filter.include_snapshots && self.matches_action(action)
    }

    fn wants_ignored(&self, action: ActionKind) -> bool {
        self.config.filter.include_ignored && self.matches_action(action)
    }
}

/// Manages subscriptions and broadcasts events.
pub struct SubscriptionManager {
    /// Active subscriptions by ID.
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
    /// Counter for generating subscription IDs.
    next_id: AtomicU64,
}

impl SubscriptionManager {
    /// Create a new subscription manager.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Create a new subscription.
    ///
    /// Nothing is sent yet; the store delivers the initial snapshot with
    /// [`send_to`](Self::send_to) when the config asks for it.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size.max(1));

        self.subscriptions
            .write()
            .insert(id, Subscription { config, sender });

        SubscriptionHandle { id, receiver }
    }

    /// Unsubscribe and clean up.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut subs = self.subscriptions.write();
        if let Some(sub) = subs.remove(&id) {
            // Best effort
            let _ = sub.sender.try_send(StoreEvent::Dropped {
                reason: DropReason::Unsubscribed,
            });
        }
    }

    /// Get subscription count.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    /// Get the config for a subscription.
    pub fn get_config(&self, id: SubscriptionId) -> Option<SubscriptionConfig> {
        self.subscriptions.read().get(&id).map(|s| s.config.clone())
    }

    // --- Broadcasting ---

    /// Broadcast the snapshot produced by an applied action.
    pub fn broadcast_snapshot(&self, revision: Revision, action: ActionKind, state: &ListState) {
        let event = StoreEvent::Snapshot {
            revision,
            action: Some(action),
            state: state.clone(),
        };

        self.broadcast(|sub| sub.wants_snapshot(action), event);
    }

    /// Broadcast that an action was ignored.
    pub fn broadcast_ignored(&self, revision: Revision, action: ActionKind, reason: &str) {
        let event = StoreEvent::Ignored {
            revision,
            action,
            reason: reason.to_string(),
        };

        self.broadcast(|sub| sub.wants_ignored(action), event);
    }

    /// Send an event directly to one subscription.
    /// Returns false if the subscription is gone or was dropped.
    pub fn send_to(&self, id: SubscriptionId, event: StoreEvent) -> bool {
        let result = match self.subscriptions.read().get(&id) {
            Some(sub) => sub.try_send(event),
            None => return false,
        };

        match result {
            Ok(()) => true,
            Err(reason) => {
                self.drop_subscribers(vec![(id, reason)]);
                false
            }
        }
    }

    /// Internal broadcast helper. Drops subscribers that fail to receive.
    fn broadcast<F>(&self, filter: F, event: StoreEvent)
    where
        F: Fn(&Subscription) -> bool,
    {
        let mut to_remove = Vec::new();

        {
            let subs = self.subscriptions.read();
            for (id, sub) in subs.iter() {
                if filter(sub) {
                    if let Err(reason) = sub.try_send(event.clone()) {
                        to_remove.push((*id, reason));
                    }
                }
            }
        }

        if !to_remove.is_empty() {
            self.drop_subscribers(to_remove);
        }
    }

    fn drop_subscribers(&self, dropped: Vec<(SubscriptionId, DropReason)>) {
        let mut subs = self.subscriptions.write();
        for (id, reason) in dropped {
            if let Some(sub) = subs.remove(&id) {
                tracing::trace!(subscription = id.0, ?reason, "dropping subscriber");
                // Might fail, the buffer is usually what overflowed
                let _ = sub.sender.try_send(StoreEvent::Dropped { reason });
            }
        }
    }
}

impl Default for SubscriptionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscriptions::SubscriptionFilter;
    use std::time::Duration;

    #[test]
    fn test_subscribe_unsubscribe() {
        let manager = SubscriptionManager::new();

        let handle = manager.subscribe(SubscriptionConfig::default());
        assert_eq!(manager.subscription_count(), 1);

        manager.unsubscribe(handle.id);
        assert_eq!(manager.subscription_count(), 0);

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert!(matches!(
            event,
            StoreEvent::Dropped {
                reason: DropReason::Unsubscribed
            }
        ));
    }

    #[test]
    fn test_broadcast_snapshot() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe(SubscriptionConfig::default());

        let state = ListState::new();
        manager.broadcast_snapshot(Revision(1), ActionKind::OpenDialog, &state);

        match handle.try_recv().unwrap() {
            StoreEvent::Snapshot {
                revision, action, ..
            } => {
                assert_eq!(revision, Revision(1));
                assert_eq!(action, Some(ActionKind::OpenDialog));
            }
            other => panic!("Expected Snapshot event, got {:?}", other),
        }
    }

    #[test]
    fn test_action_filter() {
        let manager = SubscriptionManager::new();
        let config = SubscriptionConfig {
            filter: SubscriptionFilter::actions(vec![ActionKind::CommitAdd]),
            ..Default::default()
        };
        let handle = manager.subscribe(config);

        let state = ListState::new();
        manager.broadcast_snapshot(Revision(1), ActionKind::OpenDialog, &state);
        assert!(handle.try_recv().is_err());

        manager.broadcast_snapshot(Revision(2), ActionKind::CommitAdd, &state);
        assert!(handle.try_recv().is_ok());
    }

    #[test]
    fn test_ignored_needs_opt_in() {
        let manager = SubscriptionManager::new();
        let plain = manager.subscribe(SubscriptionConfig::default());
        let curious = manager.subscribe(SubscriptionConfig {
            filter: SubscriptionFilter::ignored(),
            ..Default::default()
        });

        manager.broadcast_ignored(Revision(0), ActionKind::CommitAdd, "Draft name is blank");

        assert!(plain.try_recv().is_err());
        match curious.try_recv().unwrap() {
            StoreEvent::Ignored { action, reason, .. } => {
                assert_eq!(action, ActionKind::CommitAdd);
                assert_eq!(reason, "Draft name is blank");
            }
            other => panic!("Expected Ignored event, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_slow_subscriber() {
        let manager = SubscriptionManager::new();
        let config = SubscriptionConfig {
            buffer_size: 2,
            ..Default::default()
        };
        let _handle = manager.subscribe(config);

        let state = ListState::new();
        for i in 0..10 {
            manager.broadcast_snapshot(Revision(i), ActionKind::OpenDialog, &state);
        }

        assert_eq!(manager.subscription_count(), 0);
    }

    #[test]
    fn test_drop_disconnected_subscriber() {
        let manager = SubscriptionManager::new();
        let handle = manager.subscribe(SubscriptionConfig::default());
        drop(handle);

        manager.broadcast_snapshot(Revision(1), ActionKind::OpenDialog, &ListState::new());
        assert_eq!(manager.subscription_count(), 0);
    }

    #[test]
    fn test_send_to_unknown() {
        let manager = SubscriptionManager::new();
        let sent = manager.send_to(
            SubscriptionId(42),
            StoreEvent::Dropped {
                reason: DropReason::Unsubscribed,
            },
        );
        assert!(!sent);
    }
}
