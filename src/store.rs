//! The list store: current snapshot, action dispatch and change fan-out.

use crate::action::Action;
use crate::config::ListConfig;
use crate::error::{ListError, Result};
use crate::state::apply_action;
use crate::subscriptions::{
    StoreEvent, SubscriptionConfig, SubscriptionHandle, SubscriptionId, SubscriptionManager,
};
use crate::types::{ItemId, ListState, Revision};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tracing::{debug, warn};

/// What a dispatched action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A new snapshot was published.
    Applied { revision: Revision },
    /// The action was a no-op; the snapshot is unchanged.
    Ignored { reason: ListError },
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// The published snapshot and its revision, swapped together.
struct Head {
    revision: Revision,
    state: Arc<ListState>,
}

/// In-memory shopping list.
///
/// Owns the current [`ListState`] and replaces it wholesale on every
/// applied action. Readers get a cheap `Arc` of the snapshot; renderers
/// subscribe to receive each new one.
pub struct ListStore {
    config: ListConfig,

    head: RwLock<Head>,

    subscriptions: SubscriptionManager,

    /// Serialises dispatches and subscribe-with-initial-snapshot.
    write_lock: Mutex<()>,
}

impl ListStore {
    /// Create an empty store.
    pub fn new(config: ListConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ListConfig) -> Self {
        Self {
            config,
            head: RwLock::new(Head {
                revision: Revision::default(),
                state: Arc::new(ListState::new()),
            }),
            subscriptions: SubscriptionManager::new(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<ListState> {
        Arc::clone(&self.head.read().state)
    }

    /// Number of actions applied so far.
    pub fn revision(&self) -> Revision {
        self.head.read().revision
    }

    /// Current snapshot rendered as JSON.
    pub fn snapshot_json(&self) -> Result<String> {
        let state = self.snapshot();
        Ok(serde_json::to_string(&*state)?)
    }

    // --- Dispatch ---

    /// Apply an action and publish the resulting snapshot.
    ///
    /// Silent failures (over-long input, blank draft, unknown id, no open
    /// editor) come back as [`Outcome::Ignored`]. Anything else, in practice
    /// an unparseable quantity, is returned as an error. Either way the
    /// snapshot is left exactly as it was.
    pub fn dispatch(&self, action: Action) -> Result<Outcome> {
        let _lock = self.write_lock.lock();

        let kind = action.kind();
        let (revision, current) = {
            let head = self.head.read();
            (head.revision, Arc::clone(&head.state))
        };

        match apply_action(&current, &self.config, action) {
            Ok(next) => {
                let revision = revision.next();
                let next = Arc::new(next);
                {
                    let mut head = self.head.write();
                    head.revision = revision;
                    head.state = Arc::clone(&next);
                }

                debug!(action = %kind, revision = revision.0, items = next.len(), "applied");
                self.subscriptions.broadcast_snapshot(revision, kind, &next);
                Ok(Outcome::Applied { revision })
            }
            Err(reason) if reason.is_silent() => {
                debug!(action = %kind, %reason, "ignored");
                self.subscriptions
                    .broadcast_ignored(revision, kind, &reason.to_string());
                Ok(Outcome::Ignored { reason })
            }
            Err(err) => {
                warn!(action = %kind, error = %err, "rejected");
                self.subscriptions
                    .broadcast_ignored(revision, kind, &err.to_string());
                Err(err)
            }
        }
    }

    // --- Add dialog ---

    pub fn open_dialog(&self) -> Result<Outcome> {
        self.dispatch(Action::OpenDialog)
    }

    /// Close the dialog, keeping the draft text.
    pub fn dismiss_dialog(&self) -> Result<Outcome> {
        self.dispatch(Action::DismissDialog)
    }

    pub fn change_draft_name(&self, text: impl Into<String>) -> Result<Outcome> {
        self.dispatch(Action::ChangeDraftName { text: text.into() })
    }

    pub fn change_draft_quantity(&self, text: impl Into<String>) -> Result<Outcome> {
        self.dispatch(Action::ChangeDraftQuantity { text: text.into() })
    }

    /// Clear the draft and close the dialog.
    pub fn cancel_add(&self) -> Result<Outcome> {
        self.dispatch(Action::CancelAdd)
    }

    /// Turn the draft into a new item.
    pub fn commit_add(&self) -> Result<Outcome> {
        self.dispatch(Action::CommitAdd)
    }

    // --- Editing ---

    pub fn begin_edit(&self, id: ItemId) -> Result<Outcome> {
        self.dispatch(Action::BeginEdit { id })
    }

    pub fn change_edit_name(&self, text: impl Into<String>) -> Result<Outcome> {
        self.dispatch(Action::ChangeEditName { text: text.into() })
    }

    pub fn change_edit_quantity(&self, text: impl Into<String>) -> Result<Outcome> {
        self.dispatch(Action::ChangeEditQuantity { text: text.into() })
    }

    /// Complete the open edit from the editor's text.
    pub fn save_edit(&self) -> Result<Outcome> {
        self.dispatch(Action::SaveEdit)
    }

    pub fn complete_edit(
        &self,
        id: ItemId,
        name: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Result<Outcome> {
        self.dispatch(Action::CompleteEdit {
            id,
            name: name.into(),
            quantity: quantity.into(),
        })
    }

    pub fn delete(&self, id: ItemId) -> Result<Outcome> {
        self.dispatch(Action::Delete { id })
    }

    // --- Subscriptions ---

    /// Subscribe to store events.
    pub fn subscribe(&self, config: SubscriptionConfig) -> SubscriptionHandle {
        let _lock = self.write_lock.lock();

        let send_initial = config.send_initial;
        let handle = self.subscriptions.subscribe(config);

        if send_initial {
            let event = {
                let head = self.head.read();
                StoreEvent::Snapshot {
                    revision: head.revision,
                    action: None,
                    state: ListState::clone(&head.state),
                }
            };
            self.subscriptions.send_to(handle.id, event);
        }

        handle
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscriptions.unsubscribe(id);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.subscription_count()
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::build(ListConfig::default())
    }
}
