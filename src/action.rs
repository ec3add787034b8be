//! User intents dispatched to the store.

use crate::types::ItemId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An intent coming from the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    // --- Add dialog ---
    OpenDialog,
    /// Close the dialog but keep whatever was typed.
    DismissDialog,
    ChangeDraftName { text: String },
    ChangeDraftQuantity { text: String },
    CancelAdd,
    CommitAdd,

    // --- In-place editor ---
    BeginEdit { id: ItemId },
    ChangeEditName { text: String },
    ChangeEditQuantity { text: String },
    /// Complete the open edit with the editor's own text.
    SaveEdit,
    CompleteEdit {
        id: ItemId,
        name: String,
        quantity: String,
    },

    Delete { id: ItemId },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::OpenDialog => ActionKind::OpenDialog,
            Action::DismissDialog => ActionKind::DismissDialog,
            Action::ChangeDraftName { .. } => ActionKind::ChangeDraftName,
            Action::ChangeDraftQuantity { .. } => ActionKind::ChangeDraftQuantity,
            Action::CancelAdd => ActionKind::CancelAdd,
            Action::CommitAdd => ActionKind::CommitAdd,
            Action::BeginEdit { .. } => ActionKind::BeginEdit,
            Action::ChangeEditName { .. } => ActionKind::ChangeEditName,
            Action::ChangeEditQuantity { .. } => ActionKind::ChangeEditQuantity,
            Action::SaveEdit => ActionKind::SaveEdit,
            Action::CompleteEdit { .. } => ActionKind::CompleteEdit,
            Action::Delete { .. } => ActionKind::Delete,
        }
    }
}

/// Payload-free tag of an [`Action`], carried in events and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    OpenDialog,
    DismissDialog,
    ChangeDraftName,
    ChangeDraftQuantity,
    CancelAdd,
    CommitAdd,
    BeginEdit,
    ChangeEditName,
    ChangeEditQuantity,
    SaveEdit,
    CompleteEdit,
    Delete,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::OpenDialog => "open_dialog",
            ActionKind::DismissDialog => "dismiss_dialog",
            ActionKind::ChangeDraftName => "change_draft_name",
            ActionKind::ChangeDraftQuantity => "change_draft_quantity",
            ActionKind::CancelAdd => "cancel_add",
            ActionKind::CommitAdd => "commit_add",
            ActionKind::BeginEdit => "begin_edit",
            ActionKind::ChangeEditName => "change_edit_name",
            ActionKind::ChangeEditQuantity => "change_edit_quantity",
            ActionKind::SaveEdit => "save_edit",
            ActionKind::CompleteEdit => "complete_edit",
            ActionKind::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_from_renderer_json() {
        let action: Action = serde_json::from_value(json!({
            "type": "complete_edit",
            "id": 2,
            "name": "Milk",
            "quantity": "3"
        }))
        .unwrap();

        assert_eq!(
            action,
            Action::CompleteEdit {
                id: ItemId(2),
                name: "Milk".to_string(),
                quantity: "3".to_string(),
            }
        );
        assert_eq!(action.kind(), ActionKind::CompleteEdit);
    }

    #[test]
    fn test_kind_display_matches_serde_tag() {
        let action = Action::ChangeDraftQuantity { text: "4".into() };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["type"], action.kind().to_string());
    }
}
