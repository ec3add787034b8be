//! Action application.

use crate::action::Action;
use crate::config::{IdStrategy, ListConfig};
use crate::error::{DraftField, ListError, Result};
use crate::types::{Draft, EditBuffer, Item, ItemId, ListState};

use super::fields::{accept_field, is_blank, parse_quantity};

/// Apply an action to a snapshot, producing the next snapshot.
///
/// `state` is never modified. On error the caller keeps `state` as is.
pub fn apply_action(state: &ListState, config: &ListConfig, action: Action) -> Result<ListState> {
    let limit = config.max_field_len;

    match action {
        Action::OpenDialog => {
            let mut next = state.clone();
            next.dialog_open = true;
            Ok(next)
        }

        Action::DismissDialog => {
            let mut next = state.clone();
            next.dialog_open = false;
            Ok(next)
        }

        Action::ChangeDraftName { text } => {
            accept_field(&text, DraftField::Name, limit)?;
            let mut next = state.clone();
            next.draft.name = text;
            Ok(next)
        }

        Action::ChangeDraftQuantity { text } => {
            accept_field(&text, DraftField::Quantity, limit)?;
            let mut next = state.clone();
            next.draft.quantity = text;
            Ok(next)
        }

        Action::CancelAdd => {
            let mut next = state.clone();
            next.draft = Draft::default();
            next.dialog_open = false;
            Ok(next)
        }

        Action::CommitAdd => commit_add(state, config.id_strategy),

        Action::BeginEdit { id } => {
            let index = state.position(id).ok_or(ListError::NotFound(id))?;

            // Only the first match enters edit mode, so a repeated id can't
            // put two rows in the editor.
            let mut next = state.clone();
            for (i, item) in next.items.iter_mut().enumerate() {
                item.editing = i == index;
            }
            next.editor = Some(EditBuffer::for_item(&next.items[index]));
            Ok(next)
        }

        Action::ChangeEditName { text } => {
            if state.editor.is_none() {
                return Err(ListError::NoActiveEdit);
            }
            accept_field(&text, DraftField::Name, limit)?;
            let mut next = state.clone();
            if let Some(editor) = next.editor.as_mut() {
                editor.name = text;
            }
            Ok(next)
        }

        Action::ChangeEditQuantity { text } => {
            if state.editor.is_none() {
                return Err(ListError::NoActiveEdit);
            }
            accept_field(&text, DraftField::Quantity, limit)?;
            let mut next = state.clone();
            if let Some(editor) = next.editor.as_mut() {
                editor.quantity = text;
            }
            Ok(next)
        }

        Action::SaveEdit => {
            let editor = state.editor.as_ref().ok_or(ListError::NoActiveEdit)?;
            complete_edit(state, editor.item_id, &editor.name, &editor.quantity)
        }

        Action::CompleteEdit { id, name, quantity } => complete_edit(state, id, &name, &quantity),

        Action::Delete { id } => {
            let index = state.position(id).ok_or(ListError::NotFound(id))?;
            let mut next = state.clone();
            let removed = next.items.remove(index);
            if removed.editing {
                next.editor = None;
            }
            Ok(next)
        }
    }
}

fn commit_add(state: &ListState, strategy: IdStrategy) -> Result<ListState> {
    if is_blank(&state.draft.name) {
        return Err(ListError::BlankField(DraftField::Name));
    }
    if is_blank(&state.draft.quantity) {
        return Err(ListError::BlankField(DraftField::Quantity));
    }
    let quantity = parse_quantity(&state.draft.quantity)?;

    let mut next = state.clone();
    let id = match strategy {
        IdStrategy::Monotonic => {
            let id = ItemId(next.next_id);
            next.next_id += 1;
            id
        }
        IdStrategy::CountBased => ItemId(next.items.len() as u64 + 1),
    };

    let name = std::mem::take(&mut next.draft.name);
    next.items.push(Item::new(id, name, quantity));
    next.draft = Draft::default();
    next.dialog_open = false;
    Ok(next)
}

fn complete_edit(state: &ListState, id: ItemId, name: &str, quantity: &str) -> Result<ListState> {
    let quantity = parse_quantity(quantity)?;
    let index = state.position(id).ok_or(ListError::NotFound(id))?;

    let mut next = state.clone();
    let item = &mut next.items[index];
    item.name = name.to_string();
    item.quantity = quantity;
    item.editing = false;

    if next.editor.as_ref().is_some_and(|e| e.item_id == id) {
        next.editor = None;
    }
    Ok(next)
}
