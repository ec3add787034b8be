//! Core types for the shopping list.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a list item.
///
/// Unique under the monotonic id strategy; the count-based strategy can hand
/// out an id that is still in use after a deletion.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of actions a store has applied.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Revision(pub u64);

impl fmt::Debug for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rev({})", self.0)
    }
}

impl Revision {
    pub fn next(self) -> Self {
        Revision(self.0 + 1)
    }
}

/// A single shopping list entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    /// True while the item is shown in the in-place editor.
    pub editing: bool,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            editing: false,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.name, self.quantity)
    }
}

/// Unsaved text of the add dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub quantity: String,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.quantity.is_empty()
    }
}

/// Text fields of the in-place editor, seeded from the item being edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: String,
}

impl EditBuffer {
    pub fn for_item(item: &Item) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }
}

/// Immutable snapshot of everything the renderer draws.
///
/// Snapshots are never mutated once built; every action produces a new one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    /// Items in display order.
    pub items: Vec<Item>,
    pub draft: Draft,
    pub dialog_open: bool,
    /// Open in-place editor, if any.
    pub editor: Option<EditBuffer>,
    /// Next id handed out by the monotonic strategy.
    pub next_id: u64,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            draft: Draft::default(),
            dialog_open: false,
            editor: None,
            next_id: 1,
        }
    }
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of the first item with the given id.
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// The item currently in edit mode.
    pub fn editing_item(&self) -> Option<&Item> {
        self.items.iter().find(|item| item.editing)
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }
}
