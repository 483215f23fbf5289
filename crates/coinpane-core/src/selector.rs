//! Selector menu: an ordered, filterable collection of currency items.
//!
//! Items are kept sorted by name (duplicates allowed). A separate index holds
//! the flagged items, also sorted by name, and at most one item is toggled as
//! the menu's selection. Items are addressed by the [`ItemId`] the menu
//! allocated when it created them.

use std::fmt;

use tracing::debug;

use crate::constants::{MAX_SYMBOL_LEN, MIN_SYMBOL_LEN};

/// Which side of the conversion a menu feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    From,
    To,
}

impl Side {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Side::From => "From",
            Side::To => "To",
        }
    }
}

/// Identifier of an item, unique within its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A selectable currency symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    flagged: bool,
}

impl Item {
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}

/// Which subset of the menu is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuView {
    #[default]
    All,
    Flagged,
}

/// Why a submitted symbol was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("shorter than two characters")]
    TooShort,
    #[error("longer than five characters")]
    TooLong,
    #[error("character {0:?} is not a letter A-Z")]
    InvalidCharacter(char),
}

/// Result of [`SelectorMenu::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new item was created at `index` of the display collection.
    Inserted { id: ItemId, index: usize },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_inserted(&self) -> bool {
        matches!(self, SubmitOutcome::Inserted { .. })
    }
}

/// The item toggled by [`SelectorMenu::select`], handed to the owner of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub side: Side,
    pub id: ItemId,
    pub symbol: String,
}

/// Normalise and validate a symbol: upper-cased, 2-5 letters `A`-`Z`.
///
/// Whitespace is not stripped; a space anywhere is an invalid character.
pub fn validate_symbol(raw: &str) -> Result<String, RejectReason> {
    let name = raw.to_uppercase();
    let len = name.chars().count();
    if len < MIN_SYMBOL_LEN {
        return Err(RejectReason::TooShort);
    }
    if len > MAX_SYMBOL_LEN {
        return Err(RejectReason::TooLong);
    }
    if let Some(c) = name.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(RejectReason::InvalidCharacter(c));
    }
    Ok(name)
}

/// Ordered, filterable menu of items with single-select toggle semantics.
#[derive(Debug, Clone)]
pub struct SelectorMenu {
    title: String,
    side: Side,
    /// All items, sorted ascending by name.
    items: Vec<Item>,
    /// Ids of flagged items, sorted ascending by name.
    flagged: Vec<ItemId>,
    selected: Option<ItemId>,
    view: MenuView,
    next_id: u64,
}

impl SelectorMenu {
    /// Build a menu pre-populated with `initial`, sorted ascending.
    ///
    /// Duplicates are kept; the caller decides whether names must be unique.
    pub fn new<I, S>(title: impl Into<String>, side: Side, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut menu = Self {
            title: title.into(),
            side,
            items: Vec::new(),
            flagged: Vec::new(),
            selected: None,
            view: MenuView::All,
            next_id: 0,
        };
        for name in initial {
            let item = menu.make_item(name.into());
            menu.items.push(item);
        }
        menu.items.sort_by(|a, b| a.name.cmp(&b.name));
        menu
    }

    fn make_item(&mut self, name: String) -> Item {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        Item {
            id,
            name,
            flagged: false,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// All items in display order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Flagged items in name order.
    #[must_use]
    pub fn flagged_items(&self) -> Vec<&Item> {
        self.flagged.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// The subset currently rendered, according to the view.
    #[must_use]
    pub fn visible(&self) -> Vec<&Item> {
        match self.view {
            MenuView::All => self.items.iter().collect(),
            MenuView::Flagged => self.flagged_items(),
        }
    }

    #[must_use]
    pub fn view(&self) -> MenuView {
        self.view
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id of the first item named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ItemId> {
        self.items.iter().find(|item| item.name == name).map(Item::id)
    }

    /// The toggled item, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Validate `raw` and insert it in name order.
    ///
    /// Malformed input leaves the menu untouched; the outcome says why.
    pub fn submit(&mut self, raw: &str) -> SubmitOutcome {
        let name = match validate_symbol(raw) {
            Ok(name) => name,
            Err(reason) => {
                debug!(menu = %self.title, input = raw, %reason, "submission rejected");
                return SubmitOutcome::Rejected(reason);
            }
        };

        let item = self.make_item(name);
        let id = item.id;
        let index = self
            .items
            .iter()
            .position(|existing| existing.name > item.name)
            .unwrap_or(self.items.len());
        self.items.insert(index, item);
        SubmitOutcome::Inserted { id, index }
    }

    /// Return the id of an item named `name`, inserting it if absent.
    pub fn ensure(&mut self, name: &str) -> Result<ItemId, RejectReason> {
        let name = validate_symbol(name)?;
        if let Some(id) = self.find(&name) {
            return Ok(id);
        }
        match self.submit(&name) {
            SubmitOutcome::Inserted { id, .. } => Ok(id),
            SubmitOutcome::Rejected(reason) => Err(reason),
        }
    }

    /// Flag an item. Returns `false` if it was already flagged or is unknown.
    pub fn flag(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.flagged {
            return false;
        }
        item.flagged = true;
        let name = item.name.clone();

        let index = self
            .flagged
            .iter()
            .position(|other| self.get(*other).is_some_and(|o| o.name > name))
            .unwrap_or(self.flagged.len());
        self.flagged.insert(index, id);
        true
    }

    /// Unflag an item. Returns `false` if it was not flagged or is unknown.
    pub fn unflag(&mut self, id: ItemId) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if !item.flagged {
            return false;
        }
        item.flagged = false;
        self.flagged.retain(|other| *other != id);
        true
    }

    /// Flag when unflagged, unflag when flagged. Returns the new flag state.
    pub fn toggle_flag(&mut self, id: ItemId) -> Option<bool> {
        let flagged = self.get(id)?.flagged;
        if flagged {
            self.unflag(id);
        } else {
            self.flag(id);
        }
        Some(!flagged)
    }

    /// Toggle `id` as the menu's single selection and report it to the caller.
    ///
    /// Unknown ids leave the current selection as it was.
    pub fn select(&mut self, id: ItemId) -> Option<Selection> {
        let symbol = self.get(id)?.name.clone();
        self.selected = Some(id);
        Some(Selection {
            side: self.side,
            id,
            symbol,
        })
    }

    /// Remove an item from both collections. A removed selection is cleared,
    /// not replaced.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let item = self.items.remove(index);
        self.flagged.retain(|other| *other != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(item)
    }

    /// Switch the rendered subset. Neither collection changes.
    pub fn filter_view(&mut self, show_flagged_only: bool) {
        self.view = if show_flagged_only {
            MenuView::Flagged
        } else {
            MenuView::All
        };
    }
}
