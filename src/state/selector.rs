//! Shared state for every searchable picker.
//!
//! The token picker, the currency picker, the labeled dropdowns and the
//! country-code picker are all a [`SelectorState`] over normalized
//! [`DropdownOption`]s. Widgets differ only in how they render the options.

use crate::domain::{DropdownOption, Selectable, to_options};

/// Open/closed, query and selection state of one picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorState {
    options: Vec<DropdownOption>,
    selected: Option<usize>,
    searchable: bool,
    is_open: bool,
    query: String,
    /// Row within the filtered list.
    highlighted: usize,
}

impl SelectorState {
    /// Creates a closed selector with nothing selected.
    #[must_use]
    pub fn new(options: Vec<DropdownOption>, searchable: bool) -> Self {
        Self {
            options,
            selected: None,
            searchable,
            is_open: false,
            query: String::new(),
            highlighted: 0,
        }
    }

    /// Creates a selector from catalog entries.
    #[must_use]
    pub fn from_items<T: Selectable>(items: &[T], searchable: bool) -> Self {
        Self::new(to_options(items), searchable)
    }

    /// Pre-selects the option with `id`, if present.
    #[must_use]
    pub fn with_selected(mut self, id: &str) -> Self {
        self.select_id(id);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn selected(&self) -> Option<&DropdownOption> {
        self.selected.and_then(|index| self.options.get(index))
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected().map(|option| option.id.as_str())
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id() == Some(id)
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub const fn is_searchable(&self) -> bool {
        self.searchable
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Options matching the current query, in catalog order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&DropdownOption> {
        self.options
            .iter()
            .filter(|option| option.matches_query(&self.query))
            .collect()
    }

    // ========================================================================
    // Open / Close
    // ========================================================================

    /// Opens the list, highlighting the current selection when visible.
    pub fn open(&mut self) {
        self.is_open = true;
        self.highlighted = self
            .selected_id()
            .and_then(|id| self.filtered().iter().position(|option| option.id == id))
            .unwrap_or(0);
    }

    /// Closes the list and clears the query.
    pub fn close(&mut self) {
        self.is_open = false;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Appends to the search query. Ignored unless open and searchable.
    pub fn push_query(&mut self, c: char) {
        if self.is_open && self.searchable {
            self.query.push(c);
            self.highlighted = 0;
        }
    }

    /// Removes the last query character. Ignored unless open and searchable.
    pub fn pop_query(&mut self) {
        if self.is_open && self.searchable {
            self.query.pop();
            self.highlighted = 0;
        }
    }

    // ========================================================================
    // Highlight
    // ========================================================================

    pub fn highlight_next(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_prev(&mut self) {
        let count = self.filtered().len();
        if count > 0 {
            self.highlighted = if self.highlighted == 0 {
                count - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects the highlighted row.
    ///
    /// Returns the chosen option; the picker closes and its query clears.
    /// Returns `None` (and stays open) when the filtered list is empty.
    pub fn select_highlighted(&mut self) -> Option<DropdownOption> {
        self.select_filtered(self.highlighted)
    }

    /// Selects a row of the filtered list, e.g. from a mouse click.
    pub fn select_filtered(&mut self, row: usize) -> Option<DropdownOption> {
        let id = self.filtered().get(row).map(|option| option.id.clone())?;
        self.select_id(&id);
        self.close();
        self.selected().cloned()
    }

    /// Selects by option id without touching the open state.
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.options.iter().position(|option| option.id == id) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
