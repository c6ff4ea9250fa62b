//! Accumulating recipe list backing the Search and Favorites pages.

use ratatui::widgets::ListState;

use crate::state::Recipe;

/// Accumulated recipes plus the selection state used to render them.
///
/// The recipe sequence only grows ([`RecipeList::append`]) or is atomically
/// cleared ([`RecipeList::clear`]); individual entries are never mutated.
#[derive(Debug, Default)]
pub struct RecipeList {
    /// Recipes in arrival order.
    pub recipes: Vec<Recipe>,
    /// List selection/offset state for rendering.
    pub state: ListState,
}

impl RecipeList {
    /// Build a list pre-populated with `recipes` (used by the Favorites page).
    #[must_use]
    pub fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let mut list = RecipeList {
            recipes,
            state: ListState::default(),
        };
        if !list.recipes.is_empty() {
            list.state.select(Some(0));
        }
        list
    }

    /// Empty the accumulated sequence and reset the selection.
    pub fn clear(&mut self) {
        self.recipes.clear();
        self.state = ListState::default();
    }

    /// What: Concatenate a batch onto the accumulated sequence.
    ///
    /// Inputs:
    /// - `batch`: Recipes in fetch order
    ///
    /// Output:
    /// - Items are appended, never replacing earlier pages; the selection is
    ///   established on the first batch and otherwise left where it was.
    pub fn append(&mut self, batch: Vec<Recipe>) {
        self.recipes.extend(batch);
        if self.state.selected().is_none() && !self.recipes.is_empty() {
            self.state.select(Some(0));
        }
    }

    /// Currently selected recipe, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Recipe> {
        self.state.selected().and_then(|i| self.recipes.get(i))
    }

    /// Move the selection down one row, clamped to the end.
    pub fn select_next(&mut self) {
        if self.recipes.is_empty() {
            return;
        }
        let next = self
            .state
            .selected()
            .map_or(0, |i| (i + 1).min(self.recipes.len() - 1));
        self.state.select(Some(next));
    }

    /// Move the selection up one row, clamped to the start.
    pub fn select_prev(&mut self) {
        if self.recipes.is_empty() {
            return;
        }
        let prev = self.state.selected().map_or(0, |i| i.saturating_sub(1));
        self.state.select(Some(prev));
    }

    /// What: Is the selection within `threshold` rows of the end of the list?
    ///
    /// Inputs:
    /// - `threshold`: Proximity distance in rows
    ///
    /// Output:
    /// - `true` when the remaining distance is at or under the threshold.
    ///   An empty list counts as near the bottom (distance zero), which lets
    ///   a failed first page be retried by the poll cycle.
    #[must_use]
    pub fn near_bottom(&self, threshold: usize) -> bool {
        if self.recipes.is_empty() {
            return true;
        }
        let selected = self.state.selected().unwrap_or(0);
        self.recipes.len() - 1 - selected.min(self.recipes.len() - 1) <= threshold
    }

    /// Whether the accumulated sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Number of accumulated recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }
}
