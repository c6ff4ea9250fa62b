//! The Favorites page: the persisted collection rendered as a list, with no
//! network access and no pagination.

use crate::favorites::Favorites;
use crate::pages::list::RecipeList;

/// State owned by the Favorites page.
#[derive(Debug, Default)]
pub struct FavoritesPage {
    /// Snapshot of the favorites collection at construction (or after an
    /// unfavorite on this page).
    pub list: RecipeList,
}

impl FavoritesPage {
    /// Build the page from the full favorites snapshot.
    #[must_use]
    pub fn new(favorites: &Favorites) -> Self {
        FavoritesPage {
            list: RecipeList::with_recipes(favorites.snapshot()),
        }
    }

    /// What: Rebuild the list after a mutation, keeping the selection near its
    /// old position.
    ///
    /// Inputs:
    /// - `favorites`: The store to re-snapshot
    pub fn refresh(&mut self, favorites: &Favorites) {
        let old = self.list.state.selected();
        self.list = RecipeList::with_recipes(favorites.snapshot());
        if let Some(i) = old
            && !self.list.is_empty()
        {
            self.list.state.select(Some(i.min(self.list.len() - 1)));
        }
    }

    /// Release the rendered list. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.list.clear();
    }
}
