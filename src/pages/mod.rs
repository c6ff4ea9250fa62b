//! Page lifecycle and navigation.
//!
//! A [`Page`] is a tagged union over the three destination variants. Each
//! variant does its setup at construction and implements an idempotent
//! [`Page::teardown`]; only the Search variant owns a poll cycle, but the
//! contract holds for all of them. The [`Router`] guarantees at most one live
//! page at any time by tearing down the current page before constructing the
//! next, which is what keeps poll cycles and list state from leaking across
//! navigations.

pub mod about;
pub mod favorites_page;
pub mod list;
pub mod search;

pub use about::AboutPage;
pub use favorites_page::FavoritesPage;
pub use list::RecipeList;
pub use search::{PollingState, SearchPage};

use crate::favorites::Favorites;
use crate::state::Route;

/// The active page, tagged by destination.
#[derive(Debug)]
pub enum Page {
    /// Ingredient search with incremental pagination.
    Search(SearchPage),
    /// Persisted favorites list.
    Favorites(FavoritesPage),
    /// Static informational content.
    About(AboutPage),
}

impl Page {
    /// Which destination this page serves; drives the tab-bar highlight.
    #[must_use]
    pub fn route(&self) -> Route {
        match self {
            Page::Search(_) => Route::Search,
            Page::Favorites(_) => Route::Favorites,
            Page::About(_) => Route::About,
        }
    }

    /// Release everything the page owns. Idempotent for every variant.
    pub fn teardown(&mut self) {
        match self {
            Page::Search(p) => p.teardown(),
            Page::Favorites(p) => p.teardown(),
            Page::About(p) => p.teardown(),
        }
    }
}

/// Swaps page instances on navigation events.
#[derive(Debug, Default)]
pub struct Router {
    current: Option<Page>,
}

impl Router {
    /// The live page, if navigation has happened at least once.
    #[must_use]
    pub fn current(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    /// Mutable access to the live page.
    pub fn current_mut(&mut self) -> Option<&mut Page> {
        self.current.as_mut()
    }

    /// Destination of the live page, defaulting to Search before the first
    /// navigation.
    #[must_use]
    pub fn active_route(&self) -> Route {
        self.current.as_ref().map_or(Route::Search, Page::route)
    }

    /// What: Navigate to a destination.
    ///
    /// Inputs:
    /// - `route`: Where to go
    /// - `favorites`: Store snapshot source for the Favorites page
    ///
    /// Output:
    /// - Tears down the current page (if any), then constructs the new one.
    ///   Navigating to the already-active route rebuilds the page.
    pub fn navigate(&mut self, route: Route, favorites: &Favorites) {
        if let Some(page) = self.current.as_mut() {
            page.teardown();
        }
        self.current = Some(match route {
            Route::Search => Page::Search(SearchPage::new()),
            Route::Favorites => Page::Favorites(FavoritesPage::new(favorites)),
            Route::About => Page::About(AboutPage::new()),
        });
    }

    /// Tear down the live page without constructing a new one (shutdown).
    pub fn shutdown(&mut self) {
        if let Some(page) = self.current.as_mut() {
            page.teardown();
        }
        self.current = None;
    }
}
