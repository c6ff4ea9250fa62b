//! Central `AppState` container shared by the event, networking, and UI
//! layers.

use crate::config::Settings;
use crate::favorites::Favorites;
use crate::pages::Router;

/// Global application state.
///
/// Mutated on the single event-loop task in response to input, tick, and
/// worker messages. Page-scoped state (query text, accumulated results, the
/// poll cycle) lives inside the router's current page; what sits here is
/// process-wide: the favorites store, settings, and the query-id counters
/// used to discard stale search responses.
#[derive(Debug)]
pub struct AppState {
    /// Navigation: owns the single live page.
    pub router: Router,
    /// Process-wide favorites store, injected into pages via the router.
    pub favorites: Favorites,
    /// Runtime settings (API URL, poll tuning).
    pub settings: Settings,
    /// Identifier of the request whose response we will accept.
    pub latest_query_id: u64,
    /// Next request identifier to allocate.
    pub next_query_id: u64,
    /// One-line status shown in the footer (fetch errors, favorite actions).
    pub status: Option<String>,
}

impl AppState {
    /// Build state around an already-loaded favorites store.
    #[must_use]
    pub fn new(settings: Settings, favorites: Favorites) -> Self {
        AppState {
            router: Router::default(),
            favorites,
            settings,
            latest_query_id: 0,
            next_query_id: 1,
            status: None,
        }
    }
}

impl Default for AppState {
    /// Test-friendly default: empty favorites at the standard path (nothing
    /// is read from or written to disk until a mutation happens).
    fn default() -> Self {
        AppState::new(
            Settings::default(),
            Favorites::new(crate::paths::favorites_path()),
        )
    }
}
