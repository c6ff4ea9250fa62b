//! Event handling layer for Ladle's TUI.
//!
//! `handle_event` dispatches a single terminal event against the live page
//! and returns `true` when the application should exit. Search-page keys live
//! in a submodule; the Favorites and About pages only need navigation,
//! selection motion, and the favorite toggle.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::pages::Page;
use crate::state::{AppState, QueryInput, Route};

mod search;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `query_tx`: Channel to the search worker (query submission)
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    // Ctrl+C quits from anywhere, including the query input.
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    match app.router.active_route() {
        Route::Search => search::handle_search_key(ke, app, query_tx),
        Route::Favorites => handle_favorites_key(ke, app),
        Route::About => handle_common_key(ke, app),
    }
}

/// What: Handle the navigation and quit keys shared by pages without a text
/// input focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Output:
/// - `true` to exit on `q`; navigation keys swap the live page via the
///   router (tearing down the old one).
pub(crate) fn handle_common_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => app.router.navigate(Route::Search, &app.favorites),
        KeyCode::Char('2') => app.router.navigate(Route::Favorites, &app.favorites),
        KeyCode::Char('3') => app.router.navigate(Route::About, &app.favorites),
        _ => {}
    }
    false
}

/// Handle key events on the Favorites page.
fn handle_favorites_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(Page::Favorites(fp)) = app.router.current_mut() {
                fp.list.select_next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(Page::Favorites(fp)) = app.router.current_mut() {
                fp.list.select_prev();
            }
        }
        KeyCode::Char('f') => {
            let selected = match app.router.current() {
                Some(Page::Favorites(fp)) => fp.list.selected().cloned(),
                _ => None,
            };
            if let Some(recipe) = selected {
                app.favorites.remove(&recipe.href);
                app.status = Some(format!("Removed from favorites: {}", recipe.title));
                if let Some(Page::Favorites(fp)) = app.router.current_mut() {
                    fp.refresh(&app.favorites);
                }
            }
        }
        _ => return handle_common_key(ke, app),
    }
    false
}
