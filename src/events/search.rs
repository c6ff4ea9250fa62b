//! Key handling for the Search page.
//!
//! The page has two focus targets: the query input (default) and the results
//! list. Printable keys edit the input; Enter submits; Tab flips focus. In
//! results focus the navigation keys move the selection and `f` toggles the
//! favorite state of the selected recipe.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic;
use crate::pages::Page;
use crate::state::{AppState, Focus, QueryInput};

/// Handle key events while the Search page is live.
///
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let focus = match app.router.current() {
        Some(Page::Search(sp)) => sp.focus,
        _ => return false,
    };
    match focus {
        Focus::Input => handle_input_key(ke, app, query_tx),
        Focus::Results => handle_results_key(ke, app),
    }
}

/// Keys while the query input is focused.
fn handle_input_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Enter => {
            logic::submit_query(app, query_tx);
        }
        code => {
            let Some(Page::Search(sp)) = app.router.current_mut() else {
                return false;
            };
            match code {
                KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
                    sp.input.push(c);
                }
                KeyCode::Backspace => {
                    sp.input.pop();
                }
                KeyCode::Tab | KeyCode::Esc | KeyCode::Down => {
                    sp.focus = Focus::Results;
                }
                _ => {}
            }
        }
    }
    false
}

/// Keys while the results list is focused.
fn handle_results_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(Page::Search(sp)) = app.router.current_mut() {
                sp.list.select_next();
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(Page::Search(sp)) = app.router.current_mut() {
                sp.list.select_prev();
            }
        }
        KeyCode::Char('f') => {
            let selected = match app.router.current() {
                Some(Page::Search(sp)) => sp.list.selected().cloned(),
                _ => None,
            };
            if let Some(recipe) = selected {
                let added = logic::toggle_favorite(&mut app.favorites, &recipe);
                app.status = Some(if added {
                    format!("Added to favorites: {}", recipe.title)
                } else {
                    format!("Removed from favorites: {}", recipe.title)
                });
            }
        }
        KeyCode::Tab | KeyCode::Esc | KeyCode::Char('i') => {
            if let Some(Page::Search(sp)) = app.router.current_mut() {
                sp.focus = Focus::Input;
            }
        }
        _ => return super::handle_common_key(ke, app),
    }
    false
}
