//! Frame rendering for Ladle.
//!
//! Every frame is a full redraw: tab bar, the live page's body, and a
//! one-line footer. The recipe list rendering is shared by the Search and
//! Favorites pages.

mod navbar;
mod results;
mod search;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::pages::Page;
use crate::state::{AppState, FetchPhase};

pub use results::render_recipe_list;

/// Render one frame of the application.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    navbar::render_navbar(f, chunks[0], app.router.active_route());

    let footer = footer_line(app);

    match app.router.current_mut() {
        Some(Page::Search(sp)) => {
            search::render_search_page(f, chunks[1], sp, &app.favorites);
        }
        Some(Page::Favorites(fp)) => {
            results::render_recipe_list(
                f,
                chunks[1],
                &mut fp.list,
                &app.favorites,
                "No favorites yet - press f on a search result",
            );
        }
        Some(Page::About(_)) => {
            let lines: Vec<Line> = crate::pages::about::ABOUT_TEXT
                .iter()
                .map(|l| Line::from(*l))
                .collect();
            f.render_widget(Paragraph::new(lines), chunks[1]);
        }
        None => {}
    }

    f.render_widget(
        Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

/// Footer text: a transient status message when present, otherwise the fetch
/// phase or the key hints.
fn footer_line(app: &AppState) -> String {
    if let Some(status) = &app.status {
        return status.clone();
    }
    if let Some(Page::Search(sp)) = app.router.current() {
        match sp.phase {
            FetchPhase::Fetching(page) => return format!("Fetching page {page}..."),
            FetchPhase::Exhausted if !sp.list.is_empty() => {
                return "End of results".to_string();
            }
            _ => {}
        }
    }
    "1 Search  2 Favorites  3 About  |  Enter search  f favorite  q quit".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Route;

    #[test]
    /// What: Footer prefers status, then phase, then key hints
    ///
    /// - Input: App with status set, then cleared while fetching
    /// - Output: Matching footer strings
    fn footer_priority() {
        let mut app = AppState::default();
        app.router.navigate(Route::Search, &app.favorites);
        assert!(footer_line(&app).contains("q quit"));

        if let Some(Page::Search(sp)) = app.router.current_mut() {
            sp.phase = FetchPhase::Fetching(3);
        }
        assert_eq!(footer_line(&app), "Fetching page 3...");

        app.status = Some("Search failed: timeout".to_string());
        assert_eq!(footer_line(&app), "Search failed: timeout");
    }
}
