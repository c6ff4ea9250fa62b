//! Search page rendering: query input above the shared recipe list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::favorites::Favorites;
use crate::pages::SearchPage;
use crate::state::Focus;

/// Render the query input and results list.
pub fn render_search_page(f: &mut Frame, area: Rect, sp: &mut SearchPage, favorites: &Favorites) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input_focused = sp.focus == Focus::Input;
    let border = if input_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans: Vec<Span> = vec![Span::styled("> ", border), Span::raw(sp.input.clone())];
    if input_focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::Yellow)));
    }
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(" Search (e.g. +eggs,-onions,flour) "),
    );
    f.render_widget(input, chunks[0]);

    // "No recipes found" is reserved for an initial empty fetch; a fresh
    // page just shows the usage hint.
    let empty_message = if sp.no_results {
        "No recipes found"
    } else {
        "Type ingredients and press Enter to search"
    };
    super::results::render_recipe_list(f, chunks[1], &mut sp.list, favorites, empty_message);
}
