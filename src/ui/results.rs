//! Recipe list rendering, shared by the Search and Favorites pages.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::favorites::Favorites;
use crate::pages::RecipeList;

/// What: Render the accumulated recipe list (or an empty-state message).
///
/// Inputs:
/// - `list`: The accumulated recipes and selection state
/// - `favorites`: Membership source for each row's heart indicator
/// - `empty_message`: Shown when the list has nothing to render
///
/// Output:
/// - Full redraw of the visible window; the selection is kept centered when
///   the list is longer than the viewport.
pub fn render_recipe_list(
    f: &mut Frame,
    area: Rect,
    list: &mut RecipeList,
    favorites: &Favorites,
    empty_message: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" Recipes ({}) ", list.len()));

    if list.is_empty() {
        let msg = Paragraph::new(empty_message)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Keep the selection centered within the viewport when possible.
    {
        let viewport_rows = area.height.saturating_sub(2) as usize;
        let len = list.recipes.len();
        let selected = list.state.selected().map(|i| i.min(len - 1));
        if viewport_rows > 0 && len > viewport_rows {
            let desired = selected
                .unwrap_or(0)
                .saturating_sub(viewport_rows / 2)
                .min(len - viewport_rows);
            if list.state.offset() != desired {
                let mut st = ratatui::widgets::ListState::default().with_offset(desired);
                st.select(selected);
                list.state = st;
            } else {
                list.state.select(selected);
            }
        } else {
            list.state.select(selected);
        }
    }

    let items: Vec<ListItem> = list
        .recipes
        .iter()
        .map(|r| {
            let mut segs: Vec<Span> = Vec::new();
            if favorites.contains(&r.href) {
                segs.push(Span::styled("\u{2665} ", Style::default().fg(Color::Red)));
            } else {
                segs.push(Span::styled(
                    "\u{2661} ",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            segs.push(Span::styled(
                r.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            segs.push(Span::styled(
                format!("  {} ingredients", r.ingredient_count()),
                Style::default().fg(Color::Gray),
            ));
            segs.push(Span::styled(
                format!("  {}", r.href),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(Line::from(segs))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(widget, area, &mut list.state);
}
