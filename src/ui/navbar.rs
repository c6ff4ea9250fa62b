//! The navigation tab bar shared by every page.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Route;

/// Render the destination tabs, highlighting the active one.
pub fn render_navbar(f: &mut Frame, area: Rect, active: Route) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " ladle ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    for (i, route) in Route::ALL.iter().enumerate() {
        spans.push(Span::raw("  "));
        let label = format!("{} {}", i + 1, route.title());
        if *route == active {
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
