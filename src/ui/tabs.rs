// Detail tab bar rendering.
// Highlights the active tab of the event detail screen.

use ratatui::{prelude::*, widgets::*};

use crate::state::DetailTab;

/// Draw the tab bar at the top of the detail screen.
pub fn draw_tabs(frame: &mut Frame, active: DetailTab, area: Rect) {
    let tab_titles: Vec<Line> = DetailTab::ALL
        .iter()
        .map(|tab| {
            let style = if *tab == active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(Span::styled(format!(" {} ", tab.title()), style))
        })
        .collect();

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(active.index())
        .highlight_style(Style::default().fg(Color::White))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
