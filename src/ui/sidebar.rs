// Sidebar menu rendering.
// Groups show an expand arrow; the active view and the cursor are highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};
use crate::state::MenuNode;

/// Draw the sidebar menu into `area`.
pub fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sidebar;
    let nav = app.view.nav();

    let items: Vec<ListItem> = app
        .view
        .sidebar_entries()
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth as usize);
            let active = !entry.node.is_expandable() && entry.node.id() == nav.active_view();

            let mut spans = vec![Span::raw(indent)];
            match entry.node {
                MenuNode::Expandable { id, title, .. } => {
                    let arrow = if nav.is_expanded(id) { "▾ " } else { "▸ " };
                    spans.push(Span::styled(arrow, Style::default().fg(Color::DarkGray)));
                    spans.push(Span::styled(
                        *title,
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                }
                MenuNode::Leaf {
                    title,
                    has_notification,
                    ..
                } => {
                    let style = if active {
                        Style::default()
                            .fg(Color::LightMagenta)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    spans.push(Span::styled(*title, style));
                    if *has_notification {
                        spans.push(Span::styled(" ●", Style::default().fg(Color::Magenta)));
                    }
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(area);

    let border_color = if focused {
        Color::Magenta
    } else {
        Color::DarkGray
    };

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(border_color))
                .title(" eventdesk ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.sidebar_cursor));
    }
    frame.render_stateful_widget(list_widget, chunks[0], &mut list_state);

    let logout = Paragraph::new(Line::from(Span::styled(
        " ⏻ Logout",
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::BOTTOM | Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(logout, chunks[1]);
}
