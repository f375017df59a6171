// UI module for rendering the TUI.
// Lays out sidebar, header, and the list or detail screen, plus overlays.

mod detail;
mod header;
mod sidebar;
mod table;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Narrower terminals hide the docked sidebar behind an overlay.
pub const COMPACT_WIDTH: u16 = 100;

const SIDEBAR_WIDTH: u16 = 28;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.compact = area.width < COMPACT_WIDTH;
    if !app.sidebar_visible() {
        app.focus = Focus::Content;
    }

    let main_area = if app.compact {
        area
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(area);
        sidebar::draw_sidebar(frame, app, columns[0]);
        columns[1]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(main_area);

    header::draw_header(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Sidebar overlay on narrow terminals
    if app.compact && app.overlay.open {
        let overlay_area = Rect::new(
            area.x,
            area.y,
            SIDEBAR_WIDTH.min(area.width),
            area.height,
        );
        frame.render_widget(Clear, overlay_area);
        sidebar::draw_sidebar(frame, app, overlay_area);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the events list or the detail screen.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Content;
    match app.view.detail_view() {
        Some(view) => detail::draw_detail(frame, view, app.view.detail(), area),
        None => table::render_events(frame, app.view.table_mut(), area, focused),
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key = |k: &'static str| Span::raw(k);
    let hint = |h: &'static str| Span::styled(h, Style::default().fg(Color::DarkGray));

    let mut hints = if app.focus == Focus::Sidebar {
        vec![
            key(" ↑↓ "),
            hint("Move"),
            key("  ↵ "),
            hint("Open/Expand"),
        ]
    } else if app.view.selected_event().is_some() {
        vec![
            key(" ←→ "),
            hint("Tabs"),
            key("  c "),
            hint("Coordinator"),
            key("  a "),
            hint("Contractor"),
            key("  Esc "),
            hint("Back"),
        ]
    } else {
        vec![
            key(" ↑↓ "),
            hint("Navigate"),
            key("  ↵ "),
            hint("Details"),
            key("  1-6 "),
            hint("Sort"),
            key("  ←→ "),
            hint("Page"),
        ]
    };

    hints.extend([
        key("  Tab "),
        hint("Focus"),
        key("  m "),
        hint("Menu"),
        key("  ? "),
        hint("Help"),
        key("  q "),
        hint("Quit"),
    ]);

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 52.min(area.width);
    let popup_height = 19.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let bindings = [
        ("  ↑/↓ or j/k    ", "Move cursor"),
        ("  Enter         ", "Open event / select menu item"),
        ("  1-6           ", "Sort by column (again to flip)"),
        ("  ←/→ or h/l    ", "Previous/next page or tab"),
        ("  Esc           ", "Back to list / close help"),
        ("  c             ", "Cycle coordinator (details)"),
        ("  a             ", "Cycle contractor of the highlighted position"),
        ("  Tab           ", "Switch sidebar/content focus"),
        ("  m             ", "Show/hide sidebar menu"),
        ("  ?             ", "Show/hide this help"),
        ("  q             ", "Quit"),
    ];

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];
    help_text.extend(bindings.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(*keys, Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ])
    }));
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_wide_layout_shows_sidebar_and_table() {
        let mut app = App::new(&AppConfig::default());
        let screen = render(&mut app, 140, 30);
        assert!(!app.compact);
        assert!(screen.contains("New Requests"));
        assert!(screen.contains("Client Name"));
        assert!(screen.contains("Page 1 of 2"));
    }

    #[test]
    fn test_narrow_layout_hides_sidebar_until_opened() {
        let mut app = App::new(&AppConfig::default());
        let screen = render(&mut app, 80, 30);
        assert!(app.compact);
        assert!(!screen.contains("Partial Requests"));

        app.overlay.open = true;
        let screen = render(&mut app, 80, 30);
        assert!(screen.contains("Partial Requests"));
    }

    #[test]
    fn test_narrowing_moves_focus_off_hidden_sidebar() {
        let mut app = App::new(&AppConfig::default());
        app.focus = Focus::Sidebar;
        render(&mut app, 140, 30);
        assert_eq!(app.focus, Focus::Sidebar);

        render(&mut app, 80, 30);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_positions_show_chosen_contractor() {
        let mut app = App::new(&AppConfig::default());
        app.view.open_detail(1);
        app.view.detail_mut().cycle_contractor();
        let screen = render(&mut app, 160, 40);
        assert!(screen.contains("Contractor 1"));
    }

    #[test]
    fn test_missing_event_renders_not_found() {
        let mut app = App::new(&AppConfig::default());
        app.view.open_detail(404);
        let screen = render(&mut app, 140, 30);
        assert!(screen.contains("Event #404 was not found"));
    }
}
