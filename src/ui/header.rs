// Header bar rendering.
// Page title on the left, the signed-in user greeting on the right.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;

const GREETING_NAME: &str = "Muhammad Asad";

/// Draw the header above the main content.
pub fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    if app.compact {
        spans.push(Span::styled("☰ ", Style::default().fg(Color::White)));
    }

    if app.view.selected_event().is_some() {
        spans.push(Span::styled("← ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            "Event Details",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            app.view.active_title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    let greeting = Line::from(vec![
        Span::styled(
            format!("Hi, {}", GREETING_NAME),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  welcome back!", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(greeting).alignment(Alignment::Right),
        inner,
    );
}
