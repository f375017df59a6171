// Events table rendering.
// Sortable column headers, the current page of rows, and the pagination bar.

use ratatui::{prelude::*, widgets::*};

use crate::state::{EventTableState, SortField};

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Header cell with its sort key hint and, for the active column, a direction arrow.
fn header_cell(table: &EventTableState, index: usize, field: SortField) -> Cell<'static> {
    let mut spans = vec![
        Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::raw(field.title()),
    ];
    let style = match table.sort().direction_for(field) {
        Some(direction) => {
            spans.push(Span::raw(format!(" {}", direction.arrow())));
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        }
        None => Style::default().fg(Color::White),
    };
    Cell::from(Line::from(spans)).style(style)
}

/// Render the events table and its pagination bar.
pub fn render_events(frame: &mut Frame, table: &mut EventTableState, area: Rect, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_color = if focused {
        Color::Magenta
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Events ({}) ", table.records().len()));

    if table.records().is_empty() {
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        render_empty(frame, inner, "No event requests");
    } else {
        let header = Row::new(
            SortField::ALL
                .iter()
                .enumerate()
                .map(|(i, field)| header_cell(table, i, *field)),
        )
        .bottom_margin(1);

        let rows: Vec<Row> = table
            .visible_rows()
            .map(|event| {
                Row::new(vec![
                    Cell::from(format!("👁 {}", event.event_name)),
                    Cell::from(event.event_start.clone()),
                    Cell::from(event.event_end.clone()),
                    Cell::from(event.client_name.clone()),
                    Cell::from(event.contact_info.clone()),
                    Cell::from(event.venue.clone()),
                ])
            })
            .collect();

        let widths = [Constraint::Ratio(1, 6); 6];
        let table_widget = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(table_widget, chunks[0], &mut table.table_state);
    }

    render_pagination(frame, table, chunks[1]);
}

/// Page buttons, with the current page highlighted.
fn render_pagination(frame: &mut Frame, table: &EventTableState, area: Rect) {
    let current = table.page();
    let last = table.page_count();

    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut spans = vec![Span::styled(" ‹ ", arrow_style(current > 1))];
    for page in 1..=last {
        let style = if page == current {
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", page), style));
    }
    spans.push(Span::styled(" › ", arrow_style(current < last)));
    spans.push(Span::styled(
        format!("  Page {} of {}", current, last),
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    frame.render_widget(bar, area);
}
