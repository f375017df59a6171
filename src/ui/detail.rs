// Event detail screen rendering.
// One panel layout per tab, plus the not-found state for unknown ids.

use ratatui::{prelude::*, widgets::*};

use crate::data::{self, CONTRACTORS, COORDINATORS, EventRecord};
use crate::state::{DetailState, DetailTab, DetailView};

use super::tabs;

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
}

/// Draw the detail screen for the selected event.
pub fn draw_detail(frame: &mut Frame, view: DetailView<'_>, detail: &DetailState, area: Rect) {
    let event = match view {
        DetailView::Found(event) => event,
        DetailView::NotFound(id) => {
            draw_not_found(frame, id, area);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    tabs::draw_tabs(frame, detail.tab(), chunks[0]);

    match detail.tab() {
        DetailTab::EventDetails => draw_event_info(frame, event, chunks[1]),
        DetailTab::AssignCoordinator => draw_assignment(frame, event, detail, chunks[1]),
        DetailTab::SessionManagement => draw_positions(frame, detail, chunks[1]),
        DetailTab::GenerateSow => draw_sow(frame, event, detail, chunks[1]),
    }
}

fn draw_not_found(frame: &mut Frame, id: u32, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            format!("❌ Event #{} was not found", id),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to return to the list",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(panel("Event Details"));
    frame.render_widget(paragraph, area);
}

fn label_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::DarkGray)),
        Span::raw(value.to_string()),
    ])
}

fn draw_event_info(frame: &mut Frame, event: &EventRecord, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            event.event_name.clone(),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line("Start:", &event.event_start),
        label_line("End:", &event.event_end),
        label_line("Client:", &event.client_name),
        label_line("Contact:", &event.contact_info),
        label_line("Venue:", &event.venue),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("Event Details"));
    frame.render_widget(paragraph, area);
}

fn draw_assignment(frame: &mut Frame, event: &EventRecord, detail: &DetailState, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[1]);

    // Coordinator picker
    let (picked, picked_style) = match detail.coordinator() {
        Some(name) => (name, Style::default().fg(Color::White)),
        None => (COORDINATORS[0], Style::default().fg(Color::DarkGray)),
    };
    let picker = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ▾", picked), picked_style),
            Span::styled("   (c to change)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "Add New Coordinator",
            Style::default().fg(Color::LightMagenta),
        )),
    ])
    .block(panel("Assign Coordinator"));
    frame.render_widget(picker, left[0]);

    // Meeting rooms
    let rooms: Vec<ListItem> = data::meeting_rooms()
        .into_iter()
        .map(|room| {
            let star = if room.featured { "★ " } else { "  " };
            let name_style = if room.featured {
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(star, Style::default().fg(Color::Magenta)),
                    Span::styled(room.name, name_style),
                    Span::styled(
                        format!("  {} positions", room.positions),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  Start from {} - Ends at {}",
                        room.start_date, room.end_date
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    frame.render_widget(List::new(rooms).block(panel("Assign Contractor")), left[1]);

    // Event summary
    let summary = Paragraph::new(vec![
        Line::from(Span::styled(
            event.event_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Start: ", Style::default().fg(Color::DarkGray)),
            Span::raw(event.event_start.clone()),
            Span::styled("   End: ", Style::default().fg(Color::DarkGray)),
            Span::raw(event.event_end.clone()),
        ]),
        Line::from(Span::styled(
            event.venue.clone(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(panel("Event"));
    frame.render_widget(summary, right[0]);

    draw_positions(frame, detail, right[1]);
}

fn draw_positions(frame: &mut Frame, detail: &DetailState, area: Rect) {
    let header = Row::new(["Position", "Time", "Info", "Qty", "Contractor"])
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = data::positions()
        .into_iter()
        .enumerate()
        .map(|(row, p)| {
            let (contractor, style) = match detail.contractor(row) {
                Some(name) => (name, Style::default().fg(Color::White)),
                None => (CONTRACTORS[0], Style::default().fg(Color::DarkGray)),
            };
            Row::new(vec![
                Cell::from(p.position),
                Cell::from(p.time),
                Cell::from(p.info),
                Cell::from(p.quantity.to_string()),
                Cell::from(Span::styled(format!("{} ▾", contractor), style)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(26),
        Constraint::Percentage(18),
        Constraint::Percentage(16),
        Constraint::Percentage(8),
        Constraint::Percentage(32),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(panel("Positions"))
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = TableState::default().with_selected(Some(detail.position_cursor()));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_sow(frame: &mut Frame, event: &EventRecord, detail: &DetailState, area: Rect) {
    let positions = data::positions();
    let total: u32 = positions.iter().map(|p| p.quantity).sum();
    let rooms = data::meeting_rooms();

    let lines = vec![
        Line::from(Span::styled(
            format!("Statement of Work: {}", event.event_name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        label_line("Client:", &event.client_name),
        label_line("Dates:", &format!("{} - {}", event.event_start, event.event_end)),
        label_line("Venue:", &event.venue),
        label_line("Coordinator:", detail.coordinator().unwrap_or("unassigned")),
        label_line("Rooms:", &rooms.len().to_string()),
        label_line(
            "Staff:",
            &format!("{} across {} positions", total, positions.len()),
        ),
    ];
    let paragraph = Paragraph::new(lines).block(panel("Generate SOW"));
    frame.render_widget(paragraph, area);
}
