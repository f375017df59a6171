// Event table state.
// Sort column and direction, page selection, and the row cursor.

use std::cmp::Ordering;

use ratatui::widgets::TableState;
use tracing::debug;

use crate::data::EventRecord;

/// Sortable table columns, one per string field of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    EventName,
    EventStart,
    EventEnd,
    ClientName,
    ContactInfo,
    Venue,
}

impl SortField {
    /// All columns in display order.
    pub const ALL: [SortField; 6] = [
        SortField::EventName,
        SortField::EventStart,
        SortField::EventEnd,
        SortField::ClientName,
        SortField::ContactInfo,
        SortField::Venue,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortField::EventName => "Event Name",
            SortField::EventStart => "Event Start",
            SortField::EventEnd => "Event End",
            SortField::ClientName => "Client Name",
            SortField::ContactInfo => "Contact Info",
            SortField::Venue => "Venue",
        }
    }

    /// Camel-case field name, as logged on sort (`"clientName"` etc).
    pub fn key(&self) -> &'static str {
        match self {
            SortField::EventName => "eventName",
            SortField::EventStart => "eventStart",
            SortField::EventEnd => "eventEnd",
            SortField::ClientName => "clientName",
            SortField::ContactInfo => "contactInfo",
            SortField::Venue => "venue",
        }
    }

    /// The value of this column for a record.
    pub fn value<'a>(&self, record: &'a EventRecord) -> &'a str {
        match self {
            SortField::EventName => &record.event_name,
            SortField::EventStart => &record.event_start,
            SortField::EventEnd => &record.event_end,
            SortField::ClientName => &record.client_name,
            SortField::ContactInfo => &record.contact_info,
            SortField::Venue => &record.venue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Direction for `field` if it is the active column.
    pub fn direction_for(&self, field: SortField) -> Option<SortDirection> {
        (self.field == Some(field)).then_some(self.direction)
    }
}

/// Sort, pagination and row selection over a fixed set of events.
#[derive(Debug, Clone)]
pub struct EventTableState {
    records: Vec<EventRecord>,
    page_size: usize,
    sort: SortState,
    page: usize,
    /// Row cursor within the current page.
    pub table_state: TableState,
}

impl EventTableState {
    /// `page_size` is floored at one row.
    pub fn new(records: Vec<EventRecord>, page_size: usize) -> Self {
        let mut state = Self {
            records,
            page_size: page_size.max(1),
            sort: SortState::default(),
            page: 1,
            table_state: TableState::default(),
        };
        state.reset_selection();
        state
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn record(&self, id: u32) -> Option<&EventRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; at least one even with no records.
    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.page_size).max(1)
    }

    /// Same column flips direction; a new column starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort.field == Some(field) {
            self.sort.direction = self.sort.direction.flipped();
        } else {
            self.sort = SortState {
                field: Some(field),
                direction: SortDirection::Ascending,
            };
        }
        debug!(field = field.key(), direction = ?self.sort.direction, "sorted table");
        self.reset_selection();
    }

    /// Go to page `n`, clamped into `1..=page_count`.
    pub fn set_page(&mut self, n: usize) {
        let clamped = n.clamp(1, self.page_count());
        if clamped != n {
            debug!(requested = n, page = clamped, "clamped page");
        }
        self.page = clamped;
        self.reset_selection();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Records in sort order. Ties keep their original relative order.
    fn sorted(&self) -> Vec<&EventRecord> {
        let mut rows: Vec<&EventRecord> = self.records.iter().collect();
        if let Some(field) = self.sort.field {
            rows.sort_by(|a, b| {
                let ord: Ordering = field.value(a).cmp(field.value(b));
                match self.sort.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        rows
    }

    /// Rows on the current page, in the current sort order.
    ///
    /// Recomputed on every call, so each call yields a fresh iterator.
    pub fn visible_rows(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        let start = (self.page - 1) * self.page_size;
        self.sorted().into_iter().skip(start).take(self.page_size)
    }

    pub fn visible_len(&self) -> usize {
        self.visible_rows().count()
    }

    /// The event under the row cursor.
    pub fn selected_record(&self) -> Option<&EventRecord> {
        let index = self.table_state.selected()?;
        self.visible_rows().nth(index)
    }

    /// Move the cursor down, staying on the last row.
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Move the cursor up, staying on the first row.
    pub fn select_prev(&mut self) {
        if self.visible_len() == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Put the cursor on the first row of the page, if there is one.
    pub fn reset_selection(&mut self) {
        let first = (self.visible_len() > 0).then_some(0);
        self.table_state.select(first);
    }
}
