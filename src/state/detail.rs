// Event detail state.
// Which event is open, which tab is showing, and the coordinator and contractor pickers.

use tracing::{debug, warn};

use crate::data::{self, CONTRACTORS, COORDINATORS, EventRecord};

/// Tabs of the event detail screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    EventDetails,
    #[default]
    AssignCoordinator,
    SessionManagement,
    GenerateSow,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::EventDetails,
        DetailTab::AssignCoordinator,
        DetailTab::SessionManagement,
        DetailTab::GenerateSow,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            DetailTab::EventDetails => "event-details",
            DetailTab::AssignCoordinator => "assign-coordinator",
            DetailTab::SessionManagement => "session-management",
            DetailTab::GenerateSow => "generate-sow",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            DetailTab::EventDetails => "Event Details",
            DetailTab::AssignCoordinator => "Assign Coordinator",
            DetailTab::SessionManagement => "Session Management",
            DetailTab::GenerateSow => "Generate SOW",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Screen-local state of the detail view. Reset each time a detail opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailState {
    tab: DetailTab,
    /// Index into `COORDINATORS`; 0 is the unselected placeholder.
    coordinator: usize,
    /// Per position row, an index into `CONTRACTORS`; 0 is unassigned.
    contractors: Vec<usize>,
    /// Highlighted position row.
    position_cursor: usize,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            tab: DetailTab::default(),
            coordinator: 0,
            contractors: vec![0; data::positions().len()],
            position_cursor: 0,
        }
    }
}

impl DetailState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Switch to the tab named `tab_id`. Unknown ids leave the tab as is.
    pub fn select_tab(&mut self, tab_id: &str) {
        match DetailTab::from_id(tab_id) {
            Some(tab) => {
                self.tab = tab;
                debug!(tab = tab_id, "selected detail tab");
            }
            None => warn!(tab = tab_id, "ignoring unknown detail tab"),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    /// The chosen coordinator, if any.
    pub fn coordinator(&self) -> Option<&'static str> {
        (self.coordinator > 0).then(|| COORDINATORS[self.coordinator])
    }

    /// Advance the picker, wrapping back to the placeholder.
    pub fn cycle_coordinator(&mut self) {
        self.coordinator = (self.coordinator + 1) % COORDINATORS.len();
        debug!(coordinator = ?self.coordinator(), "picked coordinator");
    }

    pub fn position_cursor(&self) -> usize {
        self.position_cursor
    }

    /// Move the position cursor down, staying on the last row.
    pub fn select_next_position(&mut self) {
        if self.position_cursor + 1 < self.contractors.len() {
            self.position_cursor += 1;
        }
    }

    /// Move the position cursor up, staying on the first row.
    pub fn select_prev_position(&mut self) {
        self.position_cursor = self.position_cursor.saturating_sub(1);
    }

    /// Contractor assigned to position `row`, if any.
    pub fn contractor(&self, row: usize) -> Option<&'static str> {
        match self.contractors.get(row) {
            Some(&index) if index > 0 => Some(CONTRACTORS[index]),
            _ => None,
        }
    }

    /// Advance the contractor picker on the highlighted row.
    pub fn cycle_contractor(&mut self) {
        let row = self.position_cursor;
        if let Some(index) = self.contractors.get_mut(row) {
            *index = (*index + 1) % CONTRACTORS.len();
            debug!(row, contractor = ?self.contractor(row), "picked contractor");
        }
    }
}

/// What the detail screen should render for the selected id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailView<'a> {
    Found(&'a EventRecord),
    NotFound(u32),
}

impl<'a> DetailView<'a> {
    /// Look `id` up in `records`.
    pub fn resolve(id: u32, records: &'a [EventRecord]) -> Self {
        match records.iter().find(|r| r.id == id) {
            Some(record) => DetailView::Found(record),
            None => DetailView::NotFound(id),
        }
    }
}

/// List view vs. detail view, keyed by the selected event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MasterDetail {
    selected: Option<u32>,
}

impl MasterDetail {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn is_detail(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, event_id: u32) {
        self.selected = Some(event_id);
    }

    /// Back to the list. Closing twice is harmless.
    pub fn close(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_events;

    #[test]
    fn test_default_tab_is_assign_coordinator() {
        assert_eq!(DetailState::new().tab(), DetailTab::AssignCoordinator);
    }

    #[test]
    fn test_select_known_and_unknown_tabs() {
        let mut detail = DetailState::new();

        detail.select_tab("generate-sow");
        assert_eq!(detail.tab(), DetailTab::GenerateSow);

        detail.select_tab("bogus");
        assert_eq!(detail.tab(), DetailTab::GenerateSow);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut detail = DetailState::new();
        detail.select_tab("event-details");
        detail.prev_tab();
        assert_eq!(detail.tab(), DetailTab::GenerateSow);
        detail.next_tab();
        assert_eq!(detail.tab(), DetailTab::EventDetails);
    }

    #[test]
    fn test_coordinator_cycle() {
        let mut detail = DetailState::new();
        assert_eq!(detail.coordinator(), None);
        detail.cycle_coordinator();
        assert_eq!(detail.coordinator(), Some("John Doe"));
        detail.cycle_coordinator();
        assert_eq!(detail.coordinator(), Some("Jane Smith"));
        detail.cycle_coordinator();
        assert_eq!(detail.coordinator(), None);
    }

    #[test]
    fn test_contractor_cycle_on_highlighted_row() {
        let mut detail = DetailState::new();
        assert!((0..8).all(|row| detail.contractor(row).is_none()));

        detail.select_next_position();
        detail.select_next_position();
        detail.cycle_contractor();
        assert_eq!(detail.contractor(2), Some("Contractor 1"));
        detail.cycle_contractor();
        assert_eq!(detail.contractor(2), Some("Contractor 2"));
        detail.cycle_contractor();
        assert_eq!(detail.contractor(2), None);
        assert_eq!(detail.contractor(0), None);
    }

    #[test]
    fn test_position_cursor_stays_in_bounds() {
        let mut detail = DetailState::new();
        detail.select_prev_position();
        assert_eq!(detail.position_cursor(), 0);
        for _ in 0..20 {
            detail.select_next_position();
        }
        assert_eq!(detail.position_cursor(), 7);
    }

    #[test]
    fn test_resolve_found_and_missing() {
        let events = sample_events();
        assert!(matches!(DetailView::resolve(3, &events), DetailView::Found(r) if r.id == 3));
        assert_eq!(DetailView::resolve(42, &events), DetailView::NotFound(42));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut md = MasterDetail::default();
        md.close();
        assert!(!md.is_detail());

        md.open(2);
        assert_eq!(md.selected(), Some(2));
        md.close();
        md.close();
        assert_eq!(md.selected(), None);
    }
}
