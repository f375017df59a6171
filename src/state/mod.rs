//! View-state for the admin panel.
//!
//! [`ViewState`] owns every piece of UI state: sidebar navigation, the
//! list/detail switch, table sort and paging, and the detail tabs. The app
//! shell calls its inbound operations in response to key presses and reads
//! [`ViewState::snapshot`] and [`ViewState::visible_rows`] to render.

pub mod detail;
pub mod navigation;
pub mod table;

use tracing::{debug, warn};

pub use detail::{DetailState, DetailTab, DetailView, MasterDetail};
pub use navigation::{MenuNode, NavigationState, NoOverlay, OverlayHandler, SidebarEntry};
pub use table::{EventTableState, SortDirection, SortField, SortState};

use crate::data::EventRecord;

/// Read-only copy of the state the renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub active_view: String,
    pub expanded: Vec<String>,
    pub selected_event: Option<u32>,
    pub sort: SortState,
    pub page: usize,
    pub active_tab: DetailTab,
}

/// Single container for all panel state.
#[derive(Debug, Clone)]
pub struct ViewState {
    menu: Vec<MenuNode>,
    nav: NavigationState,
    master_detail: MasterDetail,
    table: EventTableState,
    detail: DetailState,
}

impl ViewState {
    pub fn new(records: Vec<EventRecord>, page_size: usize) -> Self {
        Self {
            menu: MenuNode::default_tree(),
            nav: NavigationState::new(),
            master_detail: MasterDetail::default(),
            table: EventTableState::new(records, page_size),
            detail: DetailState::new(),
        }
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn table(&self) -> &EventTableState {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut EventTableState {
        &mut self.table
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn detail_mut(&mut self) -> &mut DetailState {
        &mut self.detail
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_view: self.nav.active_view().to_string(),
            expanded: self.nav.expanded().to_vec(),
            selected_event: self.master_detail.selected(),
            sort: self.table.sort(),
            page: self.table.page(),
            active_tab: self.detail.tab(),
        }
    }

    /// Title of the active view, for the header.
    pub fn active_title(&self) -> &'static str {
        navigation::leaf_title(&self.menu, self.nav.active_view()).unwrap_or("Event Requests")
    }

    /// Rows the sidebar currently shows.
    pub fn sidebar_entries(&self) -> Vec<SidebarEntry<'_>> {
        self.nav.visible_entries(&self.menu)
    }

    // Navigation

    pub fn toggle_menu(&mut self, menu_id: &str) {
        self.nav.toggle_menu(menu_id);
    }

    pub fn select_item(&mut self, item: &MenuNode, overlay: &mut dyn OverlayHandler) {
        self.nav.select_item(item, overlay);
    }

    /// Select the `index`-th visible sidebar row. Out-of-range is ignored.
    pub fn select_sidebar_entry(&mut self, index: usize, overlay: &mut dyn OverlayHandler) {
        let entries = self.nav.visible_entries(&self.menu);
        if let Some(entry) = entries.get(index) {
            let node = entry.node;
            self.nav.select_item(node, overlay);
        }
    }

    // Master/detail

    /// Show the detail screen for `event_id`, with fresh tab state.
    pub fn open_detail(&mut self, event_id: u32) {
        self.master_detail.open(event_id);
        self.detail = DetailState::new();
        if self.table.record(event_id).is_some() {
            debug!(event_id, "opened event detail");
        } else {
            warn!(event_id, "opened detail for unknown event");
        }
    }

    pub fn close_detail(&mut self) {
        if self.master_detail.is_detail() {
            debug!("closed event detail");
        }
        self.master_detail.close();
    }

    pub fn selected_event(&self) -> Option<u32> {
        self.master_detail.selected()
    }

    /// `None` while the list is showing.
    pub fn detail_view(&self) -> Option<DetailView<'_>> {
        self.master_detail
            .selected()
            .map(|id| DetailView::resolve(id, self.table.records()))
    }

    // Table

    pub fn sort_by(&mut self, field: SortField) {
        self.table.sort_by(field);
    }

    pub fn set_page(&mut self, n: usize) {
        self.table.set_page(n);
    }

    pub fn next_page(&mut self) {
        self.table.next_page();
    }

    pub fn prev_page(&mut self) {
        self.table.prev_page();
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &EventRecord> + '_ {
        self.table.visible_rows()
    }

    // Detail tabs

    pub fn select_tab(&mut self, tab_id: &str) {
        self.detail.select_tab(tab_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_events;

    fn state() -> ViewState {
        ViewState::new(sample_events(), 4)
    }

    #[test]
    fn test_initial_snapshot() {
        let snap = state().snapshot();
        assert_eq!(snap.active_view, "new-requests");
        assert_eq!(snap.expanded, vec!["events", "users"]);
        assert_eq!(snap.selected_event, None);
        assert_eq!(snap.sort, SortState::default());
        assert_eq!(snap.page, 1);
        assert_eq!(snap.active_tab, DetailTab::AssignCoordinator);
    }

    #[test]
    fn test_open_then_close_leaves_other_state_alone() {
        let mut state = state();
        state.sort_by(SortField::ClientName);
        state.set_page(2);
        state.toggle_menu("users");
        let before = state.snapshot();

        state.open_detail(5);
        assert_eq!(state.selected_event(), Some(5));
        state.close_detail();

        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_unknown_event_resolves_to_not_found() {
        let mut state = state();
        assert_eq!(state.detail_view(), None);

        state.open_detail(99);
        assert_eq!(state.detail_view(), Some(DetailView::NotFound(99)));

        state.close_detail();
        assert_eq!(state.detail_view(), None);
    }

    #[test]
    fn test_reopening_detail_resets_tab() {
        let mut state = state();
        state.open_detail(1);
        state.select_tab("generate-sow");
        state.detail_mut().cycle_coordinator();
        state.close_detail();

        state.open_detail(2);
        assert_eq!(state.snapshot().active_tab, DetailTab::AssignCoordinator);
        assert_eq!(state.detail().coordinator(), None);
    }

    #[test]
    fn test_expansion_survives_detail_visits() {
        let mut state = state();
        state.toggle_menu("events");
        state.open_detail(1);
        state.close_detail();
        assert_eq!(state.snapshot().expanded, vec!["users"]);
    }

    #[test]
    fn test_select_sidebar_entry_dispatches_by_variant() {
        let mut state = state();

        // Row 0 is the "Events" group.
        state.select_sidebar_entry(0, &mut NoOverlay);
        assert_eq!(state.snapshot().expanded, vec!["users"]);
        assert_eq!(state.snapshot().active_view, "new-requests");

        // With events collapsed, row 1 is "Positions".
        state.select_sidebar_entry(1, &mut NoOverlay);
        assert_eq!(state.snapshot().active_view, "positions");
        assert_eq!(state.active_title(), "Positions");

        state.select_sidebar_entry(100, &mut NoOverlay);
        assert_eq!(state.snapshot().active_view, "positions");
    }

    #[test]
    fn test_page_steps_go_through_container() {
        let mut state = state();
        state.next_page();
        state.next_page();
        assert_eq!(state.snapshot().page, 2);
        state.prev_page();
        state.prev_page();
        assert_eq!(state.snapshot().page, 1);
    }

    #[test]
    fn test_reopening_detail_resets_contractors() {
        let mut state = state();
        state.open_detail(1);
        state.detail_mut().select_next_position();
        state.detail_mut().cycle_contractor();
        assert_eq!(state.detail().contractor(1), Some("Contractor 1"));
        state.close_detail();

        state.open_detail(1);
        assert_eq!(state.detail().contractor(1), None);
        assert_eq!(state.detail().position_cursor(), 0);
    }

    #[test]
    fn test_visible_rows_scenario() {
        let mut state = state();
        let page: Vec<u32> = state.visible_rows().map(|r| r.id).collect();
        assert_eq!(page, vec![1, 2, 3, 4]);

        state.set_page(3);
        assert_eq!(state.snapshot().page, 2);
        let page: Vec<u32> = state.visible_rows().map(|r| r.id).collect();
        assert_eq!(page, vec![5, 6, 7]);
    }
}
