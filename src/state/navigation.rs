// Sidebar navigation state.
// Tracks the active leaf view and which menu groups are expanded.

use tracing::debug;

/// A node in the sidebar menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNode {
    /// A group that shows or hides its children; never navigates.
    Expandable {
        id: &'static str,
        title: &'static str,
        children: Vec<MenuNode>,
    },
    /// A navigable view.
    Leaf {
        id: &'static str,
        title: &'static str,
        has_notification: bool,
    },
}

impl MenuNode {
    fn leaf(id: &'static str, title: &'static str) -> Self {
        MenuNode::Leaf {
            id,
            title,
            has_notification: false,
        }
    }

    fn group(id: &'static str, title: &'static str, children: Vec<MenuNode>) -> Self {
        MenuNode::Expandable {
            id,
            title,
            children,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            MenuNode::Expandable { id, .. } | MenuNode::Leaf { id, .. } => *id,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuNode::Expandable { title, .. } | MenuNode::Leaf { title, .. } => *title,
        }
    }

    pub fn is_expandable(&self) -> bool {
        matches!(self, MenuNode::Expandable { .. })
    }

    /// The fixed admin menu.
    pub fn default_tree() -> Vec<MenuNode> {
        vec![
            MenuNode::group(
                "events",
                "Events",
                vec![
                    MenuNode::leaf("new-requests", "New Requests"),
                    MenuNode::Leaf {
                        id: "estimate",
                        title: "Estimate",
                        has_notification: true,
                    },
                    MenuNode::leaf("events", "Events"),
                    MenuNode::leaf("partial-requests", "Partial Requests"),
                ],
            ),
            MenuNode::leaf("positions", "Positions"),
            MenuNode::leaf("contractors", "Contractors"),
            MenuNode::group(
                "users",
                "Users",
                vec![
                    MenuNode::leaf("admins", "Admins"),
                    MenuNode::leaf("clients", "Clients"),
                    MenuNode::leaf("coordinators", "Coordinators"),
                ],
            ),
            MenuNode::leaf("profile", "Profile"),
        ]
    }
}

/// Find the title of a leaf by id anywhere in the tree.
pub fn leaf_title(tree: &[MenuNode], leaf_id: &str) -> Option<&'static str> {
    tree.iter().find_map(|node| match node {
        MenuNode::Leaf { id, title, .. } if *id == leaf_id => Some(*title),
        MenuNode::Leaf { .. } => None,
        MenuNode::Expandable { children, .. } => leaf_title(children, leaf_id),
    })
}

/// Receives the request to dismiss the sidebar overlay after a leaf is chosen.
///
/// The navigation state only asks; whoever owns the overlay decides what
/// closing means.
pub trait OverlayHandler {
    fn request_close(&mut self);
}

/// Handler for callers with no overlay to close.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlay;

impl OverlayHandler for NoOverlay {
    fn request_close(&mut self) {}
}

/// A row the sidebar currently shows.
#[derive(Debug, Clone, Copy)]
pub struct SidebarEntry<'a> {
    pub node: &'a MenuNode,
    /// 0 for top-level items, 1 for children of an expanded group.
    pub depth: u8,
}

/// Leaf view shown on startup.
pub const DEFAULT_VIEW: &str = "new-requests";

/// Groups expanded on startup.
pub const DEFAULT_EXPANDED: [&str; 2] = ["events", "users"];

/// Active view plus expanded groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    active_view: String,
    /// Insertion-ordered set of expanded group ids.
    expanded: Vec<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_view: DEFAULT_VIEW.to_string(),
            expanded: DEFAULT_EXPANDED.iter().map(|id| id.to_string()).collect(),
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> &str {
        &self.active_view
    }

    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    pub fn is_expanded(&self, menu_id: &str) -> bool {
        self.expanded.iter().any(|id| id == menu_id)
    }

    /// Flip whether `menu_id` is expanded. The active view is untouched.
    pub fn toggle_menu(&mut self, menu_id: &str) {
        if let Some(pos) = self.expanded.iter().position(|id| id == menu_id) {
            self.expanded.remove(pos);
            debug!(menu = menu_id, "collapsed menu");
        } else {
            self.expanded.push(menu_id.to_string());
            debug!(menu = menu_id, "expanded menu");
        }
    }

    /// Make `leaf_id` the active view and ask the overlay to close.
    pub fn select_leaf(&mut self, leaf_id: &str, overlay: &mut dyn OverlayHandler) {
        self.active_view = leaf_id.to_string();
        debug!(view = leaf_id, "selected view");
        overlay.request_close();
    }

    /// Groups toggle, leaves navigate.
    pub fn select_item(&mut self, item: &MenuNode, overlay: &mut dyn OverlayHandler) {
        match item {
            MenuNode::Expandable { id, .. } => self.toggle_menu(id),
            MenuNode::Leaf { id, .. } => self.select_leaf(id, overlay),
        }
    }

    /// Flatten the tree into the rows currently visible in the sidebar.
    pub fn visible_entries<'a>(&self, tree: &'a [MenuNode]) -> Vec<SidebarEntry<'a>> {
        let mut entries = Vec::new();
        for node in tree {
            entries.push(SidebarEntry { node, depth: 0 });
            if let MenuNode::Expandable { id, children, .. } = node {
                if self.is_expanded(id) {
                    entries.extend(children.iter().map(|node| SidebarEntry { node, depth: 1 }));
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingOverlay {
        closes: usize,
    }

    impl OverlayHandler for CountingOverlay {
        fn request_close(&mut self) {
            self.closes += 1;
        }
    }

    #[test]
    fn test_default_expansion_and_view() {
        let nav = NavigationState::new();
        assert_eq!(nav.active_view(), "new-requests");
        assert_eq!(nav.expanded(), ["events", "users"]);
    }

    #[test]
    fn test_toggle_menu_round_trip() {
        let mut nav = NavigationState::new();

        nav.toggle_menu("events");
        assert_eq!(nav.expanded(), ["users"]);

        nav.toggle_menu("events");
        assert_eq!(nav.expanded(), ["users", "events"]);
    }

    #[test]
    fn test_toggle_membership_follows_parity() {
        let mut nav = NavigationState::new();
        let sequence = ["positions", "users", "positions", "positions", "users", "users"];

        for (i, id) in sequence.iter().enumerate() {
            nav.toggle_menu(id);
            let calls = sequence[..=i].iter().filter(|s| *s == id).count();
            let initially = DEFAULT_EXPANDED.contains(id);
            assert_eq!(nav.is_expanded(id), initially ^ (calls % 2 == 1));
        }
    }

    #[test]
    fn test_groups_never_change_view_or_close_overlay() {
        let tree = MenuNode::default_tree();
        let mut nav = NavigationState::new();
        let mut overlay = CountingOverlay::default();

        nav.select_item(&tree[3], &mut overlay);
        assert_eq!(nav.active_view(), "new-requests");
        assert!(!nav.is_expanded("users"));
        assert_eq!(overlay.closes, 0);
    }

    #[test]
    fn test_leaf_selects_view_and_requests_close() {
        let tree = MenuNode::default_tree();
        let mut nav = NavigationState::new();
        let mut overlay = CountingOverlay::default();

        nav.select_item(&tree[1], &mut overlay);
        assert_eq!(nav.active_view(), "positions");
        assert_eq!(overlay.closes, 1);

        // Leaf that shares its id with its parent group.
        let MenuNode::Expandable { children, .. } = &tree[0] else {
            panic!("events should be a group");
        };
        nav.select_item(&children[2], &mut overlay);
        assert_eq!(nav.active_view(), "events");
        assert!(nav.is_expanded("events"));
        assert_eq!(overlay.closes, 2);
    }

    #[test]
    fn test_select_leaf_without_overlay() {
        let mut nav = NavigationState::new();
        nav.select_leaf("profile", &mut NoOverlay);
        assert_eq!(nav.active_view(), "profile");
    }

    #[test]
    fn test_visible_entries_follow_expansion() {
        let tree = MenuNode::default_tree();
        let mut nav = NavigationState::new();

        // 5 top-level + 4 event children + 3 user children
        assert_eq!(nav.visible_entries(&tree).len(), 12);

        nav.toggle_menu("users");
        let entries = nav.visible_entries(&tree);
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[1].node.id(), "new-requests");
        assert_eq!(entries[1].depth, 1);
        assert_eq!(entries.last().unwrap().node.id(), "profile");
    }

    #[test]
    fn test_leaf_title_lookup() {
        let tree = MenuNode::default_tree();
        assert_eq!(leaf_title(&tree, "estimate"), Some("Estimate"));
        assert_eq!(leaf_title(&tree, "coordinators"), Some("Coordinators"));
        assert_eq!(leaf_title(&tree, "users"), None);
    }
}
