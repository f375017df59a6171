// App state and main event loop.
// Manages keyboard focus, the sidebar overlay, and key dispatch into the view-state.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use tracing::debug;

use crate::config::AppConfig;
use crate::data;
use crate::state::{DetailTab, OverlayHandler, SortField, ViewState};
use crate::ui;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Sidebar,
    #[default]
    Content,
}

impl Focus {
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Sidebar => Focus::Content,
            Focus::Content => Focus::Sidebar,
        }
    }
}

/// Sidebar drawn over the content on narrow terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarOverlay {
    pub open: bool,
}

impl OverlayHandler for SidebarOverlay {
    fn request_close(&mut self) {
        if self.open {
            debug!("closing sidebar overlay");
        }
        self.open = false;
    }
}

/// Main application state.
pub struct App {
    pub view: ViewState,
    pub focus: Focus,
    pub overlay: SidebarOverlay,
    /// Highlighted row among the visible sidebar entries.
    pub sidebar_cursor: usize,
    /// Set by the renderer when the terminal is too narrow for a docked sidebar.
    pub compact: bool,
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            view: ViewState::new(data::sample_events(), config.page_size()),
            focus: Focus::default(),
            overlay: SidebarOverlay::default(),
            sidebar_cursor: 0,
            compact: false,
            show_help: false,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Poll for one terminal event and dispatch key presses.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Apply a single key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        // The terminal may have narrowed since focus moved to the sidebar.
        if !self.sidebar_visible() && self.focus == Focus::Sidebar {
            self.focus = Focus::Content;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') => self.toggle_overlay(),
            KeyCode::Tab | KeyCode::BackTab if self.sidebar_visible() => {
                self.focus = self.focus.toggle()
            }
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key),
                Focus::Content if self.view.selected_event().is_some() => {
                    self.handle_detail_key(key)
                }
                Focus::Content => self.handle_list_key(key),
            },
        }
    }

    fn toggle_overlay(&mut self) {
        self.overlay.open = !self.overlay.open;
        self.focus = if self.overlay.open {
            Focus::Sidebar
        } else {
            Focus::Content
        };
    }

    /// Whether the sidebar is on screen at all.
    pub fn sidebar_visible(&self) -> bool {
        !self.compact || self.overlay.open
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let len = self.view.sidebar_entries().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.sidebar_cursor + 1 < len {
                    self.sidebar_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.view
                    .select_sidebar_entry(self.sidebar_cursor, &mut self.overlay);
                let len = self.view.sidebar_entries().len();
                self.sidebar_cursor = self.sidebar_cursor.min(len.saturating_sub(1));
                if self.compact && !self.overlay.open {
                    self.focus = Focus::Content;
                }
            }
            KeyCode::Esc if self.overlay.open => {
                self.overlay.request_close();
                self.focus = Focus::Content;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.view.table_mut().select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.view.table_mut().select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.view.prev_page(),
            KeyCode::Right | KeyCode::Char('l') => self.view.next_page(),
            KeyCode::Enter => {
                if let Some(id) = self.view.table().selected_record().map(|r| r.id) {
                    self.view.open_detail(id);
                }
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.view.sort_by(SortField::ALL[index]);
            }
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => self.view.close_detail(),
            KeyCode::Left | KeyCode::Char('h') => self.view.detail_mut().prev_tab(),
            KeyCode::Right | KeyCode::Char('l') => self.view.detail_mut().next_tab(),
            KeyCode::Char('c') => self.view.detail_mut().cycle_coordinator(),
            _ if matches!(
                self.view.detail().tab(),
                DetailTab::AssignCoordinator | DetailTab::SessionManagement
            ) =>
            {
                self.handle_positions_key(key)
            }
            _ => {}
        }
    }

    /// Row cursor and contractor picker of the positions table.
    fn handle_positions_key(&mut self, key: KeyEvent) {
        let detail = self.view.detail_mut();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => detail.select_prev_position(),
            KeyCode::Down | KeyCode::Char('j') => detail.select_next_position(),
            KeyCode::Char('a') => detail.cycle_contractor(),
            _ => {}
        }
    }
}
