//! eventdesk: a terminal admin panel for event requests.
//!
//! The [`state`] module holds the view-state machine; [`app`] and [`ui`]
//! drive it from a crossterm/ratatui terminal.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod state;
pub mod ui;
