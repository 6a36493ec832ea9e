//! Terminal user interface for the Tally calculator.
//!
//! This crate renders the calculator display and button grid with ratatui,
//! turns crossterm input into key tokens for the core router, and owns the
//! configuration store shared with the command-line front end.

pub mod application;
pub mod configuration;
pub mod domain;
pub use application::ui::{destruct_terminal_for_panic, render, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::Event;
pub use domain::services::{AppState, AppStateProps, EventsService};
