//! Command-line front end for the Tally calculator
//!
//! The binary either opens the interactive terminal UI or replays key names
//! headlessly and prints the resulting display, which is handy for scripting
//! and for checking behaviour without a TTY.

pub mod headless;
pub mod interactive_ui;
