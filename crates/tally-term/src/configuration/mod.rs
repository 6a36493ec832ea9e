//! Settings shared by the UI and the command-line front end.
//!
//! Values come from built-in defaults, then `config.toml`, then flags, and are
//! read back through [`Config::get`] and the typed helpers.

mod config;

pub use config::*;
