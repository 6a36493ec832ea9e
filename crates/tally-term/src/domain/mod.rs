//! Session state and input translation for the terminal UI, kept apart from
//! how frames are drawn.

pub mod models;
pub mod services;
