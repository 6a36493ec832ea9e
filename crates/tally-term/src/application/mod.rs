//! Frame drawing and the main UI loop.

pub mod ui;
