//! Core of the Tally terminal calculator.
//!
//! This crate holds everything with state and invariants: the four-function
//! calculator, the button grid the user navigates, and the router that maps key
//! tokens onto both. It has no terminal dependency so the same session logic
//! drives the interactive UI and headless key replay.

pub mod calculator;
pub mod errors;
pub mod grid;
pub mod router;

pub use calculator::{Calculator, Operation};
pub use errors::CalcError;
pub use grid::{Button, ButtonGrid, ButtonKey};
pub use router::{Dispatch, KeyToken, Router};
