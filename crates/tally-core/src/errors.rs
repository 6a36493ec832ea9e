//! Error types for the calculator core
//!
//! Arithmetic has exactly one failure mode, division by zero. The remaining
//! variants cover misuse of the grid API by the embedding application and never
//! arise from key input alone.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,
    #[error("Invalid button layout: {0}")]
    InvalidLayout(String),
    #[error("No button at row {row}, column {col}")]
    InvalidSelection { row: usize, col: usize },
}
