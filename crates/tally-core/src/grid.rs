//! Keyboard-navigable button layout
//!
//! The grid only tracks focus. Pressing a button means handing its
//! [`ButtonKey`] to the router, which decides what the calculator does.

use std::fmt;

use crate::calculator::Operation;
use crate::errors::CalcError;

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;

/// Logical identifier of a button, independent of its label and of the
/// physical key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKey {
    Digit(char),
    Decimal,
    Operator(Operation),
    Backspace,
    Clear,
    ClearEntry,
    Equals,
}

impl ButtonKey {
    pub fn id(&self) -> String {
        match self {
            ButtonKey::Digit(digit) => digit.to_string(),
            ButtonKey::Decimal => ".".to_string(),
            ButtonKey::Operator(op) => op.symbol().to_string(),
            ButtonKey::Backspace => "backspace".to_string(),
            ButtonKey::Clear => "c".to_string(),
            ButtonKey::ClearEntry => "ce".to_string(),
            ButtonKey::Equals => "enter".to_string(),
        }
    }

    pub fn from_id(id: &str) -> Option<ButtonKey> {
        match id {
            "." => Some(ButtonKey::Decimal),
            "backspace" => Some(ButtonKey::Backspace),
            "c" => Some(ButtonKey::Clear),
            "ce" => Some(ButtonKey::ClearEntry),
            "enter" => Some(ButtonKey::Equals),
            _ => {
                if let Some(op) = Operation::from_symbol(id) {
                    return Some(ButtonKey::Operator(op));
                }

                let mut chars = id.chars();
                match (chars.next(), chars.next()) {
                    (Some(digit), None) if digit.is_ascii_digit() => Some(ButtonKey::Digit(digit)),
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for ButtonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub key: ButtonKey,
}

impl Button {
    pub fn new(label: &str, key: ButtonKey) -> Button {
        Button {
            label: label.to_string(),
            key,
        }
    }

    fn digit(digit: char) -> Button {
        Button {
            label: digit.to_string(),
            key: ButtonKey::Digit(digit),
        }
    }

    fn operator(op: Operation) -> Button {
        Button::new(op.glyph(), ButtonKey::Operator(op))
    }
}

#[derive(Debug, Clone)]
pub struct ButtonGrid {
    rows: Vec<Vec<Button>>,
    selected_row: usize,
    selected_col: usize,
}

impl Default for ButtonGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonGrid {
    pub fn new() -> ButtonGrid {
        let rows = vec![
            vec![
                Button::new("C", ButtonKey::Clear),
                Button::new("CE", ButtonKey::ClearEntry),
                Button::new("⌫", ButtonKey::Backspace),
                Button::operator(Operation::Divide),
            ],
            vec![
                Button::digit('7'),
                Button::digit('8'),
                Button::digit('9'),
                Button::operator(Operation::Multiply),
            ],
            vec![
                Button::digit('4'),
                Button::digit('5'),
                Button::digit('6'),
                Button::operator(Operation::Subtract),
            ],
            vec![
                Button::digit('1'),
                Button::digit('2'),
                Button::digit('3'),
                Button::operator(Operation::Add),
            ],
            vec![
                Button::digit('0'),
                Button::new(".", ButtonKey::Decimal),
                Button::new("=", ButtonKey::Equals),
            ],
        ];

        ButtonGrid {
            rows,
            selected_row: 0,
            selected_col: 0,
        }
    }

    pub fn with_rows(rows: Vec<Vec<Button>>) -> Result<ButtonGrid, CalcError> {
        if rows.is_empty() {
            return Err(CalcError::InvalidLayout("layout has no rows".to_string()));
        }
        if let Some(idx) = rows.iter().position(|row| row.is_empty()) {
            return Err(CalcError::InvalidLayout(format!("row {} is empty", idx)));
        }

        Ok(ButtonGrid {
            rows,
            selected_row: 0,
            selected_col: 0,
        })
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    pub fn selected(&self) -> (usize, usize) {
        (self.selected_row, self.selected_col)
    }

    pub fn move_up(&mut self) {
        let row_count = self.rows.len();
        self.selected_row = (self.selected_row + row_count - 1) % row_count;
        self.clamp_col();
    }

    pub fn move_down(&mut self) {
        self.selected_row = (self.selected_row + 1) % self.rows.len();
        self.clamp_col();
    }

    pub fn move_left(&mut self) {
        let row_len = self.current_row_len();
        self.selected_col = (self.selected_col + row_len - 1) % row_len;
    }

    pub fn move_right(&mut self) {
        self.selected_col = (self.selected_col + 1) % self.current_row_len();
    }

    pub fn selected_button(&self) -> &Button {
        &self.rows[self.selected_row][self.selected_col]
    }

    pub fn select_button(&mut self, row: usize, col: usize) -> Result<(), CalcError> {
        match self.rows.get(row) {
            Some(buttons) if col < buttons.len() => {
                self.selected_row = row;
                self.selected_col = col;
                Ok(())
            }
            _ => Err(CalcError::InvalidSelection { row, col }),
        }
    }

    pub fn position_of(&self, key: ButtonKey) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_idx, row)| {
            row.iter()
                .position(|button| button.key == key)
                .map(|col_idx| (row_idx, col_idx))
        })
    }

    fn current_row_len(&self) -> usize {
        self.rows[self.selected_row].len()
    }

    // Rows can be shorter than the one we came from.
    fn clamp_col(&mut self) {
        let last = self.current_row_len() - 1;
        if self.selected_col > last {
            self.selected_col = last;
        }
    }
}
