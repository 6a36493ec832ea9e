//! Key routing for a calculator session
//!
//! A [`Router`] owns the session state (one calculator and one button grid) and
//! turns discrete key tokens into either cursor movement or calculator calls.
//! Typed shortcuts bypass the grid; `Enter` presses whatever button has focus.

use crate::calculator::{Calculator, Operation};
use crate::errors::CalcError;
use crate::grid::{ButtonGrid, ButtonKey};

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Delete,
    Esc,
    CtrlC,
    Char(char),
}

impl KeyToken {
    /// Parses the textual key names used for scripted input, e.g. `up`,
    /// `enter`, `ctrl+c` or a single character such as `7` or `+`.
    pub fn parse(name: &str) -> Option<KeyToken> {
        match name.to_ascii_lowercase().as_str() {
            "up" => return Some(KeyToken::Up),
            "down" => return Some(KeyToken::Down),
            "left" => return Some(KeyToken::Left),
            "right" => return Some(KeyToken::Right),
            "enter" => return Some(KeyToken::Enter),
            "backspace" => return Some(KeyToken::Backspace),
            "delete" | "del" => return Some(KeyToken::Delete),
            "esc" => return Some(KeyToken::Esc),
            "ctrl+c" => return Some(KeyToken::CtrlC),
            _ => {}
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeyToken::Char(c)),
            _ => None,
        }
    }
}

/// Outcome of handling a single key token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Moved,
    Pressed(ButtonKey),
    Ignored,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Router {
    calculator: Calculator,
    grid: ButtonGrid,
    track_focus: bool,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Router {
        Router::with_grid(ButtonGrid::new())
    }

    pub fn with_grid(grid: ButtonGrid) -> Router {
        Router {
            calculator: Calculator::new(),
            grid,
            track_focus: false,
        }
    }

    /// When enabled, typing a shortcut also moves the grid cursor onto the
    /// matching button. Off by default, so the cursor only follows arrow keys.
    pub fn with_focus_tracking(mut self, enabled: bool) -> Router {
        self.track_focus = enabled;
        self
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn grid(&self) -> &ButtonGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ButtonGrid {
        &mut self.grid
    }

    pub fn handle(&mut self, token: KeyToken) -> Result<Dispatch, CalcError> {
        match token {
            KeyToken::Up => self.grid.move_up(),
            KeyToken::Down => self.grid.move_down(),
            KeyToken::Left => self.grid.move_left(),
            KeyToken::Right => self.grid.move_right(),
            KeyToken::Esc | KeyToken::CtrlC | KeyToken::Char('q') => return Ok(Dispatch::Quit),
            KeyToken::Enter => {
                let key = self.grid.selected_button().key;
                self.press(key)?;
                return Ok(Dispatch::Pressed(key));
            }
            KeyToken::Backspace => return self.press_shortcut(ButtonKey::Backspace),
            KeyToken::Delete => return self.press_shortcut(ButtonKey::ClearEntry),
            KeyToken::Char(c) => {
                return match shortcut(c) {
                    Some(key) => self.press_shortcut(key),
                    None => {
                        log::trace!("ignoring unmapped key {:?}", c);
                        Ok(Dispatch::Ignored)
                    }
                };
            }
        }

        Ok(Dispatch::Moved)
    }

    /// Runs the calculator operation behind a logical key. Only `Equals` can
    /// fail; the error is returned and the session stays usable.
    pub fn press(&mut self, key: ButtonKey) -> Result<(), CalcError> {
        log::debug!("press {}", key);
        match key {
            ButtonKey::Digit(digit) => self.calculator.input_digit(digit),
            ButtonKey::Decimal => self.calculator.input_decimal(),
            ButtonKey::Operator(op) => self.calculator.input_operation(op),
            ButtonKey::Equals => self.calculator.calculate()?,
            ButtonKey::Clear => self.calculator.clear(),
            ButtonKey::ClearEntry => self.calculator.clear_entry(),
            ButtonKey::Backspace => self.calculator.backspace(),
        }

        Ok(())
    }

    fn press_shortcut(&mut self, key: ButtonKey) -> Result<Dispatch, CalcError> {
        if self.track_focus {
            if let Some((row, col)) = self.grid.position_of(key) {
                self.grid.select_button(row, col)?;
            }
        }

        self.press(key)?;
        Ok(Dispatch::Pressed(key))
    }
}

fn shortcut(c: char) -> Option<ButtonKey> {
    match c {
        '0'..='9' => Some(ButtonKey::Digit(c)),
        '.' => Some(ButtonKey::Decimal),
        'x' | 'X' => Some(ButtonKey::Operator(Operation::Multiply)),
        '=' => Some(ButtonKey::Equals),
        'c' | 'C' => Some(ButtonKey::Clear),
        'e' | 'E' => Some(ButtonKey::ClearEntry),
        _ => Operation::from_symbol(&c.to_string()).map(ButtonKey::Operator),
    }
}
