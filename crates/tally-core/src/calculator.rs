//! Four-function calculator state machine
//!
//! The calculator keeps the text the user sees as the source of truth. Numbers
//! are parsed out of `display` whenever an operator or equals is applied, so
//! editing the text (backspace, clear entry) is always reflected in the next
//! result. Text that does not parse is read as zero rather than reported.

use std::fmt;

use crate::errors::CalcError;

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;

const GROUP_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Operation> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" => Some(Operation::Multiply),
            "/" => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }

    /// Glyph used on buttons and in the pending-operation indicator.
    pub fn glyph(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    first_operand: f64,
    second_operand: f64,
    operation: Option<Operation>,
    awaiting_new_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Calculator {
        Calculator {
            display: "0".to_string(),
            first_operand: 0.0,
            second_operand: 0.0,
            operation: None,
            awaiting_new_operand: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn second_operand(&self) -> f64 {
        self.second_operand
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    /// Appends a digit to the entry, or starts a new entry after an operator
    /// or result. Characters other than `0`-`9` are ignored.
    pub fn input_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            log::debug!("ignoring non-digit input {:?}", digit);
            return;
        }

        if self.awaiting_new_operand {
            self.display = digit.to_string();
            self.awaiting_new_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Records `op` as the pending operation. A previously pending operation is
    /// resolved first, which is what makes `3 + 4 *` show 7.
    pub fn input_operation(&mut self, op: Operation) {
        if self.operation.is_some() {
            // The new operator still applies to whatever is on screen.
            if let Err(err) = self.calculate() {
                log::debug!("chained calculation failed: {}", err);
            }
        }

        self.first_operand = parse_operand(&self.display);
        self.operation = Some(op);
        self.awaiting_new_operand = true;
        log::debug!("pending {} with first operand {}", op, self.first_operand);
    }

    /// Applies the pending operation to the first operand and the current entry.
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero. In that case
    /// the attempted divisor has already been stored as the second operand but
    /// nothing else changes.
    pub fn calculate(&mut self) -> Result<(), CalcError> {
        let Some(op) = self.operation else {
            return Ok(());
        };

        self.second_operand = parse_operand(&self.display);
        self.first_operand = op.apply(self.first_operand, self.second_operand)?;

        self.display = format_number(self.first_operand);
        self.operation = None;
        self.awaiting_new_operand = true;
        log::debug!("calculated {}", self.display);

        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Calculator::new();
    }

    /// Resets the visible entry only; the pending operation survives so a
    /// mistyped second operand can be re-entered.
    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
        self.awaiting_new_operand = false;
    }

    pub fn backspace(&mut self) {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    /// The entry with thousands separators, for presentation only.
    ///
    /// Grouping kicks in once the whole entry is longer than three characters,
    /// which is a no-op for short integer parts such as `1.23`.
    pub fn formatted_display(&self) -> String {
        if self.display.chars().count() <= 3 {
            return self.display.clone();
        }

        group_thousands(&self.display)
    }

    /// Describes the pending operation, e.g. `1,200 ×`.
    pub fn pending_indicator(&self) -> Option<String> {
        self.operation.map(|op| {
            format!(
                "{} {}",
                group_thousands(&format_number(self.first_operand)),
                op.glyph()
            )
        })
    }
}

fn parse_operand(text: &str) -> f64 {
    text.parse::<f64>().unwrap_or(0.0)
}

/// Shortest decimal text that parses back to `value`, never in exponent form.
/// Overflow renders as `+Inf` / `-Inf` and undefined results as `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value.is_sign_positive() { '+' } else { '-' };
        format!("{sign}Inf")
    } else {
        format!("{}", value)
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if !integer.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (idx, digit) in digits.iter().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(*digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}
