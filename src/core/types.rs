use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// A single decimal digit in `0..=9`.
///
/// Construction is validated, so a `Command::Digit` can never carry a
/// non-digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> CalcResult<Self> {
        if value > 9 {
            return Err(CalcError::InvalidDigit(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|value| Self(value as u8))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Binary arithmetic operators that can be chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

/// Operator keys: the four binary operators plus `Equals`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Binary(BinaryOperator),
    Equals,
}

impl Operator {
    pub const ADD: Self = Self::Binary(BinaryOperator::Add);
    pub const SUBTRACT: Self = Self::Binary(BinaryOperator::Subtract);
    pub const MULTIPLY: Self = Self::Binary(BinaryOperator::Multiply);
    pub const DIVIDE: Self = Self::Binary(BinaryOperator::Divide);

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Binary(op) => op.symbol(),
            Self::Equals => "=",
        }
    }
}

impl From<BinaryOperator> for Operator {
    fn from(op: BinaryOperator) -> Self {
        Self::Binary(op)
    }
}

/// The closed set of inputs accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Digit(Digit),
    Decimal,
    ToggleSign,
    Percent,
    SquareRoot,
    Operator(Operator),
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    ClearAll,
    ClearEntry,
}

impl Command {
    /// Shorthand for `Command::Digit` that validates the value.
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    #[must_use]
    pub fn operator(op: impl Into<Operator>) -> Self {
        Self::Operator(op.into())
    }

    #[must_use]
    pub fn equals() -> Self {
        Self::Operator(Operator::Equals)
    }

    /// Parses a whitespace-separated script of command tokens.
    ///
    /// Multi-digit tokens such as `120` expand into one `Digit` command per
    /// character, so `12 + 30 =` is a valid script.
    pub fn parse_sequence(script: &str) -> CalcResult<Vec<Self>> {
        let mut commands = Vec::new();
        for token in script.split_whitespace() {
            if token.len() > 1 && token.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
                for ch in token.chars() {
                    commands.push(if ch == '.' {
                        Self::Decimal
                    } else {
                        Digit::from_char(ch)
                            .map(Self::Digit)
                            .ok_or_else(|| CalcError::UnknownCommand(token.to_owned()))?
                    });
                }
                continue;
            }
            commands.push(token.parse()?);
        }
        Ok(commands)
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(token: &str) -> CalcResult<Self> {
        let mut chars = token.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::from_char(ch) {
                return Ok(Self::Digit(digit));
            }
        }

        let command = match token {
            "." => Self::Decimal,
            "±" | "+/-" => Self::ToggleSign,
            "%" => Self::Percent,
            "√" | "sqrt" => Self::SquareRoot,
            "+" => Self::Operator(Operator::ADD),
            "-" | "−" => Self::Operator(Operator::SUBTRACT),
            "×" | "*" | "x" => Self::Operator(Operator::MULTIPLY),
            "÷" | "/" => Self::Operator(Operator::DIVIDE),
            "=" => Self::Operator(Operator::Equals),
            "M+" => Self::MemoryAdd,
            "M-" => Self::MemorySubtract,
            "MR" => Self::MemoryRecall,
            "MC" => Self::MemoryClear,
            "AC" => Self::ClearAll,
            "CE" => Self::ClearEntry,
            _ => return Err(CalcError::UnknownCommand(token.to_owned())),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(digit) => write!(f, "{}", digit.as_char()),
            Self::Decimal => f.write_str("."),
            Self::ToggleSign => f.write_str("±"),
            Self::Percent => f.write_str("%"),
            Self::SquareRoot => f.write_str("√"),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::MemoryAdd => f.write_str("M+"),
            Self::MemorySubtract => f.write_str("M-"),
            Self::MemoryRecall => f.write_str("MR"),
            Self::MemoryClear => f.write_str("MC"),
            Self::ClearAll => f.write_str("AC"),
            Self::ClearEntry => f.write_str("CE"),
        }
    }
}
