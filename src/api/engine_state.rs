use serde::{Deserialize, Serialize};

use crate::core::{BinaryOperator, Operator};

/// Where the engine is in a chained computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainPhase {
    /// No accumulator stored.
    Idle,
    /// Accumulator stored, binary operator waiting for its right operand.
    Accumulating,
    /// Last operator was `Equals`; the accumulator holds a finished result.
    Resolved,
}

/// Whether the next digit extends the display or replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryPhase {
    Appending,
    Fresh,
}

/// Last binary operation applied by `Equals`, replayed by a repeated `Equals`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RepeatOperation {
    pub(crate) operator: BinaryOperator,
    pub(crate) operand: f64,
}

/// Complete mutable state of one calculator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CalculatorState {
    pub(crate) display: String,
    pub(crate) accumulator: Option<f64>,
    pub(crate) pending: Option<Operator>,
    pub(crate) repeat: Option<RepeatOperation>,
    pub(crate) awaiting_fresh_entry: bool,
    pub(crate) memory: f64,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_owned(),
            accumulator: None,
            pending: None,
            repeat: None,
            awaiting_fresh_entry: false,
            memory: 0.0,
        }
    }
}

impl CalculatorState {
    #[must_use]
    pub(crate) fn chain_phase(&self) -> ChainPhase {
        match (self.accumulator, self.pending) {
            (None, _) => ChainPhase::Idle,
            (Some(_), Some(Operator::Equals)) => ChainPhase::Resolved,
            (Some(_), _) => ChainPhase::Accumulating,
        }
    }

    #[must_use]
    pub(crate) fn entry_phase(&self) -> EntryPhase {
        if self.awaiting_fresh_entry {
            EntryPhase::Fresh
        } else {
            EntryPhase::Appending
        }
    }

    /// Resets everything except the memory register.
    pub(crate) fn reset_keeping_memory(&mut self) {
        *self = Self {
            memory: self.memory,
            ..Self::default()
        };
    }

    pub(crate) fn set_display(&mut self, text: &str) {
        self.display.clear();
        self.display.push_str(text);
    }
}
