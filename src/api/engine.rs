use tracing::{debug, trace};

use crate::core::{Command, ERROR_TOKEN, parse_number};
use crate::error::CalcResult;

use super::engine_state::{CalculatorState, ChainPhase, EntryPhase};
use super::validation::validate_engine_config;
use super::{CalculatorEngineConfig, NonFiniteResultPolicy};

/// Main facade consumed by host applications.
///
/// `CalculatorEngine` owns the whole calculator state and interprets one
/// [`Command`] at a time. Dispatch never fails: every outcome, including
/// errors, is encoded in the display string returned by
/// [`current_display`](Self::current_display).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorEngine {
    pub(super) config: CalculatorEngineConfig,
    pub(super) state: CalculatorState,
}

impl CalculatorEngine {
    /// Creates an engine in the cleared state with a validated config.
    pub fn new(config: CalculatorEngineConfig) -> CalcResult<Self> {
        let config = validate_engine_config(config)?;
        debug!(?config, "calculator engine created");
        Ok(Self {
            config,
            state: CalculatorState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> CalculatorEngineConfig {
        self.config
    }

    /// Text currently shown to the user.
    #[must_use]
    pub fn current_display(&self) -> &str {
        &self.state.display
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.state.display == ERROR_TOKEN
    }

    #[must_use]
    pub fn chain_phase(&self) -> ChainPhase {
        self.state.chain_phase()
    }

    #[must_use]
    pub fn entry_phase(&self) -> EntryPhase {
        self.state.entry_phase()
    }

    /// Applies one command to the engine state.
    pub fn dispatch(&mut self, command: Command) {
        trace!(%command, display = %self.state.display, "dispatch");
        match command {
            Command::Digit(digit) => self.input_digit(digit),
            Command::Decimal => self.input_decimal(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Percent => self.percent(),
            Command::SquareRoot => self.square_root(),
            Command::Operator(op) => self.apply_operator(op),
            Command::MemoryAdd => self.memory_add(),
            Command::MemorySubtract => self.memory_subtract(),
            Command::MemoryRecall => self.memory_recall(),
            Command::MemoryClear => self.memory_clear(),
            Command::ClearAll => self.clear_all(),
            Command::ClearEntry => self.clear_entry(),
        }
    }

    /// Applies every command in order and returns the resulting display.
    pub fn dispatch_all<I>(&mut self, commands: I) -> &str
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.dispatch(command);
        }
        self.current_display()
    }

    /// Numeric value of the display for use as an operand.
    ///
    /// The error marker has no value; under `Propagate` it behaves as `NaN`,
    /// otherwise callers treat it as "no operand".
    pub(super) fn display_operand(&self) -> Option<f64> {
        match parse_number(&self.state.display) {
            Some(value) => Some(value),
            None => match self.config.non_finite_policy {
                NonFiniteResultPolicy::Propagate => Some(f64::NAN),
                NonFiniteResultPolicy::Error => None,
            },
        }
    }

    /// Shows the error marker and abandons the current chain.
    pub(super) fn enter_error_state(&mut self, reason: &'static str) {
        debug!(reason, "calculator entered error state");
        let state = &mut self.state;
        state.set_display(ERROR_TOKEN);
        state.accumulator = None;
        state.pending = None;
        state.repeat = None;
        state.awaiting_fresh_entry = true;
    }
}
