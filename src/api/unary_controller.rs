use tracing::trace;

use crate::core::{ERROR_TOKEN, format_number};

use super::{CalculatorEngine, NonFiniteResultPolicy};

impl CalculatorEngine {
    /// Negates the displayed value. `0` stays `0`; there is no `-0` display.
    pub(super) fn toggle_sign(&mut self) {
        let Some(value) = self.display_operand() else {
            trace!("toggle sign ignored on error display");
            return;
        };
        self.show_unary_result(-value);
    }

    pub(super) fn percent(&mut self) {
        let Some(value) = self.display_operand() else {
            trace!("percent ignored on error display");
            return;
        };
        self.show_unary_result(value / 100.0);
    }

    pub(super) fn square_root(&mut self) {
        match self.display_operand() {
            Some(value) if value >= 0.0 => {
                if self.show_unary_result(value.sqrt()) {
                    self.state.awaiting_fresh_entry = true;
                }
            }
            _ => {
                // Accumulator and pending operator are kept.
                let state = &mut self.state;
                state.set_display(ERROR_TOKEN);
                state.awaiting_fresh_entry = true;
                trace!("square root of negative value");
            }
        }
    }

    /// Shows a unary result, applying the non-finite policy.
    ///
    /// Returns `false` when the result was turned into the error state.
    fn show_unary_result(&mut self, result: f64) -> bool {
        if !result.is_finite() && self.config.non_finite_policy == NonFiniteResultPolicy::Error {
            self.enter_error_state("non-finite unary result");
            return false;
        }
        self.state.display = format_number(result);
        true
    }
}
