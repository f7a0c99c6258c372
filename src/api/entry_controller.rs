use tracing::{debug, trace};

use crate::core::{Digit, entry_digit_count, is_editable_entry};

use super::CalculatorEngine;

impl CalculatorEngine {
    pub(super) fn input_digit(&mut self, digit: Digit) {
        let max_digits = self.config.max_entry_digits;
        let state = &mut self.state;

        if state.awaiting_fresh_entry || !is_editable_entry(&state.display) {
            state.display.clear();
            state.display.push(digit.as_char());
            state.awaiting_fresh_entry = false;
            return;
        }

        if state.display == "0" {
            state.display.clear();
            state.display.push(digit.as_char());
            return;
        }

        if let Some(limit) = max_digits {
            if entry_digit_count(&state.display) >= limit {
                trace!(limit, "entry digit limit reached");
                return;
            }
        }
        state.display.push(digit.as_char());
    }

    pub(super) fn input_decimal(&mut self) {
        let state = &mut self.state;

        if state.awaiting_fresh_entry || !is_editable_entry(&state.display) {
            state.set_display("0.");
            state.awaiting_fresh_entry = false;
            return;
        }

        if !state.display.contains('.') {
            state.display.push('.');
        }
    }

    pub(super) fn clear_all(&mut self) {
        debug!("clear all");
        self.state.reset_keeping_memory();
    }

    pub(super) fn clear_entry(&mut self) {
        trace!("clear entry");
        self.state.set_display("0");
        self.state.awaiting_fresh_entry = false;
    }
}
