use tracing::{debug, trace};

use crate::core::format_number;

use super::{CalculatorEngine, NonFiniteResultPolicy};

impl CalculatorEngine {
    pub(super) fn memory_add(&mut self) {
        self.update_memory(|memory, value| memory + value);
    }

    pub(super) fn memory_subtract(&mut self) {
        self.update_memory(|memory, value| memory - value);
    }

    pub(super) fn memory_recall(&mut self) {
        self.state.display = format_number(self.state.memory);
        self.state.awaiting_fresh_entry = true;
    }

    pub(super) fn memory_clear(&mut self) {
        trace!("memory cleared");
        self.state.memory = 0.0;
    }

    fn update_memory(&mut self, combine: impl FnOnce(f64, f64) -> f64) {
        let Some(value) = self.display_operand() else {
            trace!("memory update ignored on error display");
            return;
        };
        let updated = combine(self.state.memory, value);
        // Under the `Error` policy the register only ever holds finite values.
        if !updated.is_finite() && self.config.non_finite_policy == NonFiniteResultPolicy::Error {
            debug!(memory = self.state.memory, value, "memory update overflowed; ignored");
            return;
        }
        self.state.memory = updated;
    }
}
