use tracing::trace;

use crate::core::{Operator, format_number};

use super::engine_state::RepeatOperation;
use super::{CalculatorEngine, NonFiniteResultPolicy, RepeatedEqualsBehavior};

impl CalculatorEngine {
    /// Runs the shared chaining step for binary operators and `Equals`.
    ///
    /// - no accumulator: the display value becomes the accumulator;
    /// - pending binary operator: it is applied to accumulator and display;
    /// - pending `Equals`: a further `Equals` replays the last operation
    ///   (see [`RepeatedEqualsBehavior`]), anything else restarts the chain
    ///   from the displayed value.
    ///
    /// Afterwards the engine awaits a fresh entry and `next` becomes pending.
    pub(super) fn apply_operator(&mut self, next: Operator) {
        let Some(input) = self.display_operand() else {
            self.enter_error_state("operator applied to error display");
            return;
        };
        if !input.is_finite() && self.config.non_finite_policy == NonFiniteResultPolicy::Error {
            self.enter_error_state("entry outside f64 range");
            return;
        }

        match (self.state.accumulator, self.state.pending) {
            (None, _) => {
                trace!(input, "accumulator seeded");
                self.state.accumulator = Some(input);
            }
            (Some(accumulator), Some(Operator::Binary(op))) => {
                let result = op.apply(accumulator, input);
                trace!(?op, accumulator, input, result, "binary operation applied");
                self.state.repeat = match next {
                    Operator::Equals => Some(RepeatOperation {
                        operator: op,
                        operand: input,
                    }),
                    Operator::Binary(_) => None,
                };
                if !self.publish_result(result) {
                    return;
                }
            }
            (Some(_), Some(Operator::Equals)) => {
                let repeat = match (next, self.config.repeated_equals) {
                    (Operator::Equals, RepeatedEqualsBehavior::RepeatLastOperation) => {
                        self.state.repeat
                    }
                    _ => None,
                };
                let result = match repeat {
                    Some(repeat) => repeat.operator.apply(input, repeat.operand),
                    None => input,
                };
                if !self.publish_result(result) {
                    return;
                }
            }
            (Some(_), None) => {}
        }

        self.state.awaiting_fresh_entry = true;
        self.state.pending = Some(next);
    }

    /// Stores `result` as accumulator and display.
    ///
    /// Returns `false` when the result was turned into the error state.
    fn publish_result(&mut self, result: f64) -> bool {
        if !result.is_finite() && self.config.non_finite_policy == NonFiniteResultPolicy::Error {
            self.enter_error_state("non-finite arithmetic result");
            return false;
        }
        self.state.accumulator = Some(result);
        self.state.display = format_number(result);
        true
    }
}
