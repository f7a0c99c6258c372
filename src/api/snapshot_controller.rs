use tracing::debug;

use crate::core::format_number;
use crate::error::{CalcError, CalcResult};

use super::engine_state::{CalculatorState, RepeatOperation};
use super::validation::{
    parse_stored_number, validate_display, validate_engine_config, validate_finite_for_policy,
};
use super::{CalculatorEngine, EngineSnapshot, RepeatOperationSnapshot};

impl CalculatorEngine {
    /// Builds a deterministic snapshot of the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let state = &self.state;
        EngineSnapshot {
            config: self.config,
            display: state.display.clone(),
            accumulator: state.accumulator.map(format_number),
            pending_operator: state.pending,
            repeat_operation: state.repeat.map(|repeat| RepeatOperationSnapshot {
                operator: repeat.operator,
                operand: format_number(repeat.operand),
            }),
            awaiting_fresh_entry: state.awaiting_fresh_entry,
            memory: format_number(state.memory),
            chain_phase: state.chain_phase(),
            entry_phase: state.entry_phase(),
        }
    }

    /// Rebuilds an engine from a snapshot, validating every field.
    pub fn from_snapshot(snapshot: &EngineSnapshot) -> CalcResult<Self> {
        let config = validate_engine_config(snapshot.config)?;
        validate_display(&snapshot.display)?;

        let accumulator = snapshot
            .accumulator
            .as_deref()
            .map(|text| parse_stored_number(text, "accumulator"))
            .transpose()?;
        let repeat = snapshot
            .repeat_operation
            .as_ref()
            .map(|repeat| {
                parse_stored_number(&repeat.operand, "repeat operand").map(|operand| {
                    RepeatOperation {
                        operator: repeat.operator,
                        operand,
                    }
                })
            })
            .transpose()?;
        let memory = parse_stored_number(&snapshot.memory, "memory")?;
        validate_finite_for_policy(
            config.non_finite_policy,
            &snapshot.display,
            &[
                ("accumulator", accumulator),
                ("repeat operand", repeat.map(|repeat| repeat.operand)),
                ("memory", Some(memory)),
            ],
        )?;

        if accumulator.is_none() && snapshot.pending_operator.is_some() {
            return Err(CalcError::InvalidData(
                "pending operator requires an accumulator".to_owned(),
            ));
        }

        debug!(display = %snapshot.display, "engine restored from snapshot");
        Ok(Self {
            config,
            state: CalculatorState {
                display: snapshot.display.clone(),
                accumulator,
                pending: snapshot.pending_operator,
                repeat,
                awaiting_fresh_entry: snapshot.awaiting_fresh_entry,
                memory,
            },
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
