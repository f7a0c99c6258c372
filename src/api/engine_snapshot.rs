use serde::{Deserialize, Serialize};

use crate::core::{BinaryOperator, Operator};

use super::{CalculatorEngineConfig, ChainPhase, EntryPhase};

/// Serializable view of the `=` replay state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatOperationSnapshot {
    pub operator: BinaryOperator,
    pub operand: String,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
///
/// Numbers are stored in display form so non-finite values survive JSON.
/// `chain_phase` and `entry_phase` are derived and ignored on restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: CalculatorEngineConfig,
    pub display: String,
    pub accumulator: Option<String>,
    pub pending_operator: Option<Operator>,
    #[serde(default)]
    pub repeat_operation: Option<RepeatOperationSnapshot>,
    pub awaiting_fresh_entry: bool,
    pub memory: String,
    pub chain_phase: ChainPhase,
    pub entry_phase: EntryPhase,
}
