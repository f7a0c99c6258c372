mod chaining_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod engine_state;
mod entry_controller;
mod json_contract;
mod memory_controller;
mod snapshot_controller;
mod unary_controller;
mod validation;

pub use engine::CalculatorEngine;
pub use engine_config::{
    CalculatorEngineConfig, MAX_ENTRY_DIGITS_LIMIT, NonFiniteResultPolicy, RepeatedEqualsBehavior,
};
pub use engine_snapshot::{EngineSnapshot, RepeatOperationSnapshot};
pub use engine_state::{ChainPhase, EntryPhase};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
