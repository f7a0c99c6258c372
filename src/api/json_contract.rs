use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

use super::{CalculatorEngine, EngineSnapshot};

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope around [`EngineSnapshot`] for persisted calculator
/// sessions and `calc_replay` traces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl From<EngineSnapshot> for EngineSnapshotJsonContractV1 {
    fn from(snapshot: EngineSnapshot) -> Self {
        Self {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot,
        }
    }
}

impl EngineSnapshotJsonContractV1 {
    fn into_snapshot(self) -> CalcResult<EngineSnapshot> {
        match self.schema_version {
            ENGINE_SNAPSHOT_JSON_SCHEMA_V1 => Ok(self.snapshot),
            other => Err(CalcError::InvalidData(format!(
                "unsupported snapshot schema version: {other}"
            ))),
        }
    }
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> CalcResult<String> {
        let payload = EngineSnapshotJsonContractV1::from(self.clone());
        serde_json::to_string_pretty(&payload)
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize snapshot v1: {e}")))
    }

    /// Reads a saved calculator session.
    ///
    /// Accepts the versioned envelope written by
    /// [`to_json_contract_v1_pretty`](Self::to_json_contract_v1_pretty) and the
    /// bare snapshot object written by
    /// [`CalculatorEngine::snapshot_json_pretty`]. Only parsing happens here;
    /// field consistency is checked by [`CalculatorEngine::from_snapshot`].
    pub fn from_json_compat_str(input: &str) -> CalcResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| CalcError::InvalidData(format!("snapshot is not valid json: {e}")))?;

        if value.get("schema_version").is_some() {
            let payload: EngineSnapshotJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| CalcError::InvalidData(format!("malformed snapshot envelope: {e}")))?;
            return payload.into_snapshot();
        }
        serde_json::from_value(value)
            .map_err(|e| CalcError::InvalidData(format!("malformed snapshot: {e}")))
    }
}

impl CalculatorEngine {
    pub fn snapshot_json_contract_v1_pretty(&self) -> CalcResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Restores an engine from either JSON shape produced by this crate.
    pub fn from_snapshot_json(input: &str) -> CalcResult<Self> {
        let snapshot = EngineSnapshot::from_json_compat_str(input)?;
        Self::from_snapshot(&snapshot)
    }
}
