use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// How arithmetic results that are not finite (division by zero, overflow)
/// reach the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonFiniteResultPolicy {
    /// Show `Error`, start a fresh entry and drop the pending chain, the same
    /// way a negative square root is reported.
    #[default]
    Error,
    /// Show the raw `Infinity`, `-Infinity` or `NaN` token and keep chaining
    /// with it.
    Propagate,
}

/// What a second consecutive `=` does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatedEqualsBehavior {
    /// Re-apply the last binary operator with the same right operand
    /// (`5 + 3 = =` shows `11`).
    #[default]
    RepeatLastOperation,
    /// Keep the displayed value as the result (`5 + 3 = =` shows `8`).
    HoldResult,
}

/// Upper bound accepted for `max_entry_digits`.
pub const MAX_ENTRY_DIGITS_LIMIT: usize = 64;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist calculator preferences
/// next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorEngineConfig {
    #[serde(default)]
    pub non_finite_policy: NonFiniteResultPolicy,
    #[serde(default)]
    pub repeated_equals: RepeatedEqualsBehavior,
    /// Digits typed beyond this many are ignored. `None` means unbounded.
    /// Sign, decimal point and the leading `0` of a `0.` entry do not count.
    #[serde(default)]
    pub max_entry_digits: Option<usize>,
}

impl CalculatorEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_non_finite_policy(mut self, policy: NonFiniteResultPolicy) -> Self {
        self.non_finite_policy = policy;
        self
    }

    #[must_use]
    pub fn with_repeated_equals(mut self, behavior: RepeatedEqualsBehavior) -> Self {
        self.repeated_equals = behavior;
        self
    }

    #[must_use]
    pub fn with_max_entry_digits(mut self, max_entry_digits: Option<usize>) -> Self {
        self.max_entry_digits = max_entry_digits;
        self
    }

    /// Serializes config as pretty JSON.
    pub fn to_json_pretty(self) -> CalcResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CalcResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalcError::InvalidData(format!("failed to parse config: {e}")))
    }
}
