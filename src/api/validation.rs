use crate::core::{ERROR_TOKEN, is_editable_entry, parse_number};
use crate::error::{CalcError, CalcResult};

use super::engine_config::MAX_ENTRY_DIGITS_LIMIT;
use super::{CalculatorEngineConfig, NonFiniteResultPolicy};

pub(super) fn validate_engine_config(
    config: CalculatorEngineConfig,
) -> CalcResult<CalculatorEngineConfig> {
    if let Some(limit) = config.max_entry_digits {
        if !(1..=MAX_ENTRY_DIGITS_LIMIT).contains(&limit) {
            return Err(CalcError::InvalidConfig(format!(
                "max_entry_digits must be between 1 and {MAX_ENTRY_DIGITS_LIMIT}, got {limit}"
            )));
        }
    }
    Ok(config)
}

/// Checks that a restored display string is something the engine could have
/// produced itself.
pub(super) fn validate_display(display: &str) -> CalcResult<()> {
    if display == ERROR_TOKEN || is_editable_entry(display) || parse_number(display).is_some() {
        return Ok(());
    }
    Err(CalcError::InvalidData(format!(
        "display `{display}` is not a number or the error marker"
    )))
}

pub(super) fn parse_stored_number(text: &str, field_name: &str) -> CalcResult<f64> {
    parse_number(text).ok_or_else(|| {
        CalcError::InvalidData(format!("{field_name} `{text}` is not a serialized number"))
    })
}

/// Under the `Error` policy the engine never shows or stores non-finite
/// values, so restored state must not contain any either. A typed entry beyond
/// the `f64` range is still a valid display.
pub(super) fn validate_finite_for_policy(
    policy: NonFiniteResultPolicy,
    display: &str,
    numbers: &[(&str, Option<f64>)],
) -> CalcResult<()> {
    if policy != NonFiniteResultPolicy::Error {
        return Ok(());
    }
    if !is_editable_entry(display) && parse_number(display).is_some_and(|value| !value.is_finite())
    {
        return Err(CalcError::InvalidData(format!(
            "display `{display}` is not reachable under the error policy"
        )));
    }
    for (field_name, value) in numbers {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(CalcError::InvalidData(format!(
                    "{field_name} must be finite under the error policy, got {value}"
                )));
            }
        }
    }
    Ok(())
}
