//! calc-engine: deterministic four-function calculator engine.
//!
//! The engine interprets a stream of discrete commands (digits, decimal point,
//! operators, memory keys, unary functions) and keeps a single display string
//! plus the accumulator state behind chained arithmetic. Rendering buttons and
//! mapping physical input to [`Command`] values is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{CalculatorEngine, CalculatorEngineConfig};
pub use crate::core::{Command, Digit, Operator};
pub use error::{CalcError, CalcResult};
