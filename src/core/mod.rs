pub mod number_format;
pub mod types;

pub use number_format::{
    ERROR_TOKEN, entry_digit_count, format_number, is_editable_entry, parse_number,
};
pub use types::{BinaryOperator, Command, Digit, Operator};
