use calc_engine::api::{CalculatorEngine, CalculatorEngineConfig, ChainPhase, NonFiniteResultPolicy};
use calc_engine::core::{Command, Operator, format_number, is_editable_entry, parse_number};
use proptest::prelude::*;

fn digit_command(value: u8) -> Command {
    Command::digit(value).expect("digit in range")
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        6 => (0u8..=9).prop_map(digit_command),
        1 => Just(Command::Decimal),
        1 => Just(Command::ToggleSign),
        1 => Just(Command::Percent),
        1 => Just(Command::SquareRoot),
        1 => Just(Command::Operator(Operator::ADD)),
        1 => Just(Command::Operator(Operator::SUBTRACT)),
        1 => Just(Command::Operator(Operator::MULTIPLY)),
        1 => Just(Command::Operator(Operator::DIVIDE)),
        2 => Just(Command::Operator(Operator::Equals)),
        1 => Just(Command::MemoryAdd),
        1 => Just(Command::MemorySubtract),
        1 => Just(Command::MemoryRecall),
        1 => Just(Command::MemoryClear),
        1 => Just(Command::ClearAll),
        1 => Just(Command::ClearEntry),
    ]
}

fn policy_strategy() -> impl Strategy<Value = NonFiniteResultPolicy> {
    prop_oneof![
        Just(NonFiniteResultPolicy::Error),
        Just(NonFiniteResultPolicy::Propagate),
    ]
}

proptest! {
    #[test]
    fn digit_entry_concatenates_with_leading_zeros_collapsed(
        digits in prop::collection::vec(0u8..=9, 1..24)
    ) {
        let mut engine = CalculatorEngine::default();
        engine.dispatch_all(digits.iter().copied().map(digit_command));

        let typed: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(engine.current_display(), expected);
    }

    #[test]
    fn toggle_sign_twice_restores_value(
        whole in prop::collection::vec(0u8..=9, 1..8),
        fraction in prop::collection::vec(0u8..=9, 0..6)
    ) {
        let mut engine = CalculatorEngine::default();
        engine.dispatch_all(whole.iter().copied().map(digit_command));
        if !fraction.is_empty() {
            engine.dispatch(Command::Decimal);
            engine.dispatch_all(fraction.iter().copied().map(digit_command));
        }
        let typed = parse_number(engine.current_display()).expect("entry is numeric");

        engine.dispatch(Command::ToggleSign);
        engine.dispatch(Command::ToggleSign);

        prop_assert_eq!(engine.current_display(), format_number(typed));
        prop_assert_eq!(parse_number(engine.current_display()), Some(typed));
    }

    #[test]
    fn binary_operations_match_f64_arithmetic(
        lhs in 0u32..100_000,
        rhs in 1u32..100_000,
        op_index in 0usize..4
    ) {
        let (token, expected) = match op_index {
            0 => ("+", f64::from(lhs) + f64::from(rhs)),
            1 => ("-", f64::from(lhs) - f64::from(rhs)),
            2 => ("×", f64::from(lhs) * f64::from(rhs)),
            _ => ("÷", f64::from(lhs) / f64::from(rhs)),
        };
        let script = format!("{lhs} {token} {rhs} =");
        let mut engine = CalculatorEngine::default();
        engine.dispatch_all(Command::parse_sequence(&script).expect("valid script"));

        prop_assert_eq!(engine.current_display(), format_number(expected));
    }

    #[test]
    fn display_stays_well_formed_for_any_command_sequence(
        commands in prop::collection::vec(command_strategy(), 0..64),
        policy in policy_strategy()
    ) {
        let config = CalculatorEngineConfig::new().with_non_finite_policy(policy);
        let mut engine = CalculatorEngine::new(config).expect("engine init");

        for command in commands {
            engine.dispatch(command);
            let display = engine.current_display();
            prop_assert!(
                engine.is_error() || is_editable_entry(display) || parse_number(display).is_some(),
                "malformed display `{}` after {}",
                display,
                command
            );
            prop_assert!(display.matches('.').count() <= 1);
            if policy == NonFiniteResultPolicy::Error {
                prop_assert!(!matches!(display, "Infinity" | "-Infinity" | "NaN"));
            }
        }
    }

    #[test]
    fn clear_all_preserves_memory(
        commands in prop::collection::vec(command_strategy(), 0..48)
    ) {
        let mut engine = CalculatorEngine::default();
        engine.dispatch_all(commands);
        let memory_before = engine.snapshot().memory;

        engine.dispatch(Command::ClearAll);
        prop_assert_eq!(engine.current_display(), "0");
        prop_assert_eq!(engine.chain_phase(), ChainPhase::Idle);
        prop_assert_eq!(engine.snapshot().memory, memory_before);
    }

    #[test]
    fn snapshot_restore_is_lossless(
        commands in prop::collection::vec(command_strategy(), 0..48)
    ) {
        let mut engine = CalculatorEngine::default();
        engine.dispatch_all(commands);

        let json = engine.snapshot_json_contract_v1_pretty().expect("snapshot serializes");
        let restored = CalculatorEngine::from_snapshot_json(&json).expect("snapshot restores");
        prop_assert_eq!(restored.snapshot(), engine.snapshot());
    }
}
