use calc_engine::api::{CalculatorEngine, CalculatorEngineConfig, NonFiniteResultPolicy};
use calc_engine::core::{Command, format_number};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_chained_arithmetic_script(c: &mut Criterion) {
    let commands =
        Command::parse_sequence("1234.5 + 678 × 9 - 42 ÷ 7 = = % ± √ M+ MR").expect("valid script");

    c.bench_function("chained_arithmetic_script", |b| {
        b.iter(|| {
            let mut engine = CalculatorEngine::default();
            for &command in &commands {
                engine.dispatch(black_box(command));
            }
            black_box(engine.current_display().len())
        })
    });
}

fn bench_long_digit_entry(c: &mut Criterion) {
    let digits: Vec<Command> = (0..64u8)
        .map(|i| Command::digit(i % 10).expect("valid digit"))
        .collect();
    let config = CalculatorEngineConfig::new()
        .with_non_finite_policy(NonFiniteResultPolicy::Propagate)
        .with_max_entry_digits(Some(32));

    c.bench_function("long_digit_entry_64", |b| {
        b.iter(|| {
            let mut engine = CalculatorEngine::new(config).expect("valid config");
            black_box(engine.dispatch_all(digits.iter().copied()).len())
        })
    });
}

fn bench_format_number(c: &mut Criterion) {
    c.bench_function("format_number_mixed", |b| {
        b.iter(|| {
            for value in [8.0, 0.1 + 0.2, 1.5e-7, 2.5e30, -12_345.678] {
                black_box(format_number(black_box(value)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_chained_arithmetic_script,
    bench_long_digit_entry,
    bench_format_number
);
criterion_main!(benches);
