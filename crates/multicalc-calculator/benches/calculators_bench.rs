use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use multicalc_calculator::{
    AgeEvaluator, ArithmeticEngine, BmiEvaluator, Calculator, FormInputs, LoanEvaluator,
    TermUnit, parse_keys,
};

fn evaluator_benchmark(c: &mut Criterion) {
    c.bench_function("bmi_compute", |b| {
        b.iter(|| BmiEvaluator.compute(black_box(170.0), black_box(70.0)))
    });

    c.bench_function("loan_compute_30_years", |b| {
        b.iter(|| {
            LoanEvaluator.compute(
                black_box(250_000.0),
                black_box(6.5),
                black_box(30.0),
                TermUnit::Years,
            )
        })
    });

    let reference = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default();
    c.bench_function("age_compute", |b| {
        b.iter(|| AgeEvaluator.compute(black_box("2000-02-29"), reference))
    });
}

fn keypad_benchmark(c: &mut Criterion) {
    let keys = parse_keys(["12.5", "*", "4", "-", "0.125", "/", "3", "="]).unwrap_or_default();
    c.bench_function("arithmetic_key_sequence", |b| {
        b.iter(|| {
            let mut engine = ArithmeticEngine::new();
            for key in &keys {
                let _ = engine.press(*key);
            }
            black_box(engine.current_display_value().len())
        })
    });
}

fn registry_benchmark(c: &mut Criterion) {
    let calculator = Calculator::new();
    let inputs = FormInputs::new()
        .with("amount", "10000")
        .with("rate", "12")
        .with("term", "12");
    c.bench_function("registry_loan_dispatch", |b| {
        b.iter(|| calculator.calculate(black_box("loan"), &inputs))
    });
}

criterion_group!(benches, evaluator_benchmark, keypad_benchmark, registry_benchmark);
criterion_main!(benches);
