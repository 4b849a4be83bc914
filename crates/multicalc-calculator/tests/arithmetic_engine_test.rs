use multicalc_calculator::{ArithmeticEngine, CalcError, ERROR_DISPLAY, Key, Operator, parse_keys};

fn run(keys: &[&str]) -> (ArithmeticEngine, Vec<Result<(), CalcError>>) {
    let mut engine = ArithmeticEngine::new();
    let outcomes = parse_keys(keys).unwrap().into_iter().map(|key| engine.press(key)).collect();
    (engine, outcomes)
}

#[test]
fn adds_pending_value_to_entry() {
    let (engine, _) = run(&["2", "+", "3", "="]);
    assert_eq!(engine.current_display_value(), "5");
    assert_eq!(engine.history(), "2 + 3 = 5");
}

#[test]
fn chains_left_to_right_without_precedence() {
    let (engine, _) = run(&["2", "+", "3", "+", "4", "="]);
    assert_eq!(engine.current_display_value(), "9");

    let (engine, _) = run(&["2", "+", "3", "*", "4", "="]);
    assert_eq!(engine.current_display_value(), "20");
}

#[test]
fn chained_evaluation_shows_intermediate_result() {
    let (engine, _) = run(&["6", "-", "1", "/"]);
    assert_eq!(engine.current_display_value(), "5");
    assert_eq!(engine.history(), "5 ÷");
    assert_eq!(engine.pending_operator(), Some(Operator::Divide));
}

#[test]
fn division_by_zero_then_fresh_entry() {
    let (mut engine, outcomes) = run(&["5", "/", "0", "="]);
    assert_eq!(outcomes.last(), Some(&Err(CalcError::DivisionByZero)));
    assert_eq!(engine.current_display_value(), ERROR_DISPLAY);

    engine.press(Key::Digit('7')).unwrap();
    assert_eq!(engine.current_display_value(), "7");
    engine.press(Key::Operator(Operator::Add)).unwrap();
    engine.press(Key::Digit('1')).unwrap();
    engine.press(Key::Equals).unwrap();
    assert_eq!(engine.current_display_value(), "8");
}

#[test]
fn chained_division_by_zero_drops_new_operator() {
    let (engine, outcomes) = run(&["8", "/", "0", "+"]);
    assert_eq!(outcomes.last(), Some(&Err(CalcError::DivisionByZero)));
    assert!(engine.is_error());
    assert_eq!(engine.pending_operator(), None);
}

#[test]
fn result_becomes_next_left_operand() {
    let (engine, _) = run(&["1.5", "*", "4", "=", "-", "0.5", "="]);
    assert_eq!(engine.current_display_value(), "5.5");
}

#[test]
fn digits_after_result_start_new_entry() {
    let (engine, _) = run(&["2", "+", "2", "=", "9"]);
    assert_eq!(engine.current_display_value(), "9");
    assert_eq!(engine.pending_operator(), None);
}

#[test]
fn repeated_equals_is_a_no_op() {
    let (engine, _) = run(&["7", "-", "2", "=", "=", "="]);
    assert_eq!(engine.current_display_value(), "5");
}

#[test]
fn tiny_and_huge_results_use_scientific_notation() {
    let (engine, _) = run(&["0.00001", "/", "1000000", "="]);
    assert_eq!(engine.current_display_value(), "1.000000e-11");

    let (engine, _) = run(&["100000000", "*", "100000000", "="]);
    assert_eq!(engine.current_display_value(), "1.000000e+16");
}

#[test]
fn keyboard_names_drive_the_engine() {
    let (engine, _) = run(&["1", "2", "Backspace", "+", "3", "Enter"]);
    assert_eq!(engine.current_display_value(), "4");

    let (engine, _) = run(&["9", "*", "9", "Escape"]);
    assert_eq!(engine, ArithmeticEngine::new());
}
