//! End-to-end properties of the calculator engine, driven through the same
//! event vocabulary the terminal adapter uses.

use deskcalc::{CalcState, Calculator, DigitGrouping, InputEvent, Operator};

fn enter(calc: &mut Calculator, keys: &str) {
    for key in keys.chars() {
        let event = match key {
            '0'..='9' | '.' => InputEvent::Digit(key),
            '=' => InputEvent::Compute,
            '<' => InputEvent::Delete,
            _ => InputEvent::Operator(Operator::from_key(key).unwrap()),
        };
        calc.apply(event);
    }
}

#[test]
fn digit_sequences_never_grow_leading_zeros() {
    for keys in ["005", "0000", "0123", "90210", "000007"] {
        let mut calc = Calculator::new();
        enter(&mut calc, keys);
        let CalcState::Entry { current } = calc.state().clone() else {
            panic!("digit entry left the entry state");
        };
        assert!(current.chars().all(|c| c.is_ascii_digit()), "{current:?}");
        assert!(
            current == "0" || !current.starts_with('0'),
            "leading zero in {current:?}"
        );
    }
}

#[test]
fn compute_is_idempotent_without_a_staged_operator() {
    let mut calc = Calculator::new();
    enter(&mut calc, "12+34=");
    let first = calc.display();
    enter(&mut calc, "==");
    assert_eq!(calc.display(), first);
}

#[test]
fn display_round_trips_through_parsing() {
    for keys in ["1234567", "0.125", "5+3=", "1000000*1=", "3-5=", "10/4="] {
        let mut calc = Calculator::new();
        enter(&mut calc, keys);
        let CalcState::Entry { current } = calc.state().clone() else {
            panic!("expected a plain operand after {keys:?}");
        };
        let shown = calc.display().current.replace(',', "");
        assert_eq!(
            shown.parse::<f64>().unwrap(),
            current.parse::<f64>().unwrap(),
            "display diverged for {keys:?}"
        );
    }
}

#[test]
fn float_artifacts_are_rounded_away() {
    let mut calc = Calculator::new();
    enter(&mut calc, "0.1+0.2=");
    assert_eq!(calc.display().current, "0.3");
}

#[test]
fn division_by_zero_shows_a_message() {
    let mut calc = Calculator::new();
    enter(&mut calc, "8/0=");
    assert!(calc.state().is_error());
    assert_eq!(calc.display().current, "Can't divide by 0");
}

#[test]
fn operators_chain_left_to_right() {
    let mut calc = Calculator::new();
    enter(&mut calc, "5+3*2=");
    assert_eq!(calc.display().current, "16");
}

#[test]
fn second_operator_press_corrects_the_first() {
    let mut calc = Calculator::new();
    enter(&mut calc, "7+*");
    assert_eq!(
        calc.state(),
        &CalcState::Pending {
            previous: "7".to_string(),
            op: Operator::Multiply,
            current: String::new(),
        }
    );
}

#[test]
fn a_million_groups_lakh_crore_style() {
    let mut calc = Calculator::new();
    enter(&mut calc, "1000000");
    assert_eq!(calc.display().current, "10,00,000");

    let mut calc = Calculator::with_grouping(DigitGrouping::Western);
    enter(&mut calc, "1000000");
    assert_eq!(calc.display().current, "1,000,000");
}

#[test]
fn typing_after_an_error_starts_fresh() {
    let mut calc = Calculator::new();
    enter(&mut calc, "8/0=4");
    assert!(!calc.state().is_error());
    assert_eq!(calc.display().current, "4");
}

#[test]
fn delete_on_an_error_equals_clear() {
    let mut calc = Calculator::new();
    enter(&mut calc, "8/0=<");
    assert_eq!(calc.state(), &CalcState::cleared());
    assert_eq!(calc.display().current, "0");
}

#[test]
fn staged_line_shows_operand_and_symbol() {
    let mut calc = Calculator::new();
    enter(&mut calc, "1000000/");
    let lines = calc.display();
    assert_eq!(lines.previous, "10,00,000 ÷");
    assert_eq!(lines.current, "");
}
