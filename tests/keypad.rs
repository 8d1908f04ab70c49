//! End-to-end keypad sequences through the public calculator API.

use keypad_calc::calculator::{Calculator, combine_numbers};
use keypad_calc::input::InputScript;

fn press(calc: &mut Calculator, keys: &str) {
    for key in keys.split_whitespace() {
        calc.submit_input(key).unwrap();
    }
}

fn evaluate(keys: &str) -> String {
    let mut calc = Calculator::new();
    press(&mut calc, keys);
    press(&mut calc, "ENTER");
    calc.display_text().to_string()
}

fn tokens(expression: &str) -> Vec<String> {
    combine_numbers(expression)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn single_operations() {
    assert_eq!(evaluate("7 + 8"), "15");
    assert_eq!(evaluate("7 - 8"), "-1");
    assert_eq!(evaluate("7 x 8"), "56");
    assert_eq!(evaluate("9 ÷ 3"), "3");
    assert_eq!(evaluate("1 . 5 x 4"), "6");
}

#[test]
fn no_operator_precedence() {
    assert_eq!(evaluate("2 + 3 x 4"), "20");
    assert_eq!(evaluate("1 0 - 2 ÷ 4"), "2");
}

#[test]
fn negative_detection() {
    assert_eq!(tokens("5+-3"), ["5", "+", "-3"]);
    assert_eq!(evaluate("5 + (-) 3"), "2");

    assert_eq!(tokens("5-3"), ["5", "-", "3"]);
    assert_eq!(evaluate("5 - 3"), "2");

    assert_eq!(evaluate("(-) 4 x (-) 2"), "8");
}

#[test]
fn division_by_zero_anywhere() {
    assert_eq!(evaluate("8 ÷ 0"), "#DIV BY 0");
    assert_eq!(evaluate("8 ÷ 0 + 1"), "#DIV BY 0");
    assert_eq!(evaluate("1 + 2 ÷ 0"), "#DIV BY 0");
}

#[test]
fn operators_only_or_empty_is_invalid() {
    assert_eq!(evaluate(""), "#INVALID");
    assert_eq!(evaluate("+"), "#INVALID");
    assert_eq!(evaluate("x ÷ -"), "#INVALID");
    assert_eq!(evaluate("(-)"), "#INVALID");
}

#[test]
fn two_decimal_points_is_invalid() {
    assert_eq!(evaluate("1 . 2 . 3"), "#INVALID");
    assert_eq!(evaluate(". 5 . + 1"), "#INVALID");
}

#[test]
fn long_quotient_is_rounded() {
    let shown = evaluate("1 ÷ 3");
    assert_eq!(shown, "0.3333333");
    assert!(shown.len() <= 9);
}

#[test]
fn display_never_exceeds_ten_typed_characters() {
    let mut calc = Calculator::new();
    for _ in 0..25 {
        calc.submit_input("9").unwrap();
        assert!(calc.display_text().chars().count() <= 10);
    }
    press(&mut calc, "+ (-) x");
    assert_eq!(calc.display_text(), "9999999999");
}

#[test]
fn float_results_fit_the_display() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 . 1 x 1 . 1 ENTER");
    assert_eq!(calc.display_text(), "1.21");

    press(&mut calc, "CLEAR . 1 + . 2 ENTER");
    assert_eq!(calc.display_text(), "0.3");
    assert!(calc.display_text().chars().count() <= 10);

    // the fitted result can still be extended
    press(&mut calc, "+ 1 ENTER");
    assert_eq!(calc.display_text(), "1.3");
}

#[test]
fn back_clears_sentinels_entirely() {
    let mut calc = Calculator::new();
    press(&mut calc, "+ ENTER");
    assert_eq!(calc.display_text(), "#INVALID");
    press(&mut calc, "BACK");
    assert_eq!(calc.display_text(), "");

    press(&mut calc, "4 ÷ 0 ENTER");
    assert_eq!(calc.display_text(), "#DIV BY 0");
    press(&mut calc, "BACKSPACE");
    assert_eq!(calc.display_text(), "");
}

#[test]
fn back_trims_one_character() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 2 + BACK BACK");
    assert_eq!(calc.display_text(), "1");
}

#[test]
fn typing_after_error_starts_fresh() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 ÷ 0 ENTER 2 + 2 ENTER");
    assert_eq!(calc.display_text(), "4");
}

#[test]
fn numeric_result_can_be_extended() {
    let mut calc = Calculator::new();
    press(&mut calc, "6 ÷ 2 ENTER x 5 ENTER");
    assert_eq!(calc.display_text(), "15");
}

#[test]
fn clear_then_repeat_gives_same_result() {
    let mut calc = Calculator::new();
    press(&mut calc, "1 2 ÷ 7 ENTER");
    let first = calc.display_text().to_string();
    press(&mut calc, "CLEAR 1 2 ÷ 7 ENTER");
    assert_eq!(calc.display_text(), first);
}

#[test]
fn scripted_session() {
    let script = InputScript::from_text(
        "# negative times divided\n\
         (-) 3 * 4\n\
         /2\n\
         Enter\n",
    )
    .unwrap();

    let mut calc = Calculator::new();
    for input in script {
        calc.apply(input);
    }
    assert_eq!(calc.display_text(), "-6");
    assert!(calc.last_result().is_some_and(|r| r.is_success()));
}
