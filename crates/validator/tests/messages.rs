//! User-facing rejection messages.
//!
//! These strings end up in front of people typing commands, so any change to
//! them should be deliberate.

use argtools_validator::prelude::*;
use insta::assert_snapshot;

fn message<T: std::fmt::Debug>(result: ValidationResult<T>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn parsing() {
    assert_snapshot!(message(parse_integer("abc")), @"'abc' is not a valid number");
    assert_snapshot!(message(parse_integer("4.5")), @"'4.5' is not a valid integer number");
    assert_snapshot!(message(parse_integer_as::<u8>("300")), @"'300' does not fit in u8");
    assert_snapshot!(message(parse_float("x", true, true)), @"'x' is not a valid floating point number");
    assert_snapshot!(message(parse_float("nan", false, true)), @"'nan' is not a number (NaN), which is not allowed here");
    assert_snapshot!(message(parse_float("-inf", true, false)), @"'-inf' is an infinite value, which is not allowed here");
}

#[test]
fn sign() {
    assert_snapshot!(message(positive("-1", false)), @"'-1' is not a positive number");
    assert_snapshot!(message(positive("0", true)), @"'0' is not a strictly positive number");
    assert_snapshot!(message(negative("1", false)), @"'1' is not a negative number");
    assert_snapshot!(message(negative("0", true)), @"'0' is not a strictly negative number");
}

#[test]
fn interval_bounds() {
    assert_snapshot!(message(interval("-1", 0.0, 10.0, true, true)), @"Number '-1' is < the inclusive minimum 0");
    assert_snapshot!(message(interval("0", 0.0, 10.0, false, true)), @"Number '0' is <= the exclusive minimum 0");
    assert_snapshot!(message(interval("11", 0.0, 10.0, true, true)), @"Number '11' is > the inclusive maximum 10");
    assert_snapshot!(message(interval("10", 0.0, 10.0, true, false)), @"Number '10' is >= the exclusive maximum 10");
    assert_snapshot!(message(interval("0.25", 0.5, 1.5, true, true)), @"Number '0.25' is < the inclusive minimum 0.5");
    assert_snapshot!(message(interval("nan", f64::NEG_INFINITY, f64::INFINITY, true, true)), @"'nan' is not a number and lies in no interval");
}

#[test]
fn integer_properties() {
    assert_snapshot!(message(odd("4")), @"'4' is not an odd number");
    assert_snapshot!(message(even("3")), @"'3' is not an even number");
    assert_snapshot!(message(divisible_by("10", 3)), @"'10' is not divisible by 3");
    assert_snapshot!(message(divisible_by("10", 0)), @"'10' cannot be checked for divisibility by zero");
    assert_snapshot!(message(divisor_of("5", 12)), @"'5' is not a divisor of 12");
    assert_snapshot!(message(divisor_of("0", 12)), @"'0' is zero and cannot divide 12");
}

#[test]
fn exact_numbers() {
    assert_snapshot!(message(decimal("1/3")), @"'1/3' is not a valid decimal number");
    assert_snapshot!(message(fraction("one half")), @"'one half' is not a valid fraction number");
}

#[test]
fn custom_message() {
    let width = Odd.with_message("width must be odd, got {token}");
    assert_snapshot!(message(width.validate("8")), @"width must be odd, got 8");
}
