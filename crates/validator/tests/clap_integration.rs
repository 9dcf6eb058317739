//! Validators wired into a real clap parser.
//!
//! clap calls the validator on the raw token and prints its message verbatim
//! on failure, which is the whole contract these tests pin down.

use argtools_validator::prelude::*;
use clap::Parser;
use clap::error::ErrorKind;
use num_bigint::BigInt;

#[derive(Debug, Parser)]
#[command(name = "demo")]
struct Args {
    #[arg(allow_negative_numbers = true, value_parser = strictly_positive().into_parser())]
    positional: f64,

    #[arg(short, long, allow_negative_numbers = true, value_parser = odd)]
    optional: Option<BigInt>,

    #[arg(long, default_value = "0.5", value_parser = in_range(0.0, 1.0).into_parser())]
    ratio: f64,

    #[arg(long, value_parser = parse_integer_as::<u16>)]
    port: Option<u16>,

    #[arg(long, value_parser = DivisibleBy::new(512).into_parser())]
    block: Option<BigInt>,
}

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("demo").chain(args.iter().copied()))
}

#[test]
fn accepts_valid_tokens() {
    let args = parse(&["2.5", "-o", "-7", "--ratio", "1", "--port", "8080", "--block", "1024"]).unwrap();
    assert_eq!(args.positional, 2.5);
    assert_eq!(args.optional, Some(BigInt::from(-7)));
    assert_eq!(args.ratio, 1.0);
    assert_eq!(args.port, Some(8080));
    assert_eq!(args.block, Some(BigInt::from(1024)));
}

#[test]
fn defaults_go_through_the_validator() {
    let args = parse(&["1"]).unwrap();
    assert_eq!(args.ratio, 0.5);
    assert_eq!(args.optional, None);
}

#[test]
fn rejection_message_reaches_the_user() {
    let err = parse(&["0"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(
        err.to_string().contains("'0' is not a strictly positive number"),
        "{err}"
    );
}

#[test]
fn negative_tokens_reach_the_validator() {
    let err = parse(&["-1"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(
        err.to_string().contains("'-1' is not a strictly positive number"),
        "{err}"
    );

    let err = parse(&["1", "--optional", "-8"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
    assert!(err.to_string().contains("'-8' is not an odd number"), "{err}");

    let args = parse(&["1", "--optional", "-3"]).unwrap();
    assert_eq!(args.optional, Some(BigInt::from(-3)));
}

#[test]
fn each_argument_uses_its_own_validator() {
    let cases: [(&[&str], &str); 4] = [
        (&["1", "-o", "4"], "'4' is not an odd number"),
        (&["1", "--ratio", "1.5"], "Number '1.5' is > the inclusive maximum 1"),
        (&["1", "--port", "70000"], "'70000' does not fit in u16"),
        (&["1", "--block", "100"], "'100' is not divisible by 512"),
    ];
    for (args, expected) in cases {
        let err = parse(args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation, "{args:?}");
        assert!(err.to_string().contains(expected), "{err}");
    }
}

#[test]
fn parse_errors_beat_constraint_errors() {
    let err = parse(&["1", "-o", "three"]).unwrap_err();
    assert!(err.to_string().contains("'three' is not a valid number"), "{err}");
}
