//! Constraint parameters loaded from configuration.

use argtools_validator::prelude::*;
use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn interval_missing_fields_fall_back_to_defaults() {
    let interval: Interval = serde_json::from_value(json!({ "minimum": 0.0 })).unwrap();
    assert_eq!(interval, Interval::at_least(0.0));
    assert!(interval.validate("1e300").is_ok());
    assert!(interval.validate("-1").is_err());
}

#[test]
fn interval_full_config() {
    let interval: Interval = serde_json::from_value(json!({
        "minimum": 0.0,
        "maximum": 1.0,
        "include_minimum": true,
        "include_maximum": false,
    }))
    .unwrap();
    assert_eq!(interval, Interval::in_range(0.0, 1.0).exclusive_maximum());
    assert!(interval.validate("1").unwrap_err().is("above_maximum"));
}

#[test]
fn sign_validators_default_to_loose() {
    let positive: Positive = serde_json::from_value(json!({})).unwrap();
    assert_eq!(positive, Positive::loose());
    assert!(positive.validate("0").is_ok());

    let negative: Negative = serde_json::from_value(json!({ "strict": true })).unwrap();
    assert_eq!(negative, Negative::strict());
    assert!(negative.validate("0").is_err());
}

#[test]
fn floating_point_partial_config() {
    let float: FloatingPoint = serde_json::from_value(json!({ "allow_nan": false })).unwrap();
    assert_eq!(float, FloatingPoint::new(false, true));
    assert!(float.validate("nan").unwrap_err().is("nan_not_allowed"));
    assert!(float.validate("-inf").is_ok());
}

#[test]
fn divisibility_roundtrips_through_json() {
    let original = DivisibleBy::new(BigInt::parse_bytes(b"123456789012345678901234567890", 10).unwrap());
    let text = serde_json::to_string(&original).unwrap();
    let restored: DivisibleBy = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, original);

    let divisor_of = DivisorOf::new(360);
    let restored: DivisorOf = serde_json::from_str(&serde_json::to_string(&divisor_of).unwrap()).unwrap();
    assert_eq!(restored.validate("45").unwrap(), BigInt::from(45));
}

#[test]
fn unknown_types_are_rejected() {
    let result: Result<Positive, _> = serde_json::from_value(json!({ "strict": "yes" }));
    assert!(result.is_err());
}
