//! Serialization of writer results
#![cfg(feature = "serde")]

use tidemark::prelude::*;

#[test]
fn test_terminated_result_serializes_with_log() {
    let result = tell_one("loaded".to_string())
        .map(|_| 3)
        .filter(|n| *n > 5)
        .run_writer();

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "outcome": "Terminated", "log": ["loaded"] })
    );
}

#[test]
fn test_value_result_survives_json() {
    let result = tell_one("loaded".to_string())
        .map(|_| Either::<String, u32>::right(3))
        .run_writer();

    let json = serde_json::to_string(&result).unwrap();
    let back: WriterResult<Vec<String>, Either<String, u32>> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, result);
    assert_eq!(back.value(), Some(&Either::Right(3)));
}
