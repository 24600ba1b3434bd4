//! Tests for binding writers into sibling kinds.

use std::collections::{BTreeMap, HashMap};

use crate::kinds::{Attempted, Either, Fallible, FallibleOption, Fault, Reader, State, StateResult};
use crate::testing::Probe;
use crate::writer::prelude::*;

fn start() -> impl Writer<Output = i32, Log = Vec<&'static str>> + Clone {
    from_fn(|| WriterResult::with_log(5, vec!["start"]))
}

fn stopped() -> impl Writer<Output = i32, Log = Vec<&'static str>> + Clone {
    from_fn(|| WriterResult::terminated_with(vec!["partial"]))
}

// ============================================================================
// Terminated writers
// ============================================================================

#[test]
fn test_terminated_writer_never_calls_bind() {
    let probe = Probe::new();
    let hit = probe.clone();
    let result = stopped()
        .bind_into(
            move |x| {
                hit.hit();
                Some(*x)
            },
            |a, b| a + b,
        )
        .run_writer();

    assert_eq!(probe.count(), 0);
    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["partial"]);
}

#[test]
fn test_terminated_writer_into_deferred_kind_is_terminated() {
    let result = stopped()
        .bind_into(|x| Fallible::succeed(*x), |a, b| a + b)
        .run_writer();

    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["partial"]);
}

// ============================================================================
// Collapsing kinds
// ============================================================================

#[test]
fn test_option_absent_collapses_with_log() {
    let result = start().bind_into(|_| None::<i32>, |a, b| a + b).run_writer();
    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["start"]);
}

#[test]
fn test_option_present_projects() {
    let result = start().bind_into(|x| Some(x + 1), |a, b| a + b).run_writer();
    assert_eq!(result.value(), Some(&Some(11)));
    assert_eq!(result.log(), &vec!["start"]);
}

#[test]
fn test_option_identity_projection_keeps_writer_value() {
    let result = start().bind_into(|_| Some(()), |a, _| a).run_writer();
    assert_eq!(result.into_value(), Some(Some(5)));
}

#[test]
fn test_bind_into_value_keeps_sibling_value() {
    let result = start().bind_into_value(|x| Some(x * 3)).run_writer();
    assert_eq!(result.value(), Some(&Some(15)));
}

#[test]
fn test_either_left_collapses() {
    let result = start()
        .bind_into(|_| Either::<String, i32>::left("nope".to_string()), |a, b| a + b)
        .run_writer();

    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["start"]);
}

#[test]
fn test_either_right_projects() {
    let result = start()
        .bind_into(|_| Either::<String, i32>::right(2), |a, b| a + b)
        .run_writer();

    assert_eq!(result.value(), Some(&Either::Right(7)));
}

#[test]
fn test_result_err_collapses() {
    let result = start()
        .bind_into(|_| Err::<i32, String>("bad".to_string()), |a, b| a + b)
        .run_writer();

    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["start"]);
}

#[test]
fn test_result_ok_projects() {
    let result = start()
        .bind_into(|x| Ok::<_, String>(x.to_string()), |a, b| format!("{}:{}", a, b))
        .run_writer();

    assert_eq!(result.value(), Some(&Ok("5:5".to_string())));
}

// ============================================================================
// Exception-bearing kinds
// ============================================================================

#[test]
fn test_fallible_fault_in_bind_stays_in_sibling() {
    let result = start()
        .bind_into(
            |_: &i32| -> Fallible<i32> { std::panic::panic_any(Fault::new("boom")) },
            |a, b| a + b,
        )
        .run_writer();

    assert!(!result.is_terminated());
    assert_eq!(result.log(), &vec!["start"]);

    let sibling = result.into_value().unwrap();
    assert_eq!(sibling.force(), Err(Fault::new("boom")));
}

#[test]
fn test_fallible_projection_panic_is_captured() {
    let result = start()
        .bind_into(|x| Fallible::succeed(*x), |_, _| -> i32 { panic!("projection failed") })
        .run_writer();

    let fault = result.into_value().unwrap().force().unwrap_err();
    assert!(fault.is_panic());
    assert_eq!(fault.message(), "projection failed");
}

#[test]
fn test_fallible_failed_sibling_keeps_fault() {
    let result = start()
        .bind_into(|_| Fallible::<i32>::fail(Fault::new("denied")), |a, b| a + b)
        .run_writer();

    let sibling = result.into_value().unwrap();
    assert_eq!(sibling.force(), Err(Fault::new("denied")));
}

#[test]
fn test_fallible_success_projects_when_forced() {
    let result = start()
        .bind_into(|x| Fallible::succeed(x * 2), |a, b| a + b)
        .run_writer();

    assert_eq!(result.into_value().unwrap().force(), Ok(15));
}

#[test]
fn test_fallible_defers_bind_until_forced() {
    let probe = Probe::new();
    let hit = probe.clone();
    let result = start()
        .bind_into(
            move |x| {
                hit.hit();
                Fallible::succeed(*x)
            },
            |a, b| a + b,
        )
        .run_writer();

    assert_eq!(probe.count(), 0);

    let sibling = result.into_value().unwrap();
    assert_eq!(sibling.force(), Ok(10));
    assert_eq!(sibling.force(), Ok(10));
    assert_eq!(probe.count(), 2);
}

#[test]
fn test_fallible_option_absent() {
    let result = start()
        .bind_into(|_| FallibleOption::<i32>::none(), |a, b| a + b)
        .run_writer();

    assert!(!result.is_terminated());
    assert!(result.into_value().unwrap().force().is_absent());
}

#[test]
fn test_fallible_option_value() {
    let result = start()
        .bind_into(|x| FallibleOption::some(*x), |a, b| a * b)
        .run_writer();

    assert_eq!(result.into_value().unwrap().force(), Attempted::Value(25));
}

#[test]
fn test_fallible_option_fault() {
    let result = start()
        .bind_into(|_| FallibleOption::<i32>::fail(Fault::new("lost")), |a, b| a + b)
        .run_writer();

    assert_eq!(
        result.into_value().unwrap().force(),
        Attempted::Fault(Fault::new("lost"))
    );
}

#[test]
fn test_fallible_option_bind_panic_becomes_fault() {
    let result = start()
        .bind_into(
            |_: &i32| -> FallibleOption<i32> { panic!("bind failed") },
            |a, b| a + b,
        )
        .run_writer();

    match result.into_value().unwrap().force() {
        Attempted::Fault(fault) => assert_eq!(fault.message(), "bind failed"),
        other => panic!("Expected a fault, got {:?}", other),
    }
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_vec_projects_every_element() {
    let result = start()
        .bind_into(|x| vec![*x, x + 1], |a, b| a * b)
        .run_writer();

    assert_eq!(result.value(), Some(&vec![25, 30]));
    assert_eq!(result.log(), &vec!["start"]);
}

#[test]
fn test_vec_empty_is_not_termination() {
    let result = start()
        .bind_into(|_| Vec::<i32>::new(), |a, b| a + b)
        .run_writer();

    assert_eq!(result.value(), Some(&vec![]));
}

#[test]
fn test_btree_map_preserves_keys() {
    let result = start()
        .bind_into(
            |x| BTreeMap::from([("a", *x), ("b", x * 2)]),
            |a, b| a + b,
        )
        .run_writer();

    assert_eq!(
        result.into_value(),
        Some(BTreeMap::from([("a", 10), ("b", 15)]))
    );
}

#[test]
fn test_hash_map_preserves_keys() {
    let result = start()
        .bind_into(|x| HashMap::from([(1u8, *x), (2u8, -x)]), |a, b| a - b)
        .run_writer();

    let entries = result.into_value().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[&1], 0);
    assert_eq!(entries[&2], 10);
}

// ============================================================================
// State and environment
// ============================================================================

#[test]
fn test_state_success_threads_state() {
    let result = start()
        .bind_into(
            |x| {
                let x = *x;
                State::new(move |s: u32| StateResult::new(s + 1, x))
            },
            |a, b| a + b,
        )
        .run_writer();

    let (state, outcome) = result.into_value().unwrap().run(10).into_parts();
    assert_eq!(state, 11);
    assert_eq!(outcome, Outcome::Value(10));
}

#[test]
fn test_state_terminated_sibling_returns_input_state() {
    let result = start()
        .bind_into(
            |_| State::<u32, i32>::new(|s| StateResult::terminated(s + 100)),
            |a, b| a + b,
        )
        .run_writer();

    let (state, outcome) = result.into_value().unwrap().run(10).into_parts();
    assert_eq!(state, 10);
    assert_eq!(outcome, Outcome::Terminated);
}

#[test]
fn test_state_get_exposes_state() {
    let result = start()
        .bind_into(|_| State::<u32, u32>::get(), |a, s| format!("{}@{}", a, s))
        .run_writer();

    let step = result.into_value().unwrap().run(3);
    assert_eq!(step, StateResult::new(3, "5@3".to_string()));
}

#[test]
fn test_reader_projects_environment() {
    let result = start()
        .bind_into(
            |x| {
                let x = *x;
                Reader::asks(move |env: &i32| env + x)
            },
            |a, b| a + b,
        )
        .run_writer();

    let reader = result.into_value().unwrap();
    assert_eq!(reader.run(&100), Outcome::Value(110));
    assert_eq!(reader.run(&0), Outcome::Value(10));
}

#[test]
fn test_reader_terminated_sibling() {
    let result = start()
        .bind_into(|_| Reader::<i32, i32>::terminated(), |a, b| a + b)
        .run_writer();

    assert!(!result.is_terminated());
    assert_eq!(result.into_value().unwrap().run(&1), Outcome::Terminated);
}

#[test]
fn test_rerun_rebinds() {
    let probe = Probe::new();
    let hit = probe.clone();
    let w = start().bind_into(
        move |x| {
            hit.hit();
            Some(*x)
        },
        |a, b| a + b,
    );

    assert_eq!(w.run_writer(), w.run_writer());
    assert_eq!(probe.count(), 2);
}

#[cfg(feature = "tracing")]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_collapse_emits_trace_event() {
        let result = start().bind_into(|_| None::<i32>, |a, b| a + b).run_writer();

        assert!(result.is_terminated());
        assert!(logs_contain("sibling failure collapsed"));
    }

    #[test]
    #[traced_test]
    fn test_successful_bridge_emits_nothing() {
        let result = start().bind_into(|x| Some(*x), |a, b| a + b).run_writer();

        assert!(!result.is_terminated());
        assert!(!logs_contain("sibling failure collapsed"));
    }
}
