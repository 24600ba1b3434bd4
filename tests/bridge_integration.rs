//! Integration tests for writers bound into sibling kinds

use std::collections::BTreeMap;

use tidemark::prelude::*;
use tidemark::testing::Probe;
use tidemark::{assert_log, assert_terminated, assert_value};

#[derive(Debug, Clone, PartialEq)]
struct Config {
    port: u16,
    workers: usize,
}

fn parse_port(raw: &'static str) -> impl Writer<Output = u16, Log = Vec<String>> + Clone {
    tell_one(format!("parsing port {}", raw))
        .map(move |_| raw.parse::<u16>().ok())
        .filter(|port| port.is_some())
        .map(|port| port.unwrap_or_default())
}

#[test]
fn test_pipeline_logs_in_call_order() {
    let w = parse_port("8080")
        .tap_tell(|port| vec![format!("port ok: {}", port)])
        .and_then(|port| {
            tell_one("choosing workers".to_string()).map(move |_| Config { port, workers: 4 })
        });

    assert_value!(w.run_writer(), Config { port: 8080, workers: 4 });
    assert_log!(
        w.run_writer(),
        vec![
            "parsing port 8080".to_string(),
            "port ok: 8080".to_string(),
            "choosing workers".to_string(),
        ]
    );
}

#[test]
fn test_pipeline_stops_on_bad_input() {
    let probe = Probe::new();
    let hit = probe.clone();
    let w = parse_port("eighty").and_then(move |port| {
        hit.hit();
        pure(Config { port, workers: 1 })
    });

    let result = w.run_writer();

    assert_eq!(probe.count(), 0);
    assert_eq!(result.log(), &vec!["parsing port eighty".to_string()]);
    assert_terminated!(result);
}

#[test]
fn test_result_bridge_collapses_error() {
    let w = parse_port("8080").bind_into(
        |port| {
            if *port < 1024 {
                Err(format!("port {} is privileged", port))
            } else {
                Ok(*port as usize / 1000)
            }
        },
        |port, workers| Config { port, workers },
    );

    assert_eq!(
        w.run_writer().into_value(),
        Some(Ok(Config { port: 8080, workers: 8 }))
    );

    let privileged = tell_one("low".to_string())
        .map(|_| 80u16)
        .bind_into(
            |port| Err::<usize, String>(format!("port {} is privileged", port)),
            |port, workers| Config { port, workers },
        );

    let result = privileged.run_writer();
    assert!(result.is_terminated());
    assert_eq!(result.log(), &vec!["low".to_string()]);
}

#[test]
fn test_fallible_bridge_keeps_cause() {
    let w = parse_port("8080").bind_into(
        |port| {
            let port = *port;
            Fallible::new(move || {
                if port % 2 == 0 {
                    Err(Fault::new(format!("even port {} rejected", port)))
                } else {
                    Ok(port)
                }
            })
        },
        |_, port| port + 1,
    );

    let result = w.run_writer();
    assert_eq!(result.log(), &vec!["parsing port 8080".to_string()]);

    let fault = result.into_value().map(|f| f.force());
    assert_eq!(fault, Some(Err(Fault::new("even port 8080 rejected"))));
}

#[test]
fn test_fallible_bridge_captures_error_types() {
    let w = tell_one("reading".to_string()).map(|_| "12x").bind_into(
        |raw| {
            let raw = *raw;
            Fallible::new(move || raw.parse::<i32>().map_err(|e| Fault::from_error(&e)))
        },
        |_, n| n,
    );

    let fault = w
        .run_writer()
        .into_value()
        .and_then(|f| f.force().err());

    assert_eq!(
        fault.map(|f| f.message().to_string()),
        Some("invalid digit found in string".to_string())
    );
}

#[test]
fn test_map_bridge_fans_out_per_key() {
    let w = tell_one("load".to_string()).map(|_| 10).bind_into(
        |base| BTreeMap::from([("cpu", *base), ("mem", base * 100)]),
        |base, limit| limit - base,
    );

    let result = w.run_writer();
    assert_eq!(
        result.value(),
        Some(&BTreeMap::from([("cpu", 0), ("mem", 990)]))
    );
    assert_eq!(result.log(), &vec!["load".to_string()]);
}

#[test]
fn test_state_bridge_threads_counter() {
    let w = tell_one("assign".to_string()).map(|_| "job").bind_into(
        |_| State::new(|next_id: u32| StateResult::new(next_id + 1, next_id)),
        |name, id| format!("{}-{}", name, id),
    );

    let assign = w.run_writer().into_value();
    let step = assign.map(|state| state.run(41));

    assert_eq!(step, Some(StateResult::new(42, "job-41".to_string())));
}

#[test]
fn test_reader_bridge_reads_environment() {
    let w = parse_port("9000").bind_into(
        |_| Reader::asks(|config: &Config| config.workers),
        |port, workers| format!("{}x{}", port, workers),
    );

    let reader = w.run_writer().into_value();
    let env = Config {
        port: 0,
        workers: 3,
    };

    assert_eq!(
        reader.map(|r| r.run(&env)),
        Some(Outcome::Value("9000x3".to_string()))
    );
}

#[test]
fn test_bridged_writer_composes_further() {
    let w = parse_port("8080")
        .bind_into(|port| Some(*port), |_, port| port)
        .map(|maybe| maybe.map(|port| port + 1))
        .tap_tell(|_| vec!["bridged".to_string()]);

    let result = w.run_writer();
    assert_eq!(result.value(), Some(&Some(8081)));
    assert_eq!(
        result.log(),
        &vec!["parsing port 8080".to_string(), "bridged".to_string()]
    );
}
