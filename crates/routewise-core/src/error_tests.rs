//! Tests for `error` module

use super::error::*;

#[test]
fn test_error_messages_name_the_offending_input() {
    assert_eq!(
        Error::NodeNotFound("Delhi".to_string()).to_string(),
        "Node 'Delhi' not found"
    );
    assert_eq!(
        Error::SnapshotNotFound("weekend".to_string()).to_string(),
        "Snapshot 'weekend' not found"
    );

    let err = Error::InvalidWeight {
        from: "A".to_string(),
        to: "B".to_string(),
        weight: -1.5,
    };
    let msg = err.to_string();
    assert!(msg.contains("-1.5"));
    assert!(msg.contains("'A' -> 'B'"));
}

#[test]
fn test_figment_error_converts_to_config() {
    let err: Error = figment::Error::from("missing field `strategy`".to_string()).into();
    match err {
        Error::Config(msg) => assert!(msg.contains("strategy")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_cancelled_is_distinct_from_not_found() {
    assert_ne!(Error::Cancelled, Error::NodeNotFound(String::new()));
}

#[test]
fn test_cost_overflow_message_names_endpoints() {
    let err = Error::CostOverflow {
        from: "A".to_string(),
        to: "C".to_string(),
    };
    assert_eq!(err.to_string(), "Cost of every path from 'A' to 'C' overflows f64");
}
