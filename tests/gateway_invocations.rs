//! Gateway invocation tests
//!
//! Full request path: JSON envelope -> transaction -> contract -> commit or
//! abort -> JSON response.

use serde_json::{json, Value};

use recordledger::api::{Gateway, Response};
use recordledger::cli::{build_gateway, Config};
use recordledger::contract::RecordContract;
use recordledger::ledger::MemoryLedger;

// =============================================================================
// Helper Functions
// =============================================================================

fn history_gateway() -> Gateway {
    Gateway::new(MemoryLedger::new(), RecordContract::with_history())
}

fn send(gateway: &mut Gateway, request: Value) -> Value {
    gateway.handle(&request.to_string()).to_value()
}

fn create_request(name: &str, email: &str) -> Value {
    let record = json!({
        "name": name,
        "email": email,
        "designation": "Engineer",
        "mobile": 9876543210_i64
    });
    json!({"op": "create", "data": record.to_string()})
}

// =============================================================================
// Happy path
// =============================================================================

#[test]
fn test_full_lifecycle_through_gateway() {
    let mut gw = history_gateway();

    let created = send(&mut gw, create_request("Dana", "dana@example.com"));
    assert_eq!(created["status"], "ok");
    assert_eq!(created["data"], created["tx_id"]);

    let updated = send(
        &mut gw,
        json!({
            "op": "update",
            "key": "dana@example.com",
            "name": "Dana S",
            "designation": "Staff Engineer",
            "mobile": 1
        }),
    );
    assert_eq!(updated["status"], "ok");

    let read = send(&mut gw, json!({"op": "read", "key": "dana@example.com"}));
    assert_eq!(read["data"]["name"], "Dana S");
    assert_eq!(read["data"]["email"], "dana@example.com");

    let deleted = send(&mut gw, json!({"op": "delete", "key": "dana@example.com"}));
    assert_eq!(deleted["status"], "ok");

    let history = send(&mut gw, json!({"op": "get_history", "key": "dana@example.com"}));
    let entries = history["data"].as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["TxId"], created["tx_id"]);
    assert_eq!(entries[1]["Value"]["designation"], "Staff Engineer");
    assert_eq!(entries[2]["IsDelete"], "true");
    assert_eq!(entries[2]["Value"], Value::Null);
    assert_eq!(gw.ledger().open_cursors(), 0);
}

#[test]
fn test_chaincode_function_names_accepted() {
    let mut gw = history_gateway();
    let record = json!({"name": "E", "email": "e@x.com", "designation": "D", "mobile": 5});

    let created = send(
        &mut gw,
        json!({"op": "CreateEmployee", "data": record.to_string()}),
    );
    assert_eq!(created["status"], "ok");

    let history = send(&mut gw, json!({"op": "GetHistoryForEmployee", "key": "e@x.com"}));
    assert_eq!(history["data"].as_array().unwrap().len(), 1);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_errors_carry_contract_codes() {
    let mut gw = history_gateway();

    let cases = [
        (json!({"op": "read", "key": ""}), "REC_INVALID_INPUT"),
        (json!({"op": "read", "key": "nobody@x.com"}), "REC_NOT_FOUND"),
        (json!({"op": "create", "data": ""}), "REC_INVALID_INPUT"),
        (json!({"op": "create", "data": "{not json"}), "REC_SERIALIZATION_ERROR"),
        (json!({"op": "delete"}), "REC_INVALID_REQUEST"),
        (json!({"op": "truncate"}), "REC_UNKNOWN_OPERATION"),
    ];

    for (request, code) in cases {
        let response = gw.handle(&request.to_string());
        assert_eq!(response.error_code(), Some(code), "request {}", request);
    }

    assert_eq!(gw.ledger().committed_transactions(), 0);
}

#[test]
fn test_failed_update_leaves_no_trace() {
    let mut gw = history_gateway();
    send(&mut gw, create_request("Eve", "eve@example.com"));

    let response = gw.handle(
        &json!({
            "op": "update",
            "key": "ghost@example.com",
            "name": "n",
            "designation": "d",
            "mobile": 0
        })
        .to_string(),
    );
    assert_eq!(response.error_code(), Some("REC_NOT_FOUND"));
    assert_eq!(gw.ledger().history_len("ghost@example.com"), 0);
    assert_eq!(gw.ledger().history_len("eve@example.com"), 1);
}

#[test]
fn test_basic_contract_refuses_history() {
    let mut gw = Gateway::new(MemoryLedger::new(), RecordContract::basic());
    send(&mut gw, create_request("Finn", "finn@example.com"));

    let response = gw.handle(&json!({"op": "get_history", "key": "finn@example.com"}).to_string());
    assert_eq!(response.error_code(), Some("REC_UNSUPPORTED_OPERATION"));
    assert_eq!(gw.ledger().open_cursors(), 0);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_gateway_built_from_config() {
    let config = Config::parse(r#"{"history_enabled": false, "log_level": "error", "ledger_name": "hr"}"#)
        .unwrap();
    let gw = build_gateway(&config).unwrap();

    assert_eq!(gw.ledger_name(), "hr");
    assert!(!gw.contract().operations().contains(&"get_history"));
}

#[test]
fn test_response_shapes() {
    let mut gw = history_gateway();
    let response = gw.handle(&create_request("Gus", "gus@example.com").to_string());
    match response {
        Response::Success(ok) => {
            assert_eq!(ok.status, "ok");
            assert_eq!(ok.data, Value::String(ok.tx_id.clone()));
        }
        Response::Error(err) => panic!("unexpected error {}", err.message),
    }
}

#[test]
fn test_wire_key_order() {
    let mut gw = history_gateway();
    gw.handle(&create_request("Hal", "hal@example.com").to_string());

    let read = gw.handle(&json!({"op": "read", "key": "hal@example.com"}).to_string());
    let read = read.to_json();
    let record_keys = ["\"name\"", "\"email\"", "\"designation\"", "\"mobile\""];
    let positions: Vec<usize> = record_keys.iter().map(|k| read.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "record keys out of order: {}", read);

    let history = gw.handle(&json!({"op": "get_history", "key": "hal@example.com"}).to_string());
    let history = history.to_json();
    let entry_keys = ["\"TxId\"", "\"Value\"", "\"Timestamp\"", "\"IsDelete\""];
    let positions: Vec<usize> = entry_keys.iter().map(|k| history.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "entry keys out of order: {}", history);
}
