#![allow(clippy::unwrap_used, clippy::expect_used)]

use realtydb_core::errors::EditorError;
use realtydb_core::logging_facility::test_capture::init_test_capture;
use realtydb_core::{log_op_end, log_op_error, log_op_start};
use realtydb_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, table = "Client");

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].table.as_deref(), Some("Client"));
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, rows_affected = 2);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].fields.get("duration_ms"), Some(&"42".to_string()));
    assert_eq!(events[0].fields.get("rows_affected"), Some(&"2".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = EditorError::UnknownTable {
        table: "Nope".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.level, tracing::Level::ERROR);
    assert_eq!(event.fields.get("err_code"), Some(&"ERR_NOT_FOUND".to_string()));
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_4";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
    let count = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name)
            && e.component.as_deref() == Some("logging_facility_tests")
    });
    assert_eq!(count, 1);
}
