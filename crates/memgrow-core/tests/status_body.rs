//! Status wire body tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use memgrow_core::protocol::StatusBody;

#[test]
fn field_names_and_order_match_contract() {
    let body = StatusBody::ok(3, 5, "Hello 7 objects");
    assert_eq!(
        body.to_json().unwrap(),
        r#"{"status":"ok","nbInstances":"3","intervalInSecs":"5","customMessage":"Hello 7 objects"}"#
    );
}

#[test]
fn message_is_json_escaped() {
    let body = StatusBody::ok(0, 5, "say \"hi\"");
    let s = body.to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["customMessage"], "say \"hi\"");
}

#[test]
fn nb_instances_parses_back() {
    let body: StatusBody = serde_json::from_str(
        r#"{"status":"ok","nbInstances":"7","intervalInSecs":"5","customMessage":"x"}"#,
    )
    .unwrap();
    assert_eq!(body.nb_instances().unwrap(), 7);
}
