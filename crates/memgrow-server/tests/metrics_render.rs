#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use memgrow_server::obs::metrics::ServiceMetrics;

#[test]
fn request_ids_are_per_registry_and_increasing() {
    let a = ServiceMetrics::default();
    let b = ServiceMetrics::default();
    assert_eq!(a.next_request_id(), 1);
    assert_eq!(a.next_request_id(), 2);
    assert_eq!(b.next_request_id(), 1);
}

#[test]
fn histogram_buckets_are_cumulative() {
    let m = ServiceMetrics::default();
    m.http_duration.observe(&[("path", "/")], Duration::from_micros(700));
    let out = m.render();
    assert!(out.contains(r#"memgrow_http_request_duration_micros_bucket{path="/",le="500"} 0"#));
    assert!(out.contains(r#"memgrow_http_request_duration_micros_bucket{path="/",le="1000"} 1"#));
    assert!(out.contains(r#"memgrow_http_request_duration_micros_bucket{path="/",le="+Inf"} 1"#));
    assert!(out.contains(r#"memgrow_http_request_duration_micros_sum{path="/"} 700"#));
}
