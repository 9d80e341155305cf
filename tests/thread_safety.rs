mod common;

use common::asserts::{assert_preflight, assert_simple, assert_simple_rejected};
use common::builders::{FRONTEND, preflight_request, simple_request};
use common::headers::header_value;
use std::sync::Arc;
use std::thread;
use taskmanager_cors::CorsPolicyProvider;
use taskmanager_cors::constants::{header, method};

#[test]
fn policy_can_be_shared_across_threads() {
    let policy = CorsPolicyProvider::default().shared();

    let mut handles = Vec::new();
    for i in 0..8 {
        let policy = Arc::clone(&policy);
        handles.push(thread::spawn(move || {
            let path = format!("/api/tasks/{i}");
            let (headers, _) = assert_preflight(
                preflight_request()
                    .path(path.as_str())
                    .origin(FRONTEND)
                    .request_method(method::PUT)
                    .request_headers("X-Thread")
                    .check(&policy),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(FRONTEND),
            );

            let simple_headers = assert_simple(
                simple_request()
                    .path(path.as_str())
                    .origin(FRONTEND)
                    .check(&policy),
            );
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(FRONTEND),
            );

            let foreign = format!("https://thread{i}.example");
            assert_simple_rejected(simple_request().origin(foreign).check(&policy));
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
