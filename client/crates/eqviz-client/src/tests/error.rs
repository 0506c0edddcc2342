use crate::ClientError;
use crate::store::StoreError;

use googletest::assert_that;
use googletest::prelude::{contains_substring, ends_with};

#[test]
fn given_store_error_when_converted_then_location_is_call_site() {
    let err = ClientError::from(StoreError::poisoned());

    match err {
        ClientError::Store { ref location, .. } => {
            assert_that!(location.file, ends_with("tests/error.rs"));
            assert!(location.line > 0);
        }
        ref other => panic!("unexpected error: {other:?}"),
    }

    assert_that!(err.to_string(), contains_substring("Session store error"));
    assert_that!(err.user_message(), contains_substring("Session storage error"));
}
