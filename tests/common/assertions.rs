//! Custom assertion macros
//!
//! Status assertions print the response body on failure, which is usually
//! the fastest way to see why a request was rejected.

/// Assert a `TestResponse` has the given status
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "unexpected status, body: {}",
            $response.body
        );
    };
}

/// Assert a `TestResponse` is a JSON error with the given status and message
#[macro_export]
macro_rules! assert_api_error {
    ($response:expr, $status:expr, $message:expr) => {
        $crate::assert_status!($response, $status);
        assert_eq!($response.error_message(), $message);
        assert_eq!($response.body["status"], $status.as_u16());
    };
}
