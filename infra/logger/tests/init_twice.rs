use cppython_logger::{Logger, LoggerError};

#[test]
fn second_init_returns_subscriber_error() {
    let _logger = Logger::builder("cppython-first").init().expect("first init should succeed");

    let err = Logger::builder("cppython-second").init().expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
