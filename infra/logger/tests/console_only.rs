use cppython_logger::Logger;

#[test]
fn console_only_has_no_file_output() {
    let logger = Logger::builder("cppython-console")
        .verbosity(2)
        .init()
        .expect("logger should initialize");

    assert!(!logger.has_file_output());
    tracing::debug!(target: "cppython.provider.mock", "console logging works");
}
