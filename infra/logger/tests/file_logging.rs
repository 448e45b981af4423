use cppython_logger::{Logger, Rotation};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let log_dir = tmp.path().join("logs");

    let logger = Logger::builder("cppython-file")
        .console(false)
        .verbosity(1)
        .file(&log_dir)
        .rotation(Rotation::NEVER)
        .json(true)
        .init()?;
    assert!(logger.has_file_output());

    tracing::info!(plugin = "cppython.provider.mock", "tooling downloaded");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(log_file)?;
    assert!(contents.contains("tooling downloaded"));
    assert!(contents.trim_start().starts_with('{'), "file output should be JSON");

    Ok(())
}
