use casewise::config::LoggingConfig;
use casewise::logging;
use tempfile::TempDir;

#[test]
fn log_lines_land_in_configured_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().join("logs");
    let config = LoggingConfig {
        file_name: "test.log".to_string(),
        ..LoggingConfig::default()
    };

    let guard = logging::init_in(&dir, &config).expect("Failed to init logging");
    tracing::error!(chat = 2, "upload marker line");
    drop(guard);

    let contents = std::fs::read_to_string(dir.join("test.log")).expect("log file exists");
    assert!(contents.contains("upload marker line"));
    assert!(contents.contains("chat=2"));
}
