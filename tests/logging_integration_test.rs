// Integration test for file logging.
// Installs the global subscriber, so it lives in its own test binary.

mod common;

use common::{record, record_codec, temp_dir, LOCATOR};
use std::fs;
use std::sync::Arc;
use ttsync::adapters::cache::CachedRepository;
use ttsync::domain::errors::StorageError;
use ttsync::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy, TracingLogger};
use ttsync::infrastructure::storage::InMemoryStorage;

#[test]
fn test_failed_save_is_flushed_to_log_file_when_logger_drops() {
    let dir = temp_dir();
    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    temp_env::with_var_unset("RUST_LOG", || {
        let logger = LoggerImpl::init(&config).unwrap();

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let outcome = runtime.block_on(async {
            let storage = Arc::new(InMemoryStorage::new());
            storage.fail_next_write(StorageError::Io {
                locator: LOCATOR.to_string(),
                message: "disk full".to_string(),
            });
            let repo = CachedRepository::new(record_codec(), storage, Arc::new(TracingLogger::new()), LOCATOR);
            repo.save(record(7, "lost?")).await
        });
        assert!(outcome.is_err());
        drop(runtime);

        // Dropping the logger is what main relies on to flush before exiting.
        drop(logger);
    });

    let contents = fs::read_to_string(dir.path().join("ttsync.log")).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("Failed to save entity"))
        .expect("failed save should be in the log file");
    let entry: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(entry["level"], "ERROR");
    assert!(entry["fields"]["fields"].as_str().unwrap().contains("disk full"));
}
