use crate::core::transform::{convert_lines, split_lines};
use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::{ConvertError, Result};

/// Reads the console log, converts it and writes the CSV file.
pub struct ConsolePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConsolePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Recovers the io::Error a storage backend failed with.
fn into_io_error(err: ConvertError) -> std::io::Error {
    match err {
        ConvertError::IoError(e) => e,
        other => std::io::Error::other(other.to_string()),
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConsolePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let path = self.config.input_path();
        tracing::debug!("Reading console log: {}", path);

        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| ConvertError::input_unavailable(path, into_io_error(e)))?;

        let text = String::from_utf8(bytes).map_err(|e| {
            ConvertError::input_unavailable(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;

        let lines = split_lines(&text);
        tracing::debug!("Read {} bytes, {} lines", text.len(), lines.len());
        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        // 換行已在 extract 統一為 '\n'
        let result = convert_lines(&lines, self.config.drop_marker_lines());

        tracing::debug!(
            "Numeric lines: {}, input markers: {}, output markers: {}, substitutions: {}",
            result.summary.numeric_lines,
            result.summary.input_markers,
            result.summary.output_markers,
            result.summary.substitutions
        );

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let path = self.config.output_path();
        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.summary.lines_written,
            result.csv_output.len(),
            path
        );

        self.storage
            .write_file(path, result.csv_output.as_bytes())
            .await
            .map_err(|e| ConvertError::output_unwritable(path, into_io_error(e)))?;

        Ok(path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        read_only: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                read_only: false,
            }
        }

        fn read_only() -> Self {
            Self {
                read_only: true,
                ..Self::new()
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                ConvertError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.read_only {
                return Err(ConvertError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig {
        drop_marker_lines: bool,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            "console.txt"
        }

        fn output_path(&self) -> &str {
            "console.csv"
        }

        fn drop_marker_lines(&self) -> bool {
            self.drop_marker_lines
        }
    }

    fn pipeline(storage: MockStorage) -> ConsolePipeline<MockStorage, TestConfig> {
        ConsolePipeline::new(
            storage,
            TestConfig {
                drop_marker_lines: false,
            },
        )
    }

    #[tokio::test]
    async fn test_full_run_writes_converted_rows() {
        let storage = MockStorage::new();
        storage
            .put_file(
                "console.txt",
                b"input swap\n0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174 - 0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270\n",
            )
            .await;
        let pipeline = pipeline(storage.clone());

        let lines = pipeline.extract().await.unwrap();
        assert_eq!(lines.len(), 2);

        let result = pipeline.transform(lines).await.unwrap();
        let path = pipeline.load(result).await.unwrap();
        assert_eq!(path, "console.csv");

        let written = storage.get_file("console.csv").await.unwrap();
        assert_eq!(
            String::from_utf8(written).unwrap(),
            "input,swap\nusdc-wMatic,1,0\n"
        );
    }

    #[tokio::test]
    async fn test_missing_input_is_input_unavailable() {
        let storage = MockStorage::new();
        let pipeline = pipeline(storage.clone());

        let err = pipeline.extract().await.unwrap_err();
        match err {
            ConvertError::InputUnavailable { path, source } => {
                assert_eq!(path, "console.txt");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(storage.get_file("console.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_input_unavailable() {
        let storage = MockStorage::new();
        storage.put_file("console.txt", &[0x31, 0xff, 0x0a]).await;
        let pipeline = pipeline(storage);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, ConvertError::InputUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_write_failure_is_output_unwritable() {
        let storage = MockStorage::read_only();
        let pipeline = pipeline(storage);

        let result = pipeline.transform(vec!["1\n".to_string()]).await.unwrap();
        let err = pipeline.load(result).await.unwrap_err();
        match err {
            ConvertError::OutputUnwritable { path, source } => {
                assert_eq!(path, "console.csv");
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_drop_marker_lines_from_config() {
        let storage = MockStorage::new();
        storage
            .put_file("console.txt", b"input a\noutput b\noutput c\n10 - 20\n")
            .await;
        let pipeline = ConsolePipeline::new(
            storage.clone(),
            TestConfig {
                drop_marker_lines: true,
            },
        );

        let lines = pipeline.extract().await.unwrap();
        let result = pipeline.transform(lines).await.unwrap();
        assert_eq!(result.csv_output, "10-20,1,2\n");
    }
}
