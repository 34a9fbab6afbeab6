use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

use crate::models::prediction::{DatasetRow, PredictionRecord};
use crate::prediction::ConfidenceBucket;

pub const HIGH_CONFIDENCE_FILE: &str = "cv_predicted_above_60.csv";
pub const LOW_CONFIDENCE_FILE: &str = "cv_predicted_below_60.csv";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("writer task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Append-only CSV log of predictions, split by confidence bucket.
///
/// All appends go through one lock, held by the blocking writer itself, so
/// concurrent requests never interleave rows even when a caller goes away
/// mid-write. Rows are never updated or deduplicated.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl DatasetStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path_for(&self, bucket: ConfidenceBucket) -> PathBuf {
        match bucket {
            ConfidenceBucket::High => self.data_dir.join(HIGH_CONFIDENCE_FILE),
            ConfidenceBucket::Low => self.data_dir.join(LOW_CONFIDENCE_FILE),
        }
    }

    /// Appends `record` to the bucket's file, writing the header first if the file is new.
    pub async fn append(
        &self,
        record: &PredictionRecord,
        bucket: ConfidenceBucket,
    ) -> Result<PathBuf, DatasetError> {
        let path = self.path_for(bucket);
        let row = DatasetRow::from(record);

        // The guard moves into the writer so the lock outlives a cancelled request.
        let guard = self.write_lock.clone().lock_owned().await;
        let target = path.clone();
        tokio::task::spawn_blocking(move || {
            let result = append_row(&target, &row);
            drop(guard);
            result
        })
        .await??;

        info!("Stored prediction {} in {}", record.id, path.display());
        Ok(path)
    }
}

fn append_row(path: &Path, row: &DatasetRow) -> Result<(), DatasetError> {
    let needs_header = std::fs::metadata(path)
        .map(|meta| meta.len() == 0)
        .unwrap_or(true);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::prediction::OrderedMap;
    use uuid::Uuid;

    fn record(posisi: &str, text: &str) -> PredictionRecord {
        PredictionRecord {
            id: Uuid::new_v4(),
            posisi: posisi.to_string(),
            cv_user: text.to_string(),
            probability: "80.0%".to_string(),
            top_5_positions: OrderedMap(vec![("HR".to_string(), "5.0%".to_string())]),
        }
    }

    fn read_rows(path: &Path) -> Vec<DatasetRow> {
        csv::Reader::from_path(path)
            .unwrap()
            .deserialize::<DatasetRow>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[tokio::test]
    async fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().to_path_buf());

        store
            .append(&record("Data Science", "python"), ConfidenceBucket::High)
            .await
            .unwrap();
        let path = store
            .append(&record("Data Science", "sql"), ConfidenceBucket::High)
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.matches("id,posisi,cv_user,probability,top_5_positions").count(), 1);

        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cv_user, "python");
        assert_eq!(rows[1].cv_user, "sql");
        assert_eq!(rows[0].top_5_positions, "HR (5.0%)");
    }

    #[tokio::test]
    async fn test_buckets_go_to_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().to_path_buf());

        let high = store
            .append(&record("A", "x"), ConfidenceBucket::High)
            .await
            .unwrap();
        let low = store
            .append(&record("B", "y"), ConfidenceBucket::Low)
            .await
            .unwrap();

        assert!(high.ends_with(HIGH_CONFIDENCE_FILE));
        assert!(low.ends_with(LOW_CONFIDENCE_FILE));
        assert_eq!(read_rows(&high)[0].posisi, "A");
        assert_eq!(read_rows(&low)[0].posisi, "B");
    }

    #[tokio::test]
    async fn test_text_with_commas_quotes_and_newlines_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().to_path_buf());
        let text = "Rust, Go and \"C\"\nsecond line";

        let path = store
            .append(&record("A", text), ConfidenceBucket::Low)
            .await
            .unwrap();

        assert_eq!(read_rows(&path)[0].cv_user, text);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().to_path_buf());
        let long_text = "experience ".repeat(2_000);

        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            let rec = record(&format!("class_{i}"), &long_text);
            handles.push(tokio::spawn(async move {
                store.append(&rec, ConfidenceBucket::High).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let rows = read_rows(&store.path_for(ConfidenceBucket::High));
        assert_eq!(rows.len(), 32);
        assert!(rows.iter().all(|r| r.cv_user == long_text));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancelled_append_keeps_the_lock_until_written() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().to_path_buf());
        let path = store.path_for(ConfidenceBucket::High);
        let big_text = "x".repeat(64 * 1024 * 1024);

        let task = {
            let store = store.clone();
            let rec = record("Big", &big_text);
            tokio::spawn(async move { store.append(&rec, ConfidenceBucket::High).await })
        };

        while std::fs::metadata(&path).map(|m| m.len() == 0).unwrap_or(true) {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
        }
        task.abort();
        // Whenever the lock is free, the aborted row must already be complete.
        if store.write_lock.try_lock().is_ok() {
            let rows = read_rows(&path);
            assert_eq!(rows.len(), 1, "lock released before the writer finished");
            assert_eq!(rows[0].cv_user.len(), big_text.len());
        }

        store
            .append(&record("Small", "after"), ConfidenceBucket::High)
            .await
            .unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw.matches("id,posisi,cv_user,probability,top_5_positions").count(), 1);
        let rows = read_rows(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].posisi, "Big");
        assert_eq!(rows[0].cv_user.len(), big_text.len());
        assert_eq!(rows[1].cv_user, "after");
    }

    #[tokio::test]
    async fn test_missing_data_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetStore::new(dir.path().join("absent"));
        let err = store
            .append(&record("A", "x"), ConfidenceBucket::Low)
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
