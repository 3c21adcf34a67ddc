//! In-memory stand-ins for the DynamoDB and S3 gateways.

use std::collections::HashSet;
use std::sync::Mutex;

use exercises_core::models::exercise::{ExerciseRecord, SignedUrl};
use exercises_storage::error::StorageError;
use exercises_storage::objects::UrlSigner;
use exercises_storage::records::RecordStore;
use jiff::{SignedDuration, Timestamp};

#[derive(Default)]
pub struct MemoryStore {
    pub records: Vec<ExerciseRecord>,
    pub unavailable: bool,
}

impl MemoryStore {
    pub fn with(records: Vec<ExerciseRecord>) -> Self {
        Self {
            records,
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            records: Vec::new(),
            unavailable: true,
        }
    }
}

impl RecordStore for MemoryStore {
    async fn list_all(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<ExerciseRecord>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Scan("service unavailable".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| difficulty.is_none_or(|d| r.difficulty_level == d))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ExerciseRecord>, StorageError> {
        if self.unavailable {
            return Err(StorageError::GetItem("service unavailable".to_string()));
        }
        Ok(self.records.iter().find(|r| r.exercise_id == id).cloned())
    }
}

/// Signs every key except those listed in `failing`, recording each key
/// that reaches the blob store.
#[derive(Default)]
pub struct RecordingSigner {
    pub failing: HashSet<String>,
    pub calls: Mutex<Vec<String>>,
}

impl RecordingSigner {
    pub fn failing_on(keys: &[&str]) -> Self {
        Self {
            failing: keys.iter().map(|k| k.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl UrlSigner for RecordingSigner {
    async fn sign(&self, key: &str) -> Result<SignedUrl, StorageError> {
        if key.trim().is_empty() {
            return Err(StorageError::EmptyKey);
        }
        self.calls.lock().unwrap().push(key.to_string());
        if self.failing.contains(key) {
            return Err(StorageError::Presign(format!("access denied: {key}")));
        }
        Ok(SignedUrl {
            url: format!("https://signed.example/{key}"),
            expires_at: Timestamp::now() + SignedDuration::from_secs(3600),
        })
    }
}

pub fn record(id: &str, difficulty: &str) -> ExerciseRecord {
    ExerciseRecord {
        exercise_id: id.to_string(),
        name: format!("Exercise {id}"),
        description: format!("Description of {id}"),
        difficulty_level: difficulty.to_string(),
        image_key: Some(format!("images/{id}.jpg")),
        ..Default::default()
    }
}

pub fn with_thumbnail(mut record: ExerciseRecord) -> ExerciseRecord {
    record.thumbnail_image_key = Some(format!("thumbs/{}.jpg", record.exercise_id));
    record
}
