use std::future::Future;

use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use exercises_core::config::Config;
use exercises_core::models::exercise::ExerciseRecord;

use crate::error::StorageError;
use crate::item::{self, ATTR_DIFFICULTY_LEVEL, ATTR_EXERCISE_ID};

/// Read access to exercise records.
pub trait RecordStore: Send + Sync + 'static {
    /// Every record, optionally restricted to an exact difficulty level.
    /// Records that cannot be parsed are skipped.
    fn list_all(
        &self,
        difficulty: Option<&str>,
    ) -> impl Future<Output = Result<Vec<ExerciseRecord>, StorageError>> + Send;

    /// Point lookup by exercise id. A missing record is `Ok(None)`.
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<ExerciseRecord>, StorageError>> + Send;
}

/// [`RecordStore`] backed by a DynamoDB table keyed on `exerciseId`.
#[derive(Clone)]
pub struct DynamoRecordStore {
    client: Client,
    table_name: String,
}

impl DynamoRecordStore {
    pub fn new(client: Client, config: &Config) -> Self {
        tracing::info!(table = %config.table_name, "record store initialized");
        Self {
            client,
            table_name: config.table_name.clone(),
        }
    }
}

impl RecordStore for DynamoRecordStore {
    async fn list_all(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<ExerciseRecord>, StorageError> {
        tracing::info!(table = %self.table_name, difficulty, "scanning exercise table");

        let mut records = Vec::new();
        let mut exclusive_start_key = None;

        loop {
            let mut req = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key.take());

            if let Some(level) = difficulty {
                req = req
                    .filter_expression("#difficulty = :difficulty")
                    .expression_attribute_names("#difficulty", ATTR_DIFFICULTY_LEVEL)
                    .expression_attribute_values(
                        ":difficulty",
                        AttributeValue::S(level.to_string()),
                    );
            }

            let resp = req.send().await.map_err(|e| {
                let err = e.into_service_error();
                tracing::error!(table = %self.table_name, error = %err, "DynamoDB scan failed");
                StorageError::Scan(err.to_string())
            })?;

            records.extend(item::records_from_items(resp.items()));

            match resp.last_evaluated_key() {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::info!(count = records.len(), "retrieved exercises from DynamoDB");
        Ok(records)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ExerciseRecord>, StorageError> {
        tracing::info!(table = %self.table_name, exercise_id = id, "fetching exercise");

        let resp = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ATTR_EXERCISE_ID, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| {
                let err = e.into_service_error();
                tracing::error!(exercise_id = id, error = %err, "DynamoDB get_item failed");
                StorageError::GetItem(err.to_string())
            })?;

        match resp.item() {
            None => Ok(None),
            Some(raw) => item::record_from_item(raw)
                .map(Some)
                .map_err(|source| StorageError::InvalidItem {
                    id: id.to_string(),
                    source,
                }),
        }
    }
}
