//! exercises-catalog
//!
//! Joins exercise records with presigned media URLs.
//!
//! Listing is best-effort: a record that cannot be enriched is logged and
//! left out. Fetching a single record is strict: enrichment failure is
//! returned to the caller.

use exercises_core::models::exercise::{EnrichedExercise, ExerciseListItem, ExerciseRecord};
use exercises_storage::error::StorageError;
use exercises_storage::objects::UrlSigner;
use exercises_storage::records::RecordStore;

pub struct Catalog<S, U> {
    store: S,
    signer: U,
}

impl<S, U> Catalog<S, U>
where
    S: RecordStore,
    U: UrlSigner,
{
    pub fn new(store: S, signer: U) -> Self {
        Self { store, signer }
    }

    pub fn signer(&self) -> &U {
        &self.signer
    }

    /// Every exercise that could be enriched.
    pub async fn list_exercises(&self) -> Result<Vec<EnrichedExercise>, StorageError> {
        self.list_enriched(None).await
    }

    /// Like [`Catalog::list_exercises`], restricted to one difficulty level.
    pub async fn list_exercises_by_difficulty(
        &self,
        difficulty: &str,
    ) -> Result<Vec<EnrichedExercise>, StorageError> {
        self.list_enriched(Some(difficulty)).await
    }

    /// One exercise by id, or `None` if it does not exist.
    pub async fn get_exercise(&self, id: &str) -> Result<Option<EnrichedExercise>, StorageError> {
        let Some(record) = self.store.get_by_id(id).await? else {
            tracing::info!(exercise_id = id, "exercise not found");
            return Ok(None);
        };

        let exercise = self.enrich(&record).await.inspect_err(|e| {
            tracing::error!(exercise_id = id, error = %e, "failed to enrich exercise");
        })?;
        Ok(Some(exercise))
    }

    /// Lightweight listing that only signs thumbnails.
    pub async fn list_exercise_summaries(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<ExerciseListItem>, StorageError> {
        let records = self.store.list_all(difficulty).await?;

        let mut items = Vec::with_capacity(records.len());
        for record in &records {
            let thumbnail = match record.thumbnail_key() {
                Some(key) => match self.signer.sign(key).await {
                    Ok(signed) => Some(signed),
                    Err(e) => {
                        tracing::error!(
                            exercise_id = %record.exercise_id,
                            error = %e,
                            "failed to sign thumbnail, skipping exercise"
                        );
                        continue;
                    }
                },
                None => None,
            };
            items.push(ExerciseListItem::new(record, thumbnail));
        }

        tracing::info!(count = items.len(), "listed exercise summaries");
        Ok(items)
    }

    /// Sign the media keys of `record`.
    ///
    /// The image is mandatory: a missing key is handed to the signer as
    /// blank and rejected there. A thumbnail is signed only when its key is
    /// non-blank, and its failure fails the whole record. Instruction videos
    /// are not signed.
    pub async fn enrich(&self, record: &ExerciseRecord) -> Result<EnrichedExercise, StorageError> {
        let image_key = record.image_key.as_deref().unwrap_or_default();
        let image = self.signer.sign(image_key).await?;

        let mut exercise = EnrichedExercise::new(record, image);
        if let Some(key) = record.thumbnail_key() {
            exercise = exercise.with_thumbnail(self.signer.sign(key).await?);
        }

        Ok(exercise)
    }

    async fn list_enriched(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<EnrichedExercise>, StorageError> {
        let records = self.store.list_all(difficulty).await?;

        let mut exercises = Vec::with_capacity(records.len());
        for record in &records {
            match self.enrich(record).await {
                Ok(exercise) => exercises.push(exercise),
                Err(e) => tracing::error!(
                    exercise_id = %record.exercise_id,
                    error = %e,
                    "failed to enrich exercise, skipping"
                ),
            }
        }

        tracing::info!(
            retrieved = records.len(),
            enriched = exercises.len(),
            "listed exercises"
        );
        Ok(exercises)
    }
}
