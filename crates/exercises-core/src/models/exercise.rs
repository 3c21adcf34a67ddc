use serde::Serialize;
use ts_rs::TS;

/// An exercise as stored in the record table. Written by a separate
/// ingestion path; this service only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseRecord {
    pub exercise_id: String,
    pub name: String,
    pub description: String,
    pub difficulty_level: String,
    pub image_key: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail_image_key: Option<String>,
    pub instruction_video_key: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ExerciseRecord {
    /// Thumbnail key, if one is set and not blank.
    pub fn thumbnail_key(&self) -> Option<&str> {
        self.thumbnail_image_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }
}

/// A presigned URL and the instant it stops working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUrl {
    pub url: String,
    pub expires_at: jiff::Timestamp,
}

/// Full response shape for one exercise, with media keys replaced by
/// presigned URLs.
///
/// Each optional URL is set together with its expiration through the
/// `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EnrichedExercise {
    pub exercise_id: String,
    pub name: String,
    pub description: String,
    pub difficulty_level: String,
    pub image_url: String,
    pub image_url_expiration: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub thumbnail_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub thumbnail_image_url_expiration: Option<jiff::Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub instruction_video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub instruction_video_url_expiration: Option<jiff::Timestamp>,
}

impl EnrichedExercise {
    pub fn new(record: &ExerciseRecord, image: SignedUrl) -> Self {
        Self {
            exercise_id: record.exercise_id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            difficulty_level: record.difficulty_level.clone(),
            image_url: image.url,
            image_url_expiration: image.expires_at,
            instructions: record.instructions.clone().filter(|s| !s.is_empty()),
            thumbnail_image_url: None,
            thumbnail_image_url_expiration: None,
            instruction_video_url: None,
            instruction_video_url_expiration: None,
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: SignedUrl) -> Self {
        self.thumbnail_image_url = Some(thumbnail.url);
        self.thumbnail_image_url_expiration = Some(thumbnail.expires_at);
        self
    }

    pub fn with_instruction_video(mut self, video: SignedUrl) -> Self {
        self.instruction_video_url = Some(video.url);
        self.instruction_video_url_expiration = Some(video.expires_at);
        self
    }
}

/// Lightweight shape used by summary listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExerciseListItem {
    pub exercise_id: String,
    pub name: String,
    pub difficulty_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub thumbnail_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub thumbnail_image_url_expiration: Option<jiff::Timestamp>,
}

impl ExerciseListItem {
    pub fn new(record: &ExerciseRecord, thumbnail: Option<SignedUrl>) -> Self {
        let (thumbnail_image_url, thumbnail_image_url_expiration) = match thumbnail {
            Some(t) => (Some(t.url), Some(t.expires_at)),
            None => (None, None),
        };

        Self {
            exercise_id: record.exercise_id.clone(),
            name: record.name.clone(),
            difficulty_level: record.difficulty_level.clone(),
            thumbnail_image_url,
            thumbnail_image_url_expiration,
        }
    }
}
