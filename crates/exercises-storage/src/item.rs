//! Mapping from raw DynamoDB items to [`ExerciseRecord`].
//!
//! All attribute presence and type checks live here.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use exercises_core::models::exercise::ExerciseRecord;

use crate::error::ItemError;

pub const ATTR_EXERCISE_ID: &str = "exerciseId";
pub const ATTR_NAME: &str = "name";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_DIFFICULTY_LEVEL: &str = "difficultyLevel";
pub const ATTR_IMAGE_KEY: &str = "imageKey";
pub const ATTR_INSTRUCTIONS: &str = "instructions";
pub const ATTR_THUMBNAIL_IMAGE_KEY: &str = "thumbnailImageKey";
pub const ATTR_INSTRUCTION_VIDEO_KEY: &str = "instructionVideoKey";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

pub type Item = HashMap<String, AttributeValue>;

/// Map one item. `exerciseId` is required; the descriptive fields default
/// to empty strings and the media keys and timestamps to `None`.
pub fn record_from_item(item: &Item) -> Result<ExerciseRecord, ItemError> {
    let exercise_id = string_attr(item, ATTR_EXERCISE_ID)?
        .filter(|id| !id.is_empty())
        .ok_or(ItemError::MissingAttribute(ATTR_EXERCISE_ID))?;

    Ok(ExerciseRecord {
        exercise_id,
        name: string_attr(item, ATTR_NAME)?.unwrap_or_default(),
        description: string_attr(item, ATTR_DESCRIPTION)?.unwrap_or_default(),
        difficulty_level: string_attr(item, ATTR_DIFFICULTY_LEVEL)?.unwrap_or_default(),
        image_key: string_attr(item, ATTR_IMAGE_KEY)?,
        instructions: string_attr(item, ATTR_INSTRUCTIONS)?,
        thumbnail_image_key: string_attr(item, ATTR_THUMBNAIL_IMAGE_KEY)?,
        instruction_video_key: string_attr(item, ATTR_INSTRUCTION_VIDEO_KEY)?,
        created_at: string_attr(item, ATTR_CREATED_AT)?,
        updated_at: string_attr(item, ATTR_UPDATED_AT)?,
    })
}

/// Map a page of items, logging and skipping any that fail.
pub fn records_from_items(items: &[Item]) -> Vec<ExerciseRecord> {
    items
        .iter()
        .filter_map(|item| match record_from_item(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::error!(
                    exercise_id = item_id(item),
                    error = %e,
                    "failed to parse exercise item"
                );
                None
            }
        })
        .collect()
}

/// Best-effort id for log lines about items that failed to map.
pub fn item_id(item: &Item) -> &str {
    item.get(ATTR_EXERCISE_ID)
        .and_then(|v| v.as_s().ok())
        .map(String::as_str)
        .unwrap_or("unknown")
}

fn string_attr(item: &Item, name: &'static str) -> Result<Option<String>, ItemError> {
    match item.get(name) {
        None | Some(AttributeValue::Null(_)) => Ok(None),
        Some(AttributeValue::S(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ItemError::NotAString(name)),
    }
}
