use exercises_core::error::ErrorCode;
use exercises_core::models::exercise::{
    EnrichedExercise, ExerciseListItem, ExerciseRecord, SignedUrl,
};
use exercises_core::models::response::{
    ErrorResponse, ExerciseList, SingleExercise, SuccessResponse,
};
use serde_json::Value;

fn record() -> ExerciseRecord {
    ExerciseRecord {
        exercise_id: "ex-1".to_string(),
        name: "Push-ups".to_string(),
        description: "Standard push-up".to_string(),
        difficulty_level: "beginner".to_string(),
        image_key: Some("images/push-ups.jpg".to_string()),
        ..Default::default()
    }
}

fn signed(url: &str) -> SignedUrl {
    SignedUrl {
        url: url.to_string(),
        expires_at: "2025-12-12T12:00:00Z".parse().unwrap(),
    }
}

#[test]
fn enriched_exercise_uses_camel_case_and_omits_unset_fields() {
    let exercise = EnrichedExercise::new(&record(), signed("https://img"));
    let json = serde_json::to_value(&exercise).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["exerciseId"], "ex-1");
    assert_eq!(obj["difficultyLevel"], "beginner");
    assert_eq!(obj["imageUrl"], "https://img");
    assert_eq!(obj["imageUrlExpiration"], "2025-12-12T12:00:00Z");
    for absent in [
        "instructions",
        "thumbnailImageUrl",
        "thumbnailImageUrlExpiration",
        "instructionVideoUrl",
        "instructionVideoUrlExpiration",
    ] {
        assert!(!obj.contains_key(absent), "unexpected key {absent}");
    }
}

#[test]
fn media_urls_are_set_with_their_expiration() {
    let mut source = record();
    source.instructions = Some("Keep your back straight.".to_string());

    let exercise = EnrichedExercise::new(&source, signed("https://img"))
        .with_thumbnail(signed("https://thumb"))
        .with_instruction_video(signed("https://video"));
    let json = serde_json::to_value(&exercise).unwrap();

    assert_eq!(json["instructions"], "Keep your back straight.");
    assert_eq!(json["thumbnailImageUrl"], "https://thumb");
    assert_eq!(json["thumbnailImageUrlExpiration"], "2025-12-12T12:00:00Z");
    assert_eq!(json["instructionVideoUrl"], "https://video");
    assert_eq!(json["instructionVideoUrlExpiration"], "2025-12-12T12:00:00Z");
}

#[test]
fn empty_instructions_are_omitted() {
    let mut source = record();
    source.instructions = Some(String::new());

    let exercise = EnrichedExercise::new(&source, signed("https://img"));
    assert_eq!(exercise.instructions, None);

    let json = serde_json::to_value(&exercise).unwrap();
    assert!(json.get("instructions").is_none(), "json: {json}");
}

#[test]
fn list_item_omits_description_and_image() {
    let item = ExerciseListItem::new(&record(), None);
    let json = serde_json::to_value(&item).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 3);
    assert_eq!(obj["exerciseId"], "ex-1");
    assert_eq!(obj["name"], "Push-ups");
    assert_eq!(obj["difficultyLevel"], "beginner");

    let with_thumb = ExerciseListItem::new(&record(), Some(signed("https://thumb")));
    let json = serde_json::to_value(&with_thumb).unwrap();
    assert_eq!(json["thumbnailImageUrl"], "https://thumb");
    assert!(json.get("thumbnailImageUrlExpiration").is_some());
}

#[test]
fn blank_thumbnail_key_is_ignored() {
    let mut source = record();
    source.thumbnail_image_key = Some("   ".to_string());
    assert_eq!(source.thumbnail_key(), None);

    source.thumbnail_image_key = Some("thumbs/push-ups.jpg".to_string());
    assert_eq!(source.thumbnail_key(), Some("thumbs/push-ups.jpg"));
}

#[test]
fn list_envelope_counts_items() {
    let items = vec![
        ExerciseListItem::new(&record(), None),
        ExerciseListItem::new(&record(), None),
    ];
    let body = SuccessResponse::new(ExerciseList::from(items));
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["count"], 2);
    assert_eq!(json["data"]["exercises"].as_array().unwrap().len(), 2);
    assert!(json["timestamp"].is_string());
}

#[test]
fn single_envelope_wraps_exercise() {
    let exercise = EnrichedExercise::new(&record(), signed("https://img"));
    let body = SuccessResponse::new(SingleExercise { exercise });
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["data"]["exercise"]["exerciseId"], "ex-1");
}

#[test]
fn error_envelope_shape() {
    let body = ErrorResponse::new(ErrorCode::ExerciseNotFound, "missing", "req-1");
    let json = serde_json::to_value(&body).unwrap();

    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "EXERCISE_NOT_FOUND");
    assert_eq!(json["error"]["message"], "missing");
    assert_eq!(json["error"]["requestId"], "req-1");
    assert!(json["error"]["timestamp"].is_string());
}

#[test]
fn error_codes_map_to_status() {
    let cases = [
        (ErrorCode::InvalidMethod, 400, "INVALID_METHOD"),
        (ErrorCode::ExerciseNotFound, 404, "EXERCISE_NOT_FOUND"),
        (ErrorCode::NotFound, 404, "NOT_FOUND"),
        (ErrorCode::DynamoDb, 500, "DYNAMODB_ERROR"),
        (ErrorCode::S3, 500, "S3_ERROR"),
        (ErrorCode::Serialization, 500, "SERIALIZATION_ERROR"),
        (ErrorCode::Internal, 500, "INTERNAL_ERROR"),
    ];

    for (code, status, wire) in cases {
        assert_eq!(code.status(), status);
        assert_eq!(code.as_str(), wire);
        assert_eq!(serde_json::to_value(code).unwrap(), Value::from(wire));
    }
}
