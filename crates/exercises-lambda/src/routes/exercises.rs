use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::Response;
use exercises_core::models::response::{ExerciseList, SingleExercise, SuccessResponse};
use exercises_storage::objects::UrlSigner;
use exercises_storage::records::RecordStore;
use serde::Deserialize;

use crate::error::ApiError;
use crate::request_id::RequestId;
use crate::response;
use crate::state::AppState;

/// Optional list refinements. Without them the full catalog is returned.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Exact difficulty level to filter on.
    pub difficulty: Option<String>,
    /// `summary` returns lightweight list items instead of full records.
    pub view: Option<String>,
}

impl ListParams {
    fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref().filter(|d| !d.is_empty())
    }

    fn is_summary(&self) -> bool {
        self.view
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("summary"))
    }
}

/// `GET /exercises`
pub async fn list_exercises<S, U>(
    State(state): State<AppState<S, U>>,
    method: Method,
    RequestId(request_id): RequestId,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Response
where
    S: RecordStore,
    U: UrlSigner,
{
    // A query string that does not parse is ignored; the list path never fails on it.
    let params = match query {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::warn!(error = %e, request_id, "ignoring unparseable query string");
            ListParams::default()
        }
    };

    match list(&state, &method, &params, &request_id).await {
        Ok(resp) => resp,
        Err(e) => e.render(&request_id),
    }
}

/// `GET /exercises/{exercise_id}`
pub async fn get_exercise<S, U>(
    State(state): State<AppState<S, U>>,
    method: Method,
    RequestId(request_id): RequestId,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Response
where
    S: RecordStore,
    U: UrlSigner,
{
    let exercise_id = path.map(|Path(id)| id).map_err(|e| {
        tracing::warn!(error = %e, request_id, "unreadable exercise id");
        ApiError::RouteNotFound(uri.path().to_string())
    });

    match get(&state, &method, exercise_id, &request_id).await {
        Ok(resp) => resp,
        Err(e) => e.render(&request_id),
    }
}

pub async fn route_not_found(RequestId(request_id): RequestId, uri: Uri) -> Response {
    ApiError::RouteNotFound(uri.path().to_string()).render(&request_id)
}

fn ensure_get(method: &Method) -> Result<(), ApiError> {
    if *method == Method::GET {
        Ok(())
    } else {
        Err(ApiError::InvalidMethod(method.to_string()))
    }
}

async fn list<S, U>(
    state: &AppState<S, U>,
    method: &Method,
    params: &ListParams,
    request_id: &str,
) -> Result<Response, ApiError>
where
    S: RecordStore,
    U: UrlSigner,
{
    ensure_get(method)?;
    let difficulty = params.difficulty();

    if params.is_summary() {
        let items = state.catalog.list_exercise_summaries(difficulty).await?;
        tracing::info!(count = items.len(), request_id, "returned exercise summaries");
        let body = SuccessResponse::new(ExerciseList::from(items));
        return Ok(response::success(StatusCode::OK, &body, request_id));
    }

    let exercises = match difficulty {
        Some(level) => state.catalog.list_exercises_by_difficulty(level).await?,
        None => state.catalog.list_exercises().await?,
    };

    tracing::info!(count = exercises.len(), request_id, "returned exercises");
    let body = SuccessResponse::new(ExerciseList::from(exercises));
    Ok(response::success(StatusCode::OK, &body, request_id))
}

async fn get<S, U>(
    state: &AppState<S, U>,
    method: &Method,
    exercise_id: Result<String, ApiError>,
    request_id: &str,
) -> Result<Response, ApiError>
where
    S: RecordStore,
    U: UrlSigner,
{
    ensure_get(method)?;
    let exercise_id = exercise_id?;
    let exercise_id = exercise_id.as_str();

    tracing::info!(exercise_id, request_id, "fetching single exercise");
    let exercise = state
        .catalog
        .get_exercise(exercise_id)
        .await?
        .ok_or_else(|| ApiError::ExerciseNotFound(exercise_id.to_string()))?;

    let body = SuccessResponse::new(SingleExercise { exercise });
    Ok(response::success(StatusCode::OK, &body, request_id))
}
