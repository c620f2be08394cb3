use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use chrono::Local;
use serde::Serialize;
use tracing::warn;

use crate::{
    error::TripPlannerError,
    matcher::TripMatcher,
    models::TripPackage,
    planner::{Notification, Notifier, SearchForm, book_trip},
};

/// Shared, read-only state for all request handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: TripMatcher,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    #[must_use]
    pub fn new(matcher: TripMatcher, notifier: Arc<dyn Notifier>) -> Self {
        Self { matcher, notifier }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub count: usize,
    /// Id of the first result
    pub best_match: Option<String>,
    pub trips: Vec<TripPackage>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

fn error_response(err: &TripPlannerError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        TripPlannerError::Validation { .. } => StatusCode::BAD_REQUEST,
        TripPlannerError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: err.user_message(),
        }),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/destinations", get(list_destinations))
        .route("/trips", get(list_trips))
        .route("/trips/search", post(search_trips))
        .route("/trips/{id}", get(get_trip))
        .route("/trips/{id}/book", post(book))
        .with_state(state)
}

async fn list_destinations(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.matcher.catalog().destinations().to_vec())
}

async fn list_trips(State(state): State<AppState>) -> Json<Vec<TripPackage>> {
    Json(state.matcher.catalog().trips().to_vec())
}

async fn get_trip(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<TripPackage> {
    state
        .matcher
        .catalog()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| error_response(&TripPlannerError::not_found(id)))
}

async fn search_trips(
    State(state): State<AppState>,
    payload: Result<Json<SearchForm>, JsonRejection>,
) -> ApiResult<SearchResponse> {
    let Json(form) = payload.map_err(|rejection| {
        warn!("Unreadable search form: {}", rejection.body_text());
        error_response(&TripPlannerError::validation(rejection.body_text()))
    })?;

    let criteria = form.validate(Local::now().date_naive()).map_err(|e| {
        warn!("Rejected search form: {}", e);
        error_response(&e)
    })?;

    let trips = state.matcher.search_trips(&criteria);
    Ok(Json(SearchResponse {
        count: trips.len(),
        best_match: trips.first().map(|trip| trip.id.clone()),
        trips,
    }))
}

async fn book(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Notification> {
    let trip = state
        .matcher
        .catalog()
        .get(&id)
        .ok_or_else(|| error_response(&TripPlannerError::not_found(id.as_str())))?;
    Ok(Json(book_trip(trip, state.notifier.as_ref())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::planner::LogNotifier;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        let matcher = TripMatcher::new(Arc::new(Catalog::seed()));
        router(AppState::new(matcher, Arc::new(LogNotifier)))
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_destinations() {
        let (status, body) = send(Request::get("/destinations").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 10);
        assert_eq!(body[9], "Sydney, Australia");
    }

    #[tokio::test]
    async fn test_get_trip_and_missing_trip() {
        let (status, body) = send(Request::get("/trips/paris-romance").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["maxPeople"], 2);

        let (status, body) = send(Request::get("/trips/atlantis").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("atlantis"));
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let (status, body) = send(post_json(
            "/trips/search",
            r#"{"destination":"Thailand","budget":500,"people":8,"duration":9}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 1);
        assert_eq!(body["bestMatch"], "thailand-budget");
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let (status, body) = send(post_json(
            "/trips/search",
            r#"{"destination":"Nonexistent","budget":"1000","people":"2","duration":"7"}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert!(body["bestMatch"].is_null());
    }

    #[tokio::test]
    async fn test_search_rejects_incomplete_form() {
        let (status, body) = send(post_json("/trips/search", r#"{"destination":"Bali"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("budget"));
    }

    #[tokio::test]
    async fn test_search_rejects_mistyped_field() {
        let (status, body) = send(post_json(
            "/trips/search",
            r#"{"destination":"Bali","budget":true,"people":2,"duration":7}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid input"));
        assert!(error.contains("budget"));
    }

    #[tokio::test]
    async fn test_search_rejects_malformed_json() {
        let (status, body) = send(post_json("/trips/search", r#"{"destination":"Bali","bud"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid input"));
    }

    #[tokio::test]
    async fn test_book_endpoint() {
        let (status, body) = send(post_json("/trips/iceland-nature/book", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Trip Booked Successfully! 🎉");
        assert!(body["description"].as_str().unwrap().contains("Iceland Natural Wonders"));
    }
}
