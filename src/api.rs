//! HTTP route handlers for the party-game API.
//!
//! Thin wrappers over the store: validate input, perform one store
//! operation, wrap the result in the `{success, ...}` envelope the web
//! front end consumes. Wire JSON is camelCase.

use axum::{
    extract::{Path, Query, State},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::{admin_auth_middleware, AdminConfig};
use crate::error::AppError;
use crate::state::AppState;
use crate::types::{AnswerValue, RevealSlide, Room, Scenario, ScenarioId, ScenarioTally};

/// Build the application router. Layers (CORS, tracing) are applied by the
/// caller so tests can skip them.
pub fn router(state: Arc<AppState>, admin: Arc<AdminConfig>) -> Router {
    let admin_routes = Router::new()
        .route("/api/admin/rooms/{code}", patch(update_room))
        .route("/api/admin/scenarios", post(create_scenario))
        .route("/api/admin/scenarios/{id}", patch(update_scenario))
        .layer(middleware::from_fn_with_state(admin, admin_auth_middleware));

    Router::new()
        .route("/api/rooms", get(get_rooms).post(create_room))
        .route("/api/scenarios", get(list_scenarios))
        .route(
            "/api/answers",
            get(get_session_answers).post(submit_answer).delete(undo_answer),
        )
        .route("/api/aggregates", get(get_aggregates))
        .route("/api/slides", get(list_slides))
        .merge(admin_routes)
        .with_state(state)
}

// ========== Rooms ==========

#[derive(Debug, Deserialize)]
struct RoomQuery {
    code: Option<String>,
}

#[derive(Debug, Serialize)]
struct RoomListResponse {
    success: bool,
    rooms: Vec<Room>,
}

#[derive(Debug, Serialize)]
struct RoomLookupResponse {
    success: bool,
    room: Room,
    /// The active deck, sent along so joining is a single request
    scenarios: Vec<Scenario>,
}

#[derive(Debug, Serialize)]
struct RoomResponse {
    success: bool,
    room: Room,
}

/// GET /api/rooms — every room, or one room plus its deck when `?code=` is
/// given.
async fn get_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RoomQuery>,
) -> Result<Response, AppError> {
    if let Some(code) = query.code.filter(|c| !c.is_empty()) {
        let room = state
            .room_by_code(&code)
            .await
            .ok_or_else(|| AppError::not_found("Room not found"))?;
        let scenarios = state.active_scenarios().await;
        return Ok(Json(RoomLookupResponse {
            success: true,
            room,
            scenarios,
        })
        .into_response());
    }

    let rooms = state.all_rooms().await;
    Ok(Json(RoomListResponse {
        success: true,
        rooms,
    })
    .into_response())
}

#[derive(Debug, Deserialize)]
struct CreateRoomRequest {
    #[serde(default)]
    title: Option<String>,
}

/// POST /api/rooms
async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    let title = req
        .title
        .ok_or_else(|| AppError::validation("Title required"))?;
    let room = state.create_room(&title).await?;
    Ok(Json(RoomResponse {
        success: true,
        room,
    }))
}

// ========== Scenarios ==========

#[derive(Debug, Serialize)]
struct ScenarioListResponse {
    success: bool,
    scenarios: Vec<Scenario>,
}

/// GET /api/scenarios — the active deck
async fn list_scenarios(State(state): State<Arc<AppState>>) -> Json<ScenarioListResponse> {
    Json(ScenarioListResponse {
        success: true,
        scenarios: state.active_scenarios().await,
    })
}

// ========== Answers ==========

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionQuery {
    session_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SessionAnswersResponse {
    success: bool,
    answers: HashMap<ScenarioId, AnswerValue>,
}

/// GET /api/answers?sessionId=
async fn get_session_answers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SessionAnswersResponse>, AppError> {
    let session_id = query
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("Session ID required"))?;

    Ok(Json(SessionAnswersResponse {
        success: true,
        answers: state.session_answers(&session_id).await,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitAnswerRequest {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    scenario_id: Option<String>,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Serialize)]
struct AckResponse {
    success: bool,
}

/// POST /api/answers — upsert one swipe
async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<AckResponse>, AppError> {
    let (Some(session_id), Some(scenario_id), Some(answer)) =
        (req.session_id, req.scenario_id, req.answer)
    else {
        return Err(AppError::validation("Missing required fields"));
    };

    let value: AnswerValue = answer
        .parse()
        .map_err(|_| AppError::validation("Answer must be yes or no"))?;

    state.set_answer(&session_id, &scenario_id, value).await?;
    Ok(Json(AckResponse { success: true }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerKeyQuery {
    session_id: Option<String>,
    scenario_id: Option<String>,
}

/// DELETE /api/answers?sessionId=&scenarioId= — undo a swipe. Deleting an
/// answer that was never stored still succeeds.
async fn undo_answer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnswerKeyQuery>,
) -> Result<Json<AckResponse>, AppError> {
    let (Some(session_id), Some(scenario_id)) = (query.session_id, query.scenario_id) else {
        return Err(AppError::validation("Session ID and Scenario ID required"));
    };

    state.remove_answer(&session_id, &scenario_id).await?;
    Ok(Json(AckResponse { success: true }))
}

// ========== Aggregates ==========

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregatesResponse {
    success: bool,
    aggregates: HashMap<ScenarioId, ScenarioTally>,
    total_participants: u64,
}

/// GET /api/aggregates — the reveal-phase tallies
async fn get_aggregates(State(state): State<Arc<AppState>>) -> Json<AggregatesResponse> {
    let report = state.aggregates().await;
    Json(AggregatesResponse {
        success: true,
        aggregates: report.scenarios,
        total_participants: report.total_participants,
    })
}

// ========== Slides ==========

#[derive(Debug, Serialize)]
struct SlideListResponse {
    success: bool,
    slides: Vec<RevealSlide>,
}

/// GET /api/slides
async fn list_slides(State(state): State<Arc<AppState>>) -> Json<SlideListResponse> {
    Json(SlideListResponse {
        success: true,
        slides: state.all_slides().await,
    })
}

// ========== Admin ==========

#[derive(Debug, Deserialize)]
struct UpdateRoomRequest {
    #[serde(default)]
    title: Option<String>,
}

/// PATCH /api/admin/rooms/{code}
async fn update_room(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    Json(req): Json<UpdateRoomRequest>,
) -> Result<Json<RoomResponse>, AppError> {
    let title = req
        .title
        .ok_or_else(|| AppError::validation("Title required"))?;
    let room = state.set_room_title(&code, &title).await?;
    Ok(Json(RoomResponse {
        success: true,
        room,
    }))
}

#[derive(Debug, Deserialize)]
struct CreateScenarioRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScenarioResponse {
    success: bool,
    scenario: Scenario,
}

/// POST /api/admin/scenarios
async fn create_scenario(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateScenarioRequest>,
) -> Result<Json<ScenarioResponse>, AppError> {
    let text = req
        .text
        .ok_or_else(|| AppError::validation("Text required"))?;
    let scenario = state.add_scenario(&text).await?;
    Ok(Json(ScenarioResponse {
        success: true,
        scenario,
    }))
}

#[derive(Debug, Deserialize)]
struct UpdateScenarioRequest {
    text: Option<String>,
    active: Option<bool>,
}

/// PATCH /api/admin/scenarios/{id}
async fn update_scenario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<ScenarioId>,
    Json(req): Json<UpdateScenarioRequest>,
) -> Result<Json<ScenarioResponse>, AppError> {
    let scenario = state
        .update_scenario(&id, req.text.as_deref(), req.active)
        .await?;
    Ok(Json(ScenarioResponse {
        success: true,
        scenario,
    }))
}
