use crate::app_context::AppContext;
use crate::positioning::reported::{PositionReport, ReportedLocator};
use crate::sessions::models::CycleError;
use crate::sessions::requests::BeginCycleRequest;
use crate::sessions::responses::{
    CreateSessionResponse, CycleStartedResponse, DestinationResponse, DestinationResponseError,
};
use crate::sessions::storage::{HashMapSessionStorage, ISessionStorage};
use crate::sessions::workflow::DestinationWorkflow;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use http::StatusCode;
use uuid::Uuid;

const SESSION_NOT_FOUND: &str = "This page session has expired.";

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Json<CreateSessionResponse> {
    Json(CreateSessionResponse {
        session_id: app_context.sessions.create().await,
    })
}

#[axum::debug_handler]
pub async fn state(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Response {
    match app_context.sessions.state(&session_id).await {
        Some(state) => Json(DestinationResponse::from(state)).into_response(),
        None => session_not_found(),
    }
}

#[axum::debug_handler]
pub async fn begin_cycle(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
    Json(request): Json<BeginCycleRequest>,
) -> Response {
    let workflow = DestinationWorkflow::new(app_context, session_id);
    let begun = if request.geolocation_supported {
        let (locator, reports) = ReportedLocator::channel();
        workflow.begin(locator, Some(reports)).await
    } else {
        workflow.begin(ReportedLocator::unsupported(), None).await
    };
    match begun {
        Ok(generation) => Json(CycleStartedResponse { generation }).into_response(),
        Err(err) => cycle_error(err),
    }
}

#[axum::debug_handler]
pub async fn report(
    Path((session_id, generation)): Path<(Uuid, u64)>,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
    Json(report): Json<PositionReport>,
) -> Response {
    match DestinationWorkflow::new(app_context, session_id)
        .report(generation, report)
        .await
    {
        Ok(state) => Json(DestinationResponse::from(state)).into_response(),
        Err(err) => cycle_error(err),
    }
}

#[axum::debug_handler]
pub async fn outcome(
    Path((session_id, generation)): Path<(Uuid, u64)>,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Response {
    match DestinationWorkflow::new(app_context, session_id)
        .outcome(generation)
        .await
    {
        Ok(state) => Json(DestinationResponse::from(state)).into_response(),
        Err(err) => cycle_error(err),
    }
}

/// The text for the "copy" action, formatted exactly as it is displayed.
#[axum::debug_handler]
pub async fn clipboard(
    Path(session_id): Path<Uuid>,
    State(app_context): State<AppContext<HashMapSessionStorage>>,
) -> Response {
    let Some(state) = app_context.sessions.state(&session_id).await else {
        return session_not_found();
    };
    match state.destination {
        Some(destination) => destination.to_clipboard_text().into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(DestinationResponse::failure(
                DestinationResponseError::NoDestination,
                "There is no destination to copy yet.",
            )),
        )
            .into_response(),
    }
}

fn cycle_error(err: CycleError) -> Response {
    let (status, error_code, message) = match err {
        CycleError::SessionNotFound => return session_not_found(),
        CycleError::UnknownCycle => (
            StatusCode::NOT_FOUND,
            DestinationResponseError::UnknownCycle,
            "No such request was made on this page.",
        ),
        CycleError::Superseded => (
            StatusCode::CONFLICT,
            DestinationResponseError::Superseded,
            "A newer request replaced this one.",
        ),
        CycleError::AlreadyReported => (
            StatusCode::CONFLICT,
            DestinationResponseError::AlreadyReported,
            "A position was already reported for this request.",
        ),
        CycleError::Crashed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            DestinationResponseError::CycleCrashed,
            "Something went wrong, try again.",
        ),
    };
    (
        status,
        Json(DestinationResponse::failure(error_code, message)),
    )
        .into_response()
}

fn session_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(DestinationResponse::failure(
            DestinationResponseError::SessionNotFound,
            SESSION_NOT_FOUND,
        )),
    )
        .into_response()
}
