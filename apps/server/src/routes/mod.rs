//! HTTP routes for the Secret Santa workflow.

mod assign;
mod confirm;
mod outbox;
mod participants;
mod reset;
mod status;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use wichtel::kernel::prelude::AppState;

/// Uniform JSON envelope returned by every action route.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ActionResponse {
    /// Whether the requested action was carried out.
    pub success: bool,
    /// User-facing outcome message.
    pub message: String,
}

type Action = (StatusCode, Json<ActionResponse>);

fn ok(message: impl Into<String>) -> Action {
    (StatusCode::OK, Json(ActionResponse { success: true, message: message.into() }))
}

fn rejected(message: impl Into<String>) -> Action {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ActionResponse { success: false, message: message.into() }),
    )
}

fn not_found(message: impl Into<String>) -> Action {
    (StatusCode::NOT_FOUND, Json(ActionResponse { success: false, message: message.into() }))
}

/// Wrapper that converts internal failures into a sanitized 500 response.
///
/// Anything that reaches this type is a server defect (a missing feature
/// slice, most likely), so the original error goes to the log and the client
/// only sees a generic message.
#[derive(Debug)]
pub(crate) struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Unhandled application error: {:#}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ActionResponse { success: false, message: "Internal server error".to_owned() }),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// All exchange workflow routes.
pub(crate) fn exchange_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(status::status_handler))
        .routes(routes!(participants::add_handler))
        .routes(routes!(participants::remove_handler))
        .routes(routes!(assign::assign_handler))
        .routes(routes!(confirm::confirm_handler))
        .routes(routes!(reset::reset_handler))
        .routes(routes!(outbox::outbox_handler))
}
