use super::{ActionResponse, AppError, not_found};
use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;
use wichtel::domain::constants::SYSTEM_TAG;
use wichtel::features::notify::{EmailMessage, Notify};
use wichtel::kernel::prelude::AppState;

/// Serialized view of one captured message.
#[derive(Debug, Serialize, ToSchema)]
struct OutboxMessage {
    recipient: String,
    subject: String,
    body: String,
    sender: Option<String>,
}

impl From<EmailMessage> for OutboxMessage {
    fn from(message: EmailMessage) -> Self {
        Self {
            recipient: message.recipient,
            subject: message.subject,
            body: message.body,
            sender: message.sender,
        }
    }
}

/// Development-only view of captured outgoing mail.
///
/// Available when the capture transport is active; the log transport keeps
/// no outbox and this route answers 404.
#[utoipa::path(
    get,
    path = "/outbox",
    responses(
        (status = OK, description = "Captured messages", body = [OutboxMessage]),
        (status = NOT_FOUND, description = "Mail capture not enabled", body = ActionResponse),
    ),
    tag = SYSTEM_TAG,
)]
pub(super) async fn outbox_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let notify = state.try_get_slice::<Notify>()?;

    Ok(notify.outbox().map_or_else(
        || not_found("Mail capture is not enabled.").into_response(),
        |messages| {
            let view: Vec<OutboxMessage> = messages.into_iter().map(Into::into).collect();
            Json(view).into_response()
        },
    ))
}
