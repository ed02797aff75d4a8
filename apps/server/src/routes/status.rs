use super::AppError;
use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;
use wichtel::domain::constants::EXCHANGE_TAG;
use wichtel::features::access::Access;
use wichtel::features::exchange::Exchange;
use wichtel::kernel::prelude::AppState;

/// Public view of one participant. Emails stay server-side.
#[derive(Debug, Serialize, ToSchema)]
pub(super) struct ParticipantView {
    name: String,
    is_admin: bool,
}

/// Current state of the exchange.
///
/// The giver→receiver mapping itself is never exposed here; only the fact
/// that one exists.
#[derive(Debug, Serialize, ToSchema)]
pub(super) struct StatusResponse {
    participants: Vec<ParticipantView>,
    assignments_made: bool,
    pending_confirmations: usize,
}

#[utoipa::path(
    get,
    path = "/status",
    responses((status = OK, description = "Exchange status", body = StatusResponse)),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    let exchange = state.try_get_slice::<Exchange>()?;
    let access = state.try_get_slice::<Access>()?;

    let (participants, assignments_made) = exchange.read(|game| {
        let views = game
            .participants()
            .iter()
            .map(|p| ParticipantView { name: p.name.clone(), is_admin: p.is_admin })
            .collect();
        (views, !game.assignments().is_empty())
    });

    Ok(Json(StatusResponse {
        participants,
        assignments_made,
        pending_confirmations: access.pending().len(),
    }))
}
