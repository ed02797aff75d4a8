use super::{Action, ActionResponse, AppError, ok, rejected};
use crate::forms;
use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use utoipa::ToSchema;
use wichtel::domain::constants::EXCHANGE_TAG;
use wichtel::features::exchange::Exchange;
use wichtel::kernel::prelude::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub(super) struct AddParticipantRequest {
    name: String,
    email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(super) struct RemoveParticipantRequest {
    name: String,
}

#[utoipa::path(
    post,
    path = "/participants",
    request_body = AddParticipantRequest,
    responses(
        (status = OK, description = "Participant registered", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Rejected input", body = ActionResponse),
    ),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddParticipantRequest>,
) -> Result<Action, AppError> {
    let exchange = state.try_get_slice::<Exchange>()?;

    let (name, email) = match forms::validate_registration(&req.name, &req.email) {
        Ok(cleaned) => cleaned,
        Err(err) => return Ok(rejected(err.to_string())),
    };

    Ok(match exchange.write(|game| game.add_participant(&name, &email)) {
        Ok(message) => ok(message),
        Err(err) => rejected(err.to_string()),
    })
}

#[utoipa::path(
    post,
    path = "/participants/remove",
    request_body = RemoveParticipantRequest,
    responses(
        (status = OK, description = "Participant removed", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Rejected removal", body = ActionResponse),
    ),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn remove_handler(
    State(state): State<AppState>,
    Json(req): Json<RemoveParticipantRequest>,
) -> Result<Action, AppError> {
    let exchange = state.try_get_slice::<Exchange>()?;
    let name = forms::normalize_name(&req.name);
    let protect_admin = state.config.exchange.protect_admin;

    // The policy check and the removal must see the same registry state.
    let result = exchange.write(|game| {
        if protect_admin && game.admin().is_some_and(|admin| admin.name == name) {
            return Err("The administrator cannot be removed.".to_owned());
        }
        game.remove_participant(&name).map_err(|err| err.to_string())
    });

    Ok(match result {
        Ok(message) => ok(message),
        Err(message) => rejected(message),
    })
}
