use super::{Action, ActionResponse, AppError, not_found, ok, rejected};
use axum::extract::{Path, State};
use wichtel::domain::constants::EXCHANGE_TAG;
use wichtel::features::access::{Access, AccessError};
use wichtel::features::exchange::Exchange;
use wichtel::features::notify::Notify;
use wichtel::kernel::prelude::AppState;

/// Finalizes a pending assignment mapping.
///
/// Redeems the single-use token, mails every giver their receiver, commits
/// the mapping, and erases the participant identities so the stored mapping
/// can no longer be correlated with live participant data.
#[utoipa::path(
    get,
    path = "/confirm/{token}",
    params(("token" = String, Path, description = "Single-use confirmation token")),
    responses(
        (status = OK, description = "Assignments distributed", body = ActionResponse),
        (status = NOT_FOUND, description = "Unknown or already used token", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Malformed token", body = ActionResponse),
    ),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn confirm_handler(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Action, AppError> {
    let access = state.try_get_slice::<Access>()?;
    let exchange = state.try_get_slice::<Exchange>()?;
    let notify = state.try_get_slice::<Notify>()?;

    let mapping = match access.pending().redeem(&token) {
        Ok(mapping) => mapping,
        Err(err @ AccessError::MalformedToken) => return Ok(rejected(err.to_string())),
        Err(err @ AccessError::UnknownToken) => return Ok(not_found(err.to_string())),
    };

    let emails = exchange.read(|game| game.emails().clone());

    let total = mapping.len();
    let mut sent = 0usize;
    for (giver, receiver) in &mapping {
        let Some(address) = emails.get(giver) else {
            tracing::warn!(giver = %giver, "No email on record, skipping assignment mail");
            continue;
        };
        match notify.send_assignment(address, giver, receiver) {
            Ok(()) => sent += 1,
            Err(err) => {
                tracing::warn!(giver = %giver, "Failed to send assignment mail: {err}");
            },
        }
    }

    exchange.write(|game| {
        game.store_assignments(mapping);
        game.clear_participants();
    });

    Ok(if sent == total {
        ok("Secret Santa assignments have been sent!")
    } else {
        ok(format!("Partially successful: {sent}/{total} assignment emails sent."))
    })
}
