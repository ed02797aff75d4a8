use super::{Action, ActionResponse, AppError, ok, rejected};
use axum::extract::State;
use wichtel::domain::constants::{EXCHANGE_TAG, MIN_PARTICIPANTS};
use wichtel::features::access::Access;
use wichtel::features::exchange::{Exchange, ExchangeError, assign};
use wichtel::features::notify::Notify;
use wichtel::kernel::prelude::AppState;

/// Starts the assignment workflow.
///
/// Computes a fresh giver→receiver mapping, parks it behind a single-use
/// token, and mails the organizer a confirmation link. Nothing is disclosed
/// until that link is visited; the registry's stored mapping is only
/// replaced at confirmation time.
#[utoipa::path(
    post,
    path = "/assign",
    responses(
        (status = OK, description = "Confirmation email sent", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Assignment not possible", body = ActionResponse),
    ),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn assign_handler(State(state): State<AppState>) -> Result<Action, AppError> {
    let exchange = state.try_get_slice::<Exchange>()?;
    let access = state.try_get_slice::<Access>()?;
    let notify = state.try_get_slice::<Notify>()?;

    let (names, admin_email) = exchange.read(|game| {
        let names: Vec<String> = game.participants().iter().map(|p| p.name.clone()).collect();
        (names, game.admin().map(|admin| admin.email.clone()))
    });

    if names.len() < MIN_PARTICIPANTS {
        return Ok(rejected(ExchangeError::InsufficientParticipants.to_string()));
    }
    let Some(admin_email) = admin_email else {
        return Ok(rejected("No administrator is registered to confirm the assignments."));
    };
    let Some(mapping) = assign::assign(&names) else {
        return Ok(rejected(ExchangeError::InsufficientParticipants.to_string()));
    };

    let token = access.pending().issue(mapping);
    let link = format!("{}/confirm/{token}", state.config.server.public_url);

    Ok(match notify.send_confirmation(&admin_email, &link) {
        Ok(()) => {
            tracing::info!(recipient = %admin_email, "Confirmation link issued");
            ok(format!(
                "Confirmation email sent to {admin_email}. \
                 Assignments will be distributed once confirmed."
            ))
        },
        Err(err) => {
            // An unconfirmable link must not stay outstanding.
            let _ = access.pending().redeem(&token);
            rejected(format!("Failed to send confirmation email: {err}"))
        },
    })
}
