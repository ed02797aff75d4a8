use super::{Action, ActionResponse, AppError, ok};
use axum::extract::State;
use wichtel::domain::constants::EXCHANGE_TAG;
use wichtel::features::access::Access;
use wichtel::features::exchange::Exchange;
use wichtel::kernel::prelude::AppState;

/// Returns the exchange to its initial state.
///
/// Drops participants, the stored mapping, and every outstanding
/// confirmation link. The next participant to register becomes the
/// administrator again.
#[utoipa::path(
    post,
    path = "/reset",
    responses((status = OK, description = "Exchange reset", body = ActionResponse)),
    tag = EXCHANGE_TAG,
)]
pub(super) async fn reset_handler(State(state): State<AppState>) -> Result<Action, AppError> {
    let exchange = state.try_get_slice::<Exchange>()?;
    let access = state.try_get_slice::<Access>()?;

    exchange.write(|game| game.reset());
    access.pending().clear();

    tracing::info!("Exchange reset");

    Ok(ok("Game has been reset."))
}
