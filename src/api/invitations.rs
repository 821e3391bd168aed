use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::InvitationResponse;
use crate::state::AppState;

/// Invitation routes
pub fn invitation_routes() -> Router<AppState> {
    Router::new().route("/", post(dispatch_invitations))
}

/// POST /api/v1/invitations - Send invitation emails to a list of recipients
///
/// The body is taken raw so that an absent body, a non-JSON body, and a JSON
/// body with invalid fields each produce their own failure message. Once
/// validation passes the response is always 200: per-recipient failures are
/// reported inside the envelope, and callers inspect `success`.
async fn dispatch_invitations(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<InvitationResponse>> {
    let response = state.dispatcher.dispatch(&body).await?;
    Ok(Json(response))
}
