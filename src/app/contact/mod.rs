use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use tracing::instrument;

use super::error::{ApiError, AppResult};
use super::AppState;
use crate::domain::contact::NewContact;

pub mod schema;

const CONTACT_RECEIVED: &str =
    "Thank you for your message. We'll get back to you within 24 hours.";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(submit_contact))
}

#[instrument(name = "receiving a contact submission", skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<schema::ContactBody>,
) -> AppResult<impl IntoResponse> {
    let new_contact = NewContact::try_from(body).map_err(ApiError::Validation)?;

    let contact = state.storage.create_contact(new_contact).await?;

    Ok((
        StatusCode::CREATED,
        Json(schema::ContactCreatedBody {
            success: true,
            message: CONTACT_RECEIVED.to_owned(),
            data: contact,
        }),
    ))
}
