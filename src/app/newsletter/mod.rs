use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::instrument;

use super::error::{ApiError, AppResult};
use super::AppState;
use crate::domain::subscriber::NewSubscriber;
use crate::storage::StorageError;

pub mod schema;

const SUBSCRIBED: &str = "Thanks for subscribing! You'll receive our latest updates.";
const ALREADY_SUBSCRIBED: &str = "You're already subscribed to our newsletter!";

pub fn router() -> Router<AppState> {
    Router::new().route("/api/newsletter", post(submit_newsletter))
}

#[instrument(name = "adding a newsletter subscriber", skip(state, body))]
pub async fn submit_newsletter(
    State(state): State<AppState>,
    Json(body): Json<schema::SubscribeBody>,
) -> AppResult<Response> {
    let new_subscriber = NewSubscriber::try_from(body).map_err(ApiError::Validation)?;

    let existing = state
        .storage
        .get_newsletter_by_email(new_subscriber.email.as_ref())
        .await?;

    if existing.is_some() {
        return Ok(already_subscribed());
    }

    match state.storage.create_newsletter(new_subscriber).await {
        Ok(subscription) => Ok((
            StatusCode::CREATED,
            Json(schema::SubscriptionCreatedBody {
                success: true,
                message: SUBSCRIBED.to_owned(),
                data: subscription,
            }),
        )
            .into_response()),
        // Lost the lookup-then-insert race; the unique index settled it.
        Err(StorageError::Duplicate) => Ok(already_subscribed()),
        Err(e) => Err(e.into()),
    }
}

fn already_subscribed() -> Response {
    (
        StatusCode::OK,
        Json(schema::AlreadySubscribedBody {
            success: true,
            message: ALREADY_SUBSCRIBED.to_owned(),
        }),
    )
        .into_response()
}
