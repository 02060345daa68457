//! Handler for short code creation.

use axum::{
    Form, Json,
    extract::{FromRequest, FromRequestParts, Query, Request, State},
    http::header::CONTENT_TYPE,
};
use serde_json::json;

use crate::api::dto::create::CreateParams;
use crate::error::AppError;
use crate::state::AppState;

/// `longURL` input accepted from the query string, a form body, or a JSON body.
///
/// The source is chosen by `Content-Type`:
/// - `application/json` → JSON body
/// - `application/x-www-form-urlencoded` → form body
/// - anything else → query string
#[derive(Debug)]
pub struct CreateInput(pub CreateParams);

impl<S> FromRequest<S> for CreateInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let params = if content_type.starts_with("application/json") {
            Json::<CreateParams>::from_request(req, state)
                .await
                .map(|Json(params)| params)
                .map_err(|e| malformed(e.body_text()))?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<CreateParams>::from_request(req, state)
                .await
                .map(|Form(params)| params)
                .map_err(|e| malformed(e.body_text()))?
        } else {
            let (mut parts, _) = req.into_parts();
            Query::<CreateParams>::from_request_parts(&mut parts, state)
                .await
                .map(|Query(params)| params)
                .map_err(|e| malformed(e.body_text()))?
        };

        Ok(Self(params))
    }
}

fn malformed(reason: String) -> AppError {
    AppError::invalid_input("Malformed request", json!({ "reason": reason }))
}

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `GET /create?longURL=<url>` or `POST /create` with a `longURL` form/JSON field.
///
/// # Response
///
/// `200 OK`, `text/plain`:
///
/// ```text
/// Short URL: aB3xY9
/// ```
///
/// # Errors
///
/// - 400 if `longURL` is missing or empty
/// - 500 if the mapping could not be persisted
pub async fn create_handler(
    State(state): State<AppState>,
    CreateInput(params): CreateInput,
) -> Result<String, AppError> {
    let long_url = params.long_url.unwrap_or_default();

    let code = state.registry.create(&long_url).await?;

    Ok(format!("Short URL: {code}\n"))
}
