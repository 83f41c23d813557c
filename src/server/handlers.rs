use super::{pages, types::AdviceSubmission};
use crate::{Error, advisor::AdviceRequester};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub requester: Arc<AdviceRequester>,
}

pub async fn form() -> Html<String> {
    Html(pages::form_page())
}

pub async fn advice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, Html<String>)> {
    let request_id = Uuid::new_v4();
    info!("Received styling request {}", request_id);

    let submission = read_submission(&mut multipart)
        .await
        .map_err(|e| reject(request_id, e))?;
    let session = submission
        .into_session()
        .map_err(|e| reject(request_id, e))?;

    match state.requester.request_advice(&session).await {
        Ok(result) => {
            info!("Styling request {} succeeded", request_id);
            Ok(Html(pages::result_page(&result.text)))
        }
        Err(e) => Err(reject(request_id, e)),
    }
}

async fn read_submission(multipart: &mut Multipart) -> crate::Result<AdviceSubmission> {
    let mut submission = AdviceSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::invalid_input(format!("malformed form data: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == "image" {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| Error::invalid_input(format!("failed to read upload: {e}")))?;
            if !bytes.is_empty() {
                submission.image = Some(bytes.to_vec());
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| Error::invalid_input(format!("failed to read field {name}: {e}")))?;
            match name.as_str() {
                "api_key" => submission.api_key = Some(value),
                "gender" => submission.gender = Some(value),
                "skin_tone" => submission.skin_tone = Some(value),
                "body_type" => submission.body_type = Some(value),
                "occasion" => submission.occasion = Some(value),
                "weather" => submission.weather = Some(value),
                _ => {}
            }
        }
    }

    Ok(submission)
}

fn reject(request_id: Uuid, error: Error) -> (StatusCode, Html<String>) {
    // The error text never carries the credential; the client strips URLs
    // from transport errors before they reach this point.
    error!("Styling request {} failed: {}", request_id, error);

    let (status, hint) = match &error {
        Error::InvalidInput(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "Check the form and try again.",
        ),
        Error::Authentication(_) => (
            StatusCode::UNAUTHORIZED,
            "Re-enter your API key and try again.",
        ),
        Error::Upstream(_) => (
            StatusCode::BAD_GATEWAY,
            "The styling service is unavailable right now. Try again in a moment.",
        ),
        Error::EmptyResponse => (
            StatusCode::BAD_GATEWAY,
            "The stylist had nothing to say. Try submitting again.",
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Something went wrong. Try again.",
        ),
    };

    (status, Html(pages::error_page(&error.to_string(), hint)))
}
