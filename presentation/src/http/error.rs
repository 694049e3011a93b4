//! Rejection types and the recovery handler that turns them into JSON.

use quiz_application::{GetQuestionError, SubmitAnswerError};
use serde::Serialize;
use std::convert::Infallible;
use tracing::error;
use warp::{
    filters::body::BodyDeserializeError, filters::cors::CorsForbidden, http::StatusCode,
    reject::Reject, Rejection, Reply,
};

/// Errors surfaced through warp's rejection machinery.
#[derive(Debug)]
pub enum ApiError {
    /// The path parameter failed `QuestionId` validation.
    InvalidQuestionId,
    GetQuestion(GetQuestionError),
    SubmitAnswer(SubmitAnswerError),
}

impl Reject for ApiError {}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn json_error(message: &str, status: StatusCode) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: message.to_string(),
        }),
        status,
    )
}

/// Map rejections to JSON error responses.
///
/// Internal failure details (repository errors, data-integrity bugs) are
/// logged but never echoed to the client.
pub async fn return_error(rejection: Rejection) -> Result<impl Reply, Infallible> {
    if let Some(api_error) = rejection.find::<ApiError>() {
        let reply = match api_error {
            ApiError::InvalidQuestionId => {
                json_error("Invalid question id", StatusCode::BAD_REQUEST)
            }
            ApiError::GetQuestion(e) => {
                error!("get question failed: {}", e);
                json_error("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::SubmitAnswer(e) => {
                error!("submit answer failed: {}", e);
                json_error("Internal server error", StatusCode::INTERNAL_SERVER_ERROR)
            }
        };
        return Ok(reply);
    }

    if rejection.find::<BodyDeserializeError>().is_some() {
        return Ok(json_error("Invalid request body", StatusCode::BAD_REQUEST));
    }

    if let Some(forbidden) = rejection.find::<CorsForbidden>() {
        return Ok(json_error(&forbidden.to_string(), StatusCode::FORBIDDEN));
    }

    // Unknown route, or known route with the wrong method. The original
    // router answers both with a plain 404.
    Ok(json_error("Not Found", StatusCode::NOT_FOUND))
}
