//! Route handlers.
//!
//! Handlers translate between the wire and the use cases: parse and
//! validate the id, call the use case, map the outcome to a status code.
//! A missing question is an ordinary 404 here, never a rejection.

use crate::http::error::ApiError;
use quiz_application::{GetQuestionUseCase, SubmitAnswerUseCase};
use quiz_domain::QuestionId;
use serde::Deserialize;
use std::sync::Arc;
use warp::{http::StatusCode, Rejection, Reply};

/// Body of `POST /questions/{id}/answer`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub submitted_label: String,
}

#[derive(serde::Serialize)]
struct NotFoundBody {
    error: &'static str,
}

fn question_not_found() -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&NotFoundBody {
            error: "Question not found",
        }),
        StatusCode::NOT_FOUND,
    )
}

/// Decode and validate the id path segment.
///
/// warp hands path parameters over still percent-encoded, so a request
/// for `/questions/%20` arrives as the literal `"%20"`. Decode first,
/// then validate, so an encoded whitespace-only id is rejected the same
/// way an empty one would be.
fn parse_question_id(raw: String) -> Result<QuestionId, Rejection> {
    let decoded = urlencoding::decode(&raw)
        .map_err(|_| warp::reject::custom(ApiError::InvalidQuestionId))?;
    QuestionId::new(decoded.into_owned())
        .map_err(|_| warp::reject::custom(ApiError::InvalidQuestionId))
}

/// `GET /questions/{id}` — the public projection of a question.
pub async fn get_question(
    id: String,
    use_case: Arc<GetQuestionUseCase>,
) -> Result<impl Reply, Rejection> {
    let question_id = parse_question_id(id)?;

    let result = use_case
        .execute(&question_id)
        .await
        .map_err(|e| warp::reject::custom(ApiError::GetQuestion(e)))?;

    match result {
        Some(question) => Ok(warp::reply::with_status(
            warp::reply::json(&question),
            StatusCode::OK,
        )),
        None => Ok(question_not_found()),
    }
}

/// `POST /questions/{id}/answer` — grade a submission.
pub async fn submit_answer(
    id: String,
    use_case: Arc<SubmitAnswerUseCase>,
    body: SubmitAnswerRequest,
) -> Result<impl Reply, Rejection> {
    let question_id = parse_question_id(id)?;

    let result = use_case
        .execute(&question_id, &body.submitted_label)
        .await
        .map_err(|e| warp::reject::custom(ApiError::SubmitAnswer(e)))?;

    match result {
        Some(outcome) => Ok(warp::reply::with_status(
            warp::reply::json(&outcome),
            StatusCode::OK,
        )),
        None => Ok(question_not_found()),
    }
}
