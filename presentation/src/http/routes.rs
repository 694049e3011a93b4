//! Route table.
//!
//! `GET  /questions/{id}`        — public question view
//! `POST /questions/{id}/answer` — grade a submission

use crate::http::{error, handlers};
use quiz_application::{GetQuestionUseCase, SubmitAnswerUseCase};
use std::convert::Infallible;
use std::sync::Arc;
use warp::{http::Method, Filter, Reply};

fn with_use_case<T: Send + Sync>(
    use_case: Arc<T>,
) -> impl Filter<Extract = (Arc<T>,), Error = Infallible> + Clone {
    warp::any().map(move || use_case.clone())
}

/// Build the complete route tree with CORS, per-request tracing, and
/// rejection recovery applied.
pub fn quiz_routes(
    get_question: Arc<GetQuestionUseCase>,
    submit_answer: Arc<SubmitAnswerUseCase>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST]);

    let get_question_route = warp::get()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(with_use_case(get_question))
        .and_then(handlers::get_question)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "get_question request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    let submit_answer_route = warp::post()
        .and(warp::path("questions"))
        .and(warp::path::param::<String>())
        .and(warp::path("answer"))
        .and(warp::path::end())
        .and(with_use_case(submit_answer))
        .and(warp::body::json())
        .and_then(handlers::submit_answer)
        .with(warp::trace(|info| {
            tracing::info_span!(
                "submit_answer request",
                method = %info.method(),
                path = %info.path(),
                id = %uuid::Uuid::new_v4(),
            )
        }));

    get_question_route
        .or(submit_answer_route)
        .with(cors)
        .with(warp::trace::request())
        .recover(error::return_error)
}
