use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use super::awareness::{AwarenessQuestion, AwarenessTrack};
use super::domain::{ChoiceKey, Participant, Question, QuestionCategory, QuestionId, Subtype};
use super::repository::QuizResultRepository;
use super::service::{DnaAssessmentService, QuizSubmission};
use crate::error::AppError;

/// Header carrying the caller's student id; absent means anonymous.
pub const STUDENT_ID_HEADER: &str = "x-student-id";

/// Router builder exposing the quiz endpoints.
pub fn assessment_router<R>(service: Arc<DnaAssessmentService<R>>) -> Router
where
    R: QuizResultRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/quiz/entrepreneurial-dna/submit",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/quiz/entrepreneurial-dna/eligibility",
            get(eligibility_handler::<R>),
        )
        .route(
            "/api/v1/quiz/entrepreneurial-dna/result",
            get(result_handler::<R>),
        )
        .route(
            "/api/v1/quiz/entrepreneurial-dna/questions",
            get(questions_handler::<R>),
        )
        .route(
            "/api/v1/quiz/entrepreneurial-dna/awareness/:dna_type",
            get(awareness_handler),
        )
        .route("/api/v1/dna/subtypes/:subtype", get(subtype_handler))
        .with_state(service)
}

pub(crate) fn participant(headers: &HeaderMap) -> Participant {
    Participant::from_header(
        headers
            .get(STUDENT_ID_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<DnaAssessmentService<R>>>,
    headers: HeaderMap,
    payload: Result<axum::Json<QuizSubmission>, JsonRejection>,
) -> Result<Response, AppError>
where
    R: QuizResultRepository + 'static,
{
    let axum::Json(submission) =
        payload.map_err(|rejection| AppError::Input(rejection.body_text()))?;
    let participant = participant(&headers);
    let response = service.submit(&participant, &submission, Utc::now())?;
    Ok((StatusCode::OK, axum::Json(response)).into_response())
}

pub(crate) async fn eligibility_handler<R>(
    State(service): State<Arc<DnaAssessmentService<R>>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    R: QuizResultRepository + 'static,
{
    let participant = participant(&headers);
    let eligibility = service.eligibility(&participant, Utc::now())?;
    Ok((StatusCode::OK, axum::Json(eligibility)).into_response())
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<DnaAssessmentService<R>>>,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    R: QuizResultRepository + 'static,
{
    let participant = participant(&headers);
    let Some(student) = participant.student() else {
        let payload = json!({ "error": "a student id is required to look up results" });
        return Ok((StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response());
    };

    let record = service.latest_result(student)?;
    Ok((StatusCode::OK, axum::Json(record.view())).into_response())
}

pub(crate) async fn questions_handler<R>(
    State(service): State<Arc<DnaAssessmentService<R>>>,
) -> Response
where
    R: QuizResultRepository + 'static,
{
    let questions: Vec<QuestionView> = service
        .engine()
        .bank()
        .questions()
        .iter()
        .map(QuestionView::from)
        .collect();
    (StatusCode::OK, axum::Json(questions)).into_response()
}

pub(crate) async fn awareness_handler(Path(track): Path<String>) -> Response {
    match track.parse::<AwarenessTrack>() {
        Ok(track) => {
            let payload = AwarenessSetView {
                track,
                questions: track.questions().to_vec(),
            };
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn subtype_handler(Path(subtype): Path<String>) -> Response {
    match subtype.parse::<Subtype>() {
        Ok(subtype) => (StatusCode::OK, axum::Json(subtype.descriptor())).into_response(),
        Err(error) => {
            let payload = json!({ "error": error });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

/// Question as shown to participants: prompt and choices, no scoring tags.
#[derive(Debug, Serialize)]
struct QuestionView {
    id: QuestionId,
    text: &'static str,
    category: QuestionCategory,
    answers: Vec<ChoiceView>,
}

#[derive(Debug, Serialize)]
struct ChoiceView {
    key: ChoiceKey,
    text: &'static str,
}

impl From<&'static Question> for QuestionView {
    fn from(question: &'static Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            category: question.category,
            answers: ChoiceKey::ordered()
                .into_iter()
                .map(|key| ChoiceView {
                    key,
                    text: question.answer(key).text,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AwarenessSetView {
    track: AwarenessTrack,
    questions: Vec<&'static AwarenessQuestion>,
}
