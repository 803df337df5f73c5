use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use prakriti_core::models::answer::Answers;
use prakriti_core::models::patient::PersonalInfo;
use prakriti_core::models::progress::{AssessmentStep, ProgressSnapshot};
use prakriti_instruments::collector::AnswerCollector;

use crate::blocking::run_blocking;
use crate::error::ApiError;
use crate::state::AppState;

/// The saved progress, with its ETag for a later conditional `PUT`.
pub async fn get_progress(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<([(HeaderName, String); 1], Json<ProgressSnapshot>), ApiError> {
    let record = run_blocking(move || Ok(state.progress.load_record(session, Timestamp::now())?)).await?;
    match (record.snapshot, record.etag) {
        (Some(snapshot), Some(etag)) => Ok(([(header::ETAG, etag)], Json(snapshot))),
        _ => Err(ApiError::NotFound(format!(
            "no saved progress for session {session}"
        ))),
    }
}

#[derive(Deserialize)]
pub struct SaveProgressRequest {
    #[serde(default)]
    step: AssessmentStep,
    #[serde(default)]
    question_index: usize,
    #[serde(default)]
    answers: Answers,
    #[serde(default)]
    personal_info: PersonalInfo,
}

/// Replace the saved progress. The server stamps `saved_at`.
///
/// With an `If-Match` header the write only happens if the stored record
/// still carries that ETag; otherwise it is a plain overwrite.
pub async fn save_progress(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
    headers: HeaderMap,
    Json(req): Json<SaveProgressRequest>,
) -> Result<([(HeaderName, String); 1], Json<ProgressSnapshot>), ApiError> {
    let if_match = headers
        .get(header::IF_MATCH)
        .map(|value| {
            value
                .to_str()
                .map(str::to_string)
                .map_err(|_| ApiError::BadRequest("If-Match is not a valid ETag".to_string()))
        })
        .transpose()?;

    let collector = AnswerCollector::resume(state.questionnaire, req.answers)?;
    let snapshot = ProgressSnapshot {
        step: req.step,
        question_index: req.question_index.min(state.questionnaire.len().saturating_sub(1)),
        answers: collector.into_answers(),
        personal_info: req.personal_info,
        saved_at: Timestamp::now(),
    };

    run_blocking(move || {
        let etag = match if_match {
            Some(expected) => state.progress.save_if_match(session, &snapshot, Some(&expected))?,
            None => state.progress.save(session, &snapshot)?,
        };
        Ok(([(header::ETAG, etag)], Json(snapshot)))
    })
    .await
}

pub async fn clear_progress(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    run_blocking(move || Ok(state.progress.clear(session)?)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct RecordAnswerRequest {
    question_id: String,
    sub_question_id: Option<String>,
    option_id: String,
}

#[derive(Serialize)]
pub struct RecordAnswerResponse {
    answers: Answers,
    question_complete: bool,
    progress_percent: u8,
    complete: bool,
}

/// Record one selection against the saved progress and autosave it.
///
/// The read-modify-write is conditional on the stored ETag, so selections
/// recorded concurrently for the same session are all kept.
pub async fn record_answer(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
    Json(req): Json<RecordAnswerRequest>,
) -> Result<Json<RecordAnswerResponse>, ApiError> {
    let now = Timestamp::now();
    run_blocking(move || {
        let questionnaire = state.questionnaire;
        let (snapshot, (question_complete, progress_percent, complete)) =
            state.progress.update(session, now, |snapshot| {
                let answers = std::mem::take(&mut snapshot.answers);
                let mut collector = AnswerCollector::resume(questionnaire, answers)?;
                collector.record(&req.question_id, req.sub_question_id.as_deref(), &req.option_id)?;

                let question_complete = questionnaire
                    .question(&req.question_id)
                    .is_some_and(|q| collector.is_question_complete(q));
                let summary = (
                    question_complete,
                    collector.progress_percent(),
                    collector.is_complete(),
                );

                snapshot.step = AssessmentStep::Assessment;
                snapshot.question_index = questionnaire.position(&req.question_id).unwrap_or(0);
                snapshot.answers = collector.into_answers();
                snapshot.saved_at = now;
                Ok::<_, ApiError>(summary)
            })?;

        Ok(Json(RecordAnswerResponse {
            answers: snapshot.answers,
            question_complete,
            progress_percent,
            complete,
        }))
    })
    .await
}
