use axum::Json;
use axum::extract::{Path, State};
use jiff::Timestamp;
use serde::Deserialize;
use uuid::Uuid;

use prakriti_core::models::handoff::{CompletedAssessment, RecentPatient};
use prakriti_core::models::patient::{PersonalInfo, UserRole};
use prakriti_instruments::assessment::complete_assessment;
use prakriti_instruments::collector::AnswerCollector;

use crate::blocking::run_blocking;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompleteRequest {
    /// Falls back to the personal info in the saved progress.
    personal_info: Option<PersonalInfo>,
    #[serde(default)]
    role: UserRole,
}

/// Finish the session's assessment and store the result.
///
/// The saved progress is cleared only if it is still the version that was
/// scored; an answer recorded in the meantime yields a conflict and nothing is
/// stored. Practitioners also get a short-lived recent-patient record so the
/// diet flow can pick the patient up.
pub async fn complete(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
    Json(req): Json<CompleteRequest>,
) -> Result<Json<CompletedAssessment>, ApiError> {
    let now = Timestamp::now();
    run_blocking(move || {
        let record = state.progress.load_record(session, now)?;
        let (answers, saved_info) = record
            .snapshot
            .map(|snapshot| (snapshot.answers, snapshot.personal_info))
            .unwrap_or_default();
        let personal_info = req.personal_info.unwrap_or(saved_info);

        let collector = AnswerCollector::resume(state.questionnaire, answers)?;
        let assessment = complete_assessment(&collector, personal_info, now)?;

        if let Some(etag) = &record.etag {
            state.progress.clear_if_match(session, etag)?;
        }
        state.handoff.record_completed(session, &assessment)?;
        if req.role == UserRole::Practitioner {
            let patient = RecentPatient::from_assessment(&assessment, now);
            state.handoff.record_recent(session, &patient)?;
        }

        Ok(Json(assessment))
    })
    .await
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Json<CompletedAssessment>, ApiError> {
    let assessment = run_blocking(move || Ok(state.handoff.latest_completed(session)?))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no completed assessment for session {session}")))?;
    Ok(Json(assessment))
}

/// Consume the recent-patient hand-off. A second call returns 404.
pub async fn take_recent_patient(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Json<RecentPatient>, ApiError> {
    let patient = run_blocking(move || Ok(state.handoff.take_recent(session, Timestamp::now())?))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("no recent patient for session {session}")))?;
    Ok(Json(patient))
}
