use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};

use prakriti_core::models::answer::Answers;
use prakriti_core::models::constitution::ConstitutionResult;
use prakriti_core::models::dosha::{Dosha, DoshaCount};
use prakriti_instruments::classify::classify;
use prakriti_instruments::lookup::{characteristics, recommendations};
use prakriti_instruments::scoring::score_answers;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScoreRequest {
    answers: Answers,
}

/// Score a set of answers. Partial answer sets are allowed.
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<DoshaCount>, ApiError> {
    if let Some(error) = state.questionnaire.validate_answers(&req.answers).into_iter().next() {
        return Err(error.into());
    }
    Ok(Json(score_answers(&req.answers, state.questionnaire)))
}

pub async fn classify_scores(Json(scores): Json<DoshaCount>) -> Json<ConstitutionResult> {
    Json(classify(scores))
}

#[derive(Deserialize)]
pub struct GuidanceQuery {
    secondary: Option<String>,
}

#[derive(Serialize)]
pub struct Guidance {
    characteristics: Vec<String>,
    recommendations: Vec<String>,
}

/// Traits and recommendations for a primary dosha, optionally combined with
/// a secondary one.
pub async fn guidance(
    Path(primary): Path<String>,
    Query(query): Query<GuidanceQuery>,
) -> Result<Json<Guidance>, ApiError> {
    let primary: Dosha = primary.parse()?;
    let secondary = query.secondary.as_deref().map(str::parse::<Dosha>).transpose()?;
    let secondary_key = secondary.map(Dosha::key);

    Ok(Json(Guidance {
        characteristics: characteristics(primary.key(), secondary_key),
        recommendations: recommendations(primary.key(), secondary_key),
    }))
}
