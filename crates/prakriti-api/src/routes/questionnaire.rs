use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use prakriti_instruments::questionnaire::Question;
use prakriti_instruments::{Section, all_sections, get_section};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SectionDetail {
    id: String,
    name: String,
    questions: Vec<Question>,
}

impl SectionDetail {
    fn from_section(section: &dyn Section) -> Self {
        Self {
            id: section.id().to_string(),
            name: section.name().to_string(),
            questions: section.questions().to_vec(),
        }
    }
}

pub async fn get_questionnaire() -> Json<Vec<SectionDetail>> {
    let sections = all_sections()
        .iter()
        .map(|s| SectionDetail::from_section(s.as_ref()))
        .collect();
    Json(sections)
}

pub async fn get_section_detail(Path(id): Path<String>) -> Result<Json<SectionDetail>, ApiError> {
    let section = get_section(&id)?;
    Ok(Json(SectionDetail::from_section(section.as_ref())))
}

pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questionnaire
        .question(&id)
        .ok_or_else(|| ApiError::NotFound(format!("question not found: {id}")))?;
    Ok(Json(question.clone()))
}
