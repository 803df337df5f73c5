use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use prakriti_core::models::patient::PersonalInfoErrors;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// A caller supplied ids or an answer shape the questionnaire does not define.
///
/// These indicate a bug in the caller rather than a user mistake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("unknown question '{question_id}'")]
    UnknownQuestion { question_id: String },

    #[error("unknown sub-question '{sub_question_id}' for question '{question_id}'")]
    UnknownSubQuestion {
        question_id: String,
        sub_question_id: String,
    },

    #[error("question '{question_id}' has sub-questions; a sub-question id is required")]
    MissingSubQuestion { question_id: String },

    #[error("question '{question_id}' has no sub-questions, got '{sub_question_id}'")]
    UnexpectedSubQuestion {
        question_id: String,
        sub_question_id: String,
    },

    #[error("option '{option_id}' is not offered by '{question_id}'")]
    UnknownOption {
        question_id: String,
        option_id: String,
    },

    #[error("answer to '{question_id}' has the wrong shape, expected {expected}")]
    ShapeMismatch {
        question_id: String,
        sub_question_id: Option<String>,
        expected: String,
    },
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("assessment incomplete: question '{question_id}' is unanswered")]
    Incomplete { question_id: String },

    #[error(transparent)]
    InvalidPersonalInfo(#[from] PersonalInfoErrors),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
