use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answer::Answers;
use super::patient::PersonalInfo;

/// Which page of the profile builder the user was on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentStep {
    #[default]
    PersonalInfo,
    Assessment,
}

/// Autosaved state of an in-flight assessment.
///
/// Written after every change so that a session can be resumed. Readers are
/// expected to discard snapshots older than the resume window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub step: AssessmentStep,
    #[serde(default)]
    pub question_index: usize,
    #[serde(default)]
    pub answers: Answers,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    pub saved_at: jiff::Timestamp,
}

impl ProgressSnapshot {
    pub fn new(saved_at: jiff::Timestamp) -> Self {
        Self {
            step: AssessmentStep::default(),
            question_index: 0,
            answers: Answers::new(),
            personal_info: PersonalInfo::default(),
            saved_at,
        }
    }
}
