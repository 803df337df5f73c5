use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::constitution::ConstitutionResult;
use super::dosha::DoshaCount;
use super::patient::{Gender, PersonalInfo};

/// A finished assessment: the classification plus the traits and
/// recommendations shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedAssessment {
    pub result: ConstitutionResult,
    pub characteristics: Vec<String>,
    pub recommendations: Vec<String>,
    pub personal_info: PersonalInfo,
    pub completed_at: jiff::Timestamp,
}

/// Short-lived record telling the diet generation flow which patient was
/// just assessed, so it can be selected automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecentPatient {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub constitution: String,
    pub scores: DoshaCount,
    pub created_at: jiff::Timestamp,
}

impl RecentPatient {
    pub fn from_assessment(assessment: &CompletedAssessment, created_at: jiff::Timestamp) -> Self {
        let info = &assessment.personal_info;
        Self {
            id: Uuid::new_v4(),
            name: info.full_name.clone(),
            email: info.email.clone(),
            age: info.age,
            gender: info.gender,
            constitution: assessment.result.label.clone(),
            scores: assessment.result.scores,
            created_at,
        }
    }
}
