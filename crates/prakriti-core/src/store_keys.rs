//! Key conventions for the local key-value cache.
//!
//! Pure string functions. Every record is scoped to an assessment session so
//! that concurrent sessions never share state.

use uuid::Uuid;

pub const PROGRESS_PREFIX: &str = "prakriti_assessment_progress";

pub const PATIENT_CONSTITUTION_PREFIX: &str = "patient_constitution";

pub const RECENTLY_CREATED_PATIENT_PREFIX: &str = "recently_created_patient";

/// In-flight answers and form state, autosaved after every change.
pub fn progress(session: Uuid) -> String {
    format!("{PROGRESS_PREFIX}-{session}")
}

/// The most recently completed assessment for a session.
pub fn patient_constitution(session: Uuid) -> String {
    format!("{PATIENT_CONSTITUTION_PREFIX}-{session}")
}

/// Short-lived hand-off consumed by the diet generation flow.
pub fn recently_created_patient(session: Uuid) -> String {
    format!("{RECENTLY_CREATED_PATIENT_PREFIX}-{session}")
}
