pub mod assessments;
pub mod health;
pub mod questionnaire;
pub mod scoring;
pub mod sessions;
