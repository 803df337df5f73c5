//! prakriti-instruments
//!
//! The Prakriti questionnaire and everything that turns answers into a
//! constitution. Pure data and functions: no storage, no network.

pub mod assessment;
pub mod classify;
pub mod collector;
pub mod error;
pub mod lookup;
pub mod questionnaire;
pub mod scoring;
pub mod sections;

use std::sync::LazyLock;

use error::InstrumentError;
use questionnaire::{Question, Questionnaire};

/// A themed group of questions within the questionnaire.
pub trait Section: Send + Sync {
    /// Unique identifier for this section (e.g., "anatomical_features").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Anatomical Features").
    fn name(&self) -> &str;

    /// The questions of this section, in presentation order.
    fn questions(&self) -> &[Question];

    fn question(&self, id: &str) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }
}

/// Return all sections in presentation order.
pub fn all_sections() -> Vec<Box<dyn Section>> {
    vec![
        Box::new(sections::anatomy::AnatomicalFeatures),
        Box::new(sections::features::PhysiologicalFeatures),
        Box::new(sections::functions::PhysiologicalFunctions),
    ]
}

/// Look up a section by ID.
pub fn get_section(id: &str) -> Result<Box<dyn Section>, InstrumentError> {
    all_sections()
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| InstrumentError::UnknownSection(id.to_string()))
}

/// The full questionnaire, built once for the life of the process.
pub fn get_questionnaire() -> &'static Questionnaire {
    static QUESTIONNAIRE: LazyLock<Questionnaire> = LazyLock::new(|| {
        let questions = all_sections()
            .iter()
            .flat_map(|s| s.questions().iter().cloned())
            .collect();
        Questionnaire::new(questions)
    });
    &QUESTIONNAIRE
}
