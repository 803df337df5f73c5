use std::sync::Arc;

use prakriti_instruments::get_questionnaire;
use prakriti_instruments::questionnaire::Questionnaire;
use prakriti_storage::handoff::HandoffRepository;
use prakriti_storage::progress::ProgressRepository;
use prakriti_storage::store::KeyValueStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub questionnaire: &'static Questionnaire,
    pub progress: ProgressRepository,
    pub handoff: HandoffRepository,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            questionnaire: get_questionnaire(),
            progress: ProgressRepository::new(store.clone()),
            handoff: HandoffRepository::new(store),
        }
    }
}
