use prakriti_core::models::answer::Answers;
use prakriti_core::models::dosha::{DoshaCount, DoshaSet};

use crate::questionnaire::Questionnaire;

/// Tally the doshas of every selected option.
///
/// Counts are always rebuilt from the full answer map, so an overwritten or
/// toggled-off selection can never linger. An option shared by two doshas
/// counts once for each of them.
pub fn score_answers(answers: &Answers, questionnaire: &Questionnaire) -> DoshaCount {
    let mut counts = DoshaCount::default();
    for (question_id, option_id) in answers.selected_option_ids() {
        counts.add(attribution(questionnaire, question_id, option_id));
    }
    tracing::debug!(
        vata = counts.vata,
        pitta = counts.pitta,
        kapha = counts.kapha,
        answered = answers.len(),
        "answers scored"
    );
    counts
}

/// Attribution of one selected id. Ids outside the questionnaire fall back to
/// the markers in the id itself; ids with no marker count for nothing.
fn attribution(questionnaire: &Questionnaire, question_id: &str, option_id: &str) -> DoshaSet {
    if let Some(doshas) = questionnaire.doshas_for(option_id) {
        return doshas;
    }
    let doshas = DoshaSet::from_option_id(option_id);
    tracing::debug!(
        question_id,
        option_id,
        attributed = !doshas.is_empty(),
        "option not in questionnaire"
    );
    doshas
}
