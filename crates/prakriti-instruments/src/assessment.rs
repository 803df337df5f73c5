use prakriti_core::models::handoff::CompletedAssessment;
use prakriti_core::models::patient::PersonalInfo;

use crate::classify::classify;
use crate::collector::AnswerCollector;
use crate::error::AssessmentError;
use crate::lookup::{characteristics_for, recommendations_for};
use crate::scoring::score_answers;

/// Finish an assessment: check it is complete, then score, classify and
/// attach the traits and recommendations for the result.
///
/// Scoring itself accepts partial answers; this is the point where a result
/// becomes trustworthy, so completeness is enforced here.
pub fn complete_assessment(
    collector: &AnswerCollector<'_>,
    personal_info: PersonalInfo,
    completed_at: jiff::Timestamp,
) -> Result<CompletedAssessment, AssessmentError> {
    personal_info.validate()?;

    if let Some(index) = collector.first_incomplete() {
        let question_id = collector.questionnaire().questions()[index].id.clone();
        return Err(AssessmentError::Incomplete { question_id });
    }

    let counts = score_answers(collector.answers(), collector.questionnaire());
    let result = classify(counts);
    tracing::info!(
        constitution = %result.label,
        vata = counts.vata,
        pitta = counts.pitta,
        kapha = counts.kapha,
        "assessment completed"
    );

    Ok(CompletedAssessment {
        characteristics: characteristics_for(&result.constitution),
        recommendations: recommendations_for(&result.constitution),
        result,
        personal_info,
        completed_at,
    })
}
