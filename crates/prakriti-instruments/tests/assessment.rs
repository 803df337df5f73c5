use prakriti_core::models::dosha::{Dosha, DoshaCount};
use prakriti_core::models::handoff::RecentPatient;
use prakriti_core::models::patient::{Gender, HealthGoal, PersonalInfo};
use prakriti_instruments::assessment::complete_assessment;
use prakriti_instruments::collector::AnswerCollector;
use prakriti_instruments::error::AssessmentError;
use prakriti_instruments::get_questionnaire;
use prakriti_instruments::questionnaire::{AnswerOption, QuestionKind};

fn personal_info() -> PersonalInfo {
    PersonalInfo {
        full_name: "Asha Rao".into(),
        email: "asha@example.com".into(),
        age: Some(34),
        gender: Some(Gender::Female),
        height: Some(162.0),
        weight: Some(58.5),
        health_goals: vec![HealthGoal::ImproveDigestion],
        terms_accepted: true,
    }
}

/// Answer every prompt with the first option attributed to `dosha`, falling
/// back to the first option.
fn answer_all(collector: &mut AnswerCollector<'_>, dosha: Dosha) {
    fn pick(options: &[AnswerOption], dosha: Dosha) -> &str {
        options
            .iter()
            .find(|o| o.id.starts_with(dosha.prefix()))
            .unwrap_or(&options[0])
            .id
            .as_str()
    }

    for question in collector.questionnaire().questions() {
        match &question.kind {
            QuestionKind::Single { options } => {
                collector.record(&question.id, None, pick(options, dosha)).unwrap();
            }
            QuestionKind::Multi { sub_questions } => {
                for sub in sub_questions {
                    collector
                        .record(&question.id, Some(&sub.id), pick(&sub.options, dosha))
                        .unwrap();
                }
            }
        }
    }
}

fn now() -> jiff::Timestamp {
    "2026-03-01T10:00:00Z".parse().unwrap()
}

#[test]
fn completes_a_kapha_assessment() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    answer_all(&mut collector, Dosha::Kapha);

    let assessment = complete_assessment(&collector, personal_info(), now()).unwrap();
    assert_eq!(assessment.result.scores, DoshaCount::new(4, 2, 48));
    assert_eq!(assessment.result.label, "Kapha");
    assert_eq!(assessment.characteristics[0], "Stable");
    assert_eq!(assessment.recommendations.len(), 4);
    assert_eq!(assessment.completed_at, now());
    assert_eq!(assessment.personal_info.full_name, "Asha Rao");
}

#[test]
fn incomplete_assessment_names_first_gap() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    collector
        .record("body_frame_breadth", Some("overall_frame_breadth"), "vata_overall_frame")
        .unwrap();

    let err = complete_assessment(&collector, personal_info(), now()).unwrap_err();
    match err {
        AssessmentError::Incomplete { question_id } => {
            assert_eq!(question_id, "body_frame_breadth");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_personal_info_is_rejected() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    answer_all(&mut collector, Dosha::Vata);

    let mut info = personal_info();
    info.email = "not an email".into();
    info.health_goals.clear();

    let err = complete_assessment(&collector, info, now()).unwrap_err();
    let AssessmentError::InvalidPersonalInfo(errors) = err else {
        panic!("expected personal info errors");
    };
    assert_eq!(errors.get("email"), Some("Invalid email format"));
    assert_eq!(
        errors.get("health_goals"),
        Some("At least one health goal is required")
    );
    assert_eq!(errors.fields.len(), 2);
}

#[test]
fn recent_patient_carries_label_and_scores() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    answer_all(&mut collector, Dosha::Kapha);
    let assessment = complete_assessment(&collector, personal_info(), now()).unwrap();

    let recent = RecentPatient::from_assessment(&assessment, now());
    assert_eq!(recent.name, "Asha Rao");
    assert_eq!(recent.constitution, "Kapha");
    assert_eq!(recent.scores, assessment.result.scores);
    assert_eq!(recent.gender, Some(Gender::Female));
}
