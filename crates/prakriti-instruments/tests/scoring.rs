use std::collections::BTreeMap;

use prakriti_core::models::answer::{Answer, Answers, Selection};
use prakriti_core::models::constitution::Constitution;
use prakriti_core::models::dosha::{Dosha, DoshaCount};
use prakriti_instruments::classify::classify;
use prakriti_instruments::collector::AnswerCollector;
use prakriti_instruments::get_questionnaire;
use prakriti_instruments::scoring::score_answers;

fn multi(subs: &[(&str, Selection)]) -> Answer {
    Answer::Multi(
        subs.iter()
            .map(|(id, selection)| (id.to_string(), selection.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn one(id: &str) -> Selection {
    Selection::One(id.to_string())
}

#[test]
fn empty_answers_score_zero() {
    assert_eq!(score_answers(&Answers::new(), get_questionnaire()), DoshaCount::default());
}

#[test]
fn frame_breadth_scenario_is_vata_pitta() {
    let mut answers = Answers::new();
    answers.insert(
        "body_frame_breadth",
        multi(&[
            ("overall_frame_breadth", one("vata_overall_frame")),
            ("shoulder_breadth", one("pitta_shoulder_width")),
        ]),
    );

    let counts = score_answers(&answers, get_questionnaire());
    assert_eq!(counts, DoshaCount::new(1, 1, 0));

    let result = classify(counts);
    assert_eq!(result.label, "Vata-Pitta");
    assert_eq!(result.primary_dosha, Some(Dosha::Vata));
    assert_eq!(result.secondary_dosha, Some(Dosha::Pitta));
}

#[test]
fn combined_option_counts_for_both_doshas() {
    let mut answers = Answers::new();
    answers.insert(
        "skin_features",
        multi(&[("skin_nature", one("vata_pitta_skin_nature"))]),
    );
    assert_eq!(score_answers(&answers, get_questionnaire()), DoshaCount::new(1, 1, 0));

    let mut answers = Answers::new();
    answers.insert(
        "body_frame_length",
        multi(&[("overall_length", one("kapha_vata_overall_length"))]),
    );
    assert_eq!(score_answers(&answers, get_questionnaire()), DoshaCount::new(1, 0, 1));
}

#[test]
fn multiple_select_counts_each_member() {
    let mut answers = Answers::new();
    answers.insert(
        "food_behavior",
        multi(&[(
            "taste_preference",
            Selection::Many(vec![
                "kapha_taste_sweet".into(),
                "pitta_taste_sour".into(),
                "pitta_taste_salty".into(),
            ]),
        )]),
    );
    assert_eq!(score_answers(&answers, get_questionnaire()), DoshaCount::new(0, 2, 1));
}

#[test]
fn single_question_answer_is_counted() {
    let mut answers = Answers::new();
    answers.insert("body_musculature", Answer::Single("pitta_kapha_musculature".into()));
    answers.insert("strength_assessment", Answer::Single("kapha_strength".into()));
    assert_eq!(score_answers(&answers, get_questionnaire()), DoshaCount::new(0, 1, 2));
}

#[test]
fn ids_outside_the_questionnaire_use_their_markers() {
    let mut answers = Answers::new();
    answers.insert("legacy_question", Answer::Single("vata_pitta_legacy".into()));
    answers.insert("another", Answer::Single("no_marker_here".into()));
    answers.insert("blank", Answer::Single(String::new()));
    assert_eq!(score_answers(&answers, get_questionnaire()), DoshaCount::new(1, 1, 0));
}

#[test]
fn scoring_is_idempotent() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    collector
        .record("hair_features", Some("hair_prone_to"), "vata_hair_graying")
        .unwrap();
    collector
        .record("hair_features", Some("hair_color"), "vata_kapha_hair_color")
        .unwrap();
    collector.record("strength_assessment", None, "pitta_strength").unwrap();

    let first = score_answers(collector.answers(), get_questionnaire());
    let second = score_answers(collector.answers(), get_questionnaire());
    assert_eq!(first, second);
    assert_eq!(first, DoshaCount::new(2, 1, 1));
}

#[test]
fn overwritten_answers_do_not_linger() {
    let mut collector = AnswerCollector::new(get_questionnaire());
    collector.record("strength_assessment", None, "vata_strength").unwrap();
    collector.record("strength_assessment", None, "kapha_strength").unwrap();
    collector
        .record("skin_features", Some("skin_appearance"), "vata_skin_cracked")
        .unwrap();
    collector
        .record("skin_features", Some("skin_appearance"), "vata_skin_cracked")
        .unwrap();

    assert_eq!(
        score_answers(collector.answers(), get_questionnaire()),
        DoshaCount::new(0, 0, 1)
    );
}

#[test]
fn first_option_everywhere_is_vata() {
    let q = get_questionnaire();
    let mut collector = AnswerCollector::new(q);
    for question in q.questions() {
        match &question.kind {
            prakriti_instruments::questionnaire::QuestionKind::Single { options } => {
                collector.record(&question.id, None, &options[0].id).unwrap();
            }
            prakriti_instruments::questionnaire::QuestionKind::Multi { sub_questions } => {
                for sub in sub_questions {
                    collector
                        .record(&question.id, Some(&sub.id), &sub.options[0].id)
                        .unwrap();
                }
            }
        }
    }
    assert!(collector.is_complete());

    let counts = score_answers(collector.answers(), q);
    assert_eq!(counts, DoshaCount::new(36, 6, 11));
    assert_eq!(
        classify(counts).constitution,
        Constitution::Single { dosha: Dosha::Vata }
    );
}
