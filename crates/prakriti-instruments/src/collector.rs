use std::collections::BTreeMap;

use prakriti_core::models::answer::{Answer, Answers, Selection};

use crate::error::ValidationError;
use crate::questionnaire::{Question, QuestionKind, Questionnaire, SelectionMode};

/// Accumulates answers for one assessment, checking every update against
/// the questionnaire.
#[derive(Debug, Clone)]
pub struct AnswerCollector<'q> {
    questionnaire: &'q Questionnaire,
    answers: Answers,
}

impl<'q> AnswerCollector<'q> {
    pub fn new(questionnaire: &'q Questionnaire) -> Self {
        Self {
            questionnaire,
            answers: Answers::new(),
        }
    }

    /// Continue from previously saved answers. Fails on the first answer that
    /// does not fit the questionnaire.
    pub fn resume(questionnaire: &'q Questionnaire, answers: Answers) -> Result<Self, ValidationError> {
        if let Some(error) = questionnaire.validate_answers(&answers).into_iter().next() {
            return Err(error);
        }
        Ok(Self {
            questionnaire,
            answers,
        })
    }

    pub fn questionnaire(&self) -> &'q Questionnaire {
        self.questionnaire
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }

    /// Record a selection.
    ///
    /// `sub_question_id` must be given for questions with sub-questions and
    /// omitted otherwise. On a `multiple_select` sub-question the option is
    /// toggled; everywhere else it replaces the previous selection.
    pub fn record(
        &mut self,
        question_id: &str,
        sub_question_id: Option<&str>,
        option_id: &str,
    ) -> Result<&Answers, ValidationError> {
        let questionnaire = self.questionnaire;
        let question = questionnaire.question(question_id).ok_or_else(|| {
            ValidationError::UnknownQuestion {
                question_id: question_id.to_string(),
            }
        })?;

        match (&question.kind, sub_question_id) {
            (QuestionKind::Single { options }, None) => {
                if !options.iter().any(|o| o.id == option_id) {
                    return Err(unknown_option(question_id, option_id));
                }
                self.answers
                    .insert(question_id, Answer::Single(option_id.to_string()));
            }
            (QuestionKind::Single { .. }, Some(sub_question_id)) => {
                return Err(ValidationError::UnexpectedSubQuestion {
                    question_id: question_id.to_string(),
                    sub_question_id: sub_question_id.to_string(),
                });
            }
            (QuestionKind::Multi { .. }, None) => {
                return Err(ValidationError::MissingSubQuestion {
                    question_id: question_id.to_string(),
                });
            }
            (QuestionKind::Multi { .. }, Some(sub_question_id)) => {
                let sub = question.sub_question(sub_question_id).ok_or_else(|| {
                    ValidationError::UnknownSubQuestion {
                        question_id: question_id.to_string(),
                        sub_question_id: sub_question_id.to_string(),
                    }
                })?;
                if sub.option(option_id).is_none() {
                    return Err(unknown_option(question_id, option_id));
                }

                let entry = self
                    .answers
                    .0
                    .entry(question_id.to_string())
                    .or_insert_with(|| Answer::Multi(BTreeMap::new()));
                if let Answer::Single(_) = entry {
                    *entry = Answer::Multi(BTreeMap::new());
                }
                if let Answer::Multi(subs) = entry {
                    match sub.mode {
                        SelectionMode::SingleSelect => {
                            subs.insert(
                                sub_question_id.to_string(),
                                Selection::One(option_id.to_string()),
                            );
                        }
                        SelectionMode::MultipleSelect => {
                            subs.entry(sub_question_id.to_string())
                                .or_insert_with(|| Selection::Many(Vec::new()))
                                .toggle(option_id);
                        }
                    }
                }
            }
        }

        tracing::trace!(question_id, sub_question_id, option_id, "answer recorded");
        Ok(&self.answers)
    }

    pub fn is_question_complete(&self, question: &Question) -> bool {
        is_question_complete(question, &self.answers)
    }

    /// Index of the first question still missing an answer.
    pub fn first_incomplete(&self) -> Option<usize> {
        self.questionnaire
            .questions()
            .iter()
            .position(|q| !is_question_complete(q, &self.answers))
    }

    pub fn is_complete(&self) -> bool {
        self.first_incomplete().is_none()
    }

    pub fn completed_count(&self) -> usize {
        self.questionnaire
            .questions()
            .iter()
            .filter(|q| is_question_complete(q, &self.answers))
            .count()
    }

    /// Completed questions as a rounded percentage of the questionnaire.
    pub fn progress_percent(&self) -> u8 {
        let total = self.questionnaire.len();
        if total == 0 {
            return 0;
        }
        let percent = (self.completed_count() * 100 + total / 2) / total;
        percent.min(100) as u8
    }
}

/// Functional form of [`AnswerCollector::record`]: returns the updated map
/// and leaves `answers` untouched.
pub fn record_answer(
    questionnaire: &Questionnaire,
    answers: &Answers,
    question_id: &str,
    sub_question_id: Option<&str>,
    option_id: &str,
) -> Result<Answers, ValidationError> {
    let mut collector = AnswerCollector {
        questionnaire,
        answers: answers.clone(),
    };
    collector.record(question_id, sub_question_id, option_id)?;
    Ok(collector.into_answers())
}

/// Whether `question` has a usable answer.
///
/// Single questions need any recorded option. For sub-questions, a
/// `single_select` needs its one option and a `multiple_select` needs at
/// least one selected option.
pub fn is_question_complete(question: &Question, answers: &Answers) -> bool {
    match &question.kind {
        QuestionKind::Single { .. } => matches!(answers.get(&question.id), Some(Answer::Single(_))),
        QuestionKind::Multi { sub_questions } => {
            let answer = answers.get(&question.id);
            sub_questions.iter().all(|sub| {
                match (sub.mode, answer.and_then(|a| a.sub_answer(&sub.id))) {
                    (SelectionMode::SingleSelect, Some(Selection::One(_))) => true,
                    (SelectionMode::MultipleSelect, Some(Selection::Many(ids))) => !ids.is_empty(),
                    _ => false,
                }
            })
        }
    }
}

fn unknown_option(question_id: &str, option_id: &str) -> ValidationError {
    ValidationError::UnknownOption {
        question_id: question_id.to_string(),
        option_id: option_id.to_string(),
    }
}
