use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use prakriti_core::models::answer::{Answer, Answers, Selection};
use prakriti_core::models::dosha::DoshaSet;

use crate::error::ValidationError;

/// `(id, text, description)` of an option in the static tables.
pub type OptionSpec<'a> = (&'a str, &'a str, &'a str);

/// One selectable answer. `doshas` is derived from the id once, when the
/// questionnaire is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub description: String,
    pub doshas: DoshaSet,
}

impl AnswerOption {
    pub fn new(id: &str, text: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            description: description.to_string(),
            doshas: DoshaSet::from_option_id(id),
        }
    }

    fn from_specs(specs: &[OptionSpec<'_>]) -> Vec<Self> {
        specs
            .iter()
            .map(|(id, text, description)| AnswerOption::new(id, text, description))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionMode {
    SingleSelect,
    MultipleSelect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubQuestion {
    pub id: String,
    pub question: String,
    pub mode: SelectionMode,
    pub options: Vec<AnswerOption>,
}

impl SubQuestion {
    pub fn single_select(id: &str, question: &str, options: &[OptionSpec<'_>]) -> Self {
        Self::with_mode(id, question, SelectionMode::SingleSelect, options)
    }

    pub fn multiple_select(id: &str, question: &str, options: &[OptionSpec<'_>]) -> Self {
        Self::with_mode(id, question, SelectionMode::MultipleSelect, options)
    }

    fn with_mode(id: &str, question: &str, mode: SelectionMode, options: &[OptionSpec<'_>]) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            mode,
            options: AnswerOption::from_specs(options),
        }
    }

    pub fn option(&self, option_id: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Answered with a single option id.
    Single { options: Vec<AnswerOption> },
    /// A group of sub-questions, each answered separately.
    Multi { sub_questions: Vec<SubQuestion> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub sanskrit_term: String,
    pub sanskrit_meaning: String,
    pub icon: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn single(
        id: &str,
        title: &str,
        sanskrit_term: &str,
        sanskrit_meaning: &str,
        icon: &str,
        options: &[OptionSpec<'_>],
    ) -> Self {
        Self::with_kind(
            id,
            title,
            sanskrit_term,
            sanskrit_meaning,
            icon,
            QuestionKind::Single {
                options: AnswerOption::from_specs(options),
            },
        )
    }

    pub fn multi(
        id: &str,
        title: &str,
        sanskrit_term: &str,
        sanskrit_meaning: &str,
        icon: &str,
        sub_questions: Vec<SubQuestion>,
    ) -> Self {
        Self::with_kind(
            id,
            title,
            sanskrit_term,
            sanskrit_meaning,
            icon,
            QuestionKind::Multi { sub_questions },
        )
    }

    fn with_kind(
        id: &str,
        title: &str,
        sanskrit_term: &str,
        sanskrit_meaning: &str,
        icon: &str,
        kind: QuestionKind,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            sanskrit_term: sanskrit_term.to_string(),
            sanskrit_meaning: sanskrit_meaning.to_string(),
            icon: icon.to_string(),
            kind,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self.kind, QuestionKind::Multi { .. })
    }

    pub fn sub_question(&self, sub_question_id: &str) -> Option<&SubQuestion> {
        match &self.kind {
            QuestionKind::Single { .. } => None,
            QuestionKind::Multi { sub_questions } => {
                sub_questions.iter().find(|s| s.id == sub_question_id)
            }
        }
    }

    /// Every option of this question, across sub-questions.
    pub fn options(&self) -> Vec<&AnswerOption> {
        match &self.kind {
            QuestionKind::Single { options } => options.iter().collect(),
            QuestionKind::Multi { sub_questions } => {
                sub_questions.iter().flat_map(|s| &s.options).collect()
            }
        }
    }
}

/// A structural problem in a questionnaire definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelDefect {
    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("duplicate sub-question id '{sub_question_id}' in '{question_id}'")]
    DuplicateSubQuestion {
        question_id: String,
        sub_question_id: String,
    },

    #[error("duplicate option id '{0}'")]
    DuplicateOption(String),

    #[error("option '{0}' is not attributed to any dosha")]
    UnattributedOption(String),

    #[error("question '{0}' offers nothing to answer")]
    EmptyQuestion(String),
}

/// The ordered set of questions plus an index from option id to its dosha
/// attribution.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<Question>,
    positions: HashMap<String, usize>,
    /// Option id to the index of the question offering it.
    option_owners: HashMap<String, usize>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        let mut positions = HashMap::new();
        let mut option_owners = HashMap::new();
        for (index, question) in questions.iter().enumerate() {
            positions.entry(question.id.clone()).or_insert(index);
            for option in question.options() {
                option_owners.entry(option.id.clone()).or_insert(index);
            }
        }
        Self {
            questions,
            positions,
            option_owners,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.position(id).map(|index| &self.questions[index])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// A known option together with the question offering it.
    pub fn option(&self, option_id: &str) -> Option<(&Question, &AnswerOption)> {
        let question = &self.questions[*self.option_owners.get(option_id)?];
        let option = question.options().into_iter().find(|o| o.id == option_id)?;
        Some((question, option))
    }

    /// Dosha attribution of a known option id.
    pub fn doshas_for(&self, option_id: &str) -> Option<DoshaSet> {
        self.option(option_id).map(|(_, option)| option.doshas)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Structural checks on the definition itself. An empty result means the
    /// scorer can rely on every option id.
    pub fn check_model(&self) -> Vec<ModelDefect> {
        let mut defects = Vec::new();
        let mut question_ids = HashSet::new();
        let mut option_ids = HashSet::new();

        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                defects.push(ModelDefect::DuplicateQuestion(question.id.clone()));
            }

            match &question.kind {
                QuestionKind::Single { options } if options.is_empty() => {
                    defects.push(ModelDefect::EmptyQuestion(question.id.clone()));
                }
                QuestionKind::Multi { sub_questions } => {
                    if sub_questions.is_empty() {
                        defects.push(ModelDefect::EmptyQuestion(question.id.clone()));
                    }
                    let mut sub_ids = HashSet::new();
                    for sub in sub_questions {
                        if !sub_ids.insert(sub.id.as_str()) {
                            defects.push(ModelDefect::DuplicateSubQuestion {
                                question_id: question.id.clone(),
                                sub_question_id: sub.id.clone(),
                            });
                        }
                        if sub.options.is_empty() {
                            defects.push(ModelDefect::EmptyQuestion(format!(
                                "{}.{}",
                                question.id, sub.id
                            )));
                        }
                    }
                }
                QuestionKind::Single { .. } => {}
            }

            for option in question.options() {
                if !option_ids.insert(option.id.as_str()) {
                    defects.push(ModelDefect::DuplicateOption(option.id.clone()));
                }
                if option.doshas.is_empty() {
                    defects.push(ModelDefect::UnattributedOption(option.id.clone()));
                }
            }
        }
        defects
    }

    /// Check that every answer refers to a known question and sub-question
    /// and has the shape its question declares.
    ///
    /// Option ids are not checked here: unknown ones are ignored by scoring.
    pub fn validate_answers(&self, answers: &Answers) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (question_id, answer) in answers.iter() {
            let Some(question) = self.question(question_id) else {
                errors.push(ValidationError::UnknownQuestion {
                    question_id: question_id.clone(),
                });
                continue;
            };

            match (&question.kind, answer) {
                (QuestionKind::Single { .. }, Answer::Single(_)) => {}
                (QuestionKind::Single { .. }, Answer::Multi(_)) => {
                    errors.push(ValidationError::ShapeMismatch {
                        question_id: question_id.clone(),
                        sub_question_id: None,
                        expected: "a single option id".to_string(),
                    });
                }
                (QuestionKind::Multi { .. }, Answer::Single(_)) => {
                    errors.push(ValidationError::ShapeMismatch {
                        question_id: question_id.clone(),
                        sub_question_id: None,
                        expected: "a map of sub-question answers".to_string(),
                    });
                }
                (QuestionKind::Multi { .. }, Answer::Multi(subs)) => {
                    for (sub_question_id, selection) in subs {
                        let Some(sub) = question.sub_question(sub_question_id) else {
                            errors.push(ValidationError::UnknownSubQuestion {
                                question_id: question_id.clone(),
                                sub_question_id: sub_question_id.clone(),
                            });
                            continue;
                        };
                        let expected = match (sub.mode, selection) {
                            (SelectionMode::SingleSelect, Selection::Many(_)) => {
                                Some("a single option id")
                            }
                            (SelectionMode::MultipleSelect, Selection::One(_)) => {
                                Some("a list of option ids")
                            }
                            _ => None,
                        };
                        if let Some(expected) = expected {
                            errors.push(ValidationError::ShapeMismatch {
                                question_id: question_id.clone(),
                                sub_question_id: Some(sub_question_id.clone()),
                                expected: expected.to_string(),
                            });
                        }
                    }
                }
            }
        }
        errors
    }
}
