use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The value recorded against one sub-question.
///
/// Serialized untagged so the cached form stays a bare string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Selection {
    /// A `single_select` sub-question: exactly one option id.
    One(String),
    /// A `multiple_select` sub-question: option ids in the order chosen.
    Many(Vec<String>),
}

impl Selection {
    /// Option ids in this selection.
    pub fn option_ids(&self) -> impl Iterator<Item = &str> {
        let ids: &[String] = match self {
            Selection::One(id) => std::slice::from_ref(id),
            Selection::Many(ids) => ids,
        };
        ids.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::One(_) => false,
            Selection::Many(ids) => ids.is_empty(),
        }
    }

    /// Add `option_id` if absent, remove it if present.
    ///
    /// A `One` selection is promoted to `Many` first.
    pub fn toggle(&mut self, option_id: &str) {
        if let Selection::One(existing) = self {
            *self = Selection::Many(vec![std::mem::take(existing)]);
        }
        if let Selection::Many(ids) = self {
            match ids.iter().position(|id| id == option_id) {
                Some(index) => {
                    ids.remove(index);
                }
                None => ids.push(option_id.to_string()),
            }
        }
    }
}

/// The value recorded against one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Answer {
    /// Answer to a `single` question.
    Single(String),
    /// Answers to the sub-questions of a `multi` question, by sub-question id.
    Multi(BTreeMap<String, Selection>),
}

impl Answer {
    /// Every option id selected in this answer.
    pub fn option_ids(&self) -> Vec<&str> {
        match self {
            Answer::Single(id) => vec![id.as_str()],
            Answer::Multi(subs) => subs.values().flat_map(Selection::option_ids).collect(),
        }
    }

    pub fn sub_answer(&self, sub_question_id: &str) -> Option<&Selection> {
        match self {
            Answer::Single(_) => None,
            Answer::Multi(subs) => subs.get(sub_question_id),
        }
    }
}

/// All answers of one assessment, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answers(pub BTreeMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.0.get(question_id)
    }

    pub fn get_mut(&mut self, question_id: &str) -> Option<&mut Answer> {
        self.0.get_mut(question_id)
    }

    /// Set the answer for a question, returning the one it replaced.
    pub fn insert(&mut self, question_id: impl Into<String>, answer: Answer) -> Option<Answer> {
        self.0.insert(question_id.into(), answer)
    }

    pub fn remove(&mut self, question_id: &str) -> Option<Answer> {
        self.0.remove(question_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every selected option id across all questions.
    pub fn selected_option_ids(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().flat_map(|(question_id, answer)| {
            answer
                .option_ids()
                .into_iter()
                .map(move |option_id| (question_id.as_str(), option_id))
        })
    }
}

impl FromIterator<(String, Answer)> for Answers {
    fn from_iter<I: IntoIterator<Item = (String, Answer)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
