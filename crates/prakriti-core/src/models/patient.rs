use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum HealthGoal {
    WeightLoss,
    WeightGain,
    MaintainWeight,
    ImproveDigestion,
    IncreaseEnergy,
    BetterSleep,
    StressManagement,
    OverallWellness,
}

/// Who is filling in the assessment. Practitioners assess patients on their
/// behalf and go on to build a diet plan for them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    #[default]
    Patient,
    Practitioner,
}

/// Personal details captured before the questionnaire starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    #[serde(default)]
    pub health_goals: Vec<HealthGoal>,
    #[serde(default)]
    pub terms_accepted: bool,
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalInfoErrors {
    pub fields: BTreeMap<String, String>,
}

impl PersonalInfoErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.fields.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

impl fmt::Display for PersonalInfoErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        write!(f, "invalid personal info ({})", joined.join("; "))
    }
}

impl std::error::Error for PersonalInfoErrors {}

impl PersonalInfo {
    /// Check every required field, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), PersonalInfoErrors> {
        let mut errors = PersonalInfoErrors::default();

        if self.full_name.trim().is_empty() {
            errors.push("full_name", "Full name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !is_plausible_email(email) {
            errors.push("email", "Invalid email format");
        }

        match self.age {
            None => errors.push("age", "Age is required"),
            Some(age) if !(MIN_AGE..=MAX_AGE).contains(&age) => {
                errors.push("age", "Age must be between 18 and 100")
            }
            Some(_) => {}
        }

        if self.gender.is_none() {
            errors.push("gender", "Gender is required");
        }
        if self.health_goals.is_empty() {
            errors.push("health_goals", "At least one health goal is required");
        }
        if !self.terms_accepted {
            errors.push("terms_accepted", "You must accept the terms to continue");
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// `local@domain.tld` with no whitespace anywhere and non-empty parts.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
