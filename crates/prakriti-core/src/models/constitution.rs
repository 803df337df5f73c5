use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::dosha::{Dosha, DoshaCount};

pub const BALANCED_LABEL: &str = "Balanced (Sama)";
/// What the result shows as the primary dosha when all three are tied.
pub const BALANCED_PRIMARY: &str = "Balanced (sama)";

/// A Prakriti classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum Constitution {
    /// One dosha strictly dominates.
    Single { dosha: Dosha },
    /// Two doshas share the highest count. `primary` precedes `secondary`
    /// in Vata, Pitta, Kapha order.
    Dual { primary: Dosha, secondary: Dosha },
    /// All three counts are equal (Sama).
    Balanced,
}

impl Constitution {
    pub fn primary(&self) -> Option<Dosha> {
        match *self {
            Constitution::Single { dosha } => Some(dosha),
            Constitution::Dual { primary, .. } => Some(primary),
            Constitution::Balanced => None,
        }
    }

    pub fn secondary(&self) -> Option<Dosha> {
        match *self {
            Constitution::Dual { secondary, .. } => Some(secondary),
            _ => None,
        }
    }

    /// The leading part of the label: the primary dosha's name, or
    /// [`BALANCED_PRIMARY`] for a three-way tie.
    pub fn primary_name(&self) -> String {
        match self.primary() {
            Some(dosha) => dosha.name().to_string(),
            None => BALANCED_PRIMARY.to_string(),
        }
    }

    /// Human-readable label: "Vata", "Vata-Pitta", "Balanced (Sama)".
    pub fn label(&self) -> String {
        match *self {
            Constitution::Single { dosha } => dosha.name().to_string(),
            Constitution::Dual { primary, secondary } => {
                format!("{}-{}", primary.name(), secondary.name())
            }
            Constitution::Balanced => BALANCED_LABEL.to_string(),
        }
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// The outcome of classifying a set of dosha counts. Derived, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConstitutionResult {
    pub constitution: Constitution,
    pub label: String,
    /// Display name of the primary dosha; "Balanced (sama)" on a three-way tie.
    pub primary: String,
    /// Absent when the constitution is balanced.
    pub primary_dosha: Option<Dosha>,
    pub secondary_dosha: Option<Dosha>,
    pub scores: DoshaCount,
    pub description: String,
}

impl ConstitutionResult {
    pub fn new(constitution: Constitution, scores: DoshaCount) -> Self {
        let label = constitution.label();
        Self {
            constitution,
            description: format!("Based on your responses, your primary constitution is {label}."),
            label,
            primary: constitution.primary_name(),
            primary_dosha: constitution.primary(),
            secondary_dosha: constitution.secondary(),
            scores,
        }
    }
}
