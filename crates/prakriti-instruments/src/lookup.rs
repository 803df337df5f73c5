//! Descriptive traits and dietary recommendations per dosha.
//!
//! Presentation content: unknown names yield nothing rather than an error.

use prakriti_core::models::constitution::Constitution;
use prakriti_core::models::dosha::Dosha;

pub fn dosha_characteristics(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => &[
            "Creative",
            "Quick thinking",
            "Flexible",
            "Energetic when balanced",
            "Light sleep",
        ],
        Dosha::Pitta => &[
            "Intense",
            "Focused",
            "Ambitious",
            "Strong digestion",
            "Medium sleep",
        ],
        Dosha::Kapha => &["Stable", "Calm", "Loving", "Strong build", "Deep sleep"],
    }
}

pub fn dosha_recommendations(dosha: Dosha) -> &'static [&'static str] {
    match dosha {
        Dosha::Vata => &[
            "Warm, cooked foods",
            "Regular routine",
            "Gentle exercise",
            "Adequate rest",
        ],
        Dosha::Pitta => &[
            "Cooling foods",
            "Avoid spicy foods",
            "Moderate exercise",
            "Regular meals",
        ],
        Dosha::Kapha => &[
            "Light, warm foods",
            "Regular exercise",
            "Avoid heavy foods",
            "Active lifestyle",
        ],
    }
}

/// Traits for a primary and optional secondary dosha name, primary first.
/// Names are matched case-insensitively.
pub fn characteristics(primary: &str, secondary: Option<&str>) -> Vec<String> {
    concat_tables(primary, secondary, dosha_characteristics)
}

/// Recommendations for a primary and optional secondary dosha name, primary
/// first.
pub fn recommendations(primary: &str, secondary: Option<&str>) -> Vec<String> {
    concat_tables(primary, secondary, dosha_recommendations)
}

/// A balanced constitution has no dominant dosha and therefore no entries.
pub fn characteristics_for(constitution: &Constitution) -> Vec<String> {
    concat_doshas(constitution.primary(), constitution.secondary(), dosha_characteristics)
}

pub fn recommendations_for(constitution: &Constitution) -> Vec<String> {
    concat_doshas(constitution.primary(), constitution.secondary(), dosha_recommendations)
}

fn concat_tables(
    primary: &str,
    secondary: Option<&str>,
    table: fn(Dosha) -> &'static [&'static str],
) -> Vec<String> {
    concat_doshas(Dosha::from_key(primary), secondary.and_then(Dosha::from_key), table)
}

fn concat_doshas(
    primary: Option<Dosha>,
    secondary: Option<Dosha>,
    table: fn(Dosha) -> &'static [&'static str],
) -> Vec<String> {
    primary
        .into_iter()
        .chain(secondary)
        .flat_map(table)
        .map(|entry| entry.to_string())
        .collect()
}
