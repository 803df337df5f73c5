use std::sync::LazyLock;

use crate::Section;
use crate::questionnaire::{Question, SubQuestion};

/// Section 3: physiological functions. Food behaviour, body functions, bowel
/// patterns and strength (Bala).
pub struct PhysiologicalFunctions;

impl Section for PhysiologicalFunctions {
    fn id(&self) -> &str {
        "physiological_functions"
    }

    fn name(&self) -> &str {
        "Physiological Functions"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::multi(
                    "food_behavior",
                    "Food Behavior (Bhakti-Abhilasha)",
                    "Bhakti",
                    "Food preferences and digestion",
                    "Utensils",
                    vec![
                        SubQuestion::multiple_select(
                            "taste_preference",
                            "12.1 Taste Preference (Select all that apply):",
                            &[
                                ("kapha_taste_sweet", "Sweet", "Prefers sweet foods"),
                                ("pitta_taste_sour", "Sour", "Prefers sour foods"),
                                ("pitta_taste_salty", "Salty", "Prefers salty foods"),
                                ("vata_taste_bitter", "Bitter", "Prefers bitter foods"),
                                ("vata_taste_pungent", "Pungent", "Prefers spicy foods"),
                                ("vata_taste_astringent", "Astringent", "Prefers astringent foods"),
                            ],
                        ),
                        SubQuestion::multiple_select(
                            "food_temperature",
                            "12.2 Preferred Food/Beverage Temperature:",
                            &[
                                ("pitta_food_temperature", "Cold", "Prefers cold food/drinks"),
                                ("vata_food_temperature", "Warm", "Prefers warm food/drinks"),
                                ("kapha_food_temperature", "Any", "No temperature preference"),
                                (
                                    "vata_pitta_food_temperature",
                                    "None",
                                    "Avoids extreme temperatures",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "appetite_frequency",
                            "12.3 Appetite Frequency:",
                            &[
                                (
                                    "pitta_appetite_frequency",
                                    "Regular",
                                    "Hunger at regular intervals",
                                ),
                                ("vata_appetite_frequency", "Irregular", "Unpredictable hunger"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "appetite_amount",
                            "12.4 Appetite Amount:",
                            &[
                                ("vata_appetite_amount", "Low", "Eats small portions"),
                                ("pitta_appetite_amount", "Medium", "Moderate portion size"),
                                ("kapha_appetite_amount", "High", "Eats large portions"),
                                (
                                    "vata_appetite_amount_variable",
                                    "Variable",
                                    "Inconsistent amount",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "digestive_power",
                            "12.5 Digestive Amount:",
                            &[
                                (
                                    "vata_digestive_power_low",
                                    "Low",
                                    "Mandagni - digests with difficulty",
                                ),
                                (
                                    "pitta_digestive_power_medium",
                                    "Medium",
                                    "Sama Agni - normal digestion",
                                ),
                                (
                                    "pitta_digestive_power_high",
                                    "High",
                                    "Teekshnagni - strong digestion",
                                ),
                                (
                                    "vata_digestive_power_variable",
                                    "Variable",
                                    "Vishama Agni - unpredictable",
                                ),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "physiological_functions",
                    "Other Physiological Functions",
                    "Kriya",
                    "Body functions assessment",
                    "Activity",
                    vec![
                        SubQuestion::single_select(
                            "body_temperature",
                            "13.1 Body Temperature:",
                            &[
                                ("vata_body_temperature", "Low", "Often feels colder than others"),
                                (
                                    "pitta_body_temperature",
                                    "High",
                                    "Often feels warmer than others",
                                ),
                                ("kapha_body_temperature", "Medium", "Average body temperature"),
                                (
                                    "vata_body_temperature_variable",
                                    "Variable",
                                    "Fluctuating temperature",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "perspiration",
                            "13.2 Perspiration:",
                            &[
                                ("pitta_perspiration", "High", "Sweats excessively"),
                                ("vata_perspiration", "Low", "Rarely sweats"),
                                ("kapha_perspiration", "Medium", "Moderate sweating"),
                                ("vata_perspiration_variable", "Variable", "Inconsistent sweating"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "body_odour",
                            "13.3 Body Odour:",
                            &[
                                ("pitta_body_odour", "Strong", "Pronounced body odor"),
                                ("kapha_body_odour", "Very Less", "Minimal body odor"),
                                ("kapha_body_odour_mild", "Mild", "Slight, pleasant odor"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "sleep_amount",
                            "13.4 Sleep Amount:",
                            &[
                                ("vata_sleep_amount", "Low", "Less sleep needed"),
                                ("pitta_sleep_amount", "Medium", "Average sleep needs"),
                                ("kapha_sleep_amount", "High", "More sleep needed"),
                                (
                                    "vata_sleep_amount_variable",
                                    "Variable",
                                    "Inconsistent sleep needs",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "sleep_quality",
                            "13.5 Sleep Quality:",
                            &[
                                ("kapha_sleep_quality", "Deep", "Deep, sound sleep"),
                                ("pitta_sleep_quality", "Sound", "Good quality sleep"),
                                ("vata_sleep_quality", "Shallow", "Light, easily disturbed sleep"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "weight_changes",
                            "13.6 Body Weight Changes:",
                            &[
                                (
                                    "pitta_weight_changes",
                                    "Gain and Lose easily",
                                    "Weight fluctuates easily",
                                ),
                                (
                                    "vata_weight_changes",
                                    "Difficulty in gaining",
                                    "Hard to gain weight",
                                ),
                                (
                                    "kapha_weight_changes",
                                    "Gain easily and Lose with difficulty",
                                    "Easy to gain, hard to lose",
                                ),
                                (
                                    "kapha_weight_changes_stable",
                                    "Stable",
                                    "Weight remains constant",
                                ),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "bowel_patterns",
                    "Bowel Patterns (Koshtha-Mala Pravritti)",
                    "Koshtha",
                    "Intestinal habits",
                    "Activity",
                    vec![
                        SubQuestion::single_select(
                            "bowel_habit",
                            "14.1 Bowel Habit (Frequency):",
                            &[
                                ("pitta_kapha_bowel_habit", "Regular", "Daily at fixed timings"),
                                ("vata_bowel_habit", "Irregular", "Not daily, inconsistent"),
                                ("vata_bowel_habit_variable", "Variable", "Changes frequently"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "bowel_tendency",
                            "14.2 Bowel Tendency:",
                            &[
                                (
                                    "vata_bowel_tendency",
                                    "Constipation",
                                    "Tendency toward constipation",
                                ),
                                (
                                    "pitta_bowel_tendency",
                                    "Loose motion",
                                    "Tendency toward diarrhea",
                                ),
                                ("kapha_bowel_tendency", "None", "Normal bowel movement"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "stool_consistency",
                            "14.3 Stool Consistency:",
                            &[
                                ("vata_stool_consistency", "Hard", "Hard, lumpy stools"),
                                (
                                    "pitta_stool_consistency",
                                    "Loose/Soft/Semisolid",
                                    "Soft, watery stools",
                                ),
                                (
                                    "kapha_stool_consistency",
                                    "Formed (Medium)",
                                    "Well-formed, sausage-like",
                                ),
                            ],
                        ),
                    ],
                ),
                Question::single(
                    "strength_assessment",
                    "Strength Assessment (Bala)",
                    "Bala",
                    "Physical and mental strength",
                    "Activity",
                    &[
                        ("vata_strength", "Low", "Less physical and mental endurance"),
                        ("pitta_strength", "Medium", "Moderate strength and endurance"),
                        ("kapha_strength", "High", "Strong physical and mental endurance"),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
