use std::sync::LazyLock;

use crate::Section;
use crate::questionnaire::{Question, SubQuestion};

/// Section 2: physiological features. Skin (Tvak), hair (Kesha), nails (Nakha),
/// teeth and palate, lips, palms and soles.
pub struct PhysiologicalFeatures;

impl Section for PhysiologicalFeatures {
    fn id(&self) -> &str {
        "physiological_features"
    }

    fn name(&self) -> &str {
        "Physiological Features"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::multi(
                    "skin_features",
                    "Skin Features (Varna)",
                    "Tvak",
                    "Skin characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::multiple_select(
                            "skin_appearance",
                            "5.1 Skin Appearance (Select all that apply):",
                            &[
                                ("vata_skin_cracked", "Cracked skin", "Visible breaks or fissures"),
                                ("pitta_skin_lustrous", "Lustrous skin", "Healthy glow or sheen"),
                                ("pitta_skin_moles", "Moles", "Melanin pigmented spots"),
                                ("vata_skin_wrinkled", "Wrinkled skin", "Fine lines or creases"),
                                (
                                    "vata_pitta_prominent_veins",
                                    "Prominently visible veins and tendons",
                                    "Noticeably visible veins",
                                ),
                                ("kapha_skin_clear", "Clear skin", "Free of blemishes"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "skin_nature",
                            "5.2 Skin Nature:",
                            &[
                                ("vata_skin_nature", "Dry", "Often feels dry, tight, irritable"),
                                ("pitta_skin_nature", "Oily", "Frequently feels oily or sticky"),
                                (
                                    "vata_pitta_skin_nature",
                                    "Seasonal/Variable",
                                    "Changes with seasons",
                                ),
                                ("kapha_skin_nature", "Normal", "Balanced, not too dry or oily"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "skin_texture",
                            "5.3 Skin Texture:",
                            &[
                                ("vata_skin_texture", "Rough", "Uneven, not smooth to touch"),
                                ("pitta_kapha_skin_texture", "Smooth", "Even, lustrous, glowing"),
                                ("vata_kapha_skin_texture", "Coarse", "High level of roughness"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "skin_color",
                            "5.4 Skin Color:",
                            &[
                                ("vata_skin_color", "Dark/Dusky", "Dark complexion"),
                                (
                                    "pitta_skin_color",
                                    "Fair Reddish/Pale Yellow",
                                    "Fair with reddish/yellow tinge",
                                ),
                                (
                                    "kapha_skin_color",
                                    "Fair Pink/Wheatish",
                                    "Fresh, pink or wheatish complexion",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "skin_type",
                            "5.5 Skin Type:",
                            &[
                                ("vata_skin_type", "Thin", "Delicate, thin skin"),
                                ("kapha_skin_type", "Thick", "Thick, resilient skin"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "hair_features",
                    "Hair Features (Kesha)",
                    "Kesha",
                    "Hair characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "hair_nature",
                            "6.1 Hair Nature:",
                            &[
                                ("vata_hair_nature", "Dry", "Dry, brittle hair"),
                                ("pitta_hair_nature", "Oily", "Greasy, oily hair"),
                                (
                                    "vata_pitta_hair_nature",
                                    "Seasonal/Variable",
                                    "Changes with seasons",
                                ),
                                ("kapha_hair_nature", "Normal", "Balanced hair"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "hair_color",
                            "6.2 Hair Color:",
                            &[
                                ("vata_kapha_hair_color", "Black/Dark Brown", "Dark hair color"),
                                ("pitta_hair_color", "Dusky/Light Brown", "Lighter hair shades"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "hair_type",
                            "6.3 Hair Type:",
                            &[
                                ("vata_hair_type", "Thin", "Fine, thin hair strands"),
                                ("kapha_hair_type", "Thick", "Thick, coarse hair strands"),
                            ],
                        ),
                        SubQuestion::multiple_select(
                            "hair_prone_to",
                            "6.4 Hair Prone to:",
                            &[
                                ("vata_hair_graying", "Graying", "Early or premature graying"),
                                ("vata_hair_falling", "Falling", "Hair loss tendency"),
                                ("vata_hair_breaking", "Breaking", "Brittle, breakable hair"),
                                ("vata_hair_split_ends", "Split at ends", "Split ends tendency"),
                                ("kapha_hair_none", "None", "Healthy, strong hair"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "nail_features",
                    "Nail Features (Nakha)",
                    "Nakha",
                    "Nail characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "nail_color",
                            "7.1 Nail Color:",
                            &[
                                ("vata_nail_color", "Dark", "Dark colored nails"),
                                ("pitta_nail_color", "Reddish", "Reddish tinge nails"),
                                ("pitta_nail_color_yellow", "Pale Yellow", "Yellowish nails"),
                                ("kapha_nail_color", "Pink", "Pink, healthy nails"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "nail_texture",
                            "7.2 Nail Texture:",
                            &[
                                ("kapha_nail_texture", "Smooth", "Smooth, even nails"),
                                ("vata_nail_texture", "Rough", "Rough, uneven nails"),
                                ("kapha_nail_texture_soft", "Soft", "Soft, bendable nails"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "nail_nature",
                            "7.3 Nail Nature:",
                            &[
                                ("kapha_nail_nature", "Firm", "Strong, firm nails"),
                                ("vata_nail_nature", "Brittle/Cracked", "Easily breakable nails"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "teeth_palate_features",
                    "Teeth & Palate Features (Danta-Talu)",
                    "Danta-Talu",
                    "Teeth and palate characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "teeth_color",
                            "8.1 Teeth Color:",
                            &[
                                ("vata_teeth_color", "Dull/Blackish", "Dark, dull teeth"),
                                ("kapha_teeth_color", "Milky White", "White, lustrous teeth"),
                                ("pitta_teeth_color", "Yellowish", "Yellow tinge teeth"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "teeth_shape",
                            "8.2 Teeth Shape:",
                            &[
                                ("kapha_teeth_shape", "Even", "Regular, even teeth"),
                                ("vata_teeth_shape", "Uneven", "Irregular teeth alignment"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "teeth_size",
                            "8.3 Teeth Size:",
                            &[
                                ("kapha_teeth_size", "Large", "Large, well-developed teeth"),
                                ("pitta_teeth_size", "Medium", "Average tooth size"),
                                ("vata_teeth_size_small", "Too Small", "Very small teeth"),
                                (
                                    "vata_teeth_size_large",
                                    "Too Large",
                                    "Disproportionately large teeth",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "palate_color",
                            "8.4 Palate Color:",
                            &[
                                ("vata_palate_color", "Dark", "Dark colored palate"),
                                ("pitta_palate_color", "Reddish", "Reddish palate"),
                                ("pitta_palate_color_yellow", "Pale Yellow", "Yellowish palate"),
                                ("kapha_palate_color", "Pink", "Pink, healthy palate"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "lips_features",
                    "Lips Features (Oshtha)",
                    "Oshtha",
                    "Lip characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "lips_color",
                            "9.1 Lips Color:",
                            &[
                                ("vata_lips_color", "Dark", "Dark colored lips"),
                                ("pitta_lips_color", "Reddish", "Reddish lips"),
                                ("pitta_lips_color_yellow", "Pale Yellow", "Yellowish lips"),
                                ("kapha_lips_color", "Pink", "Pink, healthy lips"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "lips_tendency",
                            "9.2 Lips Tendency:",
                            &[
                                ("kapha_lips_tendency", "Firm", "Firm, resilient lips"),
                                ("vata_lips_tendency", "Cracked", "Dry, cracked lips"),
                                ("vata_lips_tendency_wrinkled", "Wrinkled", "Wrinkled lips"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "palm_features",
                    "Palm Features (Pani)",
                    "Pani",
                    "Palm characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "palm_color",
                            "10.1 Palm Color:",
                            &[
                                ("vata_palm_color", "Dark", "Dark colored palms"),
                                ("pitta_palm_color", "Reddish", "Reddish palms"),
                                ("pitta_palm_color_yellow", "Pale Yellow", "Yellowish palms"),
                                ("kapha_palm_color", "Pink", "Pink, healthy palms"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "palm_tendency",
                            "10.2 Palm Tendency:",
                            &[
                                ("kapha_palm_tendency", "Firm", "Firm, resilient palms"),
                                ("vata_palm_tendency", "Cracked", "Dry, cracked palms"),
                                ("vata_palm_tendency_wrinkled", "Wrinkled", "Wrinkled palms"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "sole_features",
                    "Sole Features (Pada)",
                    "Pada",
                    "Sole characteristics",
                    "Sparkles",
                    vec![
                        SubQuestion::single_select(
                            "sole_color",
                            "11.1 Sole Color:",
                            &[
                                ("vata_sole_color", "Dark", "Dark colored soles"),
                                ("pitta_sole_color", "Reddish", "Reddish soles"),
                                ("pitta_sole_color_yellow", "Pale Yellow", "Yellowish soles"),
                                ("kapha_sole_color", "Pink", "Pink, healthy soles"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "sole_tendency",
                            "11.2 Sole Tendency:",
                            &[
                                ("kapha_sole_tendency", "Firm", "Firm, resilient soles"),
                                ("vata_sole_tendency", "Cracked", "Dry, cracked soles"),
                                ("vata_sole_tendency_wrinkled", "Wrinkled", "Wrinkled soles"),
                            ],
                        ),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
