use std::sync::LazyLock;

use crate::Section;
use crate::questionnaire::{Question, SubQuestion};

/// Section 1: anatomical features. Frame breadth and length (Akriti), size and
/// development (Upachaya), and musculature.
pub struct AnatomicalFeatures;

impl Section for AnatomicalFeatures {
    fn id(&self) -> &str {
        "anatomical_features"
    }

    fn name(&self) -> &str {
        "Anatomical Features"
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            vec![
                Question::multi(
                    "body_frame_breadth",
                    "Body Frame Breadth (Akriti-Vistara Pramana)",
                    "Akriti",
                    "Physical structure assessment",
                    "User",
                    vec![
                        SubQuestion::single_select(
                            "overall_frame_breadth",
                            "1.1 Overall Body Frame:",
                            &[
                                (
                                    "vata_overall_frame",
                                    "Thin/Narrow",
                                    "Delicate, slender structure",
                                ),
                                (
                                    "pitta_overall_frame",
                                    "Medium",
                                    "Moderate, well-proportioned structure",
                                ),
                                ("kapha_overall_frame", "Broad", "Large, solid structure"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "shoulder_breadth",
                            "1.2 Shoulder Width:",
                            &[
                                (
                                    "vata_shoulder_width",
                                    "Thin/Narrow",
                                    "Narrow, delicate shoulders",
                                ),
                                ("pitta_shoulder_width", "Medium", "Moderate shoulder width"),
                                ("kapha_shoulder_width", "Broad", "Broad, sturdy shoulders"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "chest_structure",
                            "1.3 Chest Structure:",
                            &[
                                ("vata_chest_structure", "Thin/Narrow", "Narrow, flat chest"),
                                ("pitta_chest_structure", "Medium", "Moderate chest development"),
                                ("kapha_chest_structure", "Broad", "Broad, full chest"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "forehead_breadth",
                            "1.4 Forehead Width:",
                            &[
                                (
                                    "vata_forehead_width",
                                    "Thin/Narrow",
                                    "Narrow forehead (<4 angula)",
                                ),
                                (
                                    "pitta_forehead_width",
                                    "Medium",
                                    "Moderate forehead width (=4 angula)",
                                ),
                                ("kapha_forehead_width", "Broad", "Broad forehead (>4 angula)"),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "body_frame_length",
                    "Body Frame Length (Akriti-Ayama Pramana)",
                    "Akriti Ayama",
                    "Body length assessment",
                    "User",
                    vec![
                        SubQuestion::single_select(
                            "overall_length",
                            "2.1 Overall Body Length:",
                            &[
                                ("vata_overall_length", "Long", "Tall, elongated structure"),
                                ("pitta_overall_length", "Medium", "Average height"),
                                (
                                    "kapha_vata_overall_length",
                                    "Too Short/Too Long",
                                    "Extreme height variations",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "forehead_length",
                            "2.2 Forehead Length:",
                            &[
                                ("vata_forehead_length", "Long", "Elongated forehead"),
                                ("pitta_forehead_length", "Medium", "Average forehead length"),
                                (
                                    "kapha_forehead_length",
                                    "Too Short/Too Long",
                                    "Extreme forehead length",
                                ),
                            ],
                        ),
                    ],
                ),
                Question::multi(
                    "body_size_development",
                    "Size & Development (Upachaya-Praman)",
                    "Upachaya",
                    "Body development assessment",
                    "User",
                    vec![
                        SubQuestion::single_select(
                            "body_build",
                            "3.1 Body Build:",
                            &[
                                ("vata_body_build", "Weakly Developed", "Underdeveloped, delicate"),
                                ("pitta_body_build", "Moderately Developed", "Average development"),
                                ("kapha_body_build", "Well Developed", "Strong, robust build"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "face_development",
                            "3.2 Face Development:",
                            &[
                                (
                                    "vata_face_development",
                                    "Weakly Developed",
                                    "Thin, delicate facial features",
                                ),
                                (
                                    "pitta_face_development",
                                    "Moderately Developed",
                                    "Average facial development",
                                ),
                                (
                                    "kapha_face_development",
                                    "Well Developed",
                                    "Full, well-developed face",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "eye_development",
                            "3.3 Eye Development:",
                            &[
                                (
                                    "vata_eye_development",
                                    "Weakly Developed",
                                    "Small, underdeveloped eyes",
                                ),
                                (
                                    "pitta_eye_development",
                                    "Moderately Developed",
                                    "Average eye size",
                                ),
                                (
                                    "kapha_eye_development",
                                    "Well Developed",
                                    "Large, prominent eyes",
                                ),
                            ],
                        ),
                        SubQuestion::single_select(
                            "eyelash_size",
                            "3.4 Eyelash Size:",
                            &[
                                ("vata_eyelash", "Small", "Short, thin eyelashes"),
                                ("pitta_eyelash", "Medium", "Average eyelash length"),
                                ("kapha_eyelash", "Large", "Long, thick eyelashes"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "joints_development",
                            "3.5 Joints Development:",
                            &[
                                ("vata_joints", "Weakly Developed", "Small, prominent joints"),
                                ("pitta_joints", "Moderately Developed", "Average joint size"),
                                ("kapha_joints", "Well Developed", "Large, well-covered joints"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "lips_size",
                            "3.6 Lips Size:",
                            &[
                                ("vata_lips", "Small", "Thin, narrow lips"),
                                ("pitta_lips", "Medium", "Average lip size"),
                                ("kapha_lips", "Large", "Full, broad lips"),
                            ],
                        ),
                        SubQuestion::single_select(
                            "nails_size",
                            "3.7 Nails Size:",
                            &[
                                ("vata_nails", "Small", "Short nails, length < breadth"),
                                ("pitta_nails", "Medium", "Length = breadth"),
                                ("kapha_nails", "Large", "Long nails, length > breadth"),
                            ],
                        ),
                    ],
                ),
                Question::single(
                    "body_musculature",
                    "Body Build Musculature (Upachaya: Dravata-Dridhata)",
                    "Dravata-Dridhata",
                    "Muscle tone assessment",
                    "Activity",
                    &[
                        ("vata_musculature", "Thin", "Lean and slender physique"),
                        (
                            "pitta_kapha_musculature",
                            "Soft and Loosely Knitted",
                            "Less toned, relaxed muscle structure",
                        ),
                        (
                            "kapha_musculature",
                            "Smooth and Firmly Knitted",
                            "Well-defined, toned muscular build",
                        ),
                    ],
                ),
            ]
        });
        &QUESTIONS
    }
}
