use prakriti_core::models::constitution::{Constitution, ConstitutionResult};
use prakriti_core::models::dosha::DoshaCount;

/// Classify dosha counts into a constitution.
///
/// All three equal (including all zero) is balanced. Otherwise the doshas
/// sharing the highest count form the constitution, reported in Vata, Pitta,
/// Kapha order.
pub fn classify(counts: DoshaCount) -> ConstitutionResult {
    ConstitutionResult::new(constitution_for(counts), counts)
}

pub fn constitution_for(counts: DoshaCount) -> Constitution {
    match counts.leaders().as_slice() {
        [dosha] => Constitution::Single { dosha: *dosha },
        [primary, secondary] => Constitution::Dual {
            primary: *primary,
            secondary: *secondary,
        },
        _ => Constitution::Balanced,
    }
}
