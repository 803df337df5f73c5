pub mod answer;
pub mod constitution;
pub mod dosha;
pub mod handoff;
pub mod patient;
pub mod progress;
