pub mod anatomy;
pub mod features;
pub mod functions;
