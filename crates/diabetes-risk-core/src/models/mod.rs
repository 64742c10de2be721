//! Domain models for the diabetes risk system.

mod assessment;
mod note;
mod patient;

pub use assessment::*;
pub use note::*;
pub use patient::*;
