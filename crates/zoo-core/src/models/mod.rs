//! Domain models for the zoo management system.

mod animal;
mod habitat;
mod records;
mod species;

pub use animal::*;
pub use habitat::*;
pub use records::*;
pub use species::*;
