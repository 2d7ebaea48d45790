//! Decision rules over animals and species baselines.
//!
//! Everything here is pure: rules read the animals and catalog they are
//! given and return an outcome value. Nothing is mutated or cached.

mod breeding;
mod compatibility;
mod feeding;
mod health;

pub use breeding::*;
pub use compatibility::*;
pub use feeding::*;
pub use health::*;
