//! Utility modules

pub mod amount;
pub mod validation;

pub use validation::*;
