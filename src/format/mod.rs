//! Display formatting for journal amounts

pub mod currency;

pub use currency::*;
