//! Journal module containing entry generation, filtering and balance checks

pub mod balance;
pub mod filter;
pub mod generator;

pub use balance::*;
pub use filter::*;
pub use generator::*;
