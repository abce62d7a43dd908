//! # Journal Core
//!
//! Double-entry journal generation for commercial transactions.
//!
//! ## Features
//!
//! - **Entry generation**: every sale or purchase expands into three postings
//!   (receivable or expense, revenue or deductible VAT, collected VAT or payable)
//! - **Balance checking**: total debits against total credits, with exact decimal arithmetic
//! - **Validation**: pluggable transaction validators run before generation
//! - **Listing helpers**: filtering by date and type, column totals, currency formatting
//!
//! ## Quick Start
//!
//! ```rust
//! use journal_core::{generate_entries, is_balanced, Transaction};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let sale = Transaction::sale(
//!     "t1".to_string(),
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//!     BigDecimal::from(100),
//!     BigDecimal::from(20),
//! );
//!
//! let entries = generate_entries(&sale);
//! assert_eq!(entries[0].account_code.code(), "411");
//! assert!(is_balanced(&entries));
//! ```

pub mod format;
pub mod journal;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use format::*;
pub use journal::*;
pub use traits::*;
pub use types::*;
