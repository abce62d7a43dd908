//! Traits for validation and display extensibility

use bigdecimal::BigDecimal;

use crate::types::*;
use crate::utils::validate_amount_consistency;

/// Trait for implementing custom transaction validation rules
///
/// Runs before entries are generated; a rejected transaction produces no
/// entries at all.
pub trait TransactionValidator: Send + Sync {
    /// Validate a transaction before generating its journal entries
    fn validate_transaction(&self, transaction: &Transaction) -> JournalResult<()>;
}

/// Default transaction validator: the total must equal price plus VAT
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTransactionValidator;

impl TransactionValidator for DefaultTransactionValidator {
    fn validate_transaction(&self, transaction: &Transaction) -> JournalResult<()> {
        validate_amount_consistency(&transaction.details)
    }
}

/// Renders a monetary amount for display
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: &BigDecimal) -> String;
}
