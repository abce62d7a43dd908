//! Validation utilities

use crate::traits::*;
use crate::types::*;
use bigdecimal::BigDecimal;

/// Validate that an amount is zero or positive
pub fn validate_non_negative_amount(name: &str, amount: &BigDecimal) -> JournalResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(JournalError::Validation(format!(
            "{} cannot be negative: {}",
            name, amount
        )))
    } else {
        Ok(())
    }
}

/// Validate that a transaction ID is usable as an entry ID prefix
pub fn validate_transaction_id(transaction_id: &str) -> JournalResult<()> {
    if transaction_id.trim().is_empty() {
        return Err(JournalError::Validation(
            "Transaction ID cannot be empty".to_string(),
        ));
    }

    // Check for valid characters (alphanumeric, dashes, underscores)
    if !transaction_id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(JournalError::Validation(
            "Transaction ID can only contain alphanumeric characters, dashes, and underscores"
                .to_string(),
        ));
    }

    Ok(())
}

/// Validate that the total equals price plus VAT
pub fn validate_amount_consistency(details: &TransactionDetails) -> JournalResult<()> {
    if details.amounts_are_consistent() {
        return Ok(());
    }

    Err(JournalError::InconsistentAmounts {
        price_before_tax: details.price_before_tax.clone(),
        vat_amount: details.vat_amount.clone(),
        total_price: details.total_price.clone(),
    })
}

/// Enhanced transaction validator with detailed checks
#[derive(Debug, Default, Clone, Copy)]
pub struct EnhancedTransactionValidator;

impl TransactionValidator for EnhancedTransactionValidator {
    fn validate_transaction(&self, transaction: &Transaction) -> JournalResult<()> {
        validate_transaction_id(&transaction.id)?;

        let details = &transaction.details;
        validate_non_negative_amount("Price before tax", &details.price_before_tax)?;
        validate_non_negative_amount("VAT amount", &details.vat_amount)?;
        validate_non_negative_amount("Total price", &details.total_price)?;

        validate_amount_consistency(details)
    }
}
