//! Journal entry generation from sales and purchases

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Which transaction amount a posting carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountSource {
    PriceBeforeTax,
    VatAmount,
    TotalPrice,
}

impl AmountSource {
    /// Pick the amount out of the transaction details
    pub fn pick<'a>(&self, details: &'a TransactionDetails) -> &'a BigDecimal {
        match self {
            AmountSource::PriceBeforeTax => &details.price_before_tax,
            AmountSource::VatAmount => &details.vat_amount,
            AmountSource::TotalPrice => &details.total_price,
        }
    }
}

/// One row of a posting template
///
/// The id suffix, account, side and amount of a posting role live together
/// so they cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostingRule {
    /// Appended to the transaction id to form the entry id
    pub suffix: &'static str,
    /// Account posted to
    pub account: AccountCode,
    /// Debit or credit
    pub side: EntryType,
    /// Amount carried by the posting
    pub amount: AmountSource,
}

impl PostingRule {
    /// Build the entry this rule produces for a transaction
    pub fn apply(&self, transaction: &Transaction) -> JournalEntry {
        let amount = self.amount.pick(&transaction.details).clone();
        let (debit, credit) = match self.side {
            EntryType::Debit => (Some(amount), None),
            EntryType::Credit => (None, Some(amount)),
        };

        JournalEntry {
            id: format!("{}-{}", transaction.id, self.suffix),
            details: transaction.details.clone(),
            account_code: self.account,
            description: self.account.label().to_string(),
            debit,
            credit,
        }
    }
}

/// Sale: receivable, revenue, VAT collected
pub static SALE_RULES: [PostingRule; 3] = [
    PostingRule {
        suffix: "client",
        account: AccountCode::ClientReceivable,
        side: EntryType::Debit,
        amount: AmountSource::TotalPrice,
    },
    PostingRule {
        suffix: "vente",
        account: AccountCode::MerchandiseSales,
        side: EntryType::Credit,
        amount: AmountSource::PriceBeforeTax,
    },
    PostingRule {
        suffix: "tva",
        account: AccountCode::VatCollected,
        side: EntryType::Credit,
        amount: AmountSource::VatAmount,
    },
];

/// Purchase: expense, VAT deductible, payable
pub static PURCHASE_RULES: [PostingRule; 3] = [
    PostingRule {
        suffix: "achat",
        account: AccountCode::MerchandisePurchases,
        side: EntryType::Debit,
        amount: AmountSource::PriceBeforeTax,
    },
    PostingRule {
        suffix: "tva",
        account: AccountCode::VatDeductible,
        side: EntryType::Debit,
        amount: AmountSource::VatAmount,
    },
    PostingRule {
        suffix: "fournisseur",
        account: AccountCode::SupplierPayable,
        side: EntryType::Credit,
        amount: AmountSource::TotalPrice,
    },
];

/// Posting template for a transaction type
pub fn posting_rules(transaction_type: TransactionType) -> &'static [PostingRule; 3] {
    match transaction_type {
        TransactionType::Sale => &SALE_RULES,
        TransactionType::Purchase => &PURCHASE_RULES,
    }
}

/// Expand a transaction into its three journal entries
///
/// Amounts are copied as given; use [`JournalGenerator`] to reject
/// transactions whose total does not match price plus VAT.
pub fn generate_entries(transaction: &Transaction) -> [JournalEntry; 3] {
    let entries = posting_rules(transaction.transaction_type())
        .each_ref()
        .map(|rule| rule.apply(transaction));

    tracing::debug!(
        transaction_id = %transaction.id,
        transaction_type = %transaction.transaction_type(),
        "generated journal entries"
    );

    entries
}

/// Journal generator that validates transactions before expanding them
pub struct JournalGenerator {
    validator: Box<dyn TransactionValidator>,
}

impl JournalGenerator {
    /// Create a generator using the default amount consistency check
    pub fn new() -> Self {
        Self {
            validator: Box::new(DefaultTransactionValidator),
        }
    }

    /// Create a generator with a custom validator
    pub fn with_validator(validator: Box<dyn TransactionValidator>) -> Self {
        Self { validator }
    }

    /// Validate and expand one transaction; nothing is produced on failure
    pub fn generate(&self, transaction: &Transaction) -> JournalResult<[JournalEntry; 3]> {
        if let Err(err) = self.validator.validate_transaction(transaction) {
            tracing::warn!(transaction_id = %transaction.id, error = %err, "transaction rejected");
            return Err(err);
        }

        Ok(generate_entries(transaction))
    }

    /// Expand transactions in order into a single journal
    pub fn generate_all<'a, I>(&self, transactions: I) -> JournalResult<Vec<JournalEntry>>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut journal = Vec::new();
        for transaction in transactions {
            journal.extend(self.generate(transaction)?);
        }
        Ok(journal)
    }
}

impl Default for JournalGenerator {
    fn default() -> Self {
        Self::new()
    }
}
