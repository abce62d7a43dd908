//! Core types and data structures for the journal system

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::amount::{deserialize_amount, deserialize_optional_amount};

/// Account types following standard accounting principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Assets - what the business owns (receivables, recoverable VAT, etc.)
    Asset,
    /// Liabilities - what the business owes (supplier debts, VAT due, etc.)
    Liability,
    /// Income/Revenue - money earned by the business
    Income,
    /// Expenses - costs incurred by the business
    Expense,
}

impl AccountType {
    /// Returns the normal balance type for this account type
    /// Assets and Expenses normally have debit balances
    /// Liabilities and Income normally have credit balances
    pub fn normal_balance(&self) -> EntryType {
        match self {
            AccountType::Asset | AccountType::Expense => EntryType::Debit,
            AccountType::Liability | AccountType::Income => EntryType::Credit,
        }
    }
}

/// Types of entries in double-entry bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Debit entry - increases Assets and Expenses, decreases Liabilities and Income
    Debit,
    /// Credit entry - increases Liabilities and Income, decreases Assets and Expenses
    Credit,
}

/// Accounts of the chart used by sale and purchase postings.
///
/// Serialized as the bare account code (`"411"`, `"445711"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccountCode {
    /// 401 - Dette fournisseur
    SupplierPayable,
    /// 411 - Créance client
    ClientReceivable,
    /// 445662 - TVA déductible
    VatDeductible,
    /// 445711 - TVA collectée
    VatCollected,
    /// 607 - Achat de marchandises
    MerchandisePurchases,
    /// 707 - Vente de marchandises
    MerchandiseSales,
}

impl AccountCode {
    /// Every account of the chart, ordered by code
    pub const ALL: [AccountCode; 6] = [
        AccountCode::SupplierPayable,
        AccountCode::ClientReceivable,
        AccountCode::VatDeductible,
        AccountCode::VatCollected,
        AccountCode::MerchandisePurchases,
        AccountCode::MerchandiseSales,
    ];

    /// Ledger account number
    pub fn code(&self) -> &'static str {
        match self {
            AccountCode::SupplierPayable => "401",
            AccountCode::ClientReceivable => "411",
            AccountCode::VatDeductible => "445662",
            AccountCode::VatCollected => "445711",
            AccountCode::MerchandisePurchases => "607",
            AccountCode::MerchandiseSales => "707",
        }
    }

    /// Label shown next to postings on this account
    pub fn label(&self) -> &'static str {
        match self {
            AccountCode::SupplierPayable => "Dette fournisseur",
            AccountCode::ClientReceivable => "Créance client",
            AccountCode::VatDeductible => "TVA déductible",
            AccountCode::VatCollected => "TVA collectée",
            AccountCode::MerchandisePurchases => "Achat de marchandises",
            AccountCode::MerchandiseSales => "Vente de marchandises",
        }
    }

    /// Economic nature of the account
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountCode::ClientReceivable | AccountCode::VatDeductible => AccountType::Asset,
            AccountCode::SupplierPayable | AccountCode::VatCollected => AccountType::Liability,
            AccountCode::MerchandiseSales => AccountType::Income,
            AccountCode::MerchandisePurchases => AccountType::Expense,
        }
    }
}

impl fmt::Display for AccountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for AccountCode {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountCode::ALL
            .into_iter()
            .find(|account| account.code() == s)
            .ok_or_else(|| JournalError::UnknownAccountCode(s.to_string()))
    }
}

impl TryFrom<String> for AccountCode {
    type Error = JournalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountCode> for String {
    fn from(account: AccountCode) -> Self {
        account.code().to_string()
    }
}

/// Kind of commercial transaction; selects the posting template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Goods sold to a client
    Sale,
    /// Goods bought from a supplier
    Purchase,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Purchase => "purchase",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(TransactionType::Sale),
            "purchase" => Ok(TransactionType::Purchase),
            other => Err(JournalError::InvalidTransactionType(other.to_string())),
        }
    }
}

/// Fields shared by a transaction and every entry generated from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    /// Date of the economic event
    pub date: NaiveDate,
    /// Sale or purchase
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Amount excluding tax
    #[serde(deserialize_with = "deserialize_amount")]
    pub price_before_tax: BigDecimal,
    /// Tax portion
    #[serde(deserialize_with = "deserialize_amount")]
    pub vat_amount: BigDecimal,
    /// Amount including tax
    #[serde(deserialize_with = "deserialize_amount")]
    pub total_price: BigDecimal,
}

impl TransactionDetails {
    /// Whether `total_price == price_before_tax + vat_amount`
    pub fn amounts_are_consistent(&self) -> bool {
        &self.price_before_tax + &self.vat_amount == self.total_price
    }
}

/// A sale or purchase to be recorded in the journal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: String,
    /// Date, type and amounts
    #[serde(flatten)]
    pub details: TransactionDetails,
}

impl Transaction {
    /// Create a transaction with an explicit total
    pub fn new(
        id: String,
        date: NaiveDate,
        transaction_type: TransactionType,
        price_before_tax: BigDecimal,
        vat_amount: BigDecimal,
        total_price: BigDecimal,
    ) -> Self {
        Self {
            id,
            details: TransactionDetails {
                date,
                transaction_type,
                price_before_tax,
                vat_amount,
                total_price,
            },
        }
    }

    /// Create a sale whose total is the pre-tax price plus VAT
    pub fn sale(
        id: String,
        date: NaiveDate,
        price_before_tax: BigDecimal,
        vat_amount: BigDecimal,
    ) -> Self {
        let total_price = &price_before_tax + &vat_amount;
        Self::new(
            id,
            date,
            TransactionType::Sale,
            price_before_tax,
            vat_amount,
            total_price,
        )
    }

    /// Create a purchase whose total is the pre-tax price plus VAT
    pub fn purchase(
        id: String,
        date: NaiveDate,
        price_before_tax: BigDecimal,
        vat_amount: BigDecimal,
    ) -> Self {
        let total_price = &price_before_tax + &vat_amount;
        Self::new(
            id,
            date,
            TransactionType::Purchase,
            price_before_tax,
            vat_amount,
            total_price,
        )
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.details.transaction_type
    }
}

/// A single posting derived from a transaction
///
/// Carries a copy of the parent transaction's details so the journal can be
/// filtered and totalled without going back to the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// `<transaction id>-<role suffix>`
    pub id: String,
    /// Snapshot of the parent transaction
    #[serde(flatten)]
    pub details: TransactionDetails,
    /// Account the posting is made against
    pub account_code: AccountCode,
    /// Account label
    pub description: String,
    /// Debit amount, present on debit postings only
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub debit: Option<BigDecimal>,
    /// Credit amount, present on credit postings only
    #[serde(
        default,
        deserialize_with = "deserialize_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub credit: Option<BigDecimal>,
}

impl JournalEntry {
    /// Side of the posting, `None` if neither amount is set
    pub fn entry_type(&self) -> Option<EntryType> {
        match (&self.debit, &self.credit) {
            (Some(_), None) => Some(EntryType::Debit),
            (None, Some(_)) => Some(EntryType::Credit),
            _ => None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.details.date
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.details.transaction_type
    }
}

/// Errors that can occur while building or checking a journal
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Invalid transaction type: {0}")]
    InvalidTransactionType(String),
    #[error(
        "Inconsistent amounts: {price_before_tax} + {vat_amount} != {total_price}"
    )]
    InconsistentAmounts {
        price_before_tax: BigDecimal,
        vat_amount: BigDecimal,
        total_price: BigDecimal,
    },
    #[error("Unknown account code: {0}")]
    UnknownAccountCode(String),
    #[error("Journal is not balanced: debits = {debits}, credits = {credits}")]
    Unbalanced {
        debits: BigDecimal,
        credits: BigDecimal,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
