//! Journal filtering by date and transaction type

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Selects journal entries by date and/or transaction type
///
/// An unset criterion matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalFilter {
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
}

impl JournalFilter {
    /// Filter matching every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep entries dated `date`
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Only keep entries of the given transaction type
    pub fn of_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = Some(transaction_type);
        self
    }

    pub fn matches(&self, entry: &JournalEntry) -> bool {
        let matches_date = self.date.is_none_or(|date| entry.date() == date);
        let matches_type = self
            .transaction_type
            .is_none_or(|transaction_type| entry.transaction_type() == transaction_type);
        matches_date && matches_type
    }

    /// Entries matching the filter, in journal order
    pub fn apply<'a>(&self, entries: &'a [JournalEntry]) -> Vec<&'a JournalEntry> {
        entries.iter().filter(|entry| self.matches(entry)).collect()
    }
}
