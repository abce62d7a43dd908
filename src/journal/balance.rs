//! Balance checks and totals over journal entries

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::*;

/// Sum of all debit amounts; entries without a debit count as zero
pub fn total_debits<'a, I>(entries: I) -> BigDecimal
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries
        .into_iter()
        .filter_map(|e| e.debit.as_ref())
        .sum()
}

/// Sum of all credit amounts; entries without a credit count as zero
pub fn total_credits<'a, I>(entries: I) -> BigDecimal
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries
        .into_iter()
        .filter_map(|e| e.credit.as_ref())
        .sum()
}

/// Check if total debits equal total credits
///
/// An empty journal is balanced.
pub fn is_balanced<'a, I>(entries: I) -> bool
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    JournalTotals::from_entries(entries).is_balanced()
}

/// Like [`is_balanced`], but reports both sums when they differ
pub fn check_balance<'a, I>(entries: I) -> JournalResult<()>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let totals = JournalTotals::from_entries(entries);
    if totals.is_balanced() {
        return Ok(());
    }

    tracing::warn!(
        debits = %totals.debit,
        credits = %totals.credit,
        "journal is not balanced"
    );
    Err(JournalError::Unbalanced {
        debits: totals.debit,
        credits: totals.credit,
    })
}

/// Column totals of a journal listing
///
/// `vat_amount` and `total_price` are summed per entry row, so each
/// transaction contributes its VAT and total once for every entry it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalTotals {
    pub debit: BigDecimal,
    pub credit: BigDecimal,
    pub vat_amount: BigDecimal,
    pub total_price: BigDecimal,
}

impl JournalTotals {
    /// Totals of a sequence of entries
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |mut totals, entry| {
                if let Some(debit) = &entry.debit {
                    totals.debit += debit;
                }
                if let Some(credit) = &entry.credit {
                    totals.credit += credit;
                }
                totals.vat_amount += &entry.details.vat_amount;
                totals.total_price += &entry.details.total_price;
                totals
            })
    }

    /// Check if the debit and credit columns agree
    pub fn is_balanced(&self) -> bool {
        self.debit == self.credit
    }
}

impl Default for JournalTotals {
    fn default() -> Self {
        Self {
            debit: BigDecimal::from(0),
            credit: BigDecimal::from(0),
            vat_amount: BigDecimal::from(0),
            total_price: BigDecimal::from(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::generator::generate_entries;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn sale(id: &str, price: i64, vat: i64) -> Transaction {
        Transaction::sale(
            id.to_string(),
            date(),
            BigDecimal::from(price),
            BigDecimal::from(vat),
        )
    }

    fn purchase(id: &str, price: i64, vat: i64) -> Transaction {
        Transaction::purchase(
            id.to_string(),
            date(),
            BigDecimal::from(price),
            BigDecimal::from(vat),
        )
    }

    #[test]
    fn test_empty_journal_is_balanced() {
        let entries: Vec<JournalEntry> = Vec::new();
        assert!(is_balanced(&entries));
        assert!(check_balance(&entries).is_ok());
        assert_eq!(JournalTotals::from_entries(&entries), JournalTotals::default());
    }

    #[test]
    fn test_corrupted_debit_unbalances() {
        let mut entries = generate_entries(&sale("t1", 100, 20)).to_vec();
        assert!(is_balanced(&entries));

        entries[0].debit = Some(BigDecimal::from(100));

        assert!(!is_balanced(&entries));
        match check_balance(&entries) {
            Err(JournalError::Unbalanced { debits, credits }) => {
                assert_eq!(debits, BigDecimal::from(100));
                assert_eq!(credits, BigDecimal::from(120));
            }
            other => panic!("expected imbalance, got {other:?}"),
        }
    }

    #[test]
    fn test_decimal_amounts_sum_exactly() {
        // 0.1 + 0.2 drifts in binary floating point
        let tx = Transaction::sale(
            "t1".to_string(),
            date(),
            "0.1".parse().unwrap(),
            "0.2".parse().unwrap(),
        );
        let entries = generate_entries(&tx);

        assert_eq!(total_credits(&entries), "0.3".parse::<BigDecimal>().unwrap());
        assert!(is_balanced(&entries));
    }

    #[test]
    fn test_scale_does_not_affect_balance() {
        let tx = Transaction::new(
            "t1".to_string(),
            date(),
            TransactionType::Sale,
            "100.00".parse().unwrap(),
            "20.0".parse().unwrap(),
            "120".parse().unwrap(),
        );

        assert!(is_balanced(&generate_entries(&tx)));
    }

    #[test]
    fn test_totals_sum_per_entry_row() {
        let mut entries = generate_entries(&sale("t1", 100, 20)).to_vec();
        entries.extend(generate_entries(&purchase("t2", 50, 10)));

        let totals = JournalTotals::from_entries(&entries);

        assert_eq!(totals.debit, BigDecimal::from(180));
        assert_eq!(totals.credit, BigDecimal::from(180));
        assert_eq!(totals.vat_amount, BigDecimal::from(90));
        assert_eq!(totals.total_price, BigDecimal::from(540));
        assert!(totals.is_balanced());
    }

    #[test]
    fn test_accepts_filtered_references() {
        let entries = generate_entries(&purchase("t2", 50, 10));
        let refs: Vec<&JournalEntry> = entries.iter().collect();

        assert!(is_balanced(refs));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: concatenated journals of consistent transactions balance,
        /// and debits equal the sum of transaction totals.
        #[test]
        fn generated_journals_are_balanced(
            txs in prop::collection::vec((any::<bool>(), -1_000_000i64..1_000_000i64, 0i64..200_000i64), 0..20)
        ) {
            let mut journal = Vec::new();
            let mut expected = BigDecimal::from(0);

            for (i, (is_sale, cents, vat_cents)) in txs.into_iter().enumerate() {
                let price = BigDecimal::new(cents.into(), 2);
                let vat = BigDecimal::new(vat_cents.into(), 2);
                let id = format!("t{i}");
                let tx = if is_sale {
                    Transaction::sale(id, date(), price, vat)
                } else {
                    Transaction::purchase(id, date(), price, vat)
                };
                expected += &tx.details.total_price;
                journal.extend(generate_entries(&tx));
            }

            prop_assert!(is_balanced(&journal));
            prop_assert_eq!(total_debits(&journal), expected);
        }

        /// Property: the balance check does not depend on entry order.
        #[test]
        fn balance_is_order_independent(
            amounts in prop::collection::vec((0i64..100_000i64, 0i64..20_000i64), 1..8),
            corrupt in any::<bool>(),
            seed in any::<u64>()
        ) {
            let mut journal = Vec::new();
            for (i, (price, vat)) in amounts.into_iter().enumerate() {
                journal.extend(generate_entries(&sale(&format!("t{i}"), price, vat)));
            }
            if corrupt {
                journal[0].debit = journal[0].debit.as_ref().map(|d| d + BigDecimal::from(1));
            }

            let before = is_balanced(&journal);
            journal.reverse();
            let len = journal.len();
            journal.rotate_left((seed as usize) % len);

            prop_assert_eq!(is_balanced(&journal), before);
            prop_assert_eq!(before, !corrupt);
        }
    }
}
