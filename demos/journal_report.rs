//! Journal report example: generate, filter, total and print a small journal

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use journal_core::{
    CurrencyFormat, CurrencyFormatter, JournalFilter, JournalGenerator, JournalTotals,
    Transaction, TransactionType,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs configurable via RUST_LOG, e.g. RUST_LOG=journal_core=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let transactions = vec![
        Transaction::sale(
            "VT-001".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "1250.00".parse()?,
            "250.00".parse()?,
        ),
        Transaction::purchase(
            "AC-001".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "480.00".parse()?,
            "96.00".parse()?,
        ),
        Transaction::sale(
            "VT-002".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            BigDecimal::from(89),
            "17.80".parse()?,
        ),
    ];

    let journal = JournalGenerator::new().generate_all(&transactions)?;
    let euro = CurrencyFormat::default();

    println!("📒 Journal\n");
    print_entries(&journal.iter().collect::<Vec<_>>(), &euro);

    println!("\n🔎 Sales only\n");
    let sales = JournalFilter::new()
        .of_type(TransactionType::Sale)
        .apply(&journal);
    print_entries(&sales, &euro);

    println!("\n🔎 2024-03-01 only\n");
    let first_day = JournalFilter::new()
        .on_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .apply(&journal);
    print_entries(&first_day, &euro);

    Ok(())
}

fn print_entries(entries: &[&journal_core::JournalEntry], euro: &CurrencyFormat) {
    for entry in entries {
        let debit = entry.debit.as_ref().map(|a| euro.format(a)).unwrap_or_default();
        let credit = entry.credit.as_ref().map(|a| euro.format(a)).unwrap_or_default();
        println!(
            "  {}  {:<16} {:<7} {:<24} {:>14} {:>14}",
            entry.date(),
            entry.id,
            entry.account_code,
            entry.description,
            debit,
            credit
        );
    }

    let totals = JournalTotals::from_entries(entries.iter().copied());
    println!(
        "  Totals: debit {}  credit {}  VAT {}",
        euro.format(&totals.debit),
        euro.format(&totals.credit),
        euro.format(&totals.vat_amount)
    );
    if totals.is_balanced() {
        println!("  ✅ Journal is balanced");
    } else {
        println!("  ⚠️  Journal is not balanced");
    }
}
