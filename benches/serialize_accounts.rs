//! Benchmark suite for the account CSV serializer
//!
//! Measures serialization of generated account trees of increasing size into
//! an in-memory sink, using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use gnc_account_export::io::{AccountCsvSerializer, AccountSerializer};
use gnc_account_export::{AccountRecord, AccountType};

fn main() {
    divan::main();
}

/// Build `count` accounts spread over a few top-level branches
fn account_tree(count: usize) -> Vec<AccountRecord> {
    let branches = [
        (AccountType::Asset, "Assets"),
        (AccountType::Expense, "Expenses"),
        (AccountType::Income, "Income"),
        (AccountType::Liability, "Liabilities"),
    ];

    (0..count)
        .map(|i| {
            let (account_type, root) = branches[i % branches.len()];
            let full_name = format!("{}:Group {}:Account {}", root, i / 100, i);
            let mut account = AccountRecord::new(account_type, &full_name, "USD");
            account.description = format!("Generated account {}", i);
            account.hidden = i % 7 == 0;
            account.placeholder = i % 100 == 0;
            account
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn serialize_comma(bencher: divan::Bencher, count: usize) {
    let accounts = account_tree(count);
    let serializer = AccountCsvSerializer::new(',');

    bencher.bench_local(|| {
        let mut output = Vec::with_capacity(count * 96);
        serializer
            .serialize(divan::black_box(&accounts), &mut output)
            .expect("Serialization failed");
        output
    });
}

#[divan::bench(args = [100, 1_000, 100_000])]
fn serialize_multibyte_separator(bencher: divan::Bencher, count: usize) {
    let accounts = account_tree(count);
    let serializer = AccountCsvSerializer::new('¦');

    bencher.bench_local(|| {
        let mut output = Vec::with_capacity(count * 96);
        serializer
            .serialize(divan::black_box(&accounts), &mut output)
            .expect("Serialization failed");
        output
    });
}
