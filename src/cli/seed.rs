//! # Sample-Data Seeder
//!
//! Loads the canonical demo dataset through the public `execute` path:
//! three ledger tables (users, wallets, transactions) with enough UPDATE
//! chains on the wallets to make HISTORY queries interesting.
//!
//! Reachable as `.seed` in the REPL and `--seed` on the binary. Seeding an
//! already-seeded database fails on the first duplicate CREATE, which is
//! surfaced rather than swallowed.

use crate::database::Database;
use crate::error::Result;
use tracing::info;

const SEED_STATEMENTS: &[&str] = &[
    "CREATE TABLE users (id INT PRIMARY KEY, name TEXT, email TEXT UNIQUE) LEDGER",
    "CREATE TABLE wallets (wallet_id INT PRIMARY KEY, user_id INT, balance FLOAT) LEDGER",
    "CREATE TABLE transactions (tx_id INT PRIMARY KEY, wallet_id INT, amount FLOAT, type TEXT) LEDGER",
    "INSERT INTO users VALUES (1, 'Alice Johnson', 'alice@example.com')",
    "INSERT INTO users VALUES (2, 'Bob Smith', 'bob@example.com')",
    "INSERT INTO users VALUES (3, 'Carol White', 'carol@example.com')",
    "INSERT INTO users VALUES (4, 'David Brown', 'david@example.com')",
    "INSERT INTO users VALUES (5, 'Eve Davis', 'eve@example.com')",
    "INSERT INTO wallets VALUES (1, 1, 1000.00)",
    "INSERT INTO wallets VALUES (2, 2, 500.00)",
    "INSERT INTO wallets VALUES (3, 3, 750.00)",
    "INSERT INTO wallets VALUES (4, 4, 2000.00)",
    "INSERT INTO wallets VALUES (5, 5, 300.00)",
    "INSERT INTO transactions VALUES (1, 1, 1000.00, 'deposit')",
    "INSERT INTO transactions VALUES (2, 2, 500.00, 'deposit')",
    "INSERT INTO transactions VALUES (3, 3, 750.00, 'deposit')",
    "INSERT INTO transactions VALUES (4, 4, 2000.00, 'deposit')",
    "INSERT INTO transactions VALUES (5, 5, 300.00, 'deposit')",
    "UPDATE wallets SET balance = 1200.00 WHERE wallet_id = 1",
    "INSERT INTO transactions VALUES (6, 1, 200.00, 'credit')",
    "UPDATE wallets SET balance = 1050.00 WHERE wallet_id = 1",
    "INSERT INTO transactions VALUES (7, 1, 150.00, 'debit')",
    "UPDATE wallets SET balance = 800.00 WHERE wallet_id = 2",
    "INSERT INTO transactions VALUES (8, 2, 300.00, 'credit')",
    "UPDATE wallets SET balance = 650.00 WHERE wallet_id = 2",
    "INSERT INTO transactions VALUES (9, 2, 150.00, 'debit')",
    "UPDATE wallets SET balance = 1250.00 WHERE wallet_id = 3",
    "INSERT INTO transactions VALUES (10, 3, 500.00, 'credit')",
    "UPDATE wallets SET balance = 950.00 WHERE wallet_id = 3",
    "INSERT INTO transactions VALUES (11, 3, 300.00, 'debit')",
    "UPDATE wallets SET balance = 2500.00 WHERE wallet_id = 4",
    "INSERT INTO transactions VALUES (12, 4, 500.00, 'credit')",
    "UPDATE wallets SET balance = 2200.00 WHERE wallet_id = 4",
    "INSERT INTO transactions VALUES (13, 4, 300.00, 'debit')",
    "UPDATE wallets SET balance = 600.00 WHERE wallet_id = 5",
    "INSERT INTO transactions VALUES (14, 5, 300.00, 'credit')",
    "UPDATE wallets SET balance = 450.00 WHERE wallet_id = 5",
    "INSERT INTO transactions VALUES (15, 5, 150.00, 'debit')",
    "UPDATE wallets SET balance = 1350.00 WHERE wallet_id = 1",
    "INSERT INTO transactions VALUES (16, 1, 300.00, 'credit')",
    "UPDATE wallets SET balance = 900.00 WHERE wallet_id = 2",
    "INSERT INTO transactions VALUES (17, 2, 250.00, 'credit')",
    "UPDATE wallets SET balance = 1150.00 WHERE wallet_id = 3",
    "INSERT INTO transactions VALUES (18, 3, 200.00, 'credit')",
    "UPDATE wallets SET balance = 2100.00 WHERE wallet_id = 4",
    "INSERT INTO transactions VALUES (19, 4, 100.00, 'debit')",
    "UPDATE wallets SET balance = 550.00 WHERE wallet_id = 5",
    "INSERT INTO transactions VALUES (20, 5, 100.00, 'credit')",
];

/// Runs every seed statement in order, returning how many were executed.
pub fn seed(db: &mut Database) -> Result<usize> {
    for sql in SEED_STATEMENTS {
        db.execute(sql)?;
    }

    info!(statements = SEED_STATEMENTS.len(), "seeded sample data");
    Ok(SEED_STATEMENTS.len())
}
