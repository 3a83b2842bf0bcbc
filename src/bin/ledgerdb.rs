//! # LedgerDB CLI Entry Point
//!
//! ```bash
//! # Open (or create) a database and start the REPL
//! ledgerdb ./mydb
//!
//! # Create and load the sample dataset
//! ledgerdb --create --seed ./demo
//!
//! # Show version / help
//! ledgerdb --version
//! ledgerdb --help
//! ```

use eyre::{bail, Result, WrapErr};
use ledgerdb::cli::{seed, Repl};
use ledgerdb::Database;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let mut seed_mode = false;
    let mut verbose = false;
    let mut db_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-v" => {
                println!("ledgerdb {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            // open creates on demand; the flag is kept for familiarity
            "--create" | "-c" => {}
            "--seed" | "-s" => {
                seed_mode = true;
            }
            "--verbose" => {
                verbose = true;
            }
            arg if arg.starts_with('-') => {
                bail!("Unknown option: {}", arg);
            }
            path => {
                if db_path.is_some() {
                    bail!("Multiple database paths specified");
                }
                db_path = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    init_logging(verbose);

    let db_path = match db_path {
        Some(p) => p,
        None => {
            print_usage();
            return Ok(());
        }
    };

    let mut db = Database::open(&db_path)
        .wrap_err_with(|| format!("failed to open database at {:?}", db_path))?;

    if seed_mode {
        let statements = seed(&mut db).wrap_err("failed to seed sample data")?;
        println!("Seeded sample data ({} statements executed).", statements);
    }

    let mut repl = Repl::new(db)?;
    repl.run()?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "ledgerdb=debug" } else { "ledgerdb=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn print_usage() {
    println!("LedgerDB - Embedded relational store with ledger tables");
    println!();
    println!("USAGE:");
    println!("    ledgerdb [OPTIONS] <DATABASE_PATH>");
    println!();
    println!("ARGS:");
    println!("    <DATABASE_PATH>    Path to the database directory");
    println!();
    println!("OPTIONS:");
    println!("    -c, --create       Create the database directory (implied; open creates on demand)");
    println!("    -s, --seed         Load the sample dataset before starting the REPL");
    println!("        --verbose      Enable debug logging (RUST_LOG overrides)");
    println!("    -h, --help         Print help information");
    println!("    -v, --version      Print version information");
    println!();
    println!("EXAMPLES:");
    println!("    ledgerdb ./mydb              Open or create database at ./mydb");
    println!("    ledgerdb --seed ./demo       Create ./demo and load sample data");
}
