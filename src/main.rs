//! Address Book - Main entry point
//!
//! Runs the interactive menu by default. `--import <file>` appends the valid
//! records of another CSV file; `--json` prints the address book as JSON.

use address_book::console::{App, Console};
use address_book::{AddressBook, Config, CsvFileRepository};
use anyhow::{bail, Context, Result};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: address-book [--import <file> | --json]";

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so prompts on stdout stay readable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Using address book at {}",
        config.address_book_path().display()
    );

    let repository = CsvFileRepository::new(&config);
    let mut book = AddressBook::new(Box::new(repository));

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [flag, file] if flag == "--import" => {
            book.reload();
            if book.load_failed() {
                bail!("The address book file could not be read; nothing imported");
            }
            let report = book
                .import(file)
                .with_context(|| format!("Failed to import {}", file))?;
            if report.imported > 0 && !book.persist() {
                bail!("Imported contacts could not be saved");
            }
            println!("Imported {} contacts.", report.imported);
            for (contact, reason) in &report.rejected {
                println!("Rejected {}: {}", contact.compact(), reason);
            }
            return Ok(());
        }
        [flag] if flag == "--json" => {
            book.reload();
            println!("{}", serde_json::to_string_pretty(book.contacts())?);
            return Ok(());
        }
        _ => bail!(USAGE),
    }

    let stdin = io::stdin();
    let mut app = App::new(book, Console::new(stdin.lock(), io::stdout()));
    app.run();

    info!("Address book closed");
    Ok(())
}
