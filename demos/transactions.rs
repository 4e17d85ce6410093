//! Transaction example
//!
//! Demonstrates batching records across several sinks and flushing them
//! together, stamped with the transaction id.
//!
//! Run with: cargo run --example transactions

use telemetry::prelude::*;

fn main() -> Result<()> {
    println!("=== Telemetry - Transaction Example ===\n");

    let console = Emitter::stdout();
    let audit = Emitter::file("audit.log")?.with_field("component", "ledger");

    println!("1. Queue records, then flush once:");
    let mut tx = Transaction::begin_with_metadata(Metadata::new().with_field("transfer", 1042));
    tx.append(&audit.info().with_content("debit account 17"));
    tx.append(&audit.info().with_content("credit account 23"));
    tx.append(&console.warn().with_content("transfer took 840ms"));

    println!("   {} records queued, nothing written yet", tx.len());

    match tx.flush() {
        CommitOutcome::Flushed { written, failed } => {
            println!("   transaction {}: {} written, {} failed", tx.id(), written, failed)
        }
        CommitOutcome::AlreadyCommitted => println!("   already committed"),
    }

    println!("\n2. A second flush writes nothing:");
    println!("   {:?}", tx.flush());

    println!("\n3. Rolling back discards the batch:");
    let rfc3339 = Settings::new().with_timestamp_format(TimestampFormat::Rfc3339);
    let mut abandoned = Transaction::begin().with_settings(rfc3339);
    abandoned.append(&console.error().with_content("never written"));
    abandoned.rollback();
    println!("   {:?}", abandoned.flush());

    println!("\n=== Example completed successfully! ===");
    println!("Check 'audit.log' for the ledger records");

    Ok(())
}
