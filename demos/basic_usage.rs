//! Basic emitter usage example
//!
//! Demonstrates deriving emitters for different levels and metadata and
//! writing records to the console.
//!
//! Run with: cargo run --example basic_usage

use telemetry::prelude::*;
use telemetry::{info, logf, warn};

fn main() -> Result<()> {
    println!("=== Telemetry - Basic Usage Example ===\n");

    // A base emitter bound to standard output
    let out = Emitter::stdout();

    println!("1. Logging at different levels:");
    out.no_level().log("This record has no level");
    out.debug().log("This is a debug message");
    out.info().log("This is an info message");
    out.warn().log("This is a warning message");
    out.error().log("This is an error message");
    out.with_level(Level::custom("MAJOR")).log("This is a custom level");

    println!("\n2. Deriving emitters with metadata:");
    let billing = out.with_field("service", "billing").with_field("region", "eu-west");
    billing.info().log("invoice generated");
    billing.with_field("retry", 2).warn().log("payment gateway slow");

    // The base emitter is unchanged by any derivation
    out.info().log("base emitter still has no metadata");

    println!("\n3. Formatted content:");
    logf!(out.info(), "{} of {} workers idle", 3, 8);
    info!(out, "listening on port {}", 8080);
    warn!(out, "disk {}% full", 91);

    println!("\n4. Custom timestamp and raw output:");
    let short = out.with_settings(Settings::new().with_timestamp_pattern("%H:%M:%S%.3f"));
    short.info().log("millisecond timestamps");

    let raw = out.with_settings(Settings::new().with_formatting_disabled(true));
    raw.log("raw bytes, no timestamp, no newline\n");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
