//! File logging example
//!
//! Demonstrates writing to a file sink and the console at the same time,
//! with settings loaded from a configuration file when one is present.
//!
//! Run with: cargo run --example file_logging

use telemetry::config;
use telemetry::prelude::*;

fn main() -> Result<()> {
    println!("=== Telemetry - File Logging Example ===\n");

    let diagnostics = Diagnostics::stderr();

    // Falls back to defaults (and says so on stderr) when the file is absent
    let cfg = config::load_or_default("telemetry.json", &diagnostics).with_env_overrides()?;
    let settings = cfg.log_settings(&diagnostics).shared();

    let console = Emitter::stdout().with_settings(settings.clone());
    let to_file = Emitter::file("application.log")?.with_settings(settings);

    println!("1. Logging to both console and file:");

    for out in [&console, &to_file] {
        out.info().log("Application started");
        out.debug().log("Loading configuration...");
        out.warn().log("Using default settings for some options");
        out.error().log("Failed to load optional plugin");
    }

    println!("\n2. Performing some operations:");

    let worker = to_file.with_field("worker", 1);
    for i in 1..=5 {
        worker.info().log(format!("Processing item {}/5", i));
        if i == 3 {
            worker.warn().log("Item 3 took longer than expected");
        }
    }

    // Surface the error instead of sending it to the diagnostic channel
    let written = to_file.info().with_content("All operations completed").try_emit()?;
    console.info().log(format!("last record was {} bytes", written));

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
