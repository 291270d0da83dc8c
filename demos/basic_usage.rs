// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the dots crate.
//!
//! This example demonstrates:
//! - Loading a YAML document from disk
//! - Fail-fast typed accessors
//! - Best-effort batch accessors
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- demos/example.yml
//! ```

use dots::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/example.yml".to_string());

    // A document that fails to load is unusable, so bail out.
    let doc = ConfigDocument::load(&path)?;

    println!("--- Single values ---");
    println!("a.b.c       = {}", doc.get_string("a.b.c")?);
    println!("a.b.d       = {}", doc.get_int("a.b.d")?);
    println!("a.b.enabled = {}", doc.get_bool("a.b.enabled")?);

    println!("\n--- Errors are per call ---");
    match doc.get_int("a.b.c") {
        Ok(value) => println!("unexpected: {}", value),
        Err(e) => println!("a.b.c as int: {}", e),
    }
    match doc.get_string("a.b.missing") {
        Ok(value) => println!("unexpected: {}", value),
        Err(e) => println!("a.b.missing: {}", e),
    }

    println!("\n--- Batch (missing paths become zero values) ---");
    let hosts = doc.get_strings(&["servers.primary.host", "servers.backup.host"]);
    let ports = doc.get_ints(&["servers.primary.port", "servers.backup.port"]);
    for (host, port) in hosts.iter().zip(ports) {
        println!("{:?}:{}", host, port);
    }

    Ok(())
}
