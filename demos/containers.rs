//! Container walkthrough - parsing a small config map with Optional, Either and Try
//!
//! This example shows how absence, alternatives and failure compose when reading
//! loosely-typed settings.

use std::collections::HashMap;
use std::num::ParseIntError;

use wellspring::{Either, Optional, Try};

// Settings may name a port directly or refer to a well-known service.
fn resolve_port(raw: &str) -> Either<String, u16> {
    match raw.parse::<u16>() {
        Ok(port) => Either::right(port),
        Err(_) => Either::left(raw.to_string()),
    }
}

fn well_known(service: &str) -> Optional<u16> {
    match service {
        "http" => Optional::of(80),
        "https" => Optional::of(443),
        _ => Optional::empty(),
    }
}

fn parse_workers(raw: &str) -> Try<u32, ParseIntError> {
    Try::invoke(|| raw.parse::<u32>())
}

fn main() {
    // With --features tracing, captured panics are logged at debug level
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Container Walkthrough ===\n");

    let settings: HashMap<&str, &str> = [("port", "https"), ("workers", "eight")]
        .into_iter()
        .collect();

    // Optional: a setting may be missing entirely
    println!("Step 1: Looking up settings");
    let host = Optional::from_nullable(settings.get("host").copied());
    println!("  host    = {}", host.map(str::to_string));
    let port_raw = Optional::from_nullable(settings.get("port").copied());
    println!("  port    = {}", port_raw.map(str::to_string));

    println!("\n---\n");

    // Either: a port is a number or a service name
    println!("Step 2: Resolving the port");
    let resolved = port_raw.map(resolve_port);
    resolved.if_present(|either| println!("  raw form: {}", either));
    let port = resolved
        .flat_map(|either| {
            either.fold(|service| well_known(&service), Optional::of)
        })
        .get_or_else(8080);
    println!("  ✓ port {}", port);

    println!("\n---\n");

    // Try: the worker count may not parse
    println!("Step 3: Parsing the worker count");
    let workers = parse_workers(settings.get("workers").copied().unwrap_or("1"));
    match workers.get_cause() {
        Ok(err) => println!("  ✗ invalid worker count: {}", err),
        Err(_) => println!("  ✓ workers: {}", workers),
    }
    let workers = workers.to_optional().get_or_else(4);
    println!("  falling back to {} workers", workers);

    println!("\n---\n");

    // Try::catching: code that panics becomes a value
    println!("Step 4: Capturing a panic");
    let checked = Try::<u32>::catching(|| {
        let limits = [16u32, 32, 64];
        limits[workers as usize]
    });
    checked.if_failure(|cause| println!("  ✗ {}", cause));
    checked.if_success(|limit| println!("  ✓ limit {}", limit));

    println!("\n=== Done ===");
}
