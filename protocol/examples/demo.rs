//! Walkthrough of the ont-core data flow.
//!
//! Generates a key, protects it in both formats, recovers it, signs a
//! transaction, and round-trips the transaction through hex.
//!
//! Run with:
//!   cargo run --example demo --release

use std::time::Instant;

use ont_core::config::ScryptParams;
use ont_core::crypto::{Address, KeyDescriptor, KeyProtector, PrivateKey, SigningScheme};
use ont_core::logging::{init_logging, LogFormat};
use ont_core::transaction::{
    sign_transaction, verify_transaction, InvokeCode, Transaction, TransactionAttribute,
    TransactionBuilder,
};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const WHITE: &str = "\x1b[37m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn section(title: &str) {
    println!();
    println!("{BOLD}{WHITE}  {title}{RESET}");
}

fn ok(text: &str) {
    println!("{GREEN}  [OK] {text}{RESET}");
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("{WHITE}  {BOLD}{label}:{RESET} {YELLOW}{value}{RESET}");
}

fn timing(label: &str, start: Instant) {
    let ms = start.elapsed().as_secs_f64() * 1_000.0;
    println!("{DIM}{MAGENTA}  [{label}: {ms:.2} ms]{RESET}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging("warn", LogFormat::Pretty);

    section("1. Key");
    let key = PrivateKey::generate(KeyDescriptor::insecure_default())?;
    let public_key = key.public_key()?;
    let address = Address::from_public_key(&public_key);
    field("public key", public_key.to_hex());
    field("address", address);

    section("2. Protect");
    let protector = KeyProtector::new(ScryptParams::default())?;
    let start = Instant::now();
    let stream = protector.encrypt(key.key(), &public_key, "correct horse")?;
    timing("stream encrypt", start);
    let start = Instant::now();
    let block = protector.encrypt_ecb(key.key(), &public_key, "correct horse")?;
    timing("block encrypt", start);
    field("stream", &stream);
    field("block", &block);

    section("3. Recover");
    let recovered = protector.recover_private_key(
        &stream,
        &address.checksum(),
        "correct horse",
        KeyDescriptor::insecure_default(),
    )?;
    ok("stream-mode key recovered");
    let wrong = protector.recover_private_key_ecb(&block, "wrong horse", KeyDescriptor::insecure_default());
    if let Err(e) = wrong {
        ok(&format!("wrong password rejected: {e}"));
    }

    section("4. Sign");
    let mut tx = TransactionBuilder::new()
        .gas_price(500)
        .gas_limit(20_000)
        .payer(address)
        .payload(InvokeCode::new(vec![0x00, 0xc1, 0x08]))
        .attribute(TransactionAttribute::Description(b"demo".to_vec()))
        .build();
    sign_transaction(&mut tx, &recovered, SigningScheme::EcdsaSha256)?;
    field("hash", tx.hash());

    section("5. Wire");
    let hex = tx.to_hex();
    field("bytes", hex.len() / 2);
    let decoded = Transaction::from_hex(&hex)?;
    verify_transaction(&decoded)?;
    ok("decoded transaction verifies");

    println!();
    Ok(())
}
