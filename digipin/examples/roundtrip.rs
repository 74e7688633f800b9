//! Basic example demonstrating digipin library usage.
//!
//! Run with: cargo run --example roundtrip

use digipin::{decode, encode, DigipinError};

fn main() -> Result<(), DigipinError> {
    let locations = [
        ("Dak Bhawan, New Delhi", 28.622788, 77.213033),
        ("Bengaluru", 12.9716, 77.5946),
        ("Mumbai", 19.0760, 72.8777),
        ("Kolkata", 22.5726, 88.3639),
    ];

    println!("Coordinate to DIGIPIN and back:");
    println!("{:-<60}", "");

    for (name, lat, lon) in &locations {
        let code = encode(*lat, *lon)?;
        let center = decode(&code)?;
        println!(
            "{}: {} -> ({:.6}, {:.6})",
            name, code, center.latitude, center.longitude
        );
    }

    // Invalid input is rejected, not panicked on
    match encode(48.8566, 2.3522) {
        Ok(_) => unreachable!(),
        Err(e) => println!("\nParis is outside the region: {}", e),
    }

    Ok(())
}
