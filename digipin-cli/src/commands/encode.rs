use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct EncodeOutput {
    latitude: f64,
    longitude: f64,
    digipin: String,
}

pub fn run(lat: f64, lon: f64, json: bool) -> Result<()> {
    let code = digipin::encode(lat, lon).context("Failed to encode coordinate")?;

    if json {
        let output = EncodeOutput {
            latitude: lat,
            longitude: lon,
            digipin: code,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", code);
    }

    Ok(())
}
