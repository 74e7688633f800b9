use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct DecodeOutput {
    digipin: String,
    latitude: f64,
    longitude: f64,
}

pub fn run(code: &str, json: bool) -> Result<()> {
    let center = digipin::decode(code).context("Failed to decode code")?;

    if json {
        let output = DecodeOutput {
            digipin: code.to_string(),
            latitude: center.latitude,
            longitude: center.longitude,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{:.6}, {:.6}", center.latitude, center.longitude);
    }

    Ok(())
}
