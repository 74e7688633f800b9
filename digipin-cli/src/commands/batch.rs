use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    lat_col: &str,
    lon_col: &str,
    code_col: Option<&str>,
) -> Result<()> {
    // Detect file format
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "csv" => match code_col {
            Some(code_col) => decode_csv(&input, output, code_col),
            None => encode_csv(&input, output, lat_col, lon_col),
        },
        "geojson" | "json" => {
            if code_col.is_some() {
                bail!("--code-col applies to CSV input only");
            }
            encode_geojson(&input, output)
        }
        _ => bail!(
            "Unsupported file format: {}. Use .csv or .geojson",
            extension
        ),
    }
}

/// Append a `digipin` column computed from the coordinate columns.
fn encode_csv(
    input: &Path,
    output: Option<PathBuf>,
    lat_col: &str,
    lon_col: &str,
) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    // Find column indices
    let headers = reader.headers()?.clone();
    let lat_idx = headers
        .iter()
        .position(|h| h == lat_col)
        .with_context(|| format!("Column '{}' not found in CSV", lat_col))?;
    let lon_idx = headers
        .iter()
        .position(|h| h == lon_col)
        .with_context(|| format!("Column '{}' not found in CSV", lon_col))?;

    // Collect records for progress bar
    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_path = output.unwrap_or_else(|| default_output(input, "csv"));
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    // Write header
    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("digipin");
    writer.write_record(&new_headers)?;

    let mut skipped = 0u64;
    for record in records {
        let lat: f64 = record
            .get(lat_idx)
            .context("Missing latitude")?
            .parse()
            .context("Invalid latitude")?;
        let lon: f64 = record
            .get(lon_idx)
            .context("Missing longitude")?
            .parse()
            .context("Invalid longitude")?;

        // Out-of-region rows get an empty code rather than aborting the run
        let code = match digipin::encode(lat, lon) {
            Ok(code) => code,
            Err(_) => {
                skipped += 1;
                String::new()
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&code);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    if skipped > 0 {
        println!("Skipped {} rows outside the bounding region", skipped);
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

/// Append `latitude` and `longitude` columns decoded from a code column.
fn decode_csv(input: &Path, output: Option<PathBuf>, code_col: &str) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    let code_idx = headers
        .iter()
        .position(|h| h == code_col)
        .with_context(|| format!("Column '{}' not found in CSV", code_col))?;

    let records: Vec<_> = reader.records().collect::<Result<_, _>>()?;
    let pb = progress_bar(records.len() as u64)?;

    let output_path = output.unwrap_or_else(|| default_output(input, "csv"));
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(output_file));

    let mut new_headers: Vec<&str> = headers.iter().collect();
    new_headers.push("latitude");
    new_headers.push("longitude");
    writer.write_record(&new_headers)?;

    let mut skipped = 0u64;
    for record in records {
        let code = record.get(code_idx).context("Missing code")?;

        let (lat, lon) = match digipin::decode(code) {
            Ok(center) => (
                format!("{:.6}", center.latitude),
                format!("{:.6}", center.longitude),
            ),
            Err(_) => {
                skipped += 1;
                (String::new(), String::new())
            }
        };

        let mut new_record: Vec<&str> = record.iter().collect();
        new_record.push(&lat);
        new_record.push(&lon);
        writer.write_record(&new_record)?;

        pb.inc(1);
    }

    pb.finish_with_message("done");
    writer.flush()?;

    if skipped > 0 {
        println!("Skipped {} rows with malformed codes", skipped);
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

/// Annotate Point features of a GeoJSON file with a `digipin` property.
fn encode_geojson(input: &Path, output: Option<PathBuf>) -> Result<()> {
    let file = File::open(input).context("Failed to open input file")?;
    let reader = BufReader::new(file);

    let geojson: geojson::GeoJson =
        serde_json::from_reader(reader).context("Failed to parse GeoJSON")?;

    let geojson::GeoJson::FeatureCollection(mut fc) = geojson else {
        bail!("Expected a FeatureCollection");
    };

    let pb = progress_bar(fc.features.len() as u64)?;

    let mut skipped = 0u64;
    for feature in &mut fc.features {
        // GeoJSON position order is [longitude, latitude]
        let position = match &feature.geometry {
            Some(geometry) => match &geometry.value {
                geojson::Value::Point(coords) if coords.len() >= 2 => {
                    Some((coords[1], coords[0]))
                }
                _ => None,
            },
            None => None,
        };

        match position.map(|(lat, lon)| digipin::encode(lat, lon)) {
            Some(Ok(code)) => feature.set_property("digipin", code),
            Some(Err(_)) | None => skipped += 1,
        }

        pb.inc(1);
    }
    pb.finish_with_message("done");

    let output_path = output.unwrap_or_else(|| default_output(input, "geojson"));
    let output_file = File::create(&output_path).context("Failed to create output file")?;
    let mut writer = BufWriter::new(output_file);
    serde_json::to_writer_pretty(&mut writer, &geojson::GeoJson::FeatureCollection(fc))?;
    writer.flush()?;

    if skipped > 0 {
        println!("Skipped {} features (non-point or out of region)", skipped);
    }
    println!("Output written to: {}", output_path.display());
    Ok(())
}

fn progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn default_output(input: &Path, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap().to_string_lossy();
    input.with_file_name(format!("{}_digipin.{}", stem, extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn test_encode_csv_appends_codes() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("places.csv");
        let mut file = File::create(&input).unwrap();
        writeln!(file, "name,latitude,longitude").unwrap();
        writeln!(file, "Delhi,28.6139,77.2090").unwrap();
        writeln!(file, "Paris,48.8566,2.3522").unwrap();

        run(input.clone(), None, "latitude", "longitude", None).unwrap();

        let output = std::fs::read_to_string(dir.path().join("places_digipin.csv")).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "name,latitude,longitude,digipin");
        assert_eq!(lines.next().unwrap(), "Delhi,28.6139,77.2090,39J-438-TJC7");
        // Paris is outside the region: row kept, code left empty
        assert_eq!(lines.next().unwrap(), "Paris,48.8566,2.3522,");
    }

    #[test]
    fn test_decode_csv_appends_coordinates() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("codes.csv");
        let mut file = File::create(&input).unwrap();
        writeln!(file, "digipin").unwrap();
        writeln!(file, "39J-49L-L8T4").unwrap();

        run(input.clone(), None, "latitude", "longitude", Some("digipin")).unwrap();

        let output = std::fs::read_to_string(dir.path().join("codes_digipin.csv")).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next().unwrap(), "digipin,latitude,longitude");
        assert_eq!(lines.next().unwrap(), "39J-49L-L8T4,28.622793,77.213049");
    }

    #[test]
    fn test_encode_csv_missing_column() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("places.csv");
        let mut file = File::create(&input).unwrap();
        writeln!(file, "name,lat,lon").unwrap();
        writeln!(file, "Delhi,28.6139,77.2090").unwrap();

        let result = run(input, None, "latitude", "longitude", None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("latitude"));
    }

    #[test]
    fn test_encode_geojson_annotates_points() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("places.geojson");
        std::fs::write(
            &input,
            r#"{
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "geometry": {"type": "Point", "coordinates": [77.2090, 28.6139]},
                        "properties": {"name": "Delhi"}
                    }
                ]
            }"#,
        )
        .unwrap();

        run(input.clone(), None, "latitude", "longitude", None).unwrap();

        let output =
            std::fs::read_to_string(dir.path().join("places_digipin.geojson")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            parsed["features"][0]["properties"]["digipin"],
            "39J-438-TJC7"
        );
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("places.txt");
        std::fs::write(&input, "whatever").unwrap();

        let result = run(input, None, "latitude", "longitude", None);
        assert!(result.is_err());
    }
}
