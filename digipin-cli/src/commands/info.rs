use anyhow::Result;
use digipin::{GRID_SIZE, LEVELS, REGION};

pub fn run() -> Result<()> {
    println!("DIGIPIN grid");
    println!("{:-<52}", "");
    println!(
        "Region: lat {} to {}, lon {} to {}",
        REGION.min_lat, REGION.max_lat, REGION.min_lon, REGION.max_lon
    );
    println!(
        "Subdivision: {}x{} per level, {} levels",
        GRID_SIZE, GRID_SIZE, LEVELS
    );
    println!("Code format: XXX-XXX-XXXX");
    println!();

    println!("{:<6} {:>16} {:>16}", "Level", "Cell lat (deg)", "Cell lon (deg)");
    for level in 1..=LEVELS {
        let cells = (GRID_SIZE as f64).powi(level as i32);
        println!(
            "{:<6} {:>16.8} {:>16.8}",
            level,
            REGION.lat_span() / cells,
            REGION.lon_span() / cells
        );
    }
    println!();

    // Ground size of the final cell, meters per degree taken at the region
    // center latitude.
    let final_cells = (GRID_SIZE as f64).powi(LEVELS as i32);
    let (center_lat, _) = REGION.center();
    let lat_m = REGION.lat_span() / final_cells * 110_574.0;
    let lon_m = REGION.lon_span() / final_cells * 111_320.0 * center_lat.to_radians().cos();
    println!("Final cell is roughly {:.1}m x {:.1}m on the ground", lat_m, lon_m);

    Ok(())
}
