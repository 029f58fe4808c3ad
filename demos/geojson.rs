use sat_footprint::{GeoPoint, VisibilityCircle};
use serde_json::{Map, json};
use std::env;

/// Prints the footprint of a satellite as a GeoJSON feature
///
/// Usage: geojson <lat> <lon> [altitude-km] [min-elevation-deg]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        eprintln!(
            "Usage: {} <lat> <lon> [altitude-km] [min-elevation-deg]",
            args[0]
        );
        std::process::exit(1);
    }

    let lat: f64 = args[1].parse()?;
    let lon: f64 = args[2].parse()?;
    let altitude: f64 = args.get(3).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(420.0);
    let min_elevation: f64 = args.get(4).map(|s| s.parse::<f64>()).transpose()?.unwrap_or(10.0);

    let observer = GeoPoint::try_new(lat, lon)?;
    let circle = VisibilityCircle::for_satellite(observer, altitude, min_elevation)?;

    let mut warnings = Vec::new();
    let ring = circle.compute(&mut warnings)?;
    for warning in &warnings {
        eprintln!("warning: {warning:?}");
    }

    let mut properties = Map::new();
    properties.insert("observer".into(), json!([lon, lat]));
    properties.insert("altitude_km".into(), json!(altitude));
    properties.insert("min_elevation_deg".into(), json!(min_elevation));
    properties.insert("radius_km".into(), json!(circle.radius_km()));

    let feature = ring.to_geojson_feature(properties);
    println!("{}", serde_json::to_string_pretty(&feature)?);

    Ok(())
}
