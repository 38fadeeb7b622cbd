//! Prints the GML of a GeoJSON geometry, feature or feature collection.
//!
//! ```text
//! cargo run --example to_gml -- [GEOJSON_FILE] [PARAMS_JSON]
//! ```
//!
//! The GeoJSON is read from stdin if no file (or `-`) is given. `PARAMS_JSON` is a JSON object such as
//! `{"srsName": "EPSG:4326", "order": "lat,lon"}`.

use std::error::Error;
use std::io::Read;

use geojson::{Feature, FeatureCollection};
use geojson_gml::{feature, render_json, RenderParams};
use serde_json::Value;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let input = match args.next().filter(|path| path != "-") {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let params = match args.next() {
        Some(json) => RenderParams::from_json(&json)?,
        None => RenderParams::default(),
    };

    let json: Value = serde_json::from_str(&input)?;
    match json.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            let collection: FeatureCollection = serde_json::from_value(json)?;
            for item in &collection.features {
                println!("{}", feature(item, &params)?);
            }
        }
        Some("Feature") => {
            let item: Feature = serde_json::from_value(json)?;
            println!("{}", feature(&item, &params)?);
        }
        _ => println!("{}", render_json(&json, None, &params)?),
    }

    Ok(())
}
