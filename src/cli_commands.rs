use super::core::GeometricObject;
use super::engine::{GeometryEngine, NativeEngine, Operation};
use super::geometry::Geometry;

/// Parse the input as WKT, or as hex-encoded WKB when `wkb` is set
fn parse_input(input: &str, wkb: bool) -> Result<Geometry, String> {
    if wkb {
        let bytes = hex::decode(input).map_err(|e| format!("Invalid hex input: {}", e))?;
        Geometry::from_binary(&bytes).map_err(|e| format!("Failed to parse WKB: {}", e))
    } else {
        Geometry::from_text(input).map_err(|e| format!("Failed to parse WKT: {}", e))
    }
}

/// Parse an input string and print some details about the geometry
pub fn parse_show_detail(input: &str, wkb: bool) -> Result<(), String> {
    let geom = parse_input(input, wkb)?;
    println!("Parsed a Geometry of Type {}!", geom.geometry_type());
    println!("Coordinate dimension: {:?}", geom.dim());
    if geom.is_empty() {
        println!("The geometry is empty.");
    }
    match &geom {
        Geometry::MultiCurve(mc) => {
            println!("The multicurve contains {} curve elements.", mc.num_curves());
        }
        Geometry::MultiPoint(mp) => {
            println!("The multipoint contains {} total points.", mp.points().len());
        }
        _ => (),
    }
    println!("WKT: {}", geom.wkt());
    Ok(())
}

/// Parse the given input and print the total length of its curves
pub fn compute_length(input: &str, wkb: bool) -> Result<(), String> {
    let geom = parse_input(input, wkb)?;
    let engine = NativeEngine::new();
    if !engine.supports(Operation::Length, &geom) {
        return Err(format!(
            "The {} engine cannot compute length for a {}",
            engine.name(),
            geom.geometry_type()
        ));
    }
    match engine.length(&geom) {
        Ok(length) => {
            println!("Total length: {length}");
            Ok(())
        }
        Err(e) => Err(format!("Failed to compute length: {}", e)),
    }
}

/// Parse the given input and report whether all its curves are closed
pub fn check_closed(input: &str, wkb: bool) -> Result<(), String> {
    let geom = parse_input(input, wkb)?;
    let engine = NativeEngine::new();
    match engine.is_closed(&geom) {
        Ok(true) => {
            println!("The geometry is closed.");
            Ok(())
        }
        Ok(false) => {
            println!("The geometry is not closed.");
            Ok(())
        }
        Err(e) => Err(format!("Failed to check closure: {}", e)),
    }
}
