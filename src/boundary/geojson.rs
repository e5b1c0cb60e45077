use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::Path;

/// Load a boundary vertex list from a GeoJSON file
pub fn load_boundary(path: &Path) -> Result<Vec<(f64, f64)>> {
    let contents = std::fs::read_to_string(path)
        .context(format!("Failed to read boundary file: {:?}", path))?;
    parse_boundary(&contents).context(format!("Failed to parse boundary file: {:?}", path))
}

/// Parse a GeoJSON document into a boundary vertex list
///
/// Accepts a bare `Polygon` geometry, a `Feature` wrapping one, or a
/// `FeatureCollection` (the first polygon feature is used, matching
/// how a drawn boundary is exported). Only the exterior ring is taken;
/// holes are ignored.
///
/// GeoJSON positions are [lng, lat]; the returned pairs are (lat, lng).
pub fn parse_boundary(json: &str) -> Result<Vec<(f64, f64)>> {
    let root: Value = serde_json::from_str(json).context("Boundary is not valid JSON")?;

    let polygon = find_polygon(&root)
        .ok_or_else(|| anyhow::anyhow!("No Polygon geometry found in boundary document"))?;

    exterior_ring(polygon)
}

fn find_polygon(value: &Value) -> Option<&Value> {
    match value.get("type").and_then(Value::as_str) {
        Some("Polygon") => Some(value),
        Some("Feature") => value.get("geometry").and_then(find_polygon),
        Some("FeatureCollection") => value
            .get("features")?
            .as_array()?
            .iter()
            .find_map(find_polygon),
        _ => None,
    }
}

fn exterior_ring(polygon: &Value) -> Result<Vec<(f64, f64)>> {
    let rings = polygon
        .get("coordinates")
        .and_then(Value::as_array)
        .context("Polygon geometry has no coordinates array")?;

    let exterior = rings
        .first()
        .and_then(Value::as_array)
        .context("Polygon geometry has no exterior ring")?;

    let mut points = Vec::with_capacity(exterior.len());
    for position in exterior {
        points.push(parse_position(position)?);
    }

    if is_closed_ring(&points) {
        points.pop();
    }

    Ok(points)
}

fn is_closed_ring(points: &[(f64, f64)]) -> bool {
    if points.len() < 2 {
        return false;
    }
    let first = points.first().unwrap();
    let last = points.last().unwrap();
    (first.0 - last.0).abs() < 1e-9 && (first.1 - last.1).abs() < 1e-9
}

/// Parse one GeoJSON position into a (lat, lng) pair
///
/// A position must have at least 2 elements (a third altitude element
/// is ignored). Coordinates may arrive as JSON numbers or as numeric
/// strings, which some exporters emit.
fn parse_position(position: &Value) -> Result<(f64, f64)> {
    let parts = position
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("Position is not an array: {}", position))?;

    if parts.len() < 2 {
        bail!("Position has fewer than 2 coordinates: {}", position);
    }

    let lng = coordinate(&parts[0])?;
    let lat = coordinate(&parts[1])?;

    Ok((lat, lng))
}

fn coordinate(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| anyhow::anyhow!("Coordinate out of range: {}", n)),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .context(format!("Non-numeric coordinate: {:?}", s)),
        other => bail!("Non-numeric coordinate: {}", other),
    }
}
