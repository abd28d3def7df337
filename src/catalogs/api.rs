//! JSON payloads of the constellation service.
//!
//! Two shapes are served:
//!
//! - `GET /api/constellations` returns `{ "constellations": [ ... ] }`, where
//!   `general_info` is usually omitted.
//! - `GET /api/constellations?name=<name>` returns a single constellation
//!   object with its full `general_info`.
//!
//! Wire field names follow the service (`astronomical_data`, `pm_ra`, ...).
//! Unknown fields such as the database `_id` are ignored.

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ChartError, ChartResult};
use crate::{Constellation, Star, Vector3};

#[derive(Debug, Deserialize)]
struct WireStar {
    name: String,
    ra: f64,
    dec: f64,
    pm_ra: f64,
    pm_dec: f64,
    distance: f64,
    distance_estimated: bool,
    cartesian: Vec<f64>,
    cartesian_velocity: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct WireConstellation {
    name: String,
    astronomical_data: Vec<WireStar>,
    #[serde(default)]
    general_info: Option<String>,
    connections: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WireCollection {
    constellations: Vec<WireConstellation>,
}

fn triple(values: &[f64], field: &str, path: &str) -> ChartResult<Vector3> {
    match values {
        [x, y, z] if values.iter().all(|v| v.is_finite()) => Ok(Vector3::new(*x, *y, *z)),
        [_, _, _] => Err(ChartError::Decode(format!(
            "{}: {} contains a non-finite value",
            path, field
        ))),
        _ => Err(ChartError::Decode(format!(
            "{}: {} must have 3 components, got {}",
            path,
            field,
            values.len()
        ))),
    }
}

fn finite(value: f64, field: &str, path: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::Decode(format!("{}: {} is not finite", path, field)))
    }
}

impl WireStar {
    fn validate(self, path: &str) -> ChartResult<Star> {
        if self.name.trim().is_empty() {
            return Err(ChartError::Decode(format!("{}: star name is empty", path)));
        }
        let path = format!("{} ('{}')", path, self.name);
        let distance = finite(self.distance, "distance", &path)?;
        if distance < 0.0 {
            return Err(ChartError::Decode(format!(
                "{}: distance must be >= 0, got {}",
                path, distance
            )));
        }

        Ok(Star {
            ra_deg: finite(self.ra, "ra", &path)?,
            dec_deg: finite(self.dec, "dec", &path)?,
            pm_ra: finite(self.pm_ra, "pm_ra", &path)?,
            pm_dec: finite(self.pm_dec, "pm_dec", &path)?,
            distance,
            distance_estimated: self.distance_estimated,
            cartesian: triple(&self.cartesian, "cartesian", &path)?,
            cartesian_velocity: triple(&self.cartesian_velocity, "cartesian_velocity", &path)?,
            name: self.name,
        })
    }
}

impl WireConstellation {
    fn validate(self) -> ChartResult<Constellation> {
        if self.name.trim().is_empty() {
            return Err(ChartError::Decode("constellation name is empty".to_string()));
        }
        let stars = self
            .astronomical_data
            .into_iter()
            .enumerate()
            .map(|(i, s)| s.validate(&format!("{} star {}", self.name, i)))
            .collect::<ChartResult<Vec<Star>>>()?;

        Ok(Constellation {
            name: self.name,
            stars,
            connections: self.connections,
            general_info: self.general_info,
        })
    }
}

/// Decode the body of `GET /api/constellations`.
pub fn decode_collection(json: &str) -> ChartResult<Vec<Constellation>> {
    let wire: WireCollection = serde_json::from_str(json)?;
    let constellations = wire
        .constellations
        .into_iter()
        .map(WireConstellation::validate)
        .collect::<ChartResult<Vec<_>>>()?;
    debug!("Decoded {} constellations", constellations.len());
    Ok(constellations)
}

/// Decode the body of `GET /api/constellations?name=<name>`.
pub fn decode_detail(json: &str) -> ChartResult<Constellation> {
    let wire: WireConstellation = serde_json::from_str(json)?;
    wire.validate()
}

/// Load a saved `GET /api/constellations` response from disk.
pub fn load_constellations_from_file<P: AsRef<std::path::Path>>(
    path: P,
) -> anyhow::Result<Vec<Constellation>> {
    let path = path.as_ref();
    info!("Loading constellations from {}", path.display());
    let data = std::fs::read_to_string(path)?;
    Ok(decode_collection(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORION: &str = r#"{
        "_id": "665f1c",
        "name": "Orion",
        "astronomical_data": [
            {"name": "Betelgeuse", "ra": 88.79, "dec": 7.41, "pm_ra": 27.54, "pm_dec": 11.3,
             "distance": 168.1, "distance_estimated": false,
             "cartesian": [3.5, 21.7, -166.6], "cartesian_velocity": [0.0, 0.0, 0.0]},
            {"name": "Rigel", "ra": 78.63, "dec": -8.2, "pm_ra": 1.31, "pm_dec": 0.5,
             "distance": 264.6, "distance_estimated": true,
             "cartesian": [51.4, -37.7, -256.8], "cartesian_velocity": [0.1, 0.2, 0.3]}
        ],
        "general_info": "Hunter facing <Taurus>.",
        "connections": ["0-1"]
    }"#;

    #[test]
    fn decodes_detail() {
        let c = decode_detail(ORION).unwrap();
        assert_eq!(c.name, "Orion");
        assert_eq!(c.stars.len(), 2);
        assert_eq!(c.stars[1].name, "Rigel");
        assert!(c.stars[1].distance_estimated);
        assert_eq!(c.stars[0].cartesian, Vector3::new(3.5, 21.7, -166.6));
        assert_eq!(c.general_info.as_deref(), Some("Hunter facing <Taurus>."));
        assert_eq!(c.connections, vec!["0-1".to_string()]);
    }

    #[test]
    fn general_info_may_be_absent_or_null() {
        let json = r#"{"constellations": [
            {"name": "A", "astronomical_data": [], "connections": []},
            {"name": "B", "astronomical_data": [], "general_info": null, "connections": []}
        ]}"#;
        let all = decode_collection(json).unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|c| c.general_info.is_none()));
    }

    #[test]
    fn rejects_missing_field() {
        let json = r#"{"name": "A", "astronomical_data": []}"#;
        let err = decode_detail(json).unwrap_err();
        assert!(matches!(err, ChartError::Decode(ref m) if m.contains("connections")), "{:?}", err);
    }

    #[test]
    fn rejects_mistyped_field() {
        let json = ORION.replace("\"distance\": 168.1", "\"distance\": \"far\"");
        assert!(matches!(decode_detail(&json), Err(ChartError::Decode(_))));
    }

    #[test]
    fn rejects_short_cartesian() {
        let json = ORION.replace("[3.5, 21.7, -166.6]", "[3.5, 21.7]");
        let err = decode_detail(&json).unwrap_err();
        match err {
            ChartError::Decode(msg) => {
                assert!(msg.contains("Betelgeuse"), "{}", msg);
                assert!(msg.contains("3 components"), "{}", msg);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_distance() {
        let json = ORION.replace("\"distance\": 264.6", "\"distance\": -1.0");
        assert!(matches!(decode_detail(&json), Err(ChartError::Decode(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(decode_collection("{\"constellations\": ["), Err(ChartError::Decode(_))));
        assert!(matches!(decode_collection("[]"), Err(ChartError::Decode(_))));
    }
}
