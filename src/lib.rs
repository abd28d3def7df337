//! # starchart
//!
//! The catalog transform and annotation engine behind an interactive 3D
//! constellation map.
//!
//! The surrounding application fetches constellation records from a data
//! service, renders a 3D scene and shows an info panel. This crate sits in
//! between: it turns the raw records into scene geometry and panel content,
//! and nothing else. It performs no I/O beyond optional file loading, keeps no
//! global state, and every transform is a pure function of its inputs.
//!
//! ## Features
//!
//! - **Typed decoding** — the service's JSON is validated into [`Star`] and
//!   [`Constellation`] records before anything else sees it
//! - **Figure geometry** — `"i-j"` connection strings become line segments;
//!   malformed, out-of-range and self-referencing pairs are skipped and reported
//! - **Label anchors** — raw mean or direction-normalized mean of star positions
//! - **Distance statistics** — average / nearest / farthest, parsecs to light-years
//! - **Cross-references** — `<Name>` markers in descriptions become navigable
//!   segments
//! - **Last-request-wins selection** — stale detail responses are discarded
//!
//! ## Example
//!
//! ```
//! use starchart::{build_scene, decode_collection, ConstellationDetail, DetailConfig,
//!                 SceneConfig, SkyCatalog, TextSegment};
//!
//! let json = r#"{"constellations": [{
//!     "name": "Lyra",
//!     "astronomical_data": [
//!         {"name": "Vega", "ra": 279.23, "dec": 38.78, "pm_ra": 200.94, "pm_dec": 286.23,
//!          "distance": 7.68, "distance_estimated": false,
//!          "cartesian": [0.92, 4.81, 5.92], "cartesian_velocity": [0.0, 0.0, 0.0]},
//!         {"name": "Sheliak", "ra": 282.52, "dec": 33.36, "pm_ra": 1.1, "pm_dec": -4.46,
//!          "distance": 294.0, "distance_estimated": true,
//!          "cartesian": [53.5, 161.5, 240.0], "cartesian_velocity": [0.0, 0.0, 0.0]}
//!     ],
//!     "general_info": "A small constellation next to <Cygnus>.",
//!     "connections": ["0-1"]
//! }]}"#;
//!
//! let catalog = SkyCatalog::new(decode_collection(json).unwrap());
//! let scene = build_scene(&catalog, &SceneConfig::default()).unwrap();
//! assert_eq!(scene.figures[0].segments.len(), 1);
//!
//! let detail = ConstellationDetail::build(catalog.get("Lyra").unwrap(), &DetailConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(detail.nearest_label, "25.05 ly");
//! let narrative = detail.narrative.unwrap();
//! assert!(matches!(&narrative.segments[1], TextSegment::Reference { target, .. } if target == "Cygnus"));
//! ```
//!
//! ## Coordinate conventions
//!
//! Cartesian positions are parsecs in the scene frame: ICRS X is scene X, ICRS Z
//! (celestial north) is scene +Y, and ICRS Y is scene -Z.

/// Decoders for the data service's payloads
pub mod catalogs;
mod centroid;
pub mod constellation;
pub mod detail;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod narrative;
pub mod scene;
pub mod selection;
pub mod skycatalog;
pub mod star;

pub use catalogs::{decode_collection, decode_detail, load_constellations_from_file};
pub use centroid::*;
pub use constellation::{Connection, Constellation};
pub use detail::{ConstellationDetail, DetailConfig, SourceLink, StarRow};
pub use distance::{format_light_years, to_light_years, DistanceSummary, LIGHT_YEARS_PER_PARSEC};
pub use error::{ChartError, ChartResult};
pub use geometry::{build_figure, FigureGeometry, LineSegment};
pub use narrative::{annotate, Narrative, NavigationAction, TextSegment};
pub use scene::{
    build_constellation_figure, build_scene, ConstellationFigure, LabelMarker, LabelSizing,
    SceneConfig, SkyScene, StarMarker,
};
pub use selection::{FetchOutcome, FetchTicket, SelectionTracker};
pub use skycatalog::SkyCatalog;
pub use star::*;

// Scene-space positions and velocities, parsecs.
pub type Vector3 = nalgebra::Vector3<f64>;
