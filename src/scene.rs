//! Scene assembly: renderable primitives for every constellation of a catalog.
//!
//! Each figure combines the output of [`build_figure`] with an anchor from
//! [`compute_anchor`] and the marker sizes the renderer needs:
//!
//! - star marker radius proportional to the star's distance, so far stars do
//!   not vanish at the scale of the figure,
//! - a label either of fixed size or sized by the anchor's distance,
//! - a ring around the anchor sized by the anchor's distance.

use tracing::{debug, warn};

use crate::centroid::{compute_anchor, Anchor, AnchorPolicy};
use crate::error::{ChartError, ChartResult};
use crate::geometry::{build_figure, validate_scale, LineSegment};
use crate::{Constellation, SkyCatalog, Vector3};

// ── Configuration ───────────────────────────────────────────────────────────

/// How the label text of a constellation is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelSizing {
    /// Same size for every label, in scene units.
    Fixed(f64),
    /// `|anchor| / divisor`.
    Proportional { divisor: f64 },
}

/// Parameters controlling scene assembly.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Scale applied to every position. Default 1.
    pub scale: f64,
    /// Anchor policy for labels. Default `DirectionNormalized`.
    pub anchor_policy: AnchorPolicy,
    /// Star marker radius = distance / divisor. Default 300.
    pub star_radius_divisor: f64,
    /// Label size. Default fixed at 0.018.
    pub label_sizing: LabelSizing,
    /// Anchor ring radius = |anchor| / divisor. Default 100.
    pub ring_radius_divisor: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            anchor_policy: AnchorPolicy::DirectionNormalized,
            star_radius_divisor: 300.0,
            label_sizing: LabelSizing::Fixed(0.018),
            ring_radius_divisor: 100.0,
        }
    }
}

impl SceneConfig {
    /// Physical-midpoint labels sized by distance, with the given scale.
    pub fn physical(scale: f64) -> Self {
        Self {
            scale,
            anchor_policy: AnchorPolicy::Raw,
            label_sizing: LabelSizing::Proportional { divisor: 50.0 },
            ..Default::default()
        }
    }

    fn validate(&self) -> ChartResult<()> {
        validate_scale(self.scale)?;
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ChartError::InvalidInput(format!(
                    "{} must be positive and finite, got {}",
                    name, v
                )))
            }
        };
        positive("star_radius_divisor", self.star_radius_divisor)?;
        positive("ring_radius_divisor", self.ring_radius_divisor)?;
        match self.label_sizing {
            LabelSizing::Fixed(size) => positive("label size", size),
            LabelSizing::Proportional { divisor } => positive("label divisor", divisor),
        }
    }
}

// ── Scene primitives ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct StarMarker {
    pub name: String,
    pub position: Vector3,
    pub radius: f64,
    pub distance_estimated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelMarker {
    pub text: String,
    pub position: Vector3,
    pub font_size: f64,
    pub ring_radius: f64,
}

/// Everything the renderer needs for one constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationFigure {
    pub name: String,
    pub stars: Vec<StarMarker>,
    pub segments: Vec<LineSegment>,
    pub anchor: Anchor,
    pub label: LabelMarker,
    /// Connections that could not be drawn.
    pub skipped_connections: Vec<ChartError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkyScene {
    pub figures: Vec<ConstellationFigure>,
    /// Catalog version the scene was built from.
    pub catalog_version: u64,
}

impl SkyScene {
    pub fn figure(&self, name: &str) -> Option<&ConstellationFigure> {
        self.figures.iter().find(|f| f.name == name)
    }
}

// ── Assembly ────────────────────────────────────────────────────────────────

/// Build the figure of one constellation.
///
/// Fails with `InvalidInput` for a constellation without stars (no anchor) or
/// for an invalid configuration.
pub fn build_constellation_figure(
    constellation: &Constellation,
    config: &SceneConfig,
) -> ChartResult<ConstellationFigure> {
    config.validate()?;
    let geometry = build_figure(constellation, config.scale)?;
    let anchor = compute_anchor(&constellation.stars, config.anchor_policy)?;
    let anchor = Anchor {
        position: anchor.position * config.scale,
    };

    let stars = constellation
        .stars
        .iter()
        .zip(geometry.points)
        .map(|(star, position)| StarMarker {
            name: star.name.clone(),
            position,
            radius: star.distance * config.scale / config.star_radius_divisor,
            distance_estimated: star.distance_estimated,
        })
        .collect();

    let reach = anchor.distance_from_origin();
    let font_size = match config.label_sizing {
        LabelSizing::Fixed(size) => size,
        LabelSizing::Proportional { divisor } => reach / divisor,
    };

    Ok(ConstellationFigure {
        name: constellation.name.clone(),
        stars,
        segments: geometry.segments,
        label: LabelMarker {
            text: constellation.name.clone(),
            position: anchor.position,
            font_size,
            ring_radius: reach / config.ring_radius_divisor,
        },
        anchor,
        skipped_connections: geometry.skipped,
    })
}

/// Build figures for every constellation in `catalog`.
///
/// Constellations without stars are left out with a warning; a bad
/// configuration fails the whole call.
pub fn build_scene(catalog: &SkyCatalog, config: &SceneConfig) -> ChartResult<SkyScene> {
    config.validate()?;
    let mut figures = Vec::with_capacity(catalog.len());
    for constellation in catalog {
        if constellation.stars.is_empty() {
            warn!("{} has no stars, leaving it out of the scene", constellation.name);
            continue;
        }
        figures.push(build_constellation_figure(constellation, config)?);
    }
    debug!(
        "Built scene with {} figures (catalog version {})",
        figures.len(),
        catalog.version()
    );
    Ok(SkyScene {
        figures,
        catalog_version: catalog.version(),
    })
}
