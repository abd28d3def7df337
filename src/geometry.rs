//! Figure geometry: star points and connection line segments in scene space.
//!
//! Points and segment endpoints go through the same scale factor, so a figure
//! built at any scale is a uniform scaling of the figure at scale 1.

use crate::constellation::Connection;
use crate::error::{ChartError, ChartResult};
use crate::{Constellation, Vector3};

/// Straight segment between two scene-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vector3,
    pub end: Vector3,
}

impl LineSegment {
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Renderable geometry for one constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureGeometry {
    /// Scaled position of each star, in star order.
    pub points: Vec<Vector3>,
    /// One segment per valid connection, in connection order.
    pub segments: Vec<LineSegment>,
    /// Connections that were skipped, as `MalformedConnection` errors.
    pub skipped: Vec<ChartError>,
}

/// Check that a scale factor is usable.
pub(crate) fn validate_scale(scale: f64) -> ChartResult<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ChartError::InvalidInput(format!(
            "scale factor must be positive and finite, got {}",
            scale
        )))
    }
}

/// Build the points and line segments of `constellation` at `scale`.
///
/// Malformed, degenerate, or out-of-range connections are skipped and listed in
/// [`FigureGeometry::skipped`]. Only an unusable scale factor is an error.
pub fn build_figure(constellation: &Constellation, scale: f64) -> ChartResult<FigureGeometry> {
    validate_scale(scale)?;

    let points: Vec<Vector3> = constellation
        .stars
        .iter()
        .map(|s| s.scaled_position(scale))
        .collect();

    let (connections, skipped) = constellation.resolve_connections();
    let segments = segments_for(&points, &connections);

    Ok(FigureGeometry {
        points,
        segments,
        skipped,
    })
}

/// Map validated connections onto already-scaled points.
fn segments_for(points: &[Vector3], connections: &[Connection]) -> Vec<LineSegment> {
    connections
        .iter()
        .map(|c| LineSegment {
            start: points[c.from],
            end: points[c.to],
        })
        .collect()
}
