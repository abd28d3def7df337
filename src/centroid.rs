//! Anchor point for a constellation's label and marker.
//!
//! Two policies are offered because they answer different questions:
//! [`AnchorPolicy::Raw`] is the physical mean position of the stars, while
//! [`AnchorPolicy::DirectionNormalized`] averages only the directions and so
//! lands on the unit sphere's side of the sky where the figure appears,
//! regardless of how far apart the stars are in depth.

use crate::error::{ChartError, ChartResult};
use crate::{Star, Vector3};

/// How star positions are reduced to a single anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPolicy {
    /// Arithmetic mean of the Cartesian positions.
    Raw,
    /// Mean of the unit direction vectors. A star at the origin contributes zero.
    #[default]
    DirectionNormalized,
}

/// Placement point for a constellation label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub position: Vector3,
}

impl Anchor {
    /// Distance of the anchor from the scene origin.
    pub fn distance_from_origin(&self) -> f64 {
        self.position.norm()
    }
}

/// Compute the anchor of `stars` under `policy`.
///
/// Fails with `InvalidInput` for an empty slice. The result does not depend on
/// the order of `stars`: each component is summed in sorted order.
pub fn compute_anchor(stars: &[Star], policy: AnchorPolicy) -> ChartResult<Anchor> {
    if stars.is_empty() {
        return Err(ChartError::InvalidInput(
            "cannot compute the centroid of an empty star list".to_string(),
        ));
    }

    let vectors: Vec<Vector3> = match policy {
        AnchorPolicy::Raw => stars.iter().map(|s| s.cartesian).collect(),
        AnchorPolicy::DirectionNormalized => stars.iter().map(Star::direction).collect(),
    };

    let n = vectors.len() as f64;
    let position = Vector3::new(
        ordered_sum(vectors.iter().map(|v| v.x)) / n,
        ordered_sum(vectors.iter().map(|v| v.y)) / n,
        ordered_sum(vectors.iter().map(|v| v.z)) / n,
    );
    Ok(Anchor { position })
}

/// Sum after sorting, so the floating-point result is independent of input order.
fn ordered_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}
