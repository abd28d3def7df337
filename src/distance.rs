//! Distance statistics over a star list, and parsec to light-year formatting.

use crate::error::{ChartError, ChartResult};
use crate::Star;

/// Light-years per parsec.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26156;

/// Fractional digits used by [`format_light_years`].
pub const DEFAULT_FRACTIONAL_DIGITS: usize = 2;

/// Average, nearest and farthest star distance, all in parsecs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSummary {
    pub average: f64,
    pub nearest: f64,
    pub farthest: f64,
}

impl DistanceSummary {
    /// Summarise the distances of `stars`.
    ///
    /// Fails with `InvalidInput` when `stars` is empty or a distance is not finite.
    pub fn from_stars(stars: &[Star]) -> ChartResult<Self> {
        if stars.is_empty() {
            return Err(ChartError::InvalidInput(
                "cannot summarise distances of an empty star list".to_string(),
            ));
        }
        if let Some(star) = stars.iter().find(|s| !s.distance.is_finite()) {
            return Err(ChartError::InvalidInput(format!(
                "distance of {} is not finite ({})",
                star.name, star.distance
            )));
        }

        let mut nearest = f64::INFINITY;
        let mut farthest = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for d in stars.iter().map(|s| s.distance) {
            nearest = nearest.min(d);
            farthest = farthest.max(d);
            sum += d;
        }
        // Rounding in the sum can push the mean a hair outside [min, max]
        let average = (sum / stars.len() as f64).clamp(nearest, farthest);

        Ok(Self {
            average,
            nearest,
            farthest,
        })
    }

    /// The same summary with every value converted to light-years.
    pub fn in_light_years(&self) -> Self {
        Self {
            average: parsecs_to_light_years(self.average),
            nearest: parsecs_to_light_years(self.nearest),
            farthest: parsecs_to_light_years(self.farthest),
        }
    }
}

pub fn parsecs_to_light_years(parsecs: f64) -> f64 {
    parsecs * LIGHT_YEARS_PER_PARSEC
}

/// Convert `parsecs` to light-years and render with `digits` fractional digits,
/// e.g. `to_light_years(1.0, 2) == "3.26 ly"`.
pub fn to_light_years(parsecs: f64, digits: usize) -> String {
    let ly = parsecs_to_light_years(parsecs);
    // Normalise -0.0 so it does not print with a sign
    let ly = if ly == 0.0 { 0.0 } else { ly };
    format!("{:.*} ly", digits, ly)
}

/// [`to_light_years`] with [`DEFAULT_FRACTIONAL_DIGITS`].
pub fn format_light_years(parsecs: f64) -> String {
    to_light_years(parsecs, DEFAULT_FRACTIONAL_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::test_star;
    use approx::assert_relative_eq;

    fn stars_at(distances: &[f64]) -> Vec<Star> {
        distances
            .iter()
            .enumerate()
            .map(|(i, &d)| test_star(&format!("s{}", i), d, [d, 0.0, 0.0]))
            .collect()
    }

    #[test]
    fn light_year_formatting() {
        assert_eq!(to_light_years(1.0, 2), "3.26 ly");
        assert_eq!(to_light_years(0.0, 2), "0.00 ly");
        assert_eq!(to_light_years(1.0, 0), "3 ly");
        assert_eq!(to_light_years(100.0, 1), "326.2 ly");
        assert_eq!(format_light_years(2.0), "6.52 ly");
    }

    #[test]
    fn summary_values() {
        let summary = DistanceSummary::from_stars(&stars_at(&[10.0, 2.0, 30.0])).unwrap();
        assert_relative_eq!(summary.average, 14.0, epsilon = 1e-12);
        assert_eq!(summary.nearest, 2.0);
        assert_eq!(summary.farthest, 30.0);

        let ly = summary.in_light_years();
        assert_relative_eq!(ly.nearest, 2.0 * LIGHT_YEARS_PER_PARSEC, epsilon = 1e-12);
    }

    #[test]
    fn single_star_summary() {
        let summary = DistanceSummary::from_stars(&stars_at(&[0.1])).unwrap();
        assert_eq!(summary.nearest, summary.average);
        assert_eq!(summary.average, summary.farthest);
    }

    #[test]
    fn ordering_holds_for_identical_distances() {
        let summary = DistanceSummary::from_stars(&stars_at(&[0.1; 7])).unwrap();
        assert!(summary.nearest <= summary.average);
        assert!(summary.average <= summary.farthest);
    }

    #[test]
    fn non_finite_distance_is_rejected() {
        for bad in [f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DistanceSummary::from_stars(&stars_at(&[bad])),
                Err(ChartError::InvalidInput(_))
            ));
            assert!(matches!(
                DistanceSummary::from_stars(&stars_at(&[1.0, bad, 3.0])),
                Err(ChartError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            DistanceSummary::from_stars(&[]),
            Err(ChartError::InvalidInput(_))
        ));
    }
}
