//! Info panel content for one selected constellation.
//!
//! Combines the distance summary, the annotated description and a per-star
//! listing into a single value the panel can render without further logic.

use crate::distance::{to_light_years, DistanceSummary, DEFAULT_FRACTIONAL_DIGITS};
use crate::error::ChartResult;
use crate::narrative::Narrative;
use crate::Constellation;

/// Parameters controlling detail assembly.
#[derive(Debug, Clone)]
pub struct DetailConfig {
    /// Fractional digits of light-year labels. Default 2.
    pub fractional_digits: usize,
    /// Return no detail when the record has no description. Default true.
    pub require_general_info: bool,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            fractional_digits: DEFAULT_FRACTIONAL_DIGITS,
            require_general_info: true,
        }
    }
}

/// One line of the star listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRow {
    pub name: String,
    pub distance_label: String,
    /// Render with an "estimated" mark.
    pub distance_estimated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    pub label: String,
    pub url: String,
}

/// Display-ready content for a constellation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationDetail {
    pub name: String,
    /// Parsecs.
    pub distances: DistanceSummary,
    pub average_label: String,
    pub nearest_label: String,
    pub farthest_label: String,
    pub narrative: Option<Narrative>,
    /// Sorted by star name.
    pub star_rows: Vec<StarRow>,
    pub sources: Vec<SourceLink>,
}

const STELLARIUM_URL: &str = "https://stellarium-web.org/";

/// Wikipedia article for a constellation, e.g. `Canis_Major_(constellation)`.
pub fn wikipedia_url(name: &str) -> String {
    format!(
        "https://en.wikipedia.org/wiki/{}_(constellation)",
        name.trim().replace(' ', "_")
    )
}

impl ConstellationDetail {
    /// Assemble the panel content for `constellation`.
    ///
    /// Returns `Ok(None)` when a description is required but missing. Fails
    /// with `InvalidInput` when the record has no stars.
    pub fn build(
        constellation: &Constellation,
        config: &DetailConfig,
    ) -> ChartResult<Option<Self>> {
        if config.require_general_info && !constellation.has_general_info() {
            return Ok(None);
        }

        let distances = DistanceSummary::from_stars(&constellation.stars)?;
        let label = |pc: f64| to_light_years(pc, config.fractional_digits);

        let mut star_rows: Vec<StarRow> = constellation
            .stars
            .iter()
            .map(|s| StarRow {
                name: s.name.clone(),
                distance_label: label(s.distance),
                distance_estimated: s.distance_estimated,
            })
            .collect();
        star_rows.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Some(Self {
            name: constellation.name.clone(),
            average_label: label(distances.average),
            nearest_label: label(distances.nearest),
            farthest_label: label(distances.farthest),
            distances,
            narrative: constellation.general_info.as_deref().map(Narrative::parse),
            star_rows,
            sources: vec![
                SourceLink {
                    label: "Wikipedia".to_string(),
                    url: wikipedia_url(&constellation.name),
                },
                SourceLink {
                    label: "Stellarium".to_string(),
                    url: STELLARIUM_URL.to_string(),
                },
            ],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::star::test_star;

    fn cma(info: Option<&str>) -> Constellation {
        let mut sirius = test_star("Sirius", 2.64, [1.0, 0.0, 0.0]);
        sirius.distance_estimated = false;
        let mut adhara = test_star("Adhara", 124.0, [0.0, 1.0, 0.0]);
        adhara.distance_estimated = true;
        Constellation {
            name: "Canis Major".to_string(),
            stars: vec![sirius, adhara, test_star("Mirzam", 151.0, [0.0, 0.0, 1.0])],
            connections: vec![],
            general_info: info.map(str::to_string),
        }
    }

    #[test]
    fn builds_full_detail() {
        let detail = ConstellationDetail::build(
            &cma(Some("Follows <Orion> across the sky.")),
            &DetailConfig::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(detail.name, "Canis Major");
        assert_eq!(detail.nearest_label, "8.61 ly");
        assert_eq!(detail.farthest_label, "492.50 ly");
        let names: Vec<&str> = detail.star_rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Adhara", "Mirzam", "Sirius"]);
        assert!(detail.star_rows[0].distance_estimated);
        assert!(!detail.star_rows[2].distance_estimated);

        let narrative = detail.narrative.unwrap();
        assert_eq!(narrative.references().collect::<Vec<_>>(), vec!["Orion"]);
        assert_eq!(
            detail.sources[0].url,
            "https://en.wikipedia.org/wiki/Canis_Major_(constellation)"
        );
    }

    #[test]
    fn missing_info_yields_nothing_by_default() {
        assert_eq!(
            ConstellationDetail::build(&cma(None), &DetailConfig::default()).unwrap(),
            None
        );
        assert_eq!(
            ConstellationDetail::build(&cma(Some("")), &DetailConfig::default()).unwrap(),
            None
        );
    }

    #[test]
    fn info_optional_when_configured() {
        let config = DetailConfig {
            fractional_digits: 1,
            require_general_info: false,
        };
        let detail = ConstellationDetail::build(&cma(None), &config).unwrap().unwrap();
        assert!(detail.narrative.is_none());
        assert_eq!(detail.nearest_label, "8.6 ly");
    }

    #[test]
    fn no_stars_is_invalid() {
        let mut c = cma(Some("text"));
        c.stars.clear();
        assert!(matches!(
            ConstellationDetail::build(&c, &DetailConfig::default()),
            Err(ChartError::InvalidInput(_))
        ));
    }
}
