use crate::Vector3;

/// A single catalog star as delivered by the data source.
///
/// `cartesian` is the authoritative render position, in parsecs, already in the
/// scene frame (see [`icrs_to_scene`]). The angular fields are carried for
/// display and are not used to place the star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub name: String,
    /// Right ascension, degrees.
    pub ra_deg: f64,
    /// Declination, degrees.
    pub dec_deg: f64,
    /// Proper motion in RA (mu_alpha * cos(delta)), mas/yr.
    pub pm_ra: f64,
    /// Proper motion in Dec, mas/yr.
    pub pm_dec: f64,
    /// Distance in parsecs, finite and >= 0.
    pub distance: f64,
    /// True when the distance was interpolated (e.g. from parallax) rather than measured.
    pub distance_estimated: bool,
    pub cartesian: Vector3,
    pub cartesian_velocity: Vector3,
}

impl Star {
    /// Unit vector from the origin towards the star.
    ///
    /// A star sitting exactly at the origin has no direction and yields the zero vector.
    pub fn direction(&self) -> Vector3 {
        let n = self.cartesian.norm();
        if n > 0.0 {
            self.cartesian / n
        } else {
            Vector3::zeros()
        }
    }

    /// Position multiplied by `scale`.
    pub fn scaled_position(&self, scale: f64) -> Vector3 {
        self.cartesian * scale
    }

    /// Distance converted to light-years.
    pub fn distance_ly(&self) -> f64 {
        crate::distance::parsecs_to_light_years(self.distance)
    }
}

/// Unit vector on the celestial sphere for an ICRS direction, in the ICRS frame.
///
/// x = cos(dec)cos(ra), y = cos(dec)sin(ra), z = sin(dec)
pub fn radec_to_uvec(ra_deg: f64, dec_deg: f64) -> Vector3 {
    let (sin_ra, cos_ra) = ra_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    Vector3::new(cos_dec * cos_ra, cos_dec * sin_ra, sin_dec)
}

/// Re-express an ICRS vector in the scene frame used by the renderer.
///
/// ICRS X stays X, ICRS Z (celestial north) becomes scene +Y ("up"), and ICRS Y
/// becomes scene -Z to keep the frame right-handed.
pub fn icrs_to_scene(v: Vector3) -> Vector3 {
    Vector3::new(v.x, v.z, -v.y)
}

/// Scene-frame Cartesian position (parsecs) of a star at the given RA/Dec and distance.
///
/// Useful when a record arrives without a precomputed `cartesian` triple.
pub fn cartesian_from_radec(ra_deg: f64, dec_deg: f64, distance_pc: f64) -> Vector3 {
    icrs_to_scene(radec_to_uvec(ra_deg, dec_deg) * distance_pc)
}

#[cfg(test)]
pub(crate) fn test_star(name: &str, distance: f64, cartesian: [f64; 3]) -> Star {
    Star {
        name: name.to_string(),
        ra_deg: 0.0,
        dec_deg: 0.0,
        pm_ra: 0.0,
        pm_dec: 0.0,
        distance,
        distance_estimated: false,
        cartesian: Vector3::new(cartesian[0], cartesian[1], cartesian[2]),
        cartesian_velocity: Vector3::zeros(),
    }
}
