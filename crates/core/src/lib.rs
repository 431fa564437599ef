//! Core constants and shared primitives for the Overpass Predictor workspace.

/// Physical constants used by the spherical-Earth model.
pub mod constants {
    /// Mean Earth radius (km).
    pub const EARTH_RADIUS_KM: f64 = 6_371.0;
    /// Hours per day.
    pub const HOURS_PER_DAY: f64 = 24.0;
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::HOURS_PER_DAY;

    /// Convert days to hours.
    #[inline]
    pub fn days_to_hours(days: f64) -> f64 {
        days * HOURS_PER_DAY
    }

    /// Convert hours to days.
    #[inline]
    pub fn hours_to_days(hours: f64) -> f64 {
        hours / HOURS_PER_DAY
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector; the local frame is east/north/up unless stated otherwise.
    pub type Vector3 = [f64; 3];

    /// Unit vector pointing along the local vertical.
    pub const UP: Vector3 = [0.0, 0.0, 1.0];

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Build an in-plane vector with a zero vertical component.
    #[inline]
    pub fn ground(x: f64, y: f64) -> Vector3 {
        [x, y, 0.0]
    }

    /// Angle between two vectors in degrees, or `None` when either has zero
    /// magnitude and the angle is undefined.
    ///
    /// The cosine is clamped into [-1, 1] before `acos`, so rounding on nearly
    /// collinear inputs cannot produce NaN.
    pub fn angle_between_deg(a: &Vector3, b: &Vector3) -> Option<f64> {
        let norms = norm(a) * norm(b);
        if norms == 0.0 {
            return None;
        }
        let cos = (dot(a, b) / norms).clamp(-1.0, 1.0);
        Some(cos.acos().to_degrees())
    }
}
