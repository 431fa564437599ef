//! Wait-time estimation for a platform's next pass over a ground target.
//!
//! The estimate is gate-based rather than an orbit solver: the platform has to
//! be heading at the target and already close for a pass to count as imminent,
//! otherwise the platform's revisit interval is reported. Headings are
//! compared on a flat-map offset (longitude delta east, latitude delta north),
//! which is only meaningful inside the tight distance gate.

use thiserror::Error;

use overpass_core::vector;
use overpass_geodesy::{self as geodesy, GeoPoint};
use overpass_track::PlatformState;

/// Widest angle between the velocity and the target direction that still
/// counts as approaching.
pub const MAX_HEADING_OFFSET_DEG: f64 = 3.0;
/// Widest ground distance that still counts as approaching, in kilometres.
pub const MAX_GROUND_DISTANCE_KM: f64 = 20.0;
/// Widest angle from the local vertical that still counts as overhead.
pub const MAX_NADIR_ANGLE_DEG: f64 = 1.0;
/// Default wait when no near-term pass is found: one 16-day repeat cycle.
pub const REPEAT_CYCLE_HOURS: f64 = 16.0 * 24.0;

/// What to report when the approach is aligned but never strictly overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NearMissPolicy {
    /// Treat the pass as missed and report the revisit interval.
    #[default]
    RepeatCycle,
    /// Report the arc time to closest approach instead.
    Interpolate,
}

/// Inputs for one overpass estimate.
#[derive(Debug, Clone)]
pub struct InterceptRequest {
    pub state: PlatformState,
    pub target: GeoPoint,
    /// Fallback wait in hours; [`REPEAT_CYCLE_HOURS`] unless the platform
    /// carries its own interval.
    pub revisit_interval_hours: f64,
    pub near_miss: NearMissPolicy,
}

/// Estimate plus the gate diagnostics that produced it.
#[derive(Debug, Clone)]
pub struct InterceptEstimate {
    /// Hours until the platform is expected over the target.
    pub wait_hours: f64,
    pub ground_distance_km: f64,
    /// Angle between the velocity and the flat-map target direction, degrees.
    pub heading_offset_deg: f64,
    /// Heading and distance gates both passed.
    pub aligned: bool,
    /// Velocity sat within the nadir cone (or the target was directly below).
    pub overhead: bool,
}

#[derive(Debug, Error)]
pub enum InterceptError {
    #[error("platform velocity has zero magnitude; approach heading is undefined")]
    DegenerateVelocity,
}

/// Run the gate sequence for one platform snapshot against one target.
pub fn estimate(request: &InterceptRequest) -> Result<InterceptEstimate, InterceptError> {
    let state = &request.state;
    let speed_km_h = vector::norm(&state.velocity);
    if speed_km_h == 0.0 {
        return Err(InterceptError::DegenerateVelocity);
    }

    let ground_distance_km = geodesy::haversine_km(request.target, state.position);
    let to_target = geodesy::planar_offset(state.position, request.target);
    let Some(heading_offset_deg) = vector::angle_between_deg(&state.velocity, &to_target) else {
        // Zero offset vector: the platform is already over the target.
        return Ok(InterceptEstimate {
            wait_hours: 0.0,
            ground_distance_km,
            heading_offset_deg: 0.0,
            aligned: true,
            overhead: true,
        });
    };

    let aligned = heading_offset_deg < MAX_HEADING_OFFSET_DEG
        && ground_distance_km < MAX_GROUND_DISTANCE_KM;
    if !aligned {
        return Ok(InterceptEstimate {
            wait_hours: request.revisit_interval_hours,
            ground_distance_km,
            heading_offset_deg,
            aligned,
            overhead: false,
        });
    }

    let cos_nadir = vector::dot(&state.velocity, &vector::UP) / speed_km_h;
    let nadir_angle_deg = cos_nadir.clamp(-1.0, 1.0).acos().to_degrees();
    let overhead = nadir_angle_deg < MAX_NADIR_ANGLE_DEG;

    let wait_hours = if overhead {
        ground_distance_km / speed_km_h
    } else {
        match request.near_miss {
            NearMissPolicy::RepeatCycle => request.revisit_interval_hours,
            NearMissPolicy::Interpolate => ground_distance_km / speed_km_h,
        }
    };

    Ok(InterceptEstimate {
        wait_hours,
        ground_distance_km,
        heading_offset_deg,
        aligned,
        overhead,
    })
}

/// Wait in hours with the default repeat-cycle fallback and near-miss policy.
pub fn hours_until_overhead(
    state: &PlatformState,
    target: GeoPoint,
) -> Result<f64, InterceptError> {
    let request = InterceptRequest {
        state: *state,
        target,
        revisit_interval_hours: REPEAT_CYCLE_HOURS,
        near_miss: NearMissPolicy::RepeatCycle,
    };
    Ok(estimate(&request)?.wait_hours)
}
