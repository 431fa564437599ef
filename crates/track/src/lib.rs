//! Ground-track propagation and on-demand platform tracking.
//!
//! A platform's motion is described once by fixed [`GroundTrack`] parameters;
//! every refresh recomputes the state from those parameters and the elapsed
//! time, so repeated queries cannot accumulate drift.

use chrono::{DateTime, Utc};
use thiserror::Error;

use overpass_core::constants::EARTH_RADIUS_KM;
use overpass_core::vector::{self, Vector3};
use overpass_geodesy::{self as geodesy, GeoPoint};

/// Fixed parameters describing a repeating great-circle ground track.
#[derive(Debug, Clone)]
pub struct GroundTrack {
    /// Reference instant the other parameters are anchored to.
    pub epoch: DateTime<Utc>,
    /// Ground position under the platform at the epoch.
    pub epoch_position: GeoPoint,
    /// Heading at the epoch, degrees clockwise from north.
    pub heading_deg: f64,
    /// Speed of the ground trace, km/h.
    pub ground_speed_km_h: f64,
    /// Hours between repeat passes of the same ground track.
    pub revisit_interval_hours: f64,
}

impl GroundTrack {
    /// Signed hours from the track epoch to `instant`.
    pub fn hours_since_epoch(&self, instant: DateTime<Utc>) -> f64 {
        (instant - self.epoch).num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Position and velocity snapshot produced by a refresh.
///
/// The velocity lives in a local east/north/up frame with magnitude in km/h;
/// ground traces keep the vertical component at zero.
#[derive(Debug, Clone, Copy)]
pub struct PlatformState {
    pub position: GeoPoint,
    pub velocity: Vector3,
}

/// Errors surfaced by the tracking layer.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("platform position has not been refreshed yet")]
    Unset,
    #[error("ground speed must be finite and positive (got {0})")]
    InvalidSpeed(f64),
    #[error("revisit interval must be finite and positive (got {0})")]
    InvalidRevisitInterval(f64),
}

/// State of the track at `elapsed_hours` after its epoch.
///
/// Pure in the track parameters and the elapsed time. The travelled arc wraps
/// at the Earth circumference, so arbitrarily large offsets stay on the track.
pub fn propagate(track: &GroundTrack, elapsed_hours: f64) -> PlatformState {
    let circumference_km = 2.0 * std::f64::consts::PI * EARTH_RADIUS_KM;
    let arc_km = (track.ground_speed_km_h * elapsed_hours).rem_euclid(circumference_km);

    let position = geodesy::destination_point(track.epoch_position, track.heading_deg, arc_km);
    let heading_deg = if arc_km < 1e-9 {
        // Back-bearing is undefined at zero arc.
        track.heading_deg
    } else {
        geodesy::wrap_degrees(geodesy::initial_bearing_deg(position, track.epoch_position) + 180.0)
    };

    let heading = heading_deg.to_radians();
    let velocity = vector::ground(
        heading.sin() * track.ground_speed_km_h,
        heading.cos() * track.ground_speed_km_h,
    );

    PlatformState { position, velocity }
}

/// Orbital platform with on-demand tracking state and observation metadata.
#[derive(Debug, Clone)]
pub struct Platform {
    pub name: String,
    track: GroundTrack,
    cloud_cover_pct: u8,
    state: Option<PlatformState>,
}

impl Platform {
    /// Build an untracked platform, rejecting unusable track parameters.
    pub fn new(name: String, track: GroundTrack) -> Result<Self, TrackError> {
        if !track.ground_speed_km_h.is_finite() || track.ground_speed_km_h <= 0.0 {
            return Err(TrackError::InvalidSpeed(track.ground_speed_km_h));
        }
        if !track.revisit_interval_hours.is_finite() || track.revisit_interval_hours <= 0.0 {
            return Err(TrackError::InvalidRevisitInterval(
                track.revisit_interval_hours,
            ));
        }
        Ok(Self {
            name,
            track,
            cloud_cover_pct: 0,
            state: None,
        })
    }

    pub fn track(&self) -> &GroundTrack {
        &self.track
    }

    /// Coverage percentage carried for reporting; the geometry ignores it.
    pub fn cloud_cover(&self) -> u8 {
        self.cloud_cover_pct
    }

    /// Replace the stored coverage percentage, capped at 100.
    pub fn set_cloud_cover(&mut self, pct: u8) {
        self.cloud_cover_pct = pct.min(100);
    }

    /// Recompute the tracked state for the given offset from the track epoch.
    pub fn refresh(&mut self, elapsed_hours: f64) {
        self.state = Some(propagate(&self.track, elapsed_hours));
    }

    /// Recompute the tracked state for an absolute instant.
    pub fn refresh_at(&mut self, instant: DateTime<Utc>) {
        let elapsed_hours = self.track.hours_since_epoch(instant);
        self.refresh(elapsed_hours);
    }

    /// Latest snapshot, or `TrackError::Unset` before the first refresh.
    pub fn state(&self) -> Result<PlatformState, TrackError> {
        self.state.ok_or(TrackError::Unset)
    }

    /// Ground position from the latest snapshot.
    pub fn current_position(&self) -> Result<GeoPoint, TrackError> {
        self.state().map(|state| state.position)
    }
}

/// Capability to refresh and expose a tracked ground state on demand.
pub trait Trackable {
    fn refresh(&mut self, elapsed_hours: f64);
    fn state(&self) -> Result<PlatformState, TrackError>;
}

impl Trackable for Platform {
    fn refresh(&mut self, elapsed_hours: f64) {
        Platform::refresh(self, elapsed_hours);
    }

    fn state(&self) -> Result<PlatformState, TrackError> {
        Platform::state(self)
    }
}

pub mod platform {
    //! Catalog-to-runtime conversion for platforms.

    use thiserror::Error;

    use overpass_config::{ConfigError, PlatformConfig, parse_epoch};
    use overpass_geodesy::GeoPoint;

    use super::{GroundTrack, Platform, TrackError};

    /// Errors surfaced when selecting or converting platforms.
    #[derive(Debug, Error)]
    pub enum PlatformError {
        #[error("platform '{0}' not found in catalog")]
        NotFound(String),
        #[error("platform catalog is empty")]
        EmptyCatalog,
        #[error("platform '{name}' has an invalid epoch: {source}")]
        Epoch { name: String, source: ConfigError },
        #[error(transparent)]
        Track(#[from] TrackError),
    }

    /// Convert a catalog record into a runtime `Platform`.
    pub fn from_config(config: &PlatformConfig) -> Result<Platform, PlatformError> {
        let epoch = parse_epoch(&config.epoch).map_err(|source| PlatformError::Epoch {
            name: config.name.clone(),
            source,
        })?;

        let track = GroundTrack {
            epoch,
            epoch_position: GeoPoint::new(config.lat_deg, config.lon_deg),
            heading_deg: config.heading_deg,
            ground_speed_km_h: config.ground_speed_km_h,
            revisit_interval_hours: config.revisit_interval_hours,
        };

        let mut platform = Platform::new(config.name.clone(), track)?;
        platform.set_cloud_cover(config.cloud_cover_pct);
        Ok(platform)
    }

    /// Select a platform from the catalog by optional name, defaulting to the
    /// first entry.
    pub fn select(
        configs: &[PlatformConfig],
        requested: Option<&str>,
    ) -> Result<Platform, PlatformError> {
        if configs.is_empty() {
            return Err(PlatformError::EmptyCatalog);
        }

        let chosen = if let Some(name) = requested {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| PlatformError::NotFound(name.to_string()))?
        } else {
            &configs[0]
        };

        from_config(chosen)
    }
}
