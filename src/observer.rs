use crate::prelude::Vector3;
use map_3d::{geodetic2ecef, Ellipsoid};

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Ground observer location
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ObserverPosition {
    /// Latitude [ddeg]
    pub lat_deg: f64,
    /// Longitude [ddeg]
    pub lng_deg: f64,
    /// Height above the WGS84 ellipsoid [km]
    pub height_km: f64,
}

impl Default for ObserverPosition {
    /// Reference location used when no observer is specified
    fn default() -> Self {
        Self {
            lat_deg: 36.9613422,
            lng_deg: -122.0308,
            height_km: 0.37,
        }
    }
}

impl ObserverPosition {
    /// Builds Self from Geodetic coordinates (latitude [ddeg], longitude [ddeg], height [km])
    pub fn new(lat_deg: f64, lng_deg: f64, height_km: f64) -> Self {
        Self {
            lat_deg,
            lng_deg,
            height_km,
        }
    }
    /// Returns Geodetic coordinates (latitude [rad], longitude [rad], height [km])
    pub fn geodetic_rad(&self) -> Vector3<f64> {
        Vector3::new(
            self.lat_deg.to_radians(),
            self.lng_deg.to_radians(),
            self.height_km,
        )
    }
    /// Returns coordinates in ECEF [km]
    pub fn ecef_km(&self) -> Vector3<f64> {
        let (x, y, z) = geodetic2ecef(
            self.lat_deg.to_radians(),
            self.lng_deg.to_radians(),
            self.height_km * 1.0E3,
            Ellipsoid::WGS84,
        );
        Vector3::new(x, y, z) / 1.0E3
    }
    /// Bit exact representation, used in cache keys
    pub(crate) fn key(&self) -> [u64; 3] {
        [
            self.lat_deg.to_bits(),
            self.lng_deg.to_bits(),
            self.height_km.to_bits(),
        ]
    }
}
