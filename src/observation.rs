//! Satellite observations

/// Satellite state seen from one observer at one instant
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Observation {
    /// Sub-satellite longitude [ddeg]
    pub lng: f64,
    /// Sub-satellite latitude [ddeg]
    pub lat: f64,
    /// Elevation above observer horizon [ddeg]
    pub elevation_deg: f64,
    /// Azimuth from observer, clockwise from north [ddeg]
    pub azimuth_deg: f64,
    /// Observer to satellite distance [km]
    pub range_km: f64,
    /// Height above the WGS84 ellipsoid [km]
    pub height_km: f64,
    /// Inertial velocity norm [km/s]
    pub velocity_km_s: f64,
}

/// Sub-satellite point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    /// Latitude [ddeg]
    pub lat: f64,
    /// Longitude [ddeg]
    pub lng: f64,
}

/// Observer look angles
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LookAngles {
    /// Elevation [ddeg]
    pub elevation_deg: f64,
    /// Azimuth [ddeg]
    pub azimuth_deg: f64,
    /// Slant range [km]
    pub range_km: f64,
}

impl Observation {
    /// Sub-satellite point
    pub fn lat_lon(&self) -> LatLon {
        LatLon {
            lat: self.lat,
            lng: self.lng,
        }
    }
    /// Look angles subset
    pub fn look_angles(&self) -> LookAngles {
        LookAngles {
            elevation_deg: self.elevation_deg,
            azimuth_deg: self.azimuth_deg,
            range_km: self.range_km,
        }
    }
}
