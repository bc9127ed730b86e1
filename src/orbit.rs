use hifitime::Epoch;
use log::debug;
use nalgebra::Vector3;

use crate::{tle::Tle, Error};

/// Inertial (TEME) state
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StateVector {
    /// Position [km]
    pub position: Vector3<f64>,
    /// Velocity [km/s]
    pub velocity: Vector3<f64>,
}

/// Implement this trait to provide Orbital states.
/// Positions and velocities are expressed in the TEME frame.
pub trait Propagator {
    /// Propagates given element set to instant `t`.
    /// Degenerate orbits should be reported as [Error::Propagation].
    fn propagate(&self, tle: &Tle, t: Epoch) -> Result<StateVector, Error>;
}

/// SGP4 / SDP4 propagator
#[derive(Debug, Default, Copy, Clone)]
pub struct Sgp4Propagator {}

impl Propagator for Sgp4Propagator {
    fn propagate(&self, tle: &Tle, t: Epoch) -> Result<StateVector, Error> {
        let (line1, line2) = tle.line_pair().ok_or(Error::Propagation(format!(
            "expecting 2 lines, got {}",
            tle.lines().len()
        )))?;

        let elements = sgp4::Elements::from_tle(
            Some(tle.satellite_name().to_string()),
            line1.as_bytes(),
            line2.as_bytes(),
        )
        .map_err(|e| Error::Propagation(e.to_string()))?;

        let constants = sgp4::Constants::from_elements(&elements)
            .map_err(|e| Error::Propagation(e.to_string()))?;

        let minutes = (t - tle.epoch()?).to_seconds() / 60.0;
        debug!("{:?} ({}) - propagating {:.3} min", t, tle.satellite_name(), minutes);

        let prediction = constants
            .propagate(sgp4::MinutesSinceEpoch(minutes))
            .map_err(|e| Error::Propagation(e.to_string()))?;

        Ok(StateVector {
            position: Vector3::from(prediction.position),
            velocity: Vector3::from(prediction.velocity),
        })
    }
}
