//! Reference frame conversions
use hifitime::Epoch;
use map_3d::{ecef2geodetic, Ellipsoid};
use nalgebra::{Matrix3, Rotation3, Vector3};
use std::f64::consts::PI;

use crate::{observation::LookAngles, observer::ObserverPosition};

/// J2000 reference instant, as a julian date
const J2000_JD: f64 = 2451545.0;

/// Julian year [days]
const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Greenwich mean sidereal time at given instant [rad]
pub fn gmst(t: Epoch) -> f64 {
    let years = (t.to_jde_utc_days() - J2000_JD) / JULIAN_YEAR_DAYS;
    sgp4::iau_epoch_to_sidereal_time(years)
}

/// Rotates a TEME vector into the Earth fixed frame
pub fn teme_to_ecef(teme: &Vector3<f64>, gmst: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), -gmst) * teme
}

/// Converts ECEF [km] to (latitude [ddeg], longitude [ddeg], height [km])
pub fn ecef_to_geodetic(ecef_km: &Vector3<f64>) -> (f64, f64, f64) {
    let (lat, lon, h) = ecef2geodetic(
        ecef_km[0] * 1.0E3,
        ecef_km[1] * 1.0E3,
        ecef_km[2] * 1.0E3,
        Ellipsoid::WGS84,
    );
    (lat.to_degrees(), lon.to_degrees(), h / 1.0E3)
}

/// Computes Elevation and Azimuth angles and slant range between given
/// ECEF position in the Sky [km] and an observer on the ground.
pub fn look_angles(ecef_km: &Vector3<f64>, observer: &ObserverPosition) -> LookAngles {
    let geodetic_rad = observer.geodetic_rad();
    let (ref_lat, ref_lon) = (geodetic_rad[0], geodetic_rad[1]);

    let los = ecef_km - observer.ecef_km();
    let range_km = los.norm();
    let a_i = los / range_km;

    // ECEF to VEN 3X3 transform matrix
    let ecef_to_ven = Matrix3::new(
        ref_lat.cos() * ref_lon.cos(),
        ref_lat.cos() * ref_lon.sin(),
        ref_lat.sin(),
        -ref_lon.sin(),
        ref_lon.cos(),
        0.0_f64,
        -ref_lat.sin() * ref_lon.cos(),
        -ref_lat.sin() * ref_lon.sin(),
        ref_lat.cos(),
    );
    let ven = ecef_to_ven * a_i;

    let elevation_deg = (PI / 2.0 - ven[0].clamp(-1.0, 1.0).acos()).to_degrees();
    let mut azimuth_deg = ven[1].atan2(ven[2]).to_degrees();
    if azimuth_deg < 0.0 {
        azimuth_deg += 360.0;
    }
    LookAngles {
        elevation_deg,
        azimuth_deg,
        range_km,
    }
}

#[cfg(test)]
mod test {
    use super::{ecef_to_geodetic, gmst, look_angles, teme_to_ecef};
    use crate::observer::ObserverPosition;
    use hifitime::Epoch;
    use nalgebra::Vector3;
    use std::f64::consts::PI;
    use std::str::FromStr;

    #[test]
    fn sidereal_time() {
        // GMST at J2000 is 280.46 degrees
        let t = Epoch::from_str("2000-01-01T12:00:00 UTC").unwrap();
        let theta = gmst(t);
        assert!((theta.to_degrees() - 280.46).abs() < 0.01, "{}", theta.to_degrees());

        // one sidereal day later the angle is back
        let t = t + 86164.0905 * hifitime::Unit::Second;
        let back = gmst(t);
        let delta = (back - theta).rem_euclid(2.0 * PI);
        assert!(delta.min(2.0 * PI - delta) < 1.0E-4);
    }

    #[test]
    fn teme_rotation() {
        let teme = Vector3::new(7000.0, 0.0, 100.0);
        let ecef = teme_to_ecef(&teme, PI / 2.0);
        assert!(ecef[0].abs() < 1.0E-9);
        assert!((ecef[1] + 7000.0).abs() < 1.0E-9);
        assert_eq!(ecef[2], 100.0);
        assert!((ecef.norm() - teme.norm()).abs() < 1.0E-9);
    }

    #[test]
    fn geodetic_round_trip() {
        let observer = ObserverPosition::new(45.0, -120.0, 0.5);
        let (lat, lon, h) = ecef_to_geodetic(&observer.ecef_km());
        assert!((lat - 45.0).abs() < 1.0E-6);
        assert!((lon + 120.0).abs() < 1.0E-6);
        assert!((h - 0.5).abs() < 1.0E-6);
    }

    #[test]
    fn zenith_and_horizon() {
        let observer = ObserverPosition::new(0.0, 0.0, 0.0);
        let overhead = Vector3::new(6378.137 + 400.0, 0.0, 0.0);
        let angles = look_angles(&overhead, &observer);
        assert!((angles.elevation_deg - 90.0).abs() < 1.0E-6);
        assert!((angles.range_km - 400.0).abs() < 1.0E-6);

        // due north, on the horizon plane
        let north = Vector3::new(6378.137, 0.0, 1000.0);
        let angles = look_angles(&north, &observer);
        assert!(angles.elevation_deg.abs() < 1.0E-6);
        assert!(angles.azimuth_deg.abs() < 1.0E-6 || (angles.azimuth_deg - 360.0).abs() < 1.0E-6);

        // due east
        let east = Vector3::new(6378.137, 1000.0, 0.0);
        let angles = look_angles(&east, &observer);
        assert!((angles.azimuth_deg - 90.0).abs() < 1.0E-6);
    }
}
