use hifitime::{Epoch, Unit};
use std::str::FromStr;

use crate::prelude::{
    average_orbit_period_minutes, great_circle_distance_km, is_valid_tle, parse_tle, Config,
    Field, FieldValue, ObserverPosition, Tle, Tracker,
};

/// ISS element set as published, with its original check digits
const ISS_PUBLISHED: [&str; 2] = [
    "1 25544U 98067A   21275.52719505  .00002182  00000-0  49422-4 0  9992",
    "2 25544  51.6442  40.7625 0003438 154.0455 306.1756 15.48783287303095",
];

/// Same element set, check digits matching the modulo 10 checksum
const ISS: &str = "ISS (ZARYA)
1 25544U 98067A   21275.52719505  .00002182  00000-0  49422-4 0  9999
2 25544  51.6442  40.7625 0003438 154.0455 306.1756 15.48783287303096";

const NOAA21: &str = "NOAA 21
1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994
2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn iss_fields() {
    let tle = parse_tle(ISS_PUBLISHED).unwrap();
    assert_eq!(tle.mean_motion(), Ok(15.48783287));
    assert_eq!(tle.epoch_year(), Ok(21.0));
    assert_eq!(tle.epoch_day(), Ok(275.52719505));
    assert_eq!(tle.get(Field::Classification), Ok(FieldValue::Text("U".to_string())));

    // published check digits disagree with the checksum
    assert!(!is_valid_tle(ISS_PUBLISHED));

    let tle = Tle::from_str(ISS).unwrap();
    assert!(is_valid_tle(&tle));
    assert_eq!(tle.satellite_name(), "ISS (ZARYA)");
    assert_eq!(tle.mean_motion(), Ok(15.48783287));
    assert_eq!(tle.epoch_year(), Ok(21.0));
    assert_eq!(tle.epoch_day(), Ok(275.52719505));
    assert_eq!(tle.cospar_id(), Ok("1998-067A".to_string()));
}

#[test]
fn noaa21_fields() {
    let tle = parse_tle(NOAA21).unwrap();
    assert!(tle.validate().is_ok());
    assert_eq!(tle.catalog_number(), Ok(54234));
    assert_eq!(tle.inclination(), Ok(98.7204));
    assert_eq!(tle.cospar_id(), Ok("2022-150A".to_string()));
    assert!((tle.bstar().unwrap() - 0.19403E-3).abs() < 1.0E-12);
    assert!((tle.eccentricity().unwrap() - 0.000271).abs() < 1.0E-12);

    let epoch = tle.epoch().unwrap();
    let expected = Epoch::from_str("2025-03-17T22:16:50.050848 UTC").unwrap();
    assert!((epoch - expected).abs().to_seconds() < 1.0E-3);

    let period = average_orbit_period_minutes(&tle).unwrap();
    assert!((period - 101.44).abs() < 0.01, "{} min", period);
}

#[test]
fn iss_observations() {
    init_logger();
    let tle = parse_tle(ISS).unwrap();
    let epoch = tle.epoch().unwrap();
    let mut tracker = Tracker::default();
    let observer = ObserverPosition::default();

    for dt in [0.0, 15.0, 45.0, 600.0] {
        let t = epoch + dt * Unit::Minute;
        let info = tracker.satellite_info(&tle, t, &observer).unwrap();
        assert!(info.lat.abs() < 52.5, "lat {}", info.lat);
        assert!(info.lng >= -180.0 && info.lng <= 180.0, "lng {}", info.lng);
        assert!(info.height_km > 380.0 && info.height_km < 450.0, "h {}", info.height_km);
        assert!(info.velocity_km_s > 7.5 && info.velocity_km_s < 7.8);
        assert!(info.elevation_deg >= -90.0 && info.elevation_deg <= 90.0);
        assert!(info.azimuth_deg >= 0.0 && info.azimuth_deg < 360.0);
        assert!(info.range_km >= info.height_km - 1.0 && info.range_km < 14_000.0);

        let p = tracker.lat_lon(&tle, t).unwrap();
        assert_eq!((p.lat, p.lng), (info.lat, info.lng));
    }
    assert_eq!(tracker.cache_len(), 4);

    let speed = tracker.ground_speed_km_s(&tle, epoch).unwrap();
    assert!(speed > 6.0 && speed < 8.0, "{} km/s", speed);
}

#[test]
fn iss_ground_track() {
    init_logger();
    let tle = parse_tle(ISS).unwrap();
    let center = tle.epoch().unwrap() + 1.0 * Unit::Day;
    let mut tracker = Tracker::sgp4(Config::default());

    let track = tracker.ground_track(&tle, center, 60.0 * Unit::Second).unwrap();
    assert_eq!(track.len(), 360);
    for [lat, lng] in &track {
        assert!(lat.abs() < 52.5);
        assert!(lng.abs() <= 180.0);
    }
    // ~430 km between consecutive samples
    for pair in track.windows(2) {
        let d = great_circle_distance_km(pair[0][0], pair[0][1], pair[1][0], pair[1][1]);
        assert!(d > 300.0 && d < 500.0, "{} km", d);
    }

    let track = tracker
        .orbit_track(&tle, center, 60.0 * Unit::Second, 200)
        .unwrap();
    assert!(!track.is_empty() && track.len() <= 101, "{} points", track.len());
}

#[test]
fn ground_track_now() {
    let tle = parse_tle(NOAA21).unwrap();
    let mut tracker = Tracker::default();
    let track = tracker.ground_track_now(&tle).unwrap();
    assert_eq!(track.len(), 360);
}

#[test]
fn invalid_records_are_rejected() {
    let tle = parse_tle(ISS_PUBLISHED).unwrap();
    let mut tracker = Tracker::default();
    let t = Epoch::from_gregorian_utc_at_midnight(2021, 10, 3);
    assert!(matches!(
        tracker.lat_lon(&tle, t),
        Err(crate::Error::InvalidTle(_))
    ));
    assert!(tracker.ground_track(&tle, t, 60.0 * Unit::Second).is_err());
    assert_eq!(tracker.cache_len(), 0);
}
