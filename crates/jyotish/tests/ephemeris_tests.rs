use jyotish::ephemeris::lahiri_ayanamsa;
use jyotish::{
    Body, BirthMoment, ChartCalculator, ChartSettings, Ephemeris, EphemerisError, GeoCoordinate,
    HouseSystem, JulianDay, SwissEphemerisAdapter,
};
use std::env;
use std::path::PathBuf;

#[test]
fn test_missing_ephemeris_path_rejected() {
    let result = SwissEphemerisAdapter::new(
        Some(PathBuf::from("/nonexistent/swisseph/data")),
        HouseSystem::Placidus,
    );
    assert!(matches!(result, Err(EphemerisError::FileNotFound { .. })));
}

#[test]
fn test_data_path_does_not_touch_environment() {
    let dir = tempfile::tempdir().unwrap();
    let before = env::var_os("SE_EPHE_PATH");

    let adapter =
        SwissEphemerisAdapter::new(Some(dir.path().to_path_buf()), HouseSystem::Placidus).unwrap();

    assert_eq!(adapter.ephemeris_path(), Some(dir.path()));
    assert_eq!(env::var_os("SE_EPHE_PATH"), before);
}

#[test]
#[ignore] // Requires the Swiss Ephemeris library at runtime
fn test_swiss_chart_basic() {
    let adapter = SwissEphemerisAdapter::new(None, HouseSystem::Placidus).unwrap();
    let moment = BirthMoment::parse("2000-01-01", "17:30:00", "Asia/Kolkata").unwrap();
    let jd = moment.julian_day();
    let location = GeoCoordinate::new(12.9716, 77.5946);

    // Sun near 280 deg tropical at J2000.0
    let sun = adapter.body_longitude(jd, Body::Sun).unwrap();
    assert_eq!(sun.label, "Sun");
    assert!((sun.longitude - 280.4).abs() < 1.0, "sun at {}", sun.longitude);

    assert_eq!(adapter.ayanamsa(jd).unwrap(), lahiri_ayanamsa(jd));

    let chart = ChartCalculator::new(adapter, ChartSettings::default())
        .calculate(jd, &location)
        .unwrap();
    assert_eq!(chart.len(), 14);
    assert!(chart.rows.iter().all(|r| (0.0..360.0).contains(&r.longitude)));
}

#[test]
#[ignore] // Requires the Swiss Ephemeris library at runtime
fn test_swiss_cusps() {
    let adapter = SwissEphemerisAdapter::new(None, HouseSystem::Equal).unwrap();
    let cusps = adapter
        .calc_cusps(JulianDay(2_451_545.0), &GeoCoordinate::new(28.6139, 77.2090))
        .unwrap();
    // Equal houses are 30 deg apart
    let gap = (cusps[1] - cusps[0]).rem_euclid(360.0);
    assert!((gap - 30.0).abs() < 1e-6);
}
