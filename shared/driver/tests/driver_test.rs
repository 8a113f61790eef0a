use approx::assert_relative_eq;
use slipstream_driver::{CarState, Driver, DriverConfig, Error};
use test_log::test;

#[test]
fn test_drive_runs_the_whole_pipeline() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let scan = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];
    let command = driver.drive(&scan, None).unwrap();

    // After trimming, the farthest beam sits one left of center: a moderate
    // turn, so the base speed is scaled by 0.85.
    assert_relative_eq!(command.steering_angle, -1.0 / 3.0);
    assert_relative_eq!(command.speed, 0.5 * 0.85);
}

#[test]
fn test_multiplier_scales_drive_output() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let scan = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];
    let base = driver.drive(&scan, None).unwrap();

    driver.boost(0.5);
    let boosted = driver.drive(&scan, None).unwrap();
    assert_relative_eq!(boosted.speed, base.speed * 1.5);
    assert_relative_eq!(boosted.steering_angle, base.steering_angle);
}

#[test]
fn test_close_wall_slowdown() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    // Seven beams dodge the trim and the farthest sits at center, so the
    // car steers straight; the 0.1 reading is inside the default 0.3
    // safety distance.
    let scan = [1.0, 1.0, 1.0, 2.0, 1.0, 0.1, 1.0];
    let command = driver.drive(&scan, None).unwrap();
    assert_relative_eq!(command.steering_angle, 0.0);
    assert_relative_eq!(command.speed, 0.5 * 0.5);
}

#[test]
fn test_racing_straightaway() {
    let config = DriverConfig {
        racing_mode: true,
        ..DriverConfig::default()
    };
    let mut driver = Driver::new(config).unwrap();
    let scan = [1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0];
    let command = driver.drive(&scan, None).unwrap();
    assert_relative_eq!(command.steering_angle, 0.0);
    assert_relative_eq!(command.speed, 0.5 * 1.3);
}

#[test]
fn test_multiplier_boundary_sequence() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    driver.boost(0.5);
    assert_relative_eq!(driver.speed_multiplier(), 1.5);
    driver.ease(0.3);
    assert_relative_eq!(driver.speed_multiplier(), 1.2);
    driver.reset_multiplier();
    assert_eq!(driver.speed_multiplier(), 1.0);
    assert_relative_eq!(driver.current_speed(), 0.5);
}

#[test]
fn test_current_speed_tracks_multiplier() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    assert_relative_eq!(driver.current_speed(), 0.5);
    driver.boost(0.1);
    assert_relative_eq!(driver.current_speed(), 0.5 * 1.1);
    assert_relative_eq!(driver.current_speed(), 0.5 * 1.1);
}

#[test]
fn test_single_beam_scan_is_well_formed() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let command = driver.drive(&[2.0], None).unwrap();
    assert_relative_eq!(command.steering_angle, 0.0);
    assert!(command.speed >= 0.0);
}

#[test]
fn test_empty_scan_surfaces_invalid_input() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    assert!(matches!(
        driver.drive(&[], None),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_car_state_is_accepted_and_ignored() {
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let scan = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];
    let state = CarState {
        speed: 0.4,
        position: [12.0, -3.0],
        heading: 1.2,
    };
    let with_state = driver.drive(&scan, Some(&state)).unwrap();
    let without = driver.drive(&scan, None).unwrap();
    assert_eq!(with_state, without);
}

#[test]
fn test_process_lidar_forwards_to_drive() {
    let scan = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 1.0];
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let direct = driver.drive(&scan, None).unwrap();
    let mut driver = Driver::new(DriverConfig::default()).unwrap();
    let forwarded = driver.process_lidar(&scan, None).unwrap();
    assert_eq!(direct, forwarded);
}
