//! Throttle: scale the base speed down for sharp turns and close walls, up
//! on clear straightaways.

use crate::driver::DriverConfig;
use slipstream_api::Error;

const SHARP_TURN_STEERING: f64 = 0.5;
const SHARP_TURN_FACTOR: f64 = 0.7;
const MODERATE_TURN_STEERING: f64 = 0.3;
const MODERATE_TURN_FACTOR: f64 = 0.85;
const CLOSE_WALL_FACTOR: f64 = 0.5;
const STRAIGHTAWAY_STEERING: f64 = 0.2;
const STRAIGHTAWAY_FACTOR: f64 = 1.3;
const TOP_SPEED: f64 = 1.0;

/// Chooses a speed for this tick from the steering angle and the trimmed
/// scan.
///
/// Adjustments apply multiplicatively to the configured base speed, in
/// order: turn severity, wall proximity, then the racing-mode straightaway
/// boost (capped at top speed). The boost only engages when every wall is
/// beyond twice the safety distance.
pub fn throttle(steering_angle: f64, scan: &[f64], config: &DriverConfig) -> Result<f64, Error> {
    if scan.is_empty() {
        return Err(Error::InvalidInput(
            "throttle needs a non-empty scan".to_string(),
        ));
    }
    let min_distance = scan.iter().copied().fold(f64::INFINITY, f64::min);

    let mut speed = config.base_speed;

    if steering_angle.abs() > SHARP_TURN_STEERING {
        speed *= SHARP_TURN_FACTOR;
    } else if steering_angle.abs() > MODERATE_TURN_STEERING {
        speed *= MODERATE_TURN_FACTOR;
    }

    if min_distance < config.safety_distance {
        speed *= CLOSE_WALL_FACTOR;
    }

    if config.racing_mode
        && steering_angle.abs() < STRAIGHTAWAY_STEERING
        && min_distance > config.safety_distance * 2.0
    {
        speed = (speed * STRAIGHTAWAY_FACTOR).min(TOP_SPEED);
    }

    Ok(speed)
}
