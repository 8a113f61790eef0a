#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One tick's driving decision, returned to the simulator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriveCommand {
    /// Forward speed. 0.0 is stopped, 1.0 is flat out.
    pub speed: f64,
    /// Normalized wheel angle. Negative turns left, positive turns right;
    /// magnitude is capped by the driver's steering limit.
    pub steering_angle: f64,
}

/// Telemetry about the car, supplied by the simulator when available.
///
/// The reference driver ignores this; it exists so student extensions can
/// react to the car's own motion without an interface change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarState {
    /// Current speed in track units per second.
    pub speed: f64,
    /// Position on the track plane.
    pub position: [f64; 2],
    /// Heading in radians.
    pub heading: f64,
}

/// Errors a driver surfaces to the simulator harness.
///
/// The harness decides what to do with one (typically stop the car or fall
/// back to zero speed and zero steering); the driver never swallows them.
#[derive(Error, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// A stage that needs at least one scan sample received an empty scan.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration field is outside its documented range.
    #[error("config out of range: {field} = {value}, expected [{min}, {max}]")]
    ConfigOutOfRange {
        /// Name of the offending field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Lower bound of the documented range.
        min: f64,
        /// Upper bound of the documented range.
        max: f64,
    },
}
