//! Reference driving heuristic for the slipstream racing exercise: one
//! laser scan in, one speed and steering decision out, once per tick.

pub mod driver;
pub mod sensor;
pub mod speed;
pub mod steering;

pub use driver::{Driver, DriverConfig};
pub use slipstream_api::{CarState, DriveCommand, Error};
