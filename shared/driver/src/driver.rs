//! The driver: per-car settings, persistent speed multiplier, and the
//! per-tick entry point the simulator calls.

use crate::{sensor, speed, steering};
use serde::{Deserialize, Serialize};
use slipstream_api::{CarState, DriveCommand, Error};

const MIN_MULTIPLIER: f64 = 0.1;
const MAX_MULTIPLIER: f64 = 2.0;

/// Default step for [`Driver::boost`] and [`Driver::ease`].
pub const DEFAULT_ADJUSTMENT: f64 = 0.1;

/// Per-car settings, fixed at construction.
///
/// Each numeric field has a documented legal range, checked by
/// [`DriverConfig::validate`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Cruising speed before any adjustment. Range [0.1, 1.0].
    pub base_speed: f64,
    /// Change threshold above which adjacent beams flag a wall edge.
    /// Range [0.1, 2.0].
    pub turn_sensitivity: f64,
    /// Distance to walls below which the car slows hard. Range [0.1, 1.0].
    pub safety_distance: f64,
    /// Raises the steering limit and boosts speed on clear straightaways.
    pub racing_mode: bool,
    /// Steer for the widest gap between detected edges instead of the
    /// single farthest beam.
    pub aggressive_turns: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            base_speed: 0.5,
            turn_sensitivity: 0.6,
            safety_distance: 0.3,
            racing_mode: false,
            aggressive_turns: false,
        }
    }
}

impl DriverConfig {
    /// Checks every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), Error> {
        check_range("base_speed", self.base_speed, 0.1, 1.0)?;
        check_range("turn_sensitivity", self.turn_sensitivity, 0.1, 2.0)?;
        check_range("safety_distance", self.safety_distance, 0.1, 1.0)?;
        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), Error> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::ConfigOutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

/// One car's driving brain. Owns the settings and the speed multiplier
/// that persists across ticks; everything else is recomputed per scan.
#[derive(Clone, Debug)]
pub struct Driver {
    config: DriverConfig,
    speed_multiplier: f64,
}

impl Driver {
    /// Creates a driver with validated settings and a neutral multiplier.
    pub fn new(config: DriverConfig) -> Result<Driver, Error> {
        config.validate()?;
        Ok(Driver {
            config,
            speed_multiplier: 1.0,
        })
    }

    /// The settings this driver was built with.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Decides this tick's speed and steering angle from a raw scan.
    ///
    /// Runs the full pipeline: trim the rear sector, detect distance
    /// changes, flag edges, steer, throttle. The persistent speed
    /// multiplier scales the throttle output, so `boost`/`ease` act on top
    /// of the per-tick slow-downs.
    ///
    /// `car_state` is accepted for extensions that react to the car's own
    /// motion; the reference pipeline does not read it. Never fails for a
    /// non-empty scan.
    pub fn drive(
        &mut self,
        scan: &[f64],
        car_state: Option<&CarState>,
    ) -> Result<DriveCommand, Error> {
        let _ = car_state;

        let forward = sensor::trim_rear(scan);
        let changes = sensor::distance_changes(forward);
        let edges = sensor::find_edges(&changes, self.config.turn_sensitivity);
        let steering_angle = steering::steering_angle(forward, &edges, &self.config)?;
        let throttle = speed::throttle(steering_angle, forward, &self.config)?;

        Ok(DriveCommand {
            speed: throttle * self.speed_multiplier,
            steering_angle,
        })
    }

    /// Forwarding entry point under the name the harness calls.
    pub fn process_lidar(
        &mut self,
        ranges: &[f64],
        state: Option<&CarState>,
    ) -> Result<DriveCommand, Error> {
        self.drive(ranges, state)
    }

    /// Raises the persistent speed multiplier, capped at 2x.
    pub fn boost(&mut self, amount: f64) {
        self.speed_multiplier = (self.speed_multiplier + amount).min(MAX_MULTIPLIER);
    }

    /// Lowers the persistent speed multiplier, floored at 0.1x.
    pub fn ease(&mut self, amount: f64) {
        self.speed_multiplier = (self.speed_multiplier - amount).max(MIN_MULTIPLIER);
    }

    /// Returns the multiplier to neutral and announces it.
    pub fn reset_multiplier(&mut self) {
        self.speed_multiplier = 1.0;
        log::info!("speed multiplier reset to {:.1}x", self.speed_multiplier);
    }

    /// Base speed with the persistent multiplier applied. Pure read.
    pub fn current_speed(&self) -> f64 {
        self.config.base_speed * self.speed_multiplier
    }

    /// The persistent multiplier itself, always within [0.1, 2.0].
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }
}
