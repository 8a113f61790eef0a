//! Steering: pick a target bearing from the scan and turn it into a wheel
//! angle.

use crate::driver::DriverConfig;
use slipstream_api::Error;

const RACING_MAX_TURN: f64 = 0.8;
const NORMAL_MAX_TURN: f64 = 0.5;

/// Steering limit for the current mode.
pub fn max_turn(config: &DriverConfig) -> f64 {
    if config.racing_mode {
        RACING_MAX_TURN
    } else {
        NORMAL_MAX_TURN
    }
}

/// Chooses a steering angle in [-max_turn, max_turn] from a trimmed scan
/// and the flagged edge indices.
///
/// The default target is the bearing of the farthest reading. With
/// aggressive turns enabled and at least two edges flagged, the target
/// becomes the widest gap between edges instead: the midpoint of each
/// adjacent edge pair is scored by its scan distance and the best one wins.
/// Ties always resolve to the first candidate so the same scan steers the
/// same way every tick.
///
/// `edges` must index into `changes` from the same trimmed scan; the
/// pipeline guarantees this since the change series is length-preserving.
pub fn steering_angle(scan: &[f64], edges: &[usize], config: &DriverConfig) -> Result<f64, Error> {
    if scan.is_empty() {
        return Err(Error::InvalidInput(
            "steering needs a non-empty scan".to_string(),
        ));
    }

    let mut target = index_of_max(scan);

    if config.aggressive_turns && edges.len() >= 2 {
        let mut best: Option<usize> = None;
        for pair in edges.windows(2) {
            let midpoint = (pair[0] + pair[1]) / 2;
            match best {
                Some(current) if scan[midpoint] <= scan[current] => {}
                _ => best = Some(midpoint),
            }
        }
        if let Some(midpoint) = best {
            target = midpoint;
        }
    }

    // Beam 0 is hard left, the middle beam is straight ahead. A scan with a
    // single beam has no off-center bearings, so it always steers straight.
    let center = scan.len() / 2;
    let raw = if center == 0 {
        0.0
    } else {
        (target as f64 - center as f64) / center as f64
    };

    let limit = max_turn(config);
    Ok(raw.clamp(-limit, limit))
}

fn index_of_max(scan: &[f64]) -> usize {
    let mut best = 0;
    for (index, &distance) in scan.iter().enumerate().skip(1) {
        if distance > scan[best] {
            best = index;
        }
    }
    best
}
