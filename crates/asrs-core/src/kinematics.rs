//! Constant-acceleration travel-time model.
//!
//! # Motion model
//!
//! A crane robot accelerating from rest at `a` and braking symmetrically
//! covers distance `d` in
//!
//!   t = 2 * sqrt(d / (2a))
//!
//! (accelerate over the first half, decelerate over the second).  Horizontal
//! and vertical axes move sequentially, so their times add.  The sum is then
//! inflated by a traffic multiplier (aisle congestion) and the target node's
//! demand factor (hot SKU zones are slower to serve).  Both multipliers are
//! clamped to a floor of 1.0 — values below 1 would model robots going
//! *faster* under congestion, which is never intended.

use crate::{CoreError, CoreResult};

/// Per-axis acceleration of the robot fleet, in m/s².
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicParams {
    /// Horizontal (along-aisle) acceleration.
    pub accel_x_mps2: f64,
    /// Vertical (mast) acceleration.
    pub accel_z_mps2: f64,
}

impl KinematicParams {
    pub fn new(accel_x_mps2: f64, accel_z_mps2: f64) -> Self {
        Self { accel_x_mps2, accel_z_mps2 }
    }

    /// Reject non-positive accelerations.
    pub fn validate(&self) -> CoreResult<()> {
        if self.accel_x_mps2 <= 0.0 || !self.accel_x_mps2.is_finite() {
            return Err(CoreError::Domain(format!(
                "horizontal acceleration must be positive, got {}",
                self.accel_x_mps2
            )));
        }
        if self.accel_z_mps2 <= 0.0 || !self.accel_z_mps2.is_finite() {
            return Err(CoreError::Domain(format!(
                "vertical acceleration must be positive, got {}",
                self.accel_z_mps2
            )));
        }
        Ok(())
    }
}

/// Travel time in seconds for one move of `distance_x_m` horizontally and
/// `distance_z_m` vertically.
///
/// Zero distance on both axes returns exactly `0.0` regardless of the
/// multipliers.  Negative distances and non-positive accelerations are
/// domain errors.  Monotonically non-decreasing in each distance.
pub fn travel_time_secs(
    distance_x_m: f64,
    distance_z_m: f64,
    kinematics: &KinematicParams,
    traffic_multiplier: f64,
    demand_factor: f64,
) -> CoreResult<f64> {
    kinematics.validate()?;
    if distance_x_m < 0.0 || distance_z_m < 0.0 {
        return Err(CoreError::Domain(format!(
            "distances must be non-negative, got ({distance_x_m}, {distance_z_m})"
        )));
    }

    let horizontal = axis_time_secs(distance_x_m, kinematics.accel_x_mps2);
    let vertical = axis_time_secs(distance_z_m, kinematics.accel_z_mps2);

    let traffic = traffic_multiplier.max(1.0);
    let demand = demand_factor.max(1.0);
    Ok((horizontal + vertical) * traffic * demand)
}

/// Single-axis time: accelerate halfway, brake halfway.
#[inline]
fn axis_time_secs(distance_m: f64, accel_mps2: f64) -> f64 {
    2.0 * (distance_m / (2.0 * accel_mps2)).sqrt()
}
