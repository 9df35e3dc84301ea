//! Route geometry helpers
//!
//! Angles follow the simulator convention: 0° points along +x and grows
//! counter-clockwise.
//!
//! `direction_diff` is deliberately NOT wrapped into (-180, 180]. A heading of
//! 179° toward a waypoint at -179° reports -358°, not 2°. Reward shaping is
//! tuned against the unwrapped value, so callers must not normalize it.

use serde::{Deserialize, Serialize};

use crate::snapshot::Point;

/// Direction from `from` to `to` in degrees, in (-180, 180].
#[inline]
pub fn route_direction(from: Point, to: Point) -> f64 {
    (to.1 - from.1).atan2(to.0 - from.0).to_degrees()
}

/// Route direction toward `next` minus the vehicle heading (unwrapped).
#[inline]
pub fn direction_diff(heading: f64, position: Point, next: Point) -> f64 {
    route_direction(position, next) - heading
}

/// Angle of the previous→next waypoint segment in radians.
#[inline]
pub fn segment_angle(prev: Point, next: Point) -> f64 {
    (next.1 - prev.1).atan2(next.0 - prev.0)
}

/// Straight / curve classification of the local segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSection {
    Straight,
    Curve,
}

impl TrackSection {
    /// `threshold` is in radians against the absolute segment angle.
    pub fn from_angle(segment_angle: f64, threshold: f64) -> Self {
        if segment_angle.abs() < threshold {
            TrackSection::Straight
        } else {
            TrackSection::Curve
        }
    }
}
