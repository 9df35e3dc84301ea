//! Shared fixtures for integration tests

#![allow(dead_code)]

use route_reward::StepSnapshot;
use serde_json::{json, Value};

/// Square loop around the origin, counter-clockwise.
pub fn square_track() -> Value {
    json!([[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [-1.0, 1.0]])
}

/// Aligned straight-line step: heading 0°, vehicle at (0,0), next waypoint (1,0).
pub fn aligned_params(steps: u64, speed: f64, progress: f64) -> Value {
    json!({
        "heading": 0.0,
        "distance_from_center": 0.0,
        "steps": steps,
        "steering_angle": 0.0,
        "speed": speed,
        "x": 0.0,
        "y": 0.0,
        "waypoints": square_track(),
        "closest_waypoints": [0, 1],
        "all_wheels_on_track": true,
        "progress": progress,
        "bearing": "center",
        "is_turn_upcoming": false,
        "track_width": 1.0
    })
}

pub fn aligned(steps: u64, speed: f64, progress: f64) -> StepSnapshot {
    match StepSnapshot::from_value(&aligned_params(steps, speed, progress)) {
        Ok(snap) => snap,
        Err(err) => panic!("fixture must be valid: {}", err),
    }
}

/// Overlay `patch` keys onto `base`.
pub fn merged(mut base: Value, patch: Value) -> Value {
    if let (Some(base_map), Value::Object(patch_map)) = (base.as_object_mut(), patch) {
        for (key, value) in patch_map {
            base_map.insert(key, value);
        }
    }
    base
}
