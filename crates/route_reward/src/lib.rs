//! # route_reward - Stateful Route-following Reward Engine
//!
//! Per-step reward shaping for reinforcement-learning rollouts of a simulated
//! vehicle following a closed-loop route.
//!
//! ## Features
//! - Explicit per-worker `EpisodeState` (no process-wide state)
//! - Super-linear baseline composition with fire-once progress milestones
//! - Off-track, wheel/turn and unpardonable-action overrides
//! - Injectable scoring policies (baseline, time-trial, qualifier)
//! - JSON/YAML configuration with named presets
//!
//! ```rust
//! use route_reward::RewardEngine;
//! use serde_json::json;
//!
//! let mut engine = RewardEngine::baseline();
//! let reward = engine
//!     .evaluate_json(&json!({
//!         "heading": 0.0,
//!         "distance_from_center": 0.0,
//!         "steps": 10,
//!         "steering_angle": 0.0,
//!         "speed": 3.0,
//!         "x": 0.0,
//!         "y": 0.0,
//!         "waypoints": [[0.0, 0.0], [1.0, 0.0]],
//!         "closest_waypoints": [0, 1],
//!         "all_wheels_on_track": true,
//!         "bearing": "center"
//!     }))
//!     .unwrap();
//! assert!((1e-3..=1000.0).contains(&reward));
//! ```

// Calculators take the full signal set as plain arguments
#![allow(clippy::too_many_arguments)]

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod policy;
pub mod snapshot;
pub mod state;

pub use config::{EngineConfig, PolicyConfig, RewardLimits, SignalConfig};
pub use engine::RewardEngine;
pub use error::{RewardError, Result};
pub use metrics::{EpisodeEnd, EpisodeMetrics};
pub use policy::{
    BaselinePolicy, RewardBreakdown, ScoringPolicy, StepSignals, WeightedPolicy, WheelVerdict,
};
pub use snapshot::{Bearing, Point, StepSnapshot};
pub use state::EpisodeState;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
