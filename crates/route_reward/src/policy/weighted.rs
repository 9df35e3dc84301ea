//! WeightedPolicy - Weighted Sum with Penalties
//!
//! ```text
//! raw   = (Σ wᵢ·componentᵢ + w_progress·milestone + steering) · off_track
//!         - time_penalty - wheel_penalty
//! total = clamp(raw / normalization, -max, max)
//! ```
//!
//! time_trial / qualifier 프리셋은 속도 모델, 지수, 페널티 모델만 다르다.

use tracing::warn;

use super::{RewardBreakdown, ScoringPolicy, StepSignals, WheelVerdict};
use crate::components::{
    curvature_reward, graduated_wheel_penalty, lateral_distance_reward, normalization_factor,
    piecewise_speed_reward, sigmoid_speed_reward, smooth_off_track_penalty, steering_change_bonus,
    time_penalty,
};
use crate::config::{MilestoneSchedule, RewardLimits, SpeedModel, WeightedConfig};
use crate::geometry::TrackSection;
use crate::snapshot::StepSnapshot;

/// 가중합 점수 정책 (signed)
#[derive(Debug, Clone, Default)]
pub struct WeightedPolicy {
    config: WeightedConfig,
}

impl WeightedPolicy {
    pub fn new(config: WeightedConfig) -> Self {
        Self { config }
    }

    fn speed_score(&self, speed: f64, segment_angle: f64) -> f64 {
        match self.config.speed_model {
            SpeedModel::Piecewise { min, optimal_low, optimal_high, max } => {
                piecewise_speed_reward(speed, min, optimal_low, optimal_high, max)
            }
            SpeedModel::Sigmoid { straight_optimum, curve_optimum, scale, section_threshold } => {
                let optimum = match TrackSection::from_angle(segment_angle, section_threshold) {
                    TrackSection::Straight => straight_optimum,
                    TrackSection::Curve => curve_optimum,
                };
                sigmoid_speed_reward(speed, optimum, scale)
            }
        }
    }
}

impl ScoringPolicy for WeightedPolicy {
    fn score(&self, signals: &StepSignals, snap: &StepSnapshot) -> RewardBreakdown {
        let cfg = &self.config;
        let w = &cfg.weights;

        let speed = w.speed * self.speed_score(snap.speed, signals.segment_angle);
        let lateral = w.lateral
            * lateral_distance_reward(
                snap.distance_from_center,
                snap.track_width,
                cfg.lateral_exponent,
            );
        let heading = w.heading * signals.heading_reward;
        let curvature =
            w.curvature * curvature_reward(signals.segment_angle, snap.speed, &cfg.curvature);
        let steering = steering_change_bonus(
            signals.steering_delta,
            snap.speed,
            snap.is_turn_upcoming,
            &cfg.steering,
        );

        let immediate = speed + lateral + heading + curvature + steering;
        let long_term = w.progress * signals.milestone_bonus;
        let off_track =
            smooth_off_track_penalty(snap.normalized_car_distance_from_route, cfg.off_track_floor);

        let penalties = time_penalty(
            &cfg.time_penalty,
            snap.steps,
            snap.distance_from_center,
            snap.track_width,
            snap.speed,
            snap.progress,
        ) + graduated_wheel_penalty(
            snap.all_wheels_on_track,
            snap.wheels_on_track,
            snap.distance_from_center,
            &cfg.wheel_penalty,
        );

        let raw = (immediate + long_term) * off_track - penalties;
        let normalized = raw
            / normalization_factor(
                snap.progress,
                snap.speed,
                snap.track_width,
                snap.steps,
                &cfg.normalization,
            );

        let total = if signals.unpardonable_action {
            warn!(steps = snap.steps, "unpardonable action, reward forced to -max");
            -cfg.limits.max
        } else {
            cfg.limits.clamp(normalized)
        };

        RewardBreakdown {
            total,
            immediate,
            long_term,
            heading_component: heading,
            distance_component: lateral,
            speed_component: speed,
            direction_diff: signals.direction_diff,
            milestone_bonus: signals.milestone_bonus,
            off_track_penalty: off_track,
            penalties,
            wheel_verdict: WheelVerdict::Keep,
            new_episode: signals.new_episode,
        }
    }

    fn milestones(&self) -> &MilestoneSchedule {
        &self.config.milestones
    }

    fn limits(&self) -> RewardLimits {
        self.config.limits
    }

    fn name(&self) -> &str {
        "weighted"
    }
}

// ============================================================================
// Tests
// ============================================================================
