//! BaselinePolicy - Super-linear Composition
//!
//! ```text
//! HC = 10 · heading · steering_maintain
//! DC = 10 · distance · distance_reduction
//! SC = 10 · speed · speed_maintain · speed_increase
//! IC = (HC + DC + SC)² + HC·DC·SC
//! LC = curve_bonus + milestone + straight_section_bonus (+500 완주)
//! total = clamp(max(IC + LC, floor) · off_track)
//! ```
//!
//! 축별 개선이 균형 잡힐수록 곱 항이 커져 보상이 복리로 증가한다.

use tracing::warn;

use super::{wheel_verdict, RewardBreakdown, ScoringPolicy, StepSignals, WheelVerdict};
use crate::config::{BaselineConfig, MilestoneSchedule, RewardLimits};
use crate::snapshot::StepSnapshot;

/// 기본 점수 정책
#[derive(Debug, Clone, Default)]
pub struct BaselinePolicy {
    config: BaselineConfig,
}

impl BaselinePolicy {
    pub fn new(config: BaselineConfig) -> Self {
        Self { config }
    }
}

impl ScoringPolicy for BaselinePolicy {
    fn score(&self, signals: &StepSignals, snap: &StepSnapshot) -> RewardBreakdown {
        let cfg = &self.config;
        let floor = cfg.limits.floor;
        let scale = cfg.component_scale;

        let hc = scale * signals.heading_reward * signals.steering_angle_maintain_bonus;
        let dc = scale * signals.distance_reward * signals.distance_reduction_bonus;
        let sc = scale
            * signals.speed_reward
            * signals.speed_maintain_bonus
            * signals.speed_increase_bonus;

        let mut immediate = (hc + dc + sc).powi(2) + hc * dc * sc;
        if signals.unpardonable_action {
            immediate = floor;
        }

        let mut long_term =
            snap.curve_bonus + signals.milestone_bonus + snap.straight_section_bonus;
        if snap.progress >= 100.0 {
            long_term += cfg.completion_bonus;
        }

        let verdict = wheel_verdict(snap);
        let pre_penalty = match verdict {
            WheelVerdict::ForceFloor => {
                warn!(
                    steps = snap.steps,
                    wheels_on_track = snap.wheels_on_track,
                    turn_upcoming = snap.is_turn_upcoming,
                    "wheels off track, reward forced to floor"
                );
                floor
            }
            WheelVerdict::HalveImmediate => {
                immediate *= cfg.partial_wheel_factor;
                (immediate + long_term).max(floor)
            }
            WheelVerdict::Keep => (immediate + long_term).max(floor),
        };

        RewardBreakdown {
            total: cfg.limits.clamp(pre_penalty * signals.off_track_penalty),
            immediate,
            long_term,
            heading_component: hc,
            distance_component: dc,
            speed_component: sc,
            direction_diff: signals.direction_diff,
            milestone_bonus: signals.milestone_bonus,
            off_track_penalty: signals.off_track_penalty,
            penalties: 0.0,
            wheel_verdict: verdict,
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
        "baseline"
    }
}

// ============================================================================
// Tests
// ============================================================================
