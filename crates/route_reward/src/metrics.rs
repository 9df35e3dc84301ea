//! EpisodeMetrics - Per-episode Reward Statistics
//!
//! 훈련 루프가 에피소드 단위로 확인하는 보상 통계.
//! `EpisodeState`와 함께 리셋되며, 직전 에피소드 값은
//! `RewardEngine::last_episode_metrics()`로 조회한다.
//!
//! ```rust,ignore
//! let mut metrics = EpisodeMetrics::new();
//! metrics.record(&breakdown);
//! metrics.finish(EpisodeEnd::StepRegression);
//! ```

use serde::{Deserialize, Serialize};

use crate::policy::{RewardBreakdown, WheelVerdict};

// ============================================================================
// EpisodeEnd
// ============================================================================

/// 에피소드 종료 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeEnd {
    /// 진행 중
    #[default]
    InProgress,
    /// `steps` 감소로 새 에피소드 감지
    StepRegression,
    /// 하네스의 명시적 `reset()`
    ExplicitReset,
}

impl EpisodeEnd {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EpisodeEnd::InProgress)
    }
}

// ============================================================================
// EpisodeMetrics
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeMetrics {
    /// 평가한 스텝 수
    pub total_steps: u64,
    pub cumulative_reward: f64,
    /// 최대 스텝 보상 (스텝이 없으면 None)
    pub max_reward: Option<f64>,

    /// 지급된 마일스톤 수
    pub milestones_fired: u32,
    pub milestone_bonus_total: f64,

    /// 바퀴 이탈로 floor 고정된 스텝
    pub floor_overrides: u32,
    /// 커브 구간 IC 감쇠 스텝
    pub halved_immediate_steps: u32,
    pub unpardonable_steps: u32,
    /// 이탈 배수가 1 미만인 스텝
    pub off_track_steps: u32,

    pub end: EpisodeEnd,
}

impl EpisodeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 스텝 기록
    pub fn record(&mut self, breakdown: &RewardBreakdown, unpardonable: bool) {
        self.total_steps += 1;
        self.cumulative_reward += breakdown.total;
        self.max_reward = Some(match self.max_reward {
            Some(max) => max.max(breakdown.total),
            None => breakdown.total,
        });

        if breakdown.milestone_bonus > 0.0 {
            self.milestones_fired += 1;
            self.milestone_bonus_total += breakdown.milestone_bonus;
        }

        match breakdown.wheel_verdict {
            WheelVerdict::ForceFloor => self.floor_overrides += 1,
            WheelVerdict::HalveImmediate => self.halved_immediate_steps += 1,
            WheelVerdict::Keep => {}
        }

        if unpardonable {
            self.unpardonable_steps += 1;
        }
        if breakdown.off_track_penalty < 1.0 {
            self.off_track_steps += 1;
        }
    }

    pub fn finish(&mut self, end: EpisodeEnd) {
        self.end = end;
    }

    /// 평균 스텝 보상 (스텝이 없으면 0)
    pub fn mean_reward(&self) -> f64 {
        if self.total_steps == 0 {
            0.0
        } else {
            self.cumulative_reward / self.total_steps as f64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_steps == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Tests
// ============================================================================
