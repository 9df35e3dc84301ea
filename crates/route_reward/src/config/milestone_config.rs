//! Milestone Schedule
//!
//! 진행률 decile 마일스톤 보너스 값 계산 규칙.
//! 1회 지급 여부는 `EpisodeState`가 관리하고, 여기서는 값만 계산한다.
//!
//! | 스케줄 | 지수 |
//! |--------|------|
//! | baseline | 5 + 0.75·decile (decile 10 → 14) |
//! | time_trial | 1 + 0.5·decile |
//! | qualifier | 1 + 0.5·decile / (steps / track_width) |

use serde::{Deserialize, Serialize};

/// 초반 스텝(`steps <= min_steps`) 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyStepMode {
    /// 지급하지 않음
    Skip,
    /// progress_reward = 1로 고정하고 지급
    UnitReward,
}

/// 마일스톤 지수 규칙
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum MilestoneExponent {
    /// `base + per_decile * decile`, decile 10은 `final_exponent` 우선
    Linear { base: f64, per_decile: f64, final_exponent: Option<f64> },
    /// `base + per_decile * decile / (steps / track_width)`
    StepScaled { base: f64, per_decile: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneSchedule {
    /// 이 스텝 수 이하에서는 `early_steps` 규칙 적용 (기본: 5)
    pub min_steps: u64,
    pub early_steps: EarlyStepMode,
    /// decile 0 (progress < 10) 지급 여부
    pub include_first_decile: bool,
    pub exponent: MilestoneExponent,
}

impl Default for MilestoneSchedule {
    fn default() -> Self {
        Self::baseline()
    }
}

impl MilestoneSchedule {
    pub fn baseline() -> Self {
        Self {
            min_steps: 5,
            early_steps: EarlyStepMode::Skip,
            include_first_decile: true,
            exponent: MilestoneExponent::Linear {
                base: 5.0,
                per_decile: 0.75,
                final_exponent: Some(14.0),
            },
        }
    }

    pub fn time_trial() -> Self {
        Self {
            min_steps: 5,
            early_steps: EarlyStepMode::UnitReward,
            include_first_decile: false,
            exponent: MilestoneExponent::Linear {
                base: 1.0,
                per_decile: 0.5,
                final_exponent: None,
            },
        }
    }

    pub fn qualifier() -> Self {
        Self {
            min_steps: 5,
            early_steps: EarlyStepMode::UnitReward,
            include_first_decile: false,
            exponent: MilestoneExponent::StepScaled { base: 1.0, per_decile: 0.5 },
        }
    }

    /// decile 보너스 값 (지급 대상이 아니면 `None`)
    pub fn value(&self, decile: usize, progress: f64, steps: u64, track_width: f64) -> Option<f64> {
        if decile == 0 && !self.include_first_decile {
            return None;
        }

        let progress_reward = if steps <= self.min_steps {
            match self.early_steps {
                EarlyStepMode::Skip => return None,
                EarlyStepMode::UnitReward => 1.0,
            }
        } else {
            10.0 * progress / steps as f64
        };

        let d = decile as f64;
        let exponent = match self.exponent {
            MilestoneExponent::Linear { base, per_decile, final_exponent } => match final_exponent {
                Some(last) if decile == 10 => last,
                _ => base + per_decile * d,
            },
            MilestoneExponent::StepScaled { base, per_decile } => {
                let scale = steps as f64 / track_width;
                if scale > 0.0 {
                    base + per_decile * d / scale
                } else {
                    base
                }
            }
        };

        let value = progress_reward.powf(exponent);
        if value.is_nan() {
            None
        } else {
            Some(value.min(f64::MAX))
        }
    }
}
