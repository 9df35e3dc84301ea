//! # Reward Configuration Module
//!
//! 보상 엔진의 튜닝 상수를 한 곳에서 관리하는 설정 시스템.
//!
//! ## 구성
//! - `SignalConfig`: 스텝 신호 계산 상수 (속도 램프, heading, σ, 조향 유지, 이탈)
//! - `PolicyConfig`: 주입할 점수 정책 (baseline / weighted)
//! - `MilestoneSchedule`, `RewardLimits`: 정책별 마일스톤 규칙과 보상 범위
//!
//! ## 사용법
//! ```rust
//! use route_reward::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let qualifier = EngineConfig::qualifier();
//! assert!(qualifier.policy.limits().signed);
//! ```
//!
//! ## Environment Variables
//!
//! - `ROUTE_REWARD_PROFILE`: 프리셋 선택 (baseline, time_trial, qualifier)

mod milestone_config;
mod policy_config;
mod signal_config;

pub use milestone_config::{EarlyStepMode, MilestoneExponent, MilestoneSchedule};
pub use policy_config::{
    BaselineConfig, ComponentWeights, CurvatureConfig, NormalizationConfig, PolicyConfig,
    RewardLimits, SpeedModel, SteeringBonusConfig, TimePenaltyModel, WeightedConfig,
    WheelPenaltyConfig,
};
pub use signal_config::SignalConfig;

use serde::{Deserialize, Serialize};
use std::env;
use tracing::trace;

use crate::error::{RewardError, Result};

pub const PROFILE_ENV: &str = "ROUTE_REWARD_PROFILE";

/// 엔진 전체 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub signals: SignalConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl EngineConfig {
    /// 초선형 baseline (기본)
    pub fn baseline() -> Self {
        Self::default()
    }

    /// 가중합 + piecewise 속도 (signed)
    pub fn time_trial() -> Self {
        Self {
            signals: SignalConfig::default(),
            policy: PolicyConfig::Weighted(WeightedConfig::time_trial()),
        }
    }

    /// 가중합 + 구간별 sigmoid 속도 + 제곱 정규화 (signed)
    pub fn qualifier() -> Self {
        Self {
            signals: SignalConfig::default(),
            policy: PolicyConfig::Weighted(WeightedConfig::qualifier()),
        }
    }

    pub fn from_profile(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "baseline" | "default" => Some(Self::baseline()),
            "time_trial" => Some(Self::time_trial()),
            "qualifier" => Some(Self::qualifier()),
            _ => None,
        }
    }

    pub fn from_env_or_default() -> Self {
        env::var(PROFILE_ENV)
            .ok()
            .and_then(|name| Self::from_profile(&name))
            .unwrap_or_default()
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| RewardError::Config(e.to_string()))?;
        trace!(policy = ?config.policy_kind(), "loaded reward config from JSON");
        config.validated()
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        trace!(policy = ?config.policy_kind(), "loaded reward config from YAML");
        config.validated()
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.signals.validate().map_err(RewardError::Config)?;
        self.policy.validate().map_err(RewardError::Config)?;
        Ok(())
    }

    fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    fn policy_kind(&self) -> &'static str {
        match self.policy {
            PolicyConfig::Baseline(_) => "baseline",
            PolicyConfig::Weighted(_) => "weighted",
        }
    }
}

// ========== Tests ==========
