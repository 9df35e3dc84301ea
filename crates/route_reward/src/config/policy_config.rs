//! Scoring Policy Configuration
//!
//! 동일한 신호 집합 위에서 가중치/조합 방식만 다른 점수 정책 설정.
//!
//! - `BaselineConfig`: 초선형 조합 `(HC+DC+SC)² + HC·DC·SC` (기본)
//! - `WeightedConfig`: 가중합 + 시간/바퀴 페널티 + 정규화 (signed)

use serde::{Deserialize, Serialize};

use super::milestone_config::MilestoneSchedule;

// ============================================================================
// RewardLimits
// ============================================================================

/// 최종 보상 범위
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardLimits {
    /// 최소 보상 (기본: 1e-3)
    pub floor: f64,
    /// 최대 보상 (기본: 1000)
    pub max: f64,
    /// `true`면 [-max, max], 아니면 [floor, max]
    pub signed: bool,
}

impl Default for RewardLimits {
    fn default() -> Self {
        Self { floor: 1e-3, max: 1e3, signed: false }
    }
}

impl RewardLimits {
    pub fn signed() -> Self {
        Self { signed: true, ..Self::default() }
    }

    pub fn lower(&self) -> f64 {
        if self.signed {
            -self.max
        } else {
            self.floor
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.floor;
        }
        value.max(self.lower()).min(self.max)
    }
}

// ============================================================================
// BaselineConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    /// HC/DC/SC 스케일 (기본: 10)
    pub component_scale: f64,
    /// progress == 100 완주 보너스 (기본: 500)
    pub completion_bonus: f64,
    /// 커브 구간 일부 바퀴 이탈 시 IC 배수 (기본: 0.5)
    pub partial_wheel_factor: f64,
    pub milestones: MilestoneSchedule,
    pub limits: RewardLimits,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            component_scale: 10.0,
            completion_bonus: 500.0,
            partial_wheel_factor: 0.5,
            milestones: MilestoneSchedule::baseline(),
            limits: RewardLimits::default(),
        }
    }
}

// ============================================================================
// WeightedConfig
// ============================================================================

/// 가중합 계수
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentWeights {
    pub speed: f64,
    pub lateral: f64,
    pub heading: f64,
    pub curvature: f64,
    pub progress: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self { speed: 0.3, lateral: 0.2, heading: 0.2, curvature: 0.2, progress: 0.1 }
    }
}

/// 속도 보상 모델
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SpeedModel {
    /// 0 → 램프 → 최적 구간 1.0 → 램프 다운
    Piecewise { min: f64, optimal_low: f64, optimal_high: f64, max: f64 },
    /// 직선/커브 구간별 최적 속도 기준 sigmoid
    Sigmoid {
        straight_optimum: f64,
        curve_optimum: f64,
        scale: f64,
        /// 직선 판정 segment 각도 (rad)
        section_threshold: f64,
    },
}

impl SpeedModel {
    pub fn piecewise() -> Self {
        SpeedModel::Piecewise { min: 1.0, optimal_low: 2.0, optimal_high: 3.5, max: 4.0 }
    }

    pub fn sigmoid() -> Self {
        SpeedModel::Sigmoid {
            straight_optimum: 4.0,
            curve_optimum: 3.0,
            scale: 0.3,
            section_threshold: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvatureConfig {
    /// 저속 판정 속도 (기본: 2.5)
    pub slow_speed: f64,
    /// 중간 곡률 저속 주행 보너스 (기본: 1.5)
    pub slow_bonus: f64,
    /// 급커브 감쇠를 speed/4로 스케일 (qualifier)
    pub speed_scaled: bool,
}

impl Default for CurvatureConfig {
    fn default() -> Self {
        Self { slow_speed: 2.5, slow_bonus: 1.5, speed_scaled: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringBonusConfig {
    pub multiplier: f64,
    /// 이 각도 변화에서 보너스 0 (deg)
    pub angle_tolerance_deg: f64,
    pub speed_divisor: f64,
    /// 커브 예고 시 배수 (기본: 1.0 = 없음)
    pub turn_boost: f64,
}

impl Default for SteeringBonusConfig {
    fn default() -> Self {
        Self { multiplier: 2.0, angle_tolerance_deg: 10.0, speed_divisor: 3.0, turn_boost: 1.0 }
    }
}

/// 시간 페널티 모델
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum TimePenaltyModel {
    /// `factor * steps`, 중앙에서 track_width/4 이상 벗어나면 배수 적용
    Linear { factor: f64, off_center_multiplier: f64 },
    /// 이탈 거리/저속/저진행률에 따라 가중
    Adaptive {
        factor: f64,
        low_speed: f64,
        low_speed_multiplier: f64,
        low_progress: f64,
        low_progress_multiplier: f64,
    },
}

impl TimePenaltyModel {
    pub fn linear() -> Self {
        TimePenaltyModel::Linear { factor: 0.01, off_center_multiplier: 2.0 }
    }

    pub fn adaptive() -> Self {
        TimePenaltyModel::Adaptive {
            factor: 0.01,
            low_speed: 1.0,
            low_speed_multiplier: 1.5,
            low_progress: 10.0,
            low_progress_multiplier: 1.2,
        }
    }
}

/// 이탈 바퀴 수별 페널티
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelPenaltyConfig {
    pub three_on: f64,
    pub two_on: f64,
    pub one_on: f64,
    pub none_on: f64,
    /// 전체 이탈 시 distance_from_center 추가
    pub scale_by_distance: bool,
}

impl Default for WheelPenaltyConfig {
    fn default() -> Self {
        Self { three_on: 0.1, two_on: 0.25, one_on: 0.5, none_on: 1.0, scale_by_distance: false }
    }
}

/// 나눗셈 정규화 계수
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// progress/speed 항의 거듭제곱
    pub power: i32,
    pub epsilon: f64,
    pub min_complexity: f64,
    pub width_divisor: f64,
    /// complexity에 steps/100 포함
    pub include_steps: bool,
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self {
            power: 1,
            epsilon: 1e-3,
            min_complexity: 0.5,
            width_divisor: 5.0,
            include_steps: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightedConfig {
    pub weights: ComponentWeights,
    pub speed_model: SpeedModel,
    pub lateral_exponent: f64,
    pub curvature: CurvatureConfig,
    pub steering: SteeringBonusConfig,
    pub time_penalty: TimePenaltyModel,
    pub wheel_penalty: WheelPenaltyConfig,
    pub normalization: NormalizationConfig,
    /// `max(floor, 1 - |normalized_car_distance_from_route|)` (기본: 0.1)
    pub off_track_floor: f64,
    pub milestones: MilestoneSchedule,
    pub limits: RewardLimits,
}

impl Default for WeightedConfig {
    fn default() -> Self {
        Self::time_trial()
    }
}

impl WeightedConfig {
    /// 구간 무관 piecewise 속도 + 선형 시간 페널티
    pub fn time_trial() -> Self {
        Self {
            weights: ComponentWeights::default(),
            speed_model: SpeedModel::piecewise(),
            lateral_exponent: 1.0,
            curvature: CurvatureConfig::default(),
            steering: SteeringBonusConfig::default(),
            time_penalty: TimePenaltyModel::linear(),
            wheel_penalty: WheelPenaltyConfig::default(),
            normalization: NormalizationConfig::default(),
            off_track_floor: 0.1,
            milestones: MilestoneSchedule::time_trial(),
            limits: RewardLimits::signed(),
        }
    }

    /// 구간별 sigmoid 속도 + 적응형 시간 페널티 + 제곱 정규화
    pub fn qualifier() -> Self {
        Self {
            speed_model: SpeedModel::sigmoid(),
            lateral_exponent: 1.5,
            curvature: CurvatureConfig { speed_scaled: true, ..CurvatureConfig::default() },
            steering: SteeringBonusConfig {
                speed_divisor: 4.0,
                turn_boost: 1.2,
                ..SteeringBonusConfig::default()
            },
            time_penalty: TimePenaltyModel::adaptive(),
            wheel_penalty: WheelPenaltyConfig {
                scale_by_distance: true,
                ..WheelPenaltyConfig::default()
            },
            normalization: NormalizationConfig {
                power: 2,
                include_steps: true,
                ..NormalizationConfig::default()
            },
            milestones: MilestoneSchedule::qualifier(),
            ..Self::time_trial()
        }
    }
}

// ============================================================================
// PolicyConfig
// ============================================================================

/// 주입 가능한 점수 정책 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyConfig {
    Baseline(BaselineConfig),
    Weighted(WeightedConfig),
}

impl Default for PolicyConfig {
    fn default() -> Self {
        PolicyConfig::Baseline(BaselineConfig::default())
    }
}

impl PolicyConfig {
    pub fn limits(&self) -> RewardLimits {
        match self {
            PolicyConfig::Baseline(cfg) => cfg.limits,
            PolicyConfig::Weighted(cfg) => cfg.limits,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let limits = self.limits();
        if !(limits.floor > 0.0 && limits.floor < limits.max) {
            return Err(format!(
                "reward floor ({}) must be positive and below max ({})",
                limits.floor, limits.max
            ));
        }
        match self {
            PolicyConfig::Baseline(cfg) => {
                if cfg.component_scale <= 0.0 {
                    return Err("component_scale must be positive".to_string());
                }
                if !(0.0..=1.0).contains(&cfg.partial_wheel_factor) {
                    return Err("partial_wheel_factor must lie in [0, 1]".to_string());
                }
            }
            PolicyConfig::Weighted(cfg) => {
                if cfg.normalization.min_complexity <= 0.0 {
                    return Err("normalization.min_complexity must be positive".to_string());
                }
                if cfg.normalization.epsilon <= 0.0 {
                    return Err("normalization.epsilon must be positive".to_string());
                }
                if cfg.steering.speed_divisor <= 0.0 || cfg.steering.angle_tolerance_deg <= 0.0 {
                    return Err("steering divisors must be positive".to_string());
                }
            }
        }
        Ok(())
    }
}
