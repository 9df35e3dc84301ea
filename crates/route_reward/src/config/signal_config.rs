//! Signal Configuration
//!
//! 엔진이 매 스텝 계산하는 기본 신호(속도/방향/거리/보너스)의 튜닝 상수.

use serde::{Deserialize, Serialize};

/// 컴포넌트 신호 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    // === Speed ===
    /// 속도 보상 램프 하한 (기본: 1.5)
    pub min_speed: f64,
    /// 속도 보상 램프 상한 (기본: 4.0)
    pub max_speed: f64,
    /// 하한 미만 속도의 고정 보상 (기본: 0.1)
    pub slow_speed_reward: f64,
    /// 감속 없이 이전 스텝이 있을 때의 기본 가속 보너스 (기본: 2.0)
    pub speed_increase_default: f64,

    // === Heading ===
    /// cos 지수 (기본: 10)
    pub heading_exponent: i32,
    /// 정렬 구간 (deg) (기본: 20)
    pub aligned_window_deg: f64,
    /// 정렬 구간 완화 지수 (기본: 0.4)
    pub aligned_softening: f64,

    // === Distance ===
    /// σ = 경계 거리 / divisor (기본: 4)
    pub sigma_divisor: f64,
    /// 거리 감소 보너스 상한 (기본: 2.0)
    pub distance_reduction_cap: f64,

    // === Steering ===
    /// 조향 유지 보너스 배수 (기본: 2.0)
    pub steering_multiplier: f64,
    /// 조향 유지 1단계 방향 오차 (deg) (기본: 10)
    pub steering_coarse_deg: f64,
    /// 조향 유지 2단계 방향 오차 (deg) (기본: 5)
    pub steering_fine_deg: f64,

    // === Off-track ===
    /// 이 값 미만이면 고정 바닥값 적용 (기본: 0.5)
    pub off_track_threshold: f64,
    /// 이탈 페널티 바닥값 (기본: 0.1)
    pub off_track_floor: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            min_speed: 1.5,
            max_speed: 4.0,
            slow_speed_reward: 0.1,
            speed_increase_default: 2.0,

            heading_exponent: 10,
            aligned_window_deg: 20.0,
            aligned_softening: 0.4,

            sigma_divisor: 4.0,
            distance_reduction_cap: 2.0,

            steering_multiplier: 2.0,
            steering_coarse_deg: 10.0,
            steering_fine_deg: 5.0,

            off_track_threshold: 0.5,
            off_track_floor: 0.1,
        }
    }
}

impl SignalConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_speed < self.max_speed) {
            return Err(format!(
                "min_speed ({}) must be below max_speed ({})",
                self.min_speed, self.max_speed
            ));
        }
        if self.min_speed <= 0.0 {
            return Err("min_speed must be positive".to_string());
        }
        if self.sigma_divisor <= 0.0 {
            return Err("sigma_divisor must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.off_track_floor) {
            return Err("off_track_floor must lie in [0, 1]".to_string());
        }
        if self.heading_exponent < 0 {
            return Err("heading_exponent must be non-negative".to_string());
        }
        Ok(())
    }
}
