//! Component Reward Calculators
//!
//! 모든 함수는 순수 함수. 0 나눗셈 등 퇴화 케이스는 에러 대신
//! 중립값(1) 또는 최대 보상으로 처리한다.
//!
//! ## Baseline 신호
//! - `speed_reward`: 1.5 ~ 4.0 선형 램프
//! - `heading_reward`: cos^10, ±20° 이내는 ^0.4로 완화
//! - `distance_reward`: 경계 거리 기반 σ 가우시안
//! - `steering_maintain_bonus`, `speed_bonuses`, `distance_reduction_bonus`: 이전 스텝 비교
//! - `off_track_penalty`: 0.5 미만이면 0.1로 고정 (불연속)
//!
//! ## Weighted 변형 신호
//! - `piecewise_speed_reward`, `sigmoid_speed_reward`, `lateral_distance_reward`,
//!   `curvature_reward`, `steering_change_bonus`, `time_penalty`,
//!   `graduated_wheel_penalty`, `normalization_factor`

use std::f64::consts::PI;

use crate::config::{
    CurvatureConfig, NormalizationConfig, SignalConfig, SteeringBonusConfig, TimePenaltyModel,
    WheelPenaltyConfig,
};
use crate::snapshot::Bearing;

/// `num / den`, 분모가 0이거나 결과가 유한하지 않으면 1.
#[inline]
pub fn safe_ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 1.0;
    }
    let ratio = num / den;
    if ratio.is_finite() {
        ratio
    } else {
        1.0
    }
}

/// Relative tolerance 1e-9; exact equality always counts.
#[inline]
pub fn is_close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

// ============================================================================
// Baseline signals
// ============================================================================

/// 속도 보상: MIN 미만 0.1, MAX 초과 1.0, 사이 선형
pub fn speed_reward(speed: f64, cfg: &SignalConfig) -> f64 {
    if speed < cfg.min_speed {
        cfg.slow_speed_reward
    } else if speed > cfg.max_speed {
        1.0
    } else {
        (speed - cfg.min_speed) / (cfg.max_speed - cfg.min_speed)
    }
}

/// heading 보상: 정렬 시 1.0, 부호 대칭
pub fn heading_reward(direction_diff: f64, cfg: &SignalConfig) -> f64 {
    let abs_diff = direction_diff.abs();
    let base = abs_diff.to_radians().cos().powi(cfg.heading_exponent);
    if abs_diff <= cfg.aligned_window_deg {
        base.powf(cfg.aligned_softening)
    } else {
        base
    }
}

/// 중앙선 거리 보상
///
/// bearing이 center면 1. 아니면 `exp(-0.5·d²/σ²)`,
/// σ = 안쪽(right) 또는 바깥쪽(left/unspecified) 경계 거리 / 4.
/// σ = 0이면 최대 보상 1.
pub fn distance_reward(
    bearing: Bearing,
    car_distance_from_route: f64,
    inner_border_distance: f64,
    outer_border_distance: f64,
    cfg: &SignalConfig,
) -> f64 {
    if bearing.is_center() {
        return 1.0;
    }
    let border = match bearing {
        Bearing::Right => inner_border_distance,
        _ => outer_border_distance,
    };
    let sigma = (border / cfg.sigma_divisor).abs();
    if sigma == 0.0 {
        return 1.0;
    }
    let d = car_distance_from_route.abs();
    (-0.5 * d * d / (sigma * sigma)).exp()
}

/// 조향 유지 보너스 (1, 2, 4, 8)
///
/// 방향이 맞고 조향각이 이전 스텝과 같을 때만 적용.
/// 오차 < 10°, 오차 < 5°, 오차 개선 각각에 대해 2배.
pub fn steering_maintain_bonus(
    heading_in_right_direction: bool,
    prev_steering_angle: Option<f64>,
    steering_angle: f64,
    prev_direction_diff: Option<f64>,
    direction_diff: f64,
    cfg: &SignalConfig,
) -> f64 {
    let mut bonus = 1.0;
    let prev_steering = match prev_steering_angle {
        Some(prev) if heading_in_right_direction => prev,
        _ => return bonus,
    };
    if !is_close(prev_steering, steering_angle) {
        return bonus;
    }

    let abs_diff = direction_diff.abs();
    if abs_diff < cfg.steering_coarse_deg {
        bonus *= cfg.steering_multiplier;
    }
    if abs_diff < cfg.steering_fine_deg {
        bonus *= cfg.steering_multiplier;
    }
    if prev_direction_diff.map_or(false, |prev| prev.abs() > abs_diff) {
        bonus *= cfg.steering_multiplier;
    }
    bonus
}

/// (speed_maintain_bonus, speed_increase_bonus)
///
/// 이전 속도 없음 → (1, 1).
/// 감속 + 직선 → (min(v/max(prev, MIN), 1), 기본값 2).
/// 그 외 → (1, max(v/max(prev, MIN), 1)).
pub fn speed_bonuses(
    speed: f64,
    prev_speed: Option<f64>,
    turn_upcoming: bool,
    cfg: &SignalConfig,
) -> (f64, f64) {
    let prev = match prev_speed {
        Some(prev) => prev,
        None => return (1.0, 1.0),
    };
    let ratio = safe_ratio(speed, prev.max(cfg.min_speed));
    let has_speed_dropped = prev > speed;

    if has_speed_dropped && !turn_upcoming {
        (ratio.min(1.0), cfg.speed_increase_default)
    } else {
        (1.0, ratio.max(1.0))
    }
}

/// 경로 이탈 거리 감소 보너스 `min(|prev/current|, 2)`
///
/// 거리 크기(절대값)가 줄었을 때만 지급. 현재 거리 0은 중립값 1.
pub fn distance_reduction_bonus(prev: Option<f64>, current: f64, cfg: &SignalConfig) -> f64 {
    match prev {
        Some(prev) if prev.abs() > current.abs() => {
            safe_ratio(prev.abs(), current.abs()).min(cfg.distance_reduction_cap)
        }
        _ => 1.0,
    }
}

/// 경로 이탈 배수 `1 - |d|`, threshold 미만이면 floor로 고정
pub fn off_track_penalty(normalized_distance_from_route: f64, cfg: &SignalConfig) -> f64 {
    let penalty = 1.0 - normalized_distance_from_route.abs();
    if penalty < cfg.off_track_threshold {
        cfg.off_track_floor
    } else {
        penalty
    }
}

/// 연속형 이탈 배수 `max(floor, 1 - |d|)`
pub fn smooth_off_track_penalty(normalized_distance: f64, floor: f64) -> f64 {
    (1.0 - normalized_distance.abs()).max(floor)
}

// ============================================================================
// Weighted-variant signals
// ============================================================================

/// 최적 구간이 평탄한 piecewise 속도 보상
pub fn piecewise_speed_reward(
    speed: f64,
    min: f64,
    optimal_low: f64,
    optimal_high: f64,
    max: f64,
) -> f64 {
    if speed < min {
        0.0
    } else if speed <= optimal_low {
        safe_ratio(speed - min, optimal_low - min).clamp(0.0, 1.0)
    } else if speed <= optimal_high {
        1.0
    } else {
        safe_ratio(max - speed, max - optimal_high).max(0.0).min(1.0)
    }
}

/// `1 / (1 + exp(-(v - optimum) / scale))`, [0, 1]
pub fn sigmoid_speed_reward(speed: f64, optimum: f64, scale: f64) -> f64 {
    if scale <= 0.0 {
        return if speed >= optimum { 1.0 } else { 0.0 };
    }
    let reward = 1.0 / (1.0 + (-(speed - optimum) / scale).exp());
    reward.clamp(0.0, 1.0)
}

/// `max(0, 1 - (2|d| / width)^exponent)`
pub fn lateral_distance_reward(distance_from_center: f64, track_width: f64, exponent: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    let ratio = 2.0 * distance_from_center.abs() / track_width;
    (1.0 - ratio.powf(exponent)).max(0.0)
}

/// segment 각도 기반 곡률 보상
pub fn curvature_reward(segment_angle: f64, speed: f64, cfg: &CurvatureConfig) -> f64 {
    let curvature = segment_angle.abs();
    if curvature < PI / 8.0 {
        1.0
    } else if curvature < PI / 4.0 {
        if speed < cfg.slow_speed {
            cfg.slow_bonus
        } else {
            1.0
        }
    } else {
        let speed_factor = if cfg.speed_scaled { speed / 4.0 } else { 1.0 };
        (1.0 - curvature / (PI / 4.0) * speed_factor).max(0.0)
    }
}

/// 조향각 변화 기반 보너스 (이전 조향 없음 → 0)
pub fn steering_change_bonus(
    steering_delta: Option<f64>,
    speed: f64,
    turn_upcoming: bool,
    cfg: &SteeringBonusConfig,
) -> f64 {
    let delta = match steering_delta {
        Some(delta) => delta.abs(),
        None => return 0.0,
    };
    let mut bonus = (1.0 - delta / cfg.angle_tolerance_deg).max(0.0)
        * (cfg.multiplier * (speed / cfg.speed_divisor));
    if turn_upcoming {
        bonus *= cfg.turn_boost;
    }
    bonus
}

/// 스텝 수 비례 시간 페널티
pub fn time_penalty(
    model: &TimePenaltyModel,
    steps: u64,
    distance_from_center: f64,
    track_width: f64,
    speed: f64,
    progress: f64,
) -> f64 {
    let quarter_width = track_width / 4.0;
    match *model {
        TimePenaltyModel::Linear { factor, off_center_multiplier } => {
            let mut penalty = factor * steps as f64;
            if distance_from_center > quarter_width {
                penalty *= off_center_multiplier;
            }
            penalty
        }
        TimePenaltyModel::Adaptive {
            factor,
            low_speed,
            low_speed_multiplier,
            low_progress,
            low_progress_multiplier,
        } => {
            let mut penalty = factor * steps as f64;
            if distance_from_center > quarter_width && quarter_width > 0.0 {
                penalty *= 1.0 + (distance_from_center - quarter_width) / quarter_width;
            }
            if speed < low_speed {
                penalty *= low_speed_multiplier;
            }
            if progress < low_progress {
                penalty *= low_progress_multiplier;
            }
            penalty
        }
    }
}

/// 바퀴 이탈 수에 따른 단계 페널티
pub fn graduated_wheel_penalty(
    all_wheels_on_track: bool,
    wheels_on_track: u8,
    distance_from_center: f64,
    cfg: &WheelPenaltyConfig,
) -> f64 {
    if all_wheels_on_track {
        return 0.0;
    }
    match wheels_on_track {
        // all_wheels_on_track=false인데 4개로 보고된 경우: 가장 약한 단계
        3 | 4 => cfg.three_on,
        2 => cfg.two_on,
        1 => cfg.one_on,
        _ => {
            if cfg.scale_by_distance {
                cfg.none_on + distance_from_center
            } else {
                cfg.none_on
            }
        }
    }
}

/// `(progress+ε)^p · (speed+ε)^p · max(min, width/divisor [+ steps/100])`
pub fn normalization_factor(
    progress: f64,
    speed: f64,
    track_width: f64,
    steps: u64,
    cfg: &NormalizationConfig,
) -> f64 {
    let progress_factor = (progress + cfg.epsilon).powi(cfg.power);
    let speed_factor = (speed + cfg.epsilon).powi(cfg.power);
    let mut complexity = track_width / cfg.width_divisor;
    if cfg.include_steps {
        complexity += steps as f64 / 100.0;
    }
    progress_factor * speed_factor * complexity.max(cfg.min_complexity)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn cfg() -> SignalConfig {
        SignalConfig::default()
    }

    #[test]
    fn test_speed_reward_ramp() {
        let c = cfg();
        assert!((speed_reward(0.5, &c) - 0.1).abs() < EPS);
        assert!((speed_reward(1.5, &c) - 0.0).abs() < EPS);
        assert!((speed_reward(2.75, &c) - 0.5).abs() < EPS);
        assert!((speed_reward(4.0, &c) - 1.0).abs() < EPS);
        assert!((speed_reward(5.0, &c) - 1.0).abs() < EPS);
        assert!((speed_reward(3.0, &c) - 0.6).abs() < EPS);
    }

    #[test]
    fn test_heading_reward_peak_and_symmetry() {
        let c = cfg();
        assert_eq!(heading_reward(0.0, &c), 1.0);
        for d in [3.0, 15.0, 20.0, 25.0, 60.0, 135.0, 400.0] {
            assert_eq!(heading_reward(d, &c), heading_reward(-d, &c));
        }
    }

    #[test]
    fn test_heading_reward_softened_inside_window() {
        let c = cfg();
        // 10° 이내: cos^10^0.4 = cos^4
        let expected = 10f64.to_radians().cos().powi(4);
        assert!((heading_reward(10.0, &c) - expected).abs() < 1e-12);

        // 30°: cos^10 그대로
        let expected = 30f64.to_radians().cos().powi(10);
        assert!((heading_reward(30.0, &c) - expected).abs() < 1e-12);

        assert!(heading_reward(10.0, &c) > heading_reward(30.0, &c));
    }

    #[test]
    fn test_distance_reward_center_is_one() {
        let c = cfg();
        assert_eq!(distance_reward(Bearing::Center, 0.9, 0.0, 0.0, &c), 1.0);
        assert_eq!(distance_reward(Bearing::Center, -3.0, 2.0, 5.0, &c), 1.0);
    }

    #[test]
    fn test_distance_reward_gaussian_by_side() {
        let c = cfg();
        // right → inner border: σ = 0.8/4 = 0.2, d = 0.2 → exp(-0.5)
        let r = distance_reward(Bearing::Right, 0.2, 0.8, 0.4, &c);
        assert!((r - (-0.5f64).exp()).abs() < 1e-12);

        // left → outer border: σ = 0.4/4 = 0.1, d = 0.2 → exp(-2)
        let l = distance_reward(Bearing::Left, 0.2, 0.8, 0.4, &c);
        assert!((l - (-2.0f64).exp()).abs() < 1e-12);

        // unspecified는 left와 동일
        assert_eq!(distance_reward(Bearing::Unspecified, 0.2, 0.8, 0.4, &c), l);
    }

    #[test]
    fn test_distance_reward_zero_sigma_is_max() {
        let c = cfg();
        assert_eq!(distance_reward(Bearing::Right, 0.5, 0.0, 1.0, &c), 1.0);
    }

    #[test]
    fn test_steering_bonus_levels() {
        let c = cfg();
        // 방향 오차 3°, 개선됨 → 2*2*2
        assert_eq!(steering_maintain_bonus(true, Some(5.0), 5.0, Some(8.0), 3.0, &c), 8.0);
        // 방향 오차 7°, 개선 없음 → 2
        assert_eq!(steering_maintain_bonus(true, Some(5.0), 5.0, Some(6.0), 7.0, &c), 2.0);
        // 오차 15°, 개선됨 → 2
        assert_eq!(steering_maintain_bonus(true, Some(5.0), 5.0, Some(20.0), -15.0, &c), 2.0);
    }

    #[test]
    fn test_steering_bonus_preconditions() {
        let c = cfg();
        assert_eq!(steering_maintain_bonus(false, Some(5.0), 5.0, Some(8.0), 3.0, &c), 1.0);
        assert_eq!(steering_maintain_bonus(true, None, 5.0, Some(8.0), 3.0, &c), 1.0);
        assert_eq!(steering_maintain_bonus(true, Some(5.0), 7.5, Some(8.0), 3.0, &c), 1.0);
        assert_eq!(steering_maintain_bonus(true, Some(0.0), 0.0, None, 3.0, &c), 4.0);
    }

    #[test]
    fn test_speed_bonuses() {
        let c = cfg();
        assert_eq!(speed_bonuses(3.0, None, false, &c), (1.0, 1.0));

        // 감속 + 직선
        let (maintain, increase) = speed_bonuses(2.0, Some(3.0), false, &c);
        assert!((maintain - 2.0 / 3.0).abs() < EPS);
        assert_eq!(increase, 2.0);

        // 감속 + 커브 → 중립
        assert_eq!(speed_bonuses(2.0, Some(3.0), true, &c), (1.0, 1.0));

        // 가속
        let (maintain, increase) = speed_bonuses(3.6, Some(3.0), false, &c);
        assert_eq!(maintain, 1.0);
        assert!((increase - 1.2).abs() < EPS);

        // 이전 속도가 MIN보다 작으면 MIN 기준
        let (_, increase) = speed_bonuses(3.0, Some(0.5), false, &c);
        assert!((increase - 2.0).abs() < EPS);
    }

    #[test]
    fn test_distance_reduction_bonus() {
        let c = cfg();
        assert_eq!(distance_reduction_bonus(None, 0.3, &c), 1.0);
        assert_eq!(distance_reduction_bonus(Some(0.2), 0.3, &c), 1.0);
        assert!((distance_reduction_bonus(Some(0.3), 0.2, &c) - 1.5).abs() < EPS);
        assert_eq!(distance_reduction_bonus(Some(0.9), 0.1, &c), 2.0);
        // 0 분모 → 중립
        assert_eq!(distance_reduction_bonus(Some(0.3), 0.0, &c), 1.0);
    }

    #[test]
    fn test_distance_reduction_bonus_uses_magnitude() {
        let c = cfg();
        // 중앙선을 넘어 더 멀어짐 → 중립
        assert_eq!(distance_reduction_bonus(Some(0.1), -0.5, &c), 1.0);
        assert_eq!(distance_reduction_bonus(Some(-0.1), 0.5, &c), 1.0);
        // 음수 쪽에서 가까워짐 → 보너스
        assert!((distance_reduction_bonus(Some(-0.5), -0.25, &c) - 2.0).abs() < EPS);
        assert!((distance_reduction_bonus(Some(-0.3), 0.2, &c) - 1.5).abs() < EPS);
    }

    #[test]
    fn test_off_track_penalty_discontinuity() {
        let c = cfg();
        assert_eq!(off_track_penalty(0.0, &c), 1.0);
        assert!((off_track_penalty(0.5, &c) - 0.5).abs() < EPS);
        assert!((off_track_penalty(-0.3, &c) - 0.7).abs() < EPS);
        assert_eq!(off_track_penalty(0.51, &c), 0.1);
        assert_eq!(off_track_penalty(3.0, &c), 0.1);
    }

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(1.0, 0.0), 1.0);
        assert_eq!(safe_ratio(3.0, 2.0), 1.5);
        assert_eq!(safe_ratio(f64::MAX, 1e-300), 1.0);
    }

    #[test]
    fn test_piecewise_speed() {
        assert_eq!(piecewise_speed_reward(0.5, 1.0, 2.0, 3.5, 4.0), 0.0);
        assert!((piecewise_speed_reward(1.5, 1.0, 2.0, 3.5, 4.0) - 0.5).abs() < EPS);
        assert_eq!(piecewise_speed_reward(3.0, 1.0, 2.0, 3.5, 4.0), 1.0);
        assert!((piecewise_speed_reward(3.75, 1.0, 2.0, 3.5, 4.0) - 0.5).abs() < EPS);
        assert_eq!(piecewise_speed_reward(5.0, 1.0, 2.0, 3.5, 4.0), 0.0);
    }

    #[test]
    fn test_sigmoid_speed() {
        assert!((sigmoid_speed_reward(4.0, 4.0, 0.3) - 0.5).abs() < EPS);
        assert!(sigmoid_speed_reward(5.0, 4.0, 0.3) > 0.95);
        assert!(sigmoid_speed_reward(1.0, 4.0, 0.3) < 0.01);
    }

    #[test]
    fn test_lateral_distance() {
        assert_eq!(lateral_distance_reward(0.0, 1.0, 1.0), 1.0);
        assert!((lateral_distance_reward(0.25, 1.0, 1.0) - 0.5).abs() < EPS);
        assert_eq!(lateral_distance_reward(0.6, 1.0, 1.5), 0.0);
    }

    #[test]
    fn test_curvature_reward() {
        let cfg = CurvatureConfig::default();
        assert_eq!(curvature_reward(0.1, 3.0, &cfg), 1.0);
        assert_eq!(curvature_reward(0.5, 2.0, &cfg), 1.5);
        assert_eq!(curvature_reward(0.5, 3.0, &cfg), 1.0);
        assert_eq!(curvature_reward(PI / 2.0, 3.0, &cfg), 0.0);
    }

    #[test]
    fn test_steering_change_bonus() {
        let cfg = SteeringBonusConfig::default();
        assert_eq!(steering_change_bonus(None, 3.0, false, &cfg), 0.0);
        // 변화 없음, speed 3 → 1 * 2 * 1
        assert!((steering_change_bonus(Some(0.0), 3.0, false, &cfg) - 2.0).abs() < EPS);
        // 변화 5° → 0.5 * 2
        assert!((steering_change_bonus(Some(-5.0), 3.0, false, &cfg) - 1.0).abs() < EPS);
        assert_eq!(steering_change_bonus(Some(12.0), 3.0, false, &cfg), 0.0);
    }

    #[test]
    fn test_time_penalty_models() {
        let linear = TimePenaltyModel::linear();
        assert!((time_penalty(&linear, 100, 0.1, 1.0, 3.0, 50.0) - 1.0).abs() < EPS);
        assert!((time_penalty(&linear, 100, 0.3, 1.0, 3.0, 50.0) - 2.0).abs() < EPS);

        let adaptive = TimePenaltyModel::adaptive();
        // 0.5 off center → 1 + (0.5-0.25)/0.25 = 2, slow → 1.5, low progress → 1.2
        let p = time_penalty(&adaptive, 100, 0.5, 1.0, 0.5, 5.0);
        assert!((p - 1.0 * 2.0 * 1.5 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_graduated_wheel_penalty() {
        let cfg = WheelPenaltyConfig::default();
        assert_eq!(graduated_wheel_penalty(true, 4, 0.0, &cfg), 0.0);
        assert_eq!(graduated_wheel_penalty(false, 3, 0.0, &cfg), 0.1);
        assert_eq!(graduated_wheel_penalty(false, 2, 0.0, &cfg), 0.25);
        assert_eq!(graduated_wheel_penalty(false, 1, 0.0, &cfg), 0.5);
        assert_eq!(graduated_wheel_penalty(false, 0, 0.7, &cfg), 1.0);

        let scaled = WheelPenaltyConfig { scale_by_distance: true, ..cfg };
        assert!((graduated_wheel_penalty(false, 0, 0.7, &scaled) - 1.7).abs() < EPS);
    }

    #[test]
    fn test_normalization_factor() {
        let cfg = NormalizationConfig::default();
        // complexity = max(0.5, 1/5) = 0.5
        let f = normalization_factor(10.0, 2.0, 1.0, 50, &cfg);
        assert!((f - 10.001 * 2.001 * 0.5).abs() < 1e-9);

        let squared = NormalizationConfig { power: 2, include_steps: true, ..cfg };
        let f = normalization_factor(10.0, 2.0, 1.0, 50, &squared);
        assert!((f - 10.001f64.powi(2) * 2.001f64.powi(2) * 0.7).abs() < 1e-9);
    }

    // ========== Property-Based Tests ==========

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: speed reward stays in [0, 1]
            #[test]
            fn prop_speed_reward_unit_range(speed in 0.0f64..20.0f64) {
                let r = speed_reward(speed, &SignalConfig::default());
                prop_assert!((0.0..=1.0).contains(&r));
            }

            /// Property: heading reward is symmetric and bounded
            #[test]
            fn prop_heading_symmetric(d in -720.0f64..720.0f64) {
                let c = SignalConfig::default();
                let r = heading_reward(d, &c);
                prop_assert_eq!(r, heading_reward(-d, &c));
                prop_assert!((0.0..=1.0).contains(&r));
            }

            /// Property: distance reward lies in [0, 1]
            #[test]
            fn prop_distance_reward_unit_range(
                d in -2.0f64..2.0f64,
                inner in 0.0f64..1.0f64,
                outer in 0.0f64..1.0f64
            ) {
                let c = SignalConfig::default();
                for bearing in [Bearing::Left, Bearing::Right, Bearing::Unspecified] {
                    let r = distance_reward(bearing, d, inner, outer, &c);
                    prop_assert!((0.0..=1.0).contains(&r));
                }
            }

            /// Property: ratio bonuses stay within their caps
            #[test]
            fn prop_ratio_bonus_caps(
                prev in -2.0f64..2.0f64,
                cur in -2.0f64..2.0f64,
                speed in 0.0f64..5.0f64,
                prev_speed in 0.0f64..5.0f64,
                turn in any::<bool>()
            ) {
                let c = SignalConfig::default();
                let reduction = distance_reduction_bonus(Some(prev), cur, &c);
                prop_assert!((1.0..=2.0).contains(&reduction));

                let (maintain, increase) = speed_bonuses(speed, Some(prev_speed), turn, &c);
                prop_assert!((0.0..=1.0).contains(&maintain));
                prop_assert!(increase >= 1.0);
            }
        }
    }
}
