//! ScoringPolicy - Injectable Reward Composition
//!
//! 엔진이 계산한 스텝 신호(`StepSignals`)를 최종 보상으로 조합하는 정책.
//! 상태(에피소드 메모리, 마일스톤 지급)는 엔진이 관리하고,
//! 정책은 순수하게 신호 → 점수 변환만 담당한다.
//!
//! ## 구현체
//!
//! - `BaselinePolicy`: 초선형 조합 `(HC+DC+SC)² + HC·DC·SC`, [1e-3, 1000]
//! - `WeightedPolicy`: 가중합 - 페널티, 정규화, [-1000, 1000]
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use route_reward::policy::{build_policy, ScoringPolicy};
//!
//! let policy = build_policy(&PolicyConfig::default());
//! let breakdown = policy.score(&signals, &snapshot);
//! ```

mod baseline;
mod weighted;

pub use baseline::BaselinePolicy;
pub use weighted::WeightedPolicy;

use serde::{Deserialize, Serialize};

use crate::config::{MilestoneSchedule, PolicyConfig, RewardLimits};
use crate::snapshot::StepSnapshot;

// ============================================================================
// ScoringPolicy Trait
// ============================================================================

/// 점수 정책 트레이트
///
/// 롤아웃 워커 간 이동 가능해야 하므로 `Send + Sync`.
pub trait ScoringPolicy: Send + Sync {
    /// 스텝 신호를 최종 보상으로 조합
    ///
    /// # Arguments
    /// * `signals` - 엔진이 계산한 이번 스텝 신호 (마일스톤 지급 완료 상태)
    /// * `snap` - 이번 스텝 스냅샷
    fn score(&self, signals: &StepSignals, snap: &StepSnapshot) -> RewardBreakdown;

    /// 이 정책이 사용하는 마일스톤 스케줄
    fn milestones(&self) -> &MilestoneSchedule;

    /// 최종 보상 범위
    fn limits(&self) -> RewardLimits;

    /// 정책 이름 (디버깅/로깅용)
    fn name(&self) -> &str;
}

/// 설정에서 정책 생성
pub fn build_policy(config: &PolicyConfig) -> Box<dyn ScoringPolicy> {
    match config {
        PolicyConfig::Baseline(cfg) => Box::new(BaselinePolicy::new(cfg.clone())),
        PolicyConfig::Weighted(cfg) => Box::new(WeightedPolicy::new(cfg.clone())),
    }
}

// ============================================================================
// StepSignals
// ============================================================================

/// 한 스텝의 컴포넌트 신호
///
/// 비율 보너스는 모두 이번 호출 시작 시점의 "이전 값"과 비교한 결과.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StepSignals {
    pub new_episode: bool,
    /// 경로 방향 - heading (deg, 정규화 없음)
    pub direction_diff: f64,
    /// 이전→다음 웨이포인트 segment 각도 (rad)
    pub segment_angle: f64,

    pub speed_reward: f64,
    pub heading_reward: f64,
    pub distance_reward: f64,

    pub steering_angle_maintain_bonus: f64,
    pub distance_reduction_bonus: f64,
    pub speed_maintain_bonus: f64,
    pub speed_increase_bonus: f64,

    /// 이번 스텝에 지급된 마일스톤 보너스 (이미 지급된 decile이면 0)
    pub milestone_bonus: f64,
    /// `1 - |normalized_distance_from_route|`, threshold 미만 floor
    pub off_track_penalty: f64,
    /// 이전 스텝 대비 조향각 변화 (이전 값 없으면 None)
    pub steering_delta: Option<f64>,
    pub unpardonable_action: bool,
}

// ============================================================================
// Wheel / turn policy
// ============================================================================

/// 바퀴 이탈 판정
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WheelVerdict {
    #[default]
    Keep,
    /// 커브 예고 중 일부 바퀴 이탈: IC 감쇠
    HalveImmediate,
    /// 오프셋 페널티 적용 전 총 보상을 floor로 고정
    ForceFloor,
}

/// 커브 예고 시 일부 이탈은 IC 감쇠, 전체 이탈은 floor.
/// 직선 구간은 한 바퀴라도 이탈하면 floor.
pub fn wheel_verdict(snap: &StepSnapshot) -> WheelVerdict {
    if snap.is_turn_upcoming {
        if snap.wheels_on_track < 1 {
            WheelVerdict::ForceFloor
        } else if snap.wheels_on_track < 4 {
            WheelVerdict::HalveImmediate
        } else {
            WheelVerdict::Keep
        }
    } else if !snap.all_wheels_on_track {
        WheelVerdict::ForceFloor
    } else {
        WheelVerdict::Keep
    }
}

// ============================================================================
// RewardBreakdown
// ============================================================================

/// 최종 보상과 구성 요소
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RewardBreakdown {
    /// 클램프된 최종 보상
    pub total: f64,
    /// Immediate component (IC)
    pub immediate: f64,
    /// Long-term component (LC)
    pub long_term: f64,

    pub heading_component: f64,
    pub distance_component: f64,
    pub speed_component: f64,

    pub direction_diff: f64,
    pub milestone_bonus: f64,
    /// 실제 적용된 이탈 배수
    pub off_track_penalty: f64,
    /// 감산 페널티 합 (weighted 정책 전용, baseline은 0)
    pub penalties: f64,
    pub wheel_verdict: WheelVerdict,
    pub new_episode: bool,
}

// ============================================================================
// Tests
// ============================================================================
