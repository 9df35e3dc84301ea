//! RewardEngine - Per-step Reward Composer
//!
//! 롤아웃 워커마다 하나씩 소유하는 보상 엔진.
//! 에피소드 상태, 점수 정책, 에피소드 메트릭을 묶어 매 스텝 호출 순서를 고정한다.
//!
//! ## 호출 순서
//!
//! 1. 에피소드 리셋 감지/적용 (`steps` 감소)
//! 2. `direction_diff` 계산
//! 3. 속도 유지/가속 보너스
//! 4. 조향 유지, 거리 감소 보너스 + heading/distance/speed 보상
//! 5. 현재 값을 `EpisodeState`에 기록 (비율 보너스는 4단계에서 이미 이전 값과 비교 완료)
//! 6. 마일스톤 지급 (decile당 1회)
//! 7. 정책으로 조합 + 바퀴 판정 + 이탈 배수 + 클램프
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use route_reward::{EngineConfig, RewardEngine};
//!
//! let mut engine = RewardEngine::new(EngineConfig::baseline())?;
//! let reward = engine.evaluate_json(&params)?;
//! ```

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::components;
use crate::config::{EngineConfig, SignalConfig};
use crate::error::Result;
use crate::geometry;
use crate::metrics::{EpisodeEnd, EpisodeMetrics};
use crate::policy::{build_policy, RewardBreakdown, ScoringPolicy, StepSignals};
use crate::snapshot::StepSnapshot;
use crate::state::EpisodeState;

/// 보상 엔진
///
/// 전역 상태 없음. 병렬 환경은 각자 엔진을 생성한다 (`Send`).
pub struct RewardEngine {
    signals: SignalConfig,
    policy: Box<dyn ScoringPolicy>,
    state: EpisodeState,
    metrics: EpisodeMetrics,
    last_episode: Option<EpisodeMetrics>,
}

impl RewardEngine {
    /// 설정 검증 후 엔진 생성
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_policy(config.signals, build_policy(&config.policy)))
    }

    /// 사용자 정의 정책 주입
    pub fn with_policy(signals: SignalConfig, policy: Box<dyn ScoringPolicy>) -> Self {
        Self {
            signals,
            policy,
            state: EpisodeState::new(),
            metrics: EpisodeMetrics::new(),
            last_episode: None,
        }
    }

    /// 기본 baseline 엔진
    pub fn baseline() -> Self {
        let config = EngineConfig::baseline();
        Self::with_policy(config.signals, build_policy(&config.policy))
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn signals(&self) -> &SignalConfig {
        &self.signals
    }

    pub fn state(&self) -> &EpisodeState {
        &self.state
    }

    /// 진행 중 에피소드 메트릭
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// 직전에 종료된 에피소드 메트릭
    pub fn last_episode_metrics(&self) -> Option<&EpisodeMetrics> {
        self.last_episode.as_ref()
    }

    /// 외부 규칙 위반 신호 (다음 리셋까지 유지)
    ///
    /// 진행 중인 에피소드에만 적용된다. 첫 스텝 이전이나 `reset()` 직후의
    /// 신호는 다음 `evaluate`가 새 에피소드를 시작하므로 무시한다.
    pub fn flag_unpardonable_action(&mut self) {
        let Some(prev_steps) = self.state.prev_steps else {
            warn!("unpardonable action flagged with no running episode, ignored");
            return;
        };
        warn!(
            prev_steps,
            policy = self.policy.name(),
            "unpardonable action flagged, reward overridden until episode reset"
        );
        self.state.flag_unpardonable_action();
    }

    /// 명시적 에피소드 리셋
    pub fn reset(&mut self) {
        self.close_episode(EpisodeEnd::ExplicitReset);
        self.state.reset();
    }

    /// 최종 보상만 반환
    pub fn reward(&mut self, snap: &StepSnapshot) -> Result<f64> {
        Ok(self.evaluate(snap)?.total)
    }

    /// key-value 스냅샷 검증 후 평가
    pub fn evaluate_json(&mut self, params: &Value) -> Result<f64> {
        let snap = StepSnapshot::from_value(params)?;
        self.reward(&snap)
    }

    /// JSON 텍스트 스냅샷 평가
    pub fn evaluate_str(&mut self, raw: &str) -> Result<f64> {
        let snap = StepSnapshot::from_json_str(raw)?;
        self.reward(&snap)
    }

    /// 한 스텝 평가
    ///
    /// 스냅샷이 유효하지 않으면 상태를 건드리지 않고 에러를 반환한다.
    pub fn evaluate(&mut self, snap: &StepSnapshot) -> Result<RewardBreakdown> {
        snap.validate()?;
        let next = snap.next_waypoint()?;
        let prev = snap.prev_waypoint()?;

        // 1. episode boundary
        let new_episode = self.state.observe(snap.steps);
        if new_episode {
            self.close_episode(EpisodeEnd::StepRegression);
        }

        // 2. geometry
        let direction_diff = geometry::direction_diff(snap.heading, snap.position(), next);
        let segment_angle = geometry::segment_angle(prev, next);

        let prev_speed = self.state.prev_speed;
        let prev_steering_angle = self.state.prev_steering_angle;
        let prev_direction_diff = self.state.prev_direction_diff;
        let prev_distance = self.state.prev_normalized_distance_from_route;

        // 3-4. components against start-of-call values
        let cfg = &self.signals;
        let (speed_maintain_bonus, speed_increase_bonus) =
            components::speed_bonuses(snap.speed, prev_speed, snap.is_turn_upcoming, cfg);
        let steering_angle_maintain_bonus = components::steering_maintain_bonus(
            snap.is_heading_in_right_direction,
            prev_steering_angle,
            snap.steering_angle,
            prev_direction_diff,
            direction_diff,
            cfg,
        );
        let distance_reduction_bonus = components::distance_reduction_bonus(
            prev_distance,
            snap.normalized_distance_from_route,
            cfg,
        );
        let heading_reward = components::heading_reward(direction_diff, cfg);
        let distance_reward = components::distance_reward(
            snap.bearing,
            snap.normalized_car_distance_from_route,
            snap.normalized_route_distance_from_inner_border,
            snap.normalized_route_distance_from_outer_border,
            cfg,
        );
        let speed_reward = components::speed_reward(snap.speed, cfg);
        let off_track_penalty =
            components::off_track_penalty(snap.normalized_distance_from_route, cfg);

        // 5. write-after-read
        self.state.update(
            snap.speed,
            snap.steering_angle,
            direction_diff,
            snap.steps,
            snap.normalized_distance_from_route,
        );

        // 6. milestone
        let milestone_bonus = self.fire_milestone(snap);

        // 7. compose
        let unpardonable_action = self.state.unpardonable_action();
        let signals = StepSignals {
            new_episode,
            direction_diff,
            segment_angle,
            speed_reward,
            heading_reward,
            distance_reward,
            steering_angle_maintain_bonus,
            distance_reduction_bonus,
            speed_maintain_bonus,
            speed_increase_bonus,
            milestone_bonus,
            off_track_penalty,
            steering_delta: prev_steering_angle.map(|prev| snap.steering_angle - prev),
            unpardonable_action,
        };
        let breakdown = self.policy.score(&signals, snap);
        self.metrics.record(&breakdown, unpardonable_action);

        debug!(
            steps = snap.steps,
            direction_diff,
            immediate = breakdown.immediate,
            long_term = breakdown.long_term,
            total = breakdown.total,
            "reward evaluated"
        );
        Ok(breakdown)
    }

    fn fire_milestone(&mut self, snap: &StepSnapshot) -> f64 {
        let decile = snap.decile();
        if self.state.has_fired(decile) {
            return 0.0;
        }
        let value = self
            .policy
            .milestones()
            .value(decile, snap.progress, snap.steps, snap.track_width)
            .unwrap_or(0.0);
        let bonus = self.state.try_fire_milestone(decile, value);
        if bonus > 0.0 {
            info!(decile, bonus, steps = snap.steps, "milestone fired");
        }
        bonus
    }

    fn close_episode(&mut self, end: EpisodeEnd) {
        if self.metrics.is_empty() {
            return;
        }
        self.metrics.finish(end);
        info!(
            steps = self.metrics.total_steps,
            cumulative_reward = self.metrics.cumulative_reward,
            milestones_fired = self.metrics.milestones_fired,
            end = ?end,
            "episode finished"
        );
        self.last_episode = Some(std::mem::take(&mut self.metrics));
    }
}

impl Default for RewardEngine {
    fn default() -> Self {
        Self::baseline()
    }
}

impl std::fmt::Debug for RewardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewardEngine")
            .field("policy", &self.policy.name())
            .field("state", &self.state)
            .field("metrics", &self.metrics)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
