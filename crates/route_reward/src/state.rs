//! EpisodeState - Per-episode Memory
//!
//! 이전 스텝 값과 decile 마일스톤 지급 여부를 보관하는 에피소드 단위 상태.
//!
//! ## 규칙
//!
//! - `steps`가 감소하면 새 에피소드 → 모든 필드 초기화
//! - 각 decile(0-10) 마일스톤은 에피소드당 1회만 지급
//! - 롤아웃(워커)마다 독립된 인스턴스를 소유 (전역 상태 없음)
//!
//! ```rust,ignore
//! let mut state = EpisodeState::new();
//! if state.observe(snap.steps) { /* new episode */ }
//! let bonus = state.try_fire_milestone(4, 12.5); // 12.5
//! let again = state.try_fire_milestone(4, 12.5); // 0.0
//! ```

use serde::{Deserialize, Serialize};

/// Number of progress deciles (0..=10).
pub const DECILE_SLOTS: usize = 11;

/// 에피소드 상태
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeState {
    pub prev_speed: Option<f64>,
    pub prev_steering_angle: Option<f64>,
    pub prev_direction_diff: Option<f64>,
    pub prev_steps: Option<u64>,
    pub prev_normalized_distance_from_route: Option<f64>,

    /// decile별 지급된 보너스 (미지급 = None)
    milestones: [Option<f64>; DECILE_SLOTS],

    /// 외부 규칙 위반 신호
    unpardonable_action: bool,
}

impl EpisodeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 에피소드 감지 및 초기화
    ///
    /// 이전 스텝 기록이 없거나 `steps`가 감소하면 `true`를 반환하고
    /// 모든 상태를 초기화한다.
    pub fn observe(&mut self, steps: u64) -> bool {
        let is_new_episode = match self.prev_steps {
            None => true,
            Some(prev) => steps < prev,
        };
        if is_new_episode {
            self.reset();
        }
        is_new_episode
    }

    /// 스텝 종료 시 "이전 값" 갱신 (무조건 덮어씀)
    pub fn update(
        &mut self,
        speed: f64,
        steering_angle: f64,
        direction_diff: f64,
        steps: u64,
        normalized_distance_from_route: f64,
    ) {
        self.prev_speed = Some(speed);
        self.prev_steering_angle = Some(steering_angle);
        self.prev_direction_diff = Some(direction_diff);
        self.prev_steps = Some(steps);
        self.prev_normalized_distance_from_route = Some(normalized_distance_from_route);
    }

    /// 마일스톤 지급 시도
    ///
    /// 해당 decile의 첫 호출이면 `value`, 이후 호출은 0.
    /// 범위를 벗어난 decile은 항상 0.
    /// 0 이하의 값은 지급으로 보지 않으며 슬롯은 비어 있다.
    pub fn try_fire_milestone(&mut self, decile: usize, value: f64) -> f64 {
        match self.milestones.get_mut(decile) {
            Some(slot) if slot.is_none() && value > 0.0 => {
                *slot = Some(value);
                value
            }
            _ => 0.0,
        }
    }

    pub fn has_fired(&self, decile: usize) -> bool {
        matches!(self.milestones.get(decile), Some(Some(_)))
    }

    /// 지급된 보너스 값 (미지급 = 0)
    pub fn fired_value(&self, decile: usize) -> f64 {
        self.milestones.get(decile).copied().flatten().unwrap_or(0.0)
    }

    pub fn fired_count(&self) -> usize {
        self.milestones.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn flag_unpardonable_action(&mut self) {
        self.unpardonable_action = true;
    }

    pub fn unpardonable_action(&self) -> bool {
        self.unpardonable_action
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// ============================================================================
// Tests
// ============================================================================
