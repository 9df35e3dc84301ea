//! StepSnapshot - Per-step Telemetry Input
//!
//! 시뮬레이터가 매 스텝 넘겨주는 평탄한 key-value 텔레메트리를
//! 강타입 레코드로 변환한다.
//!
//! ## 입력 규칙
//!
//! - 필수 키: `heading`, `distance_from_center`, `steps`, `steering_angle`, `speed`,
//!   `x`, `y`, `waypoints`, `closest_waypoints`, `all_wheels_on_track`
//!   → 없으면 `RewardError::MissingInput` (기본값으로 대체하지 않음)
//! - 선택 키: 아래 `defaults` 참고
//!
//! ```rust,ignore
//! let snap = StepSnapshot::from_json_str(r#"{"heading": 0.0, ...}"#)?;
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{RewardError, Result};

/// Keys that must be present in every snapshot.
pub const REQUIRED_KEYS: [&str; 10] = [
    "heading",
    "distance_from_center",
    "steps",
    "steering_angle",
    "speed",
    "x",
    "y",
    "waypoints",
    "closest_waypoints",
    "all_wheels_on_track",
];

/// Defaults for optional keys.
pub mod defaults {
    pub const PROGRESS: f64 = 0.0;
    pub const WHEELS_ON_TRACK: u8 = 4;
    pub const TRACK_WIDTH: f64 = 1.0;
}

fn default_progress() -> f64 {
    defaults::PROGRESS
}

fn default_wheels() -> u8 {
    defaults::WHEELS_ON_TRACK
}

fn default_track_width() -> f64 {
    defaults::TRACK_WIDTH
}

// ============================================================================
// Point / Bearing
// ============================================================================

/// 2D 트랙 좌표 `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

/// 중앙선 기준 차량 위치 (left/right/center)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Bearing {
    Left,
    Right,
    Center,
    /// 키 없음 또는 인식 불가 (σ 계산은 `Left`와 동일하게 바깥 경계 사용)
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl Bearing {
    /// Substring match, "center" wins over "left"/"right".
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.contains("center") {
            Bearing::Center
        } else if lower.contains("right") {
            Bearing::Right
        } else if lower.contains("left") {
            Bearing::Left
        } else {
            Bearing::Unspecified
        }
    }

    pub fn is_center(&self) -> bool {
        matches!(self, Bearing::Center)
    }
}

// ============================================================================
// StepSnapshot
// ============================================================================

/// 스텝 단위 읽기전용 텔레메트리 스냅샷
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    // === Required ===
    /// 차량 진행 방향 (deg, +x 기준 반시계 방향)
    pub heading: f64,
    pub distance_from_center: f64,
    /// 에피소드 내 단조 증가 스텝 번호
    #[serde(deserialize_with = "integral_u64")]
    pub steps: u64,
    /// 조향각 (deg)
    pub steering_angle: f64,
    pub speed: f64,
    pub x: f64,
    pub y: f64,
    /// 폐곡선 웨이포인트 목록
    pub waypoints: Vec<Point>,
    /// 차량을 감싸는 웨이포인트 인덱스 쌍 (`[1]` = 다음 웨이포인트)
    #[serde(deserialize_with = "integral_pair")]
    pub closest_waypoints: [usize; 2],
    pub all_wheels_on_track: bool,

    // === Optional ===
    /// 진행률 (0-100)
    #[serde(default = "default_progress")]
    pub progress: f64,
    #[serde(default, deserialize_with = "bearing_from_str")]
    pub bearing: Bearing,
    #[serde(default)]
    pub normalized_car_distance_from_route: f64,
    #[serde(default)]
    pub normalized_route_distance_from_inner_border: f64,
    #[serde(default)]
    pub normalized_route_distance_from_outer_border: f64,
    #[serde(default)]
    pub is_turn_upcoming: bool,
    #[serde(default)]
    pub is_heading_in_right_direction: bool,
    #[serde(default)]
    pub normalized_distance_from_route: f64,
    #[serde(default)]
    pub curve_bonus: f64,
    #[serde(default)]
    pub straight_section_bonus: f64,
    #[serde(default = "default_wheels")]
    pub wheels_on_track: u8,
    #[serde(default = "default_track_width")]
    pub track_width: f64,
}

impl StepSnapshot {
    /// JSON 텍스트에서 스냅샷 생성
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// key-value 맵에서 스냅샷 생성 + 검증
    ///
    /// `null` 값은 키가 없는 것과 같게 취급한다.
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut map = value
            .as_object()
            .cloned()
            .ok_or_else(|| RewardError::invalid("snapshot", "expected a key-value object"))?;
        map.retain(|_, v| !v.is_null());

        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !map.contains_key(**key)) {
            return Err(RewardError::missing(key));
        }

        let snapshot: Self = serde_json::from_value(Value::Object(map))
            .map_err(|err| RewardError::invalid("snapshot", err.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// 직접 생성한 스냅샷의 도메인 검증
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("heading", self.heading),
            ("distance_from_center", self.distance_from_center),
            ("steering_angle", self.steering_angle),
            ("speed", self.speed),
            ("x", self.x),
            ("y", self.y),
            ("progress", self.progress),
            ("normalized_car_distance_from_route", self.normalized_car_distance_from_route),
            (
                "normalized_route_distance_from_inner_border",
                self.normalized_route_distance_from_inner_border,
            ),
            (
                "normalized_route_distance_from_outer_border",
                self.normalized_route_distance_from_outer_border,
            ),
            ("normalized_distance_from_route", self.normalized_distance_from_route),
            ("curve_bonus", self.curve_bonus),
            ("straight_section_bonus", self.straight_section_bonus),
            ("track_width", self.track_width),
        ];
        for (key, value) in scalars {
            if !value.is_finite() {
                return Err(RewardError::invalid(key, "must be finite"));
            }
        }

        if self.speed < 0.0 {
            return Err(RewardError::invalid("speed", "must be non-negative"));
        }
        if !(0.0..=100.0).contains(&self.progress) {
            return Err(RewardError::invalid("progress", "must lie in [0, 100]"));
        }
        if self.track_width <= 0.0 {
            return Err(RewardError::invalid("track_width", "must be positive"));
        }
        if self.wheels_on_track > 4 {
            return Err(RewardError::invalid("wheels_on_track", "must lie in [0, 4]"));
        }
        if self.waypoints.is_empty() {
            return Err(RewardError::invalid("waypoints", "must not be empty"));
        }
        if self.waypoints.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            return Err(RewardError::invalid("waypoints", "coordinates must be finite"));
        }
        if let Some(idx) = self.closest_waypoints.iter().find(|idx| **idx >= self.waypoints.len()) {
            return Err(RewardError::invalid(
                "closest_waypoints",
                format!("index {} out of range for {} waypoints", idx, self.waypoints.len()),
            ));
        }
        Ok(())
    }

    /// 차량 위치
    pub fn position(&self) -> Point {
        Point(self.x, self.y)
    }

    /// 다음 웨이포인트 (`closest_waypoints[1]`)
    pub fn next_waypoint(&self) -> Result<Point> {
        self.waypoint_at(self.closest_waypoints[1])
    }

    /// 이전 웨이포인트 (`closest_waypoints[0]`)
    pub fn prev_waypoint(&self) -> Result<Point> {
        self.waypoint_at(self.closest_waypoints[0])
    }

    /// 진행률 decile (0-10)
    pub fn decile(&self) -> usize {
        ((self.progress / 10.0).floor().max(0.0) as usize).min(10)
    }

    fn waypoint_at(&self, idx: usize) -> Result<Point> {
        self.waypoints.get(idx).copied().ok_or_else(|| {
            RewardError::invalid(
                "closest_waypoints",
                format!("index {} out of range for {} waypoints", idx, self.waypoints.len()),
            )
        })
    }
}

// ============================================================================
// Field deserializers
// ============================================================================

/// 정수, 또는 정수 값의 float (예: 12.0)
#[derive(Deserialize)]
#[serde(untagged)]
enum Integral {
    Int(u64),
    Float(f64),
}

impl Integral {
    fn to_u64(&self) -> Option<u64> {
        match *self {
            Integral::Int(n) => Some(n),
            Integral::Float(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 => Some(f as u64),
            Integral::Float(_) => None,
        }
    }
}

fn integral_u64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    Integral::deserialize(deserializer)?
        .to_u64()
        .ok_or_else(|| D::Error::custom("expected a non-negative integer"))
}

fn integral_pair<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<[usize; 2], D::Error> {
    let [prev, next] = <[Integral; 2]>::deserialize(deserializer)?;
    match (prev.to_u64(), next.to_u64()) {
        (Some(prev), Some(next)) => Ok([prev as usize, next as usize]),
        _ => Err(D::Error::custom("expected two non-negative integer indices")),
    }
}

fn bearing_from_str<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Bearing, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(Bearing::parse(&raw))
}

// ============================================================================
// Tests
// ============================================================================
