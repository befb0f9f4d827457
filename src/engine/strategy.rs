// ==========================================
// 涂装报价系统 - 预算优化策略
// ==========================================
// 三种策略共用同一个背包求解器，区别仅在于候选列表与 (value, cost) 的构造：
// - by_surface: 候选=全部表面（按总价升序），value=面积
// - by_room: 候选=房间（按总价升序），value=房间总面积，整间取舍
// - by_room_condition: 同 by_room，但 value=房间内状况较差的面积
// 三种策略的 cost 均为 ceil(总价)
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// 预算优化策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimiseStrategy {
    #[default]
    BySurface,
    ByRoom,
    ByRoomCondition,
}

impl OptimiseStrategy {
    pub const ALL: [OptimiseStrategy; 3] = [
        OptimiseStrategy::BySurface,
        OptimiseStrategy::ByRoom,
        OptimiseStrategy::ByRoomCondition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimiseStrategy::BySurface => "by_surface",
            OptimiseStrategy::ByRoom => "by_room",
            OptimiseStrategy::ByRoomCondition => "by_room_condition",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            OptimiseStrategy::BySurface => "按表面优化",
            OptimiseStrategy::ByRoom => "按房间优化",
            OptimiseStrategy::ByRoomCondition => "按房间优化（优先较差基材）",
        }
    }

    /// 是否整间取舍
    pub fn is_room_granular(&self) -> bool {
        !matches!(self, OptimiseStrategy::BySurface)
    }
}

impl std::fmt::Display for OptimiseStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptimiseStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "by_surface" | "by-surface" | "surface" => Ok(OptimiseStrategy::BySurface),
            "by_room" | "by-room" | "room" => Ok(OptimiseStrategy::ByRoom),
            "by_room_condition" | "by-room-condition" | "room_condition" => {
                Ok(OptimiseStrategy::ByRoomCondition)
            }
            other => Err(DomainError::invalid(format!("未知优化策略: {}", other))),
        }
    }
}
