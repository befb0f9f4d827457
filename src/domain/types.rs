// ==========================================
// 涂装报价系统 - 领域类型定义
// ==========================================
// 表面类型 / 表面样式 / 基材类型 / 基材状况 / 油漆饰面
// 序列化格式: snake_case (与请求 DTO 一致)
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 表面类型 (Surface Kind)
// ==========================================
// 每种类型的默认参数见 surface.rs 默认参数表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Generic,          // 通用表面
    Wall,             // 墙面
    Ceiling,          // 天花板
    Door,             // 门
    DoorFrame,        // 门框
    SkirtingBoard,    // 踢脚线
    ElaborateCornice, // 装饰檐口
    Window,           // 窗
    WindowSill,       // 窗台
    Spindle,          // 栏杆立柱
    Radiator,         // 暖气片
}

impl SurfaceKind {
    pub const ALL: [SurfaceKind; 11] = [
        SurfaceKind::Generic,
        SurfaceKind::Wall,
        SurfaceKind::Ceiling,
        SurfaceKind::Door,
        SurfaceKind::DoorFrame,
        SurfaceKind::SkirtingBoard,
        SurfaceKind::ElaborateCornice,
        SurfaceKind::Window,
        SurfaceKind::WindowSill,
        SurfaceKind::Spindle,
        SurfaceKind::Radiator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::Generic => "generic",
            SurfaceKind::Wall => "wall",
            SurfaceKind::Ceiling => "ceiling",
            SurfaceKind::Door => "door",
            SurfaceKind::DoorFrame => "door_frame",
            SurfaceKind::SkirtingBoard => "skirting_board",
            SurfaceKind::ElaborateCornice => "elaborate_cornice",
            SurfaceKind::Window => "window",
            SurfaceKind::WindowSill => "window_sill",
            SurfaceKind::Spindle => "spindle",
            SurfaceKind::Radiator => "radiator",
        }
    }

    /// 显示名称（用于未命名表面）
    pub fn title(&self) -> &'static str {
        match self {
            SurfaceKind::Generic => "Surface",
            SurfaceKind::Wall => "Wall",
            SurfaceKind::Ceiling => "Ceiling",
            SurfaceKind::Door => "Door",
            SurfaceKind::DoorFrame => "Doorframe",
            SurfaceKind::SkirtingBoard => "Skirting Board",
            SurfaceKind::ElaborateCornice => "Elaborate Cornice",
            SurfaceKind::Window => "Window",
            SurfaceKind::WindowSill => "Windowsill",
            SurfaceKind::Spindle => "Spindle",
            SurfaceKind::Radiator => "Radiator",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SurfaceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        SurfaceKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| DomainError::invalid(format!("未知表面类型: {}", s)))
    }
}

// ==========================================
// 表面样式 (Surface Design)
// ==========================================
// 样式只对特定表面类型有效，合法组合见 surface.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceDesign {
    FlatDoor,  // 平板门
    Panelled,  // 镶板门
    CuttingIn, // 玻璃门（需沿玻璃切边）
    Casement,  // 平开窗
    Sash,      // 推拉窗
}

impl SurfaceDesign {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceDesign::FlatDoor => "flat_door",
            SurfaceDesign::Panelled => "panelled",
            SurfaceDesign::CuttingIn => "cutting_in",
            SurfaceDesign::Casement => "casement",
            SurfaceDesign::Sash => "sash",
        }
    }

    /// 是否含玻璃（含玻璃的样式需要窗格数）
    pub fn is_glazed(&self) -> bool {
        matches!(
            self,
            SurfaceDesign::CuttingIn | SurfaceDesign::Casement | SurfaceDesign::Sash
        )
    }
}

impl fmt::Display for SurfaceDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SurfaceDesign {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "flat_door" => Ok(SurfaceDesign::FlatDoor),
            "panelled" => Ok(SurfaceDesign::Panelled),
            "cutting_in" => Ok(SurfaceDesign::CuttingIn),
            "casement" => Ok(SurfaceDesign::Casement),
            "sash" => Ok(SurfaceDesign::Sash),
            _ => Err(DomainError::invalid(format!("未知表面样式: {}", s))),
        }
    }
}

// ==========================================
// 基材状况 (Condition)
// ==========================================
// 顺序: Good < Okay < Poor
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Good, // 良好
    Okay, // 一般
    Poor, // 较差
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Good => "good",
            Condition::Okay => "okay",
            Condition::Poor => "poor",
        }
    }

    /// 表面处理系数（基材状况的纯函数）
    pub fn preparation_factor(&self) -> f64 {
        match self {
            Condition::Good => 1.0,
            Condition::Okay => 1.025,
            Condition::Poor => 1.05,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Condition::Good),
            "okay" => Ok(Condition::Okay),
            "poor" => Ok(Condition::Poor),
            _ => Err(DomainError::invalid(format!(
                "输入 \"condition\" 必须为 \"poor\"、\"okay\" 或 \"good\"，实际值: {}",
                s
            ))),
        }
    }
}

// ==========================================
// 基材类型 (Substrate Kind)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstrateKind {
    #[default]
    PrePaintedEmulsion, // 已涂乳胶漆
    PrePaintedWood,     // 已涂漆木材
    Plaster,            // 新抹灰
    NewWood,            // 新木材
    Mdf,                // 中密度纤维板
    Metal,              // 金属
}

impl SubstrateKind {
    pub const ALL: [SubstrateKind; 6] = [
        SubstrateKind::PrePaintedEmulsion,
        SubstrateKind::PrePaintedWood,
        SubstrateKind::Plaster,
        SubstrateKind::NewWood,
        SubstrateKind::Mdf,
        SubstrateKind::Metal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubstrateKind::PrePaintedEmulsion => "pre_painted_emulsion",
            SubstrateKind::PrePaintedWood => "pre_painted_wood",
            SubstrateKind::Plaster => "plaster",
            SubstrateKind::NewWood => "new_wood",
            SubstrateKind::Mdf => "mdf",
            SubstrateKind::Metal => "metal",
        }
    }
}

impl fmt::Display for SubstrateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubstrateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        SubstrateKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| DomainError::invalid(format!("未知基材类型: {}", s)))
    }
}

// ==========================================
// 油漆饰面 (Paint Finish)
// ==========================================
// 价格来源按饰面查询 (price, unit, coverage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintFinish {
    MattEmulsion,        // 哑光乳胶漆
    SilkEmulsion,        // 丝光乳胶漆
    DiamondMattEmulsion, // 耐磨哑光乳胶漆
    OilEggshell,         // 油性蛋壳光
    OilGloss,            // 油性亮光
    OilSatin,            // 油性缎光
    Primer,              // 底漆
}

impl PaintFinish {
    pub const ALL: [PaintFinish; 7] = [
        PaintFinish::MattEmulsion,
        PaintFinish::SilkEmulsion,
        PaintFinish::DiamondMattEmulsion,
        PaintFinish::OilEggshell,
        PaintFinish::OilGloss,
        PaintFinish::OilSatin,
        PaintFinish::Primer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaintFinish::MattEmulsion => "matt_emulsion",
            PaintFinish::SilkEmulsion => "silk_emulsion",
            PaintFinish::DiamondMattEmulsion => "diamond_matt_emulsion",
            PaintFinish::OilEggshell => "oil_eggshell",
            PaintFinish::OilGloss => "oil_gloss",
            PaintFinish::OilSatin => "oil_satin",
            PaintFinish::Primer => "primer",
        }
    }
}

impl fmt::Display for PaintFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaintFinish {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        PaintFinish::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| DomainError::invalid(format!("未知油漆饰面: {}", s)))
    }
}
