// ==========================================
// 涂装报价系统 - 表面领域模型
// ==========================================
// 职责: 面积、人工系数、样式、窗格数、所属基材
// 红线: area 与 (length, width) 二选一，必须且只能提供其一
// ==========================================

use crate::domain::error::{ensure_positive, DomainError, DomainResult};
use crate::domain::substrate::Substrate;
use crate::domain::types::{SurfaceDesign, SurfaceKind};
use serde::{Deserialize, Serialize};

/// 含玻璃样式每个窗格增加的人工比例
pub const PANE_LABOUR_STEP: f64 = 0.1;

// ==========================================
// 表面默认参数表
// ==========================================

/// 单种表面的默认参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDefaults {
    pub labour_adjustment: f64,
    /// 可选样式及其人工系数，第一个为默认样式；空表示该类型无样式
    pub designs: &'static [(SurfaceDesign, f64)],
    /// 含玻璃样式未给出窗格数时的默认窗格数（None 表示必须显式提供）
    pub default_num_panes: Option<u32>,
}

const DOOR_DESIGNS: &[(SurfaceDesign, f64)] = &[
    (SurfaceDesign::FlatDoor, 1.0),
    (SurfaceDesign::Panelled, 1.25),
    (SurfaceDesign::CuttingIn, 1.5),
];

const NO_DESIGNS: &[(SurfaceDesign, f64)] = &[];

const WINDOW_DESIGNS: &[(SurfaceDesign, f64)] =
    &[(SurfaceDesign::Casement, 1.0), (SurfaceDesign::Sash, 1.2)];

impl SurfaceKind {
    /// 查询表面默认参数
    pub fn defaults(&self) -> SurfaceDefaults {
        let (labour_adjustment, designs, default_num_panes) =
            match self {
                SurfaceKind::Generic => (1.0, NO_DESIGNS, None),
                SurfaceKind::Wall => (1.0, NO_DESIGNS, None),
                SurfaceKind::Ceiling => (1.1, NO_DESIGNS, None),
                SurfaceKind::Door => (1.0, DOOR_DESIGNS, None),
                SurfaceKind::DoorFrame => (1.2, NO_DESIGNS, None),
                SurfaceKind::SkirtingBoard => (1.2, NO_DESIGNS, None),
                SurfaceKind::ElaborateCornice => (2.0, NO_DESIGNS, None),
                SurfaceKind::Window => (1.5, WINDOW_DESIGNS, Some(1)),
                SurfaceKind::WindowSill => (1.1, NO_DESIGNS, None),
                SurfaceKind::Spindle => (1.8, NO_DESIGNS, None),
                SurfaceKind::Radiator => (1.3, NO_DESIGNS, None),
            };
        SurfaceDefaults {
            labour_adjustment,
            designs,
            default_num_panes,
        }
    }
}

// ==========================================
// SurfaceInput - 表面构造参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceInput {
    #[serde(default = "default_kind")]
    pub kind: SurfaceKind,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub labour_adjustment: Option<f64>,
    #[serde(default)]
    pub design: Option<SurfaceDesign>,
    #[serde(default)]
    pub num_panes: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_kind() -> SurfaceKind {
    SurfaceKind::Generic
}

impl SurfaceInput {
    /// 按面积构造参数
    pub fn with_area(kind: SurfaceKind, area: f64) -> Self {
        Self {
            area: Some(area),
            ..Self::of(kind)
        }
    }

    /// 按长宽构造参数
    pub fn with_dimensions(kind: SurfaceKind, length: f64, width: f64) -> Self {
        Self {
            length: Some(length),
            width: Some(width),
            ..Self::of(kind)
        }
    }

    fn of(kind: SurfaceKind) -> Self {
        Self {
            kind,
            area: None,
            length: None,
            width: None,
            labour_adjustment: None,
            design: None,
            num_panes: None,
            name: None,
            description: None,
        }
    }
}

// ==========================================
// Surface - 待涂装表面
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    kind: SurfaceKind,
    area: f64,
    length: Option<f64>,
    width: Option<f64>,
    labour_adjustment: f64,
    design: Option<SurfaceDesign>,
    num_panes: u32,
    substrate: Substrate,
    name: String,
    description: Option<String>,
    room_name: Option<String>,
}

impl Surface {
    /// 创建表面（构造时完成全部校验）
    ///
    /// # 规则
    /// 1) area 与 (length, width) 必须且只能提供其一
    /// 2) 样式必须属于该表面类型的可选样式
    /// 3) 含玻璃样式窗格数必须 > 0
    /// 4) 未显式给出人工系数时按 类型基数 × 样式系数 × 窗格修正 推导
    pub fn new(input: SurfaceInput, substrate: Substrate) -> DomainResult<Self> {
        let area = resolve_area(input.area, input.length, input.width)?;
        let defaults = input.kind.defaults();

        let (design, design_factor) = resolve_design(input.kind, &defaults, input.design)?;
        let glazed = design.map(|d| d.is_glazed()).unwrap_or(false);

        let num_panes = match (glazed, input.num_panes) {
            (true, Some(0)) => {
                return Err(DomainError::invalid(format!(
                    "输入 \"num_panes\" 必须大于 0（样式 {} 含玻璃）",
                    design.map(|d| d.as_str()).unwrap_or("-")
                )))
            }
            (true, Some(n)) => n,
            (true, None) => defaults.default_num_panes.ok_or_else(|| {
                DomainError::invalid(format!(
                    "样式 {} 含玻璃，必须提供 \"num_panes\"",
                    design.map(|d| d.as_str()).unwrap_or("-")
                ))
            })?,
            (false, n) => n.unwrap_or(0),
        };

        let labour_adjustment = match input.labour_adjustment {
            Some(v) => ensure_positive("labour_adjustment", v)?,
            None => {
                let pane_factor = if glazed {
                    1.0 + PANE_LABOUR_STEP * num_panes as f64
                } else {
                    1.0
                };
                defaults.labour_adjustment * design_factor * pane_factor
            }
        };

        Ok(Self {
            kind: input.kind,
            area,
            length: input.length,
            width: input.width,
            labour_adjustment,
            design,
            num_panes,
            substrate,
            name: input
                .name
                .unwrap_or_else(|| input.kind.title().to_string()),
            description: input.description,
            room_name: None,
        })
    }

    /// 按面积快速创建（其余参数取类型默认值）
    pub fn with_area(kind: SurfaceKind, area: f64, substrate: Substrate) -> DomainResult<Self> {
        Self::new(SurfaceInput::with_area(kind, area), substrate)
    }

    /// 写入所属房间名（仅由 Room 构造时调用）
    pub(crate) fn set_room_name(&mut self, room_name: &str) {
        self.room_name = Some(room_name.to_string());
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn length(&self) -> Option<f64> {
        self.length
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn labour_adjustment(&self) -> f64 {
        self.labour_adjustment
    }

    pub fn design(&self) -> Option<SurfaceDesign> {
        self.design
    }

    pub fn num_panes(&self) -> u32 {
        self.num_panes
    }

    pub fn substrate(&self) -> &Substrate {
        &self.substrate
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn room_name(&self) -> Option<&str> {
        self.room_name.as_deref()
    }
}

// ==========================================
// 辅助函数
// ==========================================

fn resolve_area(area: Option<f64>, length: Option<f64>, width: Option<f64>) -> DomainResult<f64> {
    match (area, length, width) {
        (Some(area), None, None) => ensure_positive("area", area),
        (None, Some(length), Some(width)) => {
            let length = ensure_positive("length", length)?;
            let width = ensure_positive("width", width)?;
            ensure_positive("area", length * width)
        }
        _ => Err(DomainError::invalid(
            "输入 \"area\" 或 \"length\" 与 \"width\"，二者只能选其一",
        )),
    }
}

fn resolve_design(
    kind: SurfaceKind,
    defaults: &SurfaceDefaults,
    design: Option<SurfaceDesign>,
) -> DomainResult<(Option<SurfaceDesign>, f64)> {
    match design {
        Some(d) => defaults
            .designs
            .iter()
            .find(|(candidate, _)| *candidate == d)
            .map(|(candidate, factor)| (Some(*candidate), *factor))
            .ok_or_else(|| {
                DomainError::invalid(format!("表面类型 {} 不支持样式 {}", kind, d))
            }),
        None => Ok(defaults
            .designs
            .first()
            .map(|(d, factor)| (Some(*d), *factor))
            .unwrap_or((None, 1.0))),
    }
}
