// ==========================================
// 涂装报价系统 - 基材领域模型
// ==========================================
// 职责: 基材状况 / 涂层数 / 覆盖率修正
// 红线: preparation_factor 只由 condition 推导，设置 condition 时同步重算
// ==========================================

use crate::domain::error::{ensure_positive, DomainError, DomainResult};
use crate::domain::types::{Condition, SubstrateKind};
use serde::{Deserialize, Serialize};

// ==========================================
// 基材默认参数表
// ==========================================

/// 单种基材的默认参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstrateDefaults {
    pub num_coats: u32,             // 默认涂层数
    pub num_coats_when_poor: u32,   // 状况较差时的涂层数
    pub coverage_adjustment: f64,   // 覆盖率修正（>1 表示吸漆更多）
}

impl SubstrateKind {
    /// 查询基材默认参数
    pub fn defaults(&self) -> SubstrateDefaults {
        let (num_coats, num_coats_when_poor, coverage_adjustment) = match self {
            SubstrateKind::PrePaintedEmulsion => (2, 3, 1.0),
            SubstrateKind::PrePaintedWood => (2, 3, 1.0),
            SubstrateKind::Plaster => (3, 3, 1.2),
            SubstrateKind::NewWood => (3, 3, 1.1),
            SubstrateKind::Mdf => (2, 2, 1.1),
            SubstrateKind::Metal => (2, 3, 1.0),
        };
        SubstrateDefaults {
            num_coats,
            num_coats_when_poor,
            coverage_adjustment,
        }
    }
}

// ==========================================
// SubstrateInput - 基材构造参数
// ==========================================
// None 表示使用类型默认值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubstrateInput {
    #[serde(default)]
    pub kind: SubstrateKind,
    #[serde(default)]
    pub condition: Option<Condition>,
    #[serde(default)]
    pub num_coats: Option<u32>,
    #[serde(default)]
    pub coverage_adjustment: Option<f64>,
}

// ==========================================
// Substrate - 基材
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substrate {
    kind: SubstrateKind,
    condition: Condition,
    num_coats: u32,
    coverage_adjustment: f64,
    preparation_factor: f64,
    // 涂层数是否由调用方显式指定（显式值不随 condition 变化）
    #[serde(skip)]
    explicit_num_coats: bool,
}

impl Substrate {
    /// 按构造参数创建基材（构造时完成全部校验）
    pub fn new(input: SubstrateInput) -> DomainResult<Self> {
        let defaults = input.kind.defaults();
        let condition = input.condition.unwrap_or_default();

        let explicit_num_coats = input.num_coats.is_some();
        let num_coats = match input.num_coats {
            Some(0) => {
                return Err(DomainError::invalid(
                    "输入 \"num_coats\" 必须为正整数",
                ))
            }
            Some(n) => n,
            None => Self::default_num_coats(&defaults, condition),
        };

        let coverage_adjustment = match input.coverage_adjustment {
            Some(v) => ensure_positive("coverage_adjustment", v)?,
            None => defaults.coverage_adjustment,
        };

        Ok(Self {
            kind: input.kind,
            condition,
            num_coats,
            coverage_adjustment,
            preparation_factor: condition.preparation_factor(),
            explicit_num_coats,
        })
    }

    /// 按类型默认参数创建（状况良好）
    pub fn of(kind: SubstrateKind) -> Self {
        let defaults = kind.defaults();
        Self {
            kind,
            condition: Condition::Good,
            num_coats: defaults.num_coats,
            coverage_adjustment: defaults.coverage_adjustment,
            preparation_factor: Condition::Good.preparation_factor(),
            explicit_num_coats: false,
        }
    }

    /// 默认基材：已涂乳胶漆（调用方未提供基材时显式选用）
    pub fn default_emulsion() -> Self {
        Self::of(SubstrateKind::PrePaintedEmulsion)
    }

    /// 以指定状况重建（链式调用）
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.set_condition(condition);
        self
    }

    /// 设置基材状况
    ///
    /// 同步重算 preparation_factor；涂层数为默认值时按新状况重新取默认。
    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
        self.preparation_factor = condition.preparation_factor();
        if !self.explicit_num_coats {
            self.num_coats = Self::default_num_coats(&self.kind.defaults(), condition);
        }
    }

    fn default_num_coats(defaults: &SubstrateDefaults, condition: Condition) -> u32 {
        if condition == Condition::Poor {
            defaults.num_coats_when_poor
        } else {
            defaults.num_coats
        }
    }

    // ==========================================
    // 只读访问
    // ==========================================

    pub fn kind(&self) -> SubstrateKind {
        self.kind
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn num_coats(&self) -> u32 {
        self.num_coats
    }

    pub fn coverage_adjustment(&self) -> f64 {
        self.coverage_adjustment
    }

    pub fn preparation_factor(&self) -> f64 {
        self.preparation_factor
    }
}

impl Default for Substrate {
    fn default() -> Self {
        Self::default_emulsion()
    }
}
