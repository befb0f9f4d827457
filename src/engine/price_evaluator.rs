// ==========================================
// 涂装报价系统 - 计价引擎
// ==========================================
// 职责: (表面, 基材, 油漆, 人工单价) → 油漆费 / 人工费 / 总价
// 红线: 纯函数，不修改任何输入；内部计算不取整（仅展示时保留两位小数）
// ==========================================
// 油漆用量不向上取整到整罐：
//   paint_volume_needed = area / (floor(coverage × unit) / coverage_adjustment) × num_coats
// ==========================================

use crate::domain::paint::Paint;
use crate::domain::surface::Surface;
use serde::Serialize;

/// 默认人工单价（每平方米每道涂层）
pub const DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT: f64 = 4.0;

// ==========================================
// PriceEvaluation - 单个表面计价结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceEvaluation {
    pub paint_volume_needed: f64, // 所需零售单位数（小数）
    pub paint_cost: f64,
    pub labour_cost: f64,
    pub total_cost: f64,
}

// ==========================================
// PriceEvaluator - 计价引擎
// ==========================================
pub struct PriceEvaluator {
    // 无状态引擎
}

impl PriceEvaluator {
    pub fn new() -> Self {
        Self {}
    }

    /// 计算所需油漆零售单位数
    pub fn paint_volume_needed(&self, surface: &Surface, paint: &Paint) -> f64 {
        let substrate = surface.substrate();
        let effective_coverage =
            paint.total_coverage_per_sale_unit() / substrate.coverage_adjustment();
        (surface.area() / effective_coverage) * substrate.num_coats() as f64
    }

    /// 计算油漆费
    pub fn paint_cost(&self, surface: &Surface, paint: &Paint) -> f64 {
        self.paint_volume_needed(surface, paint) * paint.price()
    }

    /// 计算人工费
    pub fn labour_cost(&self, surface: &Surface, labour_rate_per_sqm_per_coat: f64) -> f64 {
        let substrate = surface.substrate();
        surface.area()
            * labour_rate_per_sqm_per_coat
            * surface.labour_adjustment()
            * substrate.num_coats() as f64
            * substrate.preparation_factor()
    }

    /// 完整计价
    pub fn evaluate(
        &self,
        surface: &Surface,
        paint: &Paint,
        labour_rate_per_sqm_per_coat: f64,
    ) -> PriceEvaluation {
        let paint_volume_needed = self.paint_volume_needed(surface, paint);
        let paint_cost = paint_volume_needed * paint.price();
        let labour_cost = self.labour_cost(surface, labour_rate_per_sqm_per_coat);
        PriceEvaluation {
            paint_volume_needed,
            paint_cost,
            labour_cost,
            total_cost: paint_cost + labour_cost,
        }
    }
}

impl Default for PriceEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
