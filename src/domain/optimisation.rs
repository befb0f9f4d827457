// ==========================================
// 涂装报价系统 - 预算优化结果
// ==========================================
// 职责: 持有选中子集与原始全集（均为表面引用），推导对比统计
// 红线: 选中集 ⊆ 原始集，故未涂面积与剩余费用均非负
// 生命周期: 每次优化调用新建，之后不再修改
// ==========================================

use crate::domain::job::{BreakdownRecord, PaintableSurface};
use crate::engine::strategy::OptimiseStrategy;
use serde::{Deserialize, Serialize};

// ==========================================
// OptimisationSummary - 预算对比汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimisationSummary {
    pub budget: u64,
    pub total_budgeted_price: f64,
    pub total_area_in_budget: f64,
    pub unpainted_area: f64,
    pub cost_for_remaining_items: f64,
}

// ==========================================
// OptimisedResult - 优化结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct OptimisedResult<'a> {
    strategy: OptimiseStrategy,
    budget: u64,
    optimal_value: f64,
    selected: Vec<&'a PaintableSurface>,
    original: Vec<&'a PaintableSurface>,
}

impl<'a> OptimisedResult<'a> {
    /// 创建优化结果
    ///
    /// `selected` 按房间名稳定排序后保存；`original` 保持调用方给出的顺序。
    pub fn new(
        strategy: OptimiseStrategy,
        budget: u64,
        optimal_value: f64,
        selected: Vec<&'a PaintableSurface>,
        original: Vec<&'a PaintableSurface>,
    ) -> Self {
        let mut selected = selected;
        selected.sort_by(|a, b| a.room_name().cmp(&b.room_name()));
        Self {
            strategy,
            budget,
            optimal_value,
            selected,
            original,
        }
    }

    pub fn strategy(&self) -> OptimiseStrategy {
        self.strategy
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// 背包目标值（按策略为面积或较差基材面积）
    pub fn optimal_value(&self) -> f64 {
        self.optimal_value
    }

    pub fn selected(&self) -> &[&'a PaintableSurface] {
        &self.selected
    }

    pub fn original(&self) -> &[&'a PaintableSurface] {
        &self.original
    }

    /// 原始集中未被选中的表面
    pub fn remaining(&self) -> Vec<&'a PaintableSurface> {
        self.original
            .iter()
            .copied()
            .filter(|item| !self.selected.iter().any(|s| std::ptr::eq(*s, *item)))
            .collect()
    }

    /// 选中表面的报价明细
    pub fn breakdown(&self) -> Vec<BreakdownRecord> {
        self.selected.iter().map(|s| s.breakdown()).collect()
    }

    /// 预算对比汇总
    pub fn summary(&self) -> OptimisationSummary {
        let remaining = self.remaining();
        OptimisationSummary {
            budget: self.budget,
            total_budgeted_price: self.selected.iter().fold(0.0, |acc, s| acc + s.total_price()),
            total_area_in_budget: self.selected.iter().fold(0.0, |acc, s| acc + s.area()),
            unpainted_area: remaining.iter().fold(0.0, |acc, s| acc + s.area()),
            cost_for_remaining_items: remaining.iter().fold(0.0, |acc, s| acc + s.total_price()),
        }
    }
}
