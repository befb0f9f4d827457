// ==========================================
// 涂装报价系统 - 预算优化引擎
// ==========================================
// 职责: 在预算内选取表面/房间，使涂装面积最大
// 输入: 工单 + 预算 + 策略
// 输出: OptimisedResult（选中子集 vs 原始全集）
// ==========================================
// 红线: 候选列表必须按总价升序（稳定），回溯的同值取舍依赖此顺序
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::job::{Job, PaintableSurface, Room};
use crate::domain::optimisation::OptimisedResult;
use crate::domain::types::Condition;
use crate::engine::knapsack::{KnapsackSolver, DEFAULT_MAX_CAPACITY};
use crate::engine::strategy::OptimiseStrategy;
use tracing::{debug, info, instrument};

/// 价格折算为整数成本（向上取整）
pub fn price_to_cost(price: f64) -> usize {
    price.ceil() as usize
}

// ==========================================
// BudgetOptimizer - 预算优化引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BudgetOptimizer {
    solver: KnapsackSolver,
}

impl BudgetOptimizer {
    pub fn new() -> Self {
        Self::with_max_capacity(DEFAULT_MAX_CAPACITY)
    }

    /// 指定预算容量上限
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self {
            solver: KnapsackSolver::with_max_capacity(max_capacity),
        }
    }

    pub fn max_capacity(&self) -> usize {
        self.solver.max_capacity()
    }

    /// 执行预算优化
    ///
    /// # 参数
    /// - `job`: 工单（只读）
    /// - `budget`: 整数预算，必须 >= 0 且不超过容量上限
    /// - `strategy`: 优化策略
    ///
    /// # 返回
    /// 选中子集（按房间名排序）与原始全集（按总价升序）
    #[instrument(skip(self, job), fields(job = %job.name(), rooms = job.rooms().len()))]
    pub fn optimise<'a>(
        &self,
        job: &'a Job,
        budget: i64,
        strategy: OptimiseStrategy,
    ) -> DomainResult<OptimisedResult<'a>> {
        let capacity = self.capacity(budget)?;
        let original = job.flatten();

        let (optimal_value, selected) = match strategy {
            OptimiseStrategy::BySurface => self.select_surfaces(&original, capacity)?,
            OptimiseStrategy::ByRoom => {
                self.select_rooms(job, capacity, |room| room.total_area())?
            }
            OptimiseStrategy::ByRoomCondition => self.select_rooms(job, capacity, |room| {
                room.total_area_by_condition(&[Condition::Poor])
            })?,
        };

        info!(
            strategy = %strategy,
            capacity,
            optimal_value,
            selected = selected.len(),
            total = original.len(),
            "budget optimisation finished"
        );

        Ok(OptimisedResult::new(
            strategy,
            capacity as u64,
            optimal_value,
            selected,
            original,
        ))
    }

    // ==========================================
    // 候选构造
    // ==========================================

    /// 按表面：value = 面积，cost = ceil(总价)
    fn select_surfaces<'a>(
        &self,
        items: &[&'a PaintableSurface],
        capacity: usize,
    ) -> DomainResult<(f64, Vec<&'a PaintableSurface>)> {
        let values: Vec<f64> = items.iter().map(|s| s.area()).collect();
        let costs: Vec<usize> = items.iter().map(|s| price_to_cost(s.total_price())).collect();
        debug!(?costs, "surface candidates");

        let solution = self.solver.solve(capacity, &values, &costs)?;
        let selected = solution.selected.iter().map(|&i| items[i]).collect();
        Ok((solution.optimal_value, selected))
    }

    /// 按房间：整间取舍，cost = ceil(房间总价)，value 由策略决定
    fn select_rooms<'a>(
        &self,
        job: &'a Job,
        capacity: usize,
        room_value: impl Fn(&Room) -> f64,
    ) -> DomainResult<(f64, Vec<&'a PaintableSurface>)> {
        let rooms = job.rooms_by_price();
        let values: Vec<f64> = rooms.iter().map(|&r| room_value(r)).collect();
        let costs: Vec<usize> = rooms.iter().map(|r| price_to_cost(r.total_price())).collect();
        debug!(?values, ?costs, "room candidates");

        let solution = self.solver.solve(capacity, &values, &costs)?;
        let selected = solution
            .selected
            .iter()
            .flat_map(|&i| {
                let room: &'a Room = rooms[i];
                room.surfaces().iter()
            })
            .collect();
        Ok((solution.optimal_value, selected))
    }

    fn capacity(&self, budget: i64) -> DomainResult<usize> {
        if budget < 0 {
            return Err(DomainError::invalid(format!(
                "输入 \"budget\" 必须为非负整数，实际值: {}",
                budget
            )));
        }
        let capacity = usize::try_from(budget)
            .map_err(|_| DomainError::invalid(format!("预算过大: {}", budget)))?;
        if capacity > self.max_capacity() {
            return Err(DomainError::invalid(format!(
                "预算 {} 超过上限 {}",
                capacity,
                self.max_capacity()
            )));
        }
        Ok(capacity)
    }
}
