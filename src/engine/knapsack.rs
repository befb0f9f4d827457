// ==========================================
// 涂装报价系统 - 0/1 背包求解器
// ==========================================
// 职责: 在整数预算容量内选取子集，使总价值最大，每项至多选一次
// 算法: 动态规划（精确解），O(n × capacity) 时间与空间
// ==========================================
// 状态转移:
//   k[0][*] = 0, k[*][0] = 0
//   k[i][w] = max(value[i] + k[i-1][w - cost[i]], k[i-1][w])  若 cost[i] <= w
//           = k[i-1][w]                                        否则
// 回溯: 自 (n, capacity) 起，k[i][w] != k[i-1][w] 则选中 i 并扣减 cost[i]
// 红线: 回溯顺序决定同值解的取舍（k[i][w] == k[i-1][w] 时不选第 i 项），必须逐位复现
// 零成本项: 不占容量，始终选入，不参与 DP（k[*][0] = 0 会把它们挡在回溯之外）
// ==========================================

use crate::domain::error::{DomainError, DomainResult};
use serde::Serialize;
use tracing::debug;

/// 默认容量上限（防止超大预算导致 DP 表无界分配）
pub const DEFAULT_MAX_CAPACITY: usize = 100_000;

// ==========================================
// KnapsackSolution - 求解结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KnapsackSolution {
    /// 最优总价值 k[n][capacity]
    pub optimal_value: f64,
    /// 选中项下标（0 起），下标降序（即回溯顺序）
    pub selected: Vec<usize>,
    /// 选中项成本合计（必然 <= capacity）
    pub total_cost: usize,
}

// ==========================================
// KnapsackSolver - 背包求解器
// ==========================================
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    max_capacity: usize,
}

impl KnapsackSolver {
    pub fn new() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    /// 指定容量上限
    pub fn with_max_capacity(max_capacity: usize) -> Self {
        Self { max_capacity }
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// 求解 0/1 背包
    ///
    /// # 参数
    /// - `capacity`: 整数容量（预算）
    /// - `values`: 各项价值（有限非负实数）
    /// - `costs`: 各项成本（非负整数）
    ///
    /// # 错误
    /// - values/costs 长度不一致
    /// - 价值为负数或非有限数
    /// - 容量超过上限
    pub fn solve(
        &self,
        capacity: usize,
        values: &[f64],
        costs: &[usize],
    ) -> DomainResult<KnapsackSolution> {
        if values.len() != costs.len() {
            return Err(DomainError::invalid(format!(
                "values 与 costs 长度不一致: {} != {}",
                values.len(),
                costs.len()
            )));
        }
        if let Some((idx, v)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(v.is_finite() && **v >= 0.0))
        {
            return Err(DomainError::invalid(format!(
                "第 {} 项价值必须为非负数，实际值: {}",
                idx, v
            )));
        }
        if capacity > self.max_capacity {
            return Err(DomainError::invalid(format!(
                "预算容量 {} 超过上限 {}",
                capacity, self.max_capacity
            )));
        }

        // 零成本项不占容量，直接选入；其余项进入 DP
        let (free, paid): (Vec<usize>, Vec<usize>) =
            (0..values.len()).partition(|&i| costs[i] == 0);
        let free_value: f64 = free.iter().map(|&i| values[i]).sum();

        let n = paid.len();
        let width = capacity + 1;
        // k 按行展开存储：k[i][w] = table[i * width + w]
        let mut table = vec![0.0_f64; (n + 1) * width];

        for i in 1..=n {
            let value = values[paid[i - 1]];
            let cost = costs[paid[i - 1]];
            for w in 1..width {
                let skip = table[(i - 1) * width + w];
                table[i * width + w] = if cost <= w {
                    let take = value + table[(i - 1) * width + (w - cost)];
                    if take >= skip {
                        take
                    } else {
                        skip
                    }
                } else {
                    skip
                };
            }
        }

        let optimal_value = table[n * width + capacity] + free_value;

        let mut selected = Vec::new();
        let mut total_cost = 0;
        let mut i = n;
        let mut w = capacity;
        while i > 0 && w > 0 {
            if table[i * width + w] != table[(i - 1) * width + w] {
                let idx = paid[i - 1];
                selected.push(idx);
                w -= costs[idx];
                total_cost += costs[idx];
            }
            i -= 1;
        }
        selected.extend(free.iter().copied());
        selected.sort_unstable_by(|a, b| b.cmp(a));

        debug!(
            items = values.len(),
            free_items = free.len(),
            capacity,
            optimal_value,
            selected_count = selected.len(),
            "knapsack solved"
        );

        Ok(KnapsackSolution {
            optimal_value,
            selected,
            total_cost,
        })
    }
}

impl Default for KnapsackSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// 便捷入口：使用默认容量上限求解
pub fn optimal_knapsack(
    capacity: usize,
    values: &[f64],
    costs: &[usize],
) -> DomainResult<KnapsackSolution> {
    KnapsackSolver::new().solve(capacity, values, costs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_selection_order() {
        let solution = optimal_knapsack(8, &[1.0, 2.0, 5.0, 6.0], &[2, 3, 4, 5]).unwrap();
        assert_eq!(solution.selected, vec![3, 1]);
        assert_eq!(solution.optimal_value, 8.0);
        assert_eq!(solution.total_cost, 8);
    }

    #[test]
    fn test_single_best_item() {
        let solution = optimal_knapsack(8, &[10.0, 1.0, 1.0, 1.0], &[8, 8, 8, 8]).unwrap();
        assert_eq!(solution.selected, vec![0]);
    }

    #[test]
    fn test_exact_tie_resolves_to_lower_index() {
        // 两项等值等价，容量只够一项：k[2][w] == k[1][w]，回溯跳过第 2 项
        let solution = optimal_knapsack(5, &[3.0, 3.0], &[5, 5]).unwrap();
        assert_eq!(solution.selected, vec![0]);
    }

    #[test]
    fn test_zero_capacity() {
        let solution = optimal_knapsack(0, &[1.0, 2.0], &[1, 2]).unwrap();
        assert!(solution.selected.is_empty());
        assert_eq!(solution.optimal_value, 0.0);

        // 容量为 0 时仍选入零成本项
        let solution = optimal_knapsack(0, &[1.0, 2.0], &[1, 0]).unwrap();
        assert_eq!(solution.selected, vec![1]);
        assert_eq!(solution.optimal_value, 2.0);
    }

    #[test]
    fn test_item_larger_than_capacity_never_selected() {
        let solution = optimal_knapsack(10, &[100.0, 1.0], &[11, 3]).unwrap();
        assert_eq!(solution.selected, vec![1]);
    }

    #[test]
    fn test_zero_cost_items_included() {
        let solution = optimal_knapsack(4, &[2.0, 5.0, 1.0], &[0, 4, 0]).unwrap();
        let mut selected = solution.selected.clone();
        selected.sort_unstable();
        assert_eq!(selected, vec![0, 1, 2]);
        assert_eq!(solution.optimal_value, 8.0);
        assert_eq!(solution.total_cost, 4);
    }

    #[test]
    fn test_empty_items() {
        let solution = optimal_knapsack(50, &[], &[]).unwrap();
        assert!(solution.selected.is_empty());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(optimal_knapsack(5, &[1.0], &[1, 2]).is_err());
        assert!(optimal_knapsack(5, &[-1.0], &[1]).is_err());
        assert!(optimal_knapsack(5, &[f64::NAN], &[1]).is_err());
        let capped = KnapsackSolver::with_max_capacity(10);
        assert!(capped.solve(11, &[1.0], &[1]).is_err());
        assert!(capped.solve(10, &[1.0], &[1]).is_ok());
    }
}
