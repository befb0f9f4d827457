// ==========================================
// 涂装报价系统 - 引擎层
// ==========================================
// 职责: 价格计算与预算优化（无状态、同步、可重入）
// 红线: 引擎不修改工单，只读取并返回新结果
// ==========================================

pub mod budget_optimizer;
pub mod knapsack;
pub mod price_evaluator;
pub mod strategy;

// 重导出核心引擎
pub use budget_optimizer::{price_to_cost, BudgetOptimizer};
pub use knapsack::{optimal_knapsack, KnapsackSolution, KnapsackSolver, DEFAULT_MAX_CAPACITY};
pub use price_evaluator::{PriceEvaluation, PriceEvaluator, DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT};
pub use strategy::OptimiseStrategy;
