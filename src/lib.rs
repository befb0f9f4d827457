// ==========================================
// 涂装报价系统 - 核心库
// ==========================================
// 功能: 多房间涂装报价 + 预算约束下的涂装范围优化
// 系统定位: 决策支持库 (报价与取舍建议由人工最终确认)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计价与预算优化
pub mod engine;

// 价格来源层 - 目录价 / CSV 价目表
pub mod importer;

// 配置层 - 估价参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{Condition, PaintFinish, SubstrateKind, SurfaceDesign, SurfaceKind};

// 领域实体
pub use domain::{
    BreakdownRecord, DomainError, DomainResult, Job, OptimisationSummary, OptimisedResult, Paint,
    PaintableSurface, Room, Substrate, Surface,
};

// 引擎
pub use engine::{optimal_knapsack, BudgetOptimizer, KnapsackSolver, OptimiseStrategy, PriceEvaluator};

// 价格来源
pub use importer::{CatalogPriceSource, CsvPriceList, PriceSource};

// API
pub use api::{ApiError, QuoteApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "涂装报价系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
