// ==========================================
// 涂装报价系统 - 领域模型层
// ==========================================
// 职责: 定义基材、表面、油漆、工单等领域实体与校验规则
// 红线: 实体构造时校验，构造成功即有效；不含价格来源与配置逻辑
// ==========================================

pub mod error;
pub mod job;
pub mod optimisation;
pub mod paint;
pub mod substrate;
pub mod surface;
pub mod types;

// 重导出核心类型
pub use error::{DomainError, DomainResult};
pub use job::{BreakdownRecord, Job, PaintableSurface, Room};
pub use optimisation::{OptimisationSummary, OptimisedResult};
pub use paint::{Paint, PaintQuote};
pub use substrate::{Substrate, SubstrateDefaults, SubstrateInput};
pub use surface::{Surface, SurfaceDefaults, SurfaceInput};
pub use types::{Condition, PaintFinish, SubstrateKind, SurfaceDesign, SurfaceKind};
