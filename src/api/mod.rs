// ==========================================
// 涂装报价系统 - API 层
// ==========================================
// 职责: 提供报价/预算优化业务接口，供命令行或上层服务调用
// ==========================================

pub mod dto;
pub mod error;
pub mod quote_api;

// 重导出核心类型
pub use dto::{
    JobRequest, OptimisationReport, PaintRequest, QuoteReport, QuoteTotals, RoomQuote,
    RoomRequest, SurfaceRequest,
};
pub use error::{ApiError, ApiResult};
pub use quote_api::QuoteApi;
