// ==========================================
// 涂装报价系统 - API 数据传输对象
// ==========================================
// 请求: JobRequest -> RoomRequest -> SurfaceRequest（JSON 输入）
// 响应: QuoteReport / OptimisationReport（JSON 输出）
// ==========================================

use crate::domain::job::BreakdownRecord;
use crate::domain::optimisation::OptimisationSummary;
use crate::domain::substrate::SubstrateInput;
use crate::domain::surface::SurfaceInput;
use crate::domain::types::PaintFinish;
use crate::engine::strategy::OptimiseStrategy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// 请求
// ==========================================

/// 工单请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rooms: Vec<RoomRequest>,
    /// 工单级人工费率（表面级费率优先）
    #[serde(default)]
    pub labour_rate_per_sqm_per_coat: Option<f64>,
}

/// 房间请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surfaces: Vec<SurfaceRequest>,
}

/// 表面请求（表面字段平铺在同一层）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRequest {
    #[serde(flatten)]
    pub surface: SurfaceInput,
    #[serde(default)]
    pub substrate: SubstrateInput,
    pub paint: PaintRequest,
    #[serde(default)]
    pub labour_rate_per_sqm_per_coat: Option<f64>,
}

/// 油漆请求：按饰面查价，或直接给出报价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaintRequest {
    Catalog { finish: PaintFinish },
    Custom { price: f64, unit: f64, coverage: f64 },
}

// ==========================================
// 响应
// ==========================================

/// 金额与面积合计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub paint_price: f64,
    pub labour_price: f64,
    pub total_price: f64,
    pub total_area: f64,
}

/// 房间报价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomQuote {
    pub room_name: String,
    pub totals: QuoteTotals,
    pub surfaces: Vec<BreakdownRecord>,
}

/// 工单报价报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReport {
    pub quote_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_name: String,
    pub price_source: String,
    pub totals: QuoteTotals,
    pub rooms: Vec<RoomQuote>,
}

/// 预算优化报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimisationReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub job_name: String,
    pub strategy: OptimiseStrategy,
    pub optimal_value: f64,
    pub summary: OptimisationSummary,
    pub selected: Vec<BreakdownRecord>, // 预算内（按房间名排序）
    pub remaining: Vec<BreakdownRecord>, // 预算外（按总价升序）
}
