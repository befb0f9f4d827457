// ==========================================
// 涂装报价系统 - 报价 API
// ==========================================
// 职责: 请求 -> 领域对象 -> 报价/预算优化报告
// 红线: 所有输入在构造领域对象时校验，任何一处无效则整单拒绝
// ==========================================

use crate::api::dto::{
    JobRequest, OptimisationReport, PaintRequest, QuoteReport, QuoteTotals, RoomQuote,
    SurfaceRequest,
};
use crate::api::error::ApiResult;
use crate::config::{ConfigManager, EstimatorConfig};
use crate::domain::job::{round_to, Job, PaintableSurface, Room};
use crate::domain::optimisation::OptimisationSummary;
use crate::domain::paint::Paint;
use crate::domain::substrate::Substrate;
use crate::domain::surface::Surface;
use crate::engine::budget_optimizer::BudgetOptimizer;
use crate::engine::strategy::OptimiseStrategy;
use crate::importer::{CatalogPriceSource, CsvPriceList, PriceSource};
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// QuoteApi - 报价 API
// ==========================================
pub struct QuoteApi {
    config: EstimatorConfig,
    price_source: Box<dyn PriceSource>,
    optimizer: BudgetOptimizer,
}

impl QuoteApi {
    /// 创建报价 API（配置在此校验）
    pub fn new(config: EstimatorConfig, price_source: Box<dyn PriceSource>) -> ApiResult<Self> {
        ConfigManager::validate(&config)?;
        let optimizer = BudgetOptimizer::with_max_capacity(config.max_budget_capacity);
        Ok(Self {
            config,
            price_source,
            optimizer,
        })
    }

    /// 按配置选择价格来源：配置了价目表则读 CSV，否则使用内置目录价
    pub fn from_config(manager: &ConfigManager) -> ApiResult<Self> {
        let config = manager.config().clone();
        let price_source: Box<dyn PriceSource> = match &config.price_list_path {
            Some(path) => Box::new(CsvPriceList::from_path(path)?),
            None => Box::new(CatalogPriceSource::new()),
        };
        Self::new(config, price_source)
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn price_source_name(&self) -> &str {
        self.price_source.name()
    }

    // ==========================================
    // 领域对象构造
    // ==========================================

    /// 由请求构造工单
    pub fn build_job(&self, request: &JobRequest) -> ApiResult<Job> {
        let job_rate = request
            .labour_rate_per_sqm_per_coat
            .unwrap_or(self.config.labour_rate_per_sqm_per_coat);

        let mut rooms = Vec::with_capacity(request.rooms.len());
        for room in &request.rooms {
            let surfaces = room
                .surfaces
                .iter()
                .map(|s| self.build_surface(s, job_rate))
                .collect::<ApiResult<Vec<_>>>()?;
            rooms.push(Room::new(surfaces, room.name.clone()));
        }
        Ok(Job::new(rooms, request.name.clone()))
    }

    fn build_surface(&self, request: &SurfaceRequest, job_rate: f64) -> ApiResult<PaintableSurface> {
        let substrate = Substrate::new(request.substrate.clone())?;
        let surface = Surface::new(request.surface.clone(), substrate)?;
        let paint = self.resolve_paint(&request.paint)?;
        let rate = request.labour_rate_per_sqm_per_coat.unwrap_or(job_rate);
        Ok(PaintableSurface::new(surface, paint, Some(rate))?)
    }

    fn resolve_paint(&self, request: &PaintRequest) -> ApiResult<Paint> {
        match *request {
            PaintRequest::Catalog { finish } => {
                Ok(Paint::from_source(finish, self.price_source.as_ref())?)
            }
            PaintRequest::Custom {
                price,
                unit,
                coverage,
            } => Ok(Paint::new(price, unit, coverage)?),
        }
    }

    // ==========================================
    // 报价
    // ==========================================

    /// 工单报价
    #[instrument(skip(self, request), fields(job = ?request.name, source = %self.price_source_name()))]
    pub fn estimate(&self, request: &JobRequest) -> ApiResult<QuoteReport> {
        let job = self.build_job(request)?;
        let report = self.quote_report(&job);
        info!(
            quote_id = %report.quote_id,
            total_price = report.totals.total_price,
            rooms = report.rooms.len(),
            "quote generated"
        );
        Ok(report)
    }

    /// 由已构造的工单生成报价报告
    pub fn quote_report(&self, job: &Job) -> QuoteReport {
        let decimals = self.config.breakdown_decimals;
        let rooms = job
            .rooms()
            .iter()
            .map(|room| RoomQuote {
                room_name: room.name().to_string(),
                totals: self.totals(
                    room.paint_price(),
                    room.labour_price(),
                    room.total_price(),
                    room.total_area(),
                ),
                surfaces: room
                    .surfaces()
                    .iter()
                    .map(|s| s.breakdown_with_decimals(decimals))
                    .collect(),
            })
            .collect();

        QuoteReport {
            quote_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            job_name: job.name().to_string(),
            price_source: self.price_source_name().to_string(),
            totals: self.totals(
                job.paint_price(),
                job.labour_price(),
                job.total_price(),
                job.total_area(),
            ),
            rooms,
        }
    }

    // ==========================================
    // 预算优化
    // ==========================================

    /// 预算优化
    #[instrument(skip(self, request), fields(job = ?request.name))]
    pub fn optimise(
        &self,
        request: &JobRequest,
        budget: i64,
        strategy: OptimiseStrategy,
    ) -> ApiResult<OptimisationReport> {
        let job = self.build_job(request)?;
        let report = self.optimisation_report(&job, budget, strategy)?;
        info!(
            report_id = %report.report_id,
            strategy = %strategy,
            selected = report.selected.len(),
            remaining = report.remaining.len(),
            "optimisation report generated"
        );
        Ok(report)
    }

    /// 由已构造的工单生成预算优化报告
    pub fn optimisation_report(
        &self,
        job: &Job,
        budget: i64,
        strategy: OptimiseStrategy,
    ) -> ApiResult<OptimisationReport> {
        let decimals = self.config.breakdown_decimals;
        let result = self.optimizer.optimise(job, budget, strategy)?;
        let summary = result.summary();

        Ok(OptimisationReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            job_name: job.name().to_string(),
            strategy,
            optimal_value: round_to(result.optimal_value(), decimals),
            summary: OptimisationSummary {
                budget: summary.budget,
                total_budgeted_price: round_to(summary.total_budgeted_price, decimals),
                total_area_in_budget: round_to(summary.total_area_in_budget, decimals),
                unpainted_area: round_to(summary.unpainted_area, decimals),
                cost_for_remaining_items: round_to(summary.cost_for_remaining_items, decimals),
            },
            selected: result
                .selected()
                .iter()
                .map(|s| s.breakdown_with_decimals(decimals))
                .collect(),
            remaining: result
                .remaining()
                .iter()
                .map(|s| s.breakdown_with_decimals(decimals))
                .collect(),
        })
    }

    fn totals(&self, paint_price: f64, labour_price: f64, total_price: f64, area: f64) -> QuoteTotals {
        let decimals = self.config.breakdown_decimals;
        QuoteTotals {
            paint_price: round_to(paint_price, decimals),
            labour_price: round_to(labour_price, decimals),
            total_price: round_to(total_price, decimals),
            total_area: round_to(area, decimals),
        }
    }
}
