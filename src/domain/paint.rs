// ==========================================
// 涂装报价系统 - 油漆领域模型
// ==========================================
// price: 每零售单位价格 (>= 0)
// unit: 每零售单位体积 (> 0, 升)
// coverage: 每升每道涂层覆盖面积 (> 0, 平方米)
// 红线: floor(coverage × unit) >= 1，否则单位覆盖面积为 0，价格无意义
// ==========================================

use crate::domain::error::{ensure_non_negative, ensure_positive, DomainError, DomainResult};
use crate::domain::types::PaintFinish;
use crate::importer::{PriceSource, PriceSourceResult};
use serde::{Deserialize, Serialize};

// ==========================================
// PaintQuote - 价格来源返回的报价三元组
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaintQuote {
    pub price: f64,
    pub unit: f64,
    pub coverage: f64,
}

// ==========================================
// Paint - 油漆
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paint {
    finish: Option<PaintFinish>,
    price: f64,
    unit: f64,
    coverage: f64,
}

impl Paint {
    /// 创建自定义油漆（构造时校验）
    pub fn new(price: f64, unit: f64, coverage: f64) -> DomainResult<Self> {
        let paint = Self {
            finish: None,
            price: ensure_non_negative("price", price)?,
            unit: ensure_positive("unit", unit)?,
            coverage: ensure_positive("coverage", coverage)?,
        };
        let per_unit = paint.total_coverage_per_sale_unit();
        if !per_unit.is_finite() || per_unit < 1.0 {
            return Err(DomainError::invalid(format!(
                "coverage × unit 必须至少为 1 平方米（实际 {} × {}）",
                coverage, unit
            )));
        }
        Ok(paint)
    }

    /// 由价格来源报价创建指定饰面的油漆
    pub fn from_quote(finish: PaintFinish, quote: PaintQuote) -> DomainResult<Self> {
        let paint = Self::new(quote.price, quote.unit, quote.coverage)?;
        Ok(Self {
            finish: Some(finish),
            ..paint
        })
    }

    /// 向注入的价格来源查价并创建油漆
    pub fn from_source(finish: PaintFinish, source: &dyn PriceSource) -> PriceSourceResult<Self> {
        source.paint(finish)
    }

    pub fn finish(&self) -> Option<PaintFinish> {
        self.finish
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn unit(&self) -> f64 {
        self.unit
    }

    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    /// 单个零售单位单道涂层可覆盖面积（向下取整）
    pub fn total_coverage_per_sale_unit(&self) -> f64 {
        (self.coverage * self.unit).floor()
    }
}
