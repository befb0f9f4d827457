// ==========================================
// 涂装报价系统 - 价格来源接口
// ==========================================
// 职责: 按油漆饰面查询 (price, unit, coverage)
// 红线: 价格来源由调用方注入，核心不硬连任何在线查询，离线可测
// ==========================================

use crate::domain::paint::{Paint, PaintQuote};
use crate::domain::types::PaintFinish;
use crate::importer::error::{PriceSourceError, PriceSourceResult};
use std::collections::HashMap;

// ==========================================
// Trait: PriceSource
// ==========================================
pub trait PriceSource {
    /// 价格来源名称（用于日志与错误信息）
    fn name(&self) -> &str;

    /// 查询饰面报价
    fn quote(&self, finish: PaintFinish) -> PriceSourceResult<PaintQuote>;

    /// 查询并构造油漆（报价在构造时校验）
    fn paint(&self, finish: PaintFinish) -> PriceSourceResult<Paint> {
        let quote = self.quote(finish)?;
        Paint::from_quote(finish, quote).map_err(|source| PriceSourceError::InvalidQuote {
            finish: finish.to_string(),
            source,
        })
    }
}

// ==========================================
// CatalogPriceSource - 内置目录价（离线默认）
// ==========================================
#[derive(Debug, Clone)]
pub struct CatalogPriceSource {
    quotes: HashMap<PaintFinish, PaintQuote>,
}

impl CatalogPriceSource {
    pub fn new() -> Self {
        let quotes = PaintFinish::ALL
            .iter()
            .map(|&finish| (finish, Self::catalog_quote(finish)))
            .collect();
        Self { quotes }
    }

    /// 目录价（price, unit 升, coverage 平方米/升/道）
    pub fn catalog_quote(finish: PaintFinish) -> PaintQuote {
        let (price, unit, coverage) = match finish {
            PaintFinish::MattEmulsion => (37.87, 5.0, 13.0),
            PaintFinish::SilkEmulsion => (46.27, 5.0, 12.0),
            PaintFinish::DiamondMattEmulsion => (50.03, 5.0, 12.0),
            PaintFinish::OilEggshell => (32.07, 2.5, 14.0),
            PaintFinish::OilGloss => (19.00, 1.0, 15.0),
            PaintFinish::OilSatin => (37.20, 2.5, 14.0),
            PaintFinish::Primer => (31.15, 2.5, 10.0),
        };
        PaintQuote {
            price,
            unit,
            coverage,
        }
    }

    /// 覆盖某个饰面的目录价
    pub fn with_quote(mut self, finish: PaintFinish, quote: PaintQuote) -> Self {
        self.quotes.insert(finish, quote);
        self
    }
}

impl Default for CatalogPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for CatalogPriceSource {
    fn name(&self) -> &str {
        "catalog"
    }

    fn quote(&self, finish: PaintFinish) -> PriceSourceResult<PaintQuote> {
        self.quotes
            .get(&finish)
            .copied()
            .ok_or_else(|| PriceSourceError::UnknownFinish {
                source_name: self.name().to_string(),
                finish: finish.to_string(),
            })
    }
}
