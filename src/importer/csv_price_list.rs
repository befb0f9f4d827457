// ==========================================
// 涂装报价系统 - CSV 价目表
// ==========================================
// 格式: 表头 finish,price,unit,coverage（列顺序不限，表头大小写不敏感）
// 规则: 去除首尾空白；整行空白跳过；同一饰面重复出现时后者覆盖前者
// ==========================================

use crate::domain::paint::PaintQuote;
use crate::domain::types::PaintFinish;
use crate::importer::error::{PriceSourceError, PriceSourceResult};
use crate::importer::price_source::PriceSource;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 4] = ["finish", "price", "unit", "coverage"];

// ==========================================
// CsvPriceList - CSV 价目表价格来源
// ==========================================
#[derive(Debug, Clone)]
pub struct CsvPriceList {
    name: String,
    quotes: HashMap<PaintFinish, PaintQuote>,
}

impl CsvPriceList {
    /// 从 CSV 文件加载
    pub fn from_path(path: &Path) -> PriceSourceResult<Self> {
        if !path.exists() {
            return Err(PriceSourceError::FileNotFound(path.display().to_string()));
        }
        if let Some(ext) = path.extension() {
            if ext != "csv" {
                return Err(PriceSourceError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let list = Self::from_reader(path.display().to_string(), file)?;
        info!(path = %path.display(), finishes = list.len(), "price list loaded");
        Ok(list)
    }

    /// 从任意读取器加载
    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> PriceSourceResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .trim(csv::Trim::All)
            .from_reader(reader);

        // 读取表头，定位所需列
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let mut column_index = HashMap::new();
        for column in REQUIRED_COLUMNS {
            let idx = headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| PriceSourceError::MissingColumn(column.to_string()))?;
            column_index.insert(column, idx);
        }

        let mut quotes = HashMap::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            // 数据行号（表头为第 1 行）
            let row = row_idx + 2;

            // 跳过完全空白的行
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            let field = |column: &str| -> &str {
                record.get(column_index[column]).unwrap_or("").trim()
            };

            let finish: PaintFinish =
                field("finish")
                    .parse()
                    .map_err(|e: crate::domain::error::DomainError| {
                        PriceSourceError::TypeConversionError {
                            row,
                            field: "finish".to_string(),
                            message: e.message().to_string(),
                        }
                    })?;

            let quote = PaintQuote {
                price: parse_number(row, "price", field("price"))?,
                unit: parse_number(row, "unit", field("unit"))?,
                coverage: parse_number(row, "coverage", field("coverage"))?,
            };

            if quotes.insert(finish, quote).is_some() {
                warn!(row, finish = %finish, "duplicate finish in price list, later row wins");
            }
        }

        Ok(Self {
            name: name.into(),
            quotes,
        })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl PriceSource for CsvPriceList {
    fn name(&self) -> &str {
        &self.name
    }

    fn quote(&self, finish: PaintFinish) -> PriceSourceResult<PaintQuote> {
        self.quotes
            .get(&finish)
            .copied()
            .ok_or_else(|| PriceSourceError::UnknownFinish {
                source_name: self.name.clone(),
                finish: finish.to_string(),
            })
    }
}

fn parse_number(row: usize, field: &str, raw: &str) -> PriceSourceResult<f64> {
    raw.parse::<f64>()
        .map_err(|e| PriceSourceError::TypeConversionError {
            row,
            field: field.to_string(),
            message: format!("{} ({})", e, raw),
        })
}
