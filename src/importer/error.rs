// ==========================================
// 涂装报价系统 - 价格来源错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::error::DomainError;
use thiserror::Error;

/// 价格来源错误类型
#[derive(Error, Debug)]
pub enum PriceSourceError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("缺少列: {0}")]
    MissingColumn(String),

    #[error("类型转换失败 (行 {row}, 字段 {field}): {message}")]
    TypeConversionError {
        row: usize,
        field: String,
        message: String,
    },

    // ===== 查询错误 =====
    #[error("价格来源 {source_name} 无饰面报价: {finish}")]
    UnknownFinish { source_name: String, finish: String },

    #[error("报价无效 (饰面 {finish}): {source}")]
    InvalidQuote {
        finish: String,
        #[source]
        source: DomainError,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for PriceSourceError {
    fn from(err: std::io::Error) -> Self {
        PriceSourceError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for PriceSourceError {
    fn from(err: csv::Error) -> Self {
        PriceSourceError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type PriceSourceResult<T> = Result<T, PriceSourceError>;
