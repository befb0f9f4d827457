// ==========================================
// 涂装报价系统 - API层错误类型
// ==========================================
// 职责: 汇总领域/价格来源/配置错误，转换为用户可读的错误消息
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::error::DomainError;
use crate::importer::error::PriceSourceError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("价格来源错误: {0}")]
    PriceSource(#[from] PriceSourceError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

// ==========================================
// 从 DomainError 转换
// ==========================================
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidInput(msg) => ApiError::InvalidInput(msg),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_conversion() {
        let err: ApiError = DomainError::invalid("area 必须为正数").into();
        assert!(matches!(err, ApiError::InvalidInput(ref m) if m.contains("area")));
        assert_eq!(err.to_string(), "无效输入: area 必须为正数");
    }

    #[test]
    fn test_price_source_error_conversion() {
        let err: ApiError = PriceSourceError::FileNotFound("prices.csv".to_string()).into();
        assert!(err.to_string().contains("prices.csv"));
    }

    #[test]
    fn test_every_variant_comes_from_a_layer() {
        let errors: Vec<ApiError> = vec![
            DomainError::invalid("x").into(),
            PriceSourceError::FileNotFound("p".to_string()).into(),
            ConfigError::invalid("breakdown_decimals", "过大").into(),
        ];
        for err in errors {
            match err {
                ApiError::InvalidInput(_) | ApiError::PriceSource(_) | ApiError::Config(_) => {}
            }
        }
    }
}
