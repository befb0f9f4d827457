// ==========================================
// 涂装报价系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有校验在构造时完成（快速失败），不在计价时惰性校验
// ==========================================

use thiserror::Error;

/// 领域层错误类型
///
/// 核心只有一种错误分类：输入无效（类型/数值范围/互斥参数/枚举取值）。
/// 错误不在内部重试或恢复，直接向调用方传播。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("无效输入: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// 构造 InvalidInput 错误
    pub fn invalid(message: impl Into<String>) -> Self {
        DomainError::InvalidInput(message.into())
    }

    /// 错误消息（不含分类前缀）
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidInput(msg) => msg,
        }
    }
}

/// Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// ==========================================
// 数值校验辅助函数
// ==========================================

/// 校验严格正数（有限且 > 0）
pub fn ensure_positive(field: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::invalid(format!(
            "输入 \"{}\" 必须为正数，实际值: {}",
            field, value
        )))
    }
}

/// 校验非负数（有限且 >= 0）
pub fn ensure_non_negative(field: &str, value: f64) -> DomainResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::invalid(format!(
            "输入 \"{}\" 必须为非负数，实际值: {}",
            field, value
        )))
    }
}
