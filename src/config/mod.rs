// ==========================================
// 涂装报价系统 - 配置层
// ==========================================
// 职责: 估价参数加载与校验，支持多级覆写
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

pub mod config_manager;
pub mod error;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, EstimatorConfig};
pub use error::{ConfigError, ConfigResult};
