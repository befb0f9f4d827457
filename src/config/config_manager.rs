// ==========================================
// 涂装报价系统 - 配置管理器
// ==========================================
// 职责: 配置加载、覆写、校验
// 存储: JSON 文件（默认位于用户配置目录 paint-estimator/config.json）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::engine::knapsack::DEFAULT_MAX_CAPACITY;
use crate::engine::price_evaluator::DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 保留小数位上限
const MAX_BREAKDOWN_DECIMALS: u32 = 10;

// ==========================================
// EstimatorConfig - 估价参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub labour_rate_per_sqm_per_coat: f64, // 每平方米每道人工费
    pub max_budget_capacity: usize,        // 预算容量上限（背包表大小）
    pub breakdown_decimals: u32,           // 明细保留小数位
    pub price_list_path: Option<PathBuf>,  // CSV 价目表（None 则使用内置目录价）
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            labour_rate_per_sqm_per_coat: DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT,
            max_budget_capacity: DEFAULT_MAX_CAPACITY,
            breakdown_decimals: 2,
            price_list_path: None,
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: EstimatorConfig,
    source: Option<PathBuf>, // 配置来源文件（None 表示内置默认值）
}

impl ConfigManager {
    /// 使用给定配置创建（构造时校验）
    pub fn new(config: EstimatorConfig) -> ConfigResult<Self> {
        Self::validate(&config)?;
        Ok(Self {
            config,
            source: None,
        })
    }

    /// 从指定 JSON 文件加载，并应用环境变量覆写
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let mut config = Self::read_file(path)?;
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        Self::validate(&config)?;

        info!(path = %path.display(), "configuration loaded");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 从默认位置加载；文件不存在时使用内置默认值
    pub fn load_default() -> ConfigResult<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                let mut config = EstimatorConfig::default();
                Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
                Self::validate(&config)?;
                debug!("no configuration file found, using defaults");
                Ok(Self {
                    config,
                    source: None,
                })
            }
        }
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("paint-estimator").join("config.json"))
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 获取配置快照（JSON 格式），随报告输出
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(&self.config)?)
    }

    /// 保存到指定文件（目录不存在时创建）
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.config)?)?;
        Ok(())
    }

    /// 用键查找函数覆写配置项
    ///
    /// # 参数
    /// - `lookup`: 环境变量名 -> 值（未设置返回 None）
    pub fn apply_overrides(
        config: &mut EstimatorConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<()> {
        if let Some(raw) = lookup(config_keys::ENV_LABOUR_RATE) {
            config.labour_rate_per_sqm_per_coat = raw.trim().parse().map_err(|_| {
                ConfigError::invalid(config_keys::ENV_LABOUR_RATE, format!("不是数字: {}", raw))
            })?;
        }
        if let Some(raw) = lookup(config_keys::ENV_MAX_BUDGET) {
            config.max_budget_capacity = raw.trim().parse().map_err(|_| {
                ConfigError::invalid(config_keys::ENV_MAX_BUDGET, format!("不是非负整数: {}", raw))
            })?;
        }
        if let Some(raw) = lookup(config_keys::ENV_PRICE_LIST) {
            let trimmed = raw.trim();
            config.price_list_path = if trimmed.is_empty() {
                None
            } else {
                Some(PathBuf::from(trimmed))
            };
        }
        Ok(())
    }

    /// 校验配置
    pub fn validate(config: &EstimatorConfig) -> ConfigResult<()> {
        let rate = config.labour_rate_per_sqm_per_coat;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(ConfigError::invalid(
                config_keys::LABOUR_RATE,
                format!("必须为正数，实际值: {}", rate),
            ));
        }
        if config.max_budget_capacity == 0 {
            return Err(ConfigError::invalid(config_keys::MAX_BUDGET_CAPACITY, "必须大于 0"));
        }
        if config.breakdown_decimals > MAX_BREAKDOWN_DECIMALS {
            return Err(ConfigError::invalid(
                config_keys::BREAKDOWN_DECIMALS,
                format!(
                    "不能超过 {}，实际值: {}",
                    MAX_BREAKDOWN_DECIMALS, config.breakdown_decimals
                ),
            ));
        }
        Ok(())
    }

    fn read_file(path: &Path) -> ConfigResult<EstimatorConfig> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self {
            config: EstimatorConfig::default(),
            source: None,
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 配置文件字段
    pub const LABOUR_RATE: &str = "labour_rate_per_sqm_per_coat";
    pub const MAX_BUDGET_CAPACITY: &str = "max_budget_capacity";
    pub const BREAKDOWN_DECIMALS: &str = "breakdown_decimals";
    pub const PRICE_LIST_PATH: &str = "price_list_path";

    // 环境变量
    pub const ENV_LABOUR_RATE: &str = "PAINT_ESTIMATOR_LABOUR_RATE";
    pub const ENV_MAX_BUDGET: &str = "PAINT_ESTIMATOR_MAX_BUDGET";
    pub const ENV_PRICE_LIST: &str = "PAINT_ESTIMATOR_PRICE_LIST";
}
