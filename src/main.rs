// ==========================================
// 涂装报价系统 - 命令行入口
// ==========================================
// 用法: paint-estimator [--config <config.json>] [--json-log] <job.json> [budget] [strategy]
// - 仅给出工单: 输出报价报告
// - 给出预算: 输出预算优化报告（strategy 默认 by_surface）
// 报告以 JSON 输出到 stdout，日志输出到 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use paint_estimator::api::{JobRequest, QuoteApi};
use paint_estimator::config::ConfigManager;
use paint_estimator::engine::OptimiseStrategy;
use paint_estimator::{logging, APP_NAME, VERSION};
use std::path::PathBuf;

struct CliArgs {
    config_path: Option<PathBuf>,
    job_path: PathBuf,
    budget: Option<i64>,
    strategy: OptimiseStrategy,
}

fn usage() -> String {
    "用法: paint-estimator [--config <config.json>] [--json-log] <job.json> [budget] [strategy]\n\
     strategy: by_surface | by_room | by_room_condition"
        .to_string()
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config_path = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config 需要一个文件路径")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json-log" => {}
            "-h" | "--help" => bail!(usage()),
            _ => positional.push(arg.as_str()),
        }
    }

    let job_path = match positional.first() {
        Some(path) => PathBuf::from(path),
        None => bail!(usage()),
    };
    let budget = positional
        .get(1)
        .map(|raw| {
            raw.parse::<i64>()
                .with_context(|| format!("预算必须为整数: {}", raw))
        })
        .transpose()?;
    let strategy = match positional.get(2) {
        Some(raw) => raw.parse::<OptimiseStrategy>()?,
        None => OptimiseStrategy::default(),
    };
    if positional.len() > 3 {
        bail!(usage());
    }

    Ok(CliArgs {
        config_path,
        job_path,
        budget,
        strategy,
    })
}

fn run(args: &[String]) -> Result<()> {
    let cli = parse_args(args)?;

    let manager = match &cli.config_path {
        Some(path) => ConfigManager::load(path)?,
        None => ConfigManager::load_default()?,
    };
    let api = QuoteApi::from_config(&manager)?;
    tracing::info!(
        "价格来源: {}, 人工费率: {}",
        api.price_source_name(),
        api.config().labour_rate_per_sqm_per_coat
    );

    let raw = std::fs::read_to_string(&cli.job_path)
        .with_context(|| format!("无法读取工单文件: {}", cli.job_path.display()))?;
    let request: JobRequest = serde_json::from_str(&raw)
        .with_context(|| format!("工单文件格式错误: {}", cli.job_path.display()))?;

    let output = match cli.budget {
        Some(budget) => serde_json::to_string_pretty(&api.optimise(&request, budget, cli.strategy)?)?,
        None => serde_json::to_string_pretty(&api.estimate(&request)?)?,
    };
    println!("{}", output);
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--json-log") {
        logging::init_json();
    } else {
        logging::init();
    }
    tracing::info!("{} v{}", APP_NAME, VERSION);

    if let Err(err) = run(&args) {
        tracing::error!("{:#}", err);
        eprintln!("错误: {:#}", err);
        std::process::exit(1);
    }
}
