// ==========================================
// 餐饮库存决策支持系统 - CLI 主入口
// ==========================================
// 用法: inventory-dss <数据目录> [输出目录]
// 数据目录约定:
//   sales_YYYY-MM.csv  逐月销量表 (可多个)
//   recipe.csv         配方矩阵 (必需)
//   shipments.csv      到货表 (可选)
//   normalizer.json    归一化配置 (可选,缺省用内置表)
// 输出: 各记录集合的 JSON 文件 (薄输出适配器)
// ==========================================

use anyhow::{bail, Context, Result};
use inventory_dss::config::NormalizerProfile;
use inventory_dss::engine::{InsightInputs, InsightOrchestrator, InsightReport};
use inventory_dss::importer::{
    MonthlySalesSource, RecipeImporter, SalesImporter, ShipmentImporter,
};
use inventory_dss::logging;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", inventory_dss::APP_NAME, inventory_dss::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let data_dir = match args.next() {
        Some(d) => PathBuf::from(d),
        None => bail!("用法: inventory-dss <数据目录> [输出目录]"),
    };
    let out_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_dir.join("processed"));

    let inputs = load_inputs(&data_dir)?;
    let orchestrator = build_orchestrator(&data_dir)?;
    let report = orchestrator.run(&inputs)?;

    write_report(&out_dir, &report)?;

    tracing::info!(
        run_id = %report.summary.run_id,
        elapsed_ms = report.summary.elapsed_ms,
        "全部输出已写入 {}",
        out_dir.display()
    );
    Ok(())
}

/// 按目录约定装载输入
fn load_inputs(data_dir: &Path) -> Result<InsightInputs> {
    // 逐月销量: sales_YYYY-MM.csv,文件名派生月份键
    let mut sources = Vec::new();
    for entry in fs::read_dir(data_dir)
        .with_context(|| format!("数据目录不可读: {}", data_dir.display()))?
    {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        if let Some(month) = name
            .strip_prefix("sales_")
            .and_then(|rest| rest.strip_suffix(".csv"))
        {
            sources.push(MonthlySalesSource {
                month: month.to_string(),
                path: path.clone(),
            });
        }
    }
    // 月份键字典序 == 时间序
    sources.sort_by(|a, b| a.month.cmp(&b.month));
    if sources.is_empty() {
        tracing::warn!("数据目录中没有 sales_YYYY-MM.csv 文件");
    }

    let sales_import = SalesImporter::import(&sources);

    // 配方矩阵 (参考数据,缺失属致命)
    let recipe = RecipeImporter::import(&data_dir.join("recipe.csv"))?;

    // 到货表 (可选)
    let shipments = ShipmentImporter::import(&data_dir.join("shipments.csv"))?;

    Ok(InsightInputs {
        sales: sales_import.sales,
        item_categories: sales_import.item_categories,
        recipe,
        shipments,
    })
}

/// 归一化配置: 有 normalizer.json 则加载,否则用内置表
fn build_orchestrator(data_dir: &Path) -> Result<InsightOrchestrator> {
    let profile_path = data_dir.join("normalizer.json");
    let profile = if profile_path.exists() {
        NormalizerProfile::from_json_file(&profile_path)?
    } else {
        NormalizerProfile::default()
    };
    Ok(InsightOrchestrator::new(profile))
}

/// 输出各记录集合 (薄输出适配器)
fn write_report(out_dir: &Path, report: &InsightReport) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("输出目录不可创建: {}", out_dir.display()))?;

    dump_json(out_dir, "ingredient_usage_timeseries.json", &report.usage)?;
    dump_json(out_dir, "ingredient_demand_forecast.json", &report.forecasts)?;
    dump_json(out_dir, "ingredient_shipments.json", &report.shipments)?;
    dump_json(out_dir, "planned_supply.json", &report.planned_supply)?;
    dump_json(out_dir, "menu_groups.json", &report.menu_groups)?;
    dump_json(out_dir, "run_summary.json", &report.summary)?;
    Ok(())
}

fn dump_json<T: Serialize>(out_dir: &Path, name: &str, data: &T) -> Result<()> {
    let path = out_dir.join(name);
    let text = serde_json::to_string_pretty(data)?;
    fs::write(&path, text).with_context(|| format!("写入失败: {}", path.display()))?;
    tracing::info!("已写入 {}", path.display());
    Ok(())
}
