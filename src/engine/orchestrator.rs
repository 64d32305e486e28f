// ==========================================
// 餐饮库存决策支持系统 - 洞察编排器
// ==========================================
// 职责: 一次性批处理主流程
//   销量 × 配方 → 爆算 → 时间序列 → 预测 → 风险分类
//   到货行 → 归一化 → 月度计划 (供风险分类关联)
// 红线: 纯函数式批处理 - 不持有跨次调用状态,
//       相同输入必得相同输出
// 红线: 配方矩阵为空属致命错误,其余异常行级跳过
// ==========================================
// 输入: InsightInputs (全部只读)
// 输出: InsightReport (四组记录 + 运行摘要)
// ==========================================

use crate::config::NormalizerProfile;
use crate::domain::forecast::ForecastRecord;
use crate::domain::recipe::RecipeMatrix;
use crate::domain::sales::{ItemCategoryRecord, ItemSaleRecord, MenuGroupRecord};
use crate::domain::shipment::{NormalizedShipment, PlannedSupply, ShipmentRecord};
use crate::domain::usage::IngredientUsageRecord;
use crate::engine::category::CategoryAggregator;
use crate::engine::explosion::RecipeExplosionEngine;
use crate::engine::forecast::ForecastEngine;
use crate::engine::risk::RiskClassifier;
use crate::engine::shipment_normalizer::ShipmentNormalizer;
use crate::engine::usage_series::UsageSeriesBuilder;
use crate::error::{EngineError, EngineResult};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// InsightInputs - 批处理输入
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct InsightInputs {
    pub sales: Vec<ItemSaleRecord>,              // 菜品月销量
    pub item_categories: Vec<ItemCategoryRecord>, // 分类销量明细
    pub recipe: RecipeMatrix,                    // 配方矩阵 (参考数据,必需)
    pub shipments: Vec<ShipmentRecord>,          // 原始到货行
}

// ==========================================
// RunSummary - 运行摘要
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub run_id: String,           // 本次运行ID
    pub months: usize,            // 覆盖月份数
    pub ingredient_count: usize,  // 出现用量的食材数
    pub usage_rows: usize,        // 用量行数
    pub forecast_rows: usize,     // 预测行数
    pub shipment_rows: usize,     // 归一化到货行数
    pub elapsed_ms: i64,          // 耗时(毫秒)
    pub generated_at: NaiveDateTime, // 生成时间 (UTC)
}

// ==========================================
// InsightReport - 批处理输出
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightReport {
    pub usage: Vec<IngredientUsageRecord>,    // 食材用量时间序列
    pub forecasts: Vec<ForecastRecord>,       // 需求预测 + 风险
    pub shipments: Vec<NormalizedShipment>,   // 归一化到货明细
    pub planned_supply: Vec<PlannedSupply>,   // 月度到货计划汇总
    pub menu_groups: Vec<MenuGroupRecord>,    // 菜单分类汇总
    pub summary: RunSummary,                  // 运行摘要
}

// ==========================================
// InsightOrchestrator - 洞察编排器
// ==========================================
pub struct InsightOrchestrator {
    explosion: RecipeExplosionEngine,
    series_builder: UsageSeriesBuilder,
    normalizer: ShipmentNormalizer,
    forecast: ForecastEngine,
    risk: RiskClassifier,
    category: CategoryAggregator,
}

impl Default for InsightOrchestrator {
    fn default() -> Self {
        Self::new(NormalizerProfile::default())
    }
}

impl InsightOrchestrator {
    pub fn new(profile: NormalizerProfile) -> Self {
        Self {
            explosion: RecipeExplosionEngine::new(),
            series_builder: UsageSeriesBuilder::new(),
            normalizer: ShipmentNormalizer::new(profile),
            forecast: ForecastEngine::new(),
            risk: RiskClassifier::new(),
            category: CategoryAggregator::new(),
        }
    }

    /// 执行一次完整批处理
    ///
    /// # 错误
    /// - 配方矩阵为空 → EngineError::RecipeUnavailable (致命)
    ///   其余异常均在各引擎内 warn-and-skip,保留部分输出
    #[instrument(skip_all, fields(sales = inputs.sales.len(), shipments = inputs.shipments.len()))]
    pub fn run(&self, inputs: &InsightInputs) -> EngineResult<InsightReport> {
        let started = Instant::now();

        if inputs.recipe.is_empty() {
            return Err(EngineError::RecipeUnavailable(
                "配方矩阵为空,无法进行食材爆算".to_string(),
            ));
        }

        // 1. 配方爆算
        let accumulator = self.explosion.explode(&inputs.sales, &inputs.recipe);

        // 2. 用量时间序列
        let timeseries = self.series_builder.build(&accumulator);

        // 3. 到货归一化
        let normalization = self.normalizer.normalize(&inputs.shipments);

        // 4. 逐食材预测
        let candidates = self.forecast.project(&timeseries);

        // 5. 供应风险分类
        let forecasts = self.risk.classify(candidates, &normalization.plan);

        // 6. 分类汇总 (相邻聚合)
        let menu_groups = self.category.aggregate(&inputs.item_categories);

        let summary = RunSummary {
            run_id: Uuid::new_v4().to_string(),
            months: timeseries.months().len(),
            ingredient_count: timeseries.series().len(),
            usage_rows: timeseries.records().len(),
            forecast_rows: forecasts.len(),
            shipment_rows: normalization.rows.len(),
            elapsed_ms: started.elapsed().as_millis() as i64,
            generated_at: chrono::Utc::now().naive_utc(),
        };

        info!(
            run_id = %summary.run_id,
            months = summary.months,
            usage_rows = summary.usage_rows,
            forecast_rows = summary.forecast_rows,
            "批处理完成"
        );

        let planned_supply = normalization.planned_supply();

        Ok(InsightReport {
            usage: timeseries.into_records(),
            forecasts,
            shipments: normalization.rows,
            planned_supply,
            menu_groups,
            summary,
        })
    }
}
