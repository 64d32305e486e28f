// ==========================================
// 餐饮库存决策支持系统 - 需求预测引擎
// ==========================================
// 职责: 逐 (基准月, 食材) 产生下月用量预测候选
// 红线: 仅使用月份索引 ≤ 基准索引的历史点
// 红线: 基准月无任何历史点 → 不产生行
// 注: 预测点为 max(已选索引)+1,食材在基准月前
//     有断档时该点可能早于目标月 (沿用线上口径)
// ==========================================
// 输入: UsageTimeSeries
// 输出: ForecastCandidate (未舍入,未关联到货计划)
// ==========================================

use crate::domain::types::TrendLabel;
use crate::engine::trend_core::TrendCore;
use crate::engine::usage_series::UsageTimeSeries;
use tracing::debug;

// ==========================================
// ForecastCandidate - 预测候选 (内部使用)
// ==========================================
// 风险分类器补齐到货对照后转为 ForecastRecord
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCandidate {
    pub month: String,           // 基准月份
    pub forecast_target: String, // 目标月份 (基准月的下一月)
    pub ingredient: String,      // 规范食材名称
    pub forecast_next: f64,      // 预测用量 (未舍入, ≥ 0)
    pub trend: TrendLabel,       // 趋势标签
}

// ==========================================
// ForecastEngine - 需求预测引擎
// ==========================================
#[derive(Debug, Default)]
pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// 对全部 (基准月, 食材) 组合生成预测候选
    ///
    /// # 规则
    /// - 基准月取全局月份索引中相邻月份对 (i, i+1) 的 i
    /// - 每个食材选取索引 ≤ i 的历史点;无点 → 跳过
    /// - 预测值: TrendCore::linear_forecast (OLS,下限 0)
    /// - 趋势标签: TrendCore::trend_label (首末两点启发式,
    ///   与回归独立,允许与预测值方向不一致)
    /// - 输出按基准月、再按食材有序
    pub fn project(&self, timeseries: &UsageTimeSeries) -> Vec<ForecastCandidate> {
        let months = timeseries.months();
        let mut candidates = Vec::new();

        if months.len() < 2 {
            debug!(months = months.len(), "月份数不足,无相邻月份对可预测");
            return candidates;
        }

        for base_index in 0..months.len() - 1 {
            let base_month = &months[base_index];
            let target_month = &months[base_index + 1];

            // series() 为 BTreeMap: 食材迭代有序 → 输出确定
            for (ingredient, series) in timeseries.series() {
                let points: Vec<_> = series
                    .iter()
                    .filter(|p| p.month_index <= base_index)
                    .copied()
                    .collect();

                let forecast_next = match TrendCore::linear_forecast(&points) {
                    Some(value) => value,
                    None => continue, // 基准月前无历史点
                };

                candidates.push(ForecastCandidate {
                    month: base_month.clone(),
                    forecast_target: target_month.clone(),
                    ingredient: ingredient.clone(),
                    forecast_next,
                    trend: TrendCore::trend_label(&points),
                });
            }
        }

        candidates
    }
}
