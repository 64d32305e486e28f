// ==========================================
// 餐饮库存决策支持系统 - 用量时间序列构建器
// ==========================================
// 职责: (月份, 食材) 用量累加 → 输出行 + 月份索引
//       + 按食材分组的有序序列
// 红线: 月份键 "YYYY-MM" 字典序 == 时间序,索引按此分配
// 红线: 喂给预测引擎的序列保留全精度,
//       4 位小数舍入只作用于输出行
// ==========================================

use crate::domain::usage::{IngredientUsageRecord, UsagePoint};
use crate::engine::explosion::UsageAccumulator;
use crate::engine::trend_core::TrendCore;
use std::collections::BTreeMap;

// ==========================================
// UsageTimeSeries - 构建结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct UsageTimeSeries {
    /// 出现过用量的月份,升序去重
    months: Vec<String>,
    /// 输出行,按 (月份, 食材) 有序,每对至多一行
    records: Vec<IngredientUsageRecord>,
    /// 食材 → 按月份索引升序的序列点 (未舍入)
    series: BTreeMap<String, Vec<UsagePoint>>,
}

impl UsageTimeSeries {
    /// 升序月份键列表
    pub fn months(&self) -> &[String] {
        &self.months
    }

    /// 月份键 → 时间索引 (0 起始)
    pub fn month_index(&self, month: &str) -> Option<usize> {
        self.months.binary_search_by(|m| m.as_str().cmp(month)).ok()
    }

    /// 对外输出的用量行
    pub fn records(&self) -> &[IngredientUsageRecord] {
        &self.records
    }

    /// 按食材分组的有序序列
    pub fn series(&self) -> &BTreeMap<String, Vec<UsagePoint>> {
        &self.series
    }

    /// 消费输出行 (报表组装用)
    pub fn into_records(self) -> Vec<IngredientUsageRecord> {
        self.records
    }
}

// ==========================================
// UsageSeriesBuilder - 序列构建器
// ==========================================
#[derive(Debug, Clone)]
pub struct UsageSeriesBuilder {
    /// 用量单位 (配方矩阵以克计量)
    unit: String,
}

impl Default for UsageSeriesBuilder {
    fn default() -> Self {
        Self {
            unit: "g".to_string(),
        }
    }
}

impl UsageSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定用量单位 (配方不以克计量时使用)
    pub fn with_unit(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
        }
    }

    /// 构建时间序列
    ///
    /// # 规则
    /// - 零/负累计量不产生行 (used_qty 恒为正)
    /// - 月份索引: 去重月份键升序编号 0,1,2,...
    /// - 输出行按 (月份, 食材) 排序,序列点按索引升序
    pub fn build(&self, usage: &UsageAccumulator) -> UsageTimeSeries {
        // 月份索引分配 (BTreeMap 键已按月份升序)
        let months: Vec<String> = {
            let mut months: Vec<String> =
                usage.keys().map(|(month, _)| month.clone()).collect();
            months.dedup();
            months
        };

        let index_of = |month: &str| -> Option<usize> {
            months.binary_search_by(|m| m.as_str().cmp(month)).ok()
        };

        let mut records = Vec::new();
        let mut series: BTreeMap<String, Vec<UsagePoint>> = BTreeMap::new();

        // 累加器按 (月份, 食材) 有序迭代 → 输出顺序确定,
        // 且每个食材的序列点自然按索引升序追加
        for ((month, ingredient), &qty) in usage {
            if qty <= 0.0 {
                continue;
            }

            records.push(IngredientUsageRecord {
                month: month.clone(),
                ingredient: ingredient.clone(),
                used_qty: TrendCore::round4(qty),
                unit: self.unit.clone(),
            });

            if let Some(month_index) = index_of(month) {
                series.entry(ingredient.clone()).or_default().push(UsagePoint {
                    month_index,
                    used_qty: qty,
                });
            }
        }

        UsageTimeSeries {
            months,
            records,
            series,
        }
    }
}
