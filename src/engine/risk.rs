// ==========================================
// 餐饮库存决策支持系统 - 供应风险分类器
// ==========================================
// 职责: 预测候选 × 月度到货计划 → 最终预测记录
// 红线: 计划查找为规范名精确匹配 (模糊解析
//       全部发生在更早的归一化阶段)
// 红线: 分类使用未舍入比值;2 位小数舍入只在输出边界
// ==========================================
// 输入: ForecastCandidate + 规范名 → 月计划量
// 输出: ForecastRecord
// ==========================================

use crate::domain::forecast::ForecastRecord;
use crate::domain::types::RiskCategory;
use crate::engine::forecast::ForecastCandidate;
use crate::engine::trend_core::TrendCore;
use std::collections::BTreeMap;

// ==========================================
// RiskClassifier - 供应风险分类器
// ==========================================
#[derive(Debug, Default)]
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 为预测候选补齐到货对照并分类
    ///
    /// # 规则
    /// - 无计划或计划量 ≤ 0 → no_plan,比值为 None
    /// - 否则 ratio = forecast_next / planned (未舍入),
    ///   按 1.2 / 0.67 边界分类
    /// - 输出: forecast_next 与 planned 2 位小数,比值 2 位小数
    pub fn classify(
        &self,
        candidates: Vec<ForecastCandidate>,
        plan: &BTreeMap<String, f64>,
    ) -> Vec<ForecastRecord> {
        candidates
            .into_iter()
            .map(|candidate| self.classify_one(candidate, plan))
            .collect()
    }

    fn classify_one(
        &self,
        candidate: ForecastCandidate,
        plan: &BTreeMap<String, f64>,
    ) -> ForecastRecord {
        let planned = plan.get(&candidate.ingredient).copied();

        let (planned_monthly, ratio, risk) = match planned {
            Some(p) if p > 0.0 => {
                let ratio = candidate.forecast_next / p;
                (Some(p), Some(ratio), TrendCore::classify_ratio(ratio))
            }
            _ => (planned, None, RiskCategory::NoPlan),
        };

        ForecastRecord {
            month: candidate.month,
            forecast_target: candidate.forecast_target,
            ingredient: candidate.ingredient,
            forecast_next: TrendCore::round2(candidate.forecast_next),
            trend: candidate.trend,
            planned_monthly: planned_monthly.map(TrendCore::round2),
            forecast_to_plan_ratio: ratio.map(TrendCore::round2),
            risk,
        }
    }
}
