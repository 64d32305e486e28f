// ==========================================
// 餐饮库存决策支持系统 - 领域类型定义
// ==========================================
// 序列化格式: snake_case (与前端 JSON 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 趋势标签 (Trend Label)
// ==========================================
// 由首末两点的简化斜率计算,仅作解释性标签,
// 与回归预测值相互独立 (允许二者不一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    Increasing, // 上升
    Decreasing, // 下降
    Stable,     // 平稳
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendLabel::Increasing => write!(f, "increasing"),
            TrendLabel::Decreasing => write!(f, "decreasing"),
            TrendLabel::Stable => write!(f, "stable"),
        }
    }
}

// ==========================================
// 供应风险类别 (Risk Category)
// ==========================================
// 依据: 预测用量 / 计划到货量 比值
// 边界: ratio ≥ 1.2 → 缺货风险; ratio ≤ 0.67 → 积压风险
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    NoPlan,        // 无到货计划
    OverstockRisk, // 积压风险
    Balanced,      // 供需平衡
    ShortageRisk,  // 缺货风险
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskCategory::NoPlan => write!(f, "no_plan"),
            RiskCategory::OverstockRisk => write!(f, "overstock_risk"),
            RiskCategory::Balanced => write!(f, "balanced"),
            RiskCategory::ShortageRisk => write!(f, "shortage_risk"),
        }
    }
}
