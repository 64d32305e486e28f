// ==========================================
// 餐饮库存决策支持系统 - 预测领域模型
// ==========================================
// 用途: 驾驶舱指标,只读数据源
// ==========================================

use crate::domain::types::{RiskCategory, TrendLabel};
use serde::{Deserialize, Serialize};

// ==========================================
// ForecastRecord - 需求预测记录
// ==========================================
// 每 (基准月份, 食材) 至多一行; 仅当基准月及之前
// 存在至少一个历史用量点时产生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub month: String,           // 基准月份 (用于前端按月过滤)
    pub forecast_target: String, // 预测目标月份 (下一月)

    // ===== 预测值 =====
    pub ingredient: String, // 规范食材名称
    pub forecast_next: f64, // 下月预测用量 (≥ 0, 输出保留 2 位小数)
    pub trend: TrendLabel,  // 趋势标签 (首末两点启发式)

    // ===== 供应对照 =====
    pub planned_monthly: Option<f64>,        // 月计划到货量 (无计划 → None)
    pub forecast_to_plan_ratio: Option<f64>, // 预测/计划 比值 (无计划 → None)
    pub risk: RiskCategory,                  // 供应风险类别
}
