// ==========================================
// 餐饮库存决策支持系统 - 用量领域模型
// ==========================================
// 食材用量 = 销量 × 配方矩阵爆算结果
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// IngredientUsageRecord - 食材月用量记录
// ==========================================
// 用途: 对外输出的时间序列行,每 (月份, 食材) 至多一行
// 红线: used_qty 恒为正 (零/负贡献不产生记录)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsageRecord {
    pub month: String,      // 月份键 "YYYY-MM"
    pub ingredient: String, // 规范食材名称
    pub used_qty: f64,      // 月用量 (输出时保留 4 位小数)
    pub unit: String,       // 用量单位 (默认 "g")
}

// ==========================================
// UsagePoint - 序列点
// ==========================================
// 用途: 预测引擎的唯一输入形态 (月份索引, 用量)
// 注: used_qty 保留全精度,边界舍入只发生在输出层
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsagePoint {
    pub month_index: usize, // 0 起始的时间索引
    pub used_qty: f64,      // 未舍入用量
}
