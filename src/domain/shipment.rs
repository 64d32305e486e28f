// ==========================================
// 餐饮库存决策支持系统 - 到货领域模型
// ==========================================
// 原始到货行 → 归一化到货行 → 月度到货计划
// 红线: 缺失字段以 None 传播,绝不默认为零
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ShipmentRecord - 原始到货行
// ==========================================
// 用途: 供应商到货表原始数据,任意字段均可能缺失
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub ingredient: Option<String>,         // 食材名称 (可能为别名)
    pub quantity_per_shipment: Option<f64>, // 单次到货量
    pub unit: Option<String>,               // 到货单位文本
    pub number_of_shipments: Option<f64>,   // 到货次数
    pub frequency: Option<String>,          // 到货频率自由文本
}

// ==========================================
// NormalizedShipment - 归一化到货行
// ==========================================
// 用途: 别名拆分 + 频率折算 + 单位换算后的明细输出
// 注: 一条原始行映射 k 个规范名时,产生 k 行,量均分 1/k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedShipment {
    pub ingredient: String,                  // 规范食材名称
    pub quantity_per_shipment: f64,          // 单次到货量 (已按份额拆分)
    pub unit: Option<String>,                // 到货单位
    pub number_of_shipments: Option<f64>,    // 到货次数
    pub frequency: Option<String>,           // 频率原文
    pub shipments_per_month: Option<f64>,    // 月到货次数 (次数缺失 → None)
    pub monthly_quantity: Option<f64>,       // 月到货量估计
    pub monthly_quantity_grams: Option<f64>, // 克归一化月到货量 (不可换算 → None)
}

// ==========================================
// PlannedSupply - 月度到货计划
// ==========================================
// 用途: 按规范食材名汇总的月计划量,风险分类的查找表
// 注: 优先取克归一化量,否则取原单位月量;
//     两者皆缺的行不参与汇总 (不按零计)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSupply {
    pub ingredient: String,   // 规范食材名称
    pub monthly_quantity: f64, // 月计划量
}
