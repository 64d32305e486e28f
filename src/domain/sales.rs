// ==========================================
// 餐饮库存决策支持系统 - 销量领域模型
// ==========================================
// 月份键格式: "YYYY-MM" (字典序 == 时间序,
// 月份索引分配依赖该性质)
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ItemSaleRecord - 菜品月销量记录
// ==========================================
// 用途: 点餐系统月度汇总,每 (月份, 菜品) 一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSaleRecord {
    pub month: String, // 月份键 "YYYY-MM"
    pub item: String,  // 菜品名称
    pub count: u32,    // 销量 (> 0, 上游已过滤)
    pub revenue: f64,  // 营业额
}

// ==========================================
// ItemCategoryRecord - 菜品分类销量记录
// ==========================================
// 用途: 带菜单分类的销量明细 (分类缺失时为 "Uncategorized")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategoryRecord {
    pub month: String,    // 月份键
    pub item: String,     // 菜品名称
    pub category: String, // 菜单分类
    pub count: u32,       // 销量
    pub revenue: f64,     // 营业额
}

// ==========================================
// MenuGroupRecord - 菜单分类月度汇总
// ==========================================
// 用途: 按 (月份, 分类) 汇总销量与营业额
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroupRecord {
    pub month: String,  // 月份键
    pub group: String,  // 菜单分类
    pub count: u64,     // 汇总销量
    pub revenue: f64,   // 汇总营业额
}
