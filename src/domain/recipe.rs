// ==========================================
// 餐饮库存决策支持系统 - 配方领域模型
// ==========================================
// 配方矩阵: 菜品 → 食材 的稀疏单份用量表
// 红线: 缺失/零用量的条目不入矩阵 ("未知"≠"零")
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// ==========================================
// RecipeEntry - 配方条目 (扁平形式)
// ==========================================
// 用途: 导入层与矩阵之间的中间表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub item: String,                 // 菜品名称
    pub ingredient: String,           // 食材名称
    pub qty_per_serving: Option<f64>, // 单份用量 (缺失表示无此食材)
}

// ==========================================
// RecipeMatrix - 配方矩阵
// ==========================================
// 行键: 菜品名称; 列: 食材; 值: 单份用量
// 食材列使用 BTreeMap, 保证爆算时迭代顺序确定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatrix {
    rows: HashMap<String, BTreeMap<String, f64>>,
}

impl RecipeMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从扁平配方条目构建矩阵
    ///
    /// # 规则
    /// - qty_per_serving 缺失、非有限或为 0 的条目跳过 (不视为零用量)
    pub fn from_entries(entries: &[RecipeEntry]) -> Self {
        let mut matrix = Self::new();
        for entry in entries {
            if let Some(qty) = entry.qty_per_serving {
                matrix.insert_component(&entry.item, &entry.ingredient, qty);
            }
        }
        matrix
    }

    /// 写入一个配方分量
    ///
    /// # 规则
    /// - 非有限或为 0 的用量跳过
    pub fn insert_component(&mut self, item: &str, ingredient: &str, qty_per_serving: f64) {
        if !qty_per_serving.is_finite() || qty_per_serving == 0.0 {
            return;
        }
        self.rows
            .entry(item.to_string())
            .or_default()
            .insert(ingredient.to_string(), qty_per_serving);
    }

    /// 查询菜品的食材分量表 (左连接语义: 未收录的菜品返回 None)
    pub fn components_for(&self, item: &str) -> Option<&BTreeMap<String, f64>> {
        self.rows.get(item)
    }

    /// 收录的菜品数量
    pub fn item_count(&self) -> usize {
        self.rows.len()
    }

    /// 矩阵是否为空 (无任何菜品行)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
