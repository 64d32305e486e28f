// ==========================================
// 餐饮库存决策支持系统 - 配方爆算引擎
// ==========================================
// 职责: 菜品销量 × 配方矩阵 → (月份, 食材) 用量累加
// 红线: 左连接语义 - 无配方的菜品静默跳过,不报错
// 红线: 累加器为显式归属结构,按键有序 (确定性输出)
// ==========================================
// 输入: 菜品月销量 + 配方矩阵
// 输出: (月份, 食材) → 累计用量
// ==========================================

use crate::domain::recipe::RecipeMatrix;
use crate::domain::sales::ItemSaleRecord;
use std::collections::BTreeMap;
use tracing::debug;

/// 爆算累加器键: (月份, 食材)
/// BTreeMap 保证按月份、再按食材的稳定迭代顺序
pub type UsageAccumulator = BTreeMap<(String, String), f64>;

// ==========================================
// RecipeExplosionEngine - 配方爆算引擎
// ==========================================
#[derive(Debug, Default)]
pub struct RecipeExplosionEngine;

impl RecipeExplosionEngine {
    pub fn new() -> Self {
        Self
    }

    /// 爆算: 将菜品销量展开为食材用量
    ///
    /// # 规则
    /// - count ≤ 0 的销量行不贡献 (上游已过滤,此处兜底)
    /// - 配方矩阵无此菜品 → 跳过 (左连接,不视为错误)
    /// - 矩阵只含非零分量,每个分量贡献 qty_per_serving × count
    ///
    /// # 复杂度
    /// O(销量行数 × 配方列宽),月度粒度下两者均有界
    pub fn explode(&self, sales: &[ItemSaleRecord], matrix: &RecipeMatrix) -> UsageAccumulator {
        let mut accumulator = UsageAccumulator::new();

        for sale in sales {
            if sale.count == 0 {
                continue;
            }

            let components = match matrix.components_for(&sale.item) {
                Some(c) => c,
                None => {
                    debug!(item = %sale.item, month = %sale.month, "菜品无配方,跳过");
                    continue;
                }
            };

            for (ingredient, qty_per_serving) in components {
                let total = qty_per_serving * f64::from(sale.count);
                *accumulator
                    .entry((sale.month.clone(), ingredient.clone()))
                    .or_insert(0.0) += total;
            }
        }

        accumulator
    }
}
