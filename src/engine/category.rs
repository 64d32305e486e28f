// ==========================================
// 餐饮库存决策支持系统 - 菜单分类汇总
// ==========================================
// 职责: 分类销量明细 → (月份, 分类) 汇总
// 注: 核心引擎之外的相邻简单聚合,供报表使用
// ==========================================

use crate::domain::sales::{ItemCategoryRecord, MenuGroupRecord};
use std::collections::BTreeMap;

// ==========================================
// CategoryAggregator - 分类汇总器
// ==========================================
#[derive(Debug, Default)]
pub struct CategoryAggregator;

impl CategoryAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 按 (月份, 分类) 汇总销量与营业额,输出有序
    pub fn aggregate(&self, records: &[ItemCategoryRecord]) -> Vec<MenuGroupRecord> {
        let mut totals: BTreeMap<(String, String), (u64, f64)> = BTreeMap::new();

        for record in records {
            let entry = totals
                .entry((record.month.clone(), record.category.clone()))
                .or_insert((0, 0.0));
            entry.0 += u64::from(record.count);
            entry.1 += record.revenue;
        }

        totals
            .into_iter()
            .map(|((month, group), (count, revenue))| MenuGroupRecord {
                month,
                group,
                count,
                revenue,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: &str, item: &str, category: &str, count: u32, revenue: f64) -> ItemCategoryRecord {
        ItemCategoryRecord {
            month: month.to_string(),
            item: item.to_string(),
            category: category.to_string(),
            count,
            revenue,
        }
    }

    #[test]
    fn test_aggregate_sums_by_month_and_category() {
        let records = vec![
            record("2024-05", "Bowl A", "Bowls", 10, 100.0),
            record("2024-05", "Bowl B", "Bowls", 5, 60.0),
            record("2024-05", "Tea", "Drinks", 20, 80.0),
            record("2024-06", "Bowl A", "Bowls", 8, 80.0),
        ];

        let groups = CategoryAggregator::new().aggregate(&records);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].month, "2024-05");
        assert_eq!(groups[0].group, "Bowls");
        assert_eq!(groups[0].count, 15);
        assert!((groups[0].revenue - 160.0).abs() < 1e-9);
        assert_eq!(groups[1].group, "Drinks");
        assert_eq!(groups[2].month, "2024-06");
    }
}
