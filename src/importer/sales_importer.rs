// ==========================================
// 餐饮库存决策支持系统 - 销量导入器
// ==========================================
// 职责: 逐月销量 CSV → 菜品销量 + 分类销量记录
// 红线: 单月缺失/缺列 → warn 跳过该月,整体继续
// ==========================================
// 列识别: 菜品列含 "item"+"name",退而求其次
//         含 "item" 或 "menu";Count/Amount 必需;
//         分类列含 "category" (可选)
// ==========================================

use crate::domain::sales::{ItemCategoryRecord, ItemSaleRecord};
use crate::importer::table_reader::CsvTableReader;
use crate::importer::value_cleaner::ValueCleaner;
use std::path::PathBuf;
use tracing::warn;

const UNCATEGORIZED: &str = "Uncategorized";

// ==========================================
// MonthlySalesSource - 单月销量数据源
// ==========================================
#[derive(Debug, Clone)]
pub struct MonthlySalesSource {
    pub month: String, // 月份键 "YYYY-MM"
    pub path: PathBuf, // 该月销量 CSV 路径
}

// ==========================================
// SalesImport - 导入结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct SalesImport {
    pub sales: Vec<ItemSaleRecord>,
    pub item_categories: Vec<ItemCategoryRecord>,
}

// ==========================================
// SalesImporter - 销量导入器
// ==========================================
pub struct SalesImporter;

impl SalesImporter {
    /// 导入全部月份的销量数据
    ///
    /// # 规则
    /// - 文件缺失/解析失败 → warn 跳过该月
    /// - 无菜品列或无 Count/Amount 列 → warn 跳过该月
    /// - 菜品名空白或 count ≤ 0 的行丢弃
    /// - 分类列缺失 → 分类记录仍产出,分类为 "Uncategorized"
    pub fn import(sources: &[MonthlySalesSource]) -> SalesImport {
        let mut result = SalesImport::default();

        for source in sources {
            let table = match CsvTableReader::read(&source.path) {
                Ok(t) => t,
                Err(e) => {
                    warn!(month = %source.month, error = %e, "销量数据源不可用,跳过该月");
                    continue;
                }
            };

            // 菜品列: 优先 "item"+"name",其次 "item" / "menu"
            let item_col = table
                .column_containing(&["item", "name"])
                .or_else(|| table.column_containing(&["item"]))
                .or_else(|| table.column_containing(&["menu"]));
            let item_col = match item_col {
                Some(c) => c.to_string(),
                None => {
                    warn!(month = %source.month, "销量表无菜品列,跳过该月");
                    continue;
                }
            };

            let (count_col, amount_col) =
                match (table.column_exact("Count"), table.column_exact("Amount")) {
                    (Some(c), Some(a)) => (c.to_string(), a.to_string()),
                    _ => {
                        warn!(month = %source.month, "销量表缺少 Count/Amount 列,跳过该月");
                        continue;
                    }
                };

            let category_col = table.column_containing(&["category"]).map(str::to_string);

            for row in table.rows() {
                let item = match table.cell(row, &item_col) {
                    Some(name) => name.to_string(),
                    None => continue,
                };

                let count = row
                    .get(&count_col)
                    .map(|v| ValueCleaner::clean_count(v))
                    .unwrap_or(0);
                if count == 0 {
                    continue;
                }

                let revenue = row
                    .get(&amount_col)
                    .map(|v| ValueCleaner::clean_money(v))
                    .unwrap_or(0.0);

                result.sales.push(ItemSaleRecord {
                    month: source.month.clone(),
                    item: item.clone(),
                    count,
                    revenue,
                });

                let category = category_col
                    .as_deref()
                    .and_then(|c| table.cell(row, c))
                    .unwrap_or(UNCATEGORIZED)
                    .to_string();

                result.item_categories.push(ItemCategoryRecord {
                    month: source.month.clone(),
                    item,
                    category,
                    count,
                    revenue,
                });
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn source(month: &str, content: &str) -> (MonthlySalesSource, tempfile::NamedTempFile) {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        let src = MonthlySalesSource {
            month: month.to_string(),
            path: file.path().to_path_buf(),
        };
        (src, file)
    }

    #[test]
    fn test_import_cleans_and_filters_rows() {
        let (src, _file) = source(
            "2024-05",
            "Item Name,Menu Category,Count,Amount\n\
             Bowl A,Bowls,10,$120.50\n\
             Bowl B,Bowls,0,$0\n\
             ,Bowls,5,$10\n\
             Tea,Drinks,bad,$5\n",
        );

        let import = SalesImporter::import(&[src]);
        // 仅 Bowl A 有效: count 0 / 空菜品名 / 脏 count 均被丢弃
        assert_eq!(import.sales.len(), 1);
        let sale = &import.sales[0];
        assert_eq!(sale.month, "2024-05");
        assert_eq!(sale.item, "Bowl A");
        assert_eq!(sale.count, 10);
        assert!((sale.revenue - 120.5).abs() < 1e-9);

        assert_eq!(import.item_categories.len(), 1);
        assert_eq!(import.item_categories[0].category, "Bowls");
    }

    #[test]
    fn test_missing_category_column_defaults_uncategorized() {
        let (src, _file) = source("2024-05", "Item Name,Count,Amount\nBowl A,10,100\n");

        let import = SalesImporter::import(&[src]);
        assert_eq!(import.item_categories[0].category, "Uncategorized");
    }

    #[test]
    fn test_month_without_required_columns_skipped() {
        let (bad, _f1) = source("2024-05", "Item Name,Qty\nBowl A,10\n");
        let (good, _f2) = source("2024-06", "Item Name,Count,Amount\nBowl A,10,100\n");

        let import = SalesImporter::import(&[bad, good]);
        // 缺列的月份被跳过,完好的月份保留 (部分输出)
        assert_eq!(import.sales.len(), 1);
        assert_eq!(import.sales[0].month, "2024-06");
    }

    #[test]
    fn test_missing_file_skips_month() {
        let missing = MonthlySalesSource {
            month: "2024-05".to_string(),
            path: PathBuf::from("/nonexistent/sales.csv"),
        };
        let import = SalesImporter::import(&[missing]);
        assert!(import.sales.is_empty());
    }

    #[test]
    fn test_menu_column_fallback() {
        let (src, _file) = source("2024-05", "Menu,Count,Amount\nBowl A,3,30\n");
        let import = SalesImporter::import(&[src]);
        assert_eq!(import.sales.len(), 1);
        assert_eq!(import.sales[0].item, "Bowl A");
    }
}
