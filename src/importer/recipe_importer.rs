// ==========================================
// 餐饮库存决策支持系统 - 配方导入器
// ==========================================
// 职责: 配方 CSV → 配方矩阵 (参考数据)
// 红线: 文件缺失或无菜品名称列 → 致命错误,
//       引擎没有配方矩阵无法运行
// ==========================================
// 表结构: 菜品名称列 + 每食材一列 (单份用量)
// ==========================================

use crate::domain::recipe::RecipeMatrix;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table_reader::CsvTableReader;
use crate::importer::value_cleaner::ValueCleaner;
use std::path::Path;
use tracing::info;

// ==========================================
// RecipeImporter - 配方导入器
// ==========================================
pub struct RecipeImporter;

impl RecipeImporter {
    /// 导入配方矩阵
    ///
    /// # 规则
    /// - 菜品列: 表头同时含 "item" 与 "name" (大小写不敏感)
    /// - 其余所有列视为食材列
    /// - 单元格经数量清洗: 缺失/脏值/零 → 不入矩阵
    ///
    /// # 错误
    /// - 文件不存在或无菜品名称列 → 致命
    pub fn import(path: &Path) -> ImportResult<RecipeMatrix> {
        let table = CsvTableReader::read(path)?;

        let item_col = table
            .column_containing(&["item", "name"])
            .map(str::to_string)
            .ok_or_else(|| ImportError::ItemColumnMissing {
                path: path.display().to_string(),
                headers: table.headers().to_vec(),
            })?;

        let ingredient_cols: Vec<String> = table
            .headers()
            .iter()
            .filter(|h| **h != item_col && !h.is_empty())
            .cloned()
            .collect();

        let mut matrix = RecipeMatrix::new();
        for row in table.rows() {
            let item = match table.cell(row, &item_col) {
                Some(name) => name,
                None => continue,
            };

            for col in &ingredient_cols {
                if let Some(qty) = row.get(col).and_then(|v| ValueCleaner::clean_qty(v)) {
                    matrix.insert_component(item, col, qty);
                }
            }
        }

        info!(
            items = matrix.item_count(),
            ingredients = ingredient_cols.len(),
            "配方矩阵导入完成"
        );
        Ok(matrix)
    }
}
