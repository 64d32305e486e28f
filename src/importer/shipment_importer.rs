// ==========================================
// 餐饮库存决策支持系统 - 到货导入器
// ==========================================
// 职责: 到货 CSV → 原始 ShipmentRecord
// 红线: 任意字段缺失以 None 传播,不做猜测;
//       行级取舍由归一化引擎负责
// ==========================================
// 列识别 (大小写不敏感精确匹配):
//   ingredient / quantity per shipment / unit of shipment
//   / number of shipments / frequency|freq
// ==========================================

use crate::domain::shipment::ShipmentRecord;
use crate::importer::error::ImportResult;
use crate::importer::table_reader::CsvTableReader;
use crate::importer::value_cleaner::ValueCleaner;
use std::path::Path;
use tracing::warn;

// ==========================================
// ShipmentImporter - 到货导入器
// ==========================================
pub struct ShipmentImporter;

impl ShipmentImporter {
    /// 导入原始到货行
    ///
    /// # 规则
    /// - 到货表缺失 → warn,返回空集 (可恢复,不终止运行)
    /// - 列缺失 → 对应字段整列为 None
    pub fn import(path: &Path) -> ImportResult<Vec<ShipmentRecord>> {
        if !path.exists() {
            warn!(path = %path.display(), "到货表不存在,按无到货计划处理");
            return Ok(Vec::new());
        }

        let table = CsvTableReader::read(path)?;

        let ing_col = table.column_exact("ingredient").map(str::to_string);
        let qty_col = table.column_exact("quantity per shipment").map(str::to_string);
        let unit_col = table.column_exact("unit of shipment").map(str::to_string);
        let num_col = table.column_exact("number of shipments").map(str::to_string);
        let freq_col = table
            .column_exact("frequency")
            .or_else(|| table.column_exact("freq"))
            .map(str::to_string);

        let records = table
            .rows()
            .iter()
            .map(|row| ShipmentRecord {
                ingredient: ing_col
                    .as_deref()
                    .and_then(|c| table.cell(row, c))
                    .map(str::to_string),
                quantity_per_shipment: qty_col
                    .as_deref()
                    .and_then(|c| row.get(c))
                    .and_then(|v| ValueCleaner::clean_qty(v)),
                unit: unit_col
                    .as_deref()
                    .and_then(|c| table.cell(row, c))
                    .map(str::to_string),
                number_of_shipments: num_col
                    .as_deref()
                    .and_then(|c| row.get(c))
                    .and_then(|v| ValueCleaner::clean_qty(v)),
                frequency: freq_col
                    .as_deref()
                    .and_then(|c| table.cell(row, c))
                    .map(str::to_string),
            })
            .collect();

        Ok(records)
    }
}
