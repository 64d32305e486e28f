// ==========================================
// 餐饮库存决策支持系统 - 导入层
// ==========================================
// 职责: 外部 CSV 数据导入,生成领域记录
// 红线: 列名大小写不敏感匹配;缺失以 None 传播
// 红线: 仅配方表缺列为致命错误,销量/到货行级异常
//       一律 warn-and-skip
// ==========================================

// 模块声明
pub mod error;
pub mod recipe_importer;
pub mod sales_importer;
pub mod shipment_importer;
pub mod table_reader;
pub mod value_cleaner;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use recipe_importer::RecipeImporter;
pub use sales_importer::{MonthlySalesSource, SalesImport, SalesImporter};
pub use shipment_importer::ShipmentImporter;
pub use table_reader::{CsvTable, CsvTableReader};
pub use value_cleaner::ValueCleaner;
