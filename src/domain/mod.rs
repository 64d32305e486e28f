// ==========================================
// 餐饮库存决策支持系统 - 领域层
// ==========================================
// 职责: 不可变领域实体与类型定义
// 红线: 实体在批处理中一次性派生,创建后不再修改
// ==========================================

pub mod forecast;
pub mod recipe;
pub mod sales;
pub mod shipment;
pub mod types;
pub mod usage;

// 重导出领域实体
pub use forecast::ForecastRecord;
pub use recipe::{RecipeEntry, RecipeMatrix};
pub use sales::{ItemCategoryRecord, ItemSaleRecord, MenuGroupRecord};
pub use shipment::{NormalizedShipment, PlannedSupply, ShipmentRecord};
pub use usage::{IngredientUsageRecord, UsagePoint};
