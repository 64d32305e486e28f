// ==========================================
// 餐饮库存决策支持系统 - 核心库
// ==========================================
// 技术栈: Rust (纯批处理计算)
// 系统定位: 决策支持系统 (库存充足性监控)
// 流程: 销量 × 配方 → 食材用量 → 趋势预测 → 供应风险
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 归一化配置
pub mod config;

// 日志系统
pub mod logging;

// 错误类型
pub mod error;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{RiskCategory, TrendLabel};

// 领域实体
pub use domain::{
    ForecastRecord, IngredientUsageRecord, ItemCategoryRecord, ItemSaleRecord, MenuGroupRecord,
    NormalizedShipment, PlannedSupply, RecipeEntry, RecipeMatrix, ShipmentRecord, UsagePoint,
};

// 引擎
pub use engine::{
    CategoryAggregator, ForecastEngine, InsightInputs, InsightOrchestrator, InsightReport,
    RecipeExplosionEngine, RiskClassifier, RunSummary, ShipmentNormalizer, TrendCore,
    UsageSeriesBuilder, UsageTimeSeries,
};

// 配置
pub use config::NormalizerProfile;

// 错误
pub use error::{EngineError, EngineResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "餐饮库存决策支持系统";
