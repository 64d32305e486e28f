// ==========================================
// 餐饮库存决策支持系统 - 引擎层
// ==========================================
// 职责: 实现核心业务规则引擎
// 红线: 引擎均为只读输入上的纯批处理,
//       输出顺序由显式排序产生,不依赖插入顺序
// ==========================================

pub mod category;
pub mod explosion;
pub mod forecast;
pub mod orchestrator;
pub mod risk;
pub mod shipment_normalizer;
pub mod trend_core;
pub mod usage_series;

#[cfg(test)]
mod tests;

// 重导出核心引擎
pub use category::CategoryAggregator;
pub use explosion::{RecipeExplosionEngine, UsageAccumulator};
pub use forecast::{ForecastCandidate, ForecastEngine};
pub use orchestrator::{InsightInputs, InsightOrchestrator, InsightReport, RunSummary};
pub use risk::RiskClassifier;
pub use shipment_normalizer::{ShipmentNormalization, ShipmentNormalizer};
pub use trend_core::TrendCore;
pub use usage_series::{UsageSeriesBuilder, UsageTimeSeries};
