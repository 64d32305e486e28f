// ==========================================
// 餐饮库存决策支持系统 - 配置层
// ==========================================
// 职责: 归一化策略配置 (别名表/频率规则/单位换算)
// 红线: 业务假设 (别名拆分等) 属于配置数据,
//       不写死在引擎逻辑中
// ==========================================

pub mod normalizer_profile;

pub use normalizer_profile::{CadenceRule, NormalizerProfile};
