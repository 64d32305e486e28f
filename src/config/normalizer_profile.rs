// ==========================================
// 餐饮库存决策支持系统 - 归一化配置
// ==========================================
// 职责: 到货归一化所需的三张数据表
//   1. 别名表: 到货名称 → 一个或多个规范食材名
//   2. 频率规则: 关键词 → 月倍率 (有序,自上而下匹配)
//   3. 单位换算: 磅系单位 → 克系数
// 注: "均分到各目标"与"大宗食材喂给预制组件"均为
//     业务近似假设,故作为可加载配置而非硬编码
// ==========================================

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 磅 → 克 换算系数
pub const GRAMS_PER_POUND: f64 = 453.592;

// ==========================================
// CadenceRule - 频率关键词规则
// ==========================================
// 匹配方式: 频率文本 (小写) 包含 keyword 即命中
// 顺序敏感: "biweekly" 必须排在 "weekly" 之前
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CadenceRule {
    pub keyword: String,    // 匹配关键词 (小写)
    pub multiplier: f64,    // 月倍率 (每月到货轮次)
}

// ==========================================
// NormalizerProfile - 归一化配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizerProfile {
    /// 别名表: 原始到货名称 → 规范食材名列表 (量均分)
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,

    /// 频率规则 (有序)
    #[serde(default = "default_cadence_rules")]
    pub cadence_rules: Vec<CadenceRule>,

    /// 未命中任何规则时的保守倍率
    #[serde(default = "default_fallback_multiplier")]
    pub fallback_multiplier: f64,

    /// 克换算表: 单位 (小写) → 克系数; 表外单位不换算
    #[serde(default = "default_gram_units")]
    pub gram_units: BTreeMap<String, f64>,
}

impl Default for NormalizerProfile {
    fn default() -> Self {
        Self {
            aliases: default_aliases(),
            cadence_rules: default_cadence_rules(),
            fallback_multiplier: default_fallback_multiplier(),
            gram_units: default_gram_units(),
        }
    }
}

impl NormalizerProfile {
    /// 从 JSON 文件加载配置
    pub fn from_json_file(path: &Path) -> EngineResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| EngineError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| EngineError::ConfigLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 解析到货名称的规范目标列表
    ///
    /// # 规则
    /// - 别名表命中 → 配置的目标列表
    /// - 未命中 → 名称本身 (原样透传,不做模糊推断)
    pub fn resolve_targets(&self, raw_name: &str) -> Vec<String> {
        match self.aliases.get(raw_name) {
            Some(targets) if !targets.is_empty() => targets.clone(),
            _ => vec![raw_name.to_string()],
        }
    }

    /// 频率文本命中的规则倍率
    ///
    /// # 规则
    /// - 有序规则自上而下,小写包含匹配,首个命中生效
    /// - 未命中 → None (由调用方决定是否退回保守倍率)
    pub fn match_cadence_rule(&self, text: &str) -> Option<f64> {
        let lower = text.to_lowercase();
        self.cadence_rules
            .iter()
            .find(|rule| lower.contains(&rule.keyword))
            .map(|rule| rule.multiplier)
    }

    /// 频率文本 → 月倍率
    ///
    /// # 规则
    /// - 有序规则自上而下,小写包含匹配,首个命中生效
    /// - 其余情况 (含缺失/空白/无法识别) → fallback_multiplier,
    ///   保守按每月一轮处理
    pub fn cadence_multiplier(&self, frequency: Option<&str>) -> f64 {
        match frequency.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => self
                .match_cadence_rule(text)
                .unwrap_or(self.fallback_multiplier),
            None => self.fallback_multiplier,
        }
    }

    /// 单位 → 克系数
    ///
    /// # 规则
    /// - 换算表命中 (小写比较) → Some(系数)
    /// - 其余单位 (pieces/eggs/缺失等) → None, 不自动换算
    pub fn grams_factor(&self, unit: Option<&str>) -> Option<f64> {
        let u = unit?.trim().to_lowercase();
        self.gram_units.get(&u).copied()
    }
}

// ==========================================
// 默认表 (与线上别名假设一致)
// ==========================================

fn default_aliases() -> BTreeMap<String, Vec<String>> {
    let mut aliases = BTreeMap::new();
    // 名称直接不一致
    aliases.insert("Bokchoy".to_string(), vec!["Boychoy(g)".to_string()]);
    aliases.insert(
        "Peas + Carrot".to_string(),
        vec!["Peas(g)".to_string(), "Carrot(g)".to_string()],
    );
    // 假设: 大宗鸡肉/牛肉到货全部供给卤制组件
    aliases.insert(
        "Chicken".to_string(),
        vec!["Braised Chicken(g)".to_string()],
    );
    aliases.insert("Beef".to_string(), vec!["Braised Pork(g)".to_string()]);
    aliases
}

fn default_cadence_rules() -> Vec<CadenceRule> {
    vec![
        CadenceRule {
            keyword: "biweekly".to_string(),
            multiplier: 2.0, // 每月两轮
        },
        CadenceRule {
            keyword: "bi-weekly".to_string(),
            multiplier: 2.0,
        },
        CadenceRule {
            keyword: "weekly".to_string(),
            multiplier: 4.0, // 每月四轮
        },
        CadenceRule {
            keyword: "monthly".to_string(),
            multiplier: 1.0,
        },
    ]
}

fn default_fallback_multiplier() -> f64 {
    1.0
}

fn default_gram_units() -> BTreeMap<String, f64> {
    let mut units = BTreeMap::new();
    for unit in ["lb", "lbs", "pound", "pounds"] {
        units.insert(unit.to_string(), GRAMS_PER_POUND);
    }
    units
}
