// ==========================================
// 餐饮库存决策支持系统 - 数值清洗器
// ==========================================
// 职责: 脏数值文本的强制转换 (非错误路径)
// 规则: 错误金额/计数 → 0;错误数量 → None;绝不 panic
//       ("未知数量"与"零数量"语义不同,计数则按零兜底)
// ==========================================

pub struct ValueCleaner;

impl ValueCleaner {
    /// 金额清洗: 去 "$" 与千分位逗号后解析
    ///
    /// # 规则
    /// - 空白/无法解析 → 0.0
    pub fn clean_money(value: &str) -> f64 {
        let s: String = value
            .trim()
            .chars()
            .filter(|c| *c != '$' && *c != ',')
            .collect();
        if s.is_empty() {
            return 0.0;
        }
        s.parse::<f64>().unwrap_or(0.0)
    }

    /// 计数清洗: 经 f64 解析后截断 (容忍 "10.0" 类文本)
    ///
    /// # 规则
    /// - 空白/无法解析/负数 → 0
    pub fn clean_count(value: &str) -> u32 {
        let s: String = value.trim().chars().filter(|c| *c != ',').collect();
        if s.is_empty() {
            return 0;
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => v as u32,
            _ => 0,
        }
    }

    /// 数量清洗: 量值缺失以 None 传播,不按零计
    ///
    /// # 规则
    /// - 空白/无法解析/非有限 → None
    pub fn clean_qty(value: &str) -> Option<f64> {
        let s: String = value.trim().chars().filter(|c| *c != ',').collect();
        if s.is_empty() {
            return None;
        }
        s.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// 文本标准化: 去空白,空串 → None
    pub fn normalize_text(value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}
