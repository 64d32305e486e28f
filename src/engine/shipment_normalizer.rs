// ==========================================
// 餐饮库存决策支持系统 - 到货归一化引擎
// ==========================================
// 职责: 原始到货行 → 规范名明细 + 月度到货计划
// 流程: 别名解析 → 频率折算 → 月量估计 → 克换算 → 汇总
// 红线: 缺失值以 None 传播,绝不按零计
// 红线: 一行映射 k 个规范名时量均分 1/k (声明性近似)
// ==========================================
// 输入: 原始 ShipmentRecord + NormalizerProfile
// 输出: NormalizedShipment 明细 + 规范名 → 月计划量
// ==========================================

use crate::config::NormalizerProfile;
use crate::domain::shipment::{NormalizedShipment, PlannedSupply, ShipmentRecord};
use std::collections::BTreeMap;
use tracing::warn;

// ==========================================
// ShipmentNormalization - 归一化结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ShipmentNormalization {
    /// 归一化明细行 (保持输入顺序,别名拆分行相邻)
    pub rows: Vec<NormalizedShipment>,
    /// 规范食材名 → 月计划量 (克优先,None 行不计入)
    pub plan: BTreeMap<String, f64>,
}

impl ShipmentNormalization {
    /// 计划汇总的有序实体视图
    pub fn planned_supply(&self) -> Vec<PlannedSupply> {
        self.plan
            .iter()
            .map(|(ingredient, &monthly_quantity)| PlannedSupply {
                ingredient: ingredient.clone(),
                monthly_quantity,
            })
            .collect()
    }
}

// ==========================================
// ShipmentNormalizer - 到货归一化引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ShipmentNormalizer {
    profile: NormalizerProfile,
}

impl ShipmentNormalizer {
    pub fn new(profile: NormalizerProfile) -> Self {
        Self { profile }
    }

    /// 归一化全部到货行
    ///
    /// # 规则 (按序执行)
    /// 1. 名称缺失/空白或到货量缺失 → warn 跳过该行
    /// 2. 别名解析: 命中别名表取目标列表,否则取原名;
    ///    k 个目标 → 份额 1/k
    /// 3. 频率折算: shipments_per_month = 次数 × 月倍率;
    ///    频率无法识别 → warn 后按保守倍率 1.0;
    ///    到货次数缺失 → None (这是月度估计缺失的唯一来源)
    /// 4. 月量估计: monthly_quantity = 单次量 × 月次数 × 份额;
    ///    缺失传播为 None
    /// 5. 克换算: 磅系单位 × 453.592,表外单位 → None
    /// 6. 汇总: 按规范名求和,克量优先,两者皆缺不计入
    pub fn normalize(&self, shipments: &[ShipmentRecord]) -> ShipmentNormalization {
        let mut result = ShipmentNormalization::default();

        for (row_no, record) in shipments.iter().enumerate() {
            let raw_name = match record.ingredient.as_deref().map(str::trim) {
                Some(name) if !name.is_empty() => name,
                _ => {
                    warn!(row = row_no, "到货行缺少食材名称,跳过");
                    continue;
                }
            };

            let quantity_per_shipment = match record.quantity_per_shipment {
                Some(qty) if qty.is_finite() => qty,
                _ => {
                    warn!(row = row_no, ingredient = raw_name, "到货行缺少单次到货量,跳过");
                    continue;
                }
            };

            let targets = self.profile.resolve_targets(raw_name);
            let share = 1.0 / targets.len() as f64;

            let frequency_text = record
                .frequency
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty());
            let multiplier = match frequency_text {
                Some(text) => match self.profile.match_cadence_rule(text) {
                    Some(mult) => mult,
                    None => {
                        warn!(row = row_no, frequency = text, "频率文本无法识别,按保守倍率处理");
                        self.profile.fallback_multiplier
                    }
                },
                None => self.profile.fallback_multiplier,
            };
            // 显式 None: 次数缺失时不产生月度估计,而非按零计
            let shipments_per_month = record.number_of_shipments.map(|count| count * multiplier);

            let monthly_quantity_full =
                shipments_per_month.map(|per_month| quantity_per_shipment * per_month);

            let grams_factor = self.profile.grams_factor(record.unit.as_deref());

            for target in &targets {
                let monthly_quantity = monthly_quantity_full.map(|q| q * share);
                let monthly_quantity_grams = match (monthly_quantity, grams_factor) {
                    (Some(qty), Some(factor)) => Some(qty * factor),
                    _ => None,
                };

                // 计划汇总: 克量优先,其次原单位月量
                if let Some(planned) = monthly_quantity_grams.or(monthly_quantity) {
                    *result.plan.entry(target.clone()).or_insert(0.0) += planned;
                }

                result.rows.push(NormalizedShipment {
                    ingredient: target.clone(),
                    quantity_per_shipment: quantity_per_shipment * share,
                    unit: record.unit.clone(),
                    number_of_shipments: record.number_of_shipments,
                    frequency: record.frequency.as_deref().map(|f| f.trim().to_string()),
                    shipments_per_month,
                    monthly_quantity,
                    monthly_quantity_grams,
                });
            }
        }

        result
    }
}
