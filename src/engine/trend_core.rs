// ==========================================
// 餐饮库存决策支持系统 - Trend Core 纯函数库
// ==========================================
// 职责: 最小二乘预测、首末斜率趋势标签、
//       风险比值分类与边界舍入的纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作
// 红线: 回归预测与趋势标签相互独立,不做统一
// ==========================================

use crate::domain::types::{RiskCategory, TrendLabel};
use crate::domain::usage::UsagePoint;

/// 趋势标签阈值: 简化斜率超过首点值的 ±5% 才离开 "stable"
const TREND_SLOPE_THRESHOLD: f64 = 0.05;

/// 缺货风险比值下界
const SHORTAGE_RATIO: f64 = 1.2;

/// 积压风险比值上界
const OVERSTOCK_RATIO: f64 = 0.67;

// ==========================================
// TrendCore - 纯函数工具类
// ==========================================
pub struct TrendCore;

impl TrendCore {
    /// 线性回归预测下一期用量
    ///
    /// # 规则
    /// - 空序列 → None (不产生预测行)
    /// - 单点序列 → max(该点值, 0)
    /// - 两点及以上 → y 对 x 的最小二乘拟合,
    ///   slope = cov(x,y)/var(x) (var 为 0 时 slope 取 0),
    ///   intercept = mean_y - slope*mean_x,
    ///   预测点 x = max(x) + 1, 结果下限为 0 (预测永不为负)
    pub fn linear_forecast(points: &[UsagePoint]) -> Option<f64> {
        if points.is_empty() {
            return None;
        }
        if points.len() == 1 {
            return Some(points[0].used_qty.max(0.0));
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.month_index as f64).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.used_qty).sum::<f64>() / n;

        let mut num = 0.0;
        let mut den = 0.0;
        for p in points {
            let dx = p.month_index as f64 - mean_x;
            num += dx * (p.used_qty - mean_y);
            den += dx * dx;
        }

        let slope = if den != 0.0 { num / den } else { 0.0 };
        let intercept = mean_y - slope * mean_x;

        let max_x = points
            .iter()
            .map(|p| p.month_index)
            .max()
            .unwrap_or(0) as f64;
        let y_hat = slope * (max_x + 1.0) + intercept;

        Some(y_hat.max(0.0))
    }

    /// 首末两点简化斜率
    ///
    /// # 规则
    /// - simple_slope = (last_y - first_y) / max(last_x - first_x, 1)
    /// - 单点序列斜率为 0
    pub fn simple_slope(points: &[UsagePoint]) -> f64 {
        let (first, last) = match (points.first(), points.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return 0.0,
        };
        let dx = (last.month_index.saturating_sub(first.month_index)).max(1) as f64;
        (last.used_qty - first.used_qty) / dx
    }

    /// 趋势标签 (与回归预测独立的廉价可解释标签)
    ///
    /// # 规则
    /// - first_y > 0 且 slope > 0.05*first_y → increasing
    /// - first_y > 0 且 slope < -0.05*first_y → decreasing
    /// - 其余 (含首点为 0 的序列) → stable
    pub fn trend_label(points: &[UsagePoint]) -> TrendLabel {
        let first_y = match points.first() {
            Some(p) => p.used_qty,
            None => return TrendLabel::Stable,
        };
        if first_y <= 0.0 {
            return TrendLabel::Stable;
        }

        let slope = Self::simple_slope(points);
        if slope > TREND_SLOPE_THRESHOLD * first_y {
            TrendLabel::Increasing
        } else if slope < -TREND_SLOPE_THRESHOLD * first_y {
            TrendLabel::Decreasing
        } else {
            TrendLabel::Stable
        }
    }

    /// 预测/计划比值 → 风险类别
    ///
    /// # 规则 (边界取等号)
    /// - ratio ≥ 1.2 → shortage_risk
    /// - ratio ≤ 0.67 → overstock_risk
    /// - 其余 → balanced
    ///
    /// 注: 入参必须为未舍入比值,舍入只发生在输出层
    pub fn classify_ratio(ratio: f64) -> RiskCategory {
        if ratio >= SHORTAGE_RATIO {
            RiskCategory::ShortageRisk
        } else if ratio <= OVERSTOCK_RATIO {
            RiskCategory::OverstockRisk
        } else {
            RiskCategory::Balanced
        }
    }

    /// 输出层舍入: 2 位小数 (量值/比值)
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    /// 输出层舍入: 4 位小数 (用量)
    pub fn round4(value: f64) -> f64 {
        (value * 10_000.0).round() / 10_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[(usize, f64)]) -> Vec<UsagePoint> {
        values
            .iter()
            .map(|&(month_index, used_qty)| UsagePoint {
                month_index,
                used_qty,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_yields_no_forecast() {
        assert_eq!(TrendCore::linear_forecast(&[]), None);
    }

    #[test]
    fn test_single_point_forecast_equals_value_floored() {
        assert_eq!(TrendCore::linear_forecast(&pts(&[(0, 1500.0)])), Some(1500.0));
        assert_eq!(TrendCore::linear_forecast(&pts(&[(3, -2.0)])), Some(0.0));
    }

    #[test]
    fn test_two_point_regression_extrapolates() {
        // (0,1500),(1,3000) → slope 1500, x=2 处预测 4500
        let forecast = TrendCore::linear_forecast(&pts(&[(0, 1500.0), (1, 3000.0)])).unwrap();
        assert!((forecast - 4500.0).abs() < 1e-9);
    }

    #[test]
    fn test_increasing_series_forecast_at_least_last_value() {
        let points = pts(&[(0, 100.0), (1, 140.0), (2, 200.0)]);
        let forecast = TrendCore::linear_forecast(&points).unwrap();
        assert!(forecast >= 200.0);
    }

    #[test]
    fn test_negative_fitted_value_floored_at_zero() {
        // 急剧下降的序列: 拟合值为负 → 0
        let forecast = TrendCore::linear_forecast(&pts(&[(0, 100.0), (1, 10.0)])).unwrap();
        assert_eq!(forecast, 0.0);
    }

    #[test]
    fn test_zero_variance_uses_mean() {
        // 同一索引的两个点: var(x)=0 → slope 0 → 预测为均值
        let forecast = TrendCore::linear_forecast(&pts(&[(2, 100.0), (2, 300.0)])).unwrap();
        assert!((forecast - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_label_boundaries() {
        // slope = 50 > 0.05*100 → increasing
        assert_eq!(
            TrendCore::trend_label(&pts(&[(0, 100.0), (1, 150.0)])),
            TrendLabel::Increasing
        );
        // slope = -50 < -0.05*100 → decreasing
        assert_eq!(
            TrendCore::trend_label(&pts(&[(0, 100.0), (1, 50.0)])),
            TrendLabel::Decreasing
        );
        // slope = 5 正好等于阈值 → stable (严格大于才算上升)
        assert_eq!(
            TrendCore::trend_label(&pts(&[(0, 100.0), (1, 105.0)])),
            TrendLabel::Stable
        );
    }

    #[test]
    fn test_zero_first_value_is_stable() {
        // 首点为 0 时无论走势如何都是 stable
        assert_eq!(
            TrendCore::trend_label(&pts(&[(0, 0.0), (1, 500.0)])),
            TrendLabel::Stable
        );
        assert_eq!(
            TrendCore::trend_label(&pts(&[(0, 0.0), (1, -500.0)])),
            TrendLabel::Stable
        );
    }

    #[test]
    fn test_simple_slope_uses_first_and_last_only() {
        // 中间点不参与: (0,100)...(2,300) → slope 100
        let slope = TrendCore::simple_slope(&pts(&[(0, 100.0), (1, 9999.0), (2, 300.0)]));
        assert!((slope - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_boundaries_exact() {
        assert_eq!(TrendCore::classify_ratio(1.2), RiskCategory::ShortageRisk);
        assert_eq!(TrendCore::classify_ratio(0.67), RiskCategory::OverstockRisk);
        assert_eq!(TrendCore::classify_ratio(0.9), RiskCategory::Balanced);
        assert_eq!(TrendCore::classify_ratio(1.19), RiskCategory::Balanced);
        assert_eq!(TrendCore::classify_ratio(5.0), RiskCategory::ShortageRisk);
    }

    #[test]
    fn test_boundary_rounding() {
        assert_eq!(TrendCore::round2(1.125), 1.13);
        assert_eq!(TrendCore::round4(1500.00004), 1500.0);
        assert_eq!(TrendCore::round4(1.23456), 1.2346);
    }
}
