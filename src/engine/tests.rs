// ==========================================
// 引擎层 - 端到端场景测试
// ==========================================
// 覆盖: 爆算 → 时间序列 → 预测 → 风险分类全链路
// ==========================================

use crate::config::NormalizerProfile;
use crate::domain::recipe::RecipeMatrix;
use crate::domain::sales::ItemSaleRecord;
use crate::domain::shipment::ShipmentRecord;
use crate::domain::types::{RiskCategory, TrendLabel};
use crate::engine::orchestrator::{InsightInputs, InsightOrchestrator};
use crate::error::EngineError;

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建测试用的销量记录
fn create_test_sale(month: &str, item: &str, count: u32, revenue: f64) -> ItemSaleRecord {
    ItemSaleRecord {
        month: month.to_string(),
        item: item.to_string(),
        count,
        revenue,
    }
}

/// 创建测试用的配方矩阵 (Bowl A = 150g Rice)
fn create_bowl_a_recipe() -> RecipeMatrix {
    let mut matrix = RecipeMatrix::new();
    matrix.insert_component("Bowl A", "Rice(g)", 150.0);
    matrix
}

/// 创建测试用的到货行
fn create_test_shipment(
    ingredient: &str,
    qty: f64,
    unit: Option<&str>,
    count: f64,
    frequency: &str,
) -> ShipmentRecord {
    ShipmentRecord {
        ingredient: Some(ingredient.to_string()),
        quantity_per_shipment: Some(qty),
        unit: unit.map(str::to_string),
        number_of_shipments: Some(count),
        frequency: Some(frequency.to_string()),
    }
}

// ==========================================
// 端到端场景
// ==========================================

#[test]
fn test_scenario_1_single_month_usage() {
    // 场景1: 单月销量 → 用量行,月份不足无预测
    let inputs = InsightInputs {
        sales: vec![create_test_sale("2024-05", "Bowl A", 10, 120.0)],
        recipe: create_bowl_a_recipe(),
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();

    assert_eq!(report.usage.len(), 1);
    let usage = &report.usage[0];
    assert_eq!(usage.month, "2024-05");
    assert_eq!(usage.ingredient, "Rice(g)");
    assert_eq!(usage.used_qty, 1500.0);
    assert_eq!(usage.unit, "g");

    assert!(report.forecasts.is_empty());
    assert_eq!(report.summary.months, 1);
    assert_eq!(report.summary.usage_rows, 1);
}

#[test]
fn test_scenario_2_two_month_forecast_chain() {
    // 场景2: 两个月销量 → 单点预测 (基准 2024-05 预测 1500)
    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-05", "Bowl A", 10, 120.0),
            create_test_sale("2024-06", "Bowl A", 20, 240.0),
        ],
        recipe: create_bowl_a_recipe(),
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();

    assert_eq!(report.usage.len(), 2);
    assert_eq!(report.usage[1].month, "2024-06");
    assert_eq!(report.usage[1].used_qty, 3000.0);

    assert_eq!(report.forecasts.len(), 1);
    let f = &report.forecasts[0];
    assert_eq!(f.month, "2024-05");
    assert_eq!(f.forecast_target, "2024-06");
    assert_eq!(f.ingredient, "Rice(g)");
    assert_eq!(f.forecast_next, 1500.0);
    assert_eq!(f.risk, RiskCategory::NoPlan);
}

#[test]
fn test_scenario_3_regression_forecast_with_plan() {
    // 场景3: 三个月链路,基准 2024-06 由 [(0,1500),(1,3000)]
    // 回归外推 4500,对照 4000 g/月 计划 → ratio 1.125 → balanced
    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-05", "Bowl A", 10, 120.0),
            create_test_sale("2024-06", "Bowl A", 20, 240.0),
            create_test_sale("2024-07", "Bowl A", 30, 360.0),
        ],
        recipe: create_bowl_a_recipe(),
        shipments: vec![create_test_shipment("Rice(g)", 4000.0, None, 1.0, "monthly")],
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();

    assert_eq!(report.forecasts.len(), 2);
    let base_june = report
        .forecasts
        .iter()
        .find(|f| f.month == "2024-06")
        .unwrap();
    assert_eq!(base_june.forecast_target, "2024-07");
    assert_eq!(base_june.forecast_next, 4500.0);
    assert_eq!(base_june.trend, TrendLabel::Increasing);
    assert_eq!(base_june.planned_monthly, Some(4000.0));
    // 4500/4000 = 1.125 → 输出 2 位小数 1.13,分类为 balanced
    assert_eq!(base_june.forecast_to_plan_ratio, Some(1.13));
    assert_eq!(base_june.risk, RiskCategory::Balanced);
}

#[test]
fn test_scenario_4_shortage_risk_with_pound_plan() {
    // 场景4: 计划以磅计 → 克归一化后对照
    // 用量 1500 → 单点预测 1500;计划 2 lb × 1 × monthly = 907.184 g
    // ratio = 1500/907.184 ≈ 1.653 → shortage_risk
    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-05", "Bowl A", 10, 120.0),
            create_test_sale("2024-06", "Bowl A", 10, 120.0),
        ],
        recipe: create_bowl_a_recipe(),
        shipments: vec![create_test_shipment("Rice(g)", 2.0, Some("lb"), 1.0, "monthly")],
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();
    let f = &report.forecasts[0];
    assert_eq!(f.risk, RiskCategory::ShortageRisk);
    assert_eq!(f.planned_monthly, Some(907.18));
}

#[test]
fn test_scenario_5_alias_resolution_feeds_plan_lookup() {
    // 场景5: 到货名 "Bokchoy" 经别名表映射到用量名 "Boychoy(g)"
    let mut recipe = RecipeMatrix::new();
    recipe.insert_component("Greens Bowl", "Boychoy(g)", 100.0);

    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-05", "Greens Bowl", 10, 100.0),
            create_test_sale("2024-06", "Greens Bowl", 10, 100.0),
        ],
        recipe,
        shipments: vec![create_test_shipment("Bokchoy", 1000.0, None, 1.0, "monthly")],
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();
    let f = &report.forecasts[0];
    assert_eq!(f.ingredient, "Boychoy(g)");
    assert_eq!(f.planned_monthly, Some(1000.0));
    // 1000/1000 = 1.0 → balanced
    assert_eq!(f.risk, RiskCategory::Balanced);
}

#[test]
fn test_scenario_6_unmatched_item_emits_nothing() {
    // 场景6: 配方矩阵收录的菜品未售出,售出的菜品无配方
    let inputs = InsightInputs {
        sales: vec![create_test_sale("2024-05", "Secret Special", 50, 500.0)],
        recipe: create_bowl_a_recipe(),
        ..Default::default()
    };

    let report = InsightOrchestrator::default().run(&inputs).unwrap();
    assert!(report.usage.is_empty());
    assert!(report.forecasts.is_empty());
    assert_eq!(report.summary.ingredient_count, 0);
}

#[test]
fn test_scenario_7_empty_recipe_matrix_is_fatal() {
    // 场景7: 配方矩阵缺失 → 致命错误,终止运行
    let inputs = InsightInputs {
        sales: vec![create_test_sale("2024-05", "Bowl A", 10, 120.0)],
        recipe: RecipeMatrix::new(),
        ..Default::default()
    };

    let err = InsightOrchestrator::default().run(&inputs).unwrap_err();
    assert!(matches!(err, EngineError::RecipeUnavailable(_)));
}

#[test]
fn test_scenario_8_determinism_same_inputs_same_output() {
    // 场景8: 相同输入两次运行,记录集 (除运行ID/时间戳) 完全一致
    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-06", "Bowl A", 20, 240.0),
            create_test_sale("2024-05", "Bowl A", 10, 120.0),
        ],
        recipe: create_bowl_a_recipe(),
        shipments: vec![create_test_shipment("Rice(g)", 4000.0, None, 1.0, "monthly")],
        ..Default::default()
    };

    let orchestrator = InsightOrchestrator::default();
    let a = orchestrator.run(&inputs).unwrap();
    let b = orchestrator.run(&inputs).unwrap();

    assert_eq!(a.usage, b.usage);
    assert_eq!(a.forecasts, b.forecasts);
    assert_eq!(a.shipments, b.shipments);
    assert_eq!(a.planned_supply, b.planned_supply);
    assert_eq!(a.menu_groups, b.menu_groups);
}

#[test]
fn test_scenario_9_custom_profile_overrides_aliases() {
    // 场景9: 业务假设走配置 - 自定义别名表替换默认表
    let mut profile = NormalizerProfile::default();
    profile.aliases.clear();
    profile
        .aliases
        .insert("Bulk Rice".to_string(), vec!["Rice(g)".to_string()]);

    let inputs = InsightInputs {
        sales: vec![
            create_test_sale("2024-05", "Bowl A", 10, 120.0),
            create_test_sale("2024-06", "Bowl A", 10, 120.0),
        ],
        recipe: create_bowl_a_recipe(),
        shipments: vec![create_test_shipment("Bulk Rice", 3000.0, None, 1.0, "monthly")],
        ..Default::default()
    };

    let report = InsightOrchestrator::new(profile).run(&inputs).unwrap();
    let f = &report.forecasts[0];
    assert_eq!(f.planned_monthly, Some(3000.0));
    // 1500/3000 = 0.5 ≤ 0.67 → overstock_risk
    assert_eq!(f.risk, RiskCategory::OverstockRisk);
}
