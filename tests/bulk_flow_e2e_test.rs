// ==========================================
// 批量房价流程 E2E 测试
// ==========================================
// 职责: 走通 API 层完整流程
// 场景: 挂载 → 选择 → 预览 → 人工确认(导出) → 应用
// ==========================================

mod helpers;

use helpers::mock_client::MockPmsClient;
use helpers::test_data_builder::{date, rate_plan, room_rate, room_type, selection};
use hotel_rate_ops::{ApiError, BulkOperation, BulkRateApi};
use std::sync::Arc;

fn seeded_client() -> Arc<MockPmsClient> {
    let client = Arc::new(MockPmsClient::with_reference(
        vec![room_type(10, "DLX"), room_type(11, "STD")],
        vec![rate_plan(1, "BAR"), rate_plan(2, "COR")],
    ));
    client.seed_rate(room_rate("BAR", "DLX", date(2024, 6, 1), 100.0));
    client
}

#[tokio::test]
async fn test_increase_percent_worked_example() {
    // 选择 2024-06-01..03（全星期）、1 房型、1 方案，
    // 仅 06-01 有现价 100，操作 INCREASE_PERCENT(10)
    let client = seeded_client();
    let mut api = BulkRateApi::new(client.clone(), 1000);
    api.initialize().await.unwrap();

    api.set_selection(selection(
        date(2024, 6, 1),
        date(2024, 6, 3),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::IncreasePercent { percent: 10.0 },
    ));
    assert_eq!(api.total_operations(), 3);

    let report = api.generate_preview().await.unwrap();
    assert_eq!(report.changes.len(), 3);

    // 06-01: 100 → 110（浮点乘法按容差比较）
    assert!((report.changes[0].new_rate.unwrap() - 110.0).abs() < 1e-9);
    assert!(report.changes[0].has_change);
    // 06-02/06-03: 无现价 → 0，0 与缺失基线不同，算变更
    assert_eq!(report.changes[1].current_rate, None);
    assert_eq!(report.changes[1].new_rate, Some(0.0));
    assert!(report.changes[1].has_change);
    assert_eq!(report.changes[2].new_rate, Some(0.0));
    assert!(report.changes[2].has_change);

    let result = api.apply_changes().await.unwrap();
    assert_eq!(result.succeeded, 3);
    let applied = client
        .rate_for("BAR", "DLX", date(2024, 6, 1))
        .unwrap()
        .rate_amount;
    assert!((applied - 110.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_set_rate_apply_is_idempotent() {
    // 第二轮预览+应用应看到零变更（存量已等于目标值）
    let client = seeded_client();
    let mut api = BulkRateApi::new(client.clone(), 1000);
    api.initialize().await.unwrap();

    let sel = selection(
        date(2024, 6, 1),
        date(2024, 6, 3),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX"), room_type(11, "STD")],
        BulkOperation::SetRate { amount: 150.0 },
    );

    // 第一轮
    api.set_selection(sel.clone());
    let first = api.generate_preview().await.unwrap();
    assert_eq!(first.summary.total_cells, 6);
    assert_eq!(first.summary.changed_count, 6);
    let first_apply = api.apply_changes().await.unwrap();
    assert_eq!(first_apply.succeeded, 6);

    // 第二轮: 同样的操作不再产生变更
    api.set_selection(sel);
    let second = api.generate_preview().await.unwrap();
    assert_eq!(second.summary.changed_count, 0);
    let second_apply = api.apply_changes().await.unwrap();
    assert_eq!(second_apply.total, 0);
    assert_eq!(second_apply.succeeded, 0);
}

#[tokio::test]
async fn test_reference_failure_is_non_blocking() {
    let client = Arc::new(MockPmsClient::new());
    client.set_fail_reference(true);
    client.seed_rate(room_rate("BAR", "DLX", date(2024, 6, 1), 100.0));

    let mut api = BulkRateApi::new(client.clone(), 1000);

    // 基础数据加载失败: 报错但界面仍可用，列表为空
    assert!(api.initialize().await.is_err());
    assert!(api.reference().room_types.is_empty());
    assert!(api.reference().rate_plans.is_empty());

    // 选择与预览仍然可用（现价查询不受基础数据故障影响）
    api.set_selection(selection(
        date(2024, 6, 1),
        date(2024, 6, 1),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::SetRate { amount: 80.0 },
    ));
    let report = api.generate_preview().await.unwrap();
    assert_eq!(report.summary.changed_count, 1);
}

#[tokio::test]
async fn test_preview_gating() {
    let client = seeded_client();
    let mut api = BulkRateApi::new(client, 1000);
    api.initialize().await.unwrap();

    // 未设置选择
    match api.generate_preview().await {
        Err(ApiError::InvalidState(_)) => {}
        other => panic!("Expected InvalidState, got {:?}", other.map(|r| r.changes.len())),
    }

    // 空维度: 全组合操作数为 0
    api.set_selection(selection(
        date(2024, 6, 1),
        date(2024, 6, 3),
        vec![rate_plan(1, "BAR")],
        vec![],
        BulkOperation::SetRate { amount: 100.0 },
    ));
    assert_eq!(api.total_operations(), 0);
    match api.generate_preview().await {
        Err(ApiError::InvalidInput(_)) => {}
        other => panic!("Expected InvalidInput, got {:?}", other.map(|r| r.changes.len())),
    }

    // 起始晚于结束: 日期序列为空
    api.set_selection(selection(
        date(2024, 6, 10),
        date(2024, 6, 1),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::SetRate { amount: 100.0 },
    ));
    assert_eq!(api.total_operations(), 0);
}

#[tokio::test]
async fn test_cancel_preview_discards_state() {
    let client = seeded_client();
    let mut api = BulkRateApi::new(client, 1000);
    api.initialize().await.unwrap();

    api.set_selection(selection(
        date(2024, 6, 1),
        date(2024, 6, 2),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::SetRate { amount: 120.0 },
    ));
    api.generate_preview().await.unwrap();
    assert!(api.preview().is_some());

    api.cancel_preview();
    assert!(api.preview().is_none());

    // 预览已丢弃，应用被拒绝
    assert!(matches!(
        api.apply_changes().await,
        Err(ApiError::InvalidState(_))
    ));
}

#[tokio::test]
async fn test_selection_change_invalidates_preview() {
    let client = seeded_client();
    let mut api = BulkRateApi::new(client, 1000);
    api.initialize().await.unwrap();

    let sel = selection(
        date(2024, 6, 1),
        date(2024, 6, 2),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::SetRate { amount: 120.0 },
    );
    api.set_selection(sel.clone());
    api.generate_preview().await.unwrap();

    // 任一输入变化都会使现有预览失效
    api.set_selection(sel);
    assert!(api.preview().is_none());
}

#[tokio::test]
async fn test_export_preview_csv() {
    let client = seeded_client();
    let mut api = BulkRateApi::new(client, 1000);
    api.initialize().await.unwrap();

    api.set_selection(selection(
        date(2024, 6, 1),
        date(2024, 6, 2),
        vec![rate_plan(1, "BAR")],
        vec![room_type(10, "DLX")],
        BulkOperation::IncreaseFixed { amount: 15.0 },
    ));
    api.generate_preview().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preview.csv");
    let rows = api.export_preview_csv(&path).unwrap();
    assert_eq!(rows, 2);

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    // 表头 + 每格一行
    assert!(lines.next().unwrap().starts_with("rateDate,ratePlanCode"));
    assert_eq!(lines.count(), 2);
    assert!(content.contains("2024-06-01,BAR,DLX,100,115,"));
}
