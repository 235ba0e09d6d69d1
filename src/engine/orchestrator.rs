// ==========================================
// 酒店房价批量操作系统 - 引擎编排器
// ==========================================
// 用途: 协调快照加载、变更计算、应用执行的执行顺序
// 数据流: 选择状态 → 现价快照 → 变更计算(纯函数) →
//         (人工确认) → 应用执行 → 远端接口
// ==========================================

use crate::client::error::ClientResult;
use crate::client::pms_client::PmsRateClient;
use crate::domain::preview::PreviewReport;
use crate::domain::selection::RateSelection;
use crate::engine::calendar;
use crate::engine::change_computer::ChangeComputer;
use crate::engine::executor::{ApplyExecutor, ApplyReport};
use crate::engine::progress::ApplyProgressSink;
use crate::engine::snapshot::{RateSnapshot, RateSnapshotLoader};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// BulkRateOrchestrator - 引擎编排器
// ==========================================
pub struct BulkRateOrchestrator {
    loader: RateSnapshotLoader,
    computer: ChangeComputer,
    executor: ApplyExecutor,
}

impl BulkRateOrchestrator {
    /// 创建新的编排器实例
    pub fn new() -> Self {
        Self {
            loader: RateSnapshotLoader::new(),
            computer: ChangeComputer::new(),
            executor: ApplyExecutor::new(),
        }
    }

    /// 创建带进度发布者的编排器实例
    ///
    /// # 参数
    /// - sink: 应用进度发布者
    pub fn with_progress_sink(sink: Arc<dyn ApplyProgressSink>) -> Self {
        Self {
            loader: RateSnapshotLoader::new(),
            computer: ChangeComputer::new(),
            executor: ApplyExecutor::with_progress_sink(sink),
        }
    }

    /// 生成批量预览
    ///
    /// # 参数
    /// - client: 远端数据访问
    /// - selection: 当前选择状态
    ///
    /// # 返回
    /// (预览报告, 现价快照)；快照供随后的应用阶段定位更新目标
    pub async fn preview(
        &self,
        client: &dyn PmsRateClient,
        selection: &RateSelection,
    ) -> ClientResult<(PreviewReport, RateSnapshot)> {
        info!(
            operation = %selection.operation,
            total_operations = calendar::total_operations(selection),
            "开始生成批量预览"
        );

        // ==========================================
        // 步骤1: 现价快照加载（失败即中止，丢弃部分结果）
        // ==========================================
        debug!("步骤1: 加载现价快照");
        let snapshot = self.loader.load(client, selection).await?;

        // ==========================================
        // 步骤2: 变更计算（纯函数）
        // ==========================================
        debug!("步骤2: 计算全组合变更");
        let changes = self.computer.compute(selection, &snapshot);

        // ==========================================
        // 步骤3: 汇总影响范围
        // ==========================================
        debug!("步骤3: 汇总影响范围");
        let summary = self.computer.summarize(&changes, &snapshot);

        info!(
            total_cells = summary.total_cells,
            changed = summary.changed_count,
            creates = summary.create_count,
            updates = summary.update_count,
            "批量预览生成完成"
        );

        let report = PreviewReport {
            operation: selection.operation,
            generated_at: Utc::now(),
            changes,
            summary,
        };
        Ok((report, snapshot))
    }

    /// 应用预览中有变更的行
    ///
    /// # 参数
    /// - client: 远端数据访问
    /// - report: 预览报告
    /// - snapshot: 与该预览配套的现价快照
    ///
    /// # 返回
    /// 聚合应用结果（逐行失败仅进开发日志）
    pub async fn apply(
        &self,
        client: &dyn PmsRateClient,
        report: &PreviewReport,
        snapshot: &RateSnapshot,
    ) -> ApplyReport {
        let changed = report.changed();
        info!(changed = changed.len(), "开始应用预览变更");
        self.executor.apply(client, &changed, snapshot).await
    }
}

impl Default for BulkRateOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}
