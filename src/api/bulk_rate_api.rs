// ==========================================
// 酒店房价批量操作系统 - 批量房价接口
// ==========================================
// 职责: 界面控制器。持有基础数据、选择状态与当前预览，
//       驱动 预览 → 人工确认 → 应用 的完整流程
// 说明: 选择状态是显式可序列化对象，以引用传入纯计算；
//       预览与快照成对保存，取消或成功应用后一并丢弃
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::reference_api::{ReferenceData, ReferenceDataApi};
use crate::client::pms_client::PmsRateClient;
use crate::domain::preview::PreviewReport;
use crate::domain::selection::RateSelection;
use crate::engine::calendar;
use crate::engine::executor::ApplyReport;
use crate::engine::orchestrator::BulkRateOrchestrator;
use crate::engine::progress::ApplyProgressSink;
use crate::engine::snapshot::RateSnapshot;
use crate::i18n::{t, t_with_args};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// BulkRateApi - 批量房价接口
// ==========================================
pub struct BulkRateApi {
    client: Arc<dyn PmsRateClient>,
    orchestrator: BulkRateOrchestrator,
    reference_page_size: u32,
    reference: ReferenceData,
    selection: Option<RateSelection>,
    preview: Option<(PreviewReport, RateSnapshot)>,
}

impl BulkRateApi {
    /// 构造函数
    ///
    /// # 参数
    /// - client: 远端数据访问
    /// - reference_page_size: 基础数据单页大小
    pub fn new(client: Arc<dyn PmsRateClient>, reference_page_size: u32) -> Self {
        Self {
            client,
            orchestrator: BulkRateOrchestrator::new(),
            reference_page_size,
            reference: ReferenceData::default(),
            selection: None,
            preview: None,
        }
    }

    /// 构造函数（带应用进度发布者）
    pub fn with_progress_sink(
        client: Arc<dyn PmsRateClient>,
        reference_page_size: u32,
        sink: Arc<dyn ApplyProgressSink>,
    ) -> Self {
        Self {
            orchestrator: BulkRateOrchestrator::with_progress_sink(sink),
            ..Self::new(client, reference_page_size)
        }
    }

    // ==========================================
    // 基础数据
    // ==========================================

    /// 挂载时加载基础数据（房型 + 价格方案，并发）
    ///
    /// 失败时列表保持为空，界面仍可用；调用方以非阻塞
    /// 提示呈现错误，不自动重试
    pub async fn initialize(&mut self) -> ApiResult<()> {
        let loader = ReferenceDataApi::new(self.client.clone(), self.reference_page_size);
        match loader.load().await {
            Ok(reference) => {
                self.reference = reference;
                Ok(())
            }
            Err(e) => {
                warn!(
                    "{}",
                    t_with_args("reference.load_failed", &[("reason", &e.to_string())])
                );
                self.reference = ReferenceData::default();
                Err(e)
            }
        }
    }

    /// 当前基础数据
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    // ==========================================
    // 选择状态
    // ==========================================

    /// 设置选择状态（任一输入变化都会使现有预览失效）
    pub fn set_selection(&mut self, selection: RateSelection) {
        self.selection = Some(selection);
        self.preview = None;
    }

    /// 当前选择状态
    pub fn selection(&self) -> Option<&RateSelection> {
        self.selection.as_ref()
    }

    /// 全组合操作数（影响范围提示；无选择时为 0）
    pub fn total_operations(&self) -> u64 {
        self.selection
            .as_ref()
            .map(calendar::total_operations)
            .unwrap_or(0)
    }

    // ==========================================
    // 预览
    // ==========================================

    /// 生成批量预览
    ///
    /// # 前置条件
    /// - 已设置选择状态且全组合操作数大于 0
    ///
    /// # 返回
    /// 预览报告（同时在内部与现价快照成对缓存）
    pub async fn generate_preview(&mut self) -> ApiResult<&PreviewReport> {
        let selection = self
            .selection
            .clone()
            .ok_or_else(|| ApiError::InvalidState(t("bulk.empty_selection")))?;

        if calendar::total_operations(&selection) == 0 {
            return Err(ApiError::InvalidInput(t("bulk.empty_selection")));
        }

        let (report, snapshot) = self
            .orchestrator
            .preview(self.client.as_ref(), &selection)
            .await?;

        info!(
            "{}",
            t_with_args(
                "bulk.preview_ready",
                &[
                    ("total", &report.summary.total_cells.to_string()),
                    ("changed", &report.summary.changed_count.to_string()),
                ]
            )
        );

        let stored = self.preview.insert((report, snapshot));
        Ok(&stored.0)
    }

    /// 当前预览报告
    pub fn preview(&self) -> Option<&PreviewReport> {
        self.preview.as_ref().map(|(report, _)| report)
    }

    /// 取消预览（丢弃预览与配套快照）
    pub fn cancel_preview(&mut self) {
        self.preview = None;
    }

    // ==========================================
    // 应用
    // ==========================================

    /// 应用当前预览中有变更的行
    ///
    /// 逐行失败不中止批次；完成后预览被清空，
    /// 对外仅呈现聚合成功计数
    pub async fn apply_changes(&mut self) -> ApiResult<ApplyReport> {
        let (report, snapshot) = self
            .preview
            .take()
            .ok_or_else(|| ApiError::InvalidState(t("bulk.no_preview")))?;

        let result = self
            .orchestrator
            .apply(self.client.as_ref(), &report, &snapshot)
            .await;

        info!(
            "{}",
            t_with_args(
                "bulk.apply_done",
                &[
                    ("succeeded", &result.succeeded.to_string()),
                    ("total", &result.total.to_string()),
                ]
            )
        );

        Ok(result)
    }

    // ==========================================
    // 导出
    // ==========================================

    /// 把当前预览导出为 CSV（人工确认用）
    ///
    /// # 参数
    /// - path: 导出文件路径
    ///
    /// # 返回
    /// 导出的行数（含无变更行）
    pub fn export_preview_csv(&self, path: &Path) -> ApiResult<usize> {
        let (report, _) = self
            .preview
            .as_ref()
            .ok_or_else(|| ApiError::InvalidState(t("bulk.no_preview")))?;

        let mut writer =
            csv::Writer::from_path(path).map_err(|e| ApiError::ExportError(e.to_string()))?;

        writer
            .write_record([
                "rateDate",
                "ratePlanCode",
                "roomTypeCode",
                "currentRate",
                "newRate",
                "currentAvailability",
                "newAvailability",
                "currentStopSell",
                "newStopSell",
                "hasChange",
            ])
            .map_err(|e| ApiError::ExportError(e.to_string()))?;

        for change in &report.changes {
            writer
                .write_record([
                    change.rate_date.to_string(),
                    change.rate_plan_code.clone(),
                    change.room_type_code.clone(),
                    opt_to_string(&change.current_rate),
                    opt_to_string(&change.new_rate),
                    opt_to_string(&change.current_availability),
                    opt_to_string(&change.new_availability),
                    opt_to_string(&change.current_stop_sell),
                    opt_to_string(&change.new_stop_sell),
                    change.has_change.to_string(),
                ])
                .map_err(|e| ApiError::ExportError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| ApiError::ExportError(e.to_string()))?;

        info!(
            "{}",
            t_with_args("export.done", &[("path", &path.display().to_string())])
        );

        Ok(report.changes.len())
    }
}

/// 可选值转 CSV 字段（缺失输出空串）
fn opt_to_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}
