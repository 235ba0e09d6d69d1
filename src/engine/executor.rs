// ==========================================
// 酒店房价批量操作系统 - 应用执行引擎
// ==========================================
// 职责: 把有变更的预览行逐行写回远端
// 失败策略: 单行失败记日志后跳过，批次继续（与取数阶段相反）
// 说明: 按预览快照中的行 id 定位更新目标；应用前不重新
//       校验该行是否已被他人修改（已知竞态，不在此处理）
// ==========================================

use crate::client::error::ClientResult;
use crate::client::pms_client::PmsRateClient;
use crate::domain::preview::PreviewChange;
use crate::domain::rate::{RoomRateDraft, RoomRatePatch};
use crate::engine::progress::{ApplyProgress, ApplyProgressSink, OptionalProgressSink};
use crate::engine::snapshot::RateSnapshot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

// ==========================================
// ApplyReport - 应用结果
// ==========================================
// 对外仅呈现聚合计数；逐行失败详情只进开发日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyReport {
    pub batch_id: String, // 应用批次 ID
    pub total: usize,     // 待应用行数（有变更的行）
    pub succeeded: usize, // 成功行数
    pub failed: usize,    // 失败（被跳过）行数
}

impl ApplyReport {
    /// 是否全部成功
    pub fn is_complete_success(&self) -> bool {
        self.failed == 0 && self.succeeded == self.total
    }
}

// ==========================================
// ApplyExecutor - 应用执行引擎
// ==========================================
pub struct ApplyExecutor {
    progress: OptionalProgressSink,
}

impl ApplyExecutor {
    /// 构造函数（不发布进度）
    pub fn new() -> Self {
        Self {
            progress: OptionalProgressSink::none(),
        }
    }

    /// 构造函数（带进度发布者）
    pub fn with_progress_sink(sink: Arc<dyn ApplyProgressSink>) -> Self {
        Self {
            progress: OptionalProgressSink::with_sink(sink),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 逐行应用有变更的预览行
    ///
    /// # 参数
    /// - `client`: 远端数据访问
    /// - `changes`: 预览行（只处理 has_change = true 的行）
    /// - `snapshot`: 预览时刻的现价快照（定位更新目标）
    ///
    /// # 返回
    /// 聚合应用结果
    #[instrument(skip(self, client, changes, snapshot), fields(rows = changes.len()))]
    pub async fn apply(
        &self,
        client: &dyn PmsRateClient,
        changes: &[&PreviewChange],
        snapshot: &RateSnapshot,
    ) -> ApplyReport {
        let work: Vec<&PreviewChange> = changes.iter().filter(|c| c.has_change).copied().collect();

        let batch_id = Uuid::new_v4().to_string();
        let total = work.len();
        let mut succeeded = 0usize;
        let mut failed = 0usize;

        info!(batch_id = %batch_id, total, "开始批量应用");

        for (index, change) in work.iter().enumerate() {
            match self.apply_single(client, change, snapshot).await {
                Ok(()) => {
                    succeeded += 1;
                }
                Err(e) => {
                    // 单行失败: 记日志后跳过，批次继续
                    error!(
                        batch_id = %batch_id,
                        rate_plan_code = %change.rate_plan_code,
                        room_type_code = %change.room_type_code,
                        rate_date = %change.rate_date,
                        error = %e,
                        "应用房价变更失败，跳过该行"
                    );
                    failed += 1;
                }
            }

            let progress = ApplyProgress {
                batch_id: batch_id.clone(),
                total,
                completed: index + 1,
                succeeded,
                failed,
            };
            if let Err(e) = self.progress.publish(&progress) {
                debug!(error = %e, "进度发布失败，忽略");
            }
        }

        info!(batch_id = %batch_id, total, succeeded, failed, "批量应用完成");

        ApplyReport {
            batch_id,
            total,
            succeeded,
            failed,
        }
    }

    /// 应用单行: 快照中已有行则更新，否则创建
    async fn apply_single(
        &self,
        client: &dyn PmsRateClient,
        change: &PreviewChange,
        snapshot: &RateSnapshot,
    ) -> ClientResult<()> {
        if let Some(existing) = snapshot.current_for(&change.key()) {
            if let Some(rate_id) = existing.id {
                let patch = RoomRatePatch {
                    rate_amount: change.new_rate.unwrap_or(existing.rate_amount),
                    availability_count: change.new_availability,
                    stop_sell: change.new_stop_sell.unwrap_or(existing.stop_sell),
                };
                client.update_rate(rate_id, &patch).await?;
                return Ok(());
            }
        }

        // 快照无对应行（或行缺 id）: 按复合键新建
        let draft = RoomRateDraft {
            rate_plan_code: change.rate_plan_code.clone(),
            room_type_code: change.room_type_code.clone(),
            rate_date: change.rate_date,
            // 操作未给出房价时（如对缺行仅设房量）按 0 新建
            rate_amount: change.new_rate.unwrap_or(0.0),
            availability_count: change.new_availability,
            stop_sell: change.new_stop_sell.unwrap_or(false),
        };
        client.create_rate(&draft).await?;
        Ok(())
    }
}

impl Default for ApplyExecutor {
    fn default() -> Self {
        Self::new()
    }
}
