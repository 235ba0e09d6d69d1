// ==========================================
// 酒店房价批量操作系统 - 现价快照加载
// ==========================================
// 职责: 预览前按 (价格方案 × 房型) 逐对拉取已有房价，
//       汇入按键索引的快照缓存
// 失败策略: 任一请求失败即中止整个预览，丢弃部分结果
// 说明: 网络成本为 O(|方案| × |房型|) 次顺序往返；
//       取数策略收敛在本引擎内，便于将来替换为批量查询
// ==========================================

use crate::client::error::ClientResult;
use crate::client::pms_client::PmsRateClient;
use crate::domain::rate::{PairKey, RateKey, RoomRate};
use crate::domain::selection::RateSelection;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

// ==========================================
// RateSnapshot - 现价快照
// ==========================================
// 生命周期: 一次预览/应用周期内有效；应用阶段按
// 本快照中的行 id 定位更新目标（不在应用时重新校验）
#[derive(Debug, Clone, Default)]
pub struct RateSnapshot {
    /// 区间内已有房价行，键为 (方案id, 房型id, 日期)
    pub by_key: HashMap<RateKey, RoomRate>,
    /// 复制源行（仅 COPY_FROM_DATE 时加载），键为 (方案id, 房型id)
    pub copy_source: HashMap<PairKey, RoomRate>,
    /// 快照时间
    pub taken_at: Option<DateTime<Utc>>,
}

impl RateSnapshot {
    /// 查当前行
    pub fn current_for(&self, key: &RateKey) -> Option<&RoomRate> {
        self.by_key.get(key)
    }

    /// 查复制源行
    pub fn source_for(&self, key: &PairKey) -> Option<&RoomRate> {
        self.copy_source.get(key)
    }

    /// 区间内已有行数
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// 快照是否为空
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

// ==========================================
// RateSnapshotLoader - 快照加载引擎
// ==========================================
pub struct RateSnapshotLoader;

impl RateSnapshotLoader {
    /// 构造函数
    pub fn new() -> Self {
        Self
    }

    /// 加载选择范围的现价快照
    ///
    /// # 参数
    /// - `client`: 远端数据访问
    /// - `selection`: 当前选择状态
    ///
    /// # 返回
    /// - Ok(RateSnapshot): 全部请求成功
    /// - Err: 任一请求失败（部分结果被丢弃）
    #[instrument(skip(self, client, selection), fields(
        start_date = %selection.start_date,
        end_date = %selection.end_date,
        rate_plans = selection.rate_plans.len(),
        room_types = selection.room_types.len()
    ))]
    pub async fn load(
        &self,
        client: &dyn PmsRateClient,
        selection: &RateSelection,
    ) -> ClientResult<RateSnapshot> {
        let mut snapshot = RateSnapshot {
            taken_at: Some(Utc::now()),
            ..RateSnapshot::default()
        };

        // 1. 区间现价: 每个 (方案, 房型) 对一次查询，顺序执行
        for plan in &selection.rate_plans {
            for room_type in &selection.room_types {
                let rows = client
                    .list_rates(
                        &plan.code,
                        &room_type.code,
                        selection.start_date,
                        selection.end_date,
                    )
                    .await?;
                debug!(
                    rate_plan_code = %plan.code,
                    room_type_code = %room_type.code,
                    rows = rows.len(),
                    "区间现价拉取完成"
                );
                for row in rows {
                    let key = RateKey::new(plan.id, room_type.id, row.rate_date);
                    snapshot.by_key.insert(key, row);
                }
            }
        }

        // 2. 复制源: 仅 COPY_FROM_DATE 需要，按单日再扫一遍
        if let Some(source_date) = selection.operation.copy_source_date() {
            for plan in &selection.rate_plans {
                for room_type in &selection.room_types {
                    let rows = client
                        .list_rates(&plan.code, &room_type.code, source_date, source_date)
                        .await?;
                    if let Some(row) = rows.into_iter().next() {
                        snapshot
                            .copy_source
                            .insert(PairKey::new(plan.id, room_type.id), row);
                    }
                }
            }
        }

        info!(
            existing_rows = snapshot.by_key.len(),
            copy_source_rows = snapshot.copy_source.len(),
            "现价快照加载完成"
        );

        Ok(snapshot)
    }
}

impl Default for RateSnapshotLoader {
    fn default() -> Self {
        Self::new()
    }
}

// TODO: 后端提供多编码批量查询端点后，把逐对取数合并为单次请求
