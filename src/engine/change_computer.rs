// ==========================================
// 酒店房价批量操作系统 - 变更计算引擎
// ==========================================
// 红线: 无状态引擎,所有方法都是纯函数
// 职责: 对 (日期 × 价格方案 × 房型) 全组合计算建议值，
//       与现价快照比较得出 has_change
// 输出顺序契约: 日期升序 → 价格方案(选择顺序) → 房型(选择顺序)
// ==========================================

use crate::domain::operation::BulkOperation;
use crate::domain::preview::{PreviewChange, PreviewSummary};
use crate::domain::rate::RateKey;
use crate::domain::reference::{RatePlan, RoomType};
use crate::domain::selection::RateSelection;
use crate::engine::calendar;
use crate::engine::snapshot::RateSnapshot;
use chrono::NaiveDate;

// ==========================================
// ChangeComputer - 变更计算引擎
// ==========================================
pub struct ChangeComputer;

impl ChangeComputer {
    /// 创建新的变更计算引擎
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算全组合预览变更
    ///
    /// # 参数
    /// - `selection`: 选择状态（日期范围、星期过滤、维度、操作）
    /// - `snapshot`: 预览时刻的现价快照
    ///
    /// # 返回
    /// 每个组合一条 PreviewChange，按输出顺序契约排列
    pub fn compute(
        &self,
        selection: &RateSelection,
        snapshot: &RateSnapshot,
    ) -> Vec<PreviewChange> {
        let dates = calendar::dates_in_range(selection);
        let mut changes =
            Vec::with_capacity(dates.len() * selection.rate_plans.len() * selection.room_types.len());

        for date in &dates {
            for plan in &selection.rate_plans {
                for room_type in &selection.room_types {
                    changes.push(self.compute_single(
                        &selection.operation,
                        *date,
                        plan,
                        room_type,
                        snapshot,
                    ));
                }
            }
        }

        changes
    }

    /// 计算单个组合的建议值
    fn compute_single(
        &self,
        operation: &BulkOperation,
        date: NaiveDate,
        plan: &RatePlan,
        room_type: &RoomType,
        snapshot: &RateSnapshot,
    ) -> PreviewChange {
        let key = RateKey::new(plan.id, room_type.id, date);
        let existing = snapshot.current_for(&key);

        // 现值基线: 行缺失时三字段都是 None
        let current_rate = existing.map(|r| r.rate_amount);
        let current_availability = existing.and_then(|r| r.availability_count);
        let current_stop_sell = existing.map(|r| r.stop_sell);

        let (new_rate, new_availability, new_stop_sell) = match *operation {
            BulkOperation::SetRate { amount } => {
                (Some(amount), current_availability, current_stop_sell)
            }
            BulkOperation::IncreasePercent { percent } => {
                // 无现价时结果为 0
                let rate = current_rate.map(|r| r * (1.0 + percent / 100.0)).unwrap_or(0.0);
                (Some(rate), current_availability, current_stop_sell)
            }
            BulkOperation::DecreasePercent { percent } => {
                let rate = current_rate.map(|r| r * (1.0 - percent / 100.0)).unwrap_or(0.0);
                (Some(rate), current_availability, current_stop_sell)
            }
            BulkOperation::IncreaseFixed { amount } => (
                Some(current_rate.unwrap_or(0.0) + amount),
                current_availability,
                current_stop_sell,
            ),
            BulkOperation::DecreaseFixed { amount } => (
                Some(current_rate.unwrap_or(0.0) - amount),
                current_availability,
                current_stop_sell,
            ),
            BulkOperation::CopyFromDate { .. } => match snapshot.source_for(&key.pair()) {
                // 源行存在: 三字段整体取自源行
                Some(source) => (
                    Some(source.rate_amount),
                    source.availability_count,
                    Some(source.stop_sell),
                ),
                // 源行缺失: 回落到现值
                None => (current_rate, current_availability, current_stop_sell),
            },
            BulkOperation::SetAvailability { count } => {
                (current_rate, Some(count), current_stop_sell)
            }
            BulkOperation::SetStopSell { stop_sell } => {
                (current_rate, current_availability, Some(stop_sell))
            }
        };

        // 红线: 房价不得为负
        let new_rate = new_rate.map(|r| r.max(0.0));

        let mut change = PreviewChange {
            rate_plan_id: plan.id,
            rate_plan_code: plan.code.clone(),
            room_type_id: room_type.id,
            room_type_code: room_type.code.clone(),
            rate_date: date,
            current_rate,
            current_availability,
            current_stop_sell,
            new_rate,
            new_availability,
            new_stop_sell,
            has_change: false,
        };
        change.has_change = change.differs();
        change
    }

    /// 汇总预览变更
    ///
    /// # 参数
    /// - `changes`: 全组合预览行
    /// - `snapshot`: 现价快照（用于区分新建/更新）
    pub fn summarize(&self, changes: &[PreviewChange], snapshot: &RateSnapshot) -> PreviewSummary {
        let mut summary = PreviewSummary {
            total_cells: changes.len(),
            ..PreviewSummary::default()
        };

        for change in changes {
            if !change.has_change {
                continue;
            }
            summary.changed_count += 1;

            if snapshot.current_for(&change.key()).is_some() {
                summary.update_count += 1;
            } else {
                summary.create_count += 1;
            }

            if let (Some(current), Some(new)) = (change.current_rate, change.new_rate) {
                if new > current {
                    summary.rate_raised_count += 1;
                } else if new < current {
                    summary.rate_lowered_count += 1;
                }
            }
        }

        summary
    }
}

impl Default for ChangeComputer {
    fn default() -> Self {
        Self::new()
    }
}
