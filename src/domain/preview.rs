// ==========================================
// 酒店房价批量操作系统 - 预览记录
// ==========================================
// 用途: 变更计算引擎的输出，一行对应一个
//       (日期, 价格方案, 房型) 组合
// 生命周期: 每次"预览"动作重新生成，取消或成功应用后丢弃
// 红线: has_change 的口径是三字段 Option 严格相等比较，
//       缺失值 (None) 与任何数值都视为不同
// ==========================================

use crate::domain::operation::BulkOperation;
use crate::domain::rate::RateKey;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// PreviewChange - 单格预览变更
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewChange {
    // ===== 定位维度 =====
    pub rate_plan_id: i64,
    pub rate_plan_code: String,
    pub room_type_id: i64,
    pub room_type_code: String,
    pub rate_date: NaiveDate,

    // ===== 现值快照（缺行时为 None） =====
    pub current_rate: Option<f64>,
    pub current_availability: Option<i32>,
    pub current_stop_sell: Option<bool>,

    // ===== 建议值 =====
    pub new_rate: Option<f64>,
    pub new_availability: Option<i32>,
    pub new_stop_sell: Option<bool>,

    // ===== 派生标志 =====
    pub has_change: bool,
}

impl PreviewChange {
    /// 本行的快照键
    pub fn key(&self) -> RateKey {
        RateKey::new(self.rate_plan_id, self.room_type_id, self.rate_date)
    }

    /// 三字段逐一比较：任一建议值与现值不同即为有变更
    pub fn differs(&self) -> bool {
        self.new_rate != self.current_rate
            || self.new_availability != self.current_availability
            || self.new_stop_sell != self.current_stop_sell
    }
}

// ==========================================
// PreviewSummary - 预览汇总
// ==========================================
// 用途: 向操作者说明影响范围（blast radius）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewSummary {
    pub total_cells: usize,        // 全组合格数
    pub changed_count: usize,      // 有变更的格数
    pub create_count: usize,       // 将新建的行数（快照中无对应行）
    pub update_count: usize,       // 将更新的行数（快照中已有行）
    pub rate_raised_count: usize,  // 房价上调的格数
    pub rate_lowered_count: usize, // 房价下调的格数
}

impl PreviewSummary {
    /// 无变更的格数
    pub fn unchanged_count(&self) -> usize {
        self.total_cells.saturating_sub(self.changed_count)
    }
}

// ==========================================
// PreviewReport - 预览报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewReport {
    pub operation: BulkOperation,      // 生成本预览的操作
    pub generated_at: DateTime<Utc>,   // 生成时间（应用阶段据此快照工作）
    pub changes: Vec<PreviewChange>,   // 全组合预览行（含无变更行）
    pub summary: PreviewSummary,       // 汇总
}

impl PreviewReport {
    /// 有变更的子集（Apply 执行器的工作清单）
    pub fn changed(&self) -> Vec<&PreviewChange> {
        self.changes.iter().filter(|c| c.has_change).collect()
    }

    /// 预览是否为空（选择范围没有任何组合）
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
