// ==========================================
// 酒店房价批量操作系统 - 批量操作定义
// ==========================================
// 用途: 用户在界面上选择的统一变换，作用于
//       (日期 × 房型 × 价格方案) 的全组合
// 生命周期: 仅存在于选择状态中，不落库
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// BulkOperation - 批量操作
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkOperation {
    /// 直接设定房价
    SetRate { amount: f64 },
    /// 按百分比上调（基于现价；无现价时结果为 0）
    IncreasePercent { percent: f64 },
    /// 按百分比下调（基于现价；无现价时结果为 0）
    DecreasePercent { percent: f64 },
    /// 按固定金额上调（无现价时按 0 起算）
    IncreaseFixed { amount: f64 },
    /// 按固定金额下调（无现价时按 0 起算）
    DecreaseFixed { amount: f64 },
    /// 从指定日期复制价格/房量/停售状态
    CopyFromDate { source_date: NaiveDate },
    /// 仅设定可售房量，房价不变
    SetAvailability { count: i32 },
    /// 仅设定停售标志，房价不变
    SetStopSell { stop_sell: bool },
}

impl BulkOperation {
    /// 操作类型标识（与序列化 tag 一致）
    pub fn kind(&self) -> &'static str {
        match self {
            BulkOperation::SetRate { .. } => "SET_RATE",
            BulkOperation::IncreasePercent { .. } => "INCREASE_PERCENT",
            BulkOperation::DecreasePercent { .. } => "DECREASE_PERCENT",
            BulkOperation::IncreaseFixed { .. } => "INCREASE_FIXED",
            BulkOperation::DecreaseFixed { .. } => "DECREASE_FIXED",
            BulkOperation::CopyFromDate { .. } => "COPY_FROM_DATE",
            BulkOperation::SetAvailability { .. } => "SET_AVAILABILITY",
            BulkOperation::SetStopSell { .. } => "SET_STOP_SELL",
        }
    }

    /// 是否需要加载复制源快照（仅 COPY_FROM_DATE）
    pub fn copy_source_date(&self) -> Option<NaiveDate> {
        match self {
            BulkOperation::CopyFromDate { source_date } => Some(*source_date),
            _ => None,
        }
    }
}

impl fmt::Display for BulkOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulkOperation::SetRate { amount } => write!(f, "SET_RATE({})", amount),
            BulkOperation::IncreasePercent { percent } => {
                write!(f, "INCREASE_PERCENT({}%)", percent)
            }
            BulkOperation::DecreasePercent { percent } => {
                write!(f, "DECREASE_PERCENT({}%)", percent)
            }
            BulkOperation::IncreaseFixed { amount } => write!(f, "INCREASE_FIXED({})", amount),
            BulkOperation::DecreaseFixed { amount } => write!(f, "DECREASE_FIXED({})", amount),
            BulkOperation::CopyFromDate { source_date } => {
                write!(f, "COPY_FROM_DATE({})", source_date)
            }
            BulkOperation::SetAvailability { count } => write!(f, "SET_AVAILABILITY({})", count),
            BulkOperation::SetStopSell { stop_sell } => write!(f, "SET_STOP_SELL({})", stop_sell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind() {
        let op = BulkOperation::IncreasePercent { percent: 10.0 };
        assert_eq!(op.kind(), "INCREASE_PERCENT");
        assert!(op.copy_source_date().is_none());
    }

    #[test]
    fn test_copy_source_date() {
        let source = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let op = BulkOperation::CopyFromDate {
            source_date: source,
        };
        assert_eq!(op.copy_source_date(), Some(source));
    }

    #[test]
    fn test_operation_display() {
        let op = BulkOperation::SetStopSell { stop_sell: true };
        assert_eq!(op.to_string(), "SET_STOP_SELL(true)");
    }
}
