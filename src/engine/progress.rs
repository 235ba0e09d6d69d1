// ==========================================
// 酒店房价批量操作系统 - 应用进度发布
// ==========================================
// 职责: 定义应用进度发布 trait，实现依赖倒置
// 说明: Engine 层定义 trait，界面/CLI 层实现适配器
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::sync::Arc;

// ==========================================
// 应用进度
// ==========================================

/// 批量应用进度
///
/// Apply 执行器每处理完一行（无论成败）发布一次
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyProgress {
    /// 应用批次 ID
    pub batch_id: String,
    /// 待应用总行数（仅统计有变更的行）
    pub total: usize,
    /// 已处理行数（含失败行）
    pub completed: usize,
    /// 成功行数
    pub succeeded: usize,
    /// 失败行数
    pub failed: usize,
}

impl ApplyProgress {
    /// 进度分数 completed / total（total 为 0 时视为完成）
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    /// 是否已处理完全部行
    pub fn is_finished(&self) -> bool {
        self.completed >= self.total
    }
}

// ==========================================
// 进度发布 Trait
// ==========================================

/// 应用进度发布者 Trait
///
/// Engine 层定义，调用方实现
/// 通过 trait 解除 Engine 对具体界面通道的依赖
pub trait ApplyProgressSink: Send + Sync {
    /// 发布一次进度
    ///
    /// # 参数
    /// - `progress`: 当前进度
    fn publish(&self, progress: &ApplyProgress) -> Result<(), Box<dyn Error + Send + Sync>>;
}

/// 空操作进度发布者
///
/// 用于不需要进度展示的场景（如单元测试）
#[derive(Debug, Clone, Default)]
pub struct NoOpProgressSink;

impl ApplyProgressSink for NoOpProgressSink {
    fn publish(&self, progress: &ApplyProgress) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::debug!(
            batch_id = %progress.batch_id,
            completed = progress.completed,
            total = progress.total,
            "NoOpProgressSink: 跳过进度发布"
        );
        Ok(())
    }
}

/// 日志进度发布者
///
/// 把进度写入 tracing 日志（CLI 运行时使用）
#[derive(Debug, Clone, Default)]
pub struct LogProgressSink;

impl ApplyProgressSink for LogProgressSink {
    fn publish(&self, progress: &ApplyProgress) -> Result<(), Box<dyn Error + Send + Sync>> {
        tracing::info!(
            batch_id = %progress.batch_id,
            completed = progress.completed,
            total = progress.total,
            succeeded = progress.succeeded,
            failed = progress.failed,
            fraction = format!("{:.0}%", progress.fraction() * 100.0),
            "批量应用进度"
        );
        Ok(())
    }
}

/// 可选的进度发布者包装
///
/// 简化 Option<Arc<dyn ApplyProgressSink>> 的使用
pub struct OptionalProgressSink {
    inner: Option<Arc<dyn ApplyProgressSink>>,
}

impl OptionalProgressSink {
    /// 创建带发布者的实例
    pub fn with_sink(sink: Arc<dyn ApplyProgressSink>) -> Self {
        Self { inner: Some(sink) }
    }

    /// 创建空实例（不发布进度）
    pub fn none() -> Self {
        Self { inner: None }
    }

    /// 发布进度（如有发布者）
    pub fn publish(&self, progress: &ApplyProgress) -> Result<(), Box<dyn Error + Send + Sync>> {
        match &self.inner {
            Some(sink) => sink.publish(progress),
            None => Ok(()),
        }
    }

    /// 检查是否配置了发布者
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for OptionalProgressSink {
    fn default() -> Self {
        Self::none()
    }
}
