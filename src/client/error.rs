// ==========================================
// 酒店房价批量操作系统 - 客户端层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 本流程不区分校验错误与传输错误之外的类别，
//       也不在本层做自动重试
// ==========================================

use thiserror::Error;

/// 客户端层错误类型
#[derive(Error, Debug)]
pub enum ClientError {
    // ===== 传输错误 =====
    #[error("请求发送失败: {0}")]
    Transport(#[from] reqwest::Error),

    // ===== 接口错误 =====
    #[error("接口返回异常: status={status}, url={url}, message={message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    // ===== 配置错误 =====
    #[error("无效的服务地址: {0}")]
    InvalidBaseUrl(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;
