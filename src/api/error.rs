// ==========================================
// 酒店房价批量操作系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换客户端层错误为
//       用户可理解的业务错误
// 说明: 本流程不区分校验错误与传输错误的细类，
//       不做自动重试
// ==========================================

use crate::client::error::ClientError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("状态错误: {0}")]
    InvalidState(String),

    // ==========================================
    // 远端访问错误
    // ==========================================
    #[error("网络请求失败: {0}")]
    NetworkError(String),

    #[error("远端接口错误: {0}")]
    RemoteApiError(String),

    #[error("响应数据异常: {0}")]
    DecodeError(String),

    // ==========================================
    // 导出错误
    // ==========================================
    #[error("预览导出失败: {0}")]
    ExportError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ClientError 转换
// 目的: 将客户端层的技术错误转换为用户可理解的业务错误
// ==========================================
impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Transport(e) => ApiError::NetworkError(e.to_string()),
            ClientError::UnexpectedStatus {
                status,
                url,
                message,
            } => ApiError::RemoteApiError(format!(
                "接口返回 {} ({})：{}",
                status, url, message
            )),
            ClientError::Decode(e) => ApiError::DecodeError(e.to_string()),
            ClientError::InvalidBaseUrl(url) => {
                ApiError::InvalidInput(format!("无效的服务地址: {}", url))
            }
            ClientError::Internal(msg) => ApiError::InternalError(msg),
            ClientError::Other(e) => ApiError::Other(e),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
