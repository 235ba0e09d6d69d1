// ==========================================
// 酒店房价批量操作系统 - 应用配置
// ==========================================
// 职责: 配置加载、默认值、环境变量覆写
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::warn;

// ==========================================
// 环境变量键常量
// ==========================================
pub mod env_keys {
    /// PMS 后端基础地址
    pub const BASE_URL: &str = "PMS_BASE_URL";
    /// 鉴权令牌（可选）
    pub const API_TOKEN: &str = "PMS_API_TOKEN";
    /// 基础数据单页大小
    pub const REFERENCE_PAGE_SIZE: &str = "PMS_REFERENCE_PAGE_SIZE";
    /// 单请求超时秒数（可选；缺省不施加超时）
    pub const REQUEST_TIMEOUT_SECS: &str = "PMS_REQUEST_TIMEOUT_SECS";
    /// 界面语言（zh-CN / en）
    pub const LOCALE: &str = "PMS_LOCALE";
}

// ==========================================
// AppSettings - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub base_url: String,                  // PMS 后端基础地址
    pub api_token: Option<String>,         // 鉴权令牌（可选）
    pub reference_page_size: u32,          // 基础数据单页大小（足够大即"取全"）
    pub request_timeout_secs: Option<u64>, // 单请求超时（可选）
    pub locale: String,                    // 界面语言
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_token: None,
            reference_page_size: 1000,
            request_timeout_secs: None,
            locale: "zh-CN".to_string(),
        }
    }
}

impl AppSettings {
    /// 加载配置: 配置文件（若存在） + 环境变量覆写
    pub fn load() -> Self {
        let base = Self::default_config_path()
            .and_then(|path| Self::from_file(&path))
            .unwrap_or_default();
        base.overlay_env()
    }

    /// 默认配置文件路径（平台配置目录下）
    ///
    /// # 返回
    /// - Some(path): 如 ~/.config/hotel-rate-ops/config.json
    /// - None: 无法确定平台配置目录
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hotel-rate-ops").join("config.json"))
    }

    /// 从 JSON 配置文件读取
    ///
    /// 文件不存在返回 None；内容非法时告警并返回 None
    pub fn from_file(path: &PathBuf) -> Option<Self> {
        let raw = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "配置文件格式错误，忽略该文件");
                None
            }
        }
    }

    /// 以环境变量覆写当前配置
    pub fn overlay_env(mut self) -> Self {
        if let Ok(value) = env::var(env_keys::BASE_URL) {
            if !value.trim().is_empty() {
                self.base_url = value;
            }
        }
        if let Ok(value) = env::var(env_keys::API_TOKEN) {
            if !value.trim().is_empty() {
                self.api_token = Some(value);
            }
        }
        if let Ok(value) = env::var(env_keys::REFERENCE_PAGE_SIZE) {
            self.reference_page_size = value
                .trim()
                .parse::<u32>()
                .unwrap_or(self.reference_page_size);
        }
        if let Ok(value) = env::var(env_keys::REQUEST_TIMEOUT_SECS) {
            self.request_timeout_secs = value.trim().parse::<u64>().ok();
        }
        if let Ok(value) = env::var(env_keys::LOCALE) {
            if !value.trim().is_empty() {
                self.locale = value;
            }
        }
        self
    }
}
