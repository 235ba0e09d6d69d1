// ==========================================
// 酒店房价批量操作系统 - 配置层
// ==========================================
// 职责: 应用配置管理（服务地址、鉴权、页大小、语言）
// 来源: 平台配置目录下的 JSON 文件 + 环境变量覆写
// ==========================================

pub mod settings;

// 重导出核心配置类型
pub use settings::{env_keys, AppSettings};
