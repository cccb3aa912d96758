//! 错误处理模块

use std::path::PathBuf;
use thiserror::Error;

/// 任何失败的进程退出码
pub const EXIT_FAILURE: u8 = 1;

/// claudegen 的统一错误类型
///
/// `MissingCredential` 是唯一由入口函数打印帮助信息并处理的错误，
/// 其余变体都属于服务调用失败，直接传播到进程边界。
#[derive(Debug, Error)]
pub enum GenError {
    /// 环境变量和备用文件都没有提供 API 密钥
    #[error("未找到API密钥: 环境变量 {env_var} 未设置, 备用文件 {} 不存在", display_fallback(.fallback))]
    MissingCredential {
        /// 检查过的环境变量名
        env_var: String,
        /// 检查过的备用文件路径（程序目录无上级目录时为 `None`）
        fallback: Option<PathBuf>,
    },

    /// HTTP 请求相关错误
    #[error("HTTP请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON 序列化/反序列化错误
    #[error("JSON处理错误: {0}")]
    Json(String),

    /// API 服务端错误
    #[error("API错误 ({status}): {message}")]
    Api { status: u16, message: String },

    /// 响应内容为空或首个内容块不是文本
    #[error("响应内容为空")]
    NoContent,

    /// API 请求频率限制
    #[error("请求频率超限: {0}")]
    RateLimit(String),

    /// 身份验证失败
    #[error("身份验证失败: {0}")]
    Auth(String),

    /// 指定的模型不存在
    #[error("模型不存在: {0}")]
    ModelNotFound(String),

    /// 请求参数无效
    #[error("请求参数无效: {0}")]
    InvalidRequest(String),

    /// 配置相关错误
    #[error("配置错误: {0}")]
    Config(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_fallback(fallback: &Option<PathBuf>) -> String {
    fallback
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string())
}

/// claudegen 的 Result 类型别名
pub type Result<T> = std::result::Result<T, GenError>;

impl From<serde_json::Error> for GenError {
    fn from(e: serde_json::Error) -> Self {
        GenError::Json(e.to_string())
    }
}

impl From<dotenvy::Error> for GenError {
    fn from(e: dotenvy::Error) -> Self {
        match e {
            dotenvy::Error::Io(io) => GenError::Io(io),
            other => GenError::Config(format!(".env 解析失败: {}", other)),
        }
    }
}
