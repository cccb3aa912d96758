//! API 数据结构模块

use serde::{Deserialize, Serialize};

// ================================================================================================
// API 请求结构
// ================================================================================================

/// 对话消息
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// 角色
    pub role: Role,
    /// 内容
    pub content: String,
}

/// 角色枚举
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 用户
    #[default]
    User,
    /// 机器人
    Assistant,
}

/// Messages API 请求体
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MessageRequest {
    /// 模型名称
    pub model: String,
    /// 最大生成 token 数
    pub max_tokens: u32,
    /// 消息列表
    pub messages: Vec<Message>,
}

// ================================================================================================
// API 响应结构
// ================================================================================================

/// Messages API 响应体
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct MessageResponse {
    /// 响应 ID
    #[serde(default)]
    pub id: String,
    /// 角色
    #[serde(default = "assistant")]
    pub role: Role,
    /// 内容块
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// token 使用情况
    #[serde(default)]
    pub usage: Usage,
}

fn assistant() -> Role {
    Role::Assistant
}

/// 内容块
///
/// 只解析文本块，其余类型（`tool_use`、`thinking` 等）统一归入 `Other`。
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// token 使用情况
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy)]
pub struct Usage {
    /// 输入 token 数量
    #[serde(default)]
    pub input_tokens: u32,
    /// 输出 token 数量
    #[serde(default)]
    pub output_tokens: u32,
}

/// API 错误响应体 `{"type": "error", "error": {...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// API 错误详情
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// 错误类型，如 `authentication_error`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// 错误信息
    #[serde(default)]
    pub message: String,
}
