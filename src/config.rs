//! 配置模块
use crate::error::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ===============================================================================================
// 环境配置
// ===============================================================================================

/// 保存 API 密钥的环境变量名
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// 本地环境配置文件名
pub const DOTENV_FILE: &str = ".env";

/// 环境变量快照：`.env` 文件内容叠加进程环境
pub type EnvMap = HashMap<String, String>;

/// 从 `start` 开始逐级向上查找 `.env` 文件
///
/// `start` 通常是程序所在目录，因此从任何工作目录运行都能找到程序旁边的 `.env`。
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILE))
        .find(|path| path.is_file())
}

/// 读取可选的 `.env` 文件并与进程环境合并
///
/// `dotenv_path` 为 `None` 或文件不存在时只返回进程环境。进程环境中已有的变量
/// 优先于 `.env` 中的同名条目。该函数只返回映射，不会写入进程环境。
pub fn load_env(dotenv_path: Option<&Path>) -> Result<EnvMap> {
    let mut vars = match dotenv_path {
        Some(path) => read_dotenv(path)?,
        None => EnvMap::new(),
    };
    // 非 UTF-8 的变量直接忽略
    vars.extend(
        env::vars_os().filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?))),
    );
    Ok(vars)
}

/// 只读取 `.env` 文件中的键值对
///
/// 无法解析的行会被跳过并记录警告，只有读取文件本身失败才返回错误。
pub fn read_dotenv(path: &Path) -> Result<EnvMap> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if e.not_found() => {
            debug!("{} 不存在, 跳过", path.display());
            return Ok(EnvMap::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut vars = EnvMap::new();
    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(dotenvy::Error::LineParse(line, index)) => {
                warn!("{} 中无法解析的行已跳过: '{}' (位置 {})", path.display(), line, index);
            }
            Err(e) => return Err(e.into()),
        }
    }
    debug!("从 {} 读取了 {} 个变量", path.display(), vars.len());
    Ok(vars)
}

// ===============================================================================================
// 请求配置
// ===============================================================================================

/// Claude 请求配置
///
/// 所有参数都有固定默认值，Builder 方法仅供库调用方和测试使用。
#[derive(Debug, Clone)]
pub struct Config {
    /// 模型名称
    pub(crate) model: String,
    /// 最大生成 token 数
    pub(crate) max_tokens: u32,
    /// 用户提示
    pub(crate) prompt: String,
    /// API 基础 URL
    pub(crate) api_base: String,
    /// `anthropic-version` 请求头
    pub(crate) api_version: String,
    /// 请求超时时间，`None` 表示使用 reqwest 默认值
    pub(crate) timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "claude-3-5-sonnet-20241022".into(),
            max_tokens: 1024,
            prompt: "こんにちは！PythonでHello Worldを出力するコードを書いてください。".into(),
            api_base: "https://api.anthropic.com".into(),
            api_version: "2023-06-01".into(),
            timeout: None,
        }
    }
}

/// 生成 Config Builder 方法的宏
///
/// 自动生成 `with_field_name` 形式的 builder 方法
macro_rules! config_builder {
    ($field:ident, $type:ty) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = $field;
                self
            }
        }
    };
    ($field:ident, $type:ty, option) => {
        paste::paste! {
            #[doc = "设置 `"]
            #[doc = stringify!($field)]
            #[doc = "`"]
            pub fn [<with_ $field>](mut self, $field: $type) -> Self {
                self.$field = Some($field);
                self
            }
        }
    };
}

impl Config {
    pub fn prompt(&self) -> &str { &self.prompt }

    /// Messages API 的完整端点
    pub fn messages_endpoint(&self) -> String {
        format!("{}/v1/messages", self.api_base.trim_end_matches('/'))
    }

    // 使用宏生成 builder 方法
    config_builder!(model, String);
    config_builder!(max_tokens, u32);
    config_builder!(prompt, String);
    config_builder!(api_base, String);
    config_builder!(api_version, String);
    config_builder!(timeout, Duration, option);
}
