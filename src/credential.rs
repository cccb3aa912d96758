//! API 密钥解析模块
//!
//! 按顺序检查两个来源：
//!
//! 1. 环境变量 `ANTHROPIC_API_KEY`（包含 `.env` 文件中的条目）
//! 2. 程序所在目录的上级目录中的 `api_key.txt`
//!
//! 两者都没有时返回 [`GenError::MissingCredential`]，由入口函数决定如何退出。
use crate::config::{API_KEY_ENV, DOTENV_FILE, EnvMap};
use crate::error::{GenError, Result};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 备用密钥文件名
pub const FALLBACK_FILE: &str = "api_key.txt";

/// 密钥来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// 环境变量或 `.env` 文件
    Environment,
    /// 备用文件
    File(PathBuf),
}

/// API 密钥
///
/// 进程启动时创建一次，之后只读。`Debug` 输出不包含密钥本身。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    value: String,
    source: CredentialSource,
}

impl Credential {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> &CredentialSource {
        &self.source
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("value", &"<redacted>")
            .field("len", &self.value.len())
            .field("source", &self.source)
            .finish()
    }
}

/// 计算备用文件路径：程序所在目录的上级目录 + `api_key.txt`
///
/// `program` 是可执行文件自身的路径。程序目录没有上级目录时返回 `None`。
pub fn fallback_path(program: &Path) -> Option<PathBuf> {
    program
        .parent()
        .and_then(Path::parent)
        .map(|dir| dir.join(FALLBACK_FILE))
}

/// 解析 API 密钥
///
/// 环境变量非空时直接返回，不再查看备用文件。否则读取备用文件并去掉首尾空白，
/// 即使结果为空字符串也视为找到。
pub fn resolve(env: &EnvMap, fallback: Option<&Path>) -> Result<Credential> {
    if let Some(key) = env.get(API_KEY_ENV).filter(|k| !k.is_empty()) {
        info!("使用环境变量 {} 中的 API 密钥", API_KEY_ENV);
        return Ok(Credential::new(key.clone(), CredentialSource::Environment));
    }

    if let Some(path) = fallback {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let key = contents.trim();
                if key.is_empty() {
                    warn!("{} 为空, 仍将使用空密钥", path.display());
                } else {
                    info!("使用 {} 中的 API 密钥", path.display());
                }
                return Ok(Credential::new(key, CredentialSource::File(path.to_path_buf())));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    Err(GenError::MissingCredential {
        env_var: API_KEY_ENV.to_string(),
        fallback: fallback.map(Path::to_path_buf),
    })
}

/// 输出找不到密钥时的帮助信息，分别说明两种设置方法
pub fn write_missing_help<W: Write>(out: &mut W, fallback: Option<&Path>) -> io::Result<()> {
    writeln!(out, "错误: 未找到API密钥")?;
    writeln!(out, "请使用以下任一方法设置API密钥:")?;
    writeln!(
        out,
        "1. 在 {} 文件中添加 {}=your_api_key (或直接设置该环境变量)",
        DOTENV_FILE, API_KEY_ENV
    )?;
    match fallback {
        Some(path) => writeln!(out, "2. 创建 {} 文件: {}", FALLBACK_FILE, path.display())?,
        None => writeln!(out, "2. 在上级目录中创建 {} 文件", FALLBACK_FILE)?,
    }
    Ok(())
}
