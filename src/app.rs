//! 程序主流程
//!
//! 解析密钥、发送固定请求并把结果写到输出。入口函数只负责准备路径和决定退出码。
use crate::{
    client::ClaudeClient,
    config::{self, Config, EnvMap},
    credential,
    error::Result,
    utils::SEPARATOR,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 标题行
pub const BANNER: &str = "Claude API 代码生成工具";

/// 回复前的提示行
pub const REPLY_HEADING: &str = "Claude 的回复:";

/// 由程序自身位置推导出的文件路径
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    /// 从程序目录向上找到的 `.env`
    pub dotenv: Option<PathBuf>,
    /// 备用密钥文件 `api_key.txt`
    pub fallback: Option<PathBuf>,
}

impl Locations {
    /// 根据可执行文件路径计算 `.env` 和 `api_key.txt` 的位置
    pub fn from_program(program: &Path) -> Self {
        Self {
            dotenv: program.parent().and_then(config::find_dotenv),
            fallback: credential::fallback_path(program),
        }
    }

    /// 当前进程的文件位置，无法获取可执行文件路径时两者都为 `None`
    pub fn current() -> Self {
        std::env::current_exe()
            .map(|exe| Self::from_program(&exe))
            .unwrap_or_default()
    }
}

/// 解析密钥、调用一次 API，并把标题、回复和分隔线写入 `out`
pub async fn run<W: Write>(
    config: Config,
    env: &EnvMap,
    fallback: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let credential = credential::resolve(env, fallback)?;
    let client = ClaudeClient::new(config, &credential)?;

    writeln!(out, "{}", BANNER)?;
    writeln!(out, "{}", SEPARATOR)?;

    let text = client.generate().await?;

    writeln!(out, "{}", REPLY_HEADING)?;
    writeln!(out, "{}", text)?;
    writeln!(out, "{}", SEPARATOR)?;
    out.flush()?;

    Ok(())
}
