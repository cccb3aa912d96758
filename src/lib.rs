//! # claudegen - Claude API 代码生成示例
//!
//! 读取 API 密钥，向 Claude Messages API 发送一条固定的提示，并打印回复。
//!
//! ## 密钥来源
//!
//! 1. 环境变量 `ANTHROPIC_API_KEY`，也可以写在 `.env` 文件中。
//! 2. 程序所在目录的上级目录中的 `api_key.txt`。
//!
//! `.env` 从程序所在目录开始逐级向上查找。
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use claudegen::client::ClaudeClient;
//! use claudegen::config::{self, Config};
//! use claudegen::credential;
//! use claudegen::error::Result;
//! use std::path::Path;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let env = config::load_env(Some(Path::new(".env")))?;
//!     let credential = credential::resolve(&env, Some(Path::new("../api_key.txt")))?;
//!     let client = ClaudeClient::new(Config::default(), &credential)?;
//!
//!     let response = client.generate().await?;
//!     println!("{}", response);
//!
//!     Ok(())
//! }
//! ```

// 模块定义
pub mod app;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod types;
pub mod utils;

pub use client::ClaudeClient;
pub use config::Config;
pub use credential::Credential;
pub use error::{GenError, Result};
