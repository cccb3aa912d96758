//! claudegen 命令行入口
//!
//! 没有参数。找不到 API 密钥时打印帮助信息，请求失败时打印错误，两种情况都以退出码 1 结束。

use claudegen::app::{self, Locations};
use claudegen::config;
use claudegen::credential::write_missing_help;
use claudegen::error::{EXIT_FAILURE, GenError};
use claudegen::Config;
use log::debug;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let locations = Locations::current();
    debug!("{:?}", locations);

    let result = match config::load_env(locations.dotenv.as_deref()) {
        Ok(env) => {
            let mut out = io::stdout().lock();
            app::run(Config::default(), &env, locations.fallback.as_deref(), &mut out).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ GenError::MissingCredential { .. }) => {
            debug!("{}", e);
            write_missing_help(&mut io::stdout().lock(), locations.fallback.as_deref()).ok();
            ExitCode::from(EXIT_FAILURE)
        }
        Err(e) => {
            eprintln!("错误: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
