//! Claude 客户端核心模块
use crate::{
    config::Config,
    credential::Credential,
    error::{GenError, Result},
    types::{ErrorResponse, MessageRequest, MessageResponse, Role},
    utils::{first_text, message},
};
use log::debug;
use reqwest::{
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
    Client, Response, StatusCode,
};
use std::time::Instant;

// ================================================================================================
// 核心客户端模块
// ================================================================================================

const API_KEY_HEADER: &str = "x-api-key";
const VERSION_HEADER: &str = "anthropic-version";

/// Claude 客户端
///
/// 绑定一个 API 密钥，每次调用只发送一个请求，不做重试。
#[derive(Debug, Clone)]
pub struct ClaudeClient {
    client: Client,
    config: Config,
    headers: HeaderMap,
}

impl ClaudeClient {
    /// 创建一个新的 `ClaudeClient` 实例
    pub fn new(config: Config, credential: &Credential) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let headers = build_headers(credential, &config.api_version)?;

        Ok(Self {
            client,
            config,
            headers,
        })
    }

    /// 按配置构造固定的单轮请求
    pub fn default_request(&self) -> MessageRequest {
        MessageRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            messages: vec![message(Role::User, &self.config.prompt)],
        }
    }

    /// 调用 Messages API
    pub async fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        let endpoint = self.config.messages_endpoint();
        debug!("POST {} model={}", endpoint, request.model);

        let start_time = Instant::now();
        let response = self
            .client
            .post(&endpoint)
            .headers(self.headers.clone())
            .json(request)
            .send()
            .await?;

        let response = check_status(response).await?;
        let completion = response.json::<MessageResponse>().await?;
        debug!(
            "收到响应 id={} 耗时={}ms input_tokens={} output_tokens={}",
            completion.id,
            start_time.elapsed().as_millis(),
            completion.usage.input_tokens,
            completion.usage.output_tokens
        );
        Ok(completion)
    }

    /// 发送固定提示并返回第一个内容块的文本
    pub async fn generate(&self) -> Result<String> {
        let request = self.default_request();
        let response = self.create_message(&request).await?;
        first_text(&response).map(str::to_string)
    }
}

/// 构建 API 请求所需的 HTTP 标头
fn build_headers(credential: &Credential, api_version: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let mut key = HeaderValue::from_str(credential.value())
        .map_err(|e| GenError::InvalidRequest(format!("Invalid API key: {}", e)))?;
    key.set_sensitive(true);
    headers.insert(API_KEY_HEADER, key);
    headers.insert(
        VERSION_HEADER,
        HeaderValue::from_str(api_version)
            .map_err(|e| GenError::Config(format!("Invalid API version: {}", e)))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// 非 2xx 响应转换为对应的错误类型
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(status_to_error(status, &body))
}

fn status_to_error(status: StatusCode, body: &str) -> GenError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenError::Auth(message),
        StatusCode::NOT_FOUND => GenError::ModelNotFound(message),
        StatusCode::TOO_MANY_REQUESTS => GenError::RateLimit(message),
        StatusCode::BAD_REQUEST => GenError::InvalidRequest(message),
        _ => GenError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
