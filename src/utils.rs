//! 工具函数模块
use crate::error::{GenError, Result};
use crate::types::{ContentBlock, Message, MessageResponse, Role};

/// 输出分隔线
pub const SEPARATOR: &str =
    "--------------------------------------------------";

/// 创建消息的便捷函数
pub fn message(role: Role, content: &str) -> Message {
    Message {
        role,
        content: content.to_string(),
    }
}

/// 取出响应的第一个内容块中的文本
///
/// 没有内容块或第一个块不是文本时返回 `NoContent`。
pub fn first_text(response: &MessageResponse) -> Result<&str> {
    match response.content.first() {
        Some(ContentBlock::Text { text }) => Ok(text),
        _ => Err(GenError::NoContent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(content: Vec<ContentBlock>) -> MessageResponse {
        MessageResponse {
            content,
            ..MessageResponse::default()
        }
    }

    #[test]
    fn test_message_creation() {
        let msg = message(Role::User, "Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello");
    }

    #[test]
    fn test_first_text_takes_first_block_only() {
        let resp = response(vec![
            ContentBlock::Text { text: "first".into() },
            ContentBlock::Text { text: "second".into() },
        ]);
        assert_eq!(first_text(&resp).unwrap(), "first");
    }

    #[test]
    fn test_first_text_empty_content() {
        assert!(matches!(first_text(&response(vec![])), Err(GenError::NoContent)));
    }

    #[test]
    fn test_first_text_non_text_block() {
        let resp = response(vec![
            ContentBlock::Other,
            ContentBlock::Text { text: "late".into() },
        ]);
        assert!(matches!(first_text(&resp), Err(GenError::NoContent)));
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 50);
    }
}
