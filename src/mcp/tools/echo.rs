//! Echo tool implementation.

use rmcp::{model::*, ErrorData as McpError};
use thiserror::Error;

use crate::mcp::types::EchoArgs;

/// Allowed values for `repeat`
const REPEAT_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Invalid echo arguments. Surfaced to clients as `invalid_params`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EchoError {
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Repeat must be an integer between 1 and 10")]
    RepeatOutOfRange(i64),
}

impl From<EchoError> for McpError {
    fn from(err: EchoError) -> Self {
        let data = match &err {
            EchoError::EmptyMessage => None,
            EchoError::RepeatOutOfRange(repeat) => Some(serde_json::json!({ "repeat": repeat })),
        };
        McpError::invalid_params(err.to_string(), data)
    }
}

/// Format `message` repeated `repeat` times (default 1).
pub fn render_echo(message: &str, repeat: Option<i64>) -> Result<String, EchoError> {
    if message.is_empty() {
        return Err(EchoError::EmptyMessage);
    }

    let repeat = repeat.unwrap_or(1);
    if !REPEAT_RANGE.contains(&repeat) {
        return Err(EchoError::RepeatOutOfRange(repeat));
    }

    if repeat == 1 {
        return Ok(message.to_string());
    }

    let copies = vec![message; repeat as usize];
    Ok(format!("Echo ({}x): {}", repeat, copies.join("\n")))
}

/// Echo back the input message
pub fn echo(args: EchoArgs) -> Result<CallToolResult, McpError> {
    let text = render_echo(&args.message, args.repeat)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> &str {
        result.content[0].as_text().map(|t| t.text.as_str()).unwrap()
    }

    #[test]
    fn test_single_echo_is_verbatim() {
        assert_eq!(render_echo("hi", None).unwrap(), "hi");
        assert_eq!(render_echo("hi", Some(1)).unwrap(), "hi");
    }

    #[test]
    fn test_repeated_echo_has_prefix() {
        assert_eq!(
            render_echo("Hello, World!", Some(3)).unwrap(),
            "Echo (3x): Hello, World!\nHello, World!\nHello, World!"
        );
    }

    #[test]
    fn test_every_valid_repeat() {
        for repeat in 1..=10 {
            let text = render_echo("ping", Some(repeat)).unwrap();
            assert_eq!(text.matches("ping").count(), repeat as usize);
            assert_eq!(text.lines().count(), repeat as usize);
            assert_eq!(text.starts_with("Echo ("), repeat > 1);
        }
    }

    #[test]
    fn test_out_of_range_repeat() {
        for repeat in [0, 11, -1, i64::MAX] {
            assert_eq!(
                render_echo("hi", Some(repeat)),
                Err(EchoError::RepeatOutOfRange(repeat))
            );
        }
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(render_echo("", Some(2)), Err(EchoError::EmptyMessage));
    }

    #[test]
    fn test_echo_tool_result() {
        let args = EchoArgs {
            message: "hi".to_string(),
            repeat: None,
        };
        let result = echo(args).unwrap();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
        assert_eq!(text_of(&result), "hi");
    }

    #[test]
    fn test_echo_is_idempotent() {
        let first = render_echo("same", Some(4)).unwrap();
        let second = render_echo("same", Some(4)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_echo_tool_invalid_params() {
        let args = EchoArgs {
            message: "hi".to_string(),
            repeat: Some(11),
        };
        let err = echo(args).unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Repeat must be an integer between 1 and 10");
        assert_eq!(err.data, Some(serde_json::json!({ "repeat": 11 })));
    }
}
