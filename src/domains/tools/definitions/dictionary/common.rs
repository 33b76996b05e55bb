//! Common utilities shared across dictionary tools.

use rmcp::model::{CallToolResult, Content};

/// Guidance returned for a blank `word` argument.
pub const INVALID_WORD: &str = "Please provide a valid word.";

/// Guidance returned for a blank `query` argument.
pub const INVALID_QUERY: &str = "Please provide a valid search query.";

/// The argument with surrounding whitespace removed, or `None` if blank.
pub fn non_blank(argument: &str) -> Option<&str> {
    let trimmed = argument.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Run a blocking lookup on the blocking thread pool.
///
/// A panic inside the job is returned as its message instead of unwinding
/// into the caller.
pub async fn run_blocking<F>(job: F) -> Result<String, String>
where
    F: FnOnce() -> String + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| e.to_string())
}

/// Create a success result with text content.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Convert a tool result into the JSON shape returned over HTTP.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  word "), Some("word"));
        assert_eq!(non_blank("Word"), Some("Word"));
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank(" \n\t "), None);
    }

    #[tokio::test]
    async fn test_run_blocking_returns_output() {
        let out = run_blocking(|| "done".to_string()).await;
        assert_eq!(out, Ok("done".to_string()));
    }

    #[tokio::test]
    async fn test_run_blocking_catches_panic() {
        let out = run_blocking(|| panic!("boom")).await;
        assert!(out.is_err());
    }

    #[test]
    fn test_text_result_is_success() {
        let result = text_result("hi".to_string());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(testing::result_text(&result), "hi");
    }
}
