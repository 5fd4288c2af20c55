//! Uniform API Response Envelope
//!
//! Every endpoint wraps its payload in the same envelope:
//! `{"message": "SUCCESS", "result": <payload>}` on success and
//! `{"message": "ERROR", "result": "<detail>"}` on failure.

use serde::Serialize;

/// 統一レスポンスエンベロープ
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let ok = ApiResponse::success(42);
/// let err = ApiResponse::error("Invalid token.");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    message: ResponseMessage,
    result: T,
}

/// エンベロープの結果区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseMessage {
    Success,
    Error,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功レスポンスを作成
    pub fn success(result: T) -> Self {
        Self {
            message: ResponseMessage::Success,
            result,
        }
    }
}

impl ApiResponse<String> {
    /// エラーレスポンスを作成（result はエラーメッセージ文字列）
    pub fn error(detail: impl Into<String>) -> Self {
        Self {
            message: ResponseMessage::Error,
            result: detail.into(),
        }
    }
}
