//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! ## 形状
//!
//! ```json
//! {
//!   "message": "The request failed validation.",
//!   "failures": [{ "field": "title", "message": "VALIDATION_ERRORS.INVALID_TITLE" }]
//! }
//! ```
//!
//! - `message`: 呼び出し側が指定したロケールでローカライズ済みの文言（[`crate::i18n`]）
//! - `failures`: バリデーション失敗時のみ含まれる。各項目の `message` はコード
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）

use serde::{Deserialize, Serialize};

use crate::i18n::{Locale, MessageCode, translate};

/// バリデーション失敗の 1 項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub field:   String,
    pub message: String,
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message:  String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failures: Option<Vec<FailureDetail>>,
}

impl ErrorResponse {
    /// 汎用コンストラクタ
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message:  message.into(),
            failures: None,
        }
    }

    /// 400 Validation Error
    ///
    /// 失敗項目は順序を保ったまま格納する。
    pub fn validation_failed(locale: Locale, failures: Vec<FailureDetail>) -> Self {
        Self {
            message:  translate(locale, MessageCode::ValidationFailed).to_string(),
            failures: Some(failures),
        }
    }

    /// 404 Not Found
    pub fn not_found(locale: Locale) -> Self {
        Self::new(translate(locale, MessageCode::ResourceNotFound))
    }

    /// 400 Malformed Request
    pub fn malformed_request(locale: Locale) -> Self {
        Self::new(translate(locale, MessageCode::MalformedRequest))
    }

    /// 500 Internal Server Error
    ///
    /// 内部情報を含めない固定文言。
    pub fn internal_error(locale: Locale) -> Self {
        Self::new(translate(locale, MessageCode::InternalError))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_failuresがない場合はjsonに含まれない() {
        let json = serde_json::to_value(ErrorResponse::new("見つかりません")).unwrap();

        assert_eq!(json, serde_json::json!({ "message": "見つかりません" }));
    }

    #[test]
    fn test_validation_failedは失敗項目を順序どおりに含める() {
        let error = ErrorResponse::validation_failed(Locale::En, vec![
            FailureDetail {
                field:   "id".to_string(),
                message: "VALIDATION_ERRORS.INVALID_ID".to_string(),
            },
            FailureDetail {
                field:   "title".to_string(),
                message: "VALIDATION_ERRORS.INVALID_TITLE".to_string(),
            },
        ]);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["message"], "The request failed validation.");
        assert_eq!(json["failures"][0]["field"], "id");
        assert_eq!(json["failures"][0]["message"], "VALIDATION_ERRORS.INVALID_ID");
        assert_eq!(json["failures"][1]["field"], "title");
    }

    #[test]
    fn test_not_foundはfailuresを持たない() {
        let error = ErrorResponse::not_found(Locale::En);

        assert!(!error.message.is_empty());
        assert_eq!(error.failures, None);
    }

    #[test]
    fn test_文言は渡したロケールで決まる() {
        assert_eq!(
            ErrorResponse::not_found(Locale::Ja).message,
            "リソースが見つかりません"
        );
        assert_eq!(
            ErrorResponse::internal_error(Locale::En).message,
            "An internal error occurred."
        );
    }

    #[test]
    fn test_jsonデシリアライズでfailures省略を許容する() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message": "x"}"#).unwrap();

        assert_eq!(error, ErrorResponse::new("x"));
    }
}
