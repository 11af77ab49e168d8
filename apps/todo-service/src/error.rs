//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! エラーレスポンスの描画はこのモジュールの [`IntoResponse`] 実装に集約する。
//! ハンドラが個別にエラーボディを組み立てることはない。
//!
//! トップレベルの文言はロケールに依存するため、ハンドラは
//! [`TodoError::localized`] で State のロケールを添えてから返す。

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todoflow_shared::{ErrorResponse, FailureDetail, Locale};

use crate::validator::ValidationFailure;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
   /// 入力検証の失敗（1 件以上）
   #[error("バリデーションエラー: {} 件", .0.len())]
   Validation(Vec<ValidationFailure>),

   /// 参照したアイテムが存在しない
   #[error("リソースが見つかりません")]
   NotFound,

   /// リクエストボディを解釈できない
   #[error("不正なリクエスト: {0}")]
   MalformedRequest(String),

   /// ストレージ操作の失敗
   #[error("データベースエラー: {0}")]
   Database(#[from] todoflow_infra::InfraError),

   /// 内部エラー
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl TodoError {
   /// 描画に使うロケールを添える
   pub fn localized(self, locale: Locale) -> LocalizedError {
      LocalizedError {
         locale,
         error: self,
      }
   }
}

/// ロケール付きの [`TodoError`]
///
/// HTTP レスポンスへの変換はこの型が担う。
#[derive(Debug)]
pub struct LocalizedError {
   locale: Locale,
   error:  TodoError,
}

impl From<ValidationFailure> for FailureDetail {
   fn from(failure: ValidationFailure) -> Self {
      Self {
         field:   failure.field.to_string(),
         message: failure.message.as_str().to_string(),
      }
   }
}

impl IntoResponse for LocalizedError {
   fn into_response(self) -> Response {
      let locale = self.locale;
      let (status, body) = match self.error {
         TodoError::Validation(failures) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_failed(
               locale,
               failures.into_iter().map(Into::into).collect(),
            ),
         ),
         TodoError::NotFound => (StatusCode::NOT_FOUND, ErrorResponse::not_found(locale)),
         TodoError::MalformedRequest(detail) => {
            tracing::debug!(%detail, "リクエストボディを解釈できません");
            (StatusCode::BAD_REQUEST, ErrorResponse::malformed_request(locale))
         }
         TodoError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(locale),
            )
         }
         TodoError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(locale),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
