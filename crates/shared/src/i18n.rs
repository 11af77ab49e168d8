//! # エラーメッセージのローカライズ
//!
//! エラーレスポンスのトップレベル `message` に使用する文言を、
//! メッセージコード（例: `DEFAULT_ERRORS.VALIDATION_FAILED`）から解決する。
//!
//! バリデーション失敗の個別項目（`failures[].message`）はコードのまま返し、
//! クライアント側の翻訳に委ねる。ここで扱うのはサーバーが文言を確定させる
//! トップレベルのメッセージのみ。
//!
//! ## ロケールの決定
//!
//! 起動時に設定から決定し、エラーを描画する側へ明示的に渡す。
//! プロセス全体の状態としては保持しない。
//!
//! ```
//! use todoflow_shared::i18n::{Locale, MessageCode, translate};
//!
//! assert_eq!(MessageCode::ResourceNotFound.as_str(), "DEFAULT_ERRORS.RESOURCE_NOT_FOUND");
//! assert_eq!(
//!     translate(Locale::Ja, MessageCode::ResourceNotFound),
//!     "リソースが見つかりません"
//! );
//! ```

use std::str::FromStr;

use strum::{Display, EnumString, IntoStaticStr};

/// エラーメッセージのロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// 英語
    #[default]
    En,
    /// 日本語
    Ja,
}

impl Locale {
    /// 文字列からロケールをパースする
    ///
    /// 不正な値の場合は [`En`](Locale::En) にフォールバックし、
    /// stderr に警告を出力する。
    pub fn parse(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|_| {
            eprintln!("WARNING: unknown TODO_LOCALE={s:?}, falling back to en");
            Self::En
        })
    }
}

/// サーバーが文言を確定させるメッセージコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum MessageCode {
    #[strum(serialize = "DEFAULT_ERRORS.VALIDATION_FAILED")]
    ValidationFailed,
    #[strum(serialize = "DEFAULT_ERRORS.RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    #[strum(serialize = "DEFAULT_ERRORS.MALFORMED_REQUEST")]
    MalformedRequest,
    #[strum(serialize = "DEFAULT_ERRORS.INTERNAL_ERROR")]
    InternalError,
}

impl MessageCode {
    /// コード文字列を取得する
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// メッセージコードを指定ロケールの文言に変換する
pub fn translate(locale: Locale, code: MessageCode) -> &'static str {
    match (locale, code) {
        (Locale::En, MessageCode::ValidationFailed) => "The request failed validation.",
        (Locale::En, MessageCode::ResourceNotFound) => "The requested resource was not found.",
        (Locale::En, MessageCode::MalformedRequest) => "The request body is malformed.",
        (Locale::En, MessageCode::InternalError) => "An internal error occurred.",
        (Locale::Ja, MessageCode::ValidationFailed) => "入力内容に誤りがあります",
        (Locale::Ja, MessageCode::ResourceNotFound) => "リソースが見つかりません",
        (Locale::Ja, MessageCode::MalformedRequest) => "リクエストの形式が正しくありません",
        (Locale::Ja, MessageCode::InternalError) => "内部エラーが発生しました",
    }
}
