//! # ドメイン層エラー定義
//!
//! 値オブジェクトの不変条件違反を表現するエラー型。
//!
//! HTTP ステータスへの変換は API 層の責務とし、ここではステータスを持たない。
//! 入力検証の結果をクライアントに返す経路（`VALIDATION_ERRORS.*` コード）は
//! API 層のバリデータが担当する。ドメイン層のエラーは、バリデータを経由せずに
//! 不正な値でエンティティを組み立てようとした場合の最終防衛線となる。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 値オブジェクトの不変条件（例: タイトルが空でない）に違反した場合に使用する。
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
