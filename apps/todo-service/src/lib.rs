//! # Todo Service ライブラリ
//!
//! To-Do リスト API のバリデーション・ユースケース・ハンドラを公開する。
//! バイナリ（`main.rs`）と統合テストの双方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
pub mod validator;

pub use app_builder::build_app;
