//! # TodoFlow 共有ユーティリティ
//!
//! サービスとインフラ層から共通で使用されるユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - HTTP / tracing に依存する部品は `observability` feature の背後に置く

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod i18n;
pub mod observability;

pub use error_response::{ErrorResponse, FailureDetail};
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
pub use i18n::{Locale, MessageCode};
