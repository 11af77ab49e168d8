//! # TodoFlow ドメイン層
//!
//! To-Do 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::TodoItem`]）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（[`todo::TodoTitle`]）
//! - **ドメインエラー**: 不変条件違反を表現するエラー型（[`DomainError`]）
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::todo::{TodoItem, TodoItemId, TodoTitle};
//!
//! let item = TodoItem::from_db(TodoItemId::new(), TodoTitle::new("牛乳を買う")?);
//! let view = item.to_view();
//!
//! assert_eq!(view.title, "牛乳を買う");
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod todo;

pub use error::DomainError;
