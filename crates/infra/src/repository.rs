//! # リポジトリ実装
//!
//! ドメインモデルの永続化を担当するリポジトリトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: インメモリ実装（[`crate::memory`]）と差し替え可能

pub mod todo_repository;

pub use todo_repository::{PostgresTodoRepository, TodoFilter, TodoPatch, TodoRepository};
