//! # TodoFlow インフラ層
//!
//! ストレージとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ**: To-Do アイテムの永続化トレイトと、その PostgreSQL /
//!   インメモリ実装
//!
//! ## 依存関係
//!
//! ```text
//! todo-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`memory`] - インメモリリポジトリ
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use todoflow_infra::{db, repository::{PostgresTodoRepository, TodoRepository}};
//!
//! async fn setup() -> Result<Arc<dyn TodoRepository>, Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/todoflow").await?;
//!     Ok(Arc::new(PostgresTodoRepository::new(pool)))
//! }
//! ```

pub mod db;
pub mod error;
pub mod memory;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
pub use memory::InMemoryTodoRepository;
