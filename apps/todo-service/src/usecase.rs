//! # ユースケース層
//!
//! 入力検証からリポジトリ操作までのリクエストパイプラインを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn TodoRepository>` で外部から注入
//! - **薄いハンドラ**: ハンドラは HTTP の入出力変換のみを行い、
//!   検証・分岐・永続化はユースケースに集約する

pub mod todo;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};
