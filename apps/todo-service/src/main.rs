//! # Todo Service サーバー
//!
//! To-Do リストを管理する REST API サーバー。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 説明 |
//! |---|---|---|
//! | `POST` | `/todos` | アイテム作成 |
//! | `GET` | `/todos` | アイテム一覧 |
//! | `GET` | `/todos/{id}` | アイテム取得 |
//! | `PUT` | `/todos/{id}` | タイトル更新 |
//! | `DELETE` | `/todos/{id}` | アイテム削除 |
//! | `GET` | `/health` | Liveness Check |
//! | `GET` | `/health/ready` | Readiness Check |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `TODO_STORAGE` | No | `postgres`（デフォルト）または `memory` |
//! | `DATABASE_URL` | postgres 時 | PostgreSQL 接続 URL |
//! | `TODO_LOCALE` | No | エラーメッセージのロケール（`en` / `ja`） |
//! | `LOG_FORMAT` | No | `json` または `pretty` |
//!
//! ## 起動方法
//!
//! ```bash
//! # インメモリで起動
//! TODO_STORAGE=memory cargo run -p todoflow-todo-service
//!
//! # PostgreSQL で起動
//! DATABASE_URL=postgres://... cargo run -p todoflow-todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todoflow_infra::{
    InMemoryTodoRepository,
    db,
    repository::{PostgresTodoRepository, TodoRepository},
};
use todoflow_shared::observability::TracingConfig;
use todoflow_todo_service::{
    build_app,
    config::{StorageBackend, TodoConfig},
    handler::ReadinessState,
};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todo-service");
    todoflow_shared::observability::init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "todo-service").entered();

    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        storage = %config.storage,
        locale = %config.locale,
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let (todo_repository, readiness_state) = match config.storage {
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL が設定されていません")?;
            let pool = db::create_pool(database_url)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            db::run_migrations(&pool)
                .await
                .context("マイグレーションの実行に失敗しました")?;
            tracing::info!("マイグレーションを適用しました");

            let readiness_state = ReadinessState {
                pool: Some(pool.clone()),
            };
            let repository: Arc<dyn TodoRepository> = Arc::new(PostgresTodoRepository::new(pool));
            (repository, readiness_state)
        }
        StorageBackend::Memory => {
            tracing::warn!("インメモリストレージで起動します（再起動でデータは失われます）");
            let repository: Arc<dyn TodoRepository> = Arc::new(InMemoryTodoRepository::new());
            (repository, ReadinessState { pool: None })
        }
    };

    let app = build_app(todo_repository, Arc::new(readiness_state), config.locale);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
