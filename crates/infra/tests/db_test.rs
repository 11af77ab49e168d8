//! DB コネクション管理の統合テスト
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p todoflow-infra --test db_test -- --ignored
//! ```

use sqlx::PgPool;
use todoflow_infra::db;

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_pingは接続可能なプールで成功する(pool: PgPool) {
   db::ping(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_閉じたプールへのpingはエラーになる(pool: PgPool) {
   pool.close().await;

   let result = db::ping(&pool).await;

   assert!(result.is_err());
}

#[sqlx::test(migrations = false)]
#[ignore = "PostgreSQL が必要"]
async fn test_マイグレーションは再実行しても成功する(pool: PgPool) {
   db::run_migrations(&pool).await.unwrap();
   db::run_migrations(&pool).await.unwrap();

   let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_items")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(row.0, 0);
}
