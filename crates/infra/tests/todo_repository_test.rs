//! PostgresTodoRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロを使用して、
//! テストごとに独立したデータベースを作成しマイグレーションを適用する。
//!
//! 実行方法:
//! ```bash
//! DATABASE_URL=postgres://... cargo test -p todoflow-infra --test todo_repository_test -- --ignored
//! ```

use pretty_assertions::assert_eq;
use sqlx::PgPool;
use todoflow_domain::todo::{NewTodoItem, TodoItemId, TodoTitle};
use todoflow_infra::repository::{PostgresTodoRepository, TodoFilter, TodoPatch, TodoRepository};

fn new_item(title: &str) -> NewTodoItem {
   NewTodoItem::new(TodoTitle::new(title).unwrap())
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_saveしたアイテムをidで取得できる(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);

   let saved = sut.save(&new_item("牛乳を買う")).await.unwrap();
   let found = sut
      .find_one(&TodoFilter::by_id(saved.id().clone()))
      .await
      .unwrap();

   assert_eq!(found, Some(saved));
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_タイトルの完全一致で取得できる(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);
   let saved = sut.save(&new_item("重複チェック")).await.unwrap();

   let found = sut
      .find_one(&TodoFilter::by_title("重複チェック"))
      .await
      .unwrap();
   let missing = sut
      .find_one(&TodoFilter::by_title("重複チェック "))
      .await
      .unwrap();

   assert_eq!(found, Some(saved));
   assert_eq!(missing, None);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_updateは一致したアイテムのタイトルを更新する(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);
   let saved = sut.save(&new_item("変更前")).await.unwrap();

   let updated = sut
      .update(
         &TodoFilter::by_id(saved.id().clone()),
         &TodoPatch::title(TodoTitle::new("変更後").unwrap()),
      )
      .await
      .unwrap()
      .unwrap();

   assert_eq!(updated.id(), saved.id());
   assert_eq!(updated.title().as_str(), "変更後");
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_存在しないidのupdateはnoneを返す(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);

   let result = sut
      .update(
         &TodoFilter::by_id(TodoItemId::new()),
         &TodoPatch::title(TodoTitle::new("変更後").unwrap()),
      )
      .await
      .unwrap();

   assert_eq!(result, None);
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_空のフィルタでdelete_manyすると全件削除される(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);
   sut.save(&new_item("1")).await.unwrap();
   sut.save(&new_item("2")).await.unwrap();

   let deleted = sut.delete_many(&TodoFilter::all()).await.unwrap();

   assert_eq!(deleted, 2);
   assert!(sut.get_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
#[ignore = "PostgreSQL が必要"]
async fn test_get_allは作成順で全件を返す(pool: PgPool) {
   let sut = PostgresTodoRepository::new(pool);
   let first = sut.save(&new_item("1件目")).await.unwrap();
   let second = sut.save(&new_item("2件目")).await.unwrap();

   let all = sut.get_all().await.unwrap();

   assert_eq!(all, vec![first, second]);
}
