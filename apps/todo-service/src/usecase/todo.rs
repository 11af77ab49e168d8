//! To-Do 管理ユースケース
//!
//! 各操作は同じ形のパイプラインをたどる:
//!
//! 1. 入力検証（失敗を蓄積）
//! 2. 失敗があれば [`TodoError::Validation`] で終了
//! 3. リポジトリ操作
//! 4. 更新・取得で結果が空なら [`TodoError::NotFound`]

use std::sync::Arc;

use todoflow_domain::todo::{NewTodoItem, TodoItem, TodoItemId, TodoTitle};
use todoflow_infra::repository::{TodoFilter, TodoPatch, TodoRepository};

use crate::{error::TodoError, validator};

/// アイテム作成の入力
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub title: String,
}

/// アイテム更新の入力
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
    pub title: String,
}

/// To-Do 管理ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// アイテムを作成する
    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<TodoItem, TodoError> {
        let failures =
            validator::validate_create(self.todo_repository.as_ref(), &input.title).await?;
        ensure_valid(failures)?;

        let title = parse_title(input.title)?;
        let item = self.todo_repository.save(&NewTodoItem::new(title)).await?;

        tracing::info!(todo_id = %item.id(), "To-Do アイテムを作成しました");
        Ok(item)
    }

    /// アイテムを削除する
    ///
    /// 存在しない ID は検証段階で失敗として報告される。
    pub async fn delete_todo(&self, id: &str) -> Result<(), TodoError> {
        let failures = validator::validate_delete(self.todo_repository.as_ref(), id).await?;
        ensure_valid(failures)?;

        let id = parse_id(id)?;
        let deleted = self
            .todo_repository
            .delete_many(&TodoFilter::by_id(id.clone()))
            .await?;

        tracing::info!(todo_id = %id, deleted, "To-Do アイテムを削除しました");
        Ok(())
    }

    /// アイテムのタイトルを更新する
    pub async fn update_todo(
        &self,
        id: &str,
        input: UpdateTodoInput,
    ) -> Result<TodoItem, TodoError> {
        ensure_valid(validator::validate_update(id, &input.title))?;

        let id = parse_id(id)?;
        let title = parse_title(input.title)?;
        let item = self
            .todo_repository
            .update(&TodoFilter::by_id(id), &TodoPatch::title(title))
            .await?
            .ok_or(TodoError::NotFound)?;

        tracing::info!(todo_id = %item.id(), "To-Do アイテムを更新しました");
        Ok(item)
    }

    /// アイテムを 1 件取得する
    pub async fn get_todo(&self, id: &str) -> Result<TodoItem, TodoError> {
        ensure_valid(validator::validate_fetch(id))?;

        let id = parse_id(id)?;
        self.todo_repository
            .find_one(&TodoFilter::by_id(id))
            .await?
            .ok_or(TodoError::NotFound)
    }

    /// 全アイテムを取得する
    pub async fn list_todos(&self) -> Result<Vec<TodoItem>, TodoError> {
        let items = self.todo_repository.get_all().await?;
        Ok(items)
    }
}

fn ensure_valid(failures: Vec<validator::ValidationFailure>) -> Result<(), TodoError> {
    if failures.is_empty() {
        Ok(())
    } else {
        Err(TodoError::Validation(failures))
    }
}

// 検証通過後の変換。失敗は検証ルールとドメイン規則の食い違いを意味する。
fn parse_id(id: &str) -> Result<TodoItemId, TodoError> {
    TodoItemId::parse(id)
        .ok_or_else(|| TodoError::Internal(format!("検証済み ID を解釈できません: {id}")))
}

fn parse_title(title: String) -> Result<TodoTitle, TodoError> {
    TodoTitle::new(title).map_err(|e| TodoError::Internal(e.to_string()))
}
