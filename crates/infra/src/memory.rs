//! # インメモリ To-Do リポジトリ
//!
//! プロセス内のメモリにアイテムを保持する [`TodoRepository`] 実装。
//! `TODO_STORAGE=memory` でのローカル起動と、ハンドラ・ユースケースの
//! テストで使用する。
//!
//! 書き込みは `tokio::sync::RwLock` で直列化する。プロセス終了でデータは失われる。

use std::sync::Arc;

use async_trait::async_trait;
use todoflow_domain::todo::{NewTodoItem, TodoItem, TodoItemId};
use tokio::sync::RwLock;

use crate::{
    error::InfraError,
    repository::{TodoFilter, TodoPatch, TodoRepository},
};

/// インメモリ実装の TodoRepository
///
/// `Clone` しても同じストアを共有する。挿入順を保持する。
#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    items: Arc<RwLock<Vec<TodoItem>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn save(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        let saved = TodoItem::from_db(TodoItemId::new(), item.title.clone());
        self.items.write().await.push(saved.clone());
        Ok(saved)
    }

    async fn find_one(&self, filter: &TodoFilter) -> Result<Option<TodoItem>, InfraError> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|item| filter.matches(item))
            .cloned())
    }

    async fn update(
        &self,
        filter: &TodoFilter,
        patch: &TodoPatch,
    ) -> Result<Option<TodoItem>, InfraError> {
        let mut items = self.items.write().await;
        let Some(pos) = items.iter().position(|item| filter.matches(item)) else {
            return Ok(None);
        };

        let updated = patch.apply(items[pos].clone());
        items[pos] = updated.clone();
        Ok(Some(updated))
    }

    async fn delete_many(&self, filter: &TodoFilter) -> Result<u64, InfraError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| !filter.matches(item));
        Ok((before - items.len()) as u64)
    }

    async fn get_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        Ok(self.items.read().await.clone())
    }
}
