//! # TodoRepository
//!
//! To-Do アイテムの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **フィルタによる選択**: 参照・更新・削除は [`TodoFilter`]（部分属性の
//!   連言）で対象を選ぶ。空のフィルタ [`TodoFilter::all`] は全件に一致する
//! - **部分更新**: 更新内容は [`TodoPatch`] で表現し、指定されたフィールドのみ
//!   上書きする
//! - **ID の書式検証はしない**: フィルタに含まれる ID は API 層のバリデータで
//!   検証済みである前提とする

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use todoflow_domain::todo::{NewTodoItem, TodoItem, TodoItemId, TodoTitle};
use uuid::Uuid;

use crate::error::InfraError;

/// To-Do アイテムの選択条件
///
/// 指定されたフィールドすべてに一致するアイテムを選択する。
/// どのフィールドも指定しない場合は全件に一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    pub id:    Option<TodoItemId>,
    pub title: Option<String>,
}

impl TodoFilter {
    /// 全件に一致するフィルタ（`{}`）
    pub fn all() -> Self {
        Self::default()
    }

    /// ID で選択するフィルタ
    pub fn by_id(id: TodoItemId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// タイトルの完全一致で選択するフィルタ
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// アイテムがこのフィルタに一致するか判定する
    pub fn matches(&self, item: &TodoItem) -> bool {
        self.id.as_ref().is_none_or(|id| item.id() == id)
            && self
                .title
                .as_deref()
                .is_none_or(|title| item.title().as_str() == title)
    }
}

/// To-Do アイテムの部分更新内容
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<TodoTitle>,
}

impl TodoPatch {
    /// タイトルを上書きするパッチ
    pub fn title(title: TodoTitle) -> Self {
        Self { title: Some(title) }
    }

    /// パッチをアイテムに適用する
    pub fn apply(&self, item: TodoItem) -> TodoItem {
        match &self.title {
            Some(title) => item.with_title(title.clone()),
            None => item,
        }
    }
}

/// To-Do リポジトリトレイト
///
/// ストレージバックエンドが実装すべき操作を定義する。
/// PostgreSQL 実装とインメモリ実装を差し替え可能にする。
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// 新しいアイテムを永続化し、ID を割り当てて返す
    async fn save(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError>;

    /// フィルタに一致するアイテムを最大 1 件返す
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(item))`: 一致するアイテムが見つかった場合
    /// - `Ok(None)`: 一致するアイテムがない場合（エラーではない）
    /// - `Err(_)`: ストレージエラー
    async fn find_one(&self, filter: &TodoFilter) -> Result<Option<TodoItem>, InfraError>;

    /// フィルタに一致するアイテム 1 件に部分更新を適用する
    ///
    /// 一致するアイテムがない場合は `Ok(None)` を返す。
    /// 「見つからない」の判断は呼び出し側の責務とする。
    async fn update(
        &self,
        filter: &TodoFilter,
        patch: &TodoPatch,
    ) -> Result<Option<TodoItem>, InfraError>;

    /// フィルタに一致するアイテムをすべて削除し、削除件数を返す
    async fn delete_many(&self, filter: &TodoFilter) -> Result<u64, InfraError>;

    /// すべてのアイテムを返す
    async fn get_all(&self) -> Result<Vec<TodoItem>, InfraError>;
}

/// `todo_items` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoItemRow {
    id:    Uuid,
    title: String,
}

impl TryFrom<TodoItemRow> for TodoItem {
    type Error = InfraError;

    fn try_from(row: TodoItemRow) -> Result<Self, Self::Error> {
        let title = TodoTitle::new(row.title).map_err(|e| InfraError::unexpected(e.to_string()))?;
        Ok(TodoItem::from_db(TodoItemId::from_uuid(row.id), title))
    }
}

/// WHERE 句をフィルタから組み立てる
///
/// 値はすべてバインドパラメータとして渡す。
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &TodoFilter) {
    builder.push(" WHERE TRUE");
    if let Some(id) = &filter.id {
        builder.push(" AND id = ").push_bind(*id.as_uuid());
    }
    if let Some(title) = &filter.title {
        builder.push(" AND title = ").push_bind(title.clone());
    }
}

/// PostgreSQL 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn save(&self, item: &NewTodoItem) -> Result<TodoItem, InfraError> {
        let id = TodoItemId::new();

        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            INSERT INTO todo_items (id, title)
            VALUES ($1, $2)
            RETURNING id, title
            "#,
        )
        .bind(id.as_uuid())
        .bind(item.title.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(?filter))]
    async fn find_one(&self, filter: &TodoFilter) -> Result<Option<TodoItem>, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT id, title FROM todo_items");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at, id LIMIT 1");

        let row = builder
            .build_query_as::<TodoItemRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(TodoItem::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(?filter))]
    async fn update(
        &self,
        filter: &TodoFilter,
        patch: &TodoPatch,
    ) -> Result<Option<TodoItem>, InfraError> {
        let Some(title) = &patch.title else {
            return self.find_one(filter).await;
        };

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE todo_items SET title = ");
        builder.push_bind(title.as_str().to_string());
        builder.push(", updated_at = now() WHERE id = (SELECT id FROM todo_items");
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at, id LIMIT 1) RETURNING id, title");

        let row = builder
            .build_query_as::<TodoItemRow>()
            .fetch_optional(&self.pool)
            .await?;

        row.map(TodoItem::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(?filter))]
    async fn delete_many(&self, filter: &TodoFilter) -> Result<u64, InfraError> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM todo_items");
        push_filter(&mut builder, filter);

        let result = builder.build().execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn get_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        let rows = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, title
            FROM todo_items
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TodoItem::try_from).collect()
    }
}
