//! # To-Do ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todos` - アイテム作成
//! - `GET /todos` - アイテム一覧
//! - `GET /todos/{id}` - アイテム取得
//! - `PUT /todos/{id}` - タイトル更新
//! - `DELETE /todos/{id}` - アイテム削除
//!
//! パスの `id` は文字列のまま受け取り、形式検証はユースケース層に任せる。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use todoflow_domain::todo::TodoItemView;
use todoflow_shared::Locale;

use crate::{
    error::{LocalizedError, TodoError},
    usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// To-Do API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
    /// エラーレスポンスの文言に使うロケール
    pub locale:  Locale,
}

impl TodoState {
    fn fail(&self, error: TodoError) -> LocalizedError {
        error.localized(self.locale)
    }
}

/// 作成・更新リクエストのボディ
///
/// `title` の欠落と `null` は空文字列として扱う。
#[derive(Debug, Deserialize)]
pub struct TodoRequest {
    #[serde(default)]
    pub title: Option<String>,
}

impl TodoRequest {
    fn into_title(self) -> String {
        self.title.unwrap_or_default()
    }
}

fn parse_body(
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<TodoRequest, TodoError> {
    payload
        .map(|Json(req)| req)
        .map_err(|rejection| TodoError::MalformedRequest(rejection.body_text()))
}

/// POST /todos
///
/// ## レスポンス
///
/// - `201 Created`: 作成されたアイテム
/// - `400 Bad Request`: タイトルが空、または重複
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, LocalizedError> {
    let input = CreateTodoInput {
        title: parse_body(payload).map_err(|e| state.fail(e))?.into_title(),
    };

    let item = state
        .usecase
        .create_todo(input)
        .await
        .map_err(|e| state.fail(e))?;

    Ok((StatusCode::CREATED, Json(item.to_view())))
}

/// GET /todos
///
/// 空の場合は `[]` を返す。
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<Json<Vec<TodoItemView>>, LocalizedError> {
    let items = state.usecase.list_todos().await.map_err(|e| state.fail(e))?;

    Ok(Json(items.iter().map(TodoItemView::from).collect()))
}

/// GET /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: アイテム
/// - `400 Bad Request`: ID の形式が不正
/// - `404 Not Found`: アイテムが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<Json<TodoItemView>, LocalizedError> {
    let item = state.usecase.get_todo(&id).await.map_err(|e| state.fail(e))?;

    Ok(Json(item.to_view()))
}

/// PUT /todos/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後のアイテム
/// - `400 Bad Request`: ID の形式が不正、またはタイトルが空
/// - `404 Not Found`: アイテムが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    payload: Result<Json<TodoRequest>, JsonRejection>,
) -> Result<Json<TodoItemView>, LocalizedError> {
    let input = UpdateTodoInput {
        title: parse_body(payload).map_err(|e| state.fail(e))?.into_title(),
    };

    let item = state
        .usecase
        .update_todo(&id, input)
        .await
        .map_err(|e| state.fail(e))?;

    Ok(Json(item.to_view()))
}

/// DELETE /todos/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 削除成功
/// - `400 Bad Request`: ID の形式が不正、またはアイテムが存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, LocalizedError> {
    state
        .usecase
        .delete_todo(&id)
        .await
        .map_err(|e| state.fail(e))?;

    Ok(StatusCode::NO_CONTENT)
}
