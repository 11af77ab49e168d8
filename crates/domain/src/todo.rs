//! # To-Do アイテム
//!
//! To-Do リストの 1 項目を表現するドメインモデル。
//!
//! 識別子はストレージ層が作成時に払い出す。呼び出し側は [`NewTodoItem`]
//! （タイトルのみを持つ属性バッグ）を渡し、ストレージ層が ID を割り当てた
//! [`TodoItem`] を受け取る。
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todoflow_domain::todo::{NewTodoItem, TodoItem, TodoItemId, TodoTitle};
//!
//! let new_item = NewTodoItem::new(TodoTitle::new("請求書を送る")?);
//!
//! // ストレージ層が ID を割り当てて復元する
//! let item = TodoItem::from_db(TodoItemId::new(), new_item.title);
//! assert_eq!(item.title().as_str(), "請求書を送る");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::DomainError;

define_uuid_id! {
    /// To-Do アイテムの一意識別子
    ///
    /// 作成後は不変。参照・更新・削除の唯一のキーとなる。
    pub struct TodoItemId;
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// To-Do アイテムのタイトル（値オブジェクト）
///
/// 利用者が入力する唯一の可変属性。
///
/// # 不変条件
///
/// - 空文字列ではない
///
/// 空白のみのタイトルも受け付ける。入力値は trim せずにそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "タイトルを入力してください".to_string(),
            ));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =========================================================================
// TodoItem（To-Do アイテムエンティティ）
// =========================================================================

/// 永続化前の To-Do アイテム
///
/// ID はまだ割り当てられていない。リポジトリの `save` に渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: TodoTitle,
}

impl NewTodoItem {
    pub fn new(title: TodoTitle) -> Self {
        Self { title }
    }
}

/// To-Do アイテムエンティティ
///
/// # 不変条件
///
/// - `id` はストレージ層が割り当て、以後変更されない
/// - `title` は常に [`TodoTitle`] の不変条件を満たす
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id:    TodoItemId,
    title: TodoTitle,
}

impl TodoItem {
    /// ストレージから To-Do アイテムを復元する
    pub fn from_db(id: TodoItemId, title: TodoTitle) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> &TodoItemId {
        &self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    /// タイトルを差し替えた新しいインスタンスを返す
    pub fn with_title(self, title: TodoTitle) -> Self {
        Self { title, ..self }
    }

    /// 公開用の表現 `{id, title}` に変換する
    pub fn to_view(&self) -> TodoItemView {
        TodoItemView::from(self)
    }
}

/// To-Do アイテムの公開ビュー
///
/// HTTP レスポンスなど、外部に送出する際の形状。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItemView {
    pub id:    String,
    pub title: String,
}

impl From<&TodoItem> for TodoItemView {
    fn from(item: &TodoItem) -> Self {
        Self {
            id:    item.id.to_string(),
            title: item.title.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    // ===== TodoTitle =====

    #[rstest]
    #[case("牛乳を買う")]
    #[case("a")]
    #[case("  前後に空白がある  ")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_空でないタイトルはそのまま保持される(#[case] input: &str) {
        let title = TodoTitle::new(input).unwrap();

        assert_eq!(title.as_str(), input);
    }

    #[test]
    fn test_空のタイトルはエラーになる() {
        let result = TodoTitle::new("");

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_シリアライズは文字列そのものになる() {
        let title = TodoTitle::new("請求書を送る").unwrap();

        assert_eq!(
            serde_json::to_value(&title).unwrap(),
            serde_json::json!("請求書を送る")
        );
    }

    // ===== TodoItemId =====

    #[rstest]
    #[case("2114071")]
    #[case("hdjkfffm8efe")]
    #[case("60e6a930d1df5518e185ba05")]
    #[case("")]
    fn test_uuidとして解釈できない文字列はnoneを返す(#[case] input: &str) {
        assert_eq!(TodoItemId::parse(input), None);
    }

    #[test]
    fn test_displayした文字列からidを復元できる() {
        let id = TodoItemId::new();

        let restored = TodoItemId::parse(&id.to_string());

        assert_eq!(restored, Some(id));
    }

    // ===== TodoItem =====

    #[test]
    fn test_with_titleはidを保持したままタイトルを差し替える() {
        let id = TodoItemId::new();
        let item = TodoItem::from_db(id.clone(), TodoTitle::new("変更前").unwrap());

        let updated = item.with_title(TodoTitle::new("変更後").unwrap());

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.title().as_str(), "変更後");
    }

    #[test]
    fn test_to_viewはidとtitleのみをjsonに含める() {
        let id = TodoItemId::new();
        let item = TodoItem::from_db(id.clone(), TodoTitle::new("請求書を送る").unwrap());

        let json = serde_json::to_value(item.to_view()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": id.to_string(),
                "title": "請求書を送る"
            })
        );
    }
}
