//! # 入力バリデーション
//!
//! エンドポイントごとの入力検証ルール。
//!
//! | エンドポイント | 検証内容 |
//! |---|---|
//! | create | タイトルが空でない、同じタイトルのアイテムが存在しない |
//! | delete | ID の形式が正しい、その ID のアイテムが存在する |
//! | update | ID の形式が正しい、タイトルが空でない |
//! | fetch  | ID の形式が正しい |
//!
//! 1 リクエスト内の失敗はフィールド単位で打ち切らず、検出順に蓄積して返す。
//! ただし形式不正の ID でリポジトリを検索することはない。
//!
//! 失敗はエラーではなくデータとして返す。`Err` になるのは
//! リポジトリ参照自体が失敗した場合のみ。

use serde::Serialize;
use strum::IntoStaticStr;
use todoflow_domain::todo::{TodoItemId, TodoTitle};
use todoflow_infra::{
    InfraError,
    repository::{TodoFilter, TodoRepository},
};

/// クライアント側で翻訳されるバリデーションエラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum FailureCode {
    #[serde(rename = "VALIDATION_ERRORS.INVALID_TITLE")]
    #[strum(serialize = "VALIDATION_ERRORS.INVALID_TITLE")]
    InvalidTitle,
    #[serde(rename = "VALIDATION_ERRORS.DUPLICATE_ENTRY")]
    #[strum(serialize = "VALIDATION_ERRORS.DUPLICATE_ENTRY")]
    DuplicateEntry,
    #[serde(rename = "VALIDATION_ERRORS.INVALID_ID")]
    #[strum(serialize = "VALIDATION_ERRORS.INVALID_ID")]
    InvalidId,
    /// 削除対象の ID が形式不正、または存在しない
    #[serde(rename = "The specified todo ID is not a valid one. Please provide a valid one.")]
    #[strum(serialize = "The specified todo ID is not a valid one. Please provide a valid one.")]
    UnknownTodoId,
}

impl FailureCode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// バリデーション失敗の 1 項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field:   &'static str,
    pub message: FailureCode,
}

impl ValidationFailure {
    fn new(field: &'static str, message: FailureCode) -> Self {
        Self { field, message }
    }
}

fn is_valid_title(title: &str) -> bool {
    TodoTitle::new(title).is_ok()
}

/// POST /todos の検証
pub async fn validate_create(
    repository: &dyn TodoRepository,
    title: &str,
) -> Result<Vec<ValidationFailure>, InfraError> {
    let mut failures = Vec::new();

    if !is_valid_title(title) {
        failures.push(ValidationFailure::new("title", FailureCode::InvalidTitle));
        return Ok(failures);
    }

    if repository
        .find_one(&TodoFilter::by_title(title))
        .await?
        .is_some()
    {
        failures.push(ValidationFailure::new("title", FailureCode::DuplicateEntry));
    }

    Ok(failures)
}

/// DELETE /todos/:id の検証
///
/// 形式チェックと存在チェックの 2 段で、どちらの失敗も同じコードで報告する。
/// 形式不正の ID は検索せず、存在しないものとして両方の失敗を積む。
pub async fn validate_delete(
    repository: &dyn TodoRepository,
    id: &str,
) -> Result<Vec<ValidationFailure>, InfraError> {
    let mut failures = Vec::new();

    let exists = match TodoItemId::parse(id) {
        Some(id) => repository.find_one(&TodoFilter::by_id(id)).await?.is_some(),
        None => {
            failures.push(ValidationFailure::new("id", FailureCode::UnknownTodoId));
            false
        }
    };
    if !exists {
        failures.push(ValidationFailure::new("id", FailureCode::UnknownTodoId));
    }

    Ok(failures)
}

/// PUT /todos/:id の検証
///
/// 存在確認は行わない（更新結果が空なら呼び出し側で NotFound とする）。
pub fn validate_update(id: &str, title: &str) -> Vec<ValidationFailure> {
    let mut failures = validate_fetch(id);
    if !is_valid_title(title) {
        failures.push(ValidationFailure::new("title", FailureCode::InvalidTitle));
    }
    failures
}

/// GET /todos/:id の検証
pub fn validate_fetch(id: &str) -> Vec<ValidationFailure> {
    if TodoItemId::parse(id).is_some() {
        Vec::new()
    } else {
        vec![ValidationFailure::new("id", FailureCode::InvalidId)]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todoflow_domain::todo::NewTodoItem;
    use todoflow_infra::InMemoryTodoRepository;

    use super::*;

    async fn repository_with(titles: &[&str]) -> (InMemoryTodoRepository, Vec<TodoItemId>) {
        let repository = InMemoryTodoRepository::new();
        let mut ids = Vec::new();
        for title in titles {
            let item = repository
                .save(&NewTodoItem::new(TodoTitle::new(*title).unwrap()))
                .await
                .unwrap();
            ids.push(item.id().clone());
        }
        (repository, ids)
    }

    #[rstest]
    #[case(FailureCode::InvalidTitle, "VALIDATION_ERRORS.INVALID_TITLE")]
    #[case(FailureCode::DuplicateEntry, "VALIDATION_ERRORS.DUPLICATE_ENTRY")]
    #[case(FailureCode::InvalidId, "VALIDATION_ERRORS.INVALID_ID")]
    #[case(
        FailureCode::UnknownTodoId,
        "The specified todo ID is not a valid one. Please provide a valid one."
    )]
    fn test_failure_codeはserdeとas_strで同じ文字列になる(
        #[case] code: FailureCode,
        #[case] expected: &str,
    ) {
        assert_eq!(code.as_str(), expected);
        assert_eq!(serde_json::to_value(code).unwrap(), serde_json::json!(expected));
    }

    #[tokio::test]
    async fn test_validate_create_新しいタイトルは失敗なし() {
        let (repository, _) = repository_with(&["牛乳を買う"]).await;

        let failures = validate_create(&repository, "卵を買う").await.unwrap();

        assert!(failures.is_empty());
    }

    #[tokio::test]
    async fn test_validate_create_空のタイトルはinvalid_title() {
        let (repository, _) = repository_with(&[]).await;

        let failures = validate_create(&repository, "").await.unwrap();

        assert_eq!(
            failures,
            vec![ValidationFailure::new("title", FailureCode::InvalidTitle)]
        );
    }

    #[tokio::test]
    async fn test_validate_create_空白のみのタイトルは空ではないので通る() {
        let (repository, _) = repository_with(&["牛乳を買う"]).await;

        let failures = validate_create(&repository, "   ").await.unwrap();

        assert!(failures.is_empty());
    }

    #[tokio::test]
    async fn test_validate_create_既存タイトルはduplicate_entry() {
        let (repository, _) = repository_with(&["牛乳を買う"]).await;

        let failures = validate_create(&repository, "牛乳を買う").await.unwrap();

        assert_eq!(
            failures,
            vec![ValidationFailure::new("title", FailureCode::DuplicateEntry)]
        );
    }

    #[tokio::test]
    async fn test_validate_delete_存在するidは失敗なし() {
        let (repository, ids) = repository_with(&["牛乳を買う"]).await;

        let failures = validate_delete(&repository, &ids[0].to_string())
            .await
            .unwrap();

        assert!(failures.is_empty());
    }

    #[rstest]
    #[case("2114071", 2)]
    #[case("", 2)]
    #[case("01890a5d-ac96-774b-bcce-b302099a8057", 1)]
    #[tokio::test]
    async fn test_validate_delete_形式不正または不存在のidは同じコード(
        #[case] id: &str,
        #[case] expected_count: usize,
    ) {
        let (repository, _) = repository_with(&["牛乳を買う"]).await;

        let failures = validate_delete(&repository, id).await.unwrap();

        // 形式不正は形式チェックと存在チェックの両方で失敗する
        assert_eq!(
            failures,
            vec![ValidationFailure::new("id", FailureCode::UnknownTodoId); expected_count]
        );
    }

    #[test]
    fn test_validate_update_idとタイトルの失敗を両方蓄積する() {
        let failures = validate_update("not-a-uuid", "");

        assert_eq!(
            failures,
            vec![
                ValidationFailure::new("id", FailureCode::InvalidId),
                ValidationFailure::new("title", FailureCode::InvalidTitle),
            ]
        );
    }

    #[test]
    fn test_validate_update_正しい入力は失敗なし() {
        let id = TodoItemId::new().to_string();

        assert!(validate_update(&id, "洗濯する").is_empty());
    }

    #[rstest]
    #[case("2114071", false)]
    #[case("abc", false)]
    #[case("01890a5d-ac96-774b-bcce-b302099a8057", true)]
    fn test_validate_fetch_idの形式のみ検証する(#[case] id: &str, #[case] valid: bool) {
        assert_eq!(validate_fetch(id).is_empty(), valid);
    }
}
