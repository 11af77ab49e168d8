//! # Todo Service 設定
//!
//! 環境変数から Todo Service サーバーの設定を読み込む。

use std::{env, str::FromStr};

use strum::{Display, EnumString};
use thiserror::Error;
use todoflow_shared::Locale;

/// ストレージ実装の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL（`DATABASE_URL` が必須）
    Postgres,
    /// プロセス内メモリ（再起動で消える）
    Memory,
}

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} が設定されていません")]
    Missing { name: &'static str },

    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Todo Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    pub storage:      StorageBackend,
    /// データベース接続 URL（storage = postgres のとき必須）
    pub database_url: Option<String>,
    /// エラーメッセージのロケール
    pub locale:       Locale,
}

impl TodoConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TODO_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or("TODO_PORT", lookup("TODO_PORT"), 3000)?;
        let storage = parse_or(
            "TODO_STORAGE",
            lookup("TODO_STORAGE"),
            StorageBackend::Postgres,
        )?;

        let database_url = lookup("DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing {
                name: "DATABASE_URL",
            });
        }

        let locale = lookup("TODO_LOCALE")
            .map(|value| Locale::parse(&value))
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            storage,
            database_url,
            locale,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
