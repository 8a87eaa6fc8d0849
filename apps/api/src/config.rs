//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `DB_CONNECTION_STRING` | **Yes** | - | PostgreSQL 接続 URL |
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `3000` | ポート番号 |
//! | `DB_MAX_CONNECTIONS` | No | `10` | 接続プールの最大接続数 |
//!
//! ログ関連（`RUST_LOG`, `LOG_FORMAT`）は [`todolist_shared::observability`] が読む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 必須の環境変数が未設定
   #[error("{0} が設定されていません")]
   Missing(&'static str),

   /// 値をパースできない
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host:               String,
   /// ポート番号
   pub port:               u16,
   /// データベース接続 URL
   pub database_url:       String,
   /// 接続プールの最大接続数
   pub db_max_connections: u32,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|key| env::var(key).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// テストではプロセスの環境変数を書き換えずに済むよう、`HashMap` などを渡す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let database_url =
         lookup("DB_CONNECTION_STRING").ok_or(ConfigError::Missing("DB_CONNECTION_STRING"))?;

      Ok(Self {
         host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?,
         database_url,
         db_max_connections: parse_or(
            "DB_MAX_CONNECTIONS",
            lookup("DB_MAX_CONNECTIONS"),
            DEFAULT_DB_MAX_CONNECTIONS,
         )?,
      })
   }
}

fn parse_or<T: std::str::FromStr>(
   name: &'static str,
   value: Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match value {
      None => Ok(default),
      Some(value) => value
         .parse()
         .map_err(|_| ConfigError::Invalid { name, value }),
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = pairs
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      move |key: &str| map.get(key).cloned()
   }

   #[test]
   fn test_必須項目のみでデフォルト値が使われる() {
      let config =
         ApiConfig::from_lookup(lookup_from(&[("DB_CONNECTION_STRING", "postgres://db")])).unwrap();

      assert_eq!(
         config,
         ApiConfig {
            host:               "0.0.0.0".to_string(),
            port:               3000,
            database_url:       "postgres://db".to_string(),
            db_max_connections: 10,
         }
      );
   }

   #[test]
   fn test_すべての項目を上書きできる() {
      let config = ApiConfig::from_lookup(lookup_from(&[
         ("DB_CONNECTION_STRING", "postgres://db"),
         ("HOST", "127.0.0.1"),
         ("PORT", "8080"),
         ("DB_MAX_CONNECTIONS", "4"),
      ]))
      .unwrap();

      assert_eq!(config.host, "127.0.0.1");
      assert_eq!(config.port, 8080);
      assert_eq!(config.db_max_connections, 4);
   }

   #[test]
   fn test_接続文字列がなければエラー() {
      let result = ApiConfig::from_lookup(lookup_from(&[("PORT", "8080")]));

      assert_eq!(result, Err(ConfigError::Missing("DB_CONNECTION_STRING")));
   }

   #[test]
   fn test_不正なポート番号はエラー() {
      let result = ApiConfig::from_lookup(lookup_from(&[
         ("DB_CONNECTION_STRING", "postgres://db"),
         ("PORT", "not-a-port"),
      ]));

      assert_eq!(
         result,
         Err(ConfigError::Invalid {
            name:  "PORT",
            value: "not-a-port".to_string(),
         })
      );
   }
}
