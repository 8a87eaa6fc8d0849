//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, Conflict, NotFound, Unexpected）
//!
//! `From<sqlx::Error>` や convenience constructor でエラーを生成すると、
//! その時点のスパン情報が自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::Conflict { entity, id } => { /* 重複 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// SQL クエリの実行失敗、接続エラー、一意制約以外の制約違反など。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 一意制約違反
   ///
   /// 同じユーザー名のユーザーが既に存在する場合など。
   #[error("競合が発生しました: {entity}(id={id})")]
   Conflict {
      /// エンティティ名（例: "User"）
      entity: String,
      /// 重複したキー
      id:     String,
   },

   /// 参照先が存在しない
   ///
   /// 書き込み中に外部キーの参照先が削除されていた場合など。
   #[error("見つかりません: {entity}(id={id})")]
   NotFound {
      /// エンティティ名（例: "User"）
      entity: String,
      /// 参照したキー
      id:     String,
   },

   /// 予期しないエラー
   ///
   /// DB に保存された値がドメインの制約を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// Conflict バリアントの場合、entity と id を返す
   pub fn as_conflict(&self) -> Option<(&str, &str)> {
      match &self.kind {
         InfraErrorKind::Conflict { entity, id } => Some((entity, id)),
         _ => None,
      }
   }

   /// NotFound バリアントの場合、entity と id を返す
   pub fn as_not_found(&self) -> Option<(&str, &str)> {
      match &self.kind {
         InfraErrorKind::NotFound { entity, id } => Some((entity, id)),
         _ => None,
      }
   }

   // ===== Convenience constructors =====

   /// 一意制約違反エラーを生成する
   pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
         },
         span_trace: SpanTrace::capture(),
      }
   }

   /// 参照先が存在しないエラーを生成する
   pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::NotFound {
            entity: entity.into(),
            id:     id.into(),
         },
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }

   /// sqlx エラーを変換する。一意制約違反は Conflict にする
   pub(crate) fn from_write(
      source: sqlx::Error,
      entity: impl Into<String>,
      id: impl Into<String>,
   ) -> Self {
      let unique_violation = source
         .as_database_error()
         .is_some_and(|db_err| db_err.is_unique_violation());

      if unique_violation {
         Self::conflict(entity, id)
      } else {
         source.into()
      }
   }

   /// sqlx エラーを変換する。外部キー違反は参照先の NotFound にする
   pub(crate) fn from_reference(
      source: sqlx::Error,
      entity: impl Into<String>,
      id: impl Into<String>,
   ) -> Self {
      let foreign_key_violation = source
         .as_database_error()
         .is_some_and(|db_err| db_err.is_foreign_key_violation());

      if foreign_key_violation {
         Self::not_found(entity, id)
      } else {
         source.into()
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}
