//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError / InfraError / JsonRejection
//!        ↓ From
//! ApiError
//!        ↓ IntoResponse
//! HTTP レスポンス (StatusCode + RFC 9457 JSON)
//! ```
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | NotFound | 404 |
//! | BadRequest | 400 |
//! | Conflict | 409 |
//! | Database | 500 |

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todolist_domain::DomainError;
use todolist_infra::InfraError;
use todolist_shared::ErrorResponse;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 不正なリクエスト（JSON 配列でないボディ、制約違反の値など）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// 一意制約違反
   #[error("競合が発生しました: {0}")]
   Conflict(String),

   /// データベースエラー
   ///
   /// 内部エラーの詳細はクライアントに返さず、ログにのみ出力する。
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => ApiError::BadRequest(msg),
      }
   }
}

impl From<JsonRejection> for ApiError {
   fn from(rejection: JsonRejection) -> Self {
      ApiError::BadRequest(rejection.body_text())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let error_response = match &self {
         ApiError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
         ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
         ApiError::Conflict(msg) => ErrorResponse::conflict(msg.clone()),
         ApiError::Database(e) => {
            tracing::error!(
               error.kind = "database",
               span_trace = %e.span_trace(),
               "データベースエラー: {}",
               e
            );
            ErrorResponse::internal_error()
         }
      };

      let status =
         StatusCode::from_u16(error_response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

      (status, Json(error_response)).into_response()
   }
}
