//! # Todolist 共有ユーティリティ
//!
//! このクレートは、Todolist プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum に依存しない（`IntoResponse` 変換は API クレートの責務）

pub mod api_response;
pub mod error_response;
pub mod health;
pub mod observability;

pub use api_response::{ApiResponse, ResultMessage};
pub use error_response::ErrorResponse;
pub use health::HealthResponse;
