//! # Todolist ドメイン層
//!
//! ユーザーと TODO 項目のエンティティ、値オブジェクト、ドメインエラーを定義する。
//!
//! ## 設計方針
//!
//! - **永続化からの独立**: このクレートは sqlx や axum に依存しない
//! - **値オブジェクトで検証**: ユーザー名・ラベルの長さ制約は生成時に検証する
//! - **Newtype パターン**: ID を `i64` のまま扱わず、型で取り違えを防ぐ
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘           ↗
//!     ─────────
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティとユーザー名
//! - [`todo`] - TODO 項目エンティティとラベル
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::{
//!     todo::{NewTodoItem, TodoLabel},
//!     user::Username,
//! };
//!
//! let username = Username::new("alice").unwrap();
//! let todo = NewTodoItem::new(TodoLabel::new("buy milk").unwrap(), false);
//!
//! assert_eq!(username.as_str(), "alice");
//! assert!(!todo.done());
//! ```

pub mod error;
pub mod todo;
pub mod user;

pub use error::DomainError;
