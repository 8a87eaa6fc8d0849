//! # リポジトリ実装
//!
//! ユーザーと TODO 項目の永続化を担当するリポジトリを提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存し、`Arc<dyn ...>` で注入される
//! - **書き込みはトランザクション必須**: 書き込みメソッドは `&mut TxContext` を要求する
//! - **テスタビリティ**: トレイト経由でモック可能な設計（`mock` モジュール）

pub mod todo_item_repository;
pub mod user_repository;

pub use todo_item_repository::{PostgresTodoItemRepository, TodoItemRepository};
pub use user_repository::{PostgresUserRepository, UserRepository};
