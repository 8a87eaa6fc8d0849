//! # ユースケース層
//!
//! TODO リスト API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラはトレイト経由で呼び出し、テストではスタブに差し替える
//! - **依存性注入**: リポジトリとトランザクションマネージャを外部から注入
//! - **薄いハンドラ**: ユーザーの存在確認やトランザクション境界はユースケースに集約

pub mod todo;

use async_trait::async_trait;
use todolist_domain::{
   todo::{NewTodoItem, TodoItem},
   user::User,
};
pub use todo::TodoUseCaseImpl;

use crate::error::ApiError;

/// TODO リストのユースケーストレイト
///
/// 引数の `username` は検証前の文字列を受け取り、
/// 長さ制約の違反は `ApiError::BadRequest` として返す。
#[async_trait]
pub trait TodoUseCase: Send + Sync {
   /// ユーザーの TODO 項目を挿入順で取得する
   ///
   /// ユーザーが存在しない場合は `ApiError::NotFound`。
   async fn list_todos(&self, username: &str) -> Result<Vec<TodoItem>, ApiError>;

   /// TODO 項目を持たないユーザーを作成する
   ///
   /// 同名のユーザーが既に存在する場合は `ApiError::Conflict`。
   async fn create_user(&self, username: &str) -> Result<User, ApiError>;

   /// TODO 項目を一括で追加し、保存した件数を返す
   ///
   /// 1 つのトランザクションで書き込み、途中で失敗した場合は何も残らない。
   async fn append_todos(&self, username: &str, todos: Vec<NewTodoItem>)
   -> Result<usize, ApiError>;

   /// ユーザーと所有する TODO 項目をすべて削除する
   async fn delete_user(&self, username: &str) -> Result<(), ApiError>;
}

#[async_trait]
impl TodoUseCase for TodoUseCaseImpl {
   async fn list_todos(&self, username: &str) -> Result<Vec<TodoItem>, ApiError> {
      self.list_todos(username).await
   }

   async fn create_user(&self, username: &str) -> Result<User, ApiError> {
      self.create_user(username).await
   }

   async fn append_todos(
      &self,
      username: &str,
      todos: Vec<NewTodoItem>,
   ) -> Result<usize, ApiError> {
      self.append_todos(username, todos).await
   }

   async fn delete_user(&self, username: &str) -> Result<(), ApiError> {
      self.delete_user(username).await
   }
}
