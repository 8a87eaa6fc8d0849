//! # TODO リストユースケース
//!
//! ユーザーの存在確認とトランザクション境界を担当する。
//!
//! 書き込み系の操作（一括追加・削除）は、ユーザーの存在を書き込み前に確認する。
//! 存在しない場合は何も書き込まずに `ApiError::NotFound` を返す。

use std::sync::Arc;

use todolist_domain::{
   todo::{NewTodoItem, TodoItem},
   user::{User, Username},
};
use todolist_infra::{
   TransactionManager,
   repository::{TodoItemRepository, UserRepository},
};

use crate::error::ApiError;

/// TODO リストユースケースの実装
pub struct TodoUseCaseImpl {
   user_repository:      Arc<dyn UserRepository>,
   todo_item_repository: Arc<dyn TodoItemRepository>,
   tx_manager:           Arc<dyn TransactionManager>,
}

impl TodoUseCaseImpl {
   /// 新しいユースケースインスタンスを作成
   pub fn new(
      user_repository: Arc<dyn UserRepository>,
      todo_item_repository: Arc<dyn TodoItemRepository>,
      tx_manager: Arc<dyn TransactionManager>,
   ) -> Self {
      Self {
         user_repository,
         todo_item_repository,
         tx_manager,
      }
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   pub async fn list_todos(&self, username: &str) -> Result<Vec<TodoItem>, ApiError> {
      let user = self.find_user(username).await?;
      let todos = self.todo_item_repository.find_by_user(user.id()).await?;
      Ok(todos)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   pub async fn create_user(&self, username: &str) -> Result<User, ApiError> {
      let username = Username::new(username)?;

      let mut tx = self.tx_manager.begin().await?;
      let user = self
         .user_repository
         .insert(&mut tx, &username)
         .await
         .map_err(|e| {
            if e.as_conflict().is_some() {
               ApiError::Conflict(format!("ユーザー {username} は既に存在します"))
            } else {
               ApiError::Database(e)
            }
         })?;
      tx.commit().await?;

      tracing::info!(user_id = %user.id(), "ユーザーを作成しました");
      Ok(user)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   pub async fn append_todos(
      &self,
      username: &str,
      todos: Vec<NewTodoItem>,
   ) -> Result<usize, ApiError> {
      let user = self.find_user(username).await?;

      let mut tx = self.tx_manager.begin().await?;
      let inserted = self
         .todo_item_repository
         .insert_many(&mut tx, user.id(), &todos)
         .await
         .map_err(|e| {
            if e.as_not_found().is_some() {
               Self::user_not_found(username)
            } else {
               ApiError::Database(e)
            }
         })?;
      tx.commit().await?;

      tracing::info!(user_id = %user.id(), count = inserted.len(), "TODO を追加しました");
      Ok(inserted.len())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   pub async fn delete_user(&self, username: &str) -> Result<(), ApiError> {
      let user = self.find_user(username).await?;

      // todo_items は users を参照しているため先に削除する
      let mut tx = self.tx_manager.begin().await?;
      let deleted = self
         .todo_item_repository
         .delete_by_user(&mut tx, user.id())
         .await?;
      if self.user_repository.delete(&mut tx, user.id()).await? == 0 {
         // 並行する削除に先を越された。tx はドロップでロールバックされる
         return Err(Self::user_not_found(username));
      }
      tx.commit().await?;

      tracing::info!(user_id = %user.id(), deleted, "ユーザーを削除しました");
      Ok(())
   }

   /// 既存ユーザーを取得する
   ///
   /// ユーザー名の制約を満たさない名前は保存されていることがないため、
   /// 検証エラーではなく NotFound として扱う。
   async fn find_user(&self, username: &str) -> Result<User, ApiError> {
      let Ok(valid) = Username::new(username) else {
         return Err(Self::user_not_found(username));
      };
      self
         .user_repository
         .find_by_username(&valid)
         .await?
         .ok_or_else(|| Self::user_not_found(username))
   }

   fn user_not_found(username: &str) -> ApiError {
      ApiError::NotFound(format!("ユーザー {username} が見つかりません"))
   }
}
