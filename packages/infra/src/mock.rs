//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todolist-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 書き込みは [`TxContext`] に積まれ、`commit()` したときだけ反映される。
//! コミットせずにドロップすると何も残らないため、失敗を注入する
//! [`MockTodoItemRepository::fail_after`] と組み合わせてバッチの原子性を検証できる。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todolist_domain::{
   todo::{NewTodoItem, TodoItem, TodoItemId},
   user::{User, UserId, Username},
};

use crate::{
   db::{TransactionManager, TxContext},
   error::InfraError,
   repository::{TodoItemRepository, UserRepository},
};

// ===== MockTransactionManager =====

pub struct MockTransactionManager;

#[async_trait]
impl TransactionManager for MockTransactionManager {
   async fn begin(&self) -> Result<TxContext, InfraError> {
      Ok(TxContext::mock())
   }
}

// ===== MockUserRepository =====

#[derive(Clone, Default)]
pub struct MockUserRepository {
   users:   Arc<Mutex<Vec<User>>>,
   next_id: Arc<Mutex<i64>>,
}

impl MockUserRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// ユーザーを登録し、採番されたユーザーを返す
   pub fn add_user(&self, username: &str) -> User {
      let mut next_id = self.next_id.lock().unwrap();
      *next_id += 1;
      let user = User::from_db(
         UserId::from_i64(*next_id),
         Username::new(username).unwrap(),
      );
      self.users.lock().unwrap().push(user.clone());
      user
   }

   pub fn users(&self) -> Vec<User> {
      self.users.lock().unwrap().clone()
   }
}

#[async_trait]
impl UserRepository for MockUserRepository {
   async fn find_by_username(&self, username: &Username) -> Result<Option<User>, InfraError> {
      Ok(self
         .users
         .lock()
         .unwrap()
         .iter()
         .find(|u| u.username() == username)
         .cloned())
   }

   async fn insert(&self, tx: &mut TxContext, username: &Username) -> Result<User, InfraError> {
      let exists = self
         .users
         .lock()
         .unwrap()
         .iter()
         .any(|u| u.username() == username);
      if exists {
         return Err(InfraError::conflict("User", username.as_str()));
      }

      let user = {
         let mut next_id = self.next_id.lock().unwrap();
         *next_id += 1;
         User::from_db(UserId::from_i64(*next_id), username.clone())
      };
      let users = self.users.clone();
      let staged = user.clone();
      tx.stage(move || users.lock().unwrap().push(staged));
      Ok(user)
   }

   async fn delete(&self, tx: &mut TxContext, id: UserId) -> Result<u64, InfraError> {
      let exists = self.users.lock().unwrap().iter().any(|u| u.id() == id);
      if !exists {
         return Ok(0);
      }

      let users = self.users.clone();
      tx.stage(move || users.lock().unwrap().retain(|u| u.id() != id));
      Ok(1)
   }
}

// ===== MockTodoItemRepository =====

#[derive(Clone, Default)]
pub struct MockTodoItemRepository {
   items:      Arc<Mutex<Vec<TodoItem>>>,
   next_id:    Arc<Mutex<i64>>,
   fail_after: Arc<Mutex<Option<usize>>>,
}

impl MockTodoItemRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 以降の `insert_many` を、`count` 件を書き込んだ時点で失敗させる
   ///
   /// 書き込み済みの項目はトランザクションに積まれたままになるため、
   /// 呼び出し側がコミットしなければ何も残らない。
   pub fn fail_after(&self, count: usize) {
      *self.fail_after.lock().unwrap() = Some(count);
   }

   pub fn items(&self) -> Vec<TodoItem> {
      self.items.lock().unwrap().clone()
   }
}

#[async_trait]
impl TodoItemRepository for MockTodoItemRepository {
   async fn find_by_user(&self, user_id: UserId) -> Result<Vec<TodoItem>, InfraError> {
      Ok(self
         .items
         .lock()
         .unwrap()
         .iter()
         .filter(|item| item.user_id() == user_id)
         .cloned()
         .collect())
   }

   async fn insert_many(
      &self,
      tx: &mut TxContext,
      user_id: UserId,
      items: &[NewTodoItem],
   ) -> Result<Vec<TodoItem>, InfraError> {
      let fail_after = *self.fail_after.lock().unwrap();
      let mut inserted = Vec::with_capacity(items.len());

      for (index, item) in items.iter().enumerate() {
         if fail_after == Some(index) {
            return Err(InfraError::unexpected("insert failed"));
         }

         let todo = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            TodoItem::from_db(
               TodoItemId::from_i64(*next_id),
               user_id,
               item.label().clone(),
               item.done(),
            )
         };
         let store = self.items.clone();
         let staged = todo.clone();
         tx.stage(move || store.lock().unwrap().push(staged));
         inserted.push(todo);
      }

      Ok(inserted)
   }

   async fn delete_by_user(&self, tx: &mut TxContext, user_id: UserId) -> Result<u64, InfraError> {
      let count = self
         .items
         .lock()
         .unwrap()
         .iter()
         .filter(|item| item.user_id() == user_id)
         .count();

      let store = self.items.clone();
      tx.stage(move || {
         store
            .lock()
            .unwrap()
            .retain(|item| item.user_id() != user_id);
      });
      Ok(count as u64)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use todolist_domain::todo::TodoLabel;

   use super::*;

   fn new_todo(label: &str) -> NewTodoItem {
      NewTodoItem::new(TodoLabel::new(label).unwrap(), false)
   }

   #[tokio::test]
   async fn test_途中で失敗した一括挿入はコミットしなければ何も残らない() {
      let sut = MockTodoItemRepository::new();
      sut.fail_after(1);

      let mut tx = TxContext::mock();
      let result = sut
         .insert_many(&mut tx, UserId::from_i64(1), &[new_todo("a"), new_todo("b")])
         .await;
      drop(tx);

      assert!(result.is_err());
      assert!(sut.items().is_empty());
   }

   #[tokio::test]
   async fn test_一括挿入はコミットで反映される() {
      let sut = MockTodoItemRepository::new();

      let mut tx = TxContext::mock();
      sut.insert_many(&mut tx, UserId::from_i64(1), &[new_todo("a"), new_todo("b")])
         .await
         .unwrap();
      assert!(sut.items().is_empty());
      tx.commit().await.unwrap();

      assert_eq!(sut.items().len(), 2);
   }

   #[tokio::test]
   async fn test_存在しないユーザーの削除件数は0() {
      let sut = MockUserRepository::new();

      let mut tx = TxContext::mock();
      let deleted = sut.delete(&mut tx, UserId::from_i64(42)).await.unwrap();

      assert_eq!(deleted, 0);
   }
}
