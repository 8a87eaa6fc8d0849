//! # TodoItemRepository
//!
//! TODO 項目の一覧取得・一括追加・所有者単位の削除を担当するリポジトリ。
//!
//! 一覧は挿入順（`id` 昇順）で返す。

use async_trait::async_trait;
use sqlx::PgPool;
use todolist_domain::{
   todo::{NewTodoItem, TodoItem, TodoItemId, TodoLabel},
   user::UserId,
};

use crate::{db::TxContext, error::InfraError};

/// TODO 項目リポジトリトレイト
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
   /// ユーザーが所有する TODO 項目を挿入順で取得する
   async fn find_by_user(&self, user_id: UserId) -> Result<Vec<TodoItem>, InfraError>;

   /// TODO 項目をまとめて挿入する
   ///
   /// 戻り値は挿入順に並ぶ。コミットするかどうかは呼び出し側が決める。
   /// 所有者が並行して削除されていた場合は NotFound を返す。
   async fn insert_many(
      &self,
      tx: &mut TxContext,
      user_id: UserId,
      items: &[NewTodoItem],
   ) -> Result<Vec<TodoItem>, InfraError>;

   /// ユーザーが所有する TODO 項目をすべて削除し、削除件数を返す
   async fn delete_by_user(&self, tx: &mut TxContext, user_id: UserId)
   -> Result<u64, InfraError>;
}

#[derive(sqlx::FromRow)]
struct TodoItemRow {
   id:      i64,
   user_id: i64,
   label:   String,
   done:    bool,
}

impl TryFrom<TodoItemRow> for TodoItem {
   type Error = InfraError;

   fn try_from(row: TodoItemRow) -> Result<Self, Self::Error> {
      let label = TodoLabel::new(row.label).map_err(|e| InfraError::unexpected(e.to_string()))?;
      Ok(TodoItem::from_db(
         TodoItemId::from_i64(row.id),
         UserId::from_i64(row.user_id),
         label,
         row.done,
      ))
   }
}

/// PostgreSQL 実装の TodoItemRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoItemRepository {
   pool: PgPool,
}

impl PostgresTodoItemRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TodoItemRepository for PostgresTodoItemRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
   async fn find_by_user(&self, user_id: UserId) -> Result<Vec<TodoItem>, InfraError> {
      let rows = sqlx::query_as::<_, TodoItemRow>(
         r#"
            SELECT id, user_id, label, done
            FROM todo_items
            WHERE user_id = $1
            ORDER BY id
            "#,
      )
      .bind(user_id.as_i64())
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(TodoItem::try_from).collect()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%user_id, count = items.len()))]
   async fn insert_many(
      &self,
      tx: &mut TxContext,
      user_id: UserId,
      items: &[NewTodoItem],
   ) -> Result<Vec<TodoItem>, InfraError> {
      let mut inserted = Vec::with_capacity(items.len());

      for item in items {
         let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
                INSERT INTO todo_items (label, done, user_id)
                VALUES ($1, $2, $3)
                RETURNING id, user_id, label, done
                "#,
         )
         .bind(item.label().as_str())
         .bind(item.done())
         .bind(user_id.as_i64())
         .fetch_one(tx.conn())
         .await
         .map_err(|e| InfraError::from_reference(e, "User", user_id.to_string()))?;

         inserted.push(TodoItem::try_from(row)?);
      }

      Ok(inserted)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
   async fn delete_by_user(
      &self,
      tx: &mut TxContext,
      user_id: UserId,
   ) -> Result<u64, InfraError> {
      let result = sqlx::query("DELETE FROM todo_items WHERE user_id = $1")
         .bind(user_id.as_i64())
         .execute(tx.conn())
         .await?;

      Ok(result.rows_affected())
   }
}
