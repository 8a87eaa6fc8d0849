//! # UserRepository
//!
//! ユーザー情報の取得・作成・削除を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ユーザー名で検索**: API はユーザー名をキーにするため、ID 検索は提供しない
//! - **重複は Conflict**: `users.username` の UNIQUE 制約違反は
//!   [`InfraErrorKind::Conflict`](crate::InfraErrorKind::Conflict) として返す

use async_trait::async_trait;
use sqlx::PgPool;
use todolist_domain::user::{User, UserId, Username};

use crate::{db::TxContext, error::InfraError};

/// ユーザーリポジトリトレイト
#[async_trait]
pub trait UserRepository: Send + Sync {
   /// ユーザー名でユーザーを検索する
   async fn find_by_username(&self, username: &Username) -> Result<Option<User>, InfraError>;

   /// ユーザーを作成する
   ///
   /// 同じユーザー名が既に存在する場合は Conflict を返す。
   async fn insert(&self, tx: &mut TxContext, username: &Username) -> Result<User, InfraError>;

   /// ユーザーを削除し、削除件数を返す
   ///
   /// 並行する削除に先を越された場合は 0 を返す。
   async fn delete(&self, tx: &mut TxContext, id: UserId) -> Result<u64, InfraError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
   id:       i64,
   username: String,
}

impl TryFrom<UserRow> for User {
   type Error = InfraError;

   fn try_from(row: UserRow) -> Result<Self, Self::Error> {
      let username =
         Username::new(row.username).map_err(|e| InfraError::unexpected(e.to_string()))?;
      Ok(User::from_db(UserId::from_i64(row.id), username))
   }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
   pool: PgPool,
}

impl PostgresUserRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   async fn find_by_username(&self, username: &Username) -> Result<Option<User>, InfraError> {
      let row = sqlx::query_as::<_, UserRow>(
         r#"
            SELECT id, username
            FROM users
            WHERE username = $1
            "#,
      )
      .bind(username.as_str())
      .fetch_optional(&self.pool)
      .await?;

      row.map(User::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%username))]
   async fn insert(&self, tx: &mut TxContext, username: &Username) -> Result<User, InfraError> {
      let row = sqlx::query_as::<_, UserRow>(
         r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
      )
      .bind(username.as_str())
      .fetch_one(tx.conn())
      .await
      .map_err(|e| InfraError::from_write(e, "User", username.as_str()))?;

      User::try_from(row)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, tx: &mut TxContext, id: UserId) -> Result<u64, InfraError> {
      let result = sqlx::query("DELETE FROM users WHERE id = $1")
         .bind(id.as_i64())
         .execute(tx.conn())
         .await?;

      Ok(result.rows_affected())
   }
}
