//! # ユーザー
//!
//! TODO 項目の所有者であるユーザーエンティティと、その識別子・ユーザー名を定義する。
//!
//! ## 設計方針
//!
//! - **ユーザー名で一意**: URL パスのユーザー名で検索するため、一意性はストアの
//!   UNIQUE 制約で保証する
//! - **ID はストアが採番**: `UserId` は DB から取得した値からのみ作成する
//! - **TODO は保持しない**: 所有する TODO 項目は `user_id` で別途取得する

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// ユーザー名の最大文字数（`users.username VARCHAR(80)`）
pub const USERNAME_MAX_CHARS: usize = 80;

/// ユーザー ID（ストアが採番する整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserId(i64);

impl UserId {
   /// DB から取得した値からユーザー ID を作成する
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// ユーザー名（値オブジェクト）
///
/// 生成時に長さを検証し、ストアの列制約に違反する値を作らない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct Username(String);

impl Username {
   /// ユーザー名を作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない
   /// - 最大 80 文字
   /// - NUL 文字を含まない（PostgreSQL の text 型に保存できない）
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.is_empty() {
         return Err(DomainError::Validation("ユーザー名は必須です".to_string()));
      }

      if value.chars().count() > USERNAME_MAX_CHARS {
         return Err(DomainError::Validation(format!(
            "ユーザー名は{USERNAME_MAX_CHARS}文字以内である必要があります"
         )));
      }

      if value.contains('\0') {
         return Err(DomainError::Validation(
            "ユーザー名に NUL 文字は使用できません".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// ユーザーエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
   id:       UserId,
   username: Username,
}

impl User {
   /// DB から取得した値でユーザーを復元する
   pub fn from_db(id: UserId, username: Username) -> Self {
      Self { id, username }
   }

   pub fn id(&self) -> UserId {
      self.id
   }

   pub fn username(&self) -> &Username {
      &self.username
   }
}
