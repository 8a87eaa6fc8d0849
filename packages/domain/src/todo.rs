//! # TODO 項目
//!
//! ユーザーが所有するラベル付きタスクと、その完了フラグを定義する。
//!
//! ## ライフサイクル
//!
//! 1. クライアントが送信した `{label, done}` から [`NewTodoItem`] を作る
//! 2. リポジトリが所有者の `user_id` を付けて挿入し、[`TodoItem`] を返す
//! 3. 所有者の削除時に、所有者より先にまとめて削除される
//!
//! 個別の更新・削除操作は提供しない。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{DomainError, user::UserId};

/// ラベルの最大文字数（`todo_items.label VARCHAR(250)`）
pub const LABEL_MAX_CHARS: usize = 250;

/// TODO 項目 ID（ストアが採番する整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoItemId(i64);

impl TodoItemId {
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

/// TODO ラベル（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TodoLabel(String);

impl TodoLabel {
   /// ラベルを作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない
   /// - 最大 250 文字
   /// - NUL 文字を含まない
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.is_empty() {
         return Err(DomainError::Validation("ラベルは必須です".to_string()));
      }

      if value.chars().count() > LABEL_MAX_CHARS {
         return Err(DomainError::Validation(format!(
            "ラベルは{LABEL_MAX_CHARS}文字以内である必要があります"
         )));
      }

      if value.contains('\0') {
         return Err(DomainError::Validation(
            "ラベルに NUL 文字は使用できません".to_string(),
         ));
      }

      Ok(Self(value))
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 挿入前の TODO 項目
///
/// ID と所有者はまだ決まっていない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
   label: TodoLabel,
   done:  bool,
}

impl NewTodoItem {
   pub fn new(label: TodoLabel, done: bool) -> Self {
      Self { label, done }
   }

   pub fn label(&self) -> &TodoLabel {
      &self.label
   }

   pub fn done(&self) -> bool {
      self.done
   }
}

/// TODO 項目エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
   id:      TodoItemId,
   user_id: UserId,
   label:   TodoLabel,
   done:    bool,
}

impl TodoItem {
   /// DB から取得した値で TODO 項目を復元する
   pub fn from_db(id: TodoItemId, user_id: UserId, label: TodoLabel, done: bool) -> Self {
      Self {
         id,
         user_id,
         label,
         done,
      }
   }

   pub fn id(&self) -> TodoItemId {
      self.id
   }

   pub fn user_id(&self) -> UserId {
      self.user_id
   }

   pub fn label(&self) -> &TodoLabel {
      &self.label
   }

   pub fn done(&self) -> bool {
      self.done
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   #[rstest]
   #[case("buy milk")]
   #[case("x")]
   #[case("牛乳を買う")]
   fn test_有効なラベルを作成できる(#[case] input: &str) {
      let label = TodoLabel::new(input).unwrap();
      assert_eq!(label.as_str(), input);
   }

   #[rstest]
   #[case(String::new())]
   #[case("a".repeat(LABEL_MAX_CHARS + 1))]
   #[case("buy\0milk".to_string())]
   fn test_不正なラベルはエラー(#[case] input: String) {
      assert!(matches!(
         TodoLabel::new(input),
         Err(DomainError::Validation(_))
      ));
   }

   #[test]
   fn test_250文字ちょうどは許可される() {
      assert!(TodoLabel::new("a".repeat(LABEL_MAX_CHARS)).is_ok());
   }

   #[test]
   fn test_from_dbで復元した項目が所有者を保持する() {
      let item = TodoItem::from_db(
         TodoItemId::from_i64(3),
         UserId::from_i64(1),
         TodoLabel::new("buy milk").unwrap(),
         true,
      );

      assert_eq!(item.id().as_i64(), 3);
      assert_eq!(item.user_id(), UserId::from_i64(1));
      assert_eq!(item.label().as_str(), "buy milk");
      assert!(item.done());
   }
}
