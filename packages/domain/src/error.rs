//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時に検出されるルール違反を表現する。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//!
//! 存在しないユーザーや一意制約違反はドメイン層ではなく、
//! ユースケース層・インフラ層で検出する。
//!
//! ## 使用例
//!
//! ```rust
//! use todolist_domain::DomainError;
//!
//! fn validate_label(label: &str) -> Result<(), DomainError> {
//!     if label.is_empty() {
//!         return Err(DomainError::Validation("ラベルは必須です".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値が長さ制約などのルールに違反している場合に使用する。
   #[error("バリデーションエラー: {0}")]
   Validation(String),
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_validationのメッセージに理由が含まれる() {
      let err = DomainError::Validation("ユーザー名は必須です".to_string());
      assert_eq!(err.to_string(), "バリデーションエラー: ユーザー名は必須です");
   }
}
