//! # API レスポンスエンベロープ
//!
//! 成功レスポンスの統一形式 `{ "data": T }` を提供する。
//! 失敗レスポンスは [`ErrorResponse`](crate::ErrorResponse) を使う。

use serde::{Deserialize, Serialize};

/// 成功レスポンスの統一型
///
/// ## 使用例
///
/// ```
/// use todolist_shared::ApiResponse;
///
/// let response = ApiResponse::new("hello");
/// assert_eq!(response.data, "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
   pub data: T,
}

impl<T> ApiResponse<T> {
   /// 新しい `ApiResponse` を作成する
   pub fn new(data: T) -> Self {
      Self { data }
   }
}

/// 書き込み系エンドポイントの結果メッセージ
///
/// `count` は件数を伴う操作でのみ出力される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
   pub result: String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub count:  Option<usize>,
}

impl ResultMessage {
   /// `{"result": "ok"}`
   pub fn ok() -> Self {
      Self {
         result: "ok".to_string(),
         count:  None,
      }
   }

   /// 一括保存の結果
   pub fn saved(count: usize) -> Self {
      Self {
         result: format!("A list with {count} todos was successfully saved"),
         count:  Some(count),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_serializeを正しいjson形状にする() {
      let response = ApiResponse::new(vec!["a", "b"]);
      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(json, serde_json::json!({ "data": ["a", "b"] }));
   }

   #[test]
   fn test_okはcountを出力しない() {
      let json = serde_json::to_value(ApiResponse::new(ResultMessage::ok())).unwrap();

      assert_eq!(json, serde_json::json!({ "data": { "result": "ok" } }));
   }

   #[test]
   fn test_savedは件数をメッセージとcountに含める() {
      let json = serde_json::to_value(ResultMessage::saved(3)).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "result": "A list with 3 todos was successfully saved",
            "count": 3
         })
      );
   }
}
