//! # TODO リストハンドラ
//!
//! ユーザーごとの TODO リストを扱う単一リソースのエンドポイント。
//!
//! ## エンドポイント
//!
//! - `GET /todos/user/{username}` - TODO 一覧
//! - `POST /todos/user/{username}` - ユーザー作成（ボディは JSON 配列、内容は無視）
//! - `PUT /todos/user/{username}` - TODO の一括追加
//! - `DELETE /todos/user/{username}` - ユーザーと TODO の削除
//!
//! ボディが JSON 配列でない場合はすべて 400 を返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State, rejection::JsonRejection},
   response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use todolist_domain::todo::{NewTodoItem, TodoItem, TodoLabel};
use todolist_shared::{ApiResponse, ResultMessage};

use crate::{error::ApiError, usecase::TodoUseCase};

/// TODO ハンドラの共有状態
pub struct TodoState {
   pub usecase: Arc<dyn TodoUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// TODO 項目（レスポンス）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
   pub label: String,
   pub done:  bool,
}

impl From<&TodoItem> for TodoDto {
   fn from(item: &TodoItem) -> Self {
      Self {
         label: item.label().as_str().to_string(),
         done:  item.done(),
      }
   }
}

/// TODO 項目（PUT リクエストの配列要素）
#[derive(Debug, Deserialize)]
struct TodoRequest {
   label: String,
   #[serde(default)]
   done:  bool,
}

fn require_array(body: Value) -> Result<Vec<Value>, ApiError> {
   match body {
      Value::Array(items) => Ok(items),
      _ => Err(ApiError::BadRequest(
         "リクエストボディは JSON 配列である必要があります".to_string(),
      )),
   }
}

/// PUT のボディを TODO 項目のリストに変換する
///
/// `null` の要素は読み飛ばす。1 つでも不正な要素があればリスト全体をエラーにする。
fn parse_todos(body: Value) -> Result<Vec<NewTodoItem>, ApiError> {
   require_array(body)?
      .into_iter()
      .enumerate()
      .filter(|(_, item)| !item.is_null())
      .map(|(index, item)| -> Result<NewTodoItem, ApiError> {
         let req: TodoRequest = serde_json::from_value(item)
            .map_err(|e| ApiError::BadRequest(format!("{index} 番目の要素が不正です: {e}")))?;
         Ok(NewTodoItem::new(TodoLabel::new(req.label)?, req.done))
      })
      .collect()
}

// --- ハンドラ ---

/// GET /todos/user/{username}
#[tracing::instrument(skip_all, fields(%username))]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
   Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let todos = state.usecase.list_todos(&username).await?;
   let data: Vec<TodoDto> = todos.iter().map(TodoDto::from).collect();
   Ok(Json(ApiResponse::new(data)))
}

/// POST /todos/user/{username}
///
/// TODO 項目を持たないユーザーを作成する。
#[tracing::instrument(skip_all, fields(%username))]
pub async fn create_user(
   State(state): State<Arc<TodoState>>,
   Path(username): Path<String>,
   body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(body) = body?;
   require_array(body)?;

   state.usecase.create_user(&username).await?;
   Ok(Json(ApiResponse::new(ResultMessage::ok())))
}

/// PUT /todos/user/{username}
///
/// 既存ユーザーに TODO 項目を一括で追加する。
#[tracing::instrument(skip_all, fields(%username))]
pub async fn append_todos(
   State(state): State<Arc<TodoState>>,
   Path(username): Path<String>,
   body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(body) = body?;
   let todos = parse_todos(body)?;

   let count = state.usecase.append_todos(&username, todos).await?;
   Ok(Json(ApiResponse::new(ResultMessage::saved(count))))
}

/// DELETE /todos/user/{username}
#[tracing::instrument(skip_all, fields(%username))]
pub async fn delete_user(
   State(state): State<Arc<TodoState>>,
   Path(username): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.delete_user(&username).await?;
   Ok(Json(ApiResponse::new(ResultMessage::ok())))
}
