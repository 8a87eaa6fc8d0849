//! # アプリケーション構築
//!
//! ルーター定義とミドルウェアの適用を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::Layer;
use tower_http::{
   normalize_path::{NormalizePath, NormalizePathLayer},
   trace::TraceLayer,
};

use crate::handler::{
   TodoState,
   append_todos,
   create_user,
   delete_user,
   health_check,
   list_todos,
   sitemap,
};

/// ルーターを構築する
///
/// 末尾のスラッシュはルーティング前に取り除くため、
/// `/todos/user/alice/` は `/todos/user/alice` と同じハンドラに届く。
/// そのため `into_make_service` は `Router` ではなく戻り値に対して呼ぶ。
pub fn build_app(todo_state: Arc<TodoState>) -> NormalizePath<Router> {
   let router = Router::new()
      .route("/", get(sitemap))
      .route("/health", get(health_check))
      .route(
         "/todos/user/{username}",
         get(list_todos)
            .post(create_user)
            .put(append_todos)
            .delete(delete_user),
      )
      .with_state(todo_state)
      .layer(TraceLayer::new_for_http());

   NormalizePathLayer::trim_trailing_slash().layer(router)
}
