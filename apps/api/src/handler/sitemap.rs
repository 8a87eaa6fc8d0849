//! # サイトマップハンドラ
//!
//! `GET /` で公開しているエンドポイントの一覧を返す。

use axum::Json;
use serde::{Deserialize, Serialize};
use todolist_shared::ApiResponse;

/// 公開エンドポイント
pub const ENDPOINTS: [&str; 3] = ["/", "/health", "/todos/user/{username}"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sitemap {
   pub endpoints: Vec<String>,
}

/// GET /
pub async fn sitemap() -> Json<ApiResponse<Sitemap>> {
   Json(ApiResponse::new(Sitemap {
      endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
   }))
}
