//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ```text
//! GET /health
//! ```
//!
//! データベースへの接続は確認せず、プロセス自体の起動状態のみを返す。

use axum::Json;
use todolist_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。`version` は `Cargo.toml` で定義されたバージョン。
///
/// ```text
/// $ curl http://localhost:3000/health
/// {"status":"healthy","version":"0.1.0"}
/// ```
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}
