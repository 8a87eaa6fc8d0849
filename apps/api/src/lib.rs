//! # Todolist API サーバー
//!
//! ユーザーごとの TODO リストを提供する HTTP API。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler → usecase → repository (todolist-infra) → PostgreSQL
//!    │          │
//!    └──────────┴──→ todolist-domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ビジネスロジック

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
