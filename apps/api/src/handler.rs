//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、ユーザーの存在確認やトランザクションはユースケースに委譲
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # GET /health
//!     ├── sitemap.rs  # GET /
//!     └── todo.rs     # /todos/user/{username}
//! ```

pub mod health;
pub mod sitemap;
pub mod todo;

pub use health::health_check;
pub use sitemap::sitemap;
pub use todo::{TodoDto, TodoState, append_todos, create_user, delete_user, list_todos};
