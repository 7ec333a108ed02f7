// アプリケーション層モジュール
pub mod crew_lookup_handler;

// 再エクスポート
pub use crew_lookup_handler::{CrewLookupError, CrewLookupHandler};
