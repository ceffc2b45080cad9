//! vr-core: 認識セッションビルダー
//!
//! ホスト提供の音声認識エンジンをチェーン可能な設定インターフェースで包む。
//! 認識処理・音声取得・言語モデルはすべてエンジン側の責務で、
//! このクレートは設定の適用とコールバック登録の委譲だけを行う。

pub mod domain;
pub mod infra;
pub mod usecase;

pub use domain::config::RecognitionConfig;
pub use domain::error::{EngineError, EngineErrorCode, SessionError};
pub use domain::events::{Alternative, EngineEvent, EventKind, ResultEvent, ResultGroup};
pub use infra::engine::{EventHandler, MockEngine, MockHandle, RecognitionEngine};
pub use infra::provider::{CapabilityProvider, FnProvider, NullProvider};
pub use usecase::session::RecognitionSession;
