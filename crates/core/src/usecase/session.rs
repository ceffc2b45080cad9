use uuid::Uuid;

use crate::domain::config::RecognitionConfig;
use crate::domain::error::{EngineError, SessionError};
use crate::domain::events::{EngineEvent, EventKind};
use crate::infra::engine::RecognitionEngine;
use crate::infra::provider::CapabilityProvider;

/// 認識セッションビルダー。
///
/// ひとつのエンジンハンドルを占有し、設定・コールバック登録・開始/停止を
/// チェーン可能なインターフェースで提供する。自前の状態は持たず、
/// 全操作をエンジンへ委譲するだけの薄い層。
///
/// ```
/// use vr_core::infra::engine::MockEngine;
/// use vr_core::usecase::session::RecognitionSession;
///
/// let (engine, handle) = MockEngine::new();
/// let mut session = RecognitionSession::from_engine(Box::new(engine));
/// session
///     .set_language("ja-JP")
///     .set_continuous(true)
///     .on_result(|transcript, is_final| {
///         println!("{} (final: {})", transcript, is_final);
///     })
///     .start_recognition();
/// assert!(session.continuous());
/// assert_eq!(handle.start_calls(), 1);
/// ```
pub struct RecognitionSession {
    id: Uuid,
    engine: Box<dyn RecognitionEngine>,
}

impl RecognitionSession {
    /// プロバイダからエンジンを取得して構築する。
    ///
    /// ホストが能力を提供していなければ `CapabilityUnavailable` で失敗し、
    /// 部分初期化されたセッションは存在しない。
    pub fn new(provider: &dyn CapabilityProvider) -> Result<Self, SessionError> {
        let engine = provider.create_engine()?;
        Ok(Self::from_engine(engine))
    }

    /// 取得済みのエンジンハンドルから直接構築する
    pub fn from_engine(engine: Box<dyn RecognitionEngine>) -> Self {
        let id = Uuid::new_v4();
        log::debug!("session {}: created", id);
        Self { id, engine }
    }

    /// ログ相関用のセッションID
    pub fn id(&self) -> Uuid {
        self.id
    }

    // ==================== 設定 ====================
    //
    // 各 setter はエンジンフィールドへの直接代入。バリデーションも
    // エラーパスもなく、同じビルダーを返してチェーンを継続する。

    pub fn set_language(&mut self, language: &str) -> &mut Self {
        self.engine.set_language(language);
        self
    }

    pub fn set_interim_results(&mut self, enabled: bool) -> &mut Self {
        self.engine.set_interim_results(enabled);
        self
    }

    pub fn set_max_alternatives(&mut self, count: u32) -> &mut Self {
        self.engine.set_max_alternatives(count);
        self
    }

    pub fn set_continuous(&mut self, enabled: bool) -> &mut Self {
        self.engine.set_continuous(enabled);
        self
    }

    /// 設定一式をまとめて適用する
    pub fn apply_config(&mut self, config: &RecognitionConfig) -> &mut Self {
        self.engine.set_language(&config.language);
        self.engine.set_interim_results(config.interim_results);
        self.engine.set_max_alternatives(config.max_alternatives);
        self.engine.set_continuous(config.continuous);
        self
    }

    // ==================== コールバック ====================
    //
    // スロットごとに保持されるハンドラは最大ひとつ。再登録は置き換え。

    /// 結果コールバック。
    ///
    /// result イベントを (transcript, is_final) に絞り込んで渡す:
    /// 先頭区間の先頭候補だけを使う意図的な narrowing で、候補一覧や
    /// 複数区間が必要な呼び出し側は生の `EngineEvent::Result` を
    /// エンジン側で直接購読すること。区間も候補もない結果イベントは捨てる。
    pub fn on_result<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&str, bool) + 'static,
    {
        self.engine.set_handler(
            EventKind::Result,
            Some(Box::new(move |event| {
                if let EngineEvent::Result(result) = event {
                    match result.best_transcript() {
                        Some((transcript, is_final)) => callback(transcript, is_final),
                        None => log::debug!("result event without alternatives; dropped"),
                    }
                }
            })),
        );
        self
    }

    /// エラーコールバック。エンジン報告のエラーを解釈せずそのまま渡す。
    pub fn on_error<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(EngineError) + 'static,
    {
        self.engine.set_handler(
            EventKind::Error,
            Some(Box::new(move |event| {
                if let EngineEvent::Error(error) = event {
                    callback(error);
                }
            })),
        );
        self
    }

    pub fn on_start<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::Start, callback)
    }

    pub fn on_audio_start<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::AudioStart, callback)
    }

    pub fn on_sound_start<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::SoundStart, callback)
    }

    pub fn on_sound_end<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::SoundEnd, callback)
    }

    pub fn on_speech_start<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::SpeechStart, callback)
    }

    pub fn on_speech_end<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::SpeechEnd, callback)
    }

    pub fn on_no_match<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::NoMatch, callback)
    }

    pub fn on_end<F: FnMut() + 'static>(&mut self, callback: F) -> &mut Self {
        self.forward(EventKind::End, callback)
    }

    /// ペイロードなしイベントの素通し転送
    fn forward<F>(&mut self, kind: EventKind, mut callback: F) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.engine
            .set_handler(kind, Some(Box::new(move |_event| callback())));
        self
    }

    // ==================== ライフサイクル ====================
    //
    // start/stop はエンジンへの要求にすぎず、呼び出し元をブロックしない。
    // 結果・完了・エラーは登録済みコールバック経由でのみ届く。
    // 開始済みで start、未開始で stop した場合の挙動はエンジン定義で、
    // ビルダー側では状態遷移を追跡しない。

    pub fn start_recognition(&mut self) -> &mut Self {
        log::debug!("session {}: start requested", self.id);
        self.engine.start();
        self
    }

    pub fn stop_recognition(&mut self) -> &mut Self {
        log::debug!("session {}: stop requested", self.id);
        self.engine.stop();
        self
    }

    // ==================== アクセサ ====================
    //
    // キャッシュなしのエンジン生値。

    pub fn max_alternatives(&self) -> u32 {
        self.engine.max_alternatives()
    }

    pub fn continuous(&self) -> bool {
        self.engine.continuous()
    }
}

impl Drop for RecognitionSession {
    fn drop(&mut self) {
        // ハンドルを手放す前に進行中の認識の停止を要求しておく。
        // イベント配送先が消えた後にエンジンが動き続けないために必要。
        self.engine.stop();
        log::debug!("session {}: dropped", self.id);
    }
}
