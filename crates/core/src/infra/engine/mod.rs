mod mock;

pub use mock::{MockEngine, MockHandle};

use crate::domain::events::{EngineEvent, EventKind};

/// イベントスロットに格納されるコールバック。
///
/// ディスパッチはホストのイベントループ上の単一論理スレッドで行われるため
/// `Send` は要求しない。
pub type EventHandler = Box<dyn FnMut(EngineEvent)>;

/// 認識エンジン trait（ホスト提供の能力を抽象化する）
///
/// 実装はホストプラットフォームごとに用意される不透明なコラボレータで、
/// このクレートは認識処理そのものを一切実装しない。ハンドルは単一所有・
/// 非再入がホスト側の契約。
pub trait RecognitionEngine {
    // ==================== 設定フィールド ====================

    fn set_language(&mut self, language: &str);
    fn set_interim_results(&mut self, enabled: bool);
    fn set_max_alternatives(&mut self, count: u32);
    fn set_continuous(&mut self, enabled: bool);

    /// 現在の言語タグ（キャッシュなし、常にエンジンの生値）
    fn language(&self) -> String;
    fn interim_results(&self) -> bool;
    fn max_alternatives(&self) -> u32;
    fn continuous(&self) -> bool;

    // ==================== コールバックスロット ====================

    /// スロットへハンドラを登録する。スロットごとに保持されるのは
    /// 最大ひとつで、再登録は前のハンドラを置き換える（チェーンしない）。
    /// `None` で解除。
    fn set_handler(&mut self, kind: EventKind, handler: Option<EventHandler>);

    // ==================== ライフサイクル ====================

    /// 認識開始を要求する。非同期で、完了・結果・エラーは
    /// スロット経由でのみ届く。開始済みでの再要求の挙動はエンジン定義。
    fn start(&mut self);

    /// 認識停止を要求する。要求であって保証ではない。
    /// 停止要求後に末尾の result / end イベントが届くことは正当。
    fn stop(&mut self);
}
