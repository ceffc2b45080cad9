use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{EventHandler, RecognitionEngine};
use crate::domain::config::RecognitionConfig;
use crate::domain::events::{EngineEvent, EventKind};

/// MockEngine の共有状態
struct MockState {
    config: RecognitionConfig,
    handlers: HashMap<EventKind, EventHandler>,
    start_calls: u32,
    stop_calls: u32,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            config: RecognitionConfig::default(),
            handlers: HashMap::new(),
            start_calls: 0,
            stop_calls: 0,
        }
    }
}

/// スクリプト駆動のインプロセスエンジン。
///
/// 実際の認識は行わない。セッションが適用した設定の読み戻しと、
/// `MockHandle::emit` による任意イベントの発火だけを提供する。
/// 消費側がシームをテストできるよう公開エクスポートする。
pub struct MockEngine {
    state: Rc<RefCell<MockState>>,
}

/// テスト側から MockEngine を観察・駆動するためのハンドル
pub struct MockHandle {
    state: Rc<RefCell<MockState>>,
}

impl MockEngine {
    /// エンジンと、それを駆動するハンドルのペアを返す
    pub fn new() -> (Self, MockHandle) {
        let state = Rc::new(RefCell::new(MockState::default()));
        (
            Self {
                state: Rc::clone(&state),
            },
            MockHandle { state },
        )
    }
}

impl RecognitionEngine for MockEngine {
    fn set_language(&mut self, language: &str) {
        self.state.borrow_mut().config.language = language.to_string();
    }

    fn set_interim_results(&mut self, enabled: bool) {
        self.state.borrow_mut().config.interim_results = enabled;
    }

    fn set_max_alternatives(&mut self, count: u32) {
        self.state.borrow_mut().config.max_alternatives = count;
    }

    fn set_continuous(&mut self, enabled: bool) {
        self.state.borrow_mut().config.continuous = enabled;
    }

    fn language(&self) -> String {
        self.state.borrow().config.language.clone()
    }

    fn interim_results(&self) -> bool {
        self.state.borrow().config.interim_results
    }

    fn max_alternatives(&self) -> u32 {
        self.state.borrow().config.max_alternatives
    }

    fn continuous(&self) -> bool {
        self.state.borrow().config.continuous
    }

    fn set_handler(&mut self, kind: EventKind, handler: Option<EventHandler>) {
        let mut state = self.state.borrow_mut();
        match handler {
            Some(h) => {
                state.handlers.insert(kind, h);
            }
            None => {
                state.handlers.remove(&kind);
            }
        }
    }

    fn start(&mut self) {
        // 開始済みチェックはしない（誤用時の挙動はエンジン定義のまま）
        self.state.borrow_mut().start_calls += 1;
    }

    fn stop(&mut self) {
        self.state.borrow_mut().stop_calls += 1;
    }
}

impl MockHandle {
    /// セッションが適用した設定のスナップショット
    pub fn config(&self) -> RecognitionConfig {
        self.state.borrow().config.clone()
    }

    /// start() が呼ばれた回数
    pub fn start_calls(&self) -> u32 {
        self.state.borrow().start_calls
    }

    /// stop() が呼ばれた回数
    pub fn stop_calls(&self) -> u32 {
        self.state.borrow().stop_calls
    }

    /// 指定スロットにハンドラが登録されているか
    pub fn handler_registered(&self, kind: EventKind) -> bool {
        self.state.borrow().handlers.contains_key(&kind)
    }

    /// 対応するスロットのハンドラを同期的に発火する。
    /// 未登録スロットへの emit はイベントを捨てる（panic しない）。
    pub fn emit(&self, event: EngineEvent) {
        let kind = event.kind();
        // ハンドラ呼び出し中に borrow を保持しない（再入対策）
        let handler = self.state.borrow_mut().handlers.remove(&kind);
        match handler {
            Some(mut h) => {
                h(event);
                // ディスパッチ中にスロットが再登録されていれば新しい方を残す
                self.state.borrow_mut().handlers.entry(kind).or_insert(h);
            }
            None => {
                log::debug!("no handler for {:?}; event dropped", kind);
            }
        }
    }
}
