use serde::{Deserialize, Serialize};

/// 認識セッション設定
///
/// 各フィールドはエンジンハンドルの同名フィールドへそのまま代入される。
/// バリデーションは行わない。範囲外の値もそのまま渡し、問題があれば
/// エンジン側が error スロット経由で報告する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// 認識言語 (BCP-47 タグ、例: "en-US", "ja-JP")
    pub language: String,
    /// 中間結果（未確定の書き起こし）を通知するか
    pub interim_results: bool,
    /// エンジンが返す候補数の上限
    pub max_alternatives: u32,
    /// 連続認識モード（最初の確定結果で止めずに聞き続ける）
    pub continuous: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            interim_results: false,
            max_alternatives: 1,
            continuous: false,
        }
    }
}
