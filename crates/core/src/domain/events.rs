use serde::{Deserialize, Serialize};

use super::error::EngineError;

// ─── 結果イベント ────────────────────────────────────────────────

/// 同一音声区間に対する候補書き起こしのひとつ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// 書き起こしテキスト
    pub transcript: String,
    /// 信頼度スコア (0.0–1.0)
    pub confidence: f32,
}

/// ひとつの認識区間。候補は信頼度順に並ぶ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultGroup {
    pub alternatives: Vec<Alternative>,
    /// 確定結果か（false なら中間結果）
    pub is_final: bool,
}

/// result スロットに届く生イベント。
///
/// エンジンは複数の認識区間（groups）を報告し得るが、
/// セッションビルダーのラッパーは `best_transcript` の narrowing だけを使う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultEvent {
    pub groups: Vec<ResultGroup>,
}

impl ResultEvent {
    /// 単一区間・単一候補のイベントを組み立てる（テスト・簡易エンジン向け）
    pub fn single(transcript: impl Into<String>, confidence: f32, is_final: bool) -> Self {
        Self {
            groups: vec![ResultGroup {
                alternatives: vec![Alternative {
                    transcript: transcript.into(),
                    confidence,
                }],
                is_final,
            }],
        }
    }

    /// 先頭区間の先頭候補の (transcript, is_final) を返す。
    ///
    /// 区間も候補も存在しなければ None。ビルダーの on_result ラッパーが
    /// 呼び出し側へ渡す値はこの narrowing に限定される（意図的な簡略化）。
    pub fn best_transcript(&self) -> Option<(&str, bool)> {
        let group = self.groups.first()?;
        let alt = group.alternatives.first()?;
        Some((alt.transcript.as_str(), group.is_final))
    }
}

// ─── エンジンイベント ────────────────────────────────────────────

/// コールバックスロットに届く生イベントオブジェクト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// 認識セッション開始
    Start,
    /// 音声入力の取得開始
    AudioStart,
    /// 何らかの音の検出開始
    SoundStart,
    /// 音の検出終了
    SoundEnd,
    /// 発話の検出開始
    SpeechStart,
    /// 発話の検出終了
    SpeechEnd,
    /// 認識結果（中間・確定の両方）
    Result(ResultEvent),
    /// 音は検出されたが認識候補なし
    NoMatch,
    /// エンジン報告のエラー
    Error(EngineError),
    /// 認識セッション終了
    End,
}

impl EngineEvent {
    /// 対応するスロット種別を返す
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Start => EventKind::Start,
            Self::AudioStart => EventKind::AudioStart,
            Self::SoundStart => EventKind::SoundStart,
            Self::SoundEnd => EventKind::SoundEnd,
            Self::SpeechStart => EventKind::SpeechStart,
            Self::SpeechEnd => EventKind::SpeechEnd,
            Self::Result(_) => EventKind::Result,
            Self::NoMatch => EventKind::NoMatch,
            Self::Error(_) => EventKind::Error,
            Self::End => EventKind::End,
        }
    }
}

/// コールバックスロットの識別子。スロットはイベント種別ごとに独立で、
/// start と audio-start も別スロットとして扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Start,
    AudioStart,
    SoundStart,
    SoundEnd,
    SpeechStart,
    SpeechEnd,
    Result,
    NoMatch,
    Error,
    End,
}

impl EventKind {
    pub const ALL: [EventKind; 10] = [
        EventKind::Start,
        EventKind::AudioStart,
        EventKind::SoundStart,
        EventKind::SoundEnd,
        EventKind::SpeechStart,
        EventKind::SpeechEnd,
        EventKind::Result,
        EventKind::NoMatch,
        EventKind::Error,
        EventKind::End,
    ];
}
