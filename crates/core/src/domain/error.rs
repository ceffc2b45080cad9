use serde::{Deserialize, Serialize};

/// セッション構築時の同期エラー
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    /// ホスト環境が認識エンジンを提供していない。
    /// この失敗は致命的で、内部リトライは行わない。
    #[error("recognition capability unavailable: {0}")]
    CapabilityUnavailable(String),
}

/// エンジン報告のエラーコード
///
/// ワイヤ名はホストプラットフォームの kebab-case 名に揃える
/// （例: "not-allowed", "audio-capture"）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineErrorCode {
    /// 発話が検出されなかった
    NoSpeech,
    /// セッションが中断された
    Aborted,
    /// 音声入力デバイスの取得に失敗
    AudioCapture,
    /// サーバ型認識での通信失敗
    Network,
    /// マイク権限が拒否された
    NotAllowed,
    /// ホストが認識サービスの利用を許可しない
    ServiceNotAllowed,
    /// 文法定義の不備
    BadGrammar,
    /// 指定言語が非対応
    LanguageNotSupported,
}

/// error スロット経由で非同期に届くエンジンエラー。
/// セッションビルダーは解釈・リトライ・抑制を一切行わず、
/// 登録済みハンドラへそのまま転送する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineError {
    pub code: EngineErrorCode,
    pub message: String,
}

impl EngineError {
    pub fn new(code: EngineErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_allowed(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::NotAllowed, message)
    }

    pub fn audio_capture(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::AudioCapture, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::Network, message)
    }

    pub fn aborted(message: impl Into<String>) -> Self {
        Self::new(EngineErrorCode::Aborted, message)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_unavailable_message() {
        let err = SessionError::CapabilityUnavailable(
            "このホストには認識エンジンがありません".into(),
        );
        let msg = format!("{}", err);
        assert!(msg.contains("recognition capability unavailable"));
        assert!(msg.contains("認識エンジン"));
    }

    #[test]
    fn error_code_wire_names_are_kebab_case() {
        let cases = [
            (EngineErrorCode::NoSpeech, "\"no-speech\""),
            (EngineErrorCode::Aborted, "\"aborted\""),
            (EngineErrorCode::AudioCapture, "\"audio-capture\""),
            (EngineErrorCode::Network, "\"network\""),
            (EngineErrorCode::NotAllowed, "\"not-allowed\""),
            (EngineErrorCode::ServiceNotAllowed, "\"service-not-allowed\""),
            (EngineErrorCode::BadGrammar, "\"bad-grammar\""),
            (
                EngineErrorCode::LanguageNotSupported,
                "\"language-not-supported\"",
            ),
        ];
        for (code, wire) in cases {
            assert_eq!(serde_json::to_string(&code).unwrap(), wire);
        }
    }

    #[test]
    fn engine_error_display() {
        let err = EngineError::not_allowed("microphone permission denied");
        let msg = format!("{}", err);
        assert!(msg.contains("NotAllowed"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn engine_error_serde_roundtrip() {
        let err = EngineError::network("recognition service unreachable");
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"network\""));
        let back: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
