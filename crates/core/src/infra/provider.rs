use super::engine::RecognitionEngine;
use crate::domain::error::SessionError;

/// 認識能力プロバイダ。
///
/// グローバル環境を暗黙に探るのではなく、セッション構築時に明示的に
/// 注入する。能力の有無はプロバイダを差し替えるだけでテストできる。
pub trait CapabilityProvider {
    /// エンジンハンドルを生成する。
    /// ホストが能力を提供していなければ `CapabilityUnavailable`。
    fn create_engine(&self) -> Result<Box<dyn RecognitionEngine>, SessionError>;

    /// 能力が存在するか
    fn is_available(&self) -> bool {
        self.create_engine().is_ok()
    }
}

/// ファクトリクロージャをプロバイダとして包む
pub struct FnProvider<F> {
    factory: F,
}

impl<F> FnProvider<F>
where
    F: Fn() -> Result<Box<dyn RecognitionEngine>, SessionError>,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> CapabilityProvider for FnProvider<F>
where
    F: Fn() -> Result<Box<dyn RecognitionEngine>, SessionError>,
{
    fn create_engine(&self) -> Result<Box<dyn RecognitionEngine>, SessionError> {
        (self.factory)()
    }
}

/// 認識能力を持たないホストを表すプロバイダ。
/// 構築失敗パスのテストと、機能デグレード時のプレースホルダに使う。
pub struct NullProvider;

impl CapabilityProvider for NullProvider {
    fn create_engine(&self) -> Result<Box<dyn RecognitionEngine>, SessionError> {
        Err(SessionError::CapabilityUnavailable(
            "this host provides no speech recognition engine; \
             run in an environment with a recognition capability"
                .to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::engine::MockEngine;

    #[test]
    fn null_provider_is_unavailable() {
        assert!(!NullProvider.is_available());
        let err = NullProvider.create_engine().err().unwrap();
        assert!(matches!(err, SessionError::CapabilityUnavailable(_)));
    }

    #[test]
    fn fn_provider_yields_engine() {
        let provider = FnProvider::new(|| {
            let (engine, _handle) = MockEngine::new();
            Ok(Box::new(engine) as Box<dyn RecognitionEngine>)
        });
        assert!(provider.is_available());
        assert!(provider.create_engine().is_ok());
    }
}
