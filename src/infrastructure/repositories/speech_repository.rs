use async_trait::async_trait;

/// Repository for calls to the cloud speech provider.
/// Abstracts the provider's token-issuance and synthesis endpoints.
///
/// Implementations hold the subscription credential; callers never see it.
/// Errors are returned as the provider or transport message, unmodified.
#[async_trait]
pub trait SpeechRepository: Send + Sync {
    /// Region the credential belongs to, handed to clients with each token
    fn region(&self) -> &str;

    /// Exchange the subscription key for a short-lived access token
    async fn issue_token(&self) -> Result<String, String>;

    /// Synthesize an SSML document
    ///
    /// Returns MP3 audio exactly as the provider sent it
    async fn synthesize(&self, ssml: &str) -> Result<Vec<u8>, String>;
}
