use async_trait::async_trait;

/// Authenticates an inbound request before it reaches a protected route.
///
/// Validators only see the request parts (headers, method, URI, extensions),
/// never the body, so they can run inside middleware without buffering
/// uploads.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// Identity attached to the request once validation succeeds.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
