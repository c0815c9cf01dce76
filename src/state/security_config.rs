use jsonwebtoken::Algorithm;

/// Configuration for token signing and verification.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}
