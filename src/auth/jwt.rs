use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Issued tokens live for 15 seconds.
pub const TOKEN_TTL_SECS: i64 = 15;

/// Mint a HS256 token for `sub`, expiring `TOKEN_TTL_SECS` after `now`.
///
/// The clock is an argument so tests can mint already-expired tokens.
pub fn mint_token(sub: &str, now: SystemTime, security: &SecurityConfig) -> Result<String, AppError> {
    let now = unix_seconds(now)?;
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
}

/// Verify a token and return its claims.
///
/// Fails when the signature does not verify against the configured secret,
/// the token is malformed, or the current time is at or past `exp`.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Pin the algorithm and verify expiry with no leeway.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::invalid_token("token expired"),
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::invalid_token("invalid signature")
        }
        _ => AppError::invalid_token(format!("malformed token: {e}")),
    })?;

    // The library keeps a token alive through the `exp` second itself; the
    // contract is that a token is dead at `exp` exactly.
    if claims.exp <= unix_seconds(SystemTime::now())? {
        return Err(AppError::invalid_token("token expired"));
    }

    Ok(claims)
}

fn unix_seconds(t: SystemTime) -> Result<i64, AppError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::{mint_token, verify_token, TOKEN_TTL_SECS};
    use crate::error::AppError;
    use crate::state::security_config::SecurityConfig;

    fn test_security() -> SecurityConfig {
        SecurityConfig::new("test_secret_key_for_testing_purposes_only".as_bytes())
    }

    #[test]
    fn test_mint_and_verify_roundtrip() {
        let security = test_security();
        let now = SystemTime::now();

        let token = mint_token("alice", now, &security).unwrap();
        let claims = verify_token(&token, &security).unwrap();

        assert_eq!(claims.sub, "alice");
        let minted_at = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64;
        assert_eq!(claims.exp, minted_at + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_expired_token() {
        let security = test_security();
        let now = SystemTime::now() - Duration::from_secs(60);

        let token = mint_token("alice", now, &security).unwrap();
        let result = verify_token(&token, &security);

        assert!(matches!(result, Err(AppError::InvalidToken { .. })));
    }

    #[test]
    fn test_token_dead_exactly_at_expiry() {
        let security = test_security();
        // exp lands at (or just before) the current second
        let now = SystemTime::now() - Duration::from_secs(TOKEN_TTL_SECS as u64);

        let token = mint_token("alice", now, &security).unwrap();
        let result = verify_token(&token, &security);

        assert!(matches!(result, Err(AppError::InvalidToken { .. })));
    }

    #[test]
    fn test_bad_signature() {
        let security_a = SecurityConfig::new("secret-A".as_bytes());
        let token = mint_token("alice", SystemTime::now(), &security_a).unwrap();

        let security_b = SecurityConfig::new("secret-B".as_bytes());
        let result = verify_token(&token, &security_b);

        assert!(matches!(result, Err(AppError::InvalidToken { .. })));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let security = test_security();
        let token = mint_token("alice", SystemTime::now(), &security).unwrap();

        // Flip one character anywhere in the token
        for pos in [0, token.len() / 2, token.len() - 1] {
            let mut bytes = token.clone().into_bytes();
            bytes[pos] = if bytes[pos] == b'A' { b'B' } else { b'A' };
            let tampered = String::from_utf8(bytes).unwrap();
            if tampered == token {
                continue;
            }

            let result = verify_token(&tampered, &security);
            assert!(
                matches!(result, Err(AppError::InvalidToken { .. })),
                "tampered byte at {pos} should invalidate the token"
            );
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        let security = test_security();
        let result = verify_token("not-a-token", &security);
        assert!(matches!(result, Err(AppError::InvalidToken { .. })));
    }
}
