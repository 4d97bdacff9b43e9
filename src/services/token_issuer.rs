//! Token issuance - signed, time-bounded identity tokens.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{Config, TOKEN_VALIDITY_SECONDS};
use crate::errors::AppResult;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}

/// Issues HMAC-signed identity tokens (HS256).
///
/// Keys are derived once from the process-wide secret at startup. Every
/// token carries claims `{sub, iat, exp}` with `exp = iat + 3600`.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity_seconds: i64,
}

impl TokenIssuer {
    /// Build an issuer from application configuration
    pub fn new(config: &Config) -> Self {
        Self::from_secret(config.jwt_secret_bytes())
    }

    /// Build an issuer from raw secret bytes
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validity_seconds: TOKEN_VALIDITY_SECONDS,
        }
    }

    /// Issue a signed token bound to the given user id
    pub fn issue(&self, user_id: i64) -> AppResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat,
            exp: iat + self.validity_seconds,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Decode and verify a token issued with the same secret.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::from_secret(b"test-secret-key-for-testing-32ch")
    }

    #[test]
    fn test_issued_token_round_trips() {
        let issuer = issuer();
        let token = issuer.issue(42).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
    }

    #[test]
    fn test_expiry_is_one_hour_after_issuance() {
        let issuer = issuer();
        let token = issuer.issue(7).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = issuer();
        let mut token = issuer.issue(1).unwrap();
        token.push('x');

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = issuer().issue(1).unwrap();
        let other = TokenIssuer::from_secret(b"a-completely-different-secret-32");

        assert!(other.verify(&token).is_err());
    }
}
