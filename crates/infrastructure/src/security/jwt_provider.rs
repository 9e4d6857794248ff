//! JWT access tokens (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use application::{TokenClaims, TokenProvider};
use common::{AppError, AppResult, JwtConfig};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Username
    pub unique_name: String,
    /// Token id, unique per issued token
    pub jti: String,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

/// Issues and verifies tokens with the secret, issuer and audience from [`JwtConfig`].
pub struct JwtTokenProvider {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenProvider {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Decode and validate signature, issuer, audience and expiry.
    pub fn decode_claims(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_audience(&[&self.config.audience]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            AppError::authentication("Invalid or expired token")
        })?;

        Ok(token_data.claims)
    }
}

impl TokenProvider for JwtTokenProvider {
    fn generate_token(&self, user_id: &str, username: &str) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.config.expires_in_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            unique_name: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal_with(format!("Failed to issue token. user_id={}", user_id), e))
    }

    fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let claims = self.decode_claims(token)?;
        Ok(TokenClaims {
            user_id: claims.sub,
            username: claims.unique_name,
        })
    }
}
