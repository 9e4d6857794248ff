//! API configuration.

use std::env;

use common::{AppError, AppResult, DatabaseConfig, JwtConfig};
use domain::{DEFAULT_JWT_EXPIRES_IN_MINUTES, MIN_JWT_SECRET_LENGTH};

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database_defaults = DatabaseConfig::default();
        let jwt_defaults = JwtConfig::default();

        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or(database_defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                min_connections: database_defaults.min_connections,
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").unwrap_or_default(),
                issuer: env::var("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
                audience: env::var("JWT_AUDIENCE").unwrap_or(jwt_defaults.audience),
                expires_in_minutes: env::var("JWT_EXPIRES_IN_MINUTES")
                    .ok()
                    .and_then(|m| m.parse().ok())
                    .unwrap_or(DEFAULT_JWT_EXPIRES_IN_MINUTES),
            },
        }
    }

    /// Reject settings the server cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if self.jwt.expires_in_minutes <= 0 {
            return Err(AppError::internal(
                "JWT_EXPIRES_IN_MINUTES must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
        }
    }
}
