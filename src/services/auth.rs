use crate::{
    config::AuthSettings,
    database::connection::DbPool,
    models::{
        auth::{AuthTokens, Claims, TOKEN_TTL_SECONDS},
        user::User,
    },
};
use bcrypt::{hash, verify};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Issues and verifies bearer tokens and hashes passwords. Built once at
/// startup from configuration and shared with every worker.
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(settings: &AuthSettings) -> Self {
        let secret = settings.jwt_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            bcrypt_cost: settings.bcrypt_cost,
        }
    }

    pub fn generate_token(&self, user: &User) -> Result<AuthTokens, AuthError> {
        let claims = Claims::new(user.id, user.role);
        let access_token = self.encode_claims(&claims)?;

        Ok(AuthTokens {
            access_token,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AuthError> {
        Ok(encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)?)
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// bcrypt is deliberately slow, so it runs off the async workers.
    pub async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let cost = self.bcrypt_cost;
        let hashed = tokio::task::spawn_blocking(move || hash(password.as_bytes(), cost)).await??;
        Ok(hashed)
    }

    pub async fn verify_password(&self, password: String, password_hash: String) -> Result<bool, AuthError> {
        let matches =
            tokio::task::spawn_blocking(move || verify(password.as_bytes(), &password_hash)).await??;
        Ok(matches)
    }

    /// Returns the user only when the email exists and the password matches.
    pub async fn authenticate_user(
        &self,
        pool: &DbPool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, AuthError> {
        let Some(user) = User::find_by_email(pool, email).await? else {
            debug!("Login attempt for unknown email {}", email);
            return Ok(None);
        };

        if self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
