//! Registration, login, and token issuance.
//!
//! Passwords are hashed with Argon2id. Sessions are stateless: an HS256
//! JWT carries the user ID in `sub`, and clients send it back in the
//! `token` header on protected routes.

mod error;

pub use error::AuthError;

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use sabzi_core::{Email, UserId};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::UserRecord;

/// Shortest password accepted at registration.
const MIN_PASSWORD_LENGTH: usize = 8;

/// How long issued tokens stay valid.
const TOKEN_TTL_DAYS: i64 = 30;

/// Claims carried in an auth token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID, stringified.
    pub sub: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
    /// Issued-at as a unix timestamp.
    pub iat: i64,
}

/// Borrowing facade over the user table plus the token signing secret.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    jwt_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool, jwt_secret: &'a SecretString) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt_secret,
        }
    }

    // =========================================================================
    // Passwords
    // =========================================================================

    /// Create an account from name, email, and password.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidEmail` when the address does not parse,
    /// `AuthError::WeakPassword` when the password is too short, and
    /// `AuthError::UserAlreadyExists` when the email is taken.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<UserRecord, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let hash = hash_password(password)?;
        match self.users.create(name, &email, &hash, is_admin).await {
            Ok(user) => Ok(user),
            Err(RepositoryError::Conflict(_)) => Err(AuthError::UserAlreadyExists),
            Err(other) => Err(AuthError::Repository(other)),
        }
    }

    /// Check an email/password pair and return the matching user.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` for an unknown email or a wrong
    /// password; the two cases are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let email = Email::parse(email)?;

        let Some(user) = self.users.get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials);
        };
        verify_password(password, &user.password_hash)?;

        Ok(user)
    }

    // =========================================================================
    // Tokens
    // =========================================================================

    /// Sign a fresh token for a user.
    ///
    /// # Errors
    ///
    /// `AuthError::TokenCreation` when signing fails.
    pub fn issue_token(&self, user_id: UserId) -> Result<String, AuthError> {
        create_token(self.jwt_secret, user_id)
    }

    /// Check a token signature and expiry, returning the embedded user ID.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidToken` for anything malformed, forged, or expired.
    pub fn verify_token(&self, token: &str) -> Result<UserId, AuthError> {
        decode_token(self.jwt_secret, token)
    }

    /// Resolve a token all the way to the user row it names.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidToken` when verification fails, and
    /// `AuthError::UserNotFound` when the row has since been deleted.
    pub async fn authenticate(&self, token: &str) -> Result<UserRecord, AuthError> {
        let user_id = self.verify_token(token)?;
        self.users
            .get_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

fn create_token(jwt_secret: &SecretString, user_id: UserId) -> Result<String, AuthError> {
    let issued_at = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (issued_at + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        iat: issued_at.timestamp(),
    };
    let key = EncodingKey::from_secret(jwt_secret.expose_secret().as_bytes());

    encode(&Header::default(), &claims, &key).map_err(|_| AuthError::TokenCreation)
}

fn decode_token(jwt_secret: &SecretString, token: &str) -> Result<UserId, AuthError> {
    let key = DecodingKey::from_secret(jwt_secret.expose_secret().as_bytes());
    let data = decode::<Claims>(token, &key, &Validation::default())
        .map_err(|_| AuthError::InvalidToken)?;

    let id: i32 = data.claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
    Ok(UserId::new(id))
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`].
///
/// # Errors
///
/// `AuthError::WeakPassword` with the client-facing message.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )))
    }
}

/// Hash a password with Argon2id under a fresh random salt.
///
/// # Errors
///
/// `AuthError::PasswordHash` when hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Check a password against a stored PHC hash string.
///
/// # Errors
///
/// `AuthError::InvalidCredentials` on mismatch or an unparseable hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}
