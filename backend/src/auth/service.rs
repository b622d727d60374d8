//! Core business logic for the authentication system.
//!
//! This service hashes and verifies passwords, issues and validates session
//! tokens, and implements the hospital login flow against the database.

use std::time::Duration;

use adapters::DocumentId;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, info};

use super::errors::AuthError;
use super::models::{Caller, Claims, LoginRequest, LoginResponse, Role};
use crate::config::Config;
use crate::database::Database;
use crate::errors::ApiError;

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: Duration,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(secret: &str, token_ttl: Duration, bcrypt_cost: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            token_ttl,
            bcrypt_cost,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl, config.bcrypt_cost)
    }

    /// Hashes on the blocking pool; bcrypt is deliberately slow.
    pub async fn hash_password(&self, password: String) -> Result<String, AuthError> {
        let cost = self.bcrypt_cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthError> {
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
        Ok(matches)
    }

    pub fn issue_token(&self, caller: &Caller) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp().max(0) as u64;
        let exp = iat
            .checked_add(self.token_ttl.as_secs())
            .ok_or_else(|| AuthError::TokenIssue("token lifetime overflows the expiry".into()))?;
        let claims = Claims {
            id: caller.id.to_string(),
            role: caller.role,
            hospital: caller.hospital.as_ref().map(ToString::to_string),
            iat,
            exp,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssue(e.to_string()))
    }

    /// Verifies signature and expiry and returns the embedded identity.
    pub fn decode_token(&self, token: &str) -> Result<Caller, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;
        let id: DocumentId = claims
            .id
            .parse()
            .map_err(|_| AuthError::InvalidToken("malformed subject id".into()))?;
        let hospital = claims
            .hospital
            .map(|h| h.parse::<DocumentId>())
            .transpose()
            .map_err(|_| AuthError::InvalidToken("malformed hospital id".into()))?;
        Ok(Caller {
            id,
            role: claims.role,
            hospital,
        })
    }

    pub async fn login(&self, db: &Database, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let hospital = db
            .find_hospital_by_email(&request.email)
            .await?
            .ok_or_else(ApiError::hospital_not_found)?;

        if !self
            .verify_password(request.password, hospital.password_hash.clone())
            .await?
        {
            debug!(email = %request.email, "login rejected: password mismatch");
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.issue_token(&Caller::hospital(hospital.id.clone()))?;
        info!(hospital_id = %hospital.id, "hospital logged in");
        Ok(LoginResponse {
            message: "Login successful".into(),
            token,
            id: hospital.id,
            role: Role::Hospital,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("unit-test-secret", Duration::from_secs(60 * 60 * 24), 4)
    }

    #[tokio::test]
    async fn hashed_passwords_verify_only_with_the_same_password() {
        let auth = service();
        let hash = auth.hash_password("hunter2".into()).await.unwrap();
        assert_ne!(hash, "hunter2");
        assert!(auth.verify_password("hunter2".into(), hash.clone()).await.unwrap());
        assert!(!auth.verify_password("hunter3".into(), hash).await.unwrap());
    }

    #[test]
    fn tokens_carry_identity_and_role() {
        let auth = service();
        let hospital = DocumentId::generate();
        let caller = Caller::sub_admin(DocumentId::generate(), hospital.clone());
        let token = auth.issue_token(&caller).unwrap();
        let decoded = auth.decode_token(&token).unwrap();
        assert_eq!(decoded, caller);
        assert_eq!(decoded.hospital_id(), &hospital);
    }

    #[test]
    fn tokens_expire_one_ttl_after_issue() {
        let auth = service();
        let token = auth.issue_token(&Caller::hospital(DocumentId::generate())).unwrap();
        let claims = decode::<Claims>(&token, &auth.decoding_key, &auth.validation)
            .unwrap()
            .claims;
        assert_eq!(claims.exp - claims.iat, 86_400);
        assert_eq!(claims.role, Role::Hospital);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let other = AuthService::new("another-secret", Duration::from_secs(3600), 4);
        let token = other.issue_token(&Caller::hospital(DocumentId::generate())).unwrap();
        assert!(matches!(
            service().decode_token(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let auth = service();
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            id: DocumentId::generate().to_string(),
            role: Role::Hospital,
            hospital: None,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &claims, &auth.encoding_key).unwrap();
        assert!(matches!(auth.decode_token(&token), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn overflowing_lifetime_fails_instead_of_wrapping() {
        let auth = AuthService::new("unit-test-secret", Duration::from_secs(u64::MAX), 4);
        let err = auth
            .issue_token(&Caller::hospital(DocumentId::generate()))
            .unwrap_err();
        assert!(matches!(err, AuthError::TokenIssue(_)));
    }

    #[test]
    fn garbage_is_not_a_token() {
        assert!(service().decode_token("not.a.jwt").is_err());
    }
}
