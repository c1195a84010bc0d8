use crate::core::errors::BillmateError;
use crate::core::models::session::Session;
use crate::infrastructure::auth::AuthProvider;
use async_trait::async_trait;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // email
    pub name: String, // display name
    pub exp: usize,
}

pub struct JwtService {
    secret: String,
    ttl_secs: u64,
}

impl JwtService {
    pub fn new(secret: String, ttl_secs: u64) -> Self {
        JwtService { secret, ttl_secs }
    }

    pub fn generate_token(&self, email: &str, display_name: &str) -> Result<String, BillmateError> {
        let expiration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| (d.as_secs() + self.ttl_secs) as usize)
            .map_err(|e| BillmateError::InternalServerError(format!("Time error: {}", e)))?;

        let claims = Claims {
            sub: email.to_string(),
            name: display_name.to_string(),
            exp: expiration,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| BillmateError::InternalServerError(format!("JWT encoding error: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, BillmateError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| BillmateError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[async_trait]
impl AuthProvider for JwtService {
    async fn sign_in(&self, email: &str, display_name: &str) -> Result<Session, BillmateError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(BillmateError::invalid_input(
                "email",
                "Invalid email",
                format!("`{}` is not an email address", email),
            ));
        }
        let display_name = match display_name.trim() {
            "" => email.split('@').next().unwrap_or(email),
            name => name,
        };
        let access_token = self.generate_token(email, display_name)?;
        Ok(Session {
            email: email.to_string(),
            display_name: display_name.to_string(),
            access_token,
        })
    }

    async fn authenticate(&self, bearer_token: &str) -> Result<Session, BillmateError> {
        let claims = self.validate_token(bearer_token)?;
        Ok(Session {
            email: claims.sub,
            display_name: claims.name,
            access_token: bearer_token.to_string(),
        })
    }
}
