use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::{Engine as _, engine::general_purpose};
use cookie::{Cookie, SameSite};
use hmac::{Hmac, Mac};
use mongodb::bson::oid::ObjectId;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const COOKIE_NAME: &str = "submission_tracker_session";

/// Sessions expire after a day; the whole store also dies with the process.
const SESSION_MAX_AGE_SECS: u64 = 86400;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid token format")]
    InvalidFormat,

    #[error("HMAC error: {0}")]
    Hmac(String),

    #[error("Session store lock poisoned")]
    Poisoned,

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),
}

/// Server-side session state: a signing secret generated once at process
/// start plus the map from issued token to trainer ID. A token maps to at
/// most one trainer; restarting the process invalidates every session.
pub struct SessionStore {
    secret: String,
    sessions: Mutex<HashMap<String, ObjectId>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let secret: [u8; 32] = rand::random();
        Self {
            secret: general_purpose::URL_SAFE_NO_PAD.encode(secret),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Issue a signed token bound server-side to the trainer.
    pub fn create(&self, trainer_id: ObjectId) -> Result<String, SessionError> {
        let token = generate_session_token(&self.secret)?;
        self.sessions
            .lock()
            .map_err(|_| SessionError::Poisoned)?
            .insert(token.clone(), trainer_id);
        Ok(token)
    }

    /// Resolve a presented token to its trainer ID. None for tampered,
    /// expired, or unknown tokens.
    pub fn authenticate(&self, token: &str) -> Option<ObjectId> {
        if !validate_session_token(token, &self.secret, SESSION_MAX_AGE_SECS).unwrap_or(false) {
            return None;
        }
        self.sessions.lock().ok()?.get(token).copied()
    }

    /// Drop the server-side entry. False when the token had no live session.
    pub fn destroy(&self, token: &str) -> bool {
        match self.sessions.lock() {
            Ok(mut sessions) => sessions.remove(token).is_some(),
            Err(_) => false,
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a session token with format: timestamp:nonce:signature
/// The signature is HMAC-SHA256(timestamp:nonce, secret)
fn generate_session_token(secret: &str) -> Result<String, SessionError> {
    let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let nonce: [u8; 16] = rand::random();
    let payload = format!("{}:{}", timestamp, general_purpose::URL_SAFE_NO_PAD.encode(nonce));
    let signature = sign_payload(&payload, secret)?;
    Ok(format!("{payload}:{signature}"))
}

/// True if the token carries a valid signature and has not expired.
fn validate_session_token(token: &str, secret: &str, max_age_secs: u64) -> Result<bool, SessionError> {
    let parts: Vec<&str> = token.split(':').collect();
    if parts.len() != 3 {
        return Err(SessionError::InvalidFormat);
    }

    let timestamp: u64 = parts[0].parse().map_err(|_| SessionError::InvalidFormat)?;
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    if now.saturating_sub(timestamp) > max_age_secs {
        return Ok(false);
    }

    let expected = sign_payload(&format!("{}:{}", parts[0], parts[1]), secret)?;
    Ok(parts[2] == expected)
}

fn sign_payload(payload: &str, secret: &str) -> Result<String, SessionError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|e| SessionError::Hmac(e.to_string()))?;
    mac.update(payload.as_bytes());
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
}

/// Session cookie carrying the token.
pub fn create_session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::seconds(SESSION_MAX_AGE_SECS as i64))
        .path("/")
        .build()
}

/// Clearing cookie for logout.
pub fn create_logout_cookie() -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie::time::Duration::seconds(0))
        .path("/")
        .build()
}

/// Extract the session token from a Cookie header, if present.
pub fn parse_session_cookie(cookie_header: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| Cookie::parse(pair.trim()).ok())
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}
