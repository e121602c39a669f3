// src/auth/credentials.rs
use base64::Engine;
use serde::Deserialize;

/// What the dashboard reads out of the backend-issued JWT. The signature is
/// never checked here; the backend verifies the token on every call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Bearer credential for one caller, passed explicitly into every API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    token: String,
    claims: Option<Claims>,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let claims = decode_claims(&token);
        Self { token, claims }
    }

    /// Pulls the token from the `token` cookie, falling back to
    /// `Authorization: Bearer ...`.
    pub fn from_headers(cookie: Option<&str>, authorization: Option<&str>) -> Option<Self> {
        let from_cookie = cookie.and_then(|c| {
            c.split(';')
                .filter_map(|pair| pair.trim().split_once('='))
                .find(|(k, _)| *k == "token")
                .map(|(_, v)| v.trim().to_string())
        });

        let from_header = || {
            authorization
                .and_then(|h| h.trim().strip_prefix("Bearer "))
                .map(|t| t.trim().to_string())
        };

        from_cookie
            .filter(|t| !t.is_empty())
            .or_else(from_header)
            .filter(|t| !t.is_empty())
            .map(Self::new)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    #[cfg(test)]
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn display_name(&self) -> Option<&str> {
        let claims = self.claims.as_ref()?;
        claims
            .name
            .as_deref()
            .or(claims.email.as_deref())
            .or(claims.sub.as_deref())
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.claims.as_ref().and_then(|c| c.role.as_deref()),
            Some("admin") | Some("recruiter")
        )
    }

    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.claims
            .as_ref()
            .and_then(|c| c.exp)
            .map(|exp| exp <= now_unix)
            .unwrap_or(false)
    }
}

/// Decodes the payload segment of a JWT. Anything malformed gives `None`.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
