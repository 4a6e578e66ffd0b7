//! Credentials for the remote table.
//!
//! The consent flow itself lives outside this crate: whatever runs it hands
//! over a bearer token, and the identity (account e-mail) used to tag and
//! filter rows is either configured or looked up from the token owner.
//! Nothing here retries; a failed acquisition ends the operation.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub identity: String,
}

impl Credentials {
    /// Both parts must be present and non-blank.
    pub fn new(token: Option<String>, identity: Option<String>) -> AppResult<Self> {
        let token = non_blank(token).ok_or(AppError::NotAuthenticated)?;
        let identity = non_blank(identity).ok_or(AppError::NotAuthenticated)?;
        Ok(Self { token, identity })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub trait AuthProvider {
    fn acquire(&self) -> AppResult<Credentials>;
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: Option<String>,
}

/// Bearer token read from an environment variable; identity from config or,
/// failing that, from the userinfo endpoint.
pub struct TokenAuth {
    token: Option<String>,
    identity: Option<String>,
    userinfo_url: String,
    http: ureq::Agent,
}

impl TokenAuth {
    /// Token taken from the variable named by `token_env`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg, env::var(&cfg.token_env).ok())
    }

    pub fn new(cfg: &Config, token: Option<String>) -> Self {
        Self {
            token,
            identity: cfg.identity.clone(),
            userinfo_url: cfg.userinfo_url.clone(),
            http: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(cfg.http_timeout_secs))
                .build(),
        }
    }

    fn lookup_identity(&self, token: &str) -> AppResult<Option<String>> {
        let resp = self
            .http
            .get(&self.userinfo_url)
            .set("Authorization", &format!("Bearer {token}"))
            .call();

        match resp {
            Ok(resp) => {
                let info: UserInfo = resp
                    .into_json()
                    .map_err(|e| AppError::Transport(format!("failed to parse userinfo: {e}")))?;
                Ok(info.email)
            }
            Err(ureq::Error::Status(401, _)) | Err(ureq::Error::Status(403, _)) => {
                Err(AppError::NotAuthenticated)
            }
            Err(ureq::Error::Status(status, resp)) => Err(AppError::RemoteRequestFailed {
                status,
                message: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(t)) => Err(AppError::Transport(t.to_string())),
        }
    }
}

impl AuthProvider for TokenAuth {
    fn acquire(&self) -> AppResult<Credentials> {
        let token = non_blank(self.token.clone()).ok_or(AppError::NotAuthenticated)?;

        let identity = match non_blank(self.identity.clone()) {
            Some(id) => Some(id),
            None => self.lookup_identity(&token)?,
        };

        Credentials::new(Some(token), identity)
    }
}
