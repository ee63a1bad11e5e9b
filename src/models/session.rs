use std::fmt;

/// Bearer credential issued by the API on login.
///
/// The value never shows up in `Debug` output, so sessions can be logged freely.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken {
    inner: String,
}

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Raw value, only for the cookie store and the `Authorization` header.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.inner)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken([REDACTED])")
    }
}

/// Authentication state of a page, fixed when the page loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Anonymous,
    Authenticated(SessionToken),
}

impl Session {
    pub fn from_token(token: Option<SessionToken>) -> Self {
        match token {
            Some(token) => Session::Authenticated(token),
            None => Session::Anonymous,
        }
    }

    pub fn token(&self) -> Option<&SessionToken> {
        match self {
            Session::Authenticated(token) => Some(token),
            Session::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }
}
