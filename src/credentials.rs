//! Where the session token lives between page loads.
use std::cell::RefCell;
use std::rc::Rc;

use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::Config;
use crate::models::session::SessionToken;

pub trait CredentialStore {
    fn get_token(&self) -> Option<SessionToken>;
    fn set_token(&self, token: &SessionToken);
}

/// Token kept in the browser cookie jar, readable by every page of the site.
#[derive(Debug, Clone)]
pub struct CookieStore {
    name: String,
    path: String,
}

impl CookieStore {
    pub fn new(config: &Config) -> Self {
        Self {
            name: config.token_cookie.clone(),
            path: config.cookie_path.clone(),
        }
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }
}

impl CredentialStore for CookieStore {
    fn get_token(&self) -> Option<SessionToken> {
        let cookies = Self::document()?.cookie().ok()?;
        find_cookie(&cookies, &self.name).map(SessionToken::new)
    }

    fn set_token(&self, token: &SessionToken) {
        let Some(document) = Self::document() else {
            error!("[COOKIE] No HTML document available, token not stored");
            return;
        };
        let cookie = format_cookie(&self.name, token.as_str(), &self.path);
        match document.set_cookie(&cookie) {
            Ok(()) => log!("[COOKIE] Stored session cookie '{}'", self.name),
            Err(err) => error!("[COOKIE] Failed to store session cookie: {:?}", err),
        }
    }
}

/// In-process token holder. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    token: Rc<RefCell<Option<SessionToken>>>,
}

impl MemoryStore {
    pub fn with_token(token: SessionToken) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token))),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get_token(&self) -> Option<SessionToken> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &SessionToken) {
        *self.token.borrow_mut() = Some(token.clone());
    }
}

/// Finds `name` in a `document.cookie` string. Empty values count as absent.
pub fn find_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            urlencoding::decode(value.trim())
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.trim().to_string())
        })
        .filter(|value| !value.is_empty())
}

pub fn format_cookie(name: &str, value: &str, path: &str) -> String {
    format!("{}={}; path={}", name, urlencoding::encode(value), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let cookies = "theme=dark; token=abc.def; lang=en";
        assert_eq!(find_cookie(cookies, "token").as_deref(), Some("abc.def"));
        assert_eq!(find_cookie(cookies, "missing"), None);
    }

    #[test]
    fn first_matching_cookie_wins() {
        assert_eq!(
            find_cookie("token=first;token=second", "token").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn empty_cookie_value_is_absent() {
        assert_eq!(find_cookie("token=; other=1", "token"), None);
        assert_eq!(find_cookie("", "token"), None);
    }

    #[test]
    fn cookie_value_round_trips_through_encoding() {
        let cookie = format_cookie("token", "a b;c", "/");
        assert_eq!(cookie, "token=a%20b%3Bc; path=/");
        let stored = cookie.split(';').next().unwrap().to_string();
        assert_eq!(find_cookie(&stored, "token").as_deref(), Some("a b;c"));
    }

    #[test]
    fn memory_store_clones_share_the_token() {
        let store = MemoryStore::default();
        let observer = store.clone();
        assert_eq!(observer.get_token(), None);

        store.set_token(&SessionToken::new("t-1"));
        assert_eq!(observer.get_token(), Some(SessionToken::new("t-1")));
    }
}
