//! Sign-out: expire whatever client state the browser presented.
//!
//! The server keeps no session of its own. Sign-out runs a one-shot
//! [`SessionTeardown`] over two clearers: the cookies sent with the request,
//! which are answered with expired `Set-Cookie` headers, and the browser's
//! local/session storage, which is wiped via `Clear-Site-Data`.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use mandir_core::session::{SessionTeardown, StorageClearer, TeardownOutcome};

const CLEAR_SITE_DATA: HeaderName = HeaderName::from_static("clear-site-data");

/// Cookies presented with the request.
#[derive(Debug, Default)]
pub struct PresentedCookies {
    names: Vec<String>,
    expired: Vec<String>,
}

impl PresentedCookies {
    /// Collect cookie names from every `Cookie` header.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut names: Vec<String> = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.split('=').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();
        names.sort();
        names.dedup();

        Self {
            names,
            expired: Vec::new(),
        }
    }

    /// `Set-Cookie` values that expire the cleared cookies.
    pub fn expired(&self) -> &[String] {
        &self.expired
    }
}

impl StorageClearer for PresentedCookies {
    fn name(&self) -> &'static str {
        "cookies"
    }

    fn clear(&mut self) -> usize {
        let cleared = self.names.len();
        self.expired.extend(self.names.drain(..).map(|name| {
            format!("{name}=; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Max-Age=0; Path=/")
        }));
        cleared
    }
}

/// The browser's local and session storage. Entries are not visible to the
/// server, so clearing reports zero and asks the browser to wipe them.
#[derive(Debug, Default)]
pub struct BrowserStorage {
    wipe_requested: bool,
}

impl BrowserStorage {
    pub fn wipe_requested(&self) -> bool {
        self.wipe_requested
    }
}

impl StorageClearer for BrowserStorage {
    fn name(&self) -> &'static str {
        "browser_storage"
    }

    fn clear(&mut self) -> usize {
        self.wipe_requested = true;
        0
    }
}

/// POST /api/v1/session/sign-out
pub async fn sign_out(headers: HeaderMap) -> impl IntoResponse {
    let mut cookies = PresentedCookies::from_headers(&headers);
    let mut storage = BrowserStorage::default();

    let mut teardown = SessionTeardown::new();
    let outcome = teardown.run(&mut [&mut cookies, &mut storage]);
    if let TeardownOutcome::Cleared(stores) = &outcome {
        for store in stores {
            tracing::debug!(store = store.store, removed = store.removed, "Cleared session store");
        }
    }
    tracing::info!(removed = outcome.removed(), "Session signed out");

    let mut response = HeaderMap::new();
    for value in cookies.expired() {
        if let Ok(value) = HeaderValue::from_str(value) {
            response.append(SET_COOKIE, value);
        }
    }
    if storage.wipe_requested() {
        response.insert(CLEAR_SITE_DATA, HeaderValue::from_static("\"storage\""));
    }

    (StatusCode::NO_CONTENT, response)
}
