//! HTTP record sources.
//!
//! One blocking GET per logical load, performed on a spawned worker thread
//! so the event loop never blocks on the network. Completions come back as
//! [`FetchUpdate`] messages over an mpsc channel and are drained by the
//! loop on its tick. There are no retries and no caching; exactly one
//! users fetch is issued per application lifetime, and one posts fetch per
//! selected-record id change.

use crate::model::{FetchError, Post, User, UserId};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Completion message for one outbound fetch.
#[derive(Debug)]
pub enum FetchUpdate {
    /// The one-shot user-list load finished.
    Users(Result<Vec<User>, FetchError>),
    /// A posts load finished.
    Posts {
        /// The user id the request was issued for. The state layer drops
        /// completions whose id no longer matches the current selection
        /// (stale-response protection).
        user: UserId,
        /// The decoded posts, or the failure reason.
        result: Result<Vec<Post>, FetchError>,
    },
}

/// Blocking HTTP client for the users and posts endpoints.
///
/// Cheap to clone; clones share the underlying connection pool, so worker
/// threads each take a clone.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: reqwest::blocking::Client,
}

impl Fetcher {
    /// Timeout for establishing new connections. There is deliberately no
    /// overall response deadline: a hung request leaves its view pending.
    const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Build the underlying HTTP client.
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Self::CONNECT_TIMEOUT)
            .build()
            .map_err(|error| FetchError::Client(error.to_string()))?;
        Ok(Self { http })
    }

    /// Fetch and decode the user list.
    pub fn fetch_users(&self, url: &str) -> Result<Vec<User>, FetchError> {
        let body = self.get_json(url)?;
        Ok(decode_records(body, "user"))
    }

    /// Fetch and decode the posts for one user (`{base_url}?userId=<id>`).
    pub fn fetch_posts(&self, base_url: &str, user: UserId) -> Result<Vec<Post>, FetchError> {
        let url = posts_url(base_url, user)?;
        let body = self.get_json(url.as_str())?;
        Ok(decode_records(body, "post"))
    }

    /// Perform one GET and decode the body as JSON.
    ///
    /// Non-2xx statuses and transport failures are errors; the shape of
    /// the decoded value is the caller's problem (see [`decode_records`]).
    fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|error| FetchError::Request {
                url: url.to_string(),
                reason: error.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }

        response.json::<Value>().map_err(|error| FetchError::Body {
            url: url.to_string(),
            reason: error.to_string(),
        })
    }
}

/// Build the posts endpoint URL for one user.
fn posts_url(base: &str, user: UserId) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|error| FetchError::Request {
        url: base.to_string(),
        reason: error.to_string(),
    })?;
    url.query_pairs_mut()
        .append_pair("userId", &user.get().to_string());
    Ok(url)
}

/// Decode a JSON success body into records, defensively.
///
/// A body that is valid JSON but not an array (the remote answering
/// `null`, an object, a string) decodes to an empty record list, and
/// elements that do not decode as `T` are skipped. Both cases are logged
/// as warnings, not surfaced as errors: the view renders an empty table
/// instead of crashing.
pub fn decode_records<T: DeserializeOwned>(body: Value, kind: &str) -> Vec<T> {
    let Value::Array(items) = body else {
        warn!(kind, "response body is not a JSON array; treating as empty");
        return Vec::new();
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value(item) {
            Ok(record) => records.push(record),
            Err(error) => warn!(kind, index, %error, "skipping undecodable element"),
        }
    }
    records
}

/// Issue the one-shot user-list load on a worker thread.
///
/// The send fails only when the receiver is gone, i.e. the application is
/// shutting down; the completion is dropped in that case.
pub fn spawn_users_fetch(fetcher: Fetcher, url: String, tx: Sender<FetchUpdate>) {
    thread::spawn(move || {
        debug!(%url, "fetching user list");
        let result = fetcher.fetch_users(&url);
        let _ = tx.send(FetchUpdate::Users(result));
    });
}

/// Issue a posts load for one user on a worker thread.
pub fn spawn_posts_fetch(fetcher: Fetcher, base_url: String, user: UserId, tx: Sender<FetchUpdate>) {
    thread::spawn(move || {
        debug!(%base_url, user = user.get(), "fetching posts");
        let result = fetcher.fetch_posts(&base_url, user);
        let _ = tx.send(FetchUpdate::Posts { user, result });
    });
}
