// Copyright © 2022 Nikita Dudko. All rights reserved.
// Contacts: <nikita.dudko.95@gmail.com>
// Licensed under the MIT License.

use crate::{
    auth::Credentials,
    error::error_from_api,
    json::Json,
    pagination::{pagination_from_api, Response},
    Result, DEFAULT_BASE_URL,
};

use std::{
    collections::BTreeMap,
    fs::File,
    path::Path,
    sync::atomic::{AtomicI64, Ordering},
};
use url::Url;

/// Response header carrying the number of requests left in the current window.
pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-remaining";

/// Query parameters of a request, apart from the authentication one.
pub type Params = BTreeMap<String, String>;

/// Undecoded result of [Client::do_request].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawResponse {
    pub json: Json,
    pub rate_limit_remaining: i64,
}

/// Blocking client of the v1 REST API.
///
/// The client is safe to share between threads: credentials are immutable,
/// and each call reports its own rate-limit value in the returned [Response].
#[derive(Debug)]
pub struct Client {
    http: reqwest::blocking::Client,
    credentials: Credentials,
    base_url: String,
    rate_limit_remaining: AtomicI64,
}

impl Client {
    pub fn new(credentials: Credentials) -> Client {
        Client {
            http: reqwest::blocking::Client::new(),
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit_remaining: AtomicI64::new(0),
        }
    }

    /// Points the client at another API root, e.g. a mock server.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Client {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn with_http_client(mut self, http: reqwest::blocking::Client) -> Client {
        self.http = http;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rate-limit value of the most recently completed request.
    pub fn rate_limit_remaining(&self) -> i64 {
        self.rate_limit_remaining.load(Ordering::Relaxed)
    }

    /// Builds the full URL of an endpoint given as path segments, e.g.
    /// `["tags", tag, "media", "recent"]`. Segments are percent-encoded, so a
    /// `/`, `?` or `#` in a tag or ID stays inside its segment.
    ///
    /// The authentication parameter always wins over a caller-supplied
    /// `client_id` or `access_token`. Parameters are sorted by key.
    pub fn url_for_request(&self, path: &[&str], params: &Params) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithoutBase)?
            .pop_if_empty()
            .extend(path);

        let mut query = params.clone();
        query.remove("client_id");
        query.remove("access_token");
        let (auth_key, auth_value) = self.credentials.query_param();
        query.insert(auth_key.to_string(), auth_value.to_string());

        url.query_pairs_mut().clear().extend_pairs(&query);
        Ok(url)
    }

    /// Performs a GET request and decodes the response envelope.
    ///
    /// Transport and decoding failures aren't reported: they produce an
    /// empty envelope, indistinguishable from an empty result. Only an
    /// unbuildable URL is an error, in which case nothing is sent.
    pub fn do_request(&self, path: &[&str], params: &Params) -> Result<RawResponse> {
        let url = self.url_for_request(path, params)?;
        let endpoint = url.path().to_string();
        tracing::debug!(%endpoint, "sending request");

        let (body, rate_limit_remaining) = match self.http.get(url).send() {
            Ok(response) => {
                let rate_limit_remaining = response
                    .headers()
                    .get(RATE_LIMIT_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.trim().parse().ok())
                    .unwrap_or(0);

                let body = match response.bytes() {
                    Ok(bytes) => bytes.to_vec(),
                    Err(e) => {
                        tracing::warn!(%endpoint, "failed to read response body: {}", e);
                        b"{}".to_vec()
                    }
                };
                (body, rate_limit_remaining)
            }
            Err(e) => {
                tracing::warn!(%endpoint, "request failed: {}", e);
                (b"{}".to_vec(), 0)
            }
        };

        self.rate_limit_remaining.store(rate_limit_remaining, Ordering::Relaxed);
        tracing::debug!(%endpoint, rate_limit_remaining, "received response");

        Ok(RawResponse { json: Json::from_slice(&body), rate_limit_remaining })
    }

    /// Requests `path` and maps every entry of its `data` array, keeping
    /// the server's order.
    pub(crate) fn list_request<T>(
        &self,
        path: &[&str],
        params: &Params,
        from_api: fn(&Json) -> T,
    ) -> Result<Response<Vec<T>>> {
        let raw = self.do_request(path, params)?;
        let data = raw.json.object_array("data").iter().map(from_api).collect();
        finish(raw, data)
    }

    /// Requests `path` and maps its `data` object.
    pub(crate) fn object_request<T>(
        &self,
        path: &[&str],
        params: &Params,
        from_api: fn(&Json) -> T,
    ) -> Result<Response<T>> {
        let raw = self.do_request(path, params)?;
        let data = from_api(&raw.json.object("data"));
        finish(raw, data)
    }

    /// Handles the common case of an endpoint returning a list of media.
    ///
    /// `before` and `after` are media IDs sent as `max_id` and `min_id`,
    /// `max` limits the number of items. Empty or zero values are omitted.
    pub fn generic_media_list_request(
        &self,
        path: &[&str],
        before: &str,
        after: &str,
        max: u32,
    ) -> Result<Response<Vec<crate::Media>>> {
        let mut params = Params::new();
        if max > 0 {
            params.insert("count".into(), max.to_string());
        }
        if !before.is_empty() {
            params.insert("max_id".into(), before.into());
        }
        if !after.is_empty() {
            params.insert("min_id".into(), after.into());
        }
        self.list_request(path, &params, crate::media::media_from_api)
    }

    /// Downloads `url` into `path` and returns the number of bytes written.
    /// The file is only created once the server answered with a success
    /// status.
    ///
    /// Instagram asks to respect the users' rights to their content, so
    /// don't use this to mirror other people's posts.
    pub fn download(&self, url: &str, path: &Path) -> Result<u64> {
        let mut response = self.http.get(url).send()?.error_for_status()?;
        let mut file = File::create(path)?;
        Ok(response.copy_to(&mut file)?)
    }
}

fn finish<T>(raw: RawResponse, data: T) -> Result<Response<T>> {
    if let Some(error) = error_from_api(&raw.json, raw.rate_limit_remaining) {
        return Err(error);
    }
    Ok(Response {
        data,
        pagination: pagination_from_api(&raw.json.object("pagination")),
        rate_limit_remaining: raw.rate_limit_remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::{Client, Params};
    use crate::auth::Credentials;

    #[test]
    fn client_id_query() {
        let client = Client::new(Credentials::new_client_id("abc"));
        let url = client.url_for_request(&["users", "self"], &Params::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.instagram.com/v1/users/self?client_id=abc");
        assert_eq!(url.query(), Some("client_id=abc"));
    }

    #[test]
    fn access_token_wins() {
        let credentials = Credentials { client_id: "abc".into(), access_token: "tok".into() };
        let client = Client::new(credentials);
        let url = client.url_for_request(&["users", "self"], &Params::new()).unwrap();
        assert_eq!(url.query(), Some("access_token=tok"));
    }

    #[test]
    fn params_are_sorted_and_encoded() {
        let client = Client::new(Credentials::new_client_id("abc"));
        let mut params = Params::new();
        params.insert("q".into(), "new york".into());
        params.insert("count".into(), "5".into());
        params.insert("client_id".into(), "spoofed".into());

        let url = client.url_for_request(&["users", "search"], &params).unwrap();
        assert_eq!(url.query(), Some("client_id=abc&count=5&q=new+york"));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client =
            Client::new(Credentials::new_client_id("abc")).with_base_url("http://127.0.0.1:1/v1");
        assert_eq!(client.base_url(), "http://127.0.0.1:1/v1/");
        let url = client.url_for_request(&["media", "popular"], &Params::new()).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1/v1/media/popular?client_id=abc");
    }

    #[test]
    fn segments_are_encoded() {
        let client = Client::new(Credentials::new_client_id("abc"));
        let url = |tag: &str| {
            client
                .url_for_request(&["tags", tag, "media", "recent"], &Params::new())
                .unwrap()
        };

        let query = url("a?b=c");
        assert_eq!(query.path(), "/v1/tags/a%3Fb=c/media/recent");
        assert_eq!(query.query(), Some("client_id=abc"));

        let fragment = url("#sunset");
        assert_eq!(fragment.path(), "/v1/tags/%23sunset/media/recent");
        assert_eq!(fragment.fragment(), None);

        assert_eq!(url("x/y").path(), "/v1/tags/x%2Fy/media/recent");
    }

    #[test]
    fn unparsable_base_url() {
        let client = Client::new(Credentials::new_client_id("abc")).with_base_url("not a url");
        let error = client.url_for_request(&["users", "self"], &Params::new()).unwrap_err();
        assert!(matches!(error, crate::Error::InvalidUrl(_)));
        assert!(client.do_request(&["users", "self"], &Params::new()).is_err());
    }
}
